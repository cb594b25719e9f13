use othello::ai::{Player, RandomPlayer};
use othello::{Board, Game, Piece, Position};

const DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

fn squares() -> impl Iterator<Item = Position> {
    (0..64).filter_map(Position::from_index)
}

fn step(pos: Position, (dr, dc): (i8, i8)) -> Option<Position> {
    let row = pos.row() as i8 + dr;
    let col = pos.col() as i8 + dc;
    if row < 0 || col < 0 {
        return None;
    }
    Position::new(row as u8, col as u8)
}

/// Square-by-square walk, independent of the bitboard code.
fn captured(board: &Board, pos: Position, mover: Piece) -> Vec<Position> {
    if board.cell(pos).is_some() {
        return Vec::new();
    }
    let mut out = Vec::new();
    for dir in DIRECTIONS {
        let mut run = Vec::new();
        let mut cursor = step(pos, dir);
        while let Some(p) = cursor {
            if board.cell(p) != Some(mover.opponent()) {
                break;
            }
            run.push(p);
            cursor = step(p, dir);
        }
        if !run.is_empty() && cursor.and_then(|p| board.cell(p)) == Some(mover) {
            out.extend(run);
        }
    }
    out.sort_by_key(|p| p.index());
    out
}

fn naive_legal_moves(board: &Board, mover: Piece) -> Vec<Position> {
    squares()
        .filter(|&p| !captured(board, p, mover).is_empty())
        .collect()
}

fn play_out(seed: u64) -> Game {
    let mut game = Game::new();
    let mut white = RandomPlayer::with_seed(seed);
    let mut black = RandomPlayer::with_seed(seed.wrapping_add(1));

    while !game.is_over() {
        let mover = game.turn();
        let before = *game.board();
        assert_eq!(game.legal_moves(), naive_legal_moves(&before, mover).as_slice());

        let player: &mut dyn Player = match mover {
            Piece::White => &mut white,
            Piece::Black => &mut black,
        };
        let pos = player.next_move(&game).expect("side to move has a legal move");
        let expected = captured(&before, pos, mover);

        let outcome = game.play(pos).unwrap();

        assert_eq!(outcome.flipped, expected);
        for p in squares() {
            let now = game.board().cell(p);
            if p == pos || expected.contains(&p) {
                assert_eq!(now, Some(mover), "square {p} should belong to {mover}");
            } else {
                assert_eq!(now, before.cell(p), "square {p} changed without capture");
            }
        }

        if outcome.passed && !outcome.game_over {
            assert_eq!(game.turn(), mover);
            assert!(naive_legal_moves(game.board(), mover.opponent()).is_empty());
        }
    }

    game
}

#[test]
fn random_games_follow_the_rules_to_the_end() {
    for seed in 0..20 {
        let game = play_out(seed);
        let board = game.board();

        assert!(naive_legal_moves(board, Piece::White).is_empty());
        assert!(naive_legal_moves(board, Piece::Black).is_empty());
        assert!(game.legal_moves().is_empty());
    }
}

#[test]
fn finished_game_refuses_further_moves() {
    let mut game = play_out(99);

    for pos in squares() {
        assert!(game.play(pos).is_err());
    }
}
