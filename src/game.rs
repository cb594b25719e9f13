use tracing::{debug, info, instrument};

use crate::board::{Board, mask_to_positions};
use crate::error::MoveError;
use crate::types::{GameState, Piece, Position};

/// Result of a committed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub placed: Position,
    pub flipped: Vec<Position>,
    /// The opponent had no reply, so the mover goes again.
    pub passed: bool,
    pub game_over: bool,
}

/// Turn and end-of-game state machine around a [`Board`].
///
/// White moves first. After every committed move the turn passes to the
/// opponent; a side without legal moves is skipped, and when neither side
/// can move the game is over.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Piece,
    is_game_over: bool,
    is_pass: bool,
    legal_moves: Vec<Position>,
    flipped: Vec<Position>,
}

impl Game {
    pub fn new() -> Self {
        Self::from_board(Board::new(), Piece::White)
    }

    /// Starts from an arbitrary position. If `turn` cannot move the turn is
    /// handed over straight away, and the game may already be over.
    pub fn from_board(board: Board, turn: Piece) -> Self {
        let mut game = Self {
            board,
            turn,
            is_game_over: false,
            is_pass: false,
            legal_moves: Vec::new(),
            flipped: Vec::new(),
        };
        game.generate_legal_moves();
        if game.legal_moves.is_empty() {
            game.hand_over_turn();
        }
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Piece {
        self.turn
    }

    pub fn is_over(&self) -> bool {
        self.is_game_over
    }

    /// Legal moves for the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> &[Position] {
        &self.legal_moves
    }

    pub fn is_legal(&self, pos: Position) -> bool {
        !self.is_game_over && self.legal_moves.contains(&pos)
    }

    pub fn cell(&self, pos: Position) -> Option<Piece> {
        self.board.cell(pos)
    }

    /// Commits a move for the side to move.
    #[instrument(level = "debug", skip(self), fields(turn = %self.turn))]
    pub fn make_move(&mut self, row: u8, col: u8) -> Result<MoveOutcome, MoveError> {
        if self.is_game_over {
            return Err(MoveError::GameOver);
        }
        let pos = Position::new(row, col).ok_or(MoveError::OutOfRange { row, col })?;
        if self.board.cell(pos).is_some() {
            return Err(MoveError::Occupied(pos));
        }

        let flips = self.board.place(pos, self.turn);
        if flips == 0 {
            return Err(MoveError::NoCapture(pos));
        }

        let mover = self.turn;
        self.flipped = mask_to_positions(flips);
        debug!(%mover, %pos, flipped = self.flipped.len(), "move committed");

        self.turn = mover.opponent();
        self.is_pass = false;
        self.generate_legal_moves();
        if self.legal_moves.is_empty() {
            self.hand_over_turn();
        }

        Ok(MoveOutcome {
            placed: pos,
            flipped: self.flipped.clone(),
            passed: self.is_pass,
            game_over: self.is_game_over,
        })
    }

    /// Convenience wrapper over [`Game::make_move`] for a known position.
    pub fn play(&mut self, pos: Position) -> Result<MoveOutcome, MoveError> {
        self.make_move(pos.row(), pos.col())
    }

    /// Winner by piece count; `None` while playing or on a draw.
    pub fn winner(&self) -> Option<Piece> {
        if !self.is_game_over {
            return None;
        }
        let (black, white) = self.board.count();
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Piece::Black),
            std::cmp::Ordering::Less => Some(Piece::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn state(&self) -> GameState {
        let (black_count, white_count) = self.board.count();
        GameState {
            board: self.board.to_array().to_vec(),
            turn: self.turn,
            is_game_over: self.is_game_over,
            legal_moves: self.legal_moves.clone(),
            flipped: self.flipped.clone(),
            is_pass: self.is_pass,
            black_count,
            white_count,
        }
    }

    // The side to move is stuck: give the turn back, and end the game if
    // that side is stuck too.
    fn hand_over_turn(&mut self) {
        debug!(stuck = %self.turn, "no legal moves, passing");
        self.turn = self.turn.opponent();
        self.is_pass = true;
        self.generate_legal_moves();
        if self.legal_moves.is_empty() {
            self.is_game_over = true;
            let (black, white) = self.board.count();
            info!(black, white, "game over");
        }
    }

    fn generate_legal_moves(&mut self) {
        self.legal_moves = self.board.legal_positions(self.turn);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: u8, col: u8) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn initial_state_is_correct() {
        let game = Game::new();
        let state = game.state();

        assert_eq!(state.turn, Piece::White);
        assert_eq!(state.black_count, 2);
        assert_eq!(state.white_count, 2);
        assert!(!state.is_game_over);
        assert!(!state.is_pass);
        assert!(state.flipped.is_empty());
        assert_eq!(
            game.legal_moves(),
            &[at(2, 3), at(3, 2), at(4, 5), at(5, 4)]
        );
    }

    #[test]
    fn illegal_moves_are_rejected_without_side_effects() {
        let mut game = Game::new();
        let before = *game.board();

        assert_eq!(game.make_move(0, 0), Err(MoveError::NoCapture(at(0, 0))));
        assert_eq!(game.make_move(3, 3), Err(MoveError::Occupied(at(3, 3))));
        assert_eq!(
            game.make_move(8, 1),
            Err(MoveError::OutOfRange { row: 8, col: 1 })
        );
        assert_eq!(*game.board(), before);
        assert_eq!(game.turn(), Piece::White);
    }

    #[test]
    fn legal_move_flips_and_passes_turn() {
        let mut game = Game::new();

        let outcome = game.make_move(2, 3).unwrap();

        assert_eq!(outcome.placed, at(2, 3));
        assert_eq!(outcome.flipped, vec![at(3, 3)]);
        assert!(!outcome.passed);
        assert_eq!(game.turn(), Piece::Black);
        assert_eq!(game.legal_moves(), game.board().legal_positions(Piece::Black).as_slice());
        assert_eq!(game.board().count(), (1, 4));
    }

    #[test]
    fn side_without_moves_is_skipped() {
        // After white takes a1, black's last piece on f6 has no move, so
        // white goes again.
        let board = Board::from_rows(&[
            ".BW.....",
            "........",
            "........",
            "........",
            "........",
            "WWWWWB..",
            "........",
            "........",
        ]);
        let mut game = Game::from_board(board, Piece::White);

        let outcome = game.make_move(0, 0).unwrap();

        assert!(outcome.passed);
        assert!(!outcome.game_over);
        assert_eq!(game.turn(), Piece::White);
        assert_eq!(game.legal_moves(), &[at(5, 6)]);
        assert!(game.state().is_pass);
    }

    #[test]
    fn both_sides_stuck_ends_the_game() {
        let board = Board::from_rows(&[
            ".BW.....",
            "WWWWWWWW",
            "WWWWWWWW",
            "WWWWWWWW",
            "WWWWWWWW",
            "WWWWWWWW",
            "WWWWWWWW",
            "WWWWWWWW",
        ]);
        let mut game = Game::from_board(board, Piece::White);

        let outcome = game.make_move(0, 0).unwrap();

        assert!(outcome.game_over);
        assert!(game.is_over());
        assert!(game.legal_moves().is_empty());
        assert_eq!(game.winner(), Some(Piece::White));
        assert_eq!(game.make_move(0, 3), Err(MoveError::GameOver));
    }

    #[test]
    fn from_board_hands_the_move_to_the_side_that_can_play() {
        let board = Board::from_rows(&[
            "BW......",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ]);

        let game = Game::from_board(board, Piece::White);

        assert_eq!(game.turn(), Piece::Black);
        assert_eq!(game.legal_moves(), &[at(0, 2)]);
        assert!(!game.is_over());
        assert!(game.state().is_pass);
    }

    #[test]
    fn from_board_with_no_moves_for_anyone_is_already_over() {
        let board = Board::from_rows(&[
            "W.......",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ]);

        let game = Game::from_board(board, Piece::White);

        assert!(game.is_over());
        assert!(game.legal_moves().is_empty());
        assert_eq!(game.winner(), Some(Piece::White));
    }

    #[test]
    fn winner_is_unknown_while_playing() {
        assert_eq!(Game::new().winner(), None);
    }
}
