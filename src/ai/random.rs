use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use super::Player;
use crate::game::Game;
use crate::types::Position;

/// Picks uniformly among the legal moves.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn next_move(&mut self, game: &Game) -> Option<Position> {
        let choice = game.legal_moves().choose(&mut self.rng).copied();
        if let Some(pos) = choice {
            debug!(%pos, options = game.legal_moves().len(), "random move chosen");
        }
        choice
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::board::Board;
    use crate::types::Piece;

    #[test]
    fn always_picks_a_legal_move() {
        let game = Game::new();
        let mut player = RandomPlayer::with_seed(7);

        for _ in 0..32 {
            let pos = player.next_move(&game).unwrap();
            assert!(game.is_legal(pos));
        }
    }

    #[test]
    fn eventually_covers_every_legal_move() {
        let game = Game::new();
        let mut player = RandomPlayer::with_seed(11);

        let seen: HashSet<Position> = (0..200).filter_map(|_| player.next_move(&game)).collect();

        assert_eq!(seen.len(), game.legal_moves().len());
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let game = Game::new();
        let mut a = RandomPlayer::with_seed(3);
        let mut b = RandomPlayer::with_seed(3);

        for _ in 0..16 {
            assert_eq!(a.next_move(&game), b.next_move(&game));
        }
    }

    #[test]
    fn no_move_once_the_game_is_over() {
        let board = Board::from_bitboards(0, u64::MAX);
        let game = Game::from_board(board, Piece::Black);
        let mut player = RandomPlayer::with_seed(1);

        assert!(game.is_over());
        assert_eq!(player.next_move(&game), None);
    }
}
