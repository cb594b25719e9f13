mod human;
mod random;

pub use human::HumanPlayer;
pub use random::RandomPlayer;

use crate::game::Game;
use crate::types::Position;

/// A source of moves for one colour.
pub trait Player {
    /// Returns the move this player wants to make, if it has one ready.
    /// The driver validates it; an illegal suggestion is ignored.
    fn next_move(&mut self, game: &Game) -> Option<Position>;

    /// Offers a pointer click. Returns `false` when the player does not
    /// take input.
    fn submit(&mut self, _pos: Position) -> bool {
        false
    }

    /// Interactive players are polled every frame; others are paced.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Drops any input buffered for the previous game.
    fn reset(&mut self) {}

    fn name(&self) -> &str;
}
