use tracing::debug;

use super::Player;
use crate::game::Game;
use crate::types::Position;

/// Relays the latest click. Each click is handed out at most once.
#[derive(Debug, Default, Clone)]
pub struct HumanPlayer {
    pending: Option<Position>,
}

impl HumanPlayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Player for HumanPlayer {
    fn next_move(&mut self, _game: &Game) -> Option<Position> {
        self.pending.take()
    }

    fn submit(&mut self, pos: Position) -> bool {
        debug!(%pos, "click registered");
        self.pending = Some(pos);
        true
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn reset(&mut self) {
        self.pending = None;
    }

    fn name(&self) -> &str {
        "human"
    }
}
