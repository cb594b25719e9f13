pub mod ai;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod types;
#[cfg(not(target_arch = "wasm32"))]
pub mod ui;
pub mod wasm;

pub use board::Board;
pub use error::MoveError;
pub use game::{Game, MoveOutcome};
pub use session::{Match, Seats};
pub use types::{GameState, Piece, Position};
