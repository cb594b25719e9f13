use crate::types::Position;

/// Why a move was refused. The game loop treats every variant as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    #[display("square ({row}, {col}) is off the board")]
    OutOfRange { row: u8, col: u8 },
    #[display("square {_0} is already occupied")]
    Occupied(#[error(not(source))] Position),
    #[display("move at {_0} captures nothing")]
    NoCapture(#[error(not(source))] Position),
    #[display("game is already over")]
    GameOver,
}
