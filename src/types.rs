use serde::Serialize;
use tracing::warn;

pub const BOARD_WIDTH: usize = 8;
pub const BOARD_LEN: usize = BOARD_WIDTH * BOARD_WIDTH;

/// One side's colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum Piece {
    #[display("WHITE")]
    White,
    #[display("BLACK")]
    Black,
}

impl Piece {
    pub fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Cell code used in `GameState::board`: 1 = black, 2 = white.
    pub fn code(self) -> u8 {
        match self {
            Self::Black => 1,
            Self::White => 2,
        }
    }

    /// Parses `"WHITE"` / `"BLACK"`. Anything else is logged and ignored.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "WHITE" => Some(Self::White),
            "BLACK" => Some(Self::Black),
            _ => {
                warn!(label, "unknown piece label");
                None
            }
        }
    }
}

/// A board coordinate. Only constructible on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Returns `None` when either coordinate is off the board.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_WIDTH && (col as usize) < BOARD_WIDTH {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        if idx < BOARD_LEN {
            Some(Self {
                row: (idx / BOARD_WIDTH) as u8,
                col: (idx % BOARD_WIDTH) as u8,
            })
        } else {
            None
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    pub fn index(self) -> usize {
        self.row as usize * BOARD_WIDTH + self.col as usize
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file = (b'a' + self.col) as char;
        write!(f, "{file}{}", self.row + 1)
    }
}

/// Snapshot of a game handed to renderers and the browser binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Row-major cells: 0 = empty, 1 = black, 2 = white.
    pub board: Vec<u8>,
    pub turn: Piece,
    pub is_game_over: bool,
    pub legal_moves: Vec<Position>,
    /// Squares flipped by the last committed move.
    pub flipped: Vec<Position>,
    /// `true` when the side that should have moved next had to pass.
    pub is_pass: bool,
    pub black_count: u8,
    pub white_count: u8,
}
