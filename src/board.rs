use tracing::warn;

use crate::types::{BOARD_LEN, BOARD_WIDTH, Piece, Position};

const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Othello board state represented by two disjoint bitboards.
///
/// Bit `row * 8 + col` is set in `black` or `white` when that square holds
/// a piece of that colour; a square set in neither is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    black: u64,
    white: u64,
}

impl Board {
    /// Creates the opening position:
    /// d4=black, e4=white, d5=white, e5=black.
    pub fn new() -> Self {
        Self {
            black: bit(27) | bit(36),
            white: bit(28) | bit(35),
        }
    }

    /// Builds a board from raw occupancy masks. Squares claimed by both
    /// masks are kept black.
    pub fn from_bitboards(black: u64, white: u64) -> Self {
        Self {
            black,
            white: white & !black,
        }
    }

    /// Builds a board from eight rows of `B`, `W` and `.`.
    /// Unknown characters are logged and left empty.
    pub fn from_rows(rows: &[&str; BOARD_WIDTH]) -> Self {
        let mut black = 0u64;
        let mut white = 0u64;

        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().take(BOARD_WIDTH).enumerate() {
                let square = bit(row * BOARD_WIDTH + col);
                match ch {
                    'B' | 'b' => black |= square,
                    'W' | 'w' => white |= square,
                    '.' => {}
                    other => warn!(row, col, piece = %other, "unknown piece label"),
                }
            }
        }

        Self { black, white }
    }

    pub fn cell(&self, pos: Position) -> Option<Piece> {
        let square = bit(pos.index());
        if self.black & square != 0 {
            Some(Piece::Black)
        } else if self.white & square != 0 {
            Some(Piece::White)
        } else {
            None
        }
    }

    /// Returns the legal move mask for the given side.
    pub fn legal_moves(&self, piece: Piece) -> u64 {
        let (me, opp) = self.sides(piece);
        let occupied = me | opp;
        let mut legal = 0u64;

        for pos in 0..BOARD_LEN {
            let move_bit = bit(pos);
            if (occupied & move_bit) != 0 {
                continue;
            }
            if Self::collect_flips(pos, me, opp) != 0 {
                legal |= move_bit;
            }
        }

        legal
    }

    /// Legal moves as positions, in square order.
    pub fn legal_positions(&self, piece: Piece) -> Vec<Position> {
        mask_to_positions(self.legal_moves(piece))
    }

    /// Returns the mask of squares a move at `pos` would flip.
    /// Zero means the move is illegal.
    pub fn flips(&self, pos: Position, piece: Piece) -> u64 {
        let (me, opp) = self.sides(piece);
        Self::collect_flips(pos.index(), me, opp)
    }

    pub fn is_legal(&self, pos: Position, piece: Piece) -> bool {
        self.flips(pos, piece) != 0
    }

    /// Places one piece and flips captured pieces.
    /// Returns the flipped mask. Returns 0 when the move is illegal, in
    /// which case the board is unchanged.
    pub fn place(&mut self, pos: Position, piece: Piece) -> u64 {
        let (me, opp) = self.sides(piece);

        let flips = Self::collect_flips(pos.index(), me, opp);
        if flips == 0 {
            return 0;
        }

        let next_me = me | bit(pos.index()) | flips;
        let next_opp = opp & !flips;

        match piece {
            Piece::Black => {
                self.black = next_me;
                self.white = next_opp;
            }
            Piece::White => {
                self.white = next_me;
                self.black = next_opp;
            }
        }

        flips
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.black.count_ones() as u8, self.white.count_ones() as u8)
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        let (black_count, white_count) = self.count();
        BOARD_LEN as u8 - black_count - white_count
    }

    /// Converts the board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; BOARD_LEN] {
        let mut board = [0u8; BOARD_LEN];
        for (pos, cell) in board.iter_mut().enumerate() {
            let square = bit(pos);
            *cell = if (self.black & square) != 0 {
                Piece::Black.code()
            } else if (self.white & square) != 0 {
                Piece::White.code()
            } else {
                0
            };
        }
        board
    }

    fn sides(&self, piece: Piece) -> (u64, u64) {
        match piece {
            Piece::Black => (self.black, self.white),
            Piece::White => (self.white, self.black),
        }
    }

    // Walks each direction over opponent pieces; a run only counts when it
    // is closed by one of `me`.
    fn collect_flips(pos: usize, me: u64, opp: u64) -> u64 {
        if pos >= BOARD_LEN {
            return 0;
        }

        let move_bit = bit(pos);
        if ((me | opp) & move_bit) != 0 {
            return 0;
        }

        let (row, col) = pos_to_row_col(pos);
        let mut flips = 0u64;

        for (dr, dc) in DIRECTIONS {
            let mut r = row + dr;
            let mut c = col + dc;
            let mut line = 0u64;

            while in_bounds(r, c) {
                let square = bit((r as usize) * BOARD_WIDTH + c as usize);
                if (opp & square) != 0 {
                    line |= square;
                } else {
                    if (me & square) != 0 {
                        flips |= line;
                    }
                    break;
                }

                r += dr;
                c += dc;
            }
        }

        flips
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Expands a square mask into positions, lowest index first.
pub fn mask_to_positions(mask: u64) -> Vec<Position> {
    let mut bits = mask;
    let mut out = Vec::with_capacity(bits.count_ones() as usize);

    while bits != 0 {
        let idx = bits.trailing_zeros() as usize;
        if let Some(pos) = Position::from_index(idx) {
            out.push(pos);
        }
        bits &= bits - 1;
    }

    out
}

fn bit(pos: usize) -> u64 {
    if pos < BOARD_LEN { 1u64 << pos } else { 0 }
}

fn pos_to_row_col(pos: usize) -> (i32, i32) {
    ((pos / BOARD_WIDTH) as i32, (pos % BOARD_WIDTH) as i32)
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_WIDTH as i32).contains(&row) && (0..BOARD_WIDTH as i32).contains(&col)
}
