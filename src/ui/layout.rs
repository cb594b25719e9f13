use eframe::egui::{Color32, Pos2, Rect, pos2, vec2};

use crate::types::{BOARD_WIDTH, Piece, Position};

pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
pub const RED: Color32 = Color32::from_rgb(255, 0, 0);
pub const FELT: Color32 = Color32::from_rgb(0, 192, 0);

const PIECE_RADIUS_RATIO: f32 = 0.8;
const HINT_INSET: f32 = 2.0;

pub fn piece_color(piece: Piece) -> Color32 {
    match piece {
        Piece::Black => BLACK,
        Piece::White => WHITE,
    }
}

/// Maps between screen space and board squares for a square board drawn at
/// `origin` with side `size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    origin: Pos2,
    size: f32,
}

impl BoardLayout {
    pub fn new(origin: Pos2, size: f32) -> Self {
        Self { origin, size }
    }

    /// Largest square board that fits in `rect`, anchored at its top-left.
    pub fn fit(rect: Rect) -> Self {
        Self::new(rect.min, rect.width().min(rect.height()))
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.origin, vec2(self.size, self.size))
    }

    pub fn scale(&self) -> f32 {
        self.size / BOARD_WIDTH as f32
    }

    pub fn piece_radius(&self) -> f32 {
        self.scale() / 2.0 * PIECE_RADIUS_RATIO
    }

    /// Square under a pointer position; `None` outside the board.
    pub fn square_at(&self, pointer: Pos2) -> Option<Position> {
        let local = pointer - self.origin;
        if local.x < 0.0 || local.y < 0.0 {
            return None;
        }
        let col = (local.x / self.scale()).floor();
        let row = (local.y / self.scale()).floor();
        if col >= BOARD_WIDTH as f32 || row >= BOARD_WIDTH as f32 {
            return None;
        }
        Position::new(row as u8, col as u8)
    }

    pub fn square_center(&self, pos: Position) -> Pos2 {
        let half = self.scale() / 2.0;
        pos2(
            self.origin.x + pos.col() as f32 * self.scale() + half,
            self.origin.y + pos.row() as f32 * self.scale() + half,
        )
    }

    /// Outline drawn around a legal move.
    pub fn hint_rect(&self, pos: Position) -> Rect {
        let corner = pos2(
            self.origin.x + pos.col() as f32 * self.scale() + HINT_INSET,
            self.origin.y + pos.row() as f32 * self.scale() + HINT_INSET,
        );
        let side = self.scale() - 3.0;
        Rect::from_min_size(corner, vec2(side, side))
    }

    /// Offsets of the 9 grid lines along either axis.
    pub fn grid_offsets(&self) -> impl Iterator<Item = f32> + '_ {
        (0..=BOARD_WIDTH).map(move |i| i as f32 * self.scale())
    }
}
