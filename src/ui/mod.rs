mod layout;

pub use layout::BoardLayout;

use eframe::egui::{self, Key, Painter, Sense, Stroke, pos2};
use tracing::debug;
use web_time::Instant;

use crate::session::Match;
use crate::types::{BOARD_LEN, Position};
use layout::{BLACK, FELT, RED, piece_color};

pub struct OthelloApp {
    session: Match,
    title: String,
}

impl OthelloApp {
    pub fn new(session: Match) -> Self {
        Self {
            session,
            title: String::new(),
        }
    }

    fn window_title(&self) -> String {
        let game = self.session.game();
        if game.is_over() {
            "Othello - game over".to_string()
        } else {
            format!("Othello - {} to move", game.turn())
        }
    }

    fn draw(&self, painter: &Painter, layout: &BoardLayout) {
        let rect = layout.rect();
        let game = self.session.game();
        let line = Stroke::new(1.0, BLACK);

        painter.rect_filled(rect, 0.0, FELT);
        for offset in layout.grid_offsets() {
            painter.line_segment(
                [pos2(rect.min.x, rect.min.y + offset), pos2(rect.max.x, rect.min.y + offset)],
                line,
            );
            painter.line_segment(
                [pos2(rect.min.x + offset, rect.min.y), pos2(rect.min.x + offset, rect.max.y)],
                line,
            );
        }

        if game.is_over() {
            let cross = Stroke::new(1.0, RED);
            painter.line_segment([rect.left_top(), rect.right_bottom()], cross);
            painter.line_segment([rect.right_top(), rect.left_bottom()], cross);
        }

        let hint = Stroke::new(2.0, RED);
        for &pos in game.legal_moves() {
            painter.rect_stroke(layout.hint_rect(pos), 0.0, hint);
        }

        for pos in (0..BOARD_LEN).filter_map(Position::from_index) {
            if let Some(piece) = game.cell(pos) {
                painter.circle_filled(
                    layout.square_center(pos),
                    layout.piece_radius(),
                    piece_color(piece),
                );
            }
        }
    }
}

impl eframe::App for OthelloApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(Key::R) || i.key_pressed(Key::N)) {
            self.session.restart();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
                let layout = BoardLayout::fit(response.rect);

                if response.clicked() {
                    match response
                        .interact_pointer_pos()
                        .and_then(|p| layout.square_at(p))
                    {
                        Some(pos) => {
                            self.session.click(pos);
                        }
                        None => debug!("click outside the board"),
                    }
                }

                self.session.tick(Instant::now());
                self.draw(&painter, &layout);
            });

        let title = self.window_title();
        if title != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.title = title;
        }

        if let Some(wait) = self.session.next_poll_in(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
