use clap::Parser;
use web_time::Duration;

use crate::session::{Match, Seats};

pub const DEFAULT_WINDOW_SIZE: f32 = 504.0;

/// Othello against a random-move opponent
#[derive(Parser, Debug, Clone)]
#[command(name = "othello")]
#[command(about = "Two-player Othello with a random computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Which colours are played with the mouse
    #[arg(long, value_enum, default_value_t = Seats::White)]
    pub seats: Seats,

    /// Seed for the computer's move choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause before each computer move, in milliseconds
    #[arg(long, default_value_t = 300)]
    pub ai_delay_ms: u64,

    /// Side length of the square window, in logical pixels
    #[arg(long, default_value_t = DEFAULT_WINDOW_SIZE, value_parser = parse_window_size)]
    pub window_size: f32,
}

impl Cli {
    pub fn build_match(&self) -> Match {
        Match::with_seats(self.seats, self.seed)
            .with_ai_delay(Duration::from_millis(self.ai_delay_ms))
    }
}

fn parse_window_size(raw: &str) -> Result<f32, String> {
    let size: f32 = raw
        .parse()
        .map_err(|e| format!("`{raw}` is not a number: {e}"))?;
    if size.is_finite() && size >= 64.0 {
        Ok(size)
    } else {
        Err(format!("window size must be at least 64, got {raw}"))
    }
}
