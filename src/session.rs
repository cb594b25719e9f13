use tracing::{debug, info, warn};
use web_time::{Duration, Instant};

use crate::ai::{HumanPlayer, Player, RandomPlayer};
use crate::game::{Game, MoveOutcome};
use crate::types::{Piece, Position};

pub const DEFAULT_AI_DELAY: Duration = Duration::from_millis(300);

/// Which colours are controlled by the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Seats {
    /// Human plays white (moves first), the computer plays black.
    #[default]
    White,
    /// Human plays black.
    Black,
    /// Two humans share the mouse.
    Both,
    /// Computer against computer.
    #[value(name = "none")]
    Computer,
}

impl Seats {
    /// Parses a seats label; unknown labels are logged and the default is
    /// used.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "both" => Self::Both,
            "none" => Self::Computer,
            _ => match Piece::from_label(label) {
                Some(Piece::White) => Self::White,
                Some(Piece::Black) => Self::Black,
                None => {
                    warn!(label, "unknown seats label, human plays white");
                    Self::default()
                }
            },
        }
    }

    pub fn is_human(self, piece: Piece) -> bool {
        match self {
            Self::White => piece == Piece::White,
            Self::Black => piece == Piece::Black,
            Self::Both => true,
            Self::Computer => false,
        }
    }
}

/// A game plus one player per colour.
pub struct Match {
    game: Game,
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    ai_delay: Duration,
    turn_started: Instant,
}

impl Match {
    pub fn new(white: Box<dyn Player>, black: Box<dyn Player>) -> Self {
        Self {
            game: Game::new(),
            white,
            black,
            ai_delay: DEFAULT_AI_DELAY,
            turn_started: Instant::now(),
        }
    }

    /// Humans where `seats` says so, random players elsewhere. A seed makes
    /// the computer's choices reproducible.
    pub fn with_seats(seats: Seats, seed: Option<u64>) -> Self {
        let seat = |piece: Piece| -> Box<dyn Player> {
            if seats.is_human(piece) {
                Box::new(HumanPlayer::new())
            } else {
                match seed {
                    // Distinct streams per colour in computer-vs-computer games.
                    Some(seed) => Box::new(RandomPlayer::with_seed(seed ^ piece.code() as u64)),
                    None => Box::new(RandomPlayer::new()),
                }
            }
        };
        Self::new(seat(Piece::White), seat(Piece::Black))
    }

    pub fn with_ai_delay(mut self, delay: Duration) -> Self {
        self.ai_delay = delay;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn ai_delay(&self) -> Duration {
        self.ai_delay
    }

    /// `true` when the side to move waits for pointer input.
    pub fn awaiting_click(&self) -> bool {
        !self.game.is_over() && self.current().is_interactive()
    }

    /// Routes a click to the side to move. Clicks while the computer is to
    /// move are dropped.
    pub fn click(&mut self, pos: Position) -> bool {
        if self.game.is_over() {
            debug!(%pos, "click after game over ignored");
            return false;
        }
        let accepted = self.current_mut().submit(pos);
        if !accepted {
            debug!(%pos, "click ignored, computer to move");
        }
        accepted
    }

    /// Polls the side to move and commits its move if it is legal.
    pub fn tick(&mut self, now: Instant) -> Option<MoveOutcome> {
        if self.game.is_over() {
            return None;
        }

        let player = self.current();
        if !player.is_interactive() && now.saturating_duration_since(self.turn_started) < self.ai_delay
        {
            return None;
        }

        let turn = self.game.turn();
        let candidate = match turn {
            Piece::White => self.white.next_move(&self.game),
            Piece::Black => self.black.next_move(&self.game),
        }?;

        match self.game.play(candidate) {
            Ok(outcome) => {
                self.turn_started = now;
                if outcome.game_over {
                    let (black, white) = self.game.board().count();
                    info!(black, white, winner = ?self.game.winner(), "match finished");
                }
                Some(outcome)
            }
            Err(err) => {
                debug!(%turn, player = self.current().name(), %err, "move ignored");
                None
            }
        }
    }

    /// Time until a paced player may move, for scheduling the next repaint.
    pub fn next_poll_in(&self, now: Instant) -> Option<Duration> {
        if self.game.is_over() || self.current().is_interactive() {
            return None;
        }
        Some(
            self.ai_delay
                .saturating_sub(now.saturating_duration_since(self.turn_started)),
        )
    }

    pub fn restart(&mut self) {
        info!("new game");
        self.game = Game::new();
        self.white.reset();
        self.black.reset();
        self.turn_started = Instant::now();
    }

    fn current(&self) -> &dyn Player {
        match self.game.turn() {
            Piece::White => self.white.as_ref(),
            Piece::Black => self.black.as_ref(),
        }
    }

    fn current_mut(&mut self) -> &mut dyn Player {
        match self.game.turn() {
            Piece::White => self.white.as_mut(),
            Piece::Black => self.black.as_mut(),
        }
    }
}
