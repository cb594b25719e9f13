//! Browser binding: the same match, driven by a JS host that draws the
//! board from [`GameState`] and forwards canvas clicks.

use wasm_bindgen::prelude::*;
use web_time::{Duration, Instant};

use crate::session::{Match, Seats};
use crate::types::{GameState, Position};

#[wasm_bindgen]
pub struct WasmGame {
    session: Match,
}

#[wasm_bindgen]
impl WasmGame {
    /// `seats` is `"white"`, `"black"`, `"both"` or `"none"`.
    #[wasm_bindgen(constructor)]
    pub fn new(seats: &str, seed: u64, ai_delay_ms: u32) -> WasmGame {
        let session = Match::with_seats(Seats::from_label(seats), Some(seed))
            .with_ai_delay(Duration::from_millis(ai_delay_ms as u64));
        WasmGame { session }
    }

    /// Returns `false` when the click was off the board or not expected.
    pub fn click(&mut self, row: u8, col: u8) -> bool {
        match Position::new(row, col) {
            Some(pos) => self.session.click(pos),
            None => false,
        }
    }

    /// Advances the match; `true` when a move was committed.
    pub fn tick(&mut self) -> bool {
        self.session.tick(Instant::now()).is_some()
    }

    pub fn restart(&mut self) {
        self.session.restart();
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.session.game().is_over()
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.snapshot()).map_err(JsValue::from)
    }
}

impl WasmGame {
    fn snapshot(&self) -> GameState {
        self.session.game().state()
    }
}
