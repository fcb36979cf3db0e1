//! WASM bindings for gobblet-core
//!
//! Exposes a [`Session`] to a browser UI. Moves travel as notation strings
//! (`"S(1,1)"`, `"(0,0)->(2,2)"`), state as a serialized [`Snapshot`].

use wasm_bindgen::prelude::*;

use crate::{Difficulty, GameConfig, Mode, Move, Session, StartingPlayer, Turn};

fn to_js<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM-friendly wrapper around Session
#[wasm_bindgen]
pub struct WasmGame {
    inner: Session,
}

#[wasm_bindgen]
impl WasmGame {
    /// Start a game from page parameters, e.g. ("single", "hardest", "first").
    /// The seed comes from JS so the bot does not need an OS RNG.
    #[wasm_bindgen(constructor)]
    pub fn new(mode: &str, difficulty: &str, start: &str, seed: u64) -> Result<WasmGame, JsValue> {
        let config = GameConfig {
            mode: mode.parse::<Mode>().map_err(to_js)?,
            difficulty: difficulty.parse::<Difficulty>().map_err(to_js)?,
            starting_player: start.parse::<StartingPlayer>().map_err(to_js)?,
        };
        Ok(WasmGame {
            inner: Session::with_seed(config, seed),
        })
    }

    /// Apply a human move. Rejections come back as an error string and
    /// leave the game unchanged.
    #[wasm_bindgen(js_name = attemptMove)]
    pub fn attempt_move(&mut self, notation: &str) -> Result<JsValue, JsValue> {
        let mv: Move = notation.parse().map_err(to_js)?;
        let turn = self.inner.attempt_human_move(mv).map_err(to_js)?;
        turn_to_js(&turn)
    }

    /// Let the bot play. Call after the UI has rendered the human move.
    #[wasm_bindgen(js_name = botMove)]
    pub fn bot_move(&mut self) -> Result<JsValue, JsValue> {
        let turn = self.inner.request_bot_move().map_err(to_js)?;
        turn_to_js(&turn)
    }

    #[wasm_bindgen(js_name = isBotTurn)]
    pub fn is_bot_turn(&self) -> bool {
        self.inner.is_bot_turn()
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Current state as { cells, inventory, current_player, phase, outcome }
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.snapshot()).map_err(to_js)
    }

    /// Legal moves for the side to move, in notation
    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Vec<String> {
        self.inner
            .legal_moves()
            .iter()
            .map(|mv| mv.to_string())
            .collect()
    }

    /// Winning line as cell indices, empty if nobody has won
    #[wasm_bindgen(js_name = winningLine)]
    pub fn winning_line(&self) -> Vec<u8> {
        self.inner
            .winning_line()
            .map(|line| line.iter().map(|pos| pos.0).collect())
            .unwrap_or_default()
    }

    #[wasm_bindgen(js_name = setDifficulty)]
    pub fn set_difficulty(&mut self, difficulty: &str) -> Result<(), JsValue> {
        self.inner.set_difficulty(difficulty.parse().map_err(to_js)?);
        Ok(())
    }

    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&mut self, mode: &str) -> Result<(), JsValue> {
        self.inner.set_mode(mode.parse().map_err(to_js)?);
        Ok(())
    }
}

/// Serializable turn for JavaScript
#[derive(serde::Serialize)]
struct WasmTurn {
    player: String,
    notation: String,
    outcome: crate::Outcome,
}

fn turn_to_js(turn: &Turn) -> Result<JsValue, JsValue> {
    let wasm_turn = WasmTurn {
        player: turn.player.to_string(),
        notation: turn.mv.to_string(),
        outcome: turn.outcome,
    };
    serde_wasm_bindgen::to_value(&wasm_turn).map_err(to_js)
}
