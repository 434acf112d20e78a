//! Browser-facing surface. The JS caller owns a `CheckersGame` handle
//! per live game; there is no process-wide current game.

use wasm_bindgen::prelude::*;

use crate::game::GameSession;
use crate::types::{GameState, Position};

/// One live game, wrapped for the frontend.
#[wasm_bindgen]
pub struct CheckersGame {
    session: GameSession,
}

#[wasm_bindgen]
impl CheckersGame {
    /// Starts a new game in the standard starting position.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
        }
    }

    /// Resumes a stored game from its JSON wire state.
    #[wasm_bindgen(js_name = fromState)]
    pub fn from_state(state: JsValue) -> Result<CheckersGame, JsValue> {
        let state: GameState = serde_wasm_bindgen::from_value(state).map_err(JsValue::from)?;
        Ok(Self {
            session: GameSession::from_state(state),
        })
    }

    /// Applies one move and returns the updated state, or the rejection
    /// reason as an error string.
    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(
        &mut self,
        from_row: u8,
        from_col: u8,
        to_row: u8,
        to_col: u8,
    ) -> Result<JsValue, JsValue> {
        let state = self
            .session
            .apply_move(
                Position::new(from_row, from_col),
                Position::new(to_row, to_col),
            )
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        serde_wasm_bindgen::to_value(state).map_err(JsValue::from)
    }

    /// Current state in the JSON wire shape.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.session.state()).map_err(JsValue::from)
    }

    /// Destination preview for click-to-select UI.
    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self, row: u8, col: u8) -> Result<JsValue, JsValue> {
        let moves = self.session.legal_destinations(Position::new(row, col));
        serde_wasm_bindgen::to_value(&moves).map_err(JsValue::from)
    }
}

impl Default for CheckersGame {
    fn default() -> Self {
        Self::new()
    }
}
