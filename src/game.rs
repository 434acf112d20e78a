use chrono::Utc;

use crate::rules;
use crate::types::{GameState, Move, MoveError, Position};

/// Owns exactly one live `GameState` and funnels every mutation through
/// the rules engine.
///
/// Contract:
/// - On a successful `apply_move` the owned state is replaced with the
///   engine's result; on rejection it is left untouched.
/// - Calls for one session must be serialized by the caller; two
///   sessions with different game ids are fully independent.
pub struct GameSession {
    state: GameState,
}

impl GameSession {
    /// Starts a fresh game with a generated identifier.
    pub fn new() -> Self {
        Self {
            state: rules::initial_state(generate_game_id()),
        }
    }

    /// Resumes a previously stored game.
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    /// Current snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies one move and returns the updated state.
    pub fn apply_move(&mut self, from: Position, to: Position) -> Result<&GameState, MoveError> {
        let next = rules::apply_move(&self.state, from, to)?;
        self.state = next;
        Ok(&self.state)
    }

    /// Destination preview for the UI, served by the same engine that
    /// validates moves.
    pub fn legal_destinations(&self, from: Position) -> Vec<Move> {
        rules::legal_destinations(&self.state, from)
    }

    /// Consumes the session, handing the state back for storage.
    pub fn into_state(self) -> GameState {
        self.state
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Time-derived identifier, unique per microsecond.
fn generate_game_id() -> String {
    format!("game_{:x}", Utc::now().timestamp_micros())
}
