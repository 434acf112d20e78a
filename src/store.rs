//! Key-value game storage, one whole state per game id.

use std::collections::HashMap;

use thiserror::Error;

use crate::snapshot::{self, SnapshotError};
use crate::types::GameState;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no stored game with id {0:?}")]
    NotFound(String),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Storage collaborator contract: load and save whole game states by
/// id. Saves are last-write-wins; callers that need stronger guarantees
/// must serialize writes per id themselves.
pub trait GameStore {
    fn load(&self, id: &str) -> Result<GameState, StoreError>;
    fn save(&mut self, id: &str, state: &GameState) -> Result<(), StoreError>;
}

/// In-memory store holding framed snapshots. Saving an existing id
/// replaces the stored state.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryStore {
    fn load(&self, id: &str) -> Result<GameState, StoreError> {
        let blob = self
            .blobs
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(snapshot::decode(blob)?)
    }

    fn save(&mut self, id: &str, state: &GameState) -> Result<(), StoreError> {
        let blob = snapshot::encode(state)?;
        self.blobs.insert(id.to_string(), blob);
        Ok(())
    }
}
