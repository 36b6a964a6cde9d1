//! Save/load persistence for resume-on-reload
//!
//! Features:
//! - JSON snapshot of every mutable piece of game state
//! - Pluggable store (in-memory, LocalStorage on web)
//! - Fail-open restore: anything missing or corrupt means a new game

pub mod snapshot;
pub mod store;

pub use snapshot::{BallSnapshot, BricksSnapshot, PaddleSnapshot, Snapshot};
pub use store::{MemoryStore, SnapshotStore};

/// Errors raised while loading, validating or writing a snapshot
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Malformed snapshot: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Snapshot belongs to a finished game")]
    Finished,
    #[error("Invalid snapshot: {0}")]
    Shape(&'static str),
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Load and validate the stored snapshot.
///
/// Returns `None` when nothing is stored or the stored data can't be used;
/// the reason is logged and the caller starts a new game.
pub fn load_snapshot<S: SnapshotStore + ?Sized>(store: &S) -> Option<Snapshot> {
    let json = match store.load() {
        Ok(Some(json)) => json,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("Could not read saved game: {}", e);
            return None;
        }
    };

    match Snapshot::from_json(&json) {
        Ok(snapshot) => Some(snapshot),
        Err(SnapshotError::Finished) => {
            log::info!("Saved game already finished, starting fresh");
            None
        }
        Err(e) => {
            log::warn!("Discarding saved game: {}", e);
            None
        }
    }
}
