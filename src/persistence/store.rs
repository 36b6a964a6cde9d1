//! Snapshot storage backends

use super::SnapshotError;

/// A single-slot key/value store holding the serialized snapshot
pub trait SnapshotStore {
    /// Stored snapshot JSON, if any
    fn load(&self) -> Result<Option<String>, SnapshotError>;
    /// Overwrite the stored snapshot
    fn save(&mut self, json: &str) -> Result<(), SnapshotError>;
    /// Remove the stored snapshot
    fn clear(&mut self) -> Result<(), SnapshotError>;
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for Box<S> {
    fn load(&self) -> Result<Option<String>, SnapshotError> {
        (**self).load()
    }

    fn save(&mut self, json: &str) -> Result<(), SnapshotError> {
        (**self).save(json)
    }

    fn clear(&mut self) -> Result<(), SnapshotError> {
        (**self).clear()
    }
}

/// In-process store, used natively and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Option<String>,
    writes: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(json: impl Into<String>) -> Self {
        Self {
            slot: Some(json.into()),
            writes: 0,
        }
    }

    /// Current contents
    pub fn contents(&self) -> Option<&str> {
        self.slot.as_deref()
    }

    /// Number of successful saves
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, SnapshotError> {
        Ok(self.slot.clone())
    }

    fn save(&mut self, json: &str) -> Result<(), SnapshotError> {
        self.slot = Some(json.to_owned());
        self.writes += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SnapshotError> {
        self.slot = None;
        Ok(())
    }
}
