//! LocalStorage-backed snapshot store (WASM only)

use web_sys::Storage;

use crate::persistence::{SnapshotError, SnapshotStore};

/// Stores the snapshot under a single LocalStorage key
pub struct LocalStorageStore {
    storage: Storage,
    key: &'static str,
}

impl LocalStorageStore {
    pub const DEFAULT_KEY: &'static str = "gamestate";

    /// `None` when the browser has LocalStorage disabled
    pub fn open(key: &'static str) -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage, key })
    }
}

fn storage_error(e: wasm_bindgen::JsValue) -> SnapshotError {
    SnapshotError::Storage(format!("{:?}", e))
}

impl SnapshotStore for LocalStorageStore {
    fn load(&self) -> Result<Option<String>, SnapshotError> {
        self.storage.get_item(self.key).map_err(storage_error)
    }

    fn save(&mut self, json: &str) -> Result<(), SnapshotError> {
        self.storage.set_item(self.key, json).map_err(storage_error)
    }

    fn clear(&mut self) -> Result<(), SnapshotError> {
        self.storage.remove_item(self.key).map_err(storage_error)?;
        log::info!("Saved game cleared");
        Ok(())
    }
}
