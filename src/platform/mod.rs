//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (key mapping, pointer gating)
//! - Storage (LocalStorage on web)

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod storage;

pub use input::{Action, InputState};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorageStore;
