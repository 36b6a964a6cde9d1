//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One explicit step per frame
//! - Fixed evaluation order inside a step
//! - No rendering or platform dependencies

pub mod arena;
pub mod bricks;
pub mod collision;
pub mod state;
pub mod tick;

pub use arena::Arena;
pub use bricks::{BrickGrid, LEVEL_MAP};
pub use collision::{Bounds, PaddleContact, paddle_contact, reaim_dx, reflect_off_walls};
pub use state::{Ball, GameEvent, GamePhase, GameState, Lives, Paddle};
pub use tick::{TickInput, tick};
