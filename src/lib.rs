//! Brickout - a single-screen brick breaking arcade game
//!
//! Core modules:
//! - `sim`: Per-frame simulation (arena, entities, collisions, tick)
//! - `game`: Game controller owning the phase state machine and tick loop
//! - `renderer`: Render collaborator trait and canvas/text renderers
//! - `platform`: Browser/native input mapping and storage
//! - `persistence`: Snapshot capture/restore for resume-on-reload

pub mod game;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Game, LoopControl};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default canvas dimensions
    pub const CANVAS_WIDTH: f32 = 830.0;
    pub const CANVAS_HEIGHT: f32 = 500.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    /// Collision fudge margin added around the ball
    pub const BALL_PADDING: f32 = 5.0;
    pub const BALL_START_DX: f32 = 0.025;
    pub const BALL_START_DY: f32 = 1.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 12.0;
    /// Distance the paddle moves per tick while a direction key is held
    pub const PADDLE_STEP: f32 = 8.0;
    /// Horizontal re-aim coefficient applied on paddle contact
    pub const PADDLE_REAIM: f32 = 5.0;

    /// Brick row height
    pub const BRICK_HEIGHT: f32 = 20.0;

    /// Starting lives and per-tick speed multiplier
    pub const START_LIVES: u32 = 5;
    pub const BALL_SPEED: f32 = 5.0;
}
