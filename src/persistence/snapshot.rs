//! Point-in-time copy of the mutable game state
//!
//! Field names follow the stored layout used by the browser build:
//! `{lives, bricks: {map, remaining}, ball: {x, y, dx, dy}, paddle: {pos},
//! isWon, isRunning}`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::SnapshotError;
use crate::sim::{BrickGrid, GamePhase, GameState, Lives};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BricksSnapshot {
    #[serde(alias = "currentMap")]
    pub map: Vec<Vec<u8>>,
    pub remaining: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallSnapshot {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleSnapshot {
    pub pos: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub lives: u32,
    pub bricks: BricksSnapshot,
    pub ball: BallSnapshot,
    #[serde(alias = "bat")]
    pub paddle: PaddleSnapshot,
    pub is_won: bool,
    pub is_running: bool,
}

impl Snapshot {
    /// Copy the current state. The snapshot owns its data, so the live
    /// state may keep changing while it is serialized and written.
    pub fn capture(state: &GameState) -> Self {
        Self {
            lives: state.lives.count(),
            bricks: BricksSnapshot {
                map: state.bricks.map().to_vec(),
                remaining: state.bricks.remaining(),
            },
            ball: BallSnapshot {
                x: state.ball.pos.x,
                y: state.ball.pos.y,
                dx: state.ball.vel.x,
                dy: state.ball.vel.y,
            },
            paddle: PaddleSnapshot {
                pos: state.paddle.pos,
            },
            is_won: state.phase == GamePhase::Won,
            is_running: state.phase == GamePhase::Running,
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse and validate stored JSON
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check that the snapshot describes a game that can be resumed
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.is_won || self.lives == 0 {
            return Err(SnapshotError::Finished);
        }

        let Some(first) = self.bricks.map.first() else {
            return Err(SnapshotError::Shape("empty brick map"));
        };
        if first.is_empty() || self.bricks.map.iter().any(|row| row.len() != first.len()) {
            return Err(SnapshotError::Shape("brick map is not rectangular"));
        }

        let b = &self.ball;
        if ![b.x, b.y, b.dx, b.dy, self.paddle.pos]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(SnapshotError::Shape("non-finite ball or paddle value"));
        }

        Ok(())
    }

    /// Load this snapshot into `state` and set it running.
    ///
    /// Ball and paddle are only taken from the snapshot if it was saved
    /// mid-flight; a snapshot saved while paused restarts them from their
    /// defaults. The brick map is copied, never shared.
    pub fn restore(&self, state: &mut GameState) {
        let bricks = BrickGrid::from_map(&self.bricks.map);
        if bricks.remaining() != self.bricks.remaining {
            log::debug!(
                "Stored brick count {} disagrees with map ({}), using map",
                self.bricks.remaining,
                bricks.remaining()
            );
        }
        state.set_bricks(bricks);
        state.lives = Lives::new(self.lives);

        if self.is_running {
            let b = &self.ball;
            state.ball.init(
                &state.arena,
                Some(Vec2::new(b.x, b.y)),
                Some(Vec2::new(b.dx, b.dy)),
            );
            state.paddle.init(&state.arena, Some(self.paddle.pos));
        } else {
            state.reset_ball_and_paddle();
        }

        state.phase = GamePhase::Running;
        log::info!(
            "Restored saved game: {} bricks, {} lives",
            state.bricks.remaining(),
            state.lives.count()
        );
    }
}
