//! Per-frame simulation step
//!
//! One call advances the game by exactly one frame. The order of the stages
//! is fixed: paddle, walls, paddle plane, bricks, integration, win check.
//! There is no sub-stepping, so a fast ball can tunnel through a brick row
//! at low frame rates.

use super::collision::{PaddleContact, paddle_contact, reflect_off_walls};
use super::state::{GameEvent, GamePhase, GameState};

/// Input sampled for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Left arrow held
    pub move_left: bool,
    /// Right arrow held
    pub move_right: bool,
    /// Absolute pointer x inside the arena, if the pointer moved this frame
    pub pointer_x: Option<f32>,
}

/// Advance the game state by one frame, returning what happened.
///
/// Does nothing unless the game is running.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Running {
        return events;
    }

    // 1. Paddle
    state.paddle.moving_left = input.move_left;
    state.paddle.moving_right = input.move_right;
    if input.pointer_x.is_some() {
        state.paddle.pointer_target = input.pointer_x;
    }
    state.paddle.apply_movement(state.arena.width);

    // 2. Side and top walls
    reflect_off_walls(&mut state.ball, &state.arena);

    // 3. Paddle plane
    match paddle_contact(&state.ball, &state.paddle, &state.arena) {
        PaddleContact::Clear => {}
        PaddleContact::Hit { dx } => {
            state.ball.vel.x = dx;
            state.ball.vel.y = -state.ball.vel.y.abs();
            events.push(GameEvent::PaddleHit);
        }
        PaddleContact::Miss => {
            let remaining = state.lives.lose_one();
            if state.lives.is_exhausted() {
                state.phase = GamePhase::Lost;
                events.push(GameEvent::GameOver);
                log::info!("Game over");
            } else {
                state.phase = GamePhase::Paused;
                events.push(GameEvent::LifeLost { remaining });
                log::info!("Life lost, {} remaining", remaining);
            }
        }
    }

    // 4. At most one brick, the cell under the ball centre
    if let Some((row, col)) = state.arena.cell_at(state.ball.pos) {
        if state.bricks.get(row, col) > 0 {
            if state.bricks.register_hit(row, col) {
                events.push(GameEvent::BrickDestroyed { row, col });
                log::debug!(
                    "Brick ({}, {}) destroyed, {} left",
                    row,
                    col,
                    state.bricks.remaining()
                );
            } else {
                let durability = state.bricks.get(row, col);
                events.push(GameEvent::BrickDamaged {
                    row,
                    col,
                    durability,
                });
                log::debug!("Brick ({}, {}) damaged to {}", row, col, durability);
            }
            state.ball.vel.y = -state.ball.vel.y;
        }
    }

    // 5. Integrate
    state.ball.integrate(state.speed);

    // 6. Win check (a miss on this tick already ended the run)
    if state.phase == GamePhase::Running && state.bricks.is_cleared() {
        state.phase = GamePhase::Won;
        events.push(GameEvent::Won);
        log::info!("All bricks cleared");
    }

    events
}
