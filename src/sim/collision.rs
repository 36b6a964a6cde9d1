//! Collision detection and response for the rectangular arena
//!
//! All tests are done against the ball's padded bounds, so contacts register
//! slightly before the ball visually touches a wall, the paddle or a brick.

use super::arena::Arena;
use super::state::{Ball, Paddle};
use crate::consts::PADDLE_REAIM;

/// Axis-aligned extent of a body, including any collision padding
pub trait Bounds {
    fn left(&self) -> f32;
    fn right(&self) -> f32;
    fn top(&self) -> f32;
    fn bottom(&self) -> f32;
}

/// Result of the paddle-plane test
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaddleContact {
    /// Ball has not reached the paddle band
    Clear,
    /// Ball is in the band and over the paddle; carries the re-aimed dx
    Hit { dx: f32 },
    /// Ball is in the band but beside the paddle
    Miss,
}

/// Reflect the ball off the side and top walls.
///
/// Only a velocity component pointing out of the arena is flipped, so a ball
/// that is still outside on the following tick keeps heading back in.
/// Returns true if any component was reflected.
pub fn reflect_off_walls(ball: &mut Ball, arena: &Arena) -> bool {
    let mut bounced = false;

    if (ball.right() > arena.width && ball.vel.x > 0.0) || (ball.left() < 0.0 && ball.vel.x < 0.0)
    {
        ball.vel.x = -ball.vel.x;
        bounced = true;
    }

    // The bottom edge is the miss boundary, never a wall
    if ball.top() < 0.0 && ball.vel.y < 0.0 {
        ball.vel.y = -ball.vel.y;
        bounced = true;
    }

    bounced
}

/// Horizontal velocity after a paddle contact, proportional to the offset
/// from the paddle centre.
#[inline]
pub fn reaim_dx(ball_x: f32, paddle: &Paddle) -> f32 {
    PADDLE_REAIM * (ball_x - paddle.center()) / paddle.width
}

/// Paddle-plane test against the paddle's horizontal band at the bottom of
/// the arena. The hit window is widened by half the ball size on each side.
pub fn paddle_contact(ball: &Ball, paddle: &Paddle, arena: &Arena) -> PaddleContact {
    if ball.bottom() <= arena.height - paddle.height {
        return PaddleContact::Clear;
    }

    let half = ball.size / 2.0;
    let x = ball.pos.x;
    if x >= paddle.pos - half && x <= paddle.pos + paddle.width + half {
        PaddleContact::Hit {
            dx: reaim_dx(x, paddle),
        }
    } else {
        PaddleContact::Miss
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn arena() -> Arena {
        Arena::new(CANVAS_WIDTH, CANVAS_HEIGHT, 4, 10)
    }

    fn ball_at(x: f32, y: f32, dx: f32, dy: f32) -> Ball {
        let mut ball = Ball::new(&arena());
        ball.init(&arena(), Some(Vec2::new(x, y)), Some(Vec2::new(dx, dy)));
        ball
    }

    #[test]
    fn test_ball_bounds_include_padding() {
        let ball = ball_at(100.0, 200.0, 0.0, 1.0);
        assert_eq!(ball.left(), 90.0);
        assert_eq!(ball.right(), 110.0);
        assert_eq!(ball.top(), 190.0);
        assert_eq!(ball.bottom(), 210.0);
    }

    #[test]
    fn test_reflect_right_wall() {
        let mut ball = ball_at(CANVAS_WIDTH - 5.0, 200.0, 0.5, 1.0);
        assert!(reflect_off_walls(&mut ball, &arena()));
        assert_eq!(ball.vel.x, -0.5);
        assert_eq!(ball.vel.y, 1.0);
    }

    #[test]
    fn test_reflect_top_wall() {
        let mut ball = ball_at(300.0, 5.0, 0.2, -1.0);
        assert!(reflect_off_walls(&mut ball, &arena()));
        assert_eq!(ball.vel.y, 1.0);
        assert_eq!(ball.vel.x, 0.2);
    }

    #[test]
    fn test_bottom_is_not_a_wall() {
        let mut ball = ball_at(300.0, CANVAS_HEIGHT + 20.0, 0.2, 1.0);
        assert!(!reflect_off_walls(&mut ball, &arena()));
        assert_eq!(ball.vel.y, 1.0);
    }

    #[test]
    fn test_paddle_center_hit_goes_straight_up() {
        let arena = arena();
        let paddle = Paddle::new(&arena);
        let ball = ball_at(paddle.center(), arena.height - 15.0, 0.7, 1.0);
        assert_eq!(
            paddle_contact(&ball, &paddle, &arena),
            PaddleContact::Hit { dx: 0.0 }
        );
    }

    #[test]
    fn test_paddle_edge_reaim() {
        let arena = arena();
        let paddle = Paddle::new(&arena);
        // Right edge of the paddle: offset of half the width
        let ball = ball_at(paddle.pos + paddle.width, arena.height - 15.0, 0.0, 1.0);
        match paddle_contact(&ball, &paddle, &arena) {
            PaddleContact::Hit { dx } => assert!((dx - 2.5).abs() < 1e-5),
            other => panic!("expected hit, got {:?}", other),
        }
    }

    #[test]
    fn test_paddle_window_widened_by_half_ball() {
        let arena = arena();
        let paddle = Paddle::new(&arena);
        let y = arena.height - 15.0;

        let just_inside = ball_at(paddle.pos - BALL_SIZE / 2.0, y, 0.0, 1.0);
        assert!(matches!(
            paddle_contact(&just_inside, &paddle, &arena),
            PaddleContact::Hit { .. }
        ));

        let outside = ball_at(paddle.pos - BALL_SIZE / 2.0 - 0.5, y, 0.0, 1.0);
        assert_eq!(paddle_contact(&outside, &paddle, &arena), PaddleContact::Miss);
    }

    #[test]
    fn test_paddle_clear_above_band() {
        let arena = arena();
        let paddle = Paddle::new(&arena);
        let ball = ball_at(paddle.center(), arena.center().y, 0.0, 1.0);
        assert_eq!(paddle_contact(&ball, &paddle, &arena), PaddleContact::Clear);
    }

    proptest! {
        #[test]
        fn prop_wall_reflection_points_inward(
            x in -20.0f32..850.0,
            y in -20.0f32..300.0,
            dx in -2.5f32..2.5,
            dy in prop::sample::select(vec![-1.0f32, 1.0]),
        ) {
            let arena = arena();
            let mut ball = ball_at(x, y, dx, dy);
            reflect_off_walls(&mut ball, &arena);

            if ball.left() < 0.0 {
                prop_assert!(ball.vel.x >= 0.0);
            }
            if ball.right() > arena.width {
                prop_assert!(ball.vel.x <= 0.0);
            }
            if ball.top() < 0.0 {
                prop_assert!(ball.vel.y > 0.0);
            }
            // Reflection never changes speed
            prop_assert_eq!(ball.vel.x.abs(), dx.abs());
            prop_assert_eq!(ball.vel.y.abs(), 1.0);
        }
    }
}
