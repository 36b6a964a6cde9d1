//! Game state and core simulation types
//!
//! Every piece of mutable game state lives in [`GameState`]; the controller
//! owns exactly one per session.

use glam::Vec2;

use super::arena::Arena;
use super::bricks::BrickGrid;
use super::collision::Bounds;
use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Constructed, no game started yet
    #[default]
    Idle,
    /// Active gameplay, the tick loop is scheduled
    Running,
    /// A life was lost and lives remain; waiting for the continue action
    Paused,
    /// Every brick destroyed
    Won,
    /// Lives exhausted
    Lost,
}

impl GamePhase {
    pub fn is_running(&self) -> bool {
        *self == GamePhase::Running
    }

    /// Status line shown to the player for this phase
    pub fn status_text(&self) -> Option<&'static str> {
        match self {
            GamePhase::Idle | GamePhase::Running => None,
            GamePhase::Paused => Some("Press spacebar to continue."),
            GamePhase::Won => Some("You win. Press spacebar for new game."),
            GamePhase::Lost => Some("Game over. Press spacebar to start new game."),
        }
    }
}

/// Outcome events reported by a simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off the paddle
    PaddleHit,
    /// Brick took a hit and survived with the given durability
    BrickDamaged { row: usize, col: usize, durability: u8 },
    /// Brick took its last hit
    BrickDestroyed { row: usize, col: usize },
    /// Ball missed the paddle; lives remain
    LifeLost { remaining: u32 },
    /// Ball missed the paddle on the last life
    GameOver,
    /// Grid cleared
    Won,
}

/// The ball. Velocity is in "direction units"; the game speed scales it at
/// integration time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub padding: f32,
}

impl Ball {
    pub fn new(arena: &Arena) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: BALL_SIZE,
            padding: BALL_PADDING,
        };
        ball.init(arena, None, None);
        ball
    }

    /// Reset the ball. Overrides are used when restoring a saved game;
    /// otherwise the ball starts at the arena centre heading slowly right
    /// and down.
    pub fn init(&mut self, arena: &Arena, pos: Option<Vec2>, vel: Option<Vec2>) {
        self.pos = pos.unwrap_or_else(|| arena.center());
        self.vel = vel.unwrap_or(Vec2::new(BALL_START_DX, BALL_START_DY));
        self.size = BALL_SIZE;
        self.padding = BALL_PADDING;
    }

    /// Advance one explicit Euler step
    #[inline]
    pub fn integrate(&mut self, speed: f32) {
        self.pos += self.vel * speed;
    }

    #[inline]
    fn extent(&self) -> f32 {
        self.size / 2.0 + self.padding
    }
}

impl Bounds for Ball {
    fn left(&self) -> f32 {
        self.pos.x - self.extent()
    }

    fn right(&self) -> f32 {
        self.pos.x + self.extent()
    }

    fn top(&self) -> f32 {
        self.pos.y - self.extent()
    }

    fn bottom(&self) -> f32 {
        self.pos.y + self.extent()
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Left edge, in arena units
    pub pos: f32,
    pub width: f32,
    pub height: f32,
    pub moving_left: bool,
    pub moving_right: bool,
    /// Absolute pointer x waiting to be applied on the next movement step
    pub pointer_target: Option<f32>,
}

impl Paddle {
    pub fn new(arena: &Arena) -> Self {
        let mut paddle = Self {
            pos: 0.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            moving_left: false,
            moving_right: false,
            pointer_target: None,
        };
        paddle.init(arena, None);
        paddle
    }

    /// Reset the paddle, centred unless a restored position is given
    pub fn init(&mut self, arena: &Arena, pos: Option<f32>) {
        self.width = PADDLE_WIDTH;
        self.height = PADDLE_HEIGHT;
        self.moving_left = false;
        self.moving_right = false;
        self.pointer_target = None;
        self.pos = pos.unwrap_or(arena.width / 2.0 - self.width / 2.0);
        self.clamp(arena.width);
    }

    #[inline]
    pub fn center(&self) -> f32 {
        self.pos + self.width / 2.0
    }

    /// Rightmost allowed left edge
    #[inline]
    pub fn max_pos(&self, arena_width: f32) -> f32 {
        (arena_width - self.width).max(0.0)
    }

    /// Apply pointer or keyboard movement for one tick.
    ///
    /// A pending pointer target wins over the direction intents. The result
    /// is always clamped to the arena.
    pub fn apply_movement(&mut self, arena_width: f32) {
        if let Some(x) = self.pointer_target.take() {
            self.pos = x - self.width / 2.0;
        } else {
            if self.moving_left && self.pos > 0.0 {
                self.pos -= PADDLE_STEP;
            }
            if self.moving_right && self.pos < arena_width - self.width {
                self.pos += PADDLE_STEP;
            }
        }
        self.clamp(arena_width);
    }

    /// Force the paddle back inside `[0, arena_width - width]`
    pub fn clamp(&mut self, arena_width: f32) {
        // f32::max/min drop NaN, so a bad pointer value lands on the left wall
        self.pos = self.pos.max(0.0).min(self.max_pos(arena_width));
    }
}

/// Remaining lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lives {
    count: u32,
}

impl Lives {
    pub fn new(count: u32) -> Self {
        Self { count }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_exhausted(&self) -> bool {
        self.count == 0
    }

    /// Remove one life, returning how many are left
    pub fn lose_one(&mut self) -> u32 {
        self.count = self.count.saturating_sub(1);
        self.count
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub arena: Arena,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    pub lives: Lives,
    pub phase: GamePhase,
    /// Distance multiplier applied to the ball velocity every tick
    pub speed: f32,
    /// Lives granted by a new game
    pub start_lives: u32,
}

impl GameState {
    /// Idle state with default entities laid out on a `width` x `height`
    /// canvas
    pub fn new(width: f32, height: f32, start_lives: u32, speed: f32) -> Self {
        let bricks = BrickGrid::from_level();
        let arena = Arena::new(width, height, bricks.rows(), bricks.cols());
        Self {
            arena,
            ball: Ball::new(&arena),
            paddle: Paddle::new(&arena),
            bricks,
            lives: Lives::new(start_lives),
            phase: GamePhase::Idle,
            speed,
            start_lives,
        }
    }

    /// Replace the brick grid, re-deriving the arena's brick geometry
    pub fn set_bricks(&mut self, bricks: BrickGrid) {
        self.arena.rows = bricks.rows();
        self.arena.cols = bricks.cols();
        self.bricks = bricks;
    }

    /// Full reset: ball, paddle, grid and lives, then run
    pub fn new_game(&mut self) {
        self.set_bricks(BrickGrid::from_level());
        self.lives = Lives::new(self.start_lives);
        self.reset_ball_and_paddle();
        self.phase = GamePhase::Running;
        log::info!(
            "New game: {} bricks, {} lives",
            self.bricks.remaining(),
            self.lives.count()
        );
    }

    /// Continue after a lost life: ball and paddle reset, grid and lives kept
    pub fn resume(&mut self) {
        self.reset_ball_and_paddle();
        self.phase = GamePhase::Running;
        log::info!("Resumed with {} lives", self.lives.count());
    }

    /// The single continue input. Its effect depends on the phase:
    /// Paused resumes, Won/Lost/Idle start a new game, Running ignores it.
    /// Returns true when the game (re)entered Running.
    pub fn continue_action(&mut self) -> bool {
        match self.phase {
            GamePhase::Running => false,
            GamePhase::Paused => {
                self.resume();
                true
            }
            GamePhase::Idle | GamePhase::Won | GamePhase::Lost => {
                self.new_game();
                true
            }
        }
    }

    pub fn reset_ball_and_paddle(&mut self) {
        self.ball.init(&self.arena, None, None);
        self.paddle.init(&self.arena, None);
    }
}
