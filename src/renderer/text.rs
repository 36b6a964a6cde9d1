//! Plain-text renderer for terminals, logs and tests

use super::Renderer;
use crate::sim::GameState;

/// Arena pixels per text cell, horizontally and vertically
const CELL_W: f32 = 10.0;
const CELL_H: f32 = 20.0;
/// Upper bound on the text grid in either direction
const MAX_CELLS: f32 = 1024.0;

/// Renders the arena as a block of characters:
/// digits for bricks (their durability), `=` for the paddle, `o` for the ball.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    frame: String,
    status: Option<String>,
    lives: u32,
    frames_drawn: u64,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently drawn frame
    pub fn frame(&self) -> &str {
        &self.frame
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}

impl Renderer for TextRenderer {
    fn draw(&mut self, state: &GameState) {
        let arena = &state.arena;
        let cols = (arena.width / CELL_W).ceil().clamp(1.0, MAX_CELLS) as usize;
        let rows = (arena.height / CELL_H).ceil().clamp(1.0, MAX_CELLS) as usize;
        let mut grid = vec![vec![' '; cols]; rows];

        let to_col = |x: f32| ((x / CELL_W).floor().max(0.0) as usize).min(cols - 1);
        let to_row = |y: f32| ((y / CELL_H).floor().max(0.0) as usize).min(rows - 1);

        for (r, c, durability) in state.bricks.iter_live() {
            let origin = arena.cell_origin(r, c);
            let glyph = char::from_digit(u32::from(durability.min(9)), 10).unwrap_or('#');
            let start = to_col(origin.x);
            let end = to_col(origin.x + arena.brick_width() - 1.0);
            for cell in &mut grid[to_row(origin.y)][start..=end] {
                *cell = glyph;
            }
        }

        let paddle_row = to_row(arena.height - state.paddle.height);
        let start = to_col(state.paddle.pos);
        let end = to_col(state.paddle.pos + state.paddle.width - 1.0);
        for cell in &mut grid[paddle_row][start..=end] {
            *cell = '=';
        }

        if state.ball.pos.is_finite() {
            grid[to_row(state.ball.pos.y)][to_col(state.ball.pos.x)] = 'o';
        }

        self.frame = grid
            .into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        self.frames_drawn += 1;
    }

    fn show_status(&mut self, text: Option<&str>) {
        self.status = text.map(str::to_owned);
    }

    fn show_lives(&mut self, count: u32) {
        self.lives = count;
    }
}
