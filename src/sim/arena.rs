//! Playfield bounds and brick-layer geometry
//!
//! The arena is the canvas rectangle with the origin at the top-left corner.
//! Bricks occupy a band of `rows` rows starting at the top edge; each cell is
//! `width / cols` wide and `BRICK_HEIGHT` tall.

use glam::Vec2;

use crate::consts::BRICK_HEIGHT;

/// Fixed rectangular playfield
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    /// Number of brick rows in the layout
    pub rows: usize,
    /// Number of brick columns in the layout
    pub cols: usize,
}

impl Arena {
    pub fn new(width: f32, height: f32, rows: usize, cols: usize) -> Self {
        Self {
            width,
            height,
            rows,
            cols,
        }
    }

    /// Width of a single brick cell
    #[inline]
    pub fn brick_width(&self) -> f32 {
        if self.cols == 0 {
            self.width
        } else {
            self.width / self.cols as f32
        }
    }

    /// Height of a single brick cell
    #[inline]
    pub fn brick_height(&self) -> f32 {
        BRICK_HEIGHT
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Top-left corner of a brick cell
    pub fn cell_origin(&self, row: usize, col: usize) -> Vec2 {
        Vec2::new(
            col as f32 * self.brick_width(),
            row as f32 * self.brick_height(),
        )
    }

    /// Grid cell under a point, or `None` when the point lies outside the
    /// brick band horizontally or vertically.
    pub fn cell_at(&self, point: Vec2) -> Option<(usize, usize)> {
        let row = (point.y / self.brick_height()).floor();
        let col = (point.x / self.brick_width()).floor();
        if !row.is_finite() || !col.is_finite() || row < 0.0 || col < 0.0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some((row, col))
    }
}
