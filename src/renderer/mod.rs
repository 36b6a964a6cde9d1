//! Render collaborator
//!
//! The controller draws through [`Renderer`] so the simulation never touches
//! a canvas or the DOM. Two implementations ship: a canvas-2d renderer for
//! the browser and a text renderer used by the native build and tests.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod text;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use text::TextRenderer;

use crate::sim::GameState;

/// Something that can show the game to the player
pub trait Renderer {
    /// Draw bricks, paddle and ball
    fn draw(&mut self, state: &GameState);
    /// Show or clear the status line
    fn show_status(&mut self, text: Option<&str>);
    /// Show the lives counter (one marker per life)
    fn show_lives(&mut self, count: u32);
}

/// Fill colour for a brick of the given durability
pub fn brick_color(durability: u8) -> &'static str {
    match durability {
        0 => "transparent",
        // Plank
        1 => "#c8a165",
        // Damaged
        2 => "#8fbf5a",
        _ => "#4caf50",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brick_colors_by_durability() {
        assert_eq!(brick_color(1), "#c8a165");
        assert_ne!(brick_color(2), brick_color(3));
        assert_eq!(brick_color(3), brick_color(9));
    }
}
