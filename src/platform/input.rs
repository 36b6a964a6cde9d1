//! Keyboard and pointer input mapping

use crate::sim::TickInput;

/// Game action bound to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    /// Resume after a lost life, or start a new game once finished
    Continue,
}

impl Action {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Action::MoveLeft),
            "ArrowRight" | "Right" => Some(Action::MoveRight),
            " " | "Spacebar" => Some(Action::Continue),
            _ => None,
        }
    }

    /// Map a legacy `keyCode`
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            37 => Some(Action::MoveLeft),
            39 => Some(Action::MoveRight),
            32 => Some(Action::Continue),
            _ => None,
        }
    }
}

/// Held keys and the latest pointer position, sampled once per tick
#[derive(Debug, Clone, Default)]
pub struct InputState {
    left: bool,
    right: bool,
    pointer_x: Option<f32>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, action: Action) {
        match action {
            Action::MoveLeft => self.left = true,
            Action::MoveRight => self.right = true,
            Action::Continue => {}
        }
    }

    pub fn release(&mut self, action: Action) {
        match action {
            Action::MoveLeft => self.left = false,
            Action::MoveRight => self.right = false,
            Action::Continue => {}
        }
    }

    /// Record a pointer position relative to the arena's left edge.
    /// Positions outside `(0, arena_width)` are ignored.
    pub fn pointer_moved(&mut self, x: f32, arena_width: f32) {
        if x > 0.0 && x < arena_width {
            self.pointer_x = Some(x);
        }
    }

    /// Drop held keys and any pending pointer move
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Input for the next tick. The pointer position is consumed; held keys
    /// stay held.
    pub fn take_tick_input(&mut self) -> TickInput {
        TickInput {
            move_left: self.left,
            move_right: self.right,
            pointer_x: self.pointer_x.take(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Action::from_key("ArrowLeft"), Some(Action::MoveLeft));
        assert_eq!(Action::from_key(" "), Some(Action::Continue));
        assert_eq!(Action::from_key("a"), None);
        assert_eq!(Action::from_key_code(39), Some(Action::MoveRight));
        assert_eq!(Action::from_key_code(32), Some(Action::Continue));
        assert_eq!(Action::from_key_code(13), None);
    }

    #[test]
    fn test_held_keys_persist_pointer_is_consumed() {
        let mut input = InputState::new();
        input.press(Action::MoveLeft);
        input.pointer_moved(120.0, 830.0);

        let first = input.take_tick_input();
        assert!(first.move_left);
        assert_eq!(first.pointer_x, Some(120.0));

        let second = input.take_tick_input();
        assert!(second.move_left);
        assert_eq!(second.pointer_x, None);

        input.release(Action::MoveLeft);
        assert!(!input.take_tick_input().move_left);
    }

    #[test]
    fn test_pointer_outside_arena_ignored() {
        let mut input = InputState::new();
        input.pointer_moved(-3.0, 830.0);
        input.pointer_moved(830.0, 830.0);
        assert_eq!(input.take_tick_input().pointer_x, None);
    }
}
