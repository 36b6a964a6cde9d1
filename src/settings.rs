//! Game settings
//!
//! Loaded from LocalStorage on the web, separately from game saves; read
//! from `BRICKOUT_*` environment variables natively.

use serde::Deserialize;

use crate::consts::*;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Canvas width in pixels
    pub width: f32,
    /// Canvas height in pixels
    pub height: f32,
    /// Lives granted by a new game
    pub lives: u32,
    /// Distance the ball travels per tick per unit of velocity
    pub speed: f32,
    /// Steer the paddle with the mouse when it is over the canvas
    pub pointer_control: bool,
    /// Save the game after every tick for resume-on-reload
    pub persist: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            lives: START_LIVES,
            speed: BALL_SPEED,
            pointer_control: true,
            persist: true,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "brickout_settings";

    /// Largest accepted canvas dimension, in pixels
    pub const MAX_DIMENSION: f32 = 4096.0;

    /// Replace values that would break the simulation with defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.width >= PADDLE_WIDTH && self.width <= Self::MAX_DIMENSION) {
            log::warn!("Invalid width {}, using {}", self.width, defaults.width);
            self.width = defaults.width;
        }
        if !(self.height > PADDLE_HEIGHT && self.height <= Self::MAX_DIMENSION) {
            log::warn!("Invalid height {}, using {}", self.height, defaults.height);
            self.height = defaults.height;
        }
        if self.lives == 0 {
            log::warn!("Lives must be > 0, using {}", defaults.lives);
            self.lives = defaults.lives;
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            log::warn!("Invalid speed {}, using {}", self.speed, defaults.speed);
            self.speed = defaults.speed;
        }
        self
    }

    /// Apply overrides from a variable lookup (`BRICKOUT_LIVES`,
    /// `BRICKOUT_SPEED`, `BRICKOUT_WIDTH`, `BRICKOUT_HEIGHT`,
    /// `BRICKOUT_POINTER`, `BRICKOUT_PERSIST`). Unparseable values are
    /// logged and ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parse<T: std::str::FromStr>(name: &str, raw: Option<String>) -> Option<T> {
            let raw = raw?;
            match raw.trim().parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    log::warn!("Invalid {} '{}', using default", name, raw);
                    None
                }
            }
        }

        if let Some(v) = parse("BRICKOUT_LIVES", lookup("BRICKOUT_LIVES")) {
            self.lives = v;
        }
        if let Some(v) = parse("BRICKOUT_SPEED", lookup("BRICKOUT_SPEED")) {
            self.speed = v;
        }
        if let Some(v) = parse("BRICKOUT_WIDTH", lookup("BRICKOUT_WIDTH")) {
            self.width = v;
        }
        if let Some(v) = parse("BRICKOUT_HEIGHT", lookup("BRICKOUT_HEIGHT")) {
            self.height = v;
        }
        if let Some(v) = parse("BRICKOUT_POINTER", lookup("BRICKOUT_POINTER")) {
            self.pointer_control = v;
        }
        if let Some(v) = parse("BRICKOUT_PERSIST", lookup("BRICKOUT_PERSIST")) {
            self.persist = v;
        }
        self.sanitized()
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str::<Settings>(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings.sanitized();
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native: defaults plus environment overrides
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.lives, 5);
        assert_eq!(settings.speed, 5.0);
        assert!(settings.persist);
    }

    #[test]
    fn test_overrides_applied() {
        let settings = Settings::default().with_overrides(lookup(&[
            ("BRICKOUT_LIVES", "3"),
            ("BRICKOUT_SPEED", "7.5"),
            ("BRICKOUT_PERSIST", "false"),
        ]));
        assert_eq!(settings.lives, 3);
        assert_eq!(settings.speed, 7.5);
        assert!(!settings.persist);
        assert_eq!(settings.width, CANVAS_WIDTH);
    }

    #[test]
    fn test_invalid_overrides_ignored() {
        let settings = Settings::default().with_overrides(lookup(&[
            ("BRICKOUT_LIVES", "lots"),
            ("BRICKOUT_SPEED", "-2"),
            ("BRICKOUT_WIDTH", "10"),
        ]));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        let settings = Settings::default().with_overrides(lookup(&[
            ("BRICKOUT_WIDTH", "1e30"),
            ("BRICKOUT_HEIGHT", "inf"),
        ]));
        assert_eq!(settings.width, CANVAS_WIDTH);
        assert_eq!(settings.height, CANVAS_HEIGHT);

        let settings = Settings::default().with_overrides(lookup(&[("BRICKOUT_WIDTH", "4096")]));
        assert_eq!(settings.width, Settings::MAX_DIMENSION);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"lives": 9}"#).unwrap();
        assert_eq!(settings.lives, 9);
        assert_eq!(settings.height, CANVAS_HEIGHT);
    }
}
