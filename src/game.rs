//! Game controller
//!
//! Owns the single [`GameState`] of a session together with its
//! collaborators, and drives the frame loop. The host asks for a new
//! animation frame only while [`Game::frame`] returns
//! [`LoopControl::Continue`]; actions that restart play return `Continue`
//! only when no loop is already scheduled, so at most one loop runs.

use crate::persistence::{Snapshot, SnapshotStore, load_snapshot};
use crate::platform::{Action, InputState};
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};

/// What the host should do after a controller call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Request the next animation frame
    Continue,
    /// Do not schedule a frame
    Stop,
}

pub struct Game<R: Renderer, S: SnapshotStore> {
    state: GameState,
    settings: Settings,
    input: InputState,
    renderer: R,
    store: S,
    loop_active: bool,
    frames: u64,
    shown_lives: Option<u32>,
    save_failed: bool,
    last_events: Vec<GameEvent>,
}

impl<R: Renderer, S: SnapshotStore> Game<R, S> {
    /// Idle controller; call [`Game::start`] to begin play
    pub fn new(settings: Settings, renderer: R, store: S) -> Self {
        let settings = settings.sanitized();
        let state = GameState::new(settings.width, settings.height, settings.lives, settings.speed);
        Self {
            state,
            settings,
            input: InputState::new(),
            renderer,
            store,
            loop_active: false,
            frames: 0,
            shown_lives: None,
            save_failed: false,
            last_events: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Whether a frame loop is currently scheduled
    pub fn is_loop_active(&self) -> bool {
        self.loop_active
    }

    /// Frames simulated since construction
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Events produced by the most recent frame
    pub fn last_events(&self) -> &[GameEvent] {
        &self.last_events
    }

    /// Begin the session: resume a stored game if there is a usable one,
    /// otherwise start fresh.
    pub fn start(&mut self) -> LoopControl {
        let snapshot = if self.settings.persist {
            load_snapshot(&self.store)
        } else {
            None
        };

        match snapshot {
            Some(snapshot) => snapshot.restore(&mut self.state),
            None => self.state.new_game(),
        }
        self.input.clear();
        self.present();
        self.schedule()
    }

    /// Run one frame: simulate, draw, save.
    pub fn frame(&mut self) -> LoopControl {
        if !self.state.phase.is_running() {
            self.loop_active = false;
            return LoopControl::Stop;
        }

        let input = self.input.take_tick_input();
        self.last_events = tick(&mut self.state, &input);
        self.frames += 1;

        self.present();
        self.save();

        if self.state.phase.is_running() {
            LoopControl::Continue
        } else {
            self.loop_active = false;
            LoopControl::Stop
        }
    }

    /// The continue action: resume after a lost life, or start over once the
    /// game is won or lost. Ignored while running.
    pub fn continue_pressed(&mut self) -> LoopControl {
        if !self.state.continue_action() {
            return LoopControl::Stop;
        }
        self.present();
        self.schedule()
    }

    /// Start a new game regardless of phase and forget any saved game
    pub fn force_new_game(&mut self) -> LoopControl {
        if let Err(e) = self.store.clear() {
            log::warn!("Could not clear saved game: {}", e);
        }
        self.state.new_game();
        self.input.clear();
        self.present();
        self.schedule()
    }

    pub fn key_down(&mut self, action: Action) -> LoopControl {
        match action {
            Action::Continue => self.continue_pressed(),
            _ => {
                self.input.press(action);
                LoopControl::Stop
            }
        }
    }

    pub fn key_up(&mut self, action: Action) {
        self.input.release(action);
    }

    /// Pointer moved to `x` (relative to the arena's left edge)
    pub fn pointer_moved(&mut self, x: f32) {
        if self.settings.pointer_control {
            self.input.pointer_moved(x, self.state.arena.width);
        }
    }

    /// Steer the paddle under the ball with a slowly drifting offset so the
    /// returns keep changing angle.
    pub fn autopilot(&mut self) {
        let t = self.frames as f32 * 0.013;
        let offset = (t.sin() * 0.3 + (t * 0.7).sin() * 0.12) * self.state.paddle.width;
        let target = self.state.ball.pos.x + offset;
        let width = self.state.arena.width;
        self.input.pointer_moved(target.clamp(1.0, width - 1.0), width);
    }

    fn schedule(&mut self) -> LoopControl {
        if self.loop_active {
            LoopControl::Stop
        } else {
            self.loop_active = true;
            LoopControl::Continue
        }
    }

    fn present(&mut self) {
        self.renderer.draw(&self.state);
        self.renderer.show_status(self.state.phase.status_text());

        let lives = self.state.lives.count();
        if self.shown_lives != Some(lives) {
            self.renderer.show_lives(lives);
            self.shown_lives = Some(lives);
        }
    }

    fn save(&mut self) {
        if !self.settings.persist {
            return;
        }

        // Capture first: the snapshot owns its data before anything is written
        let result = Snapshot::capture(&self.state)
            .to_json()
            .and_then(|json| self.store.save(&json));

        match result {
            Ok(()) => self.save_failed = false,
            Err(e) => {
                if !self.save_failed {
                    log::warn!("Saving game failed: {}", e);
                }
                self.save_failed = true;
            }
        }
    }
}
