//! Brickout entry point
//!
//! On the web this wires the canvas, DOM and LocalStorage to the game
//! controller and runs the animation-frame loop. Natively it runs a headless
//! autopilot demo and prints the final board.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use brickout::persistence::{MemoryStore, SnapshotStore};
    use brickout::platform::{Action, LocalStorageStore};
    use brickout::renderer::CanvasRenderer;
    use brickout::{Game, LoopControl, Settings};

    type WebGame = Game<CanvasRenderer, Box<dyn SnapshotStore>>;

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            // Logger already installed (hot reload)
        }

        log::info!("Brickout starting...");

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        let Some(canvas) = document
            .query_selector("#game")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #game canvas found");
            return;
        };

        let settings = Settings::load();
        canvas.set_width(settings.width as u32);
        canvas.set_height(settings.height as u32);

        let Some(renderer) = CanvasRenderer::new(&canvas, document.clone()) else {
            log::error!("Canvas 2D context unavailable");
            return;
        };

        let store: Box<dyn SnapshotStore> =
            match LocalStorageStore::open(LocalStorageStore::DEFAULT_KEY) {
                Some(store) => Box::new(store),
                None => {
                    log::warn!("LocalStorage unavailable, progress will not be saved");
                    Box::new(MemoryStore::new())
                }
            };

        let game = Rc::new(RefCell::new(Game::new(settings, renderer, store)));

        setup_input_handlers(&canvas, game.clone());
        setup_new_game_button(game.clone());

        let control = game.borrow_mut().start();
        schedule(game, control);

        log::info!("Brickout running!");
    }

    fn schedule(game: Rc<RefCell<WebGame>>, control: LoopControl) {
        if control == LoopControl::Continue {
            request_animation_frame(game);
        }
    }

    fn request_animation_frame(game: Rc<RefCell<WebGame>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<WebGame>>) {
        let control = game.borrow_mut().frame();
        schedule(game, control);
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<WebGame>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        // Key down: movement intents and the continue action
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let action = Action::from_key(&event.key())
                    .or_else(|| Action::from_key_code(event.key_code()));
                if let Some(action) = action {
                    event.prevent_default();
                    let control = game.borrow_mut().key_down(action);
                    schedule(game.clone(), control);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up: stop moving
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let action = Action::from_key(&event.key())
                    .or_else(|| Action::from_key_code(event.key_code()));
                if let Some(action) = action {
                    game.borrow_mut().key_up(action);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move: steer while the pointer is over the canvas
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let y = event.client_y() as f64;
                if y <= rect.top() || y >= rect.bottom() {
                    return;
                }
                // Scale CSS pixels to canvas pixels
                let scale = if rect.width() > 0.0 {
                    canvas_clone.width() as f64 / rect.width()
                } else {
                    1.0
                };
                let x = (event.client_x() as f64 - rect.left()) * scale;
                game.borrow_mut().pointer_moved(x as f32);
            });
            let _ = document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_new_game_button(game: Rc<RefCell<WebGame>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(btn) = document.query_selector("#new").ok().flatten() else {
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let control = game.borrow_mut().force_new_game();
            schedule(game.clone(), control);
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brickout::persistence::MemoryStore;
    use brickout::renderer::TextRenderer;
    use brickout::sim::{GameEvent, GamePhase};
    use brickout::{Game, LoopControl, Settings};

    env_logger::init();
    log::info!("Brickout (native) starting autopilot demo...");
    log::info!("Browser build: run with `trunk serve` for the playable version");

    let max_frames: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(50_000);

    let mut game = Game::new(Settings::load(), TextRenderer::new(), MemoryStore::new());
    log::info!("Settings: {:?}", game.settings());
    let mut control = game.start();
    let mut bricks_destroyed = 0u32;

    while game.frames() < max_frames {
        if control == LoopControl::Stop {
            match game.state().phase {
                GamePhase::Paused => control = game.continue_pressed(),
                _ => break,
            }
            continue;
        }

        game.autopilot();
        control = game.frame();
        bricks_destroyed += game
            .last_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::BrickDestroyed { .. }))
            .count() as u32;
    }

    println!("{}", game.renderer().frame());
    println!(
        "\n{:?} after {} frames: {} bricks destroyed, {} left, {} lives",
        game.state().phase,
        game.frames(),
        bricks_destroyed,
        game.state().bricks.remaining(),
        game.state().lives.count()
    );
    if let Some(status) = game.renderer().status() {
        println!("{}", status);
    }
}
