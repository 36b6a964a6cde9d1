//! End-to-end scenarios through the public controller API

use brickout::persistence::{MemoryStore, Snapshot, SnapshotStore};
use brickout::platform::Action;
use brickout::renderer::TextRenderer;
use brickout::sim::{BrickGrid, GameEvent, GamePhase, Lives};
use brickout::{Game, LoopControl, Settings};
use glam::Vec2;

fn new_game(store: MemoryStore) -> Game<TextRenderer, MemoryStore> {
    Game::new(Settings::default(), TextRenderer::new(), store)
}

#[test]
fn clearing_the_last_brick_wins() {
    let mut game = new_game(MemoryStore::new());
    game.start();

    let state = game.state_mut();
    state.set_bricks(BrickGrid::from_map(&[vec![1]]));
    state.ball.pos = Vec2::new(state.arena.brick_width() / 2.0, state.arena.brick_height() / 2.0);
    state.ball.vel = Vec2::new(0.0, -1.0);

    assert_eq!(game.frame(), LoopControl::Stop);
    assert_eq!(game.state().phase, GamePhase::Won);
    assert_eq!(game.state().bricks.remaining(), 0);
    assert_eq!(game.state().ball.vel.y, 1.0);
    assert!(game.last_events().contains(&GameEvent::Won));
    assert_eq!(
        game.renderer().status(),
        Some("You win. Press spacebar for new game.")
    );

    // Continue from Won is a full reset
    assert_eq!(game.key_down(Action::Continue), LoopControl::Continue);
    assert_eq!(game.state().phase, GamePhase::Running);
    assert_eq!(game.state().bricks.remaining(), 26);
    assert_eq!(game.state().lives.count(), 5);
}

#[test]
fn losing_the_last_life_skips_pause() {
    let mut game = new_game(MemoryStore::new());
    game.start();

    let state = game.state_mut();
    state.lives = Lives::new(1);
    state.paddle.pos = 0.0;
    state.ball.pos = Vec2::new(700.0, state.arena.height - 4.0);

    assert_eq!(game.frame(), LoopControl::Stop);
    assert_eq!(game.state().lives.count(), 0);
    assert_eq!(game.state().phase, GamePhase::Lost);
    assert_eq!(game.last_events(), &[GameEvent::GameOver]);
    assert_eq!(
        game.renderer().status(),
        Some("Game over. Press spacebar to start new game.")
    );
    assert_eq!(game.renderer().lives(), 0);

    // A finished game is never offered for resume
    let json = game.store().contents().unwrap().to_owned();
    assert!(Snapshot::from_json(&json).is_err());

    game.continue_pressed();
    assert_eq!(game.state().lives.count(), 5);
    assert_eq!(game.state().bricks.remaining(), 26);
}

#[test]
fn reload_resumes_mid_game() {
    let mut first = new_game(MemoryStore::new());
    first.start();
    first.state_mut().bricks.register_hit(0, 3);
    first.state_mut().bricks.register_hit(3, 5);
    first.key_down(Action::MoveRight);
    for _ in 0..10 {
        first.frame();
    }
    let saved = first.store().load().unwrap().unwrap();

    let mut second = new_game(MemoryStore::with_contents(saved));
    assert_eq!(second.start(), LoopControl::Continue);

    assert_eq!(second.state().ball, first.state().ball);
    assert_eq!(second.state().paddle.pos, first.state().paddle.pos);
    assert_eq!(second.state().bricks, first.state().bricks);
    assert_eq!(second.state().lives, first.state().lives);
    assert_eq!(second.state().phase, GamePhase::Running);

    // The resumed grid is its own copy
    second.state_mut().bricks.register_hit(0, 0);
    assert_eq!(first.state().bricks.get(0, 0), 1);
    assert_eq!(BrickGrid::from_level().get(3, 5), 3);
}

#[test]
fn corrupt_save_starts_new_game() {
    let mut game = new_game(MemoryStore::with_contents("{not json"));
    assert_eq!(game.start(), LoopControl::Continue);
    assert_eq!(game.state().phase, GamePhase::Running);
    assert_eq!(game.state().bricks.remaining(), 26);
    assert_eq!(game.state().lives.count(), 5);
}

#[test]
fn force_new_game_clears_save_from_any_phase() {
    let mut game = new_game(MemoryStore::new());
    game.start();
    game.state_mut().paddle.pos = 0.0;
    game.state_mut().ball.pos = Vec2::new(700.0, 496.0);
    game.frame();
    assert_eq!(game.state().phase, GamePhase::Paused);
    assert!(game.store().contents().is_some());

    assert_eq!(game.force_new_game(), LoopControl::Continue);
    assert_eq!(game.store().contents(), None);
    assert_eq!(game.state().phase, GamePhase::Running);
    assert_eq!(game.state().lives.count(), 5);
    assert_eq!(game.renderer().lives(), 5);
}

#[test]
fn autopilot_breaks_bricks_and_keeps_paddle_inside() {
    let mut game = new_game(MemoryStore::new());
    let mut control = game.start();
    let mut guard = 0;

    while guard < 50_000 {
        guard += 1;
        if control == LoopControl::Stop {
            if game.state().phase == GamePhase::Paused {
                control = game.continue_pressed();
                continue;
            }
            break;
        }
        game.autopilot();
        control = game.frame();

        let paddle = &game.state().paddle;
        assert!(paddle.pos >= 0.0 && paddle.pos <= game.state().arena.width - paddle.width);
    }

    assert!(game.state().bricks.remaining() < 26);
}
