//! End-to-end tests for the engine runtime.
//!
//! These tests build a small scene, start both engine tasks against a
//! headless surface and observe the world through the shared lock.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use flatland_engine::command::Commands;
use flatland_engine::game::Game;
use flatland_engine::game_loop::{lock_game, Engine};
use flatland_engine::hitbox::{Collidable, Contact, HitBox};
use flatland_engine::input::{input_channel, keys, InputSender, KeyCode};
use flatland_engine::object::{Body, GameObject};
use flatland_engine::panel::{Canvas, DrawContext, DrawListener};
use flatland_engine::scene::{Scene, SceneError};
use flatland_engine::surface::HeadlessSurface;
use flatland_engine::{Color, EngineConfig, Vector};

/// Moves right at one pixel per tick and counts collisions.
struct Runner {
    body: Body,
    hits: Arc<AtomicU32>,
}

impl DrawListener for Runner {
    fn draw(&self, canvas: &mut Canvas, _ctx: &DrawContext) {
        canvas.fill_bounds(&self.body.bounds(), Color::WHITE);
    }
}

impl GameObject for Runner {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn collidable(&self) -> Option<&dyn Collidable> {
        Some(self)
    }

    fn collidable_mut(&mut self) -> Option<&mut dyn Collidable> {
        Some(self)
    }
}

impl Collidable for Runner {
    fn name(&self) -> &'static str {
        "Runner"
    }

    fn collision(&mut self, other: &Contact, commands: &mut Commands) {
        if other.name == "Post" {
            self.hits.fetch_add(1, Ordering::SeqCst);
            commands.push(|game: &mut Game| {
                game.counter("hits").increment();
            });
        }
    }
}

/// Immutable obstacle.
struct Post {
    body: Body,
}

impl DrawListener for Post {
    fn draw(&self, canvas: &mut Canvas, _ctx: &DrawContext) {
        canvas.fill_bounds(&self.body.bounds(), Color::GRAY);
    }
}

impl GameObject for Post {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn collidable(&self) -> Option<&dyn Collidable> {
        Some(self)
    }

    fn collidable_mut(&mut self) -> Option<&mut dyn Collidable> {
        Some(self)
    }
}

impl Collidable for Post {
    fn name(&self) -> &'static str {
        "Post"
    }
}

struct Track {
    hits: Arc<AtomicU32>,
}

impl Scene for Track {
    fn load(&mut self, game: &mut Game) -> Result<(), SceneError> {
        game.add_game_object(
            "runner",
            Box::new(Runner {
                body: Body::new(Vector::xy(0.0, 10.0), HitBox::new(4.0, 4.0))
                    .with_velocity(Vector::xy(1.0, 0.0)),
                hits: self.hits.clone(),
            }),
        );
        game.add_game_object(
            "post",
            Box::new(Post {
                body: Body::fixed(Vector::xy(20.0, 10.0), HitBox::new(4.0, 40.0)),
            }),
        );
        Ok(())
    }

    fn keyboard_input(&mut self, game: &mut Game, key: KeyCode, pressed: bool) {
        if !pressed {
            return;
        }
        match key {
            keys::ESCAPE => game.toggle_paused(),
            keys::ENTER => game.request_exit(),
            _ => {}
        }
    }
}

fn config() -> EngineConfig {
    EngineConfig {
        logic_rate_hz: 250,
        frame_rate_hz: 100,
        width: 64,
        height: 64,
        ..EngineConfig::default()
    }
}

fn track_game(config: &EngineConfig) -> (Game, InputSender, Arc<AtomicU32>) {
    let (tx, queue) = input_channel(config.input_capacity);
    let hits = Arc::new(AtomicU32::new(0));
    let mut game = Game::new(config, queue);
    game.add_scene("track", Box::new(Track { hits: hits.clone() }));
    game.load_scene("track").unwrap();
    (game, tx, hits)
}

#[test]
fn runner_hits_post_once_while_passing_through() {
    let config = config();
    let (mut game, _tx, hits) = track_game(&config);

    // Runner spans [x-2, x+2], post spans [18, 22]; they overlap for x in 16..=24.
    for _ in 0..40 {
        game.tick();
    }

    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(game.counter("hits").get(), 1);
    let post = game.game_object("post").unwrap();
    assert_eq!(post.body().position, Vector::xy(20.0, 10.0));
}

#[test]
fn frame_reflects_both_objects() {
    let config = config();
    let (mut game, _tx, _hits) = track_game(&config);
    let frame = game.render_frame();
    // 4x4 runner plus 4x40 post
    assert_eq!(frame.pixels.len(), 16 + 160);
    assert_eq!((frame.width, frame.height), (64, 64));
}

#[tokio::test(flavor = "multi_thread")]
async fn engine_runs_until_game_requests_exit() {
    let config = config();
    let (game, tx, hits) = track_game(&config);
    let surface = HeadlessSurface::new();
    let stats = surface.stats();

    let engine = Engine::start(game, Box::new(surface), &config);
    tokio::time::sleep(Duration::from_millis(300)).await;
    tx.key_pressed(keys::ENTER);

    tokio::time::timeout(Duration::from_secs(2), engine.wait_for_exit())
        .await
        .expect("engine should exit after ENTER");
    let shared = engine.game();
    engine.shutdown().await.unwrap();

    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert!(lock_game(&shared).ticks() > 16);
    assert!(stats.frames() > 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn pause_key_freezes_simulation_but_not_frames() {
    let config = config();
    let (game, tx, _hits) = track_game(&config);
    let surface = HeadlessSurface::new();
    let stats = surface.stats();

    let engine = Engine::start(game, Box::new(surface), &config);
    tx.key_pressed(keys::ESCAPE);
    tokio::time::sleep(Duration::from_millis(50)).await;

    let shared = engine.game();
    let (ticks, x) = {
        let game = lock_game(&shared);
        assert!(game.paused());
        let x = game.game_object("runner").unwrap().body().position.x;
        (game.ticks(), x)
    };
    let frames = stats.frames();

    tokio::time::sleep(Duration::from_millis(100)).await;
    {
        let game = lock_game(&shared);
        assert_eq!(game.ticks(), ticks);
        assert_eq!(game.game_object("runner").unwrap().body().position.x, x);
    }
    assert!(stats.frames() > frames);

    engine.shutdown().await.unwrap();
}
