//! Gameplay scenarios run through the real engine tick.

use std::time::Duration;

use flatland_engine::game::Game;
use flatland_engine::game_loop::{lock_game, Engine};
use flatland_engine::hitbox::HitBox;
use flatland_engine::input::{input_channel, keys, InputSender};
use flatland_engine::object::{Body, GameObject};
use flatland_engine::panel::{Canvas, DrawContext, DrawListener};
use flatland_engine::surface::HeadlessSurface;
use flatland_engine::{EngineConfig, Vector};
use flatland_pong::constants::{
    AI_PADDLE, AI_SCORE, BALL, BALL_SIZE, BALL_SPEED, BOTTOM_WALL, PLAYER_GOAL, PLAYER_PADDLE,
    PLAYER_SCORE, SERVE_MARGIN, TOP_WALL,
};
use flatland_pong::game::{Ball, Paddle, Wall};
use flatland_pong::{build_game, serve, Side};

fn pong() -> (Game, InputSender) {
    let (tx, queue) = input_channel(64);
    let game = build_game(&EngineConfig::default(), queue).unwrap();
    (game, tx)
}

/// A bare world with no scene, for isolated collisions.
fn empty() -> Game {
    let (_tx, queue) = input_channel(4);
    Game::new(&EngineConfig::default(), queue)
}

fn velocity(game: &Game, name: &str) -> Vector {
    game.game_object(name).unwrap().body().velocity
}

fn position(game: &Game, name: &str) -> Vector {
    game.game_object(name).unwrap().body().position
}

#[test]
fn ball_bounces_off_paddle_faster() {
    let mut game = empty();
    // The ball moves first, so start it one step right of the contact point.
    game.add_game_object(
        BALL,
        Box::new(Ball::new(Vector::xy(400.0, 300.0), Vector::xy(-6.0, 0.0))),
    );
    game.add_game_object("Paddle", Box::new(Paddle::new(Vector::xy(380.0, 300.0), 600.0)));

    let summary = game.tick();

    assert_eq!(summary.collisions, 1);
    let v = velocity(&game, BALL);
    assert!((v.x - 6.2).abs() < 1e-9);
    assert_eq!((v.y, v.z), (0.0, 0.0));
}

#[test]
fn ball_bounces_off_wall_vertically() {
    let mut game = empty();
    game.add_game_object(
        BALL,
        Box::new(Ball::new(Vector::xy(400.0, 15.0), Vector::xy(-6.0, -6.0))),
    );
    game.add_game_object("Wall", Box::new(Wall::new(800.0, Vector::xy(400.0, -50.0))));

    game.tick();

    assert_eq!(velocity(&game, BALL), Vector::xy(-6.0, 6.0));
    assert_eq!(position(&game, "Wall"), Vector::xy(400.0, -50.0));
}

#[test]
fn serve_toward_ai_heads_left_from_a_quarter() {
    let (mut game, _tx) = pong();
    let h = game.height() as f64;
    for _ in 0..50 {
        serve(&mut game, Side::Ai);
        let p = position(&game, BALL);
        let v = velocity(&game, BALL);
        assert_eq!(v.x, -BALL_SPEED);
        assert_eq!(p.x, game.width() as f64 / 2.0);
        if v.y > 0.0 {
            assert!((SERVE_MARGIN..h / 4.0).contains(&p.y), "downward serve from {}", p.y);
        } else {
            assert_eq!(v.y, -BALL_SPEED);
            assert!(
                (h * 3.0 / 4.0..h - SERVE_MARGIN).contains(&p.y),
                "upward serve from {}",
                p.y
            );
        }
    }
}

#[test]
fn serve_directions_are_both_used() {
    let (mut game, _tx) = pong();
    let mut downs = 0;
    for _ in 0..100 {
        serve(&mut game, Side::Player);
        assert_eq!(velocity(&game, BALL).x, BALL_SPEED);
        if velocity(&game, BALL).y > 0.0 {
            downs += 1;
        }
    }
    assert!((20..=80).contains(&downs), "{downs} downward serves of 100");
}

#[test]
fn served_ball_never_starts_inside_a_wall() {
    for seed in 0..256 {
        let config = EngineConfig {
            rng_seed: seed,
            ..EngineConfig::default()
        };
        let (_tx, queue) = input_channel(4);
        let mut game = build_game(&config, queue).unwrap();
        let top = game.game_object(TOP_WALL).unwrap().body().bounds();
        let bottom = game.game_object(BOTTOM_WALL).unwrap().body().bounds();

        for _ in 0..8 {
            serve(&mut game, Side::Player);
            let ball = game.game_object(BALL).unwrap().body().clone();
            let mut stepped = ball.clone();
            stepped.integrate();
            for bounds in [ball.bounds(), stepped.bounds()] {
                assert!(!bounds.overlaps(&top), "seed {seed}: ball at {}", ball.position);
                assert!(!bounds.overlaps(&bottom), "seed {seed}: ball at {}", ball.position);
            }
        }
    }
}

#[test]
fn served_ball_stays_in_court() {
    let config = EngineConfig {
        rng_seed: 81,
        ..EngineConfig::default()
    };
    let (_tx, queue) = input_channel(4);
    let mut game = build_game(&config, queue).unwrap();
    let h = game.height() as f64;

    for _ in 0..20 {
        serve(&mut game, Side::Ai);
        for _ in 0..60 {
            game.tick();
            let y = position(&game, BALL).y;
            assert!(
                (BALL_SIZE / 2.0 - BALL_SPEED..=h + BALL_SPEED - BALL_SIZE / 2.0).contains(&y),
                "ball left the court at y={y}"
            );
        }
    }
}

#[test]
fn serve_without_ball_is_a_no_op() {
    let mut game = empty();
    serve(&mut game, Side::Ai);
    assert!(game.game_object(BALL).is_none());
}

#[test]
fn ball_in_player_goal_scores_for_ai_and_serves_to_player() {
    let (mut game, _tx) = pong();
    let goal_x = position(&game, PLAYER_GOAL).x;
    if let Some(ball) = game.game_object_mut(BALL) {
        let body = ball.body_mut();
        body.position = Vector::xy(goal_x, 300.0);
        body.velocity = Vector::xy(6.0, 0.0);
    }

    game.tick();

    assert_eq!(game.counter(AI_SCORE).get(), 1);
    assert_eq!(game.counter(PLAYER_SCORE).get(), 0);
    assert_eq!(velocity(&game, BALL).x, BALL_SPEED);
    assert_eq!(position(&game, BALL).x, 400.0);
}

#[test]
fn reload_leaves_only_fresh_objects_and_scores() {
    let (mut game, _tx) = pong();
    game.counter(AI_SCORE).increment();
    game.add_game_object("Stray", Box::new(Stray::new()));
    if let Some(ball) = game.game_object_mut(BALL) {
        ball.body_mut().position = Vector::xy(10.0, 10.0);
    }

    game.load_scene(flatland_pong::constants::MAIN_SCENE).unwrap();

    assert!(game.game_object("Stray").is_none());
    assert_eq!(game.objects().len(), 7);
    assert_eq!(game.counter(AI_SCORE).get(), 0);
    assert_eq!(position(&game, BALL), Vector::xy(600.0, 300.0));
}

#[test]
fn ai_paddle_tracks_the_ball() {
    let (mut game, _tx) = pong();
    if let Some(ball) = game.game_object_mut(BALL) {
        ball.body_mut().position.y = 100.0;
    }
    let start = position(&game, AI_PADDLE).y;
    for _ in 0..10 {
        game.tick();
    }
    assert!(position(&game, AI_PADDLE).y < start);
}

#[test]
fn held_arrow_moves_player_paddle() {
    let (mut game, tx) = pong();
    let start = position(&game, PLAYER_PADDLE).y;
    tx.key_pressed(keys::ARROW_DOWN);
    for _ in 0..5 {
        game.process_input();
        game.tick();
    }
    assert!(position(&game, PLAYER_PADDLE).y > start);
}

#[tokio::test(flavor = "multi_thread")]
async fn pause_freezes_the_court_across_frames() {
    let config = EngineConfig {
        logic_rate_hz: 200,
        frame_rate_hz: 200,
        ..EngineConfig::default()
    };
    let (tx, queue) = input_channel(config.input_capacity);
    let game = build_game(&config, queue).unwrap();
    let surface = HeadlessSurface::new();
    let stats = surface.stats();
    let engine = Engine::start(game, Box::new(surface), &config);

    tokio::time::sleep(Duration::from_millis(50)).await;
    tx.key_pressed(keys::ESCAPE);
    tokio::time::sleep(Duration::from_millis(50)).await;

    let shared = engine.game();
    let frozen = {
        let game = lock_game(&shared);
        assert!(game.paused());
        game.game_object(BALL).unwrap().body().clone()
    };
    let frames = stats.frames();
    tokio::time::sleep(Duration::from_millis(100)).await;
    {
        let game = lock_game(&shared);
        assert_eq!(game.game_object(BALL).unwrap().body(), &frozen);
    }
    assert!(stats.frames() > frames);

    // Resume picks up from the frozen state.
    tx.key_released(keys::ESCAPE);
    tx.key_pressed(keys::ESCAPE);
    tokio::time::sleep(Duration::from_millis(50)).await;
    {
        let game = lock_game(&shared);
        assert!(!game.paused());
        assert_ne!(game.game_object(BALL).unwrap().body().position, frozen.position);
    }

    engine.shutdown().await.unwrap();
}

/// Leftover object that a reload must not keep.
struct Stray {
    body: Body,
}

impl Stray {
    fn new() -> Self {
        Self {
            body: Body::new(Vector::ZERO, HitBox::new(1.0, 1.0)),
        }
    }
}

impl DrawListener for Stray {
    fn draw(&self, _canvas: &mut Canvas, _ctx: &DrawContext) {}
}

impl GameObject for Stray {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}
