use flatland_engine::game::Game;
use rand::Rng;

use crate::constants::{BALL, BALL_SPEED, SERVE_MARGIN};

/// One side of the court.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left paddle, driven by the agent.
    Ai,
    /// Right paddle, driven by the keyboard.
    Player,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Ai => Side::Player,
            Side::Player => Side::Ai,
        }
    }

    /// Horizontal serve velocity heading toward this side.
    pub fn serve_velocity_x(self) -> f64 {
        match self {
            Side::Ai => -BALL_SPEED,
            Side::Player => BALL_SPEED,
        }
    }
}

/// Put the ball back at the centre line heading toward `toward`.
///
/// Vertical direction is a coin flip. A ball heading down starts in the top
/// quarter of the play height, one heading up in the bottom quarter. Both
/// ranges keep `SERVE_MARGIN` clear of the court edge, so the first step
/// never lands inside a wall. Does nothing if the scene has no ball.
pub fn serve(game: &mut Game, toward: Side) {
    let (width, height) = (game.width() as f64, game.height() as f64);
    let quarter = height / 4.0;
    let rng = game.rng_mut();
    let downward = rng.gen_bool(0.5);
    let offset = rng.gen::<f64>() * (quarter - SERVE_MARGIN).max(0.0);
    let y = if downward {
        SERVE_MARGIN + offset
    } else {
        height - quarter + offset
    };

    let Some(ball) = game.game_object_mut(BALL) else {
        tracing::warn!("Serve requested with no ball in the scene");
        return;
    };
    let body = ball.body_mut();
    body.position.x = width / 2.0;
    body.position.y = y;
    body.velocity.x = toward.serve_velocity_x();
    body.velocity.y = if downward { BALL_SPEED } else { -BALL_SPEED };
    tracing::debug!("Served toward {:?} from {}", toward, body.position);
}
