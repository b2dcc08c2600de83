use std::sync::Arc;

use flatland_engine::command::Commands;
use flatland_engine::counter::ScoreCounter;
use flatland_engine::hitbox::{Collidable, Contact, HitBox};
use flatland_engine::object::{Body, GameObject};
use flatland_engine::panel::{Canvas, DrawContext, DrawListener};
use flatland_engine::{Color, Vector};

use super::serve::{serve, Side};
use crate::constants::{BALL, GOAL_ROLE, GOAL_WIDTH};

/// Scoring zone behind one side's paddle.
///
/// While the ball touches it the opponent scores and the ball is served
/// back toward the side that conceded.
pub struct Goal {
    body: Body,
    owner: Side,
    scorer: Arc<ScoreCounter>,
}

impl Goal {
    pub fn new(position: Vector, height: f64, owner: Side, scorer: Arc<ScoreCounter>) -> Self {
        Self {
            body: Body::fixed(position, HitBox::new(GOAL_WIDTH, height)),
            owner,
            scorer,
        }
    }
}

impl DrawListener for Goal {
    fn draw(&self, canvas: &mut Canvas, ctx: &DrawContext) {
        if ctx.dev_mode {
            canvas.outline_bounds(&self.body.bounds(), Color::YELLOW);
        }
    }
}

impl GameObject for Goal {
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

impl Collidable for Goal {
    fn name(&self) -> &'static str {
        GOAL_ROLE
    }

    fn touch(&mut self, other: &Contact, commands: &mut Commands) {
        if other.name != BALL {
            return;
        }
        let score = self.scorer.increment();
        let toward = self.owner;
        tracing::info!("{:?} scores ({})", toward.opponent(), score);
        commands.push(move |game| serve(game, toward));
    }
}
