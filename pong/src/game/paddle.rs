use flatland_engine::hitbox::{Collidable, HitBox};
use flatland_engine::object::{Body, GameObject};
use flatland_engine::panel::{Canvas, DrawContext, DrawListener};
use flatland_engine::{Color, Vector};

use crate::constants::{
    PADDLE_FRICTION, PADDLE_HEIGHT, PADDLE_MAX_SPEED, PADDLE_ROLE, PADDLE_WIDTH,
};

/// A vertical paddle steered through its acceleration, by the keyboard or
/// by an agent.
pub struct Paddle {
    body: Body,
    play_height: f64,
}

impl Paddle {
    pub fn new(position: Vector, play_height: f64) -> Self {
        Self {
            body: Body::new(position, HitBox::new(PADDLE_WIDTH, PADDLE_HEIGHT)),
            play_height,
        }
    }
}

impl DrawListener for Paddle {
    fn draw(&self, canvas: &mut Canvas, ctx: &DrawContext) {
        let color = if ctx.paused {
            Color::DARK_GRAY
        } else {
            Color::WHITE
        };
        let bounds = self.body.bounds();
        canvas.fill_bounds(&bounds, color);
        if ctx.dev_mode {
            canvas.outline_bounds(&bounds, Color::LIGHT_BLUE);
        }
    }
}

impl GameObject for Paddle {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn run_logic(&mut self) {
        let body = &mut self.body;
        body.velocity.y += body.acceleration.y;
        if body.acceleration.y == 0.0 {
            body.velocity.y *= PADDLE_FRICTION;
        }
        body.velocity.y = body.velocity.y.clamp(-PADDLE_MAX_SPEED, PADDLE_MAX_SPEED);
        body.position.y += body.velocity.y;

        let half = body.hitbox.height / 2.0;
        let (top, bottom) = (half, self.play_height - half);
        if body.position.y < top || body.position.y > bottom {
            body.position.y = body.position.y.clamp(top, bottom);
            body.velocity.y = 0.0;
        }
    }

    fn collidable(&self) -> Option<&dyn Collidable> {
        Some(self)
    }

    fn collidable_mut(&mut self) -> Option<&mut dyn Collidable> {
        Some(self)
    }
}

impl Collidable for Paddle {
    fn name(&self) -> &'static str {
        PADDLE_ROLE
    }
}
