use flatland_engine::command::Commands;
use flatland_engine::hitbox::{Collidable, Contact, HitBox};
use flatland_engine::object::{Body, GameObject};
use flatland_engine::panel::{Canvas, DrawContext, DrawListener};
use flatland_engine::{Color, Vector};

use crate::constants::{BALL, BALL_SIZE, PADDLE_ROLE, PADDLE_SPEED_UP, WALL_ROLE};

pub struct Ball {
    body: Body,
}

impl Ball {
    pub fn new(position: Vector, velocity: Vector) -> Self {
        Self {
            body: Body::new(position, HitBox::new(BALL_SIZE, BALL_SIZE)).with_velocity(velocity),
        }
    }
}

impl DrawListener for Ball {
    fn draw(&self, canvas: &mut Canvas, ctx: &DrawContext) {
        let color = if ctx.paused {
            Color::DARK_GRAY
        } else {
            Color::WHITE
        };
        let p = self.body.position;
        canvas.set_big_pixel(p.x as i32, p.y as i32, BALL_SIZE as i32, color);
        if ctx.dev_mode {
            canvas.outline_bounds(&self.body.bounds(), Color::LIGHT_BLUE);
        }
    }
}

impl GameObject for Ball {
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

impl Collidable for Ball {
    fn name(&self) -> &'static str {
        BALL
    }

    fn collision(&mut self, other: &Contact, _commands: &mut Commands) {
        let velocity = &mut self.body.velocity;
        match other.name {
            PADDLE_ROLE => {
                velocity.scale(-1.0, 1.0, 1.0);
                let nudge = if velocity.x > 0.0 {
                    PADDLE_SPEED_UP
                } else {
                    -PADDLE_SPEED_UP
                };
                *velocity += Vector::xy(nudge, 0.0);
            }
            WALL_ROLE => velocity.scale(1.0, -1.0, 1.0),
            _ => {}
        }
    }
}
