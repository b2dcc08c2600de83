use flatland_engine::hitbox::{Collidable, HitBox};
use flatland_engine::object::{Body, GameObject};
use flatland_engine::panel::{Canvas, DrawContext, DrawListener};
use flatland_engine::{Color, Vector};

use crate::constants::{WALL_ROLE, WALL_THICKNESS};

/// Immutable horizontal barrier just outside the top or bottom edge.
pub struct Wall {
    body: Body,
}

impl Wall {
    pub fn new(width: f64, position: Vector) -> Self {
        Self {
            body: Body::fixed(position, HitBox::new(width, WALL_THICKNESS)),
        }
    }
}

impl DrawListener for Wall {
    fn draw(&self, canvas: &mut Canvas, ctx: &DrawContext) {
        if ctx.dev_mode {
            canvas.outline_bounds(&self.body.bounds(), Color::LIGHT_BLUE);
        }
    }
}

impl GameObject for Wall {
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

impl Collidable for Wall {
    fn name(&self) -> &'static str {
        WALL_ROLE
    }
}
