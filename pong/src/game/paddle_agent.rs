use flatland_engine::agent::AiAgent;
use flatland_engine::object::{ObjectId, ObjectTable};

use crate::constants::{AI_DEAD_ZONE, PADDLE_ACCELERATION};

/// Steers a paddle toward the ball's height. Stateless apart from the two
/// handles it was given.
pub struct PaddleAgent {
    paddle: ObjectId,
    ball: ObjectId,
}

impl PaddleAgent {
    pub fn new(paddle: ObjectId, ball: ObjectId) -> Self {
        Self { paddle, ball }
    }
}

impl AiAgent for PaddleAgent {
    fn logic(&mut self, objects: &mut ObjectTable) {
        let Some(ball_y) = objects.get(self.ball).map(|b| b.body().position.y) else {
            return;
        };
        let Some(paddle) = objects.get_mut(self.paddle) else {
            return;
        };

        let body = paddle.body_mut();
        let offset = ball_y - body.position.y;
        body.acceleration.y = if offset > AI_DEAD_ZONE {
            PADDLE_ACCELERATION
        } else if offset < -AI_DEAD_ZONE {
            -PADDLE_ACCELERATION
        } else {
            0.0
        };
    }
}
