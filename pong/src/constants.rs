pub const MAIN_SCENE: &str = "Main Game";

pub const BALL: &str = "Ball";
pub const AI_PADDLE: &str = "AI Paddle";
pub const PLAYER_PADDLE: &str = "Player Paddle";
pub const TOP_WALL: &str = "Wall1";
pub const BOTTOM_WALL: &str = "Wall2";
pub const PLAYER_GOAL: &str = "Player Goal";
pub const AI_GOAL: &str = "AI Goal";

/// Collision role names. The ball's role matches its object name.
pub const PADDLE_ROLE: &str = "Paddle";
pub const WALL_ROLE: &str = "Wall";
pub const GOAL_ROLE: &str = "Goal";

/// Counter names passed to `Game::counter`.
pub const PLAYER_SCORE: &str = "player";
pub const AI_SCORE: &str = "ai";

pub const BALL_SIZE: f64 = 20.0;
/// Horizontal and vertical serve speed (pixels per tick).
pub const BALL_SPEED: f64 = 6.0;
/// Minimum gap between a served ball's centre and the top or bottom edge:
/// half the ball plus one step.
pub const SERVE_MARGIN: f64 = BALL_SIZE / 2.0 + BALL_SPEED;
/// Added to the ball's horizontal speed on every paddle hit.
pub const PADDLE_SPEED_UP: f64 = 0.2;

pub const PADDLE_WIDTH: f64 = 20.0;
pub const PADDLE_HEIGHT: f64 = 100.0;
pub const PADDLE_ACCELERATION: f64 = 1.0;
pub const PADDLE_MAX_SPEED: f64 = 8.0;
/// Velocity multiplier applied each tick a paddle has no acceleration.
pub const PADDLE_FRICTION: f64 = 0.8;
/// The AI leaves its paddle alone while the ball is this close vertically.
pub const AI_DEAD_ZONE: f64 = 10.0;

pub const WALL_THICKNESS: f64 = 100.0;
pub const GOAL_WIDTH: f64 = 100.0;
/// Goals sit this far outside the paddles' x positions.
pub const GOAL_OFFSET: f64 = 150.0;

/// Side length of one score block in the tally.
pub const SCORE_BLOCK: i32 = 10;
pub const SCORE_BLOCKS_PER_ROW: u32 = 10;
