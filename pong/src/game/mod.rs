mod ball;
mod goal;
mod hud;
mod main_game;
mod paddle;
mod paddle_agent;
mod serve;
mod wall;

pub use ball::Ball;
pub use goal::Goal;
pub use hud::{DividingLine, MenuOption, MenuSelection, PauseMenu, ScoreTally};
pub use main_game::MainGame;
pub use paddle::Paddle;
pub use paddle_agent::PaddleAgent;
pub use serve::{serve, Side};
pub use wall::Wall;

use flatland_engine::error::EngineError;
use flatland_engine::game::Game;
use flatland_engine::input::InputQueue;
use flatland_engine::EngineConfig;

use crate::constants::MAIN_SCENE;

/// A game with the main scene registered and loaded.
pub fn build_game(config: &EngineConfig, input: InputQueue) -> Result<Game, EngineError> {
    let mut game = Game::new(config, input);
    game.add_scene(MAIN_SCENE, Box::new(MainGame::new()));
    game.load_scene(MAIN_SCENE)?;
    Ok(game)
}
