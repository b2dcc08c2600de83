//! Pong, built on the flatland engine.
//!
//! The library holds the game objects, the AI agent, the main scene and the
//! console input mapper so the binary and the tests share them.

pub mod console;
pub mod constants;
pub mod game;

pub use game::{build_game, serve, MainGame, Side};
