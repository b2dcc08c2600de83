//! Scenes: named world setups that can be loaded and reloaded.

use thiserror::Error;

use crate::game::Game;
use crate::input::{KeyCode, MouseButton};

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("{0}")]
    Invalid(String),
}

/// A swappable configuration of objects, agents and listeners.
///
/// `load` runs against a game that has just been cleared. Input handlers
/// run with the scene temporarily detached from the game, so a scene that
/// wants to replace itself must use [`Game::request_scene`] rather than
/// loading directly.
pub trait Scene: Send {
    fn load(&mut self, game: &mut Game) -> Result<(), SceneError>;

    fn keyboard_input(&mut self, _game: &mut Game, _key: KeyCode, _pressed: bool) {}

    fn mouse_input(
        &mut self,
        _game: &mut Game,
        _position: (i32, i32),
        _button: MouseButton,
        _pressed: bool,
    ) {
    }
}
