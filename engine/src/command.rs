//! Deferred world commands.
//!
//! Collision callbacks run while the physics pass borrows one object at a
//! time, so they cannot touch the rest of the world directly. Instead they
//! push closures here; `Game::tick` applies them in push order once the
//! pass is over.

use crate::game::Game;

type Command = Box<dyn FnOnce(&mut Game) + Send>;

#[derive(Default)]
pub struct Commands {
    queue: Vec<Command>,
}

impl Commands {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: impl FnOnce(&mut Game) + Send + 'static) {
        self.queue.push(Box::new(command));
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Run every queued command against `game`, oldest first.
    pub fn apply(&mut self, game: &mut Game) {
        for command in self.queue.drain(..) {
            command(game);
        }
    }
}

impl std::fmt::Debug for Commands {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Commands")
            .field("queued", &self.queue.len())
            .finish()
    }
}
