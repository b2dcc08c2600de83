//! AI agents that steer objects each tick.

use crate::object::ObjectTable;

/// Autonomous controller invoked once per logic tick, before any object
/// logic runs. Agents steer the objects they hold handles to, typically by
/// writing acceleration or velocity; handles that no longer resolve are
/// simply ignored.
pub trait AiAgent: Send {
    fn logic(&mut self, objects: &mut ObjectTable);
}
