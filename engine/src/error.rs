//! Engine-level error type.

use thiserror::Error;

use crate::scene::SceneError;
use crate::surface::SurfaceError;

/// Errors surfaced by the engine runtime.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no scene registered under {0:?}")]
    UnknownScene(String),
    #[error("scene {scene:?} failed to load: {source}")]
    SceneLoad {
        scene: String,
        #[source]
        source: SceneError,
    },
    #[error("scene {0:?} panicked while loading")]
    ScenePanicked(String),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    #[error("engine task failed to join: {0}")]
    TaskJoin(String),
}
