//! Value types shared by the engine and the games built on it.

pub mod config;
pub mod pixel;
pub mod vector;

pub use config::EngineConfig;
pub use pixel::{Color, Pixel};
pub use vector::Vector;
