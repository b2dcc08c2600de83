//! Flatland engine library.
//!
//! A small 2D engine: a world of game objects, AI agents and a physics pass
//! advanced by a logic task, and a pixel pipeline drained by an independent
//! render task. Games plug in through scenes.

pub mod agent;
pub mod command;
pub mod counter;
pub mod error;
pub mod fps;
pub mod game;
pub mod game_loop;
pub mod hitbox;
pub mod input;
pub mod object;
pub mod panel;
pub mod physics;
pub mod scene;
pub mod surface;

pub use flatland_shared::{Color, EngineConfig, Pixel, Vector};
