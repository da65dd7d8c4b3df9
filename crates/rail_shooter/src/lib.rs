//! # Rail Shooter
//!
//! A single rail-shooter stage: the player ship rides a camera along a fixed
//! rail while enemies approach, fire and peel away.
//!
//! The crate is headless. Drawing, textures and input go through the
//! `rail_engine` collaborator traits, so the whole stage runs in tests.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod collision;
pub mod config;
pub mod debug_camera;
pub mod enemy;
pub mod game;
pub mod player;
pub mod projectile;
pub mod rail_camera;
pub mod scene;
pub mod skydome;
pub mod spawn_script;

#[cfg(test)]
mod tests;

use rail_engine::config::ConfigError;

use crate::spawn_script::SpawnScriptError;

/// Errors raised while setting up the game
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Spawn script could not be loaded
    #[error("Spawn script error: {0}")]
    SpawnScript(#[from] SpawnScriptError),
}
