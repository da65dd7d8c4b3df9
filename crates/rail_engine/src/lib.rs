//! # Rail Engine
//!
//! Frame-stepped foundation for a small rail shooter scene.
//!
//! ## Features
//!
//! - **Transforms**: Euler-angle world transforms with explicit parent matrices
//! - **Owned Pools**: Insertion-ordered entity pools with single-release sweeps
//! - **Collision**: Bounding spheres, collision layers and pair callbacks
//! - **Input**: Level- and edge-triggered key queries
//! - **Render Seams**: Renderer and texture traits with headless implementations
//! - **Configuration**: TOML/RON configuration loading
//!
//! ## Quick Start
//!
//! ```rust
//! use rail_engine::prelude::*;
//!
//! let mut transform = WorldTransform::from_translation(Vec3::new(0.0, 0.0, 5.0));
//! let parent = Mat4::new_translation(&Vec3::new(1.0, 0.0, 0.0));
//! transform.compute_world(Some(&parent));
//! assert_eq!(transform.world_position(), Vec3::new(1.0, 0.0, 5.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod input;
pub mod physics;
pub mod render;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        foundation::{
            collections::{EntityPool, Lifecycle},
            math::{Mat4, Vec2, Vec3},
            time::{FrameCountdown, Timer},
        },
        input::{InputManager, InputSource, KeyCode},
        physics::{check_pair, BoundingSphere, Collider, CollisionLayers},
        render::{DrawLog, Renderer, TextureHandle, TextureLoader, TextureRegistry, ViewProjection},
        scene::{WorldTransform, AABB},
    };
}
