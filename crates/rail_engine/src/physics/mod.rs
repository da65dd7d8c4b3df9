//! Physics module for collision detection and response
//!
//! Provides sphere overlap tests, collision layer filtering and the
//! [`Collider`] seam through which scene objects receive hit callbacks.

pub mod collision;
pub mod collision_layers;

pub use collision::{check_pair, BoundingSphere, Collider};
pub use collision_layers::CollisionLayers;
