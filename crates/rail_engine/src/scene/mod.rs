//! Scene primitives shared by every entity kind
//!
//! World transforms and axis-aligned bounds used for playfield limits.

pub mod bounds;
pub mod transform;

pub use bounds::AABB;
pub use transform::WorldTransform;
