//! Camera that travels along a fixed rail
//!
//! The player ship is parented to this camera, so its world matrix must be
//! updated before the player's each frame.

use rail_engine::foundation::math::{Mat4, Vec3};
use rail_engine::render::ViewProjection;
use rail_engine::scene::WorldTransform;

use crate::config::RailCameraConfig;

/// Rail-guided camera
#[derive(Debug, Clone)]
pub struct RailCamera {
    transform: WorldTransform,
    velocity: Vec3,
    view_projection: ViewProjection,
}

impl RailCamera {
    /// Place the camera at the start of its rail
    pub fn new(config: &RailCameraConfig) -> Self {
        let transform = WorldTransform::from_translation_rotation(config.position, config.rotation);
        let view_projection = ViewProjection::from_camera_world(transform.world_matrix());
        Self {
            transform,
            velocity: config.velocity,
            view_projection,
        }
    }

    /// Advance one frame along the rail
    pub fn update(&mut self) {
        self.transform.translation += self.velocity;
        let world = self.transform.compute_world(None);
        self.view_projection = ViewProjection::from_camera_world(&world);
    }

    /// World matrix, the parent of the player ship
    pub fn world_matrix(&self) -> &Mat4 {
        self.transform.world_matrix()
    }

    /// World position
    pub fn world_position(&self) -> Vec3 {
        self.transform.world_position()
    }

    /// Current view and projection
    pub fn view_projection(&self) -> &ViewProjection {
        &self.view_projection
    }
}
