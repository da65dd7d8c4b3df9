//! Free-flying camera for inspecting the stage

use rail_engine::foundation::math::Vec3;
use rail_engine::input::{InputSource, KeyCode};
use rail_engine::render::ViewProjection;
use rail_engine::scene::WorldTransform;

use crate::config::DebugCameraConfig;

/// Keyboard-driven free camera
#[derive(Debug, Clone)]
pub struct DebugCamera {
    transform: WorldTransform,
    move_speed: f32,
    rotation_speed: f32,
    view_projection: ViewProjection,
}

impl DebugCamera {
    /// Create at the configured position looking down +Z
    pub fn new(config: &DebugCameraConfig) -> Self {
        let transform = WorldTransform::from_translation(config.position);
        let view_projection = ViewProjection::from_camera_world(transform.world_matrix());
        Self {
            transform,
            move_speed: config.move_speed,
            rotation_speed: config.rotation_speed,
            view_projection,
        }
    }

    /// Apply held keys: I/K forward/back, J/L strafe, U/O down/up, Q/E yaw
    pub fn update(&mut self, input: &dyn InputSource) {
        let axis = |negative: KeyCode, positive: KeyCode| -> f32 {
            match (input.is_held(negative), input.is_held(positive)) {
                (true, false) => -1.0,
                (false, true) => 1.0,
                _ => 0.0,
            }
        };

        self.transform.rotation.y += axis(KeyCode::Q, KeyCode::E) * self.rotation_speed;
        self.transform.compute_world(None);

        let forward = self.transform.transform_direction(&Vec3::new(0.0, 0.0, 1.0));
        let right = self.transform.transform_direction(&Vec3::new(1.0, 0.0, 0.0));
        let up = Vec3::new(0.0, 1.0, 0.0);

        let step = forward * axis(KeyCode::K, KeyCode::I)
            + right * axis(KeyCode::J, KeyCode::L)
            + up * axis(KeyCode::U, KeyCode::O);
        self.transform.translation += step * self.move_speed;

        let world = self.transform.compute_world(None);
        self.view_projection = ViewProjection::from_camera_world(&world);
    }

    /// Camera position
    pub fn position(&self) -> Vec3 {
        self.transform.translation
    }

    /// Current view and projection
    pub fn view_projection(&self) -> &ViewProjection {
        &self.view_projection
    }
}
