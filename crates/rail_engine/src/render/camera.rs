//! View and projection matrices for one frame

use crate::foundation::math::{utils, Mat4, Mat4Ext};

/// Vertical field of view in degrees
pub const DEFAULT_FOV_DEGREES: f32 = 45.0;
/// Viewport aspect ratio (width / height)
pub const DEFAULT_ASPECT: f32 = 16.0 / 9.0;
/// Near clipping plane distance
pub const DEFAULT_NEAR: f32 = 0.1;
/// Far clipping plane distance
pub const DEFAULT_FAR: f32 = 2000.0;

/// Camera matrices handed to the renderer
///
/// A plain value: scene objects receive a copy each frame rather than a
/// reference to whichever camera is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewProjection {
    /// World-to-view matrix
    pub view: Mat4,
    /// View-to-clip matrix
    pub projection: Mat4,
}

impl Default for ViewProjection {
    fn default() -> Self {
        Self {
            view: Mat4::identity(),
            projection: Self::default_projection(),
        }
    }
}

impl ViewProjection {
    /// Combine a view matrix with a projection
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self { view, projection }
    }

    /// View matrix for a camera whose world matrix is `world`, with the
    /// default projection
    pub fn from_camera_world(world: &Mat4) -> Self {
        Self::new(Mat4::view_from_world(world), Self::default_projection())
    }

    /// Perspective projection with the default lens
    pub fn default_projection() -> Mat4 {
        Mat4::perspective(
            utils::deg_to_rad(DEFAULT_FOV_DEGREES),
            DEFAULT_ASPECT,
            DEFAULT_NEAR,
            DEFAULT_FAR,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_camera_world_inverts() {
        let world = Mat4::new_translation(&Vec3::new(0.0, 0.0, -50.0));
        let camera = ViewProjection::from_camera_world(&world);
        assert_relative_eq!(camera.view * world, Mat4::identity(), epsilon = 1e-5);
    }

    #[test]
    fn test_default_projection_is_perspective() {
        let projection = ViewProjection::default_projection();
        assert_relative_eq!(projection[(3, 2)], 1.0);
        assert_relative_eq!(projection[(0, 0)] * DEFAULT_ASPECT, projection[(1, 1)], epsilon = 1e-5);
    }
}
