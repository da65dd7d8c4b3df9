//! Math utilities and types
//!
//! Provides fundamental math types for 3D scene logic. Matrices follow the
//! nalgebra column-vector convention: a point is transformed as `M * p`, and
//! the translation of an affine matrix lives in its last column.

pub use nalgebra::{Matrix4, Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Mat4, Vec3};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Affine matrix from scale, Euler rotation and translation
    ///
    /// The rotation is applied about X first, then Y, then Z; scale is applied
    /// before rotation and translation last.
    pub fn affine(scale: &Vec3, rotation: &Vec3, translation: &Vec3) -> Mat4 {
        Mat4::new_translation(translation)
            * Mat4::from_euler_angles(rotation.x, rotation.y, rotation.z)
            * Mat4::new_nonuniform_scaling(scale)
    }

    /// Translation column of an affine matrix
    pub fn translation_of(matrix: &Mat4) -> Vec3 {
        Vec3::new(matrix[(0, 3)], matrix[(1, 3)], matrix[(2, 3)])
    }

    /// Unit vector from `from` toward `to`, or `fallback` when they coincide
    pub fn direction_or(from: &Vec3, to: &Vec3, fallback: Vec3) -> Vec3 {
        (to - from).try_normalize(f32::EPSILON).unwrap_or(fallback)
    }
}

/// Extension trait for Mat4 with additional convenience methods
pub trait Mat4Ext {
    /// Create a perspective projection matrix with a `[0, 1]` depth range
    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4;

    /// Invert an affine world matrix into a view matrix
    ///
    /// Degenerate matrices (zero scale) fall back to identity.
    fn view_from_world(world: &Mat4) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        let tan_half_fovy = (fov_y * 0.5).tan();

        let mut result = Mat4::zeros();
        result[(0, 0)] = 1.0 / (aspect * tan_half_fovy);
        result[(1, 1)] = 1.0 / tan_half_fovy;
        result[(2, 2)] = far / (far - near);
        result[(2, 3)] = -(near * far) / (far - near);
        result[(3, 2)] = 1.0;
        result
    }

    fn view_from_world(world: &Mat4) -> Mat4 {
        world.try_inverse().unwrap_or_else(|| {
            log::warn!("Camera world matrix is not invertible, using identity view");
            Mat4::identity()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_affine_applies_rotation_x_before_y() {
        // Rotate +Y by 90° about X -> +Z, then by 90° about Y -> +X
        let rotation = Vec3::new(constants::HALF_PI, constants::HALF_PI, 0.0);
        let matrix = utils::affine(&Vec3::new(1.0, 1.0, 1.0), &rotation, &Vec3::zeros());

        let rotated = matrix.transform_vector(&Vec3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(rotated, Vec3::new(1.0, 0.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_affine_translation_column() {
        let matrix = utils::affine(
            &Vec3::new(2.0, 2.0, 2.0),
            &Vec3::new(0.3, 0.2, 0.1),
            &Vec3::new(4.0, -5.0, 6.0),
        );
        assert_eq!(utils::translation_of(&matrix), Vec3::new(4.0, -5.0, 6.0));
    }

    #[test]
    fn test_direction_or_fallback() {
        let here = Vec3::new(1.0, 2.0, 3.0);
        let fallback = Vec3::new(0.0, 0.0, -1.0);
        assert_eq!(utils::direction_or(&here, &here, fallback), fallback);

        let there = Vec3::new(1.0, 2.0, 13.0);
        assert_relative_eq!(
            utils::direction_or(&here, &there, fallback),
            Vec3::new(0.0, 0.0, 1.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_view_from_world_inverts_translation() {
        let world = Mat4::new_translation(&Vec3::new(0.0, 0.0, -50.0));
        let view = Mat4::view_from_world(&world);
        let eye_in_view = view.transform_point(&nalgebra::Point3::new(0.0, 0.0, -50.0));
        assert_relative_eq!(eye_in_view.coords, Vec3::zeros(), epsilon = 1e-5);
    }
}
