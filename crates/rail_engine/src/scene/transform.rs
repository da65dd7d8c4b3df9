//! World transform for scene objects
//!
//! Holds local translation, Euler rotation and scale together with the world
//! matrix derived from them. Parenting is explicit: the caller passes the
//! parent's world matrix for the current frame instead of the transform
//! holding a pointer into another object.

use crate::foundation::math::{utils, Mat4, Vec3};

/// Local transform plus the world matrix computed from it
#[derive(Debug, Clone, PartialEq)]
pub struct WorldTransform {
    /// Local position (relative to the parent when one is supplied)
    pub translation: Vec3,

    /// Local rotation as Euler angles in radians (applied X, then Y, then Z)
    pub rotation: Vec3,

    /// Local scale factors
    pub scale: Vec3,

    matrix: Mat4,
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self::new(Vec3::zeros(), Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0))
    }
}

impl WorldTransform {
    /// Create a transform and compute its parentless world matrix
    pub fn new(translation: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        let mut transform = Self {
            translation,
            rotation,
            scale,
            matrix: Mat4::identity(),
        };
        transform.compute_world(None);
        transform
    }

    /// Create from position only
    pub fn from_translation(translation: Vec3) -> Self {
        Self::new(translation, Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0))
    }

    /// Create from position and Euler rotation
    pub fn from_translation_rotation(translation: Vec3, rotation: Vec3) -> Self {
        Self::new(translation, rotation, Vec3::new(1.0, 1.0, 1.0))
    }

    /// Builder pattern: Set scale (uniform)
    #[must_use]
    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::new(scale, scale, scale);
        self.compute_world(None);
        self
    }

    /// Replace all local components; the world matrix is stale until the next
    /// [`compute_world`](Self::compute_world)
    pub fn set_local(&mut self, translation: Vec3, rotation: Vec3, scale: Vec3) {
        self.translation = translation;
        self.rotation = rotation;
        self.scale = scale;
    }

    /// Recompute the world matrix for this frame
    ///
    /// `parent` is the parent's world matrix *after* the parent updated this
    /// frame; children must be recomputed after their parent.
    pub fn compute_world(&mut self, parent: Option<&Mat4>) -> Mat4 {
        let local = utils::affine(&self.scale, &self.rotation, &self.translation);
        self.matrix = match parent {
            Some(parent) => parent * local,
            None => local,
        };
        self.matrix
    }

    /// World matrix from the last [`compute_world`](Self::compute_world)
    pub fn world_matrix(&self) -> &Mat4 {
        &self.matrix
    }

    /// Translation column of the last computed world matrix
    pub fn world_position(&self) -> Vec3 {
        utils::translation_of(&self.matrix)
    }

    /// Rotate and scale a direction by the world matrix, ignoring translation
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        self.matrix.transform_vector(direction)
    }
}
