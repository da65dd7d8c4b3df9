//! Axis-aligned bounds for playfield and despawn limits

use crate::foundation::math::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AABB {
    /// Minimum corner of the bounding box
    pub min: Vec3,
    /// Maximum corner of the bounding box
    pub max: Vec3,
}

impl AABB {
    /// Create a new AABB from min and max points
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB centered at a point with given extents
    pub fn from_center_extents(center: Vec3, extents: Vec3) -> Self {
        Self {
            min: center - extents,
            max: center + extents,
        }
    }

    /// Whether every component of `min` is at most the matching `max`
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }

    /// Check if this AABB contains a point (boundary inclusive)
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y &&
        point.z >= self.min.z && point.z <= self.max.z
    }

    /// Clamp a point into the box, per axis
    pub fn clamp_point(&self, point: Vec3) -> Vec3 {
        Vec3::new(
            point.x.clamp(self.min.x, self.max.x),
            point.y.clamp(self.min.y, self.max.y),
            point.z.clamp(self.min.z, self.max.z),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point_boundary_inclusive() {
        let bounds = AABB::from_center_extents(Vec3::zeros(), Vec3::new(1.0, 2.0, 3.0));
        assert!(bounds.contains_point(Vec3::new(1.0, -2.0, 3.0)));
        assert!(!bounds.contains_point(Vec3::new(1.01, 0.0, 0.0)));
    }

    #[test]
    fn test_clamp_point_per_axis() {
        let bounds = AABB::new(Vec3::new(-34.0, -18.0, 0.0), Vec3::new(34.0, 18.0, 0.0));
        let clamped = bounds.clamp_point(Vec3::new(50.0, -40.0, 7.0));
        assert_eq!(clamped, Vec3::new(34.0, -18.0, 0.0));
    }

    #[test]
    fn test_inverted_bounds_invalid() {
        let bounds = AABB::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 1.0));
        assert!(!bounds.is_valid());
    }
}
