//! Sphere overlap tests and collision callbacks
//!
//! Objects expose a world-space center, a radius and layer bits through the
//! [`Collider`] trait. [`check_pair`] runs the narrow-phase test for one pair
//! and, on overlap, notifies both sides.

use crate::foundation::math::Vec3;
use crate::physics::collision_layers::CollisionLayers;

/// A bounding sphere for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// The center position of the sphere in world space
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: f32,
}

impl BoundingSphere {
    /// Creates a new bounding sphere with the given center and radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if this sphere intersects with another
    ///
    /// Strict: spheres whose centers are exactly `radius_a + radius_b` apart
    /// only touch and do not intersect.
    pub fn intersects(&self, other: &BoundingSphere) -> bool {
        let distance = (other.center - self.center).magnitude();
        distance < self.radius + other.radius
    }
}

/// Scene object that takes part in pairwise collision tests
pub trait Collider {
    /// Center of the collision sphere in world space
    fn world_position(&self) -> Vec3;

    /// Radius of the collision sphere
    fn radius(&self) -> f32;

    /// Layer this object belongs to
    fn collision_layer(&self) -> CollisionLayers {
        CollisionLayers::all()
    }

    /// Layers this object reacts to
    fn collision_mask(&self) -> CollisionLayers {
        CollisionLayers::all()
    }

    /// Called once per overlapping pair per test
    fn on_collision(&mut self);

    /// Collision sphere at the current world position
    fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.world_position(), self.radius())
    }
}

/// Test one pair and invoke both callbacks on overlap
///
/// Returns whether the pair collided. Objects already flagged dead are still
/// tested; callbacks must be idempotent with respect to death.
pub fn check_pair<A, B>(a: &mut A, b: &mut B) -> bool
where
    A: Collider + ?Sized,
    B: Collider + ?Sized,
{
    if !CollisionLayers::should_collide(
        a.collision_layer(),
        a.collision_mask(),
        b.collision_layer(),
        b.collision_mask(),
    ) {
        return false;
    }

    if !a.bounding_sphere().intersects(&b.bounding_sphere()) {
        return false;
    }

    a.on_collision();
    b.on_collision();
    true
}
