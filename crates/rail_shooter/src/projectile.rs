//! Bullets fired by the player and by enemies
//!
//! One type serves both sides; the [`Faction`] tag picks the collision layer.
//! Positions are evaluated from the spawn origin every frame, so a bullet
//! that nothing hits lands exactly on `origin + age * velocity`.

use rail_engine::foundation::collections::{new_key_type, Lifecycle};
use rail_engine::foundation::math::Vec3;
use rail_engine::physics::{Collider, CollisionLayers};
use rail_engine::render::{Renderer, TextureHandle, ViewProjection};
use rail_engine::scene::WorldTransform;

new_key_type! {
    /// Key of a bullet in the player's pool
    pub struct PlayerBulletKey;

    /// Key of a bullet in the scene's enemy bullet pool
    pub struct EnemyBulletKey;
}

/// Which side fired a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Faction {
    /// Fired by the player
    Player,
    /// Fired by an enemy
    Enemy,
}

impl Faction {
    /// Collision layer projectiles of this side occupy
    pub fn layer(self) -> CollisionLayers {
        match self {
            Self::Player => CollisionLayers::PLAYER_PROJECTILE,
            Self::Enemy => CollisionLayers::ENEMY_PROJECTILE,
        }
    }

    /// Layers projectiles of this side can hit
    pub fn mask(self) -> CollisionLayers {
        match self {
            Self::Player => CollisionLayers::ENEMY | CollisionLayers::ENEMY_PROJECTILE,
            Self::Enemy => CollisionLayers::PLAYER | CollisionLayers::PLAYER_PROJECTILE,
        }
    }
}

/// A bullet in flight
#[derive(Debug, Clone)]
pub struct Projectile {
    transform: WorldTransform,
    origin: Vec3,
    velocity: Vec3,
    age: u32,
    ttl: Option<u32>,
    radius: f32,
    faction: Faction,
    texture: TextureHandle,
    alive: bool,
}

impl Projectile {
    /// Spawn at `origin` moving `velocity` units per frame
    pub fn new(
        faction: Faction,
        origin: Vec3,
        velocity: Vec3,
        radius: f32,
        texture: TextureHandle,
    ) -> Self {
        Self {
            transform: WorldTransform::from_translation(origin),
            origin,
            velocity,
            age: 0,
            ttl: None,
            radius,
            faction,
            texture,
            alive: true,
        }
    }

    /// Builder pattern: expire after `frames` updates
    #[must_use]
    pub fn with_ttl(mut self, frames: u32) -> Self {
        self.ttl = Some(frames);
        self
    }

    /// Advance one frame
    pub fn update(&mut self) {
        self.age += 1;
        #[allow(clippy::cast_precision_loss)]
        let travelled = self.velocity * self.age as f32;
        self.transform.translation = self.origin + travelled;
        self.transform.compute_world(None);

        if let Some(ttl) = self.ttl.as_mut() {
            *ttl = ttl.saturating_sub(1);
            if *ttl == 0 && self.alive {
                log::trace!("{:?} projectile expired after {} frames", self.faction, self.age);
                self.alive = false;
            }
        }
    }

    /// Submit the bullet model
    pub fn draw(&self, renderer: &mut dyn Renderer, camera: &ViewProjection) {
        renderer.draw(self.transform.world_matrix(), camera, self.texture);
    }

    /// Side that fired the bullet
    pub fn faction(&self) -> Faction {
        self.faction
    }

    /// Spawn position
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Movement per frame
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Frames since spawn
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Frames left before expiry, if the bullet expires
    pub fn ttl(&self) -> Option<u32> {
        self.ttl
    }
}

impl Lifecycle for Projectile {
    fn is_alive(&self) -> bool {
        self.alive
    }

    fn kill(&mut self) {
        self.alive = false;
    }
}

impl Collider for Projectile {
    fn world_position(&self) -> Vec3 {
        self.transform.world_position()
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn collision_layer(&self) -> CollisionLayers {
        self.faction.layer()
    }

    fn collision_mask(&self) -> CollisionLayers {
        self.faction.mask()
    }

    fn on_collision(&mut self) {
        self.kill();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bullet(velocity: Vec3) -> Projectile {
        Projectile::new(Faction::Enemy, Vec3::new(1.0, 2.0, 3.0), velocity, 1.5, TextureHandle(0))
    }

    #[test]
    fn test_position_is_origin_plus_age_times_velocity() {
        let velocity = Vec3::new(0.1, -0.3, 0.7);
        let mut projectile = bullet(velocity);
        for n in 1..=500_u32 {
            projectile.update();
            let expected = Vec3::new(1.0, 2.0, 3.0) + velocity * n as f32;
            assert_eq!(projectile.world_position(), expected, "tick {n}");
        }
        assert!(projectile.is_alive());
    }

    #[test]
    fn test_ttl_alive_at_t_minus_one_dead_at_t() {
        let mut projectile = bullet(Vec3::zeros()).with_ttl(300);
        for _ in 0..299 {
            projectile.update();
        }
        assert!(projectile.is_alive());
        assert_eq!(projectile.ttl(), Some(1));

        projectile.update();
        assert!(!projectile.is_alive());
    }

    #[test]
    fn test_collision_kills_idempotently() {
        let mut projectile = bullet(Vec3::zeros());
        projectile.on_collision();
        projectile.on_collision();
        assert!(!projectile.is_alive());
    }

    #[test]
    fn test_faction_masks() {
        assert!(CollisionLayers::should_collide(
            Faction::Player.layer(),
            Faction::Player.mask(),
            Faction::Enemy.layer(),
            Faction::Enemy.mask(),
        ));
        // Bullets of the same side never collide
        assert!(!CollisionLayers::should_collide(
            Faction::Enemy.layer(),
            Faction::Enemy.mask(),
            Faction::Enemy.layer(),
            Faction::Enemy.mask(),
        ));
    }
}
