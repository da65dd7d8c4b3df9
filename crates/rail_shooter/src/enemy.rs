//! Enemy craft
//!
//! An enemy flies toward the camera while shooting at the player, then peels
//! away once it has passed the leave line. Shots go straight into the scene's
//! enemy bullet pool handed in through [`EnemyContext`].

use rail_engine::foundation::collections::{new_key_type, EntityPool, Lifecycle};
use rail_engine::foundation::math::{utils, Vec3};
use rail_engine::foundation::time::FrameCountdown;
use rail_engine::physics::{Collider, CollisionLayers};
use rail_engine::render::{Renderer, TextureHandle, ViewProjection};
use rail_engine::scene::{WorldTransform, AABB};

use crate::config::{EnemyBulletConfig, EnemyConfig};
use crate::projectile::{EnemyBulletKey, Faction, Projectile};

new_key_type! {
    /// Key of an enemy in the scene's pool
    pub struct EnemyKey;
}

/// Behaviour phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyPhase {
    /// Closing in and firing
    Approach,
    /// Retreating; terminal
    Leave,
}

/// Per-enemy tuning, copied out of the game config at spawn
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyTuning {
    /// Movement per frame while approaching
    pub approach_velocity: Vec3,
    /// Movement per frame while leaving
    pub leave_velocity: Vec3,
    /// World Z below which the enemy starts leaving
    pub leave_z: f32,
    /// Frames between shots
    pub fire_interval: u32,
    /// Camera-relative box a leaving enemy must stay inside
    pub despawn_bounds: AABB,
    /// Bullet speed in units per frame
    pub bullet_speed: f32,
    /// Bullet lifetime in frames
    pub bullet_ttl: u32,
    /// Collision sphere radius for the enemy and its bullets
    pub radius: f32,
    /// Enemy model texture
    pub texture: TextureHandle,
    /// Bullet model texture
    pub bullet_texture: TextureHandle,
}

impl EnemyTuning {
    /// Assemble tuning from config sections and loaded textures
    pub fn from_config(
        enemy: &EnemyConfig,
        bullet: &EnemyBulletConfig,
        radius: f32,
        texture: TextureHandle,
        bullet_texture: TextureHandle,
    ) -> Self {
        Self {
            approach_velocity: enemy.approach_velocity,
            leave_velocity: enemy.leave_velocity,
            leave_z: enemy.leave_z,
            fire_interval: enemy.fire_interval,
            despawn_bounds: enemy.despawn_bounds,
            bullet_speed: bullet.speed,
            bullet_ttl: bullet.ttl,
            radius,
            texture,
            bullet_texture,
        }
    }
}

/// Everything an enemy needs from the scene for one update
pub struct EnemyContext<'a> {
    /// Aim point (the player's world position)
    pub target: Vec3,
    /// Rail camera world position, origin of the despawn box
    pub view_origin: Vec3,
    /// Sink for fired bullets
    pub bullets: &'a mut EntityPool<EnemyBulletKey, Projectile>,
}

/// An enemy craft
#[derive(Debug, Clone)]
pub struct Enemy {
    transform: WorldTransform,
    phase: EnemyPhase,
    fire_countdown: FrameCountdown,
    tuning: EnemyTuning,
    alive: bool,
}

impl Enemy {
    /// Spawn at `position` in the approach phase
    pub fn new(position: Vec3, tuning: EnemyTuning) -> Self {
        Self {
            transform: WorldTransform::from_translation(position),
            phase: EnemyPhase::Approach,
            fire_countdown: FrameCountdown::new(tuning.fire_interval),
            tuning,
            alive: true,
        }
    }

    /// Advance one frame
    pub fn update(&mut self, ctx: &mut EnemyContext<'_>) {
        match self.phase {
            EnemyPhase::Approach => self.approach(ctx),
            EnemyPhase::Leave => self.leave(ctx),
        }
        self.transform.compute_world(None);
    }

    fn approach(&mut self, ctx: &mut EnemyContext<'_>) {
        self.transform.translation += self.tuning.approach_velocity;

        if self.fire_countdown.tick() {
            self.fire(ctx);
        }

        if self.transform.translation.z < self.tuning.leave_z {
            log::debug!("Enemy at {:?} switching to Leave", self.transform.translation);
            self.phase = EnemyPhase::Leave;
        }
    }

    fn leave(&mut self, ctx: &EnemyContext<'_>) {
        self.transform.translation += self.tuning.leave_velocity;

        let relative = self.transform.translation - ctx.view_origin;
        if self.alive && !self.tuning.despawn_bounds.contains_point(relative) {
            log::debug!("Enemy left the play area at {:?}", self.transform.translation);
            self.alive = false;
        }
    }

    fn fire(&self, ctx: &mut EnemyContext<'_>) {
        let from = self.transform.translation;
        let direction = utils::direction_or(&from, &ctx.target, Vec3::new(0.0, 0.0, -1.0));
        let bullet = Projectile::new(
            Faction::Enemy,
            from,
            direction * self.tuning.bullet_speed,
            self.tuning.radius,
            self.tuning.bullet_texture,
        )
        .with_ttl(self.tuning.bullet_ttl);
        ctx.bullets.insert(bullet);
    }

    /// Submit the enemy model
    pub fn draw(&self, renderer: &mut dyn Renderer, camera: &ViewProjection) {
        renderer.draw(self.transform.world_matrix(), camera, self.tuning.texture);
    }

    /// Current behaviour phase
    pub fn phase(&self) -> EnemyPhase {
        self.phase
    }
}

impl Lifecycle for Enemy {
    fn is_alive(&self) -> bool {
        self.alive
    }

    fn kill(&mut self) {
        self.alive = false;
    }
}

impl Collider for Enemy {
    fn world_position(&self) -> Vec3 {
        self.transform.world_position()
    }

    fn radius(&self) -> f32 {
        self.tuning.radius
    }

    fn collision_layer(&self) -> CollisionLayers {
        CollisionLayers::ENEMY
    }

    fn collision_mask(&self) -> CollisionLayers {
        CollisionLayers::PLAYER_PROJECTILE
    }

    fn on_collision(&mut self) {
        if self.alive {
            log::debug!("Enemy destroyed at {:?}", self.transform.translation);
        }
        self.kill();
    }
}
