//! Player ship
//!
//! The ship lives in rail camera space: its transform is local to the camera
//! and the scene passes the camera's world matrix into [`Player::update`]
//! each frame. The ship owns its bullets and sweeps them at the start of its
//! own update.

use rail_engine::foundation::collections::{EntityPool, Lifecycle};
use rail_engine::foundation::math::{utils, Mat4, Vec3};
use rail_engine::input::{InputSource, KeyCode};
use rail_engine::physics::{Collider, CollisionLayers};
use rail_engine::render::{Renderer, TextureHandle, ViewProjection};
use rail_engine::scene::{WorldTransform, AABB};

use crate::config::{AimMode, PlayerConfig};
use crate::projectile::{Faction, PlayerBulletKey, Projectile};

const FORWARD: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Textures drawn for the ship, its bullets and its reticle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerTextures {
    /// Ship model
    pub ship: TextureHandle,
    /// Bullet model
    pub bullet: TextureHandle,
    /// 3D reticle model
    pub reticle: TextureHandle,
}

/// The player ship
#[derive(Debug, Clone)]
pub struct Player {
    transform: WorldTransform,
    reticle: WorldTransform,
    bullets: EntityPool<PlayerBulletKey, Projectile>,
    config: PlayerConfig,
    move_bounds: AABB,
    radius: f32,
    textures: PlayerTextures,
    alive: bool,
    hits_taken: u32,
}

impl Player {
    /// Create the ship at the configured start position
    pub fn new(config: &PlayerConfig, radius: f32, textures: PlayerTextures) -> Self {
        let transform = WorldTransform::from_translation(config.start_position);
        let reticle =
            WorldTransform::from_translation(config.start_position + FORWARD * config.reticle_distance);
        let move_bounds = AABB::from_center_extents(
            Vec3::new(0.0, 0.0, config.start_position.z),
            Vec3::new(config.move_limit.x, config.move_limit.y, 0.0),
        );
        Self {
            transform,
            reticle,
            bullets: EntityPool::new(),
            config: config.clone(),
            move_bounds,
            radius,
            textures,
            alive: true,
            hits_taken: 0,
        }
    }

    /// Advance one frame under the parent's world matrix for this frame
    pub fn update(&mut self, input: &dyn InputSource, parent: &Mat4) {
        let swept = self.bullets.sweep_dead();
        if swept > 0 {
            log::trace!("Swept {swept} player bullets");
        }

        self.apply_movement(input);
        self.apply_rotation(input);
        self.transform.compute_world(Some(parent));
        self.place_reticle();

        if input.was_pressed(KeyCode::Space) {
            self.fire();
        }

        self.bullets.for_each_mut(|_, bullet| bullet.update());
    }

    fn apply_movement(&mut self, input: &dyn InputSource) {
        let speed = self.config.move_speed;
        let mut step = Vec3::zeros();

        if input.is_held(KeyCode::Left) {
            step.x -= speed;
        } else if input.is_held(KeyCode::Right) {
            step.x += speed;
        }

        if input.is_held(KeyCode::Down) {
            step.y -= speed;
        } else if input.is_held(KeyCode::Up) {
            step.y += speed;
        }

        self.transform.translation = self.move_bounds.clamp_point(self.transform.translation + step);
    }

    fn apply_rotation(&mut self, input: &dyn InputSource) {
        if input.is_held(KeyCode::A) {
            self.transform.rotation.y -= self.config.rotation_speed;
        } else if input.is_held(KeyCode::D) {
            self.transform.rotation.y += self.config.rotation_speed;
        }
    }

    fn facing(&self) -> Vec3 {
        self.transform
            .transform_direction(&FORWARD)
            .try_normalize(f32::EPSILON)
            .unwrap_or(FORWARD)
    }

    fn place_reticle(&mut self) {
        self.reticle.translation =
            self.transform.world_position() + self.facing() * self.config.reticle_distance;
        self.reticle.compute_world(None);
    }

    fn fire(&mut self) {
        let origin = self.transform.world_position();
        let direction = match self.config.aim_mode {
            AimMode::Forward => self.facing(),
            AimMode::Reticle => {
                utils::direction_or(&origin, &self.reticle.world_position(), self.facing())
            }
        };

        let mut bullet = Projectile::new(
            Faction::Player,
            origin,
            direction * self.config.bullet_speed,
            self.radius,
            self.textures.bullet,
        );
        if let Some(ttl) = self.config.bullet_ttl {
            bullet = bullet.with_ttl(ttl);
        }
        self.bullets.insert(bullet);
    }

    /// Submit the ship, its bullets and the reticle
    pub fn draw(&self, renderer: &mut dyn Renderer, camera: &ViewProjection) {
        renderer.draw(self.transform.world_matrix(), camera, self.textures.ship);
        for bullet in self.bullets.values() {
            bullet.draw(renderer, camera);
        }
        renderer.draw(self.reticle.world_matrix(), camera, self.textures.reticle);
    }

    /// Bullets in flight, in firing order
    pub fn bullets(&self) -> &EntityPool<PlayerBulletKey, Projectile> {
        &self.bullets
    }

    /// Mutable access to bullets in flight
    pub fn bullets_mut(&mut self) -> &mut EntityPool<PlayerBulletKey, Projectile> {
        &mut self.bullets
    }

    /// Position relative to the rail camera
    pub fn local_position(&self) -> Vec3 {
        self.transform.translation
    }

    /// World position of the 3D reticle
    pub fn reticle_position(&self) -> Vec3 {
        self.reticle.world_position()
    }

    /// Number of enemy bullets that have hit the ship
    pub fn hits_taken(&self) -> u32 {
        self.hits_taken
    }
}

impl Lifecycle for Player {
    fn is_alive(&self) -> bool {
        self.alive
    }

    fn kill(&mut self) {
        self.alive = false;
    }
}

impl Collider for Player {
    fn world_position(&self) -> Vec3 {
        self.transform.world_position()
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn collision_layer(&self) -> CollisionLayers {
        CollisionLayers::PLAYER
    }

    fn collision_mask(&self) -> CollisionLayers {
        CollisionLayers::ENEMY_PROJECTILE
    }

    fn on_collision(&mut self) {
        self.hits_taken += 1;
        if self.config.takes_damage && self.alive {
            log::debug!("Player destroyed after {} hits", self.hits_taken);
            self.alive = false;
        }
    }
}
