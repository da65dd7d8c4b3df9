//! Game configuration
//!
//! Every section is optional in a config file; missing fields take the
//! built-in tuning of the stage.

use std::path::{Path, PathBuf};

use rail_engine::config::{Config, ConfigError};
use rail_engine::foundation::math::{Vec2, Vec3};
use rail_engine::scene::AABB;
use serde::{Deserialize, Serialize};

/// How the player's shots are aimed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AimMode {
    /// Along the ship's facing
    Forward,
    /// From the ship toward the 3D reticle
    #[default]
    Reticle,
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player ship tuning
    pub player: PlayerConfig,
    /// Enemy tuning
    pub enemy: EnemyConfig,
    /// Enemy bullet tuning
    pub enemy_bullet: EnemyBulletConfig,
    /// Collision tuning
    pub collision: CollisionConfig,
    /// Rail camera path
    pub rail_camera: RailCameraConfig,
    /// Free debug camera
    pub debug_camera: DebugCameraConfig,
    /// Stage setup
    pub scene: SceneConfig,
    /// Backdrop
    pub skydome: SkydomeConfig,
}

/// Player configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Start position relative to the rail camera
    pub start_position: Vec3,
    /// Movement per frame while a direction key is held
    pub move_speed: f32,
    /// Half extents of the movement area (x, y)
    pub move_limit: Vec2,
    /// Yaw change per frame in radians
    pub rotation_speed: f32,
    /// Bullet speed in units per frame
    pub bullet_speed: f32,
    /// Frames a player bullet lives; unlimited when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet_ttl: Option<u32>,
    /// Distance from the ship to the 3D reticle
    pub reticle_distance: f32,
    /// Aim direction for new shots
    pub aim_mode: AimMode,
    /// Whether enemy bullets kill the player
    pub takes_damage: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start_position: Vec3::new(0.0, 0.0, 50.0),
            move_speed: 0.2,
            move_limit: Vec2::new(34.0, 18.0),
            rotation_speed: 0.02,
            bullet_speed: 1.0,
            bullet_ttl: None,
            reticle_distance: 50.0,
            aim_mode: AimMode::Reticle,
            takes_damage: false,
        }
    }
}

/// Enemy configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    /// Movement per frame while approaching
    pub approach_velocity: Vec3,
    /// Movement per frame while leaving
    pub leave_velocity: Vec3,
    /// World Z below which an approaching enemy starts leaving
    pub leave_z: f32,
    /// Frames between shots while approaching
    pub fire_interval: u32,
    /// Box around the rail camera outside which a leaving enemy despawns
    pub despawn_bounds: AABB,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            approach_velocity: Vec3::new(0.0, 0.0, -0.2),
            leave_velocity: Vec3::new(-0.1, 0.1, -0.2),
            leave_z: 0.0,
            fire_interval: 60,
            despawn_bounds: AABB::new(Vec3::new(-80.0, -60.0, -40.0), Vec3::new(80.0, 60.0, 400.0)),
        }
    }
}

/// Enemy bullet configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyBulletConfig {
    /// Speed in units per frame
    pub speed: f32,
    /// Frames before the bullet expires
    pub ttl: u32,
}

impl Default for EnemyBulletConfig {
    fn default() -> Self {
        Self { speed: 1.0, ttl: 300 }
    }
}

/// Collision configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Sphere radius shared by every collider
    pub radius: f32,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self { radius: 1.5 }
    }
}

/// Rail camera configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RailCameraConfig {
    /// Start position
    pub position: Vec3,
    /// Euler rotation in radians
    pub rotation: Vec3,
    /// Movement per frame along the rail
    pub velocity: Vec3,
}

impl Default for RailCameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, -50.0),
            rotation: Vec3::zeros(),
            velocity: Vec3::new(0.0, 0.0, 0.1),
        }
    }
}

/// Debug camera configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugCameraConfig {
    /// Start position
    pub position: Vec3,
    /// Movement per frame while a key is held
    pub move_speed: f32,
    /// Yaw change per frame in radians
    pub rotation_speed: f32,
}

impl Default for DebugCameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, -50.0),
            move_speed: 0.5,
            rotation_speed: 0.02,
        }
    }
}

/// Stage setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Enemies spawned when the scene is created
    pub initial_enemies: Vec<Vec3>,
    /// Timed spawn script, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spawn_script: Option<PathBuf>,
    /// Whether Num0 may switch to the debug camera
    pub allow_debug_camera: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            initial_enemies: vec![Vec3::new(3.0, 0.0, 50.0), Vec3::new(10.0, 0.0, 50.0)],
            spawn_script: None,
            allow_debug_camera: true,
        }
    }
}

/// Skydome configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkydomeConfig {
    /// Uniform scale of the dome model
    pub scale: f32,
}

impl Default for SkydomeConfig {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl Config for GameConfig {}

impl GameConfig {
    /// Load a config file and resolve its relative paths against the
    /// directory the file lives in
    pub fn load_resolved(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config = Self::load_from_file(path)?;
        if let Some(dir) = path.parent() {
            config.resolve_paths(dir);
        }
        Ok(config)
    }

    /// Join relative asset paths onto `base`
    pub fn resolve_paths(&mut self, base: &Path) {
        if let Some(script) = self.scene.spawn_script.as_mut() {
            if script.is_relative() {
                *script = base.join(&*script);
            }
        }
    }

    /// Reject values the stage cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.collision.radius > 0.0) {
            return Err(invalid(format!(
                "collision.radius must be positive, got {}",
                self.collision.radius
            )));
        }
        if self.enemy.fire_interval == 0 {
            return Err(invalid("enemy.fire_interval must be at least 1 frame"));
        }
        if !(self.enemy.approach_velocity.z < 0.0) {
            return Err(invalid(format!(
                "enemy.approach_velocity.z must be negative, got {}",
                self.enemy.approach_velocity.z
            )));
        }
        if self.enemy_bullet.ttl == 0 {
            return Err(invalid("enemy_bullet.ttl must be at least 1 frame"));
        }
        if self.player.bullet_ttl == Some(0) {
            return Err(invalid("player.bullet_ttl must be at least 1 frame when set"));
        }
        if !self.enemy.despawn_bounds.is_valid() {
            return Err(invalid("enemy.despawn_bounds has min greater than max"));
        }
        if self.player.move_limit.x < 0.0 || self.player.move_limit.y < 0.0 {
            return Err(invalid("player.move_limit must not be negative"));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(message.into())
}
