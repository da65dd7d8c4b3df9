//! Stage scene
//!
//! Owns every entity of the stage and drives the frame in a fixed order:
//! cameras, player, spawn schedule, enemies, enemy bullets, collisions, then
//! the sweep of dead enemy bullets and enemies. Drawing is read-only.

use rail_engine::foundation::collections::{EntityPool, Lifecycle};
use rail_engine::foundation::math::Vec3;
use rail_engine::input::{InputSource, KeyCode};
use rail_engine::physics::Collider;
use rail_engine::render::{Renderer, TextureHandle, TextureLoader, ViewProjection};

use crate::collision::{check_all_collisions, CollisionReport};
use crate::config::GameConfig;
use crate::debug_camera::DebugCamera;
use crate::enemy::{Enemy, EnemyContext, EnemyKey, EnemyTuning};
use crate::player::{Player, PlayerTextures};
use crate::projectile::{EnemyBulletKey, Projectile};
use crate::rail_camera::RailCamera;
use crate::skydome::Skydome;
use crate::spawn_script::SpawnSchedule;
use crate::GameError;

/// How a stage ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageOutcome {
    /// Every scheduled enemy is gone
    Cleared,
    /// The player was destroyed
    Defeated,
}

/// Texture handles used by the stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneTextures {
    /// Player ship
    pub player: TextureHandle,
    /// Player bullets
    pub player_bullet: TextureHandle,
    /// 3D reticle
    pub reticle: TextureHandle,
    /// Enemy craft
    pub enemy: TextureHandle,
    /// Enemy bullets
    pub enemy_bullet: TextureHandle,
    /// Backdrop
    pub skydome: TextureHandle,
}

impl SceneTextures {
    /// Load every stage texture
    pub fn load(loader: &mut dyn TextureLoader) -> Self {
        let player = loader.load("mario.jpg");
        Self {
            player,
            player_bullet: loader.load("black.png"),
            reticle: player,
            enemy: loader.load("enemy01.png"),
            enemy_bullet: loader.load("red.png"),
            skydome: loader.load("skydome.png"),
        }
    }
}

/// Everything loaded from disk or the texture loader to build a stage
#[derive(Debug, Clone)]
pub struct StageAssets {
    /// Stage textures
    pub textures: SceneTextures,
    /// Timed spawn script, if the config names one
    pub schedule: Option<SpawnSchedule>,
}

impl StageAssets {
    /// Validate `config`, load textures and the spawn script
    pub fn load(config: &GameConfig, loader: &mut dyn TextureLoader) -> Result<Self, GameError> {
        config.validate()?;
        let textures = SceneTextures::load(loader);
        let schedule = config
            .scene
            .spawn_script
            .as_ref()
            .map(SpawnSchedule::load_from_file)
            .transpose()?;
        Ok(Self { textures, schedule })
    }
}

/// The stage: player, enemies, bullets, cameras and backdrop
pub struct Scene {
    rail_camera: RailCamera,
    debug_camera: DebugCamera,
    debug_camera_active: bool,
    allow_debug_camera: bool,
    view_projection: ViewProjection,
    skydome: Skydome,
    player: Player,
    enemies: EntityPool<EnemyKey, Enemy>,
    enemy_bullets: EntityPool<EnemyBulletKey, Projectile>,
    enemy_tuning: EnemyTuning,
    spawn_schedule: Option<SpawnSchedule>,
    frame: u64,
}

impl Scene {
    /// Validate `config`, load textures and the spawn script, and build the
    /// opening state of the stage
    pub fn new(config: &GameConfig, loader: &mut dyn TextureLoader) -> Result<Self, GameError> {
        let assets = StageAssets::load(config, loader)?;
        Ok(Self::from_assets(config, &assets))
    }

    /// Build the opening state from an already validated config and loaded
    /// assets; the spawn schedule starts from its first command
    pub fn from_assets(config: &GameConfig, assets: &StageAssets) -> Self {
        let textures = assets.textures;
        let rail_camera = RailCamera::new(&config.rail_camera);
        let view_projection = *rail_camera.view_projection();

        let player_textures = PlayerTextures {
            ship: textures.player,
            bullet: textures.player_bullet,
            reticle: textures.reticle,
        };
        let mut player = Player::new(&config.player, config.collision.radius, player_textures);
        player.update(&NoInput, rail_camera.world_matrix());

        let enemy_tuning = EnemyTuning::from_config(
            &config.enemy,
            &config.enemy_bullet,
            config.collision.radius,
            textures.enemy,
            textures.enemy_bullet,
        );

        let mut scene = Self {
            rail_camera,
            debug_camera: DebugCamera::new(&config.debug_camera),
            debug_camera_active: false,
            allow_debug_camera: config.scene.allow_debug_camera,
            view_projection,
            skydome: Skydome::new(config.skydome.scale, textures.skydome),
            player,
            enemies: EntityPool::new(),
            enemy_bullets: EntityPool::new(),
            enemy_tuning,
            spawn_schedule: assets.schedule.clone(),
            frame: 0,
        };

        for &position in &config.scene.initial_enemies {
            scene.pop_enemy(position);
        }
        log::info!("Scene created with {} enemies", scene.enemies.len());
        scene
    }

    /// Advance the stage one frame
    pub fn update(&mut self, input: &dyn InputSource) -> CollisionReport {
        self.frame += 1;

        self.update_cameras(input);

        self.player.update(input, self.rail_camera.world_matrix());

        let spawns = self
            .spawn_schedule
            .as_mut()
            .map(SpawnSchedule::update)
            .unwrap_or_default();
        for position in spawns {
            self.pop_enemy(position);
        }

        let mut ctx = EnemyContext {
            target: self.player.world_position(),
            view_origin: self.rail_camera.world_position(),
            bullets: &mut self.enemy_bullets,
        };
        self.enemies.for_each_mut(|_, enemy| enemy.update(&mut ctx));

        self.enemy_bullets.for_each_mut(|_, bullet| bullet.update());

        let report = check_all_collisions(&mut self.player, &mut self.enemies, &mut self.enemy_bullets);

        let swept_bullets = self.enemy_bullets.sweep_dead();
        let swept_enemies = self.enemies.sweep_dead();
        if swept_bullets + swept_enemies > 0 {
            log::trace!(
                "Frame {}: swept {swept_bullets} enemy bullets, {swept_enemies} enemies",
                self.frame
            );
        }

        report
    }

    fn update_cameras(&mut self, input: &dyn InputSource) {
        self.rail_camera.update();

        if self.allow_debug_camera && input.was_pressed(KeyCode::Num0) {
            self.debug_camera_active = !self.debug_camera_active;
            log::info!(
                "Debug camera {}",
                if self.debug_camera_active { "enabled" } else { "disabled" }
            );
        }

        self.view_projection = if self.debug_camera_active {
            self.debug_camera.update(input);
            *self.debug_camera.view_projection()
        } else {
            *self.rail_camera.view_projection()
        };
    }

    /// Submit every visible object: skydome, player, enemies, enemy bullets
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        let camera = &self.view_projection;
        self.skydome.draw(renderer, camera);
        self.player.draw(renderer, camera);
        for enemy in self.enemies.values() {
            enemy.draw(renderer, camera);
        }
        for bullet in self.enemy_bullets.values() {
            bullet.draw(renderer, camera);
        }
    }

    /// Spawn an enemy at `position` with the stage's enemy tuning
    pub fn pop_enemy(&mut self, position: Vec3) -> EnemyKey {
        log::debug!("Enemy spawned at {position:?}");
        self.enemies.insert(Enemy::new(position, self.enemy_tuning.clone()))
    }

    /// Hand an enemy bullet to the scene
    pub fn add_enemy_bullet(&mut self, bullet: Projectile) -> EnemyBulletKey {
        self.enemy_bullets.insert(bullet)
    }

    /// Whether the stage has ended, and how
    ///
    /// A stage without a spawn script counts its schedule as finished.
    pub fn stage_outcome(&self) -> Option<StageOutcome> {
        if !self.player.is_alive() {
            return Some(StageOutcome::Defeated);
        }
        let schedule_done = self
            .spawn_schedule
            .as_ref()
            .map_or(true, SpawnSchedule::is_finished);
        (schedule_done && self.enemies.is_empty()).then_some(StageOutcome::Cleared)
    }

    /// Live enemies
    pub fn enemies(&self) -> &EntityPool<EnemyKey, Enemy> {
        &self.enemies
    }

    /// Mutable access to live enemies
    pub fn enemies_mut(&mut self) -> &mut EntityPool<EnemyKey, Enemy> {
        &mut self.enemies
    }

    /// Enemy bullets in flight
    pub fn enemy_bullets(&self) -> &EntityPool<EnemyBulletKey, Projectile> {
        &self.enemy_bullets
    }

    /// The player ship
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Rail camera
    pub fn rail_camera(&self) -> &RailCamera {
        &self.rail_camera
    }

    /// View and projection of the active camera this frame
    pub fn view_projection(&self) -> &ViewProjection {
        &self.view_projection
    }

    /// Whether the debug camera is driving the view
    pub fn is_debug_camera_active(&self) -> bool {
        self.debug_camera_active
    }

    /// Frames simulated so far
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

/// Input source with nothing held, used to place the player before the
/// first frame
struct NoInput;

impl InputSource for NoInput {
    fn is_held(&self, _key: KeyCode) -> bool {
        false
    }

    fn was_pressed(&self, _key: KeyCode) -> bool {
        false
    }
}
