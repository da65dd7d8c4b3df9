//! Scene-level scenarios: collisions over time, sweeps, spawning and cameras

use approx::assert_relative_eq;
use rail_engine::foundation::collections::{EntityPool, Lifecycle};
use rail_engine::foundation::math::{Mat4, Vec3};
use rail_engine::input::{InputManager, KeyCode};
use rail_engine::physics::Collider;
use rail_engine::render::{DrawLog, TextureHandle, TextureRegistry};

use crate::collision::check_all_collisions;
use crate::config::{GameConfig, PlayerConfig};
use crate::enemy::{Enemy, EnemyKey};
use crate::player::{Player, PlayerTextures};
use crate::projectile::{EnemyBulletKey, Faction, Projectile};
use crate::scene::{Scene, SceneTextures, StageAssets, StageOutcome};
use crate::spawn_script::SpawnSchedule;

fn empty_stage_config() -> GameConfig {
    let mut config = GameConfig::default();
    config.scene.initial_enemies.clear();
    config
}

fn scene_with(config: &GameConfig) -> Scene {
    Scene::new(config, &mut TextureRegistry::new()).unwrap()
}

#[test]
fn test_bullet_reaches_player_on_tick_71() {
    let config = PlayerConfig {
        start_position: Vec3::zeros(),
        ..PlayerConfig::default()
    };
    let textures = PlayerTextures {
        ship: TextureHandle(0),
        bullet: TextureHandle(1),
        reticle: TextureHandle(2),
    };
    let mut player = Player::new(&config, 1.5, textures);
    player.update(&InputManager::new(), &Mat4::identity());
    assert_eq!(player.world_position(), Vec3::zeros());

    let mut enemies: EntityPool<EnemyKey, Enemy> = EntityPool::new();
    let mut enemy_bullets: EntityPool<EnemyBulletKey, Projectile> = EntityPool::new();
    enemy_bullets.insert(Projectile::new(
        Faction::Enemy,
        Vec3::new(0.0, 0.0, 10.0),
        Vec3::new(0.0, 0.0, -0.1),
        1.5,
        TextureHandle(3),
    ));

    let mut hit_ticks = Vec::new();
    for tick in 1..=100 {
        enemy_bullets.for_each_mut(|_, bullet| bullet.update());
        if tick == 70 {
            let bullet = enemy_bullets.values().next().unwrap();
            assert_eq!(bullet.world_position(), Vec3::new(0.0, 0.0, 3.0));
        }
        let report = check_all_collisions(&mut player, &mut enemies, &mut enemy_bullets);
        if report.player_hits > 0 {
            hit_ticks.push(tick);
        }
        enemy_bullets.sweep_dead();
    }

    assert_eq!(hit_ticks, vec![71]);
    assert_eq!(player.hits_taken(), 1);
    assert!(player.is_alive());
    assert!(enemy_bullets.is_empty());
}

#[test]
fn test_killing_any_one_of_three_keeps_order() {
    let positions = [
        Vec3::new(-20.0, 0.0, 300.0),
        Vec3::new(0.0, 0.0, 300.0),
        Vec3::new(20.0, 0.0, 300.0),
    ];

    for victim in 0..3 {
        let mut scene = scene_with(&empty_stage_config());
        let keys: Vec<_> = positions.iter().map(|&p| scene.pop_enemy(p)).collect();

        scene.enemies_mut().get_mut(keys[victim]).unwrap().kill();
        scene.update(&InputManager::new());

        let survivors: Vec<f32> = scene.enemies().values().map(|e| e.world_position().x).collect();
        let expected: Vec<f32> = positions
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != victim)
            .map(|(_, p)| p.x)
            .collect();
        assert_eq!(survivors, expected, "victim {victim}");
        assert!(!scene.enemies().contains(keys[victim]));
    }
}

#[test]
fn test_player_rides_the_rail_camera() {
    let mut scene = scene_with(&empty_stage_config());
    let input = InputManager::new();
    for _ in 0..100 {
        scene.update(&input);
    }

    let camera_z = scene.rail_camera().world_position().z;
    assert_relative_eq!(camera_z, -40.0, epsilon = 1e-3);
    assert_relative_eq!(scene.player().world_position(), Vec3::new(0.0, 0.0, camera_z + 50.0), epsilon = 1e-3);
    assert_relative_eq!(scene.player().local_position(), Vec3::new(0.0, 0.0, 50.0));
}

#[test]
fn test_initial_enemies_fire_on_tick_60() {
    let mut scene = scene_with(&GameConfig::default());
    let input = InputManager::new();
    assert_eq!(scene.enemies().len(), 2);

    for _ in 0..59 {
        scene.update(&input);
    }
    assert!(scene.enemy_bullets().is_empty());

    scene.update(&input);
    assert_eq!(scene.enemy_bullets().len(), 2);
    for bullet in scene.enemy_bullets().values() {
        assert_eq!(bullet.faction(), Faction::Enemy);
        assert_relative_eq!(bullet.velocity().norm(), 1.0, epsilon = 1e-5);
    }
}

#[test]
fn test_enemy_bullets_expire_and_are_swept() {
    let mut scene = scene_with(&empty_stage_config());
    let key = scene.add_enemy_bullet(
        Projectile::new(
            Faction::Enemy,
            Vec3::new(500.0, 0.0, 0.0),
            Vec3::zeros(),
            1.5,
            TextureHandle(0),
        )
        .with_ttl(5),
    );
    let input = InputManager::new();

    for _ in 0..4 {
        scene.update(&input);
        assert!(scene.enemy_bullets().contains(key));
    }
    scene.update(&input);
    assert!(!scene.enemy_bullets().contains(key));
}

#[test]
fn test_spawn_schedule_pops_enemies_over_time() {
    let config = empty_stage_config();
    let schedule = SpawnSchedule::parse("POP,0,0,100\nWAIT,2\nPOP,5,0,100").unwrap();
    let assets = StageAssets {
        textures: SceneTextures::load(&mut TextureRegistry::new()),
        schedule: Some(schedule),
    };
    let mut scene = Scene::from_assets(&config, &assets);
    let input = InputManager::new();

    let counts: Vec<usize> = (0..5)
        .map(|_| {
            scene.update(&input);
            scene.enemies().len()
        })
        .collect();
    assert_eq!(counts, vec![1, 1, 1, 2, 2]);
    assert_eq!(scene.stage_outcome(), None);

    let keys: Vec<_> = scene.enemies().keys().collect();
    for key in keys {
        scene.enemies_mut().get_mut(key).unwrap().kill();
    }
    scene.update(&input);
    assert_eq!(scene.stage_outcome(), Some(StageOutcome::Cleared));
}

#[test]
fn test_player_bullet_destroys_enemy() {
    let mut scene = scene_with(&empty_stage_config());
    let ahead = scene.player().world_position() + Vec3::new(0.0, 0.0, 30.0);
    scene.pop_enemy(ahead);

    let mut input = InputManager::new();
    input.set_held([KeyCode::Space]);
    let mut frames = 0;
    while !scene.enemies().is_empty() && frames < 100 {
        scene.update(&input);
        input.begin_frame();
        frames += 1;
    }

    assert!(scene.enemies().is_empty());
    assert!(frames < 30, "took {frames} frames");
    assert_eq!(scene.stage_outcome(), Some(StageOutcome::Cleared));
}

#[test]
fn test_debug_camera_toggle() {
    let mut scene = scene_with(&empty_stage_config());
    let mut input = InputManager::new();

    input.set_held([KeyCode::Num0]);
    scene.update(&input);
    assert!(scene.is_debug_camera_active());
    let rail_view = scene.rail_camera().view_projection().view;
    assert_ne!(scene.view_projection().view, rail_view);

    // Holding the key does not toggle again
    input.begin_frame();
    scene.update(&input);
    assert!(scene.is_debug_camera_active());

    input.begin_frame();
    input.release_all();
    scene.update(&input);
    input.begin_frame();
    input.set_held([KeyCode::Num0]);
    scene.update(&input);
    assert!(!scene.is_debug_camera_active());
    assert_eq!(scene.view_projection(), scene.rail_camera().view_projection());
}

#[test]
fn test_debug_camera_disabled_by_config() {
    let mut config = empty_stage_config();
    config.scene.allow_debug_camera = false;
    let mut scene = scene_with(&config);
    let mut input = InputManager::new();
    input.set_held([KeyCode::Num0]);
    scene.update(&input);
    assert!(!scene.is_debug_camera_active());
}

#[test]
fn test_draw_order_and_counts() {
    let mut registry = TextureRegistry::new();
    let mut scene = Scene::new(&GameConfig::default(), &mut registry).unwrap();
    scene.update(&InputManager::new());

    let mut log = DrawLog::new();
    scene.draw(&mut log);

    let skydome = registry.get("skydome.png").unwrap();
    let ship = registry.get("mario.jpg").unwrap();
    let enemy = registry.get("enemy01.png").unwrap();

    assert_eq!(log.calls().len(), 5);
    assert!(matches!(log.calls()[0], rail_engine::render::DrawCall::Model { texture, .. } if texture == skydome));
    assert_eq!(log.model_count(ship), 2);
    assert_eq!(log.model_count(enemy), 2);
    assert_eq!(log.sprite_count(), 0);
}

#[test]
fn test_invalid_config_rejected_by_scene() {
    let mut config = GameConfig::default();
    config.collision.radius = -1.0;
    assert!(matches!(
        Scene::new(&config, &mut TextureRegistry::new()),
        Err(crate::GameError::Config(_))
    ));
}
