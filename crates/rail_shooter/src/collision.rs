//! Per-frame collision pass
//!
//! Runs after every entity has moved and before anything is swept. Each
//! category pair is tested exhaustively; objects already dead this frame are
//! still tested, and their death writes are idempotent.

use rail_engine::foundation::collections::EntityPool;
use rail_engine::physics::check_pair;

use crate::enemy::{Enemy, EnemyKey};
use crate::player::Player;
use crate::projectile::{EnemyBulletKey, Projectile};

/// Pair hits found by one collision pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CollisionReport {
    /// Enemy bullets that hit the player
    pub player_hits: usize,
    /// Player bullets that hit an enemy
    pub enemy_hits: usize,
    /// Player bullets that met an enemy bullet
    pub bullet_clashes: usize,
}

impl CollisionReport {
    /// Total overlapping pairs
    pub fn total(&self) -> usize {
        self.player_hits + self.enemy_hits + self.bullet_clashes
    }
}

/// Test player × enemy bullets, enemies × player bullets and player bullets ×
/// enemy bullets, invoking both callbacks on every overlapping pair
pub fn check_all_collisions(
    player: &mut Player,
    enemies: &mut EntityPool<EnemyKey, Enemy>,
    enemy_bullets: &mut EntityPool<EnemyBulletKey, Projectile>,
) -> CollisionReport {
    let mut report = CollisionReport::default();

    enemy_bullets.for_each_mut(|_, bullet| {
        if check_pair(player, bullet) {
            report.player_hits += 1;
        }
    });

    let player_bullets = player.bullets_mut();

    enemies.for_each_mut(|_, enemy| {
        player_bullets.for_each_mut(|_, bullet| {
            if check_pair(enemy, bullet) {
                report.enemy_hits += 1;
            }
        });
    });

    player_bullets.for_each_mut(|_, bullet| {
        enemy_bullets.for_each_mut(|_, enemy_bullet| {
            if check_pair(bullet, enemy_bullet) {
                report.bullet_clashes += 1;
            }
        });
    });

    if report.total() > 0 {
        log::trace!("Collision pass: {report:?}");
    }
    report
}
