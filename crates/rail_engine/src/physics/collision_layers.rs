//! Collision layer system for filtering collision detection
//!
//! Based on Game Engine Architecture 3rd Edition, Section 13.3.8:
//! "Most games need to filter collisions... This is typically done via
//! collision layers or groups."

use bitflags::bitflags;

bitflags! {
    /// Collision layer bits; an object has one layer and a mask of layers it
    /// reacts to
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CollisionLayers: u32 {
        /// Player ship
        const PLAYER = 1 << 0;
        /// Enemy craft
        const ENEMY = 1 << 1;
        /// Bullets fired by the player
        const PLAYER_PROJECTILE = 1 << 2;
        /// Bullets fired by enemies
        const ENEMY_PROJECTILE = 1 << 3;
    }
}

impl CollisionLayers {
    /// Check if two objects should collide based on their layers and masks
    ///
    /// A's layer must be in B's mask AND B's layer must be in A's mask.
    pub fn should_collide(layer_a: Self, mask_a: Self, layer_b: Self, mask_b: Self) -> bool {
        layer_a.intersects(mask_b) && layer_b.intersects(mask_a)
    }
}
