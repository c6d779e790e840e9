//! Data-driven game balance
//!
//! Every tunable the kernel consumes lives here. The consumer constructs one
//! `GameConfig` (defaults carry the stock balance), optionally overrides
//! fields, and passes it into every kernel call. Validation happens once at
//! load; the simulation path itself never checks these again.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration rejected at load time
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be positive")]
    NonPositive { field: &'static str },
    #[error("fov must be in (0, π], got {0}")]
    FovOutOfRange(f32),
    #[error("ray_count must be at least 1")]
    ZeroRayCount,
    #[error("enemy_count must be at least 1")]
    ZeroEnemyCount,
}

/// Game balance constants
///
/// Distances are world units, durations are seconds, angles are radians.
/// Tile-relative fields (`melee_range_tiles`, spawn distances) are scaled by
/// the map's tile size at the point of use, so one config works across maps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    // === Raycasting ===
    /// Number of rays per frame (one wall strip each)
    pub ray_count: usize,
    /// Distance at which a ray gives up, world units
    pub max_depth: f32,
    /// March step for rays and line-of-sight tests, world units
    pub ray_step: f32,

    // === Player ===
    /// Horizontal field of view, radians
    pub fov: f32,
    /// Translation speed, world units per second
    pub player_speed: f32,
    /// Turn rate, radians per second
    pub rot_speed: f32,
    pub max_health: f32,
    pub max_ammo: u32,
    /// Spawn cell (column, row); the player starts at its center
    pub spawn_tile: (usize, usize),

    // === Weapon ===
    /// Damage per landed shot
    pub weapon_damage: f32,
    /// Maximum shot distance, world units
    pub weapon_range: f32,
    /// Recovery between shots, seconds
    pub fire_cooldown_secs: f32,
    /// Reload delay, seconds (the timer itself is driven by the caller)
    pub reload_secs: f32,

    // === Enemies ===
    pub enemy_count: usize,
    pub enemy_health: f32,
    /// Pursuit speed, world units per second
    pub enemy_speed: f32,
    /// Billboard radius, world units (cosmetic only)
    pub enemy_radius: f32,
    /// Contact-attack range as a multiple of tile size
    pub melee_range_tiles: f32,
    /// Damage per contact attack
    pub melee_damage: f32,
    /// Recovery between contact attacks, seconds
    pub melee_cooldown_secs: f32,

    // === Spawn placement ===
    /// Minimum spawn distance from the player, in tiles
    pub spawn_min_player_dist_tiles: f32,
    /// Minimum spacing between spawned enemies, in tiles
    pub spawn_min_spacing_tiles: f32,
    /// Rejection-sampling attempts per enemy before giving up
    pub spawn_attempt_budget: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ray_count: 120,
            max_depth: 500.0,
            ray_step: 2.0,

            fov: std::f32::consts::FRAC_PI_3,
            player_speed: 180.0,
            rot_speed: 3.0,
            max_health: 100.0,
            max_ammo: 50,
            spawn_tile: (3, 3),

            weapon_damage: 34.0,
            weapon_range: 500.0,
            fire_cooldown_secs: 0.5,
            reload_secs: 2.0,

            enemy_count: 8,
            enemy_health: 100.0,
            enemy_speed: 80.0,
            enemy_radius: 20.0,
            melee_range_tiles: 2.0,
            melee_damage: 10.0,
            melee_cooldown_secs: 1.0,

            spawn_min_player_dist_tiles: 3.0,
            spawn_min_spacing_tiles: 1.0,
            spawn_attempt_budget: 1000,
        }
    }
}

impl GameConfig {
    /// Check the config once at load; a misconfigured game never ticks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        use std::f32::consts::PI;

        if self.ray_count == 0 {
            return Err(ConfigError::ZeroRayCount);
        }
        if self.enemy_count == 0 {
            return Err(ConfigError::ZeroEnemyCount);
        }
        if !(self.fov > 0.0 && self.fov <= PI) {
            return Err(ConfigError::FovOutOfRange(self.fov));
        }

        let positives: [(&'static str, f32); 13] = [
            ("max_depth", self.max_depth),
            ("ray_step", self.ray_step),
            ("player_speed", self.player_speed),
            ("rot_speed", self.rot_speed),
            ("max_health", self.max_health),
            ("weapon_damage", self.weapon_damage),
            ("weapon_range", self.weapon_range),
            ("fire_cooldown_secs", self.fire_cooldown_secs),
            ("enemy_health", self.enemy_health),
            ("enemy_speed", self.enemy_speed),
            ("melee_range_tiles", self.melee_range_tiles),
            ("melee_damage", self.melee_damage),
            ("melee_cooldown_secs", self.melee_cooldown_secs),
        ];
        for (field, value) in positives {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field });
            }
        }
        if self.spawn_attempt_budget == 0 {
            return Err(ConfigError::NonPositive {
                field: "spawn_attempt_budget",
            });
        }
        Ok(())
    }
}
