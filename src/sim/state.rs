//! Game state and core simulation types
//!
//! All state the kernel touches lives in these value types, owned by the
//! caller and threaded explicitly through every call. Nothing here holds a
//! back-reference or a hidden clock.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::map::GridMap;
use super::spawn::{SpawnError, spawn_enemies};
use crate::config::GameConfig;

/// Terminal-state classification for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    /// Player health reached zero (takes priority over a simultaneous clear)
    GameOver,
    /// Every enemy is down
    GameClear,
}

/// Caller-set movement intent for the current tick
///
/// Left/right turn the view; forward/backward translate along the facing
/// direction. There is no strafe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveIntent {
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

/// The player avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Position in world units
    pub pos: Vec2,
    /// Facing direction, radians, always wrapped to [0, 2π)
    pub dir: f32,
    /// Field of view, radians
    pub fov: f32,
    pub health: f32,
    pub max_health: f32,
    pub ammo: u32,
    pub max_ammo: u32,
    /// Movement flags, set by the input layer before each tick
    pub intent: MoveIntent,
    /// Translation speed, world units per second
    pub speed: f32,
    /// Turn rate, radians per second
    pub rot_speed: f32,
    /// Seconds until the next shot is allowed
    pub attack_cooldown: f32,
}

impl Player {
    /// Fresh player at the configured spawn cell, full stats.
    pub fn spawn(map: &GridMap, cfg: &GameConfig) -> Self {
        let (sx, sy) = cfg.spawn_tile;
        Self {
            pos: map.tile_center(sx, sy),
            dir: 0.0,
            fov: cfg.fov,
            health: cfg.max_health,
            max_health: cfg.max_health,
            ammo: cfg.max_ammo,
            max_ammo: cfg.max_ammo,
            intent: MoveIntent::default(),
            speed: cfg.player_speed,
            rot_speed: cfg.rot_speed,
            attack_cooldown: 0.0,
        }
    }

    /// Take damage, clamped at zero.
    pub fn apply_damage(&mut self, amount: f32) {
        self.health = (self.health - amount).max(0.0);
    }

    /// Refill ammo. The reload delay itself is the caller's timer.
    pub fn reload(&mut self) {
        self.ammo = self.max_ammo;
    }
}

/// A grid-roaming enemy
///
/// Dead enemies stay in the roster with `alive == false` so indices remain
/// stable for rendering; position and health freeze at death.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    /// Billboard radius, cosmetic only
    pub radius: f32,
    pub alive: bool,
    pub health: f32,
    pub max_health: f32,
    /// Seconds until the next contact attack is allowed
    pub attack_cooldown: f32,
    /// Pursuit speed, world units per second
    pub speed: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, cfg: &GameConfig) -> Self {
        Self {
            pos,
            radius: cfg.enemy_radius,
            alive: true,
            health: cfg.enemy_health,
            max_health: cfg.enemy_health,
            attack_cooldown: 0.0,
            speed: cfg.enemy_speed,
        }
    }

    /// Take damage; returns true when this crossing kills the enemy.
    ///
    /// The dead are frozen: damaging a corpse is a no-op, and the transition
    /// to dead happens exactly once.
    pub fn apply_damage(&mut self, amount: f32) -> bool {
        if !self.alive {
            return false;
        }
        self.health = (self.health - amount).max(0.0);
        if self.health <= 0.0 {
            self.alive = false;
            return true;
        }
        false
    }
}

/// One cast ray, regenerated every frame from player state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Distance to the first wall, clamped to the configured max depth
    pub distance: f32,
    /// Absolute world angle the ray was cast at
    pub angle: f32,
    /// False only when the ray ran out of depth
    pub hit_wall: bool,
}

/// Per-tick occurrences the HUD layer consumes (hit markers, damage flashes)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    ShotFired { hit: bool },
    EnemyKilled { index: usize },
    PlayerHit { damage: f32 },
}

/// Complete simulation state, owned by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed; placement is reproducible from it
    pub seed: u64,
    pub status: GameStatus,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    /// Events from the most recent tick, drained by the caller
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Start (or restart) a run: fresh player, enemies placed by seeded
    /// rejection sampling.
    pub fn new(map: &GridMap, cfg: &GameConfig, seed: u64) -> Result<Self, SpawnError> {
        let player = Player::spawn(map, cfg);
        let mut rng = Pcg32::seed_from_u64(seed);
        let enemies = spawn_enemies(map, cfg, &player, &mut rng)?;
        Ok(Self {
            seed,
            status: GameStatus::Playing,
            player,
            enemies,
            events: Vec::new(),
        })
    }

    /// Enemies still standing.
    pub fn living_enemies(&self) -> usize {
        self.enemies.iter().filter(|e| e.alive).count()
    }

    /// Hand the tick's events to the caller, leaving the buffer empty.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
