//! Shooting and hit resolution
//!
//! A shot consumes ammo and starts the recovery timer whether or not it
//! connects. Target selection picks the nearest living enemy inside the
//! aim cone with a clear line of sight; roster order breaks distance ties.

use glam::Vec2;
use log::debug;

use super::map::GridMap;
use super::state::{Enemy, GameEvent, Player};
use crate::angle_diff;
use crate::config::GameConfig;

/// Whether the straight segment between two points crosses a wall tile.
///
/// Sampled at the same fixed step as the ray caster, endpoints excluded.
pub fn line_of_sight(map: &GridMap, from: Vec2, to: Vec2, step: f32) -> bool {
    let offset = to - from;
    let total = offset.length();
    if total <= step {
        return true;
    }
    let heading = offset / total;
    let mut travelled = step;
    while travelled < total {
        if map.is_wall(from + heading * travelled) {
            return false;
        }
        travelled += step;
    }
    true
}

/// Fire the player's weapon at the enemy roster.
///
/// No-op (returns false, nothing mutated) while out of ammo or still in
/// recovery. Otherwise ammo and cooldown are spent up front; a shot that
/// resolves no target is a miss, not a refund. Returns whether an enemy was
/// hit.
pub fn fire_weapon(
    player: &mut Player,
    enemies: &mut [Enemy],
    map: &GridMap,
    cfg: &GameConfig,
    events: &mut Vec<GameEvent>,
) -> bool {
    if player.ammo == 0 || player.attack_cooldown > 0.0 {
        return false;
    }
    player.ammo -= 1;
    player.attack_cooldown = cfg.fire_cooldown_secs;

    // Nearest candidate wins; scanning in roster order with a strict
    // comparison makes the first enemy win exact ties.
    let mut target = None;
    let mut best = cfg.weapon_range;
    for (index, enemy) in enemies.iter().enumerate() {
        if !enemy.alive {
            continue;
        }
        let offset = enemy.pos - player.pos;
        let dist = offset.length();
        if dist >= best {
            continue;
        }
        let bearing = offset.y.atan2(offset.x);
        if angle_diff(bearing, player.dir) >= player.fov / 2.0 {
            continue;
        }
        if !line_of_sight(map, player.pos, enemy.pos, cfg.ray_step) {
            continue;
        }
        target = Some(index);
        best = dist;
    }

    let hit = match target {
        Some(index) => {
            if enemies[index].apply_damage(cfg.weapon_damage) {
                debug!("enemy {index} down");
                events.push(GameEvent::EnemyKilled { index });
            }
            true
        }
        None => false,
    };
    events.push(GameEvent::ShotFired { hit });
    hit
}
