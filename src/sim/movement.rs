//! Collision-checked movement
//!
//! Translation resolves per axis: a blocked diagonal step still applies
//! whichever single-axis component is free, so entities slide along walls
//! instead of sticking to corners. Rotation never collides.

use glam::Vec2;

use super::map::GridMap;
use super::state::Player;
use crate::wrap_angle;

/// Displacement vector for a heading and magnitude.
#[inline]
pub fn displacement(direction: f32, magnitude: f32) -> Vec2 {
    Vec2::from_angle(direction) * magnitude
}

/// Candidate position for an intended move, before collision resolution.
#[inline]
pub fn move_intent(from: Vec2, direction: f32, magnitude: f32) -> Vec2 {
    from + displacement(direction, magnitude)
}

/// Apply a displacement against the map.
///
/// Tries the full 2D step first. If the combined point is solid, the X-only
/// and Y-only displacements are tested independently against the original
/// other coordinate, and whichever axis is free applies.
pub fn try_move(map: &GridMap, from: Vec2, delta: Vec2) -> Vec2 {
    let target = from + delta;
    if !map.is_wall(target) {
        return target;
    }
    let mut resolved = from;
    if !map.is_wall(Vec2::new(target.x, from.y)) {
        resolved.x = target.x;
    }
    if !map.is_wall(Vec2::new(from.x, target.y)) {
        resolved.y = target.y;
    }
    resolved
}

/// Advance the player one tick from its movement intent.
///
/// Turning is collision-free; translation goes through `try_move`. The shot
/// cooldown also counts down here so it scales with the same `dt` as
/// everything else.
pub fn update_player(player: &mut Player, map: &GridMap, dt: f32) {
    let turn = player.rot_speed * dt;
    if player.intent.turn_left {
        player.dir = wrap_angle(player.dir - turn);
    }
    if player.intent.turn_right {
        player.dir = wrap_angle(player.dir + turn);
    }

    let step = player.speed * dt;
    if player.intent.forward {
        player.pos = try_move(map, player.pos, displacement(player.dir, step));
    }
    if player.intent.backward {
        player.pos = try_move(map, player.pos, displacement(player.dir, -step));
    }

    player.attack_cooldown = (player.attack_cooldown - dt).max(0.0);
}
