//! Enemy placement by rejection sampling
//!
//! Candidates are drawn uniformly over the interior of the map and rejected
//! while they land in a wall, too close to the player, or too close to an
//! already-placed enemy. The attempt budget turns a misconfigured map (too
//! many enemies, not enough open floor) into a load-time error instead of an
//! infinite loop.

use glam::Vec2;
use log::debug;
use rand::Rng;
use thiserror::Error;

use super::map::GridMap;
use super::state::{Enemy, Player};
use crate::config::GameConfig;

/// Placement gave up; the map/enemy-count combination is unworkable.
#[derive(Debug, Error, PartialEq)]
pub enum SpawnError {
    #[error("no valid placement for enemy {placed} after {budget} attempts")]
    PlacementExhausted { placed: usize, budget: u32 },
}

/// Place the configured number of enemies on open floor.
///
/// Draws come from the caller's RNG, so a seeded generator reproduces the
/// exact roster. Candidates span `[tile, (w-1)*tile) x [tile, (h-1)*tile)`;
/// the border ring is solid on every stock map and not worth sampling.
pub fn spawn_enemies(
    map: &GridMap,
    cfg: &GameConfig,
    player: &Player,
    rng: &mut impl Rng,
) -> Result<Vec<Enemy>, SpawnError> {
    let tile = map.tile_size();
    let min_player_dist = cfg.spawn_min_player_dist_tiles * tile;
    let min_spacing = cfg.spawn_min_spacing_tiles * tile;
    let x_range = tile..(map.width() as f32 - 1.0) * tile;
    let y_range = tile..(map.height() as f32 - 1.0) * tile;

    let mut enemies: Vec<Enemy> = Vec::with_capacity(cfg.enemy_count);
    for placed in 0..cfg.enemy_count {
        let mut accepted = None;
        for _ in 0..cfg.spawn_attempt_budget {
            let candidate = Vec2::new(
                rng.random_range(x_range.clone()),
                rng.random_range(y_range.clone()),
            );
            if map.is_wall(candidate) {
                continue;
            }
            if candidate.distance(player.pos) < min_player_dist {
                continue;
            }
            if enemies.iter().any(|e| e.pos.distance(candidate) < min_spacing) {
                continue;
            }
            accepted = Some(candidate);
            break;
        }
        match accepted {
            Some(pos) => enemies.push(Enemy::new(pos, cfg)),
            None => {
                return Err(SpawnError::PlacementExhausted {
                    placed,
                    budget: cfg.spawn_attempt_budget,
                });
            }
        }
    }

    debug!("placed {} enemies", enemies.len());
    Ok(enemies)
}
