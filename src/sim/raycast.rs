//! Fixed-step ray marching against the grid
//!
//! One ray per screen strip, swept left-to-right across the field of view.
//! Marching is a plain fixed-step walk: deterministic for identical inputs,
//! no DDA shortcuts, no randomness.

use glam::Vec2;

use super::map::GridMap;
use super::state::{Player, Ray};
use crate::config::GameConfig;

/// Cast the full fan of rays for the current player state.
///
/// Ray `i` leaves at `dir - fov/2 + i * (fov / ray_count)`, so index order is
/// left-to-right across the view. If the origin itself is inside a wall
/// (which correct collision never produces), every ray reports distance zero.
pub fn cast_rays(map: &GridMap, player: &Player, cfg: &GameConfig) -> Vec<Ray> {
    let sector = player.fov / cfg.ray_count as f32;
    let leftmost = player.dir - player.fov / 2.0;

    let origin_buried = map.is_wall(player.pos);
    (0..cfg.ray_count)
        .map(|i| {
            let angle = leftmost + i as f32 * sector;
            if origin_buried {
                Ray {
                    distance: 0.0,
                    angle,
                    hit_wall: true,
                }
            } else {
                march(map, player.pos, angle, cfg.ray_step, cfg.max_depth)
            }
        })
        .collect()
}

/// Walk one ray outward until it lands in a wall or runs out of depth.
fn march(map: &GridMap, origin: Vec2, angle: f32, step: f32, max_depth: f32) -> Ray {
    let heading = Vec2::from_angle(angle);
    let mut distance = 0.0;
    loop {
        distance += step;
        if distance >= max_depth {
            return Ray {
                distance: max_depth,
                angle,
                hit_wall: false,
            };
        }
        if map.is_wall(origin + heading * distance) {
            return Ray {
                distance,
                angle,
                hit_wall: true,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn setup() -> (GridMap, Player, GameConfig) {
        let map = GridMap::default_arena();
        let cfg = GameConfig::default();
        let player = Player::spawn(&map, &cfg);
        (map, player, cfg)
    }

    #[test]
    fn test_ray_count_and_ordering() {
        let (map, player, cfg) = setup();
        let rays = cast_rays(&map, &player, &cfg);
        assert_eq!(rays.len(), cfg.ray_count);
        // Angles increase monotonically, starting at the left edge of the fov
        assert!((rays[0].angle - (player.dir - player.fov / 2.0)).abs() < 1e-5);
        for pair in rays.windows(2) {
            assert!(pair[1].angle > pair[0].angle);
        }
    }

    #[test]
    fn test_distances_bounded_by_max_depth() {
        let (map, player, cfg) = setup();
        for ray in cast_rays(&map, &player, &cfg) {
            assert!(ray.distance > 0.0);
            assert!(ray.distance <= cfg.max_depth);
            if ray.distance < cfg.max_depth {
                assert!(ray.hit_wall);
            } else {
                assert!(!ray.hit_wall);
            }
        }
    }

    #[test]
    fn test_straight_ray_finds_near_wall() {
        let (map, mut player, cfg) = setup();
        // From tile (3, 3) looking up (-Y): the border wall's lower face is at
        // y = 64, i.e. 160 units away from the tile center at y = 224.
        player.pos = map.tile_center(3, 3);
        player.dir = 3.0 * FRAC_PI_2;
        let rays = cast_rays(&map, &player, &cfg);
        let center = &rays[cfg.ray_count / 2];
        assert!(center.hit_wall);
        assert!((center.distance - 160.0).abs() <= cfg.ray_step + 1e-3);
    }

    #[test]
    fn test_depth_limited_ray_reports_no_hit() {
        let (map, mut player, cfg) = setup();
        // Clamp depth below the nearest wall in the facing direction.
        let cfg = GameConfig {
            max_depth: 40.0,
            ..cfg
        };
        player.pos = map.tile_center(3, 3);
        let rays = cast_rays(&map, &player, &cfg);
        let center = &rays[cfg.ray_count / 2];
        assert!(!center.hit_wall);
        assert_eq!(center.distance, cfg.max_depth);
    }

    #[test]
    fn test_origin_inside_wall_degenerates_to_zero() {
        let (map, mut player, cfg) = setup();
        player.pos = map.tile_center(0, 0);
        let rays = cast_rays(&map, &player, &cfg);
        assert_eq!(rays.len(), cfg.ray_count);
        for ray in rays {
            assert_eq!(ray.distance, 0.0);
            assert!(ray.hit_wall);
        }
    }

    #[test]
    fn test_identical_inputs_identical_rays() {
        let (map, player, cfg) = setup();
        let a = cast_rays(&map, &player, &cfg);
        let b = cast_rays(&map, &player, &cfg);
        assert_eq!(a, b);
    }
}
