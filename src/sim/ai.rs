//! Enemy pursuit and contact attacks
//!
//! Each living enemy acts independently per tick: inside melee range it
//! attacks (cooldown permitting) and does not move; outside it, it walks
//! straight toward the player through the collision resolver. Enemies do not
//! collide with each other.

use log::trace;

use super::map::GridMap;
use super::movement::{displacement, try_move};
use super::state::{Enemy, GameEvent, Player};
use crate::config::GameConfig;

/// Advance every enemy one tick and apply contact damage to the player.
pub fn update_enemies(
    enemies: &mut [Enemy],
    player: &mut Player,
    map: &GridMap,
    cfg: &GameConfig,
    dt: f32,
    events: &mut Vec<GameEvent>,
) {
    let melee_range = cfg.melee_range_tiles * map.tile_size();

    for (index, enemy) in enemies.iter_mut().enumerate() {
        if !enemy.alive {
            continue;
        }

        let offset = player.pos - enemy.pos;
        if offset.length() < melee_range {
            // In range: attack or wait out the cooldown, but never move.
            if enemy.attack_cooldown <= 0.0 {
                player.apply_damage(cfg.melee_damage);
                enemy.attack_cooldown = cfg.melee_cooldown_secs;
                events.push(GameEvent::PlayerHit {
                    damage: cfg.melee_damage,
                });
                trace!("enemy {index} strikes, player at {:.0} hp", player.health);
            }
        } else {
            let heading = offset.y.atan2(offset.x);
            enemy.pos = try_move(map, enemy.pos, displacement(heading, enemy.speed * dt));
        }

        enemy.attack_cooldown = (enemy.attack_cooldown - dt).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup() -> (GridMap, GameConfig, Player) {
        let map = GridMap::default_arena();
        let cfg = GameConfig::default();
        let player = Player::spawn(&map, &cfg);
        (map, cfg, player)
    }

    #[test]
    fn test_adjacent_enemy_strikes_and_holds_position() {
        let (map, cfg, mut player) = setup();
        let pos = player.pos + Vec2::new(30.0, 0.0);
        let mut enemies = vec![Enemy::new(pos, &cfg)];
        let mut events = Vec::new();

        update_enemies(&mut enemies, &mut player, &map, &cfg, 1.0 / 60.0, &mut events);

        assert_eq!(player.health, cfg.max_health - cfg.melee_damage);
        assert_eq!(enemies[0].pos, pos);
        assert!(
            (enemies[0].attack_cooldown - (cfg.melee_cooldown_secs - 1.0 / 60.0)).abs() < 1e-5
        );
        assert_eq!(
            events,
            vec![GameEvent::PlayerHit {
                damage: cfg.melee_damage
            }]
        );
    }

    #[test]
    fn test_cooldown_gates_repeat_strikes() {
        let (map, cfg, mut player) = setup();
        let mut enemies = vec![Enemy::new(player.pos + Vec2::new(30.0, 0.0), &cfg)];
        let mut events = Vec::new();
        let dt = 0.1;

        update_enemies(&mut enemies, &mut player, &map, &cfg, dt, &mut events);
        let after_first = player.health;

        // Cooling down: no second hit yet.
        update_enemies(&mut enemies, &mut player, &map, &cfg, dt, &mut events);
        assert_eq!(player.health, after_first);

        // Run the cooldown out; the next tick lands another hit.
        let remaining = (cfg.melee_cooldown_secs / dt) as usize;
        for _ in 0..remaining {
            update_enemies(&mut enemies, &mut player, &map, &cfg, dt, &mut events);
        }
        assert_eq!(player.health, after_first - cfg.melee_damage);
    }

    #[test]
    fn test_distant_enemy_closes_in() {
        let (map, cfg, mut player) = setup();
        // Due east of the player along an open row.
        let start = player.pos + Vec2::new(300.0, 0.0);
        let mut enemies = vec![Enemy::new(start, &cfg)];
        let mut events = Vec::new();
        let dt = 0.1;

        update_enemies(&mut enemies, &mut player, &map, &cfg, dt, &mut events);

        let expected = start.x - cfg.enemy_speed * dt;
        assert!((enemies[0].pos.x - expected).abs() < 1e-3);
        assert!((enemies[0].pos.y - start.y).abs() < 1e-3);
        assert_eq!(player.health, cfg.max_health);
        assert!(events.is_empty());
    }

    #[test]
    fn test_pursuit_respects_walls() {
        let (map, cfg, mut player) = setup();
        // Enemy east of the (7, 2)-(8, 3) block, player to its west: the
        // direct line is solid, so the X advance is rejected.
        player.pos = map.tile_center(5, 2);
        let start = map.tile_center(10, 2);
        let mut enemies = vec![Enemy::new(start, &cfg)];
        let mut events = Vec::new();

        for _ in 0..600 {
            update_enemies(&mut enemies, &mut player, &map, &cfg, 1.0 / 60.0, &mut events);
            assert!(!map.is_wall(enemies[0].pos));
        }
    }

    #[test]
    fn test_dead_enemies_are_inert() {
        let (map, cfg, mut player) = setup();
        let pos = player.pos + Vec2::new(30.0, 0.0);
        let mut enemies = vec![Enemy::new(pos, &cfg)];
        enemies[0].alive = false;
        let mut events = Vec::new();

        update_enemies(&mut enemies, &mut player, &map, &cfg, 0.1, &mut events);

        assert_eq!(player.health, cfg.max_health);
        assert_eq!(enemies[0].pos, pos);
        assert!(events.is_empty());
    }

    #[test]
    fn test_health_clamps_at_zero_under_swarm() {
        let (map, cfg, mut player) = setup();
        player.health = cfg.melee_damage / 2.0;
        let mut enemies = vec![
            Enemy::new(player.pos + Vec2::new(30.0, 0.0), &cfg),
            Enemy::new(player.pos + Vec2::new(-30.0, 0.0), &cfg),
        ];
        let mut events = Vec::new();

        update_enemies(&mut enemies, &mut player, &map, &cfg, 0.1, &mut events);
        assert_eq!(player.health, 0.0);
    }
}
