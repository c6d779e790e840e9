//! Per-tick orchestration
//!
//! One tick runs movement, enemy AI, then combat, then re-evaluates the
//! terminal state, all scaled by the caller-supplied `dt`. The kernel never
//! halts itself: once the status goes terminal the caller stops calling (or
//! keeps ticking a frozen endgame, which is harmless).

use log::debug;

use super::ai::update_enemies;
use super::combat::fire_weapon;
use super::map::GridMap;
use super::movement::update_player;
use super::state::{Enemy, GameState, GameStatus, MoveIntent, Player};
use crate::config::GameConfig;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Movement flags sampled by the input layer
    pub intent: MoveIntent,
    /// Pull the trigger this tick
    pub fire: bool,
}

/// Classify the current frame. Pure; death outranks victory.
pub fn evaluate(player: &Player, enemies: &[Enemy]) -> GameStatus {
    if player.health <= 0.0 {
        return GameStatus::GameOver;
    }
    if enemies.iter().all(|e| !e.alive) {
        return GameStatus::GameClear;
    }
    GameStatus::Playing
}

/// Advance the whole simulation by one tick of `dt` seconds.
///
/// Every distance and angle delta inside is proportional to `dt`, so the
/// caller may run at any frame rate as long as it passes true elapsed time.
pub fn tick(
    state: &mut GameState,
    map: &GridMap,
    cfg: &GameConfig,
    input: &TickInput,
    dt: f32,
) -> GameStatus {
    state.events.clear();

    state.player.intent = input.intent;
    update_player(&mut state.player, map, dt);
    update_enemies(
        &mut state.enemies,
        &mut state.player,
        map,
        cfg,
        dt,
        &mut state.events,
    );
    if input.fire {
        fire_weapon(
            &mut state.player,
            &mut state.enemies,
            map,
            cfg,
            &mut state.events,
        );
    }

    let status = evaluate(&state.player, &state.enemies);
    if status != state.status {
        debug!("status {:?} -> {:?}", state.status, status);
        state.status = status;
    }
    status
}
