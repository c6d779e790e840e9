//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Explicit `dt` only, no hidden clocks
//! - Seeded RNG only (enemy placement at game start)
//! - All mutable state threaded through the caller-owned `GameState`
//! - No rendering or platform dependencies

pub mod ai;
pub mod combat;
pub mod map;
pub mod movement;
pub mod raycast;
pub mod spawn;
pub mod state;
pub mod tick;

pub use ai::update_enemies;
pub use combat::{fire_weapon, line_of_sight};
pub use map::{GridMap, MapError};
pub use movement::{displacement, move_intent, try_move, update_player};
pub use raycast::cast_rays;
pub use spawn::{SpawnError, spawn_enemies};
pub use state::{Enemy, GameEvent, GameState, GameStatus, MoveIntent, Player, Ray};
pub use tick::{TickInput, evaluate, tick};
