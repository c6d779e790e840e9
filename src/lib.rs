//! Gridfire - a first-person raycasting maze shooter
//!
//! This crate is the simulation kernel only:
//! - `sim`: deterministic gameplay (grid map, raycasting, movement, combat, AI)
//! - `config`: data-driven game balance
//!
//! Rendering, input wiring, HUD and bootstrapping live in the consumer; they
//! feed a `TickInput` each frame and read rays/entities back for drawing.

pub mod config;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use sim::{GameState, GameStatus, GridMap, Player, Ray, TickInput, cast_rays, tick};

/// Wrap an angle into [0, 2π)
#[inline]
pub fn wrap_angle(mut angle: f32) -> f32 {
    use std::f32::consts::TAU;
    while angle >= TAU {
        angle -= TAU;
    }
    while angle < 0.0 {
        angle += TAU;
    }
    angle
}

/// Absolute angular separation between two headings, folded into [0, π]
#[inline]
pub fn angle_diff(a: f32, b: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let d = wrap_angle(a - b);
    if d > PI { TAU - d } else { d }
}
