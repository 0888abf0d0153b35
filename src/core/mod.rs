//! Core game logic (no drawing).
//!
//! Re-exports:
//! - `maze`: grid map loading, generation and queries
//! - `player`: player state, movement and health
//! - `enemy`: enemy pursuit and BFS navigation
//! - `game`: per-frame update, shooting and spawning
//! - `process_events`: input polling

pub mod enemy;
pub mod game;
pub mod maze;
pub mod player;
pub mod process_events;

use std::f32::consts::{PI, TAU};

/// Wraps an angle into `[-PI, PI)`.
#[inline]
pub fn normalize_angle(a: f32) -> f32 {
    (a + PI).rem_euclid(TAU) - PI
}
