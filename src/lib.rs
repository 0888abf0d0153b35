//! Grid raycaster shooter.
//!
//! - `core`: map, player, enemies and the per-frame update
//! - `render`: CPU framebuffer, ray march and HUD
//! - `audio_manager`: firing and damage sounds
//! - `config`: CLI flags and gameplay tuning

pub mod audio_manager;
pub mod config;
pub mod core;
pub mod error;
pub mod render;

pub use error::{GameError, Result};
