//! Software rendering into a CPU framebuffer.
//!
//! Re-exports:
//! - `framebuffer`: color buffer, primitives and window letterboxing
//! - `casters`: fixed-step ray march
//! - `render3d`: wall strip renderer
//! - `hud`: minimap, HP bar, gun and game-over overlay

pub mod casters;
pub mod framebuffer;
pub mod hud;
pub mod render3d;
