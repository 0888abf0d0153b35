//! Column renderer: one shaded vertical strip per ray.
use raylib::prelude::*;

use crate::config::RayTuning;
use crate::core::maze::Maze;
use crate::core::player::Player;
use crate::render::casters::{cast_ray, corrected_distance, ray_angle};
use crate::render::framebuffer::{Framebuffer, mix};

const FLOOR: Color = Color::new(34, 34, 34, 255);

#[derive(Copy, Clone, Debug)]
pub struct WallStyle {
    pub wall: Color,
    pub background: Color,
}

impl WallStyle {
    /// White walls over black.
    pub const CLASSIC: WallStyle = WallStyle {
        wall: Color::new(255, 255, 255, 255),
        background: Color::new(0, 0, 0, 255),
    };
    /// Grey walls over a slate backdrop.
    pub const ARENA: WallStyle = WallStyle {
        wall: Color::new(150, 150, 150, 255),
        background: Color::new(50, 50, 70, 255),
    };
}

/// Vertical extent of one wall strip in framebuffer rows.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Strip {
    pub top: f32,
    pub bottom: f32,
    pub brightness: f32,
}

/// Strip height is `screen_h / corrected * wall_scale`, centred on the horizon.
pub fn wall_strip(corrected: f32, screen_h: f32, rays: &RayTuning) -> Strip {
    let d = corrected.max(1e-4);
    let height = screen_h / d * rays.wall_scale;
    let mid = screen_h / 2.0;
    Strip {
        top: mid - height / 2.0,
        bottom: mid + height / 2.0,
        brightness: shade(corrected, rays),
    }
}

/// Linear falloff with distance, floored at `min_brightness`.
#[inline]
pub fn shade(corrected: f32, rays: &RayTuning) -> f32 {
    (1.0 - corrected / rays.fade_distance).clamp(0.0, 1.0).max(rays.min_brightness)
}

/// Paints floor and walls. Returns the corrected distance of every ray.
pub fn render_3d(
    fb: &mut Framebuffer,
    maze: &Maze,
    player: &Player,
    rays: &RayTuning,
    style: WallStyle,
) -> Vec<f32> {
    let w = fb.width;
    let h = fb.height as f32;
    let num_rays = rays.num_rays.unwrap_or(w).max(1);
    let col_w = w as f32 / num_rays as f32;

    fb.fill_rect(0, 0, w as i32, (h / 2.0) as i32, style.background);
    fb.fill_rect(0, (h / 2.0) as i32, w as i32, h as i32, FLOOR);

    let mut depths = Vec::with_capacity(num_rays as usize);
    for i in 0..num_rays {
        let a = ray_angle(player.dir, player.fov, i, num_rays);
        let hit = cast_ray(maze, player.pos.x, player.pos.y, a, rays);
        let corrected = corrected_distance(hit.distance, a, player.dir);
        depths.push(corrected);

        let strip = wall_strip(corrected, h, rays);
        let color = mix(style.background, style.wall, strip.brightness);
        fb.set_current_color(color);

        let x0 = (i as f32 * col_w).floor() as u32;
        let x1 = (((i + 1) as f32 * col_w).floor() as u32).max(x0 + 1).min(w);
        let y0 = strip.top.max(0.0) as u32;
        let y1 = strip.bottom.min(h) as u32;
        for x in x0..x1 {
            for y in y0..y1 {
                fb.set_pixel(x, y);
            }
        }
    }
    depths
}
