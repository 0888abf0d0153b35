//! Minimap, HP bar, gun and game-over overlay, drawn into the framebuffer.
use raylib::prelude::*;

use crate::config::MinimapStyle;
use crate::core::game::GameState;
use crate::core::maze::OPEN;
use crate::core::player::Player;
use crate::render::framebuffer::Framebuffer;

pub const MINIMAP_SCALE: f32 = 10.0;
pub const HP_BAR_W: i32 = 200;
pub const HP_BAR_H: i32 = 20;
pub const HP_BAR_MARGIN: i32 = 20;

const GUN: Color = Color::new(128, 128, 128, 255);
const HP_OK: Color = Color::new(0, 128, 0, 255);
const HP_LOW: Color = Color::new(255, 255, 0, 255);
const HP_CRITICAL: Color = Color::new(255, 0, 0, 255);

pub fn draw_minimap(fb: &mut Framebuffer, state: &GameState, style: MinimapStyle) {
    if style == MinimapStyle::Hidden {
        return;
    }
    let s = MINIMAP_SCALE;
    for (j, row) in state.maze.rows().enumerate() {
        for (i, &cell) in row.iter().enumerate() {
            let color = if cell == OPEN { Color::WHITE } else { Color::BLACK };
            fb.fill_rect((i as f32 * s) as i32, (j as f32 * s) as i32, s as i32, s as i32, color);
        }
    }

    let p = &state.player;
    let (px, py) = (p.pos.x * s, p.pos.y * s);
    fb.fill_circle(px, py, s / 2.0, Color::BLUE);
    if style == MinimapStyle::FullWithFacing {
        let len = s * 1.5;
        fb.draw_line(
            px as i32,
            py as i32,
            (px + p.dir.cos() * len) as i32,
            (py + p.dir.sin() * len) as i32,
            Color::DARKBLUE,
        );
    }

    for e in &state.enemies {
        fb.fill_circle(e.pos.x * s, e.pos.y * s, s / 3.0, Color::RED);
    }
}

/// Bar color by remaining HP: green, yellow below 50, red below 30.
pub fn hp_color(hp: i32) -> Color {
    if hp < 30 {
        HP_CRITICAL
    } else if hp < 50 {
        HP_LOW
    } else {
        HP_OK
    }
}

pub fn draw_hp_bar(fb: &mut Framebuffer, player: &Player) {
    let x = HP_BAR_MARGIN;
    let y = fb.height as i32 - HP_BAR_H - HP_BAR_MARGIN;
    let filled = (HP_BAR_W as f32 * player.hp_ratio()) as i32;
    fb.fill_rect(x, y, filled, HP_BAR_H, hp_color(player.hp));
    fb.stroke_rect(x, y, HP_BAR_W, HP_BAR_H, 2, Color::WHITE);
}

/// Gun rectangle `(x, y, w, h)` for a given kick.
pub fn gun_rect(screen_w: f32, screen_h: f32, kick: f32) -> (i32, i32, i32, i32) {
    let w = screen_w * 0.1 * (1.0 + kick * 0.2);
    let h = screen_h * 0.2 * (1.0 + kick * 0.2);
    let x = (screen_w - w) / 2.0 + kick * 10.0;
    let y = screen_h - h - 10.0 - kick * 20.0;
    (x as i32, y as i32, w as i32, h as i32)
}

pub fn draw_gun(fb: &mut Framebuffer, kick: f32) {
    let (x, y, w, h) = gun_rect(fb.width as f32, fb.height as f32, kick);
    fb.fill_rect(x, y, w, h, GUN);
}

/// Darkens the frame; the caption is drawn by the window layer.
pub fn draw_game_over(fb: &mut Framebuffer) {
    let (w, h) = (fb.width as i32, fb.height as i32);
    fb.blend_rect(0, 0, w, h, Color::BLACK, 0.7);
}

/// Everything on top of the 3D view for the current variant.
pub fn draw_hud(fb: &mut Framebuffer, state: &GameState) {
    let settings = &state.settings;
    if state.is_over() {
        draw_game_over(fb);
        return;
    }
    draw_minimap(fb, state, settings.minimap);
    if settings.hud {
        draw_gun(fb, state.gun_kick);
        draw_hp_bar(fb, &state.player);
    }
}
