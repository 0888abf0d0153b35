use rand::SeedableRng;
use rand::rngs::StdRng;
use raylib::prelude::Color;
use raycast_arena::config::{RayTuning, Variant};
use raycast_arena::core::game::GameState;
use raycast_arena::core::maze::Maze;
use raycast_arena::render::framebuffer::Framebuffer;
use raycast_arena::render::hud::*;
use raycast_arena::render::render3d::{WallStyle, render_3d};

#[test]
fn one_depth_per_ray() {
    let state = GameState::new(Maze::classic(), Variant::Classic.settings(), StdRng::seed_from_u64(0));
    let mut fb = Framebuffer::new(160, 90);
    let depths = render_3d(&mut fb, &state.maze, &state.player, &RayTuning::default(), WallStyle::CLASSIC);
    assert_eq!(depths.len(), 160);

    let arena = RayTuning { num_rays: Some(40), ..RayTuning::default() };
    let depths = render_3d(&mut fb, &state.maze, &state.player, &arena, WallStyle::ARENA);
    assert_eq!(depths.len(), 40);
    assert!(depths.iter().all(|d| *d > 0.0 && *d <= arena.max_distance));
}

#[test]
fn horizon_row_is_wall_colored() {
    let state = GameState::new(Maze::classic(), Variant::Classic.settings(), StdRng::seed_from_u64(0));
    let mut fb = Framebuffer::new(160, 90);
    render_3d(&mut fb, &state.maze, &state.player, &RayTuning::default(), WallStyle::CLASSIC);
    // every strip reaches just above the horizon, where the sky is black
    for x in 0..160 {
        assert_ne!(fb.get_pixel(x, 44), Color::BLACK, "column {x}");
    }
}

#[test]
fn hp_colors_by_threshold() {
    assert_eq!(hp_color(100), hp_color(50));
    assert_eq!(hp_color(49), hp_color(30));
    assert_ne!(hp_color(50), hp_color(49));
    assert_ne!(hp_color(30), hp_color(29));
    assert_eq!(hp_color(0), Color::new(255, 0, 0, 255));
}

#[test]
fn gun_grows_and_lifts_with_kick() {
    let (x0, y0, w0, h0) = gun_rect(960.0, 540.0, 0.0);
    let (x1, y1, w1, h1) = gun_rect(960.0, 540.0, 1.0);
    assert_eq!((w0, h0), (96, 108));
    assert!(w1 > w0 && h1 > h0);
    assert!(y1 < y0);
    assert!(x1 != x0);
}

#[test]
fn hidden_minimap_leaves_frame_untouched() {
    let state = GameState::new(Maze::classic(), Variant::Classic.settings(), StdRng::seed_from_u64(0));
    let mut fb = Framebuffer::new(200, 120);
    fb.set_background_color(Color::new(1, 2, 3, 255));
    fb.clear();
    draw_hud(&mut fb, &state);
    assert!(fb.color_buffer.iter().all(|c| *c == Color::new(1, 2, 3, 255)));
}

#[test]
fn arena_hud_draws_minimap_player() {
    let state = GameState::new(Maze::bordered(20, 20), Variant::Arena.settings(), StdRng::seed_from_u64(0));
    let mut fb = Framebuffer::new(960, 540);
    draw_hud(&mut fb, &state);
    // player at (2.5, 2.5) lands on pixel (25, 25)
    assert_eq!(fb.get_pixel(25, 25), Color::BLUE);
    // top-left border cell is a wall
    assert_eq!(fb.get_pixel(2, 2), Color::BLACK);
    assert_eq!(fb.get_pixel(15, 35), Color::WHITE);
}

#[test]
fn game_over_darkens_frame() {
    let mut state = GameState::new(Maze::bordered(20, 20), Variant::Arena.settings(), StdRng::seed_from_u64(0));
    state.player.take_damage(1000);
    let mut fb = Framebuffer::new(100, 60);
    fb.set_background_color(Color::WHITE);
    fb.clear();
    draw_hud(&mut fb, &state);
    let c = fb.get_pixel(50, 30);
    assert!(c.r < 100 && c.g < 100 && c.b < 100);
}
