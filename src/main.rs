use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use raycast_arena::GameError;
use raycast_arena::audio_manager::AudioManager;
use raycast_arena::config::{Cli, MAX_FRAME_DT, TARGET_FPS, Variant};
use raycast_arena::core::game::{GameEvent, GameState};
use raycast_arena::core::maze::{DEFAULT_MAZE, Maze};
use raycast_arena::core::process_events::process_events;
use raycast_arena::render::framebuffer::{Framebuffer, letterbox};
use raycast_arena::render::hud::draw_hud;
use raycast_arena::render::render3d::{WallStyle, render_3d};

fn build_maze(cli: &Cli, rng: &mut StdRng) -> anyhow::Result<Maze> {
    let maze = match cli.variant {
        Variant::Classic => Maze::classic(),
        Variant::Arena => Maze::generate_arena(rng),
        Variant::Maze => match &cli.map {
            Some(path) => Maze::load(path).with_context(|| format!("loading maze {}", path.display()))?,
            None => Maze::parse(DEFAULT_MAZE).context("parsing embedded maze")?,
        },
    };
    Ok(maze)
}

/// Rough width of default-font text, enough to centre a caption.
fn text_width(text: &str, size: i32) -> i32 {
    text.len() as i32 * size * 11 / 20
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(variant = ?cli.variant, seed, "starting");
    let mut rng = StdRng::seed_from_u64(seed);

    let settings = cli.variant.settings();
    let maze = build_maze(&cli, &mut rng)?;
    let mut state = GameState::new(maze, settings, rng);
    let style = match cli.variant {
        Variant::Classic => WallStyle::CLASSIC,
        _ => WallStyle::ARENA,
    };

    let (fb_w, fb_h) = (cli.width, cli.height);
    let (mut window, raylib_thread) = raylib::init()
        .size(fb_w as i32, fb_h as i32)
        .title("Raycast Arena")
        .resizable()
        .build();
    window.set_target_fps(TARGET_FPS);
    // Escape releases the mouse instead of quitting.
    window.set_exit_key(None);

    let mut framebuffer = Framebuffer::new(fb_w, fb_h);
    framebuffer.set_background_color(style.background);
    let blank = Image::gen_image_color(fb_w as i32, fb_h as i32, Color::BLACK);
    let mut texture = window
        .load_texture_from_image(&raylib_thread, &blank)
        .map_err(|e| GameError::Texture(e.to_string()))?;

    let audio = if cli.mute {
        None
    } else {
        AudioManager::new().map(|mut a| {
            a.load_sfx_auto();
            a
        })
    };

    while !window.window_should_close() {
        let input = process_events(&mut window);
        let dt = window.get_frame_time().min(MAX_FRAME_DT);

        for event in state.update(&input, dt) {
            match event {
                GameEvent::Shot { hit } => {
                    if let Some(a) = &audio {
                        a.play_gun();
                    }
                    if hit {
                        info!(alive = state.enemies.len(), "enemy down");
                    }
                }
                GameEvent::PlayerHit { hp } => {
                    if let Some(a) = &audio {
                        a.play_hurt();
                    }
                    info!(hp, "player hit");
                }
                GameEvent::PlayerDied => {
                    if let Some(a) = &audio {
                        a.play_death();
                    }
                }
                GameEvent::EnemyKilled | GameEvent::EnemiesSpawned { .. } | GameEvent::Restarted => {}
            }
        }

        framebuffer.clear();
        render_3d(&mut framebuffer, &state.maze, &state.player, &state.settings.rays, style);
        draw_hud(&mut framebuffer, &state);
        framebuffer.upload_to_texture(&mut texture);

        // Read everything from `window` before begin_drawing borrows it.
        let fps_now = window.get_fps();
        let captured = window.is_cursor_hidden();
        let (win_w, win_h) = (window.get_screen_width(), window.get_screen_height());
        let over = state.is_over();
        let sprint_on = state.player.sprinting;

        {
            let mut d = window.begin_drawing(&raylib_thread);
            d.clear_background(Color::BLACK);

            let (vx, vy, vw, vh) = letterbox(fb_w, fb_h, win_w, win_h);
            d.draw_texture_pro(
                &texture,
                Rectangle::new(0.0, 0.0, fb_w as f32, fb_h as f32),
                Rectangle::new(vx, vy, vw, vh),
                Vector2::new(0.0, 0.0),
                0.0,
                Color::WHITE,
            );

            let k = vh / fb_h as f32;
            let fps_text = format!("FPS: {}", fps_now);
            d.draw_text(&fps_text, (vx + vw) as i32 - text_width(&fps_text, 20) - 10, vy as i32 + 10, 20, Color::WHITE);
            if sprint_on {
                d.draw_text("SPRINT", (vx + vw) as i32 - text_width("SPRINT", 20) - 10, vy as i32 + 34, 20, Color::RED);
            }

            let cx = (vx + vw / 2.0) as i32;
            let cy = (vy + vh / 2.0) as i32;
            if over {
                let big = (72.0 * k) as i32;
                let small = (32.0 * k) as i32;
                d.draw_text("GAME OVER", cx - text_width("GAME OVER", big) / 2, cy - big / 2, big, Color::WHITE);
                let hint = "Press SPACE to Restart";
                d.draw_text(hint, cx - text_width(hint, small) / 2, cy + (60.0 * k) as i32, small, Color::WHITE);
            } else if !captured {
                let hint = "Click to capture the mouse";
                d.draw_text(hint, cx - text_width(hint, 20) / 2, cy + (40.0 * k) as i32, 20, Color::LIGHTGRAY);
            }
        }
    }

    info!("window closed");
    Ok(())
}
