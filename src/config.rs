//! Command-line settings and gameplay tuning.
//!
//! Runtime settings (window, seed, audio) come from the CLI; gameplay
//! tuning lives in plain `Default` structs so tests can build them directly.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub const DEFAULT_FB_WIDTH: u32 = 960;
pub const DEFAULT_FB_HEIGHT: u32 = 540;
pub const MAX_FB_WIDTH: u32 = 7680;
pub const MAX_FB_HEIGHT: u32 = 4320;
pub const TARGET_FPS: u32 = 60;
/// Longest frame step the simulation accepts (seconds).
pub const MAX_FRAME_DT: f32 = 0.1;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Fixed small map, no enemies, no HUD.
    Classic,
    /// Generated arena with chasing enemies.
    Arena,
    /// Text-file maze with path-finding enemies.
    Maze,
}

#[derive(Parser, Debug)]
#[command(name = "raycast_arena", about = "Grid raycaster shooter")]
pub struct Cli {
    /// Which game variant to play
    #[arg(long, value_enum, default_value_t = Variant::Arena)]
    pub variant: Variant,

    /// Maze file for the maze variant (embedded maze if omitted)
    #[arg(long)]
    pub map: Option<PathBuf>,

    /// RNG seed for map generation and spawns
    #[arg(long)]
    pub seed: Option<u64>,

    /// Framebuffer width in pixels
    #[arg(
        long,
        default_value_t = DEFAULT_FB_WIDTH,
        value_parser = clap::value_parser!(u32).range(64..=MAX_FB_WIDTH as i64)
    )]
    pub width: u32,

    /// Framebuffer height in pixels
    #[arg(
        long,
        default_value_t = DEFAULT_FB_HEIGHT,
        value_parser = clap::value_parser!(u32).range(36..=MAX_FB_HEIGHT as i64)
    )]
    pub height: u32,

    /// Disable the firing sound
    #[arg(long)]
    pub mute: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct PlayerTuning {
    /// Walk speed in map units per second.
    pub move_speed: f32,
    /// Keyboard turn rate in radians per second.
    pub rot_speed: f32,
    /// Mouse turn in radians per pixel.
    pub mouse_sens: f32,
    pub sprint_factor: f32,
    pub fov: f32,
    pub max_hp: i32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            move_speed: 3.0,
            rot_speed: 1.8,
            mouse_sens: 0.002,
            sprint_factor: 2.0,
            fov: std::f32::consts::FRAC_PI_3,
            max_hp: 100,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EnemyTuning {
    pub size: f32,
    /// Map units per second.
    pub speed: f32,
    pub max_alive: usize,
    pub contact_radius: f32,
    pub contact_damage: i32,
    /// Shared cooldown between two contact hits, seconds.
    pub damage_cooldown: f32,
    /// Enemies closer than this stop advancing.
    pub stop_distance: f32,
    pub knockback: f32,
    /// Spawns never land closer than this to the player.
    pub min_spawn_distance: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            size: 0.4,
            speed: 1.2,
            max_alive: 5,
            contact_radius: 0.4,
            contact_damage: 10,
            damage_cooldown: 0.5,
            stop_distance: 0.1,
            knockback: 1.0,
            min_spawn_distance: 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RayTuning {
    pub step: f32,
    pub max_distance: f32,
    /// `None` casts one ray per framebuffer column.
    pub num_rays: Option<u32>,
    pub min_brightness: f32,
    /// Distance at which shading reaches zero before the floor clamp.
    pub fade_distance: f32,
    pub wall_scale: f32,
}

impl Default for RayTuning {
    fn default() -> Self {
        Self {
            step: 0.01,
            max_distance: 20.0,
            num_rays: None,
            min_brightness: 0.0,
            fade_distance: 10.0,
            wall_scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WeaponTuning {
    pub max_range: f32,
    /// Cone half-width as a fraction of the player's fov.
    pub cone_fraction: f32,
    /// Kick multiplier applied every 1/60 s.
    pub kick_decay: f32,
}

impl Default for WeaponTuning {
    fn default() -> Self {
        Self {
            max_range: 10.0,
            cone_fraction: 0.1,
            kick_decay: 0.9,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pursuit {
    /// Straight line toward the player.
    Direct,
    /// Next cell on a BFS path toward the player.
    Pathfind,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MinimapStyle {
    Hidden,
    Full,
    FullWithFacing,
}

/// Everything that differs between the three variants.
#[derive(Debug, Clone, Copy)]
pub struct VariantSettings {
    pub player: PlayerTuning,
    pub enemy: EnemyTuning,
    pub rays: RayTuning,
    pub weapon: WeaponTuning,
    pub enemies: bool,
    pub pursuit: Pursuit,
    /// A/D strafe when true, rotate when false.
    pub strafe_keys: bool,
    pub sprint: bool,
    pub minimap: MinimapStyle,
    pub hud: bool,
}

impl Variant {
    pub fn settings(self) -> VariantSettings {
        let base = VariantSettings {
            player: PlayerTuning::default(),
            enemy: EnemyTuning::default(),
            rays: RayTuning {
                num_rays: Some(300),
                min_brightness: 0.3,
                ..RayTuning::default()
            },
            weapon: WeaponTuning::default(),
            enemies: true,
            pursuit: Pursuit::Direct,
            strafe_keys: true,
            sprint: true,
            minimap: MinimapStyle::Full,
            hud: true,
        };
        match self {
            Variant::Classic => VariantSettings {
                rays: RayTuning::default(),
                enemies: false,
                strafe_keys: false,
                sprint: false,
                minimap: MinimapStyle::Hidden,
                hud: false,
                ..base
            },
            Variant::Arena => base,
            Variant::Maze => VariantSettings {
                pursuit: Pursuit::Pathfind,
                minimap: MinimapStyle::FullWithFacing,
                ..base
            },
        }
    }
}
