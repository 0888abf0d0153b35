use std::f32::consts::FRAC_PI_2;

use raylib::prelude::*;

use crate::config::PlayerTuning;
use crate::core::maze::Maze;
use crate::core::normalize_angle;
use crate::core::process_events::InputState;

pub struct Player {
    pub pos: Vector2,
    pub dir: f32,          // yaw, radians
    pub fov: f32,
    pub move_speed: f32,   // units/s
    pub rot_speed: f32,    // rad/s
    pub mouse_sens: f32,   // rad/px
    pub sprint_factor: f32,
    pub hp: i32,
    pub max_hp: i32,
    pub alive: bool,
    pub sprinting: bool,
}

/// How the movement keys are interpreted for one update.
#[derive(Copy, Clone, Debug)]
pub struct MoveRules {
    /// A/D strafe when true, rotate when false.
    pub strafe_keys: bool,
    pub allow_sprint: bool,
}

impl Player {
    pub fn new(x: f32, y: f32, dir: f32, tuning: &PlayerTuning) -> Self {
        Self {
            pos: Vector2::new(x, y),
            dir,
            fov: tuning.fov,
            move_speed: tuning.move_speed,
            rot_speed: tuning.rot_speed,
            mouse_sens: tuning.mouse_sens,
            sprint_factor: tuning.sprint_factor,
            hp: tuning.max_hp,
            max_hp: tuning.max_hp,
            alive: true,
            sprinting: false,
        }
    }

    /// Back to full health at `(x, y)` facing east.
    pub fn respawn(&mut self, x: f32, y: f32) {
        self.pos = Vector2::new(x, y);
        self.dir = 0.0;
        self.hp = self.max_hp;
        self.alive = true;
        self.sprinting = false;
    }

    pub fn turn(&mut self, delta: f32) {
        self.dir = normalize_angle(self.dir + delta);
    }

    /// Moves by `(dx, dy)` only if the destination cell is open.
    pub fn try_move(&mut self, maze: &Maze, dx: f32, dy: f32) -> bool {
        let nx = self.pos.x + dx;
        let ny = self.pos.y + dy;
        if maze.is_wall(nx, ny) {
            return false;
        }
        self.pos = Vector2::new(nx, ny);
        true
    }

    /// Applies one frame of keyboard/mouse input.
    pub fn update(&mut self, input: &InputState, maze: &Maze, dt: f32, rules: MoveRules) {
        if !self.alive {
            return;
        }

        self.sprinting = rules.allow_sprint && input.sprint;
        let speed = self.move_speed * if self.sprinting { self.sprint_factor } else { 1.0 } * dt;

        let mut turn = 0.0;
        if input.turn_left {
            turn -= self.rot_speed * dt;
        }
        if input.turn_right {
            turn += self.rot_speed * dt;
        }
        if !rules.strafe_keys {
            if input.strafe_left {
                turn -= self.rot_speed * dt;
            }
            if input.strafe_right {
                turn += self.rot_speed * dt;
            }
        }
        turn += input.mouse_dx * self.mouse_sens;
        if turn != 0.0 {
            self.turn(turn);
        }

        // Each pressed direction is its own attempt, like separate key handlers.
        let mut steps: Vec<f32> = Vec::with_capacity(4);
        if input.forward {
            steps.push(self.dir);
        }
        if input.back {
            steps.push(self.dir + std::f32::consts::PI);
        }
        if rules.strafe_keys {
            if input.strafe_left {
                steps.push(self.dir - FRAC_PI_2);
            }
            if input.strafe_right {
                steps.push(self.dir + FRAC_PI_2);
            }
        }
        for a in steps {
            self.try_move(maze, a.cos() * speed, a.sin() * speed);
        }
    }

    /// Returns true only for the hit that kills.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if !self.alive {
            return false;
        }
        self.hp -= amount;
        if self.hp <= 0 {
            self.hp = 0;
            self.alive = false;
            return true;
        }
        false
    }

    pub fn hp_ratio(&self) -> f32 {
        if self.max_hp <= 0 {
            return 0.0;
        }
        (self.hp as f32 / self.max_hp as f32).clamp(0.0, 1.0)
    }
}
