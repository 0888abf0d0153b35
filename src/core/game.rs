//! Per-frame world update: player, enemies, shooting, spawning, game over.
use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::VariantSettings;
use crate::core::enemy::Enemy;
use crate::core::maze::Maze;
use crate::core::normalize_angle;
use crate::core::player::{MoveRules, Player};
use crate::core::process_events::InputState;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GameEvent {
    Shot { hit: bool },
    EnemyKilled,
    PlayerHit { hp: i32 },
    PlayerDied,
    EnemiesSpawned { count: usize },
    Restarted,
}

pub struct GameState {
    pub maze: Maze,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub settings: VariantSettings,
    /// Recoil in `[0, 1]`, set to 1 on each shot.
    pub gun_kick: f32,
    start: (f32, f32),
    clock: f32,
    last_damage: Option<f32>,
    rng: StdRng,
}

impl GameState {
    pub fn new(maze: Maze, settings: VariantSettings, rng: StdRng) -> Self {
        let start = maze.safe_start();
        let player = Player::new(start.0, start.1, 0.0, &settings.player);
        info!(
            width = maze.width(),
            height = maze.height(),
            x = start.0,
            y = start.1,
            "game ready"
        );
        Self {
            maze,
            player,
            enemies: Vec::new(),
            settings,
            gun_kick: 0.0,
            start,
            clock: 0.0,
            last_damage: None,
            rng,
        }
    }

    pub fn start(&self) -> (f32, f32) {
        self.start
    }

    pub fn is_over(&self) -> bool {
        !self.player.alive
    }

    /// Runs one frame. Nothing but restart is processed while the player is dead.
    pub fn update(&mut self, input: &InputState, dt: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if self.is_over() {
            if input.restart {
                self.restart();
                events.push(GameEvent::Restarted);
            }
            return events;
        }

        self.clock += dt;

        let rules = MoveRules {
            strafe_keys: self.settings.strafe_keys,
            allow_sprint: self.settings.sprint,
        };
        self.player.update(input, &self.maze, dt, rules);
        self.decay_kick(dt);

        if self.settings.enemies {
            if input.fire {
                let hit = self.shoot().is_some();
                events.push(GameEvent::Shot { hit });
                if hit {
                    events.push(GameEvent::EnemyKilled);
                }
            }
            self.update_enemies(dt, &mut events);
            let count = self.spawn_enemies_if_needed();
            if count > 0 {
                events.push(GameEvent::EnemiesSpawned { count });
            }
        }

        events
    }

    fn decay_kick(&mut self, dt: f32) {
        self.gun_kick *= self.settings.weapon.kick_decay.powf(dt * 60.0);
        if self.gun_kick < 0.01 {
            self.gun_kick = 0.0;
        }
    }

    /// Removes the nearest enemy inside the aiming cone and range.
    /// Returns its former index.
    pub fn shoot(&mut self) -> Option<usize> {
        self.gun_kick = 1.0;
        let weapon = self.settings.weapon;
        let half_cone = self.player.fov * weapon.cone_fraction;
        let (px, py) = (self.player.pos.x, self.player.pos.y);

        let target = self
            .enemies
            .iter()
            .enumerate()
            .filter_map(|(i, e)| {
                let dist = e.distance_to(px, py);
                let angle = (e.pos.y - py).atan2(e.pos.x - px);
                let diff = normalize_angle(angle - self.player.dir);
                (diff.abs() < half_cone && dist < weapon.max_range).then_some((i, dist))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i);

        match target {
            Some(i) => {
                self.enemies.remove(i);
                debug!(index = i, remaining = self.enemies.len(), "enemy shot");
            }
            None => debug!("shot missed"),
        }
        target
    }

    fn update_enemies(&mut self, dt: f32, events: &mut Vec<GameEvent>) {
        let tuning = self.settings.enemy;
        let pursuit = self.settings.pursuit;
        let (px, py) = (self.player.pos.x, self.player.pos.y);

        for enemy in self.enemies.iter_mut() {
            enemy.update(&self.maze, px, py, tuning.stop_distance, pursuit, dt);
            // Contact is measured after this frame's step.

            if !self.player.alive || enemy.distance_to(px, py) >= tuning.contact_radius {
                continue;
            }
            let ready = self
                .last_damage
                .map(|t| self.clock - t > tuning.damage_cooldown)
                .unwrap_or(true);
            if !ready {
                continue;
            }

            self.last_damage = Some(self.clock);
            let died = self.player.take_damage(tuning.contact_damage);
            events.push(GameEvent::PlayerHit { hp: self.player.hp });
            debug!(hp = self.player.hp, "player hit");

            let ox = self.rng.gen_range(-0.5f32..0.5) * tuning.knockback;
            let oy = self.rng.gen_range(-0.5f32..0.5) * tuning.knockback;
            enemy.knock_back(&self.maze, ox, oy);

            if died {
                info!(time = self.clock, "player died");
                events.push(GameEvent::PlayerDied);
            }
        }
    }

    /// Tops the enemy set back up to the cap. Returns how many were added.
    pub fn spawn_enemies_if_needed(&mut self) -> usize {
        let tuning = self.settings.enemy;
        if self.enemies.len() >= tuning.max_alive {
            return 0;
        }
        let missing = tuning.max_alive - self.enemies.len();
        let points = self.maze.spawn_points(
            &mut self.rng,
            missing,
            self.player.pos.x,
            self.player.pos.y,
            tuning.min_spawn_distance,
        );
        for &(x, y) in &points {
            self.enemies.push(Enemy::new(x, y, tuning.size, tuning.speed));
        }
        if !points.is_empty() {
            debug!(count = points.len(), alive = self.enemies.len(), "enemies spawned");
        }
        points.len()
    }

    /// Same map, fresh player, no enemies.
    pub fn restart(&mut self) {
        self.player.respawn(self.start.0, self.start.1);
        self.enemies.clear();
        self.gun_kick = 0.0;
        self.last_damage = None;
        self.clock = 0.0;
        info!("game restarted");
    }
}
