//! Enemy pursuit and grid navigation.
use std::collections::VecDeque;

use raylib::prelude::*;

use crate::config::Pursuit;
use crate::core::maze::Maze;

/// Seconds between two BFS path refreshes.
const PATH_RECALC: f32 = 0.25;

pub struct Enemy {
    pub pos: Vector2,
    pub size: f32,
    pub speed: f32, // units/s
    waypoint: Option<Vector2>,
    path_recalc_timer: f32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, size: f32, speed: f32) -> Self {
        Self {
            pos: Vector2::new(x, y),
            size,
            speed,
            waypoint: None,
            path_recalc_timer: 0.0,
        }
    }

    pub fn distance_to(&self, x: f32, y: f32) -> f32 {
        (x - self.pos.x).hypot(y - self.pos.y)
    }

    /// Steps toward the player; stays put when the step would enter a wall or
    /// when already within `stop_distance`.
    pub fn update(
        &mut self,
        maze: &Maze,
        px: f32,
        py: f32,
        stop_distance: f32,
        pursuit: Pursuit,
        dt: f32,
    ) -> bool {
        if self.distance_to(px, py) <= stop_distance {
            return false;
        }
        let (tx, ty) = match pursuit {
            Pursuit::Direct => (px, py),
            Pursuit::Pathfind => self.navigate(maze, px, py, dt),
        };
        self.step_towards(maze, tx, ty, dt)
    }

    fn step_towards(&mut self, maze: &Maze, tx: f32, ty: f32, dt: f32) -> bool {
        let dx = tx - self.pos.x;
        let dy = ty - self.pos.y;
        let dist = dx.hypot(dy);
        if dist <= f32::EPSILON {
            return false;
        }
        let step = (self.speed * dt).min(dist);
        let nx = self.pos.x + dx / dist * step;
        let ny = self.pos.y + dy / dist * step;
        if maze.is_wall(nx, ny) {
            return false;
        }
        self.pos = Vector2::new(nx, ny);
        true
    }

    /// Target point for this frame: the player when sharing a cell, else the
    /// centre of the next cell on a shortest grid path.
    fn navigate(&mut self, maze: &Maze, px: f32, py: f32, dt: f32) -> (f32, f32) {
        if maze.cell_at(self.pos.x, self.pos.y) == maze.cell_at(px, py) {
            self.waypoint = None;
            return (px, py);
        }
        self.path_recalc_timer -= dt;
        let reached = self
            .waypoint
            .map(|w| self.distance_to(w.x, w.y) < 0.05)
            .unwrap_or(true);
        if self.path_recalc_timer <= 0.0 || reached {
            self.path_recalc_timer = PATH_RECALC;
            self.waypoint = next_step_towards(maze, self.pos.x, self.pos.y, px, py)
                .map(|(cx, cy)| Vector2::new(cx, cy));
        }
        match self.waypoint {
            Some(w) => (w.x, w.y),
            None => (px, py),
        }
    }

    /// Shifts by `(ox, oy)` unless that lands in a wall.
    pub fn knock_back(&mut self, maze: &Maze, ox: f32, oy: f32) -> bool {
        let nx = self.pos.x + ox;
        let ny = self.pos.y + oy;
        if maze.is_wall(nx, ny) {
            return false;
        }
        self.pos = Vector2::new(nx, ny);
        self.waypoint = None;
        true
    }
}

/// BFS over open cells; returns the centre of the first cell after the start.
pub fn next_step_towards(maze: &Maze, sx: f32, sy: f32, tx: f32, ty: f32) -> Option<(f32, f32)> {
    let (w, h) = (maze.width(), maze.height());
    let (si, sj) = maze.cell_at(sx, sy)?;
    let goal = maze.cell_at(tx, ty)?;
    if !maze.is_open_cell(si, sj) || !maze.is_open_cell(goal.0, goal.1) {
        return None;
    }
    if (si, sj) == goal {
        return None;
    }

    let mut prev: Vec<Vec<Option<(usize, usize)>>> = vec![vec![None; w]; h];
    let mut q = VecDeque::new();
    q.push_back((si, sj));
    prev[sj][si] = Some((si, sj));
    let dirs: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
    while let Some((cx, cy)) = q.pop_front() {
        if (cx, cy) == goal {
            break;
        }
        for (dx, dy) in dirs {
            let nx = cx as isize + dx;
            let ny = cy as isize + dy;
            if nx < 0 || ny < 0 {
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            if !maze.is_open_cell(nx, ny) || prev[ny][nx].is_some() {
                continue;
            }
            prev[ny][nx] = Some((cx, cy));
            q.push_back((nx, ny));
        }
    }
    prev[goal.1][goal.0]?;

    // walk back from goal to the cell right after start
    let mut cur = goal;
    let mut last = cur;
    while cur != (si, sj) {
        last = cur;
        cur = prev[cur.1][cur.0]?;
    }
    Some((last.0 as f32 + 0.5, last.1 as f32 + 0.5))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bfs_goes_around_a_wall() {
        let maze = Maze::parse(
            "#####\n\
             #   #\n\
             # # #\n\
             #   #\n\
             #####",
        )
        .unwrap();
        // from (1,2) to (3,2): the middle cell (2,2) is a wall
        let (nx, ny) = next_step_towards(&maze, 1.5, 2.5, 3.5, 2.5).unwrap();
        assert!(!maze.is_wall(nx, ny));
        assert_eq!(nx, 1.5);
        assert!(ny == 1.5 || ny == 3.5);
    }

    #[test]
    fn bfs_none_when_unreachable() {
        let maze = Maze::parse(
            "#####\n\
             # # #\n\
             #####",
        )
        .unwrap();
        assert!(next_step_towards(&maze, 1.5, 1.5, 3.5, 1.5).is_none());
    }
}
