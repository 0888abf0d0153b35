//! Fixed-step ray march over the grid.
use crate::config::RayTuning;
use crate::core::maze::Maze;

/// One sample along a ray.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Probe {
    Open { distance: f32 },
    Wall { distance: f32, cell: (usize, usize) },
    /// The sample left the grid.
    Escaped { distance: f32 },
}

impl Probe {
    pub fn distance(&self) -> f32 {
        match *self {
            Probe::Open { distance }
            | Probe::Wall { distance, .. }
            | Probe::Escaped { distance } => distance,
        }
    }
}

/// Iterator over the samples of one ray. Ends after the first wall or escape,
/// or after the sample at `max_distance`.
pub struct RayMarch<'a> {
    maze: &'a Maze,
    ox: f32,
    oy: f32,
    cos: f32,
    sin: f32,
    step: f32,
    max_distance: f32,
    n: u32,
    done: bool,
}

impl<'a> RayMarch<'a> {
    pub fn new(maze: &'a Maze, ox: f32, oy: f32, angle: f32, step: f32, max_distance: f32) -> Self {
        Self {
            maze,
            ox,
            oy,
            cos: angle.cos(),
            sin: angle.sin(),
            step,
            max_distance,
            n: 0,
            done: step <= 0.0 || max_distance <= 0.0,
        }
    }
}

impl Iterator for RayMarch<'_> {
    type Item = Probe;

    fn next(&mut self) -> Option<Probe> {
        if self.done {
            return None;
        }
        self.n += 1;
        // multiply instead of accumulate so the cap is hit exactly
        let distance = (self.n as f32 * self.step).min(self.max_distance);
        if distance >= self.max_distance {
            self.done = true;
        }
        let x = self.ox + self.cos * distance;
        let y = self.oy + self.sin * distance;
        let probe = match self.maze.cell_at(x, y) {
            None => Probe::Escaped { distance },
            Some((i, j)) if !self.maze.is_open_cell(i, j) => Probe::Wall { distance, cell: (i, j) },
            Some(_) => Probe::Open { distance },
        };
        if !matches!(probe, Probe::Open { .. }) {
            self.done = true;
        }
        Some(probe)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersect {
    /// Raw distance along the ray; `max_distance` when nothing was hit.
    pub distance: f32,
    pub impact: Option<(usize, usize)>,
}

pub fn cast_ray(maze: &Maze, ox: f32, oy: f32, angle: f32, rays: &RayTuning) -> Intersect {
    for probe in RayMarch::new(maze, ox, oy, angle, rays.step, rays.max_distance) {
        match probe {
            Probe::Wall { distance, cell } => return Intersect { distance, impact: Some(cell) },
            Probe::Escaped { .. } => break,
            Probe::Open { .. } => {}
        }
    }
    Intersect { distance: rays.max_distance, impact: None }
}

/// Angle of ray `i` out of `n` across the field of view.
#[inline]
pub fn ray_angle(dir: f32, fov: f32, i: u32, n: u32) -> f32 {
    dir - fov / 2.0 + (i as f32 / n.max(1) as f32) * fov
}

/// Removes fisheye distortion.
#[inline]
pub fn corrected_distance(distance: f32, ray_angle: f32, dir: f32) -> f32 {
    distance * (ray_angle - dir).cos()
}
