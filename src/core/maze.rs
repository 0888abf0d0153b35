//! Grid map: loading, generation and cell queries.
use std::fs;
use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::error::{GameError, Result};

pub const WALL: u8 = 1;
pub const OPEN: u8 = 0;

/// Embedded maze used by the maze variant when no file is given.
pub const DEFAULT_MAZE: &str = include_str!("../../assets/maze.txt");

const CLASSIC_MAP: [[u8; 8]; 6] = [
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 0, 1, 0, 0, 1],
    [1, 0, 1, 0, 1, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
];

pub const ARENA_SIZE: usize = 20;
pub const ARENA_WALL_ATTEMPTS: usize = 30;

/// Wall block shapes as (dx, dy) offsets from the anchor cell.
const PATTERN_L: &[(usize, usize)] = &[(0, 0), (1, 0), (0, 1)];
const PATTERN_I: &[(usize, usize)] = &[(0, 0), (1, 0), (2, 0)];
const PATTERN_O: &[(usize, usize)] = &[(0, 0), (1, 0), (0, 1), (1, 1)];
const PATTERNS: [&[(usize, usize)]; 3] = [PATTERN_L, PATTERN_I, PATTERN_O];

#[derive(Clone, Debug, PartialEq)]
pub struct Maze {
    grid: Vec<Vec<u8>>,
    width: usize,
    height: usize,
    start_hint: Option<(f32, f32)>,
}

impl Maze {
    /// Builds a maze from rows of 0/1 cells. Short rows are padded with walls.
    pub fn from_rows(mut grid: Vec<Vec<u8>>) -> Result<Self> {
        grid.retain(|r| !r.is_empty());
        if grid.is_empty() {
            return Err(GameError::EmptyMaze);
        }
        let width = grid.iter().map(|r| r.len()).max().unwrap_or(0);
        for r in &mut grid {
            r.resize(width, WALL);
        }
        let height = grid.len();
        Ok(Self { grid, width, height, start_hint: None })
    }

    /// Map of the classic variant.
    pub fn classic() -> Self {
        let grid = CLASSIC_MAP.iter().map(|r| r.to_vec()).collect::<Vec<_>>();
        Self {
            width: grid[0].len(),
            height: grid.len(),
            grid,
            start_hint: Some((3.5, 3.5)),
        }
    }

    /// A `width` x `height` room with only the border walled.
    pub fn bordered(width: usize, height: usize) -> Self {
        let grid = (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| {
                        if x == 0 || y == 0 || x + 1 == width || y + 1 == height {
                            WALL
                        } else {
                            OPEN
                        }
                    })
                    .collect()
            })
            .collect();
        Self { grid, width, height, start_hint: None }
    }

    /// Border room with random L/I/O wall blocks, each placed only where its
    /// anchor window is still free of walls.
    pub fn generate_arena<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut maze = Self::bordered(ARENA_SIZE, ARENA_SIZE);
        maze.scatter_blocks(rng, ARENA_WALL_ATTEMPTS);
        maze
    }

    fn scatter_blocks<R: Rng + ?Sized>(&mut self, rng: &mut R, attempts: usize) {
        let mut placed = 0;
        for _ in 0..attempts {
            let Some(pattern) = PATTERNS.choose(rng) else { continue };
            let span_x = pattern.iter().map(|p| p.0).max().unwrap_or(0);
            let span_y = pattern.iter().map(|p| p.1).max().unwrap_or(0);
            let max_x = self.width.saturating_sub(2 + span_x);
            let max_y = self.height.saturating_sub(2 + span_y);
            if max_x == 0 || max_y == 0 {
                continue;
            }
            let x = 1 + rng.gen_range(0..max_x);
            let y = 1 + rng.gen_range(0..max_y);

            // Keep a one-cell gap around every block.
            let crowded = (-1..=2).any(|dy| {
                (-1..=2).any(|dx| {
                    let cx = x as isize + dx;
                    let cy = y as isize + dy;
                    cx >= 0 && cy >= 0 && self.cell(cx as usize, cy as usize) == Some(WALL)
                })
            });
            if crowded {
                continue;
            }
            for &(px, py) in pattern.iter() {
                self.grid[y + py][x + px] = WALL;
            }
            placed += 1;
        }
        debug!(placed, attempts, "scattered wall blocks");
    }

    /// Parses a text maze: `#`/`1` walls, space/`0`/`.` open, anything else a wall.
    /// The outer ring is always walled.
    pub fn parse(text: &str) -> Result<Self> {
        let rows = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|ch| match ch {
                        ' ' | '0' | '.' => OPEN,
                        _ => WALL,
                    })
                    .collect::<Vec<u8>>()
            })
            .collect::<Vec<_>>();
        let mut maze = Self::from_rows(rows)?;
        maze.seal_border();
        if maze.open_cells().next().is_none() {
            return Err(GameError::NoOpenCell);
        }
        Ok(maze)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| GameError::MazeIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    fn seal_border(&mut self) {
        let (w, h) = (self.width, self.height);
        for (y, row) in self.grid.iter_mut().enumerate() {
            for (x, c) in row.iter_mut().enumerate() {
                if x == 0 || y == 0 || x + 1 == w || y + 1 == h {
                    *c = WALL;
                }
            }
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.grid.iter().map(|r| r.as_slice())
    }

    #[inline]
    pub fn cell(&self, i: usize, j: usize) -> Option<u8> {
        self.grid.get(j).and_then(|r| r.get(i)).copied()
    }

    /// Cell index for a world coordinate, `None` outside the grid.
    #[inline]
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let i = x.floor();
        let j = y.floor();
        if i < 0.0 || j < 0.0 {
            return None;
        }
        let (i, j) = (i as usize, j as usize);
        (i < self.width && j < self.height).then_some((i, j))
    }

    /// Walls and anything outside the grid are solid.
    #[inline]
    pub fn is_wall(&self, x: f32, y: f32) -> bool {
        match self.cell_at(x, y) {
            Some((i, j)) => self.grid[j][i] == WALL,
            None => true,
        }
    }

    #[inline]
    pub fn is_open_cell(&self, i: usize, j: usize) -> bool {
        self.cell(i, j) == Some(OPEN)
    }

    pub fn open_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height)
            .flat_map(move |j| (0..self.width).map(move |i| (i, j)))
            .filter(|&(i, j)| self.is_open_cell(i, j))
    }

    /// Interior open cells whose four neighbours are open too.
    pub fn roomy_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.open_cells().filter(|&(i, j)| {
            i > 0
                && j > 0
                && self.is_open_cell(i - 1, j)
                && self.is_open_cell(i + 1, j)
                && self.is_open_cell(i, j - 1)
                && self.is_open_cell(i, j + 1)
        })
    }

    /// Fixed start of a hand-made map, else the first roomy cell in
    /// row-major order, else (1, 1) when open, else the first open cell.
    pub fn safe_start(&self) -> (f32, f32) {
        if let Some(start) = self.start_hint {
            return start;
        }
        let centre = |(i, j): (usize, usize)| (i as f32 + 0.5, j as f32 + 0.5);
        self.roomy_cells()
            .next()
            .or_else(|| self.is_open_cell(1, 1).then_some((1, 1)))
            .or_else(|| self.open_cells().next())
            .map(centre)
            .unwrap_or((1.5, 1.5))
    }

    /// Up to `count` shuffled roomy cell centres at least `min_dist` from `(px, py)`.
    /// Corridor-only maps with no roomy cell spawn on any open cell instead.
    pub fn spawn_points<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
        px: f32,
        py: f32,
        min_dist: f32,
    ) -> Vec<(f32, f32)> {
        let mut cells: Vec<(usize, usize)> = self.roomy_cells().collect();
        if cells.is_empty() {
            cells = self.open_cells().collect();
        }
        let mut points: Vec<(f32, f32)> = cells
            .into_iter()
            .map(|(i, j)| (i as f32 + 0.5, j as f32 + 0.5))
            .filter(|&(x, y)| (x - px).hypot(y - py) >= min_dist)
            .collect();
        points.shuffle(rng);
        points.truncate(count);
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scatter_leaves_first_ring_open() {
        // The placement window reaches the border at x = 1 or y = 1, so the
        // corridor along the top and left walls stays free.
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let maze = Maze::generate_arena(&mut rng);
            for k in 1..ARENA_SIZE - 1 {
                assert!(maze.is_open_cell(1, k), "seed {seed}: wall at (1, {k})");
                assert!(maze.is_open_cell(k, 1), "seed {seed}: wall at ({k}, 1)");
            }
        }
    }

    #[test]
    fn seal_border_walls_outer_ring() {
        let maze = Maze::parse("   \n   \n   ").unwrap();
        assert!(maze.is_open_cell(1, 1));
        assert_eq!(maze.open_cells().count(), 1);
    }
}
