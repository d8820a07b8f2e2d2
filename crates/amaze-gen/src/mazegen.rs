//! Maze carving via randomized depth-first backtracking.
//!
//! The growing-tree algorithm with a depth-first policy: walk from the root,
//! knocking down the wall to a randomly chosen unvisited neighbor, and
//! backtrack when none is left. Every carved wall connects a fresh cell to
//! the tree, so the result is a spanning tree of open walls.

use amaze_core::{Coord, Direction, Grid, GridError};
use rand::Rng;
use rand::RngExt;

/// Caller-level grid size presets.
///
/// The generator itself places no bound on dimensions beyond positivity;
/// these are conventional sizes for an interactive caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// The `(rows, cols)` pair for this preset.
    pub const fn dimensions(self) -> (i32, i32) {
        match self {
            Difficulty::Easy => (10, 10),
            Difficulty::Medium => (10, 15),
            Difficulty::Hard => (10, 20),
        }
    }
}

/// One suspended step of the carving walk: a cell together with the
/// shuffled directions not yet tried from it.
struct Frame {
    at: Coord,
    dirs: [Direction; 4],
    cursor: usize,
}

/// Maze generator around an injected RNG.
pub struct MazeGen<R: Rng> {
    rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator driven by the given RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Build a fully walled `rows × cols` grid and carve a perfect maze
    /// into it.
    ///
    /// Fails only with [`GridError::InvalidDimensions`]; carving itself
    /// cannot fail.
    pub fn generate(&mut self, rows: i32, cols: i32) -> Result<Grid, GridError> {
        let mut grid = Grid::build(rows, cols)?;
        self.carve(&mut grid);
        log::debug!(
            "carved {rows}x{cols} maze with {} open walls",
            grid.open_wall_count()
        );
        Ok(grid)
    }

    /// Generate a maze with the dimensions of a [`Difficulty`] preset.
    pub fn generate_preset(&mut self, difficulty: Difficulty) -> Result<Grid, GridError> {
        let (rows, cols) = difficulty.dimensions();
        self.generate(rows, cols)
    }

    /// Depth-first backtracking walk from `(0, 0)`.
    ///
    /// Runs on an explicit frame stack instead of call recursion: the
    /// unwound path can be as long as `rows * cols` cells, which would
    /// overflow the native stack on large grids.
    fn carve(&mut self, grid: &mut Grid) {
        let root = Coord::new(0, 0);
        let mut stack: Vec<Frame> = Vec::with_capacity(grid.len());

        if let Some(cell) = grid.cell_mut(root) {
            cell.visited = true;
        }
        stack.push(Frame {
            at: root,
            dirs: self.shuffled_directions(),
            cursor: 0,
        });

        while let Some(frame) = stack.last_mut() {
            if frame.cursor == frame.dirs.len() {
                stack.pop();
                continue;
            }
            let at = frame.at;
            let dir = frame.dirs[frame.cursor];
            frame.cursor += 1;

            let Some(next) = grid.bounded_neighbor(at, dir) else {
                continue;
            };
            let Some(cell) = grid.cell_mut(next) else {
                continue;
            };
            if cell.visited {
                continue;
            }
            cell.visited = true;
            grid.remove_wall_between(at, dir);
            stack.push(Frame {
                at: next,
                dirs: self.shuffled_directions(),
                cursor: 0,
            });
        }
    }

    /// The four directions in uniformly random order (Fisher–Yates).
    fn shuffled_directions(&mut self) -> [Direction; 4] {
        let mut dirs = Direction::ALL;
        for i in (1..dirs.len()).rev() {
            let j = self.rng.random_range(0..=i);
            dirs.swap(i, j);
        }
        dirs
    }
}
