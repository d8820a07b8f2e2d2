//! The [`Grid`] type — an owned `rows × cols` buffer of [`Cell`]s.
//!
//! A `Grid` owns its cells outright and is mutated through `&mut self`.
//! Snapshots handed to observers are plain [`Clone`]s, so a published
//! snapshot can never change under the observer's feet, and starting a
//! second solve on the same grid cannot alias a running one.

use std::fmt;

use crate::cell::Cell;
use crate::coord::{Coord, Direction};

/// Error raised by [`Grid::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Rows or columns was zero or negative.
    InvalidDimensions { rows: i32, cols: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimensions { rows, cols } => {
                write!(f, "invalid grid dimensions {rows}x{cols}: both must be positive")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A `rows × cols` grid of [`Cell`]s, stored row-major.
///
/// Created fully walled by [`build`](Grid::build). Walls are opened (never
/// re-added) through [`remove_wall_between`](Grid::remove_wall_between);
/// the solver touches only the presentation flags. A grid is never resized.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a fully walled grid of the given dimensions.
    pub fn build(rows: i32, cols: i32) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::default(); (rows as usize) * (cols as usize)],
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: [`build`](Grid::build) rejects empty dimensions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Flat row-major index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index_of(&self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some((c.row as usize) * (self.cols as usize) + c.col as usize)
    }

    /// The coordinate at flat index `idx` (inverse of [`index_of`](Grid::index_of)).
    #[inline]
    pub fn coord_of(&self, idx: usize) -> Coord {
        let cols = self.cols as usize;
        Coord::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Read the cell at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<Cell> {
        self.index_of(c).map(|i| self.cells[i])
    }

    /// Mutable access to the cell at `c` for flag updates.
    ///
    /// Wall flags are not reachable through this handle; walls only change
    /// through [`remove_wall_between`](Grid::remove_wall_between).
    #[inline]
    pub fn cell_mut(&mut self, c: Coord) -> Option<&mut Cell> {
        let i = self.index_of(c)?;
        Some(&mut self.cells[i])
    }

    /// The in-bounds neighbor one step in `dir`, irrespective of walls.
    #[inline]
    pub fn bounded_neighbor(&self, c: Coord, dir: Direction) -> Option<Coord> {
        let n = c.step(dir);
        self.contains(n).then_some(n)
    }

    /// The up-to-4 in-bounds neighbors of `c`, irrespective of walls, in
    /// canonical direction order. Used while carving.
    pub fn bounded_neighbors(&self, c: Coord) -> impl Iterator<Item = (Direction, Coord)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.bounded_neighbor(c, dir).map(|n| (dir, n)))
    }

    /// The neighbors of `c` reachable through an open wall, in canonical
    /// direction order. Used while solving.
    pub fn open_neighbors(&self, c: Coord) -> impl Iterator<Item = Coord> + '_ {
        Direction::ALL.into_iter().filter_map(move |dir| {
            if self.at(c)?.has_wall(dir) {
                None
            } else {
                self.bounded_neighbor(c, dir)
            }
        })
    }

    /// Remove the wall between `c` and its neighbor in `dir`.
    ///
    /// Clears the flag on `c`'s side and the mirrored flag on the neighbor's
    /// opposite side, preserving wall symmetry. Removing an already-open
    /// wall leaves the grid unchanged; a `dir` that points off the grid is
    /// a no-op.
    pub fn remove_wall_between(&mut self, c: Coord, dir: Direction) {
        let Some(n) = self.bounded_neighbor(c, dir) else {
            return;
        };
        let (Some(ci), Some(ni)) = (self.index_of(c), self.index_of(n)) else {
            return;
        };
        self.cells[ci].clear_wall(dir);
        self.cells[ni].clear_wall(dir.opposite());
    }

    /// Number of open wall edges, each shared wall counted once.
    ///
    /// A perfect maze over this grid has exactly `len() - 1` of them.
    pub fn open_wall_count(&self) -> usize {
        // Looking only right and down sees each edge from one side.
        self.iter()
            .map(|(c, cell)| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter(|&dir| !cell.has_wall(dir) && self.contains(c.step(dir)))
                    .count()
            })
            .sum()
    }

    /// Reset the solver presentation flags on every cell.
    pub fn clear_marks(&mut self) {
        for cell in &mut self.cells {
            cell.is_path = false;
            cell.is_visited = false;
        }
    }

    /// Row-major iterator over `(Coord, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (self.coord_of(i), cell))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn coord_round_trip() {
        let c = Coord::new(3, 7);
        let json = serde_json::to_string(&c).unwrap();
        let back: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn grid_round_trip_preserves_walls_and_flags() {
        let mut grid = Grid::build(2, 3).unwrap();
        grid.remove_wall_between(Coord::new(0, 0), Direction::Right);
        if let Some(cell) = grid.cell_mut(Coord::new(1, 2)) {
            cell.is_path = true;
            cell.is_visited = true;
        }

        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, back);
    }
}
