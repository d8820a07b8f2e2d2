//! The [`Cell`] type — wall flags plus solver presentation flags.

use crate::coord::Direction;

/// A single maze cell.
///
/// Walls start fully closed and are only ever opened through
/// [`Grid::remove_wall_between`](crate::Grid::remove_wall_between), which
/// keeps the shared wall of two adjacent cells consistent from both sides.
/// The flag fields are free to mutate: `visited` is generator scratch,
/// `is_path` and `is_visited` belong to the solver.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    walls: [bool; 4],
    /// Scratch flag used by the generator while carving.
    pub visited: bool,
    /// Set on cells of the final reconstructed path.
    pub is_path: bool,
    /// Set on cells settled by a search strategy.
    pub is_visited: bool,
}

impl Cell {
    /// Whether the wall on side `dir` is still closed.
    #[inline]
    pub const fn has_wall(self, dir: Direction) -> bool {
        self.walls[dir as usize]
    }

    #[inline]
    pub(crate) fn clear_wall(&mut self, dir: Direction) {
        self.walls[dir as usize] = false;
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self {
            walls: [true; 4],
            visited: false,
            is_path: false,
            is_visited: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cell_is_fully_walled() {
        let cell = Cell::default();
        for dir in Direction::ALL {
            assert!(cell.has_wall(dir));
        }
        assert!(!cell.visited);
        assert!(!cell.is_path);
        assert!(!cell.is_visited);
    }

    #[test]
    fn clear_wall_touches_one_side() {
        let mut cell = Cell::default();
        cell.clear_wall(Direction::Right);
        assert!(!cell.has_wall(Direction::Right));
        assert!(cell.has_wall(Direction::Up));
        assert!(cell.has_wall(Direction::Down));
        assert!(cell.has_wall(Direction::Left));
    }
}
