//! The solve driver: strategy selection, snapshot stream, terminal outcome.

use std::fmt;

use amaze_core::{Coord, Grid};

use crate::astar::AstarSearch;
use crate::bfs::BfsSearch;

/// Sentinel parent index meaning "no predecessor recorded".
pub(crate) const NO_PREV: usize = usize::MAX;

/// Which search strategy drives a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Breadth-first search over the open-wall graph.
    Bfs,
    /// A* with the Manhattan heuristic.
    AStar,
}

/// Terminal result of a solve.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The goal was reached. `moves` counts edges walked, so a path of a
    /// single cell (start equals goal) reports zero moves.
    Found { path: Vec<Coord>, moves: usize },
    /// The frontier emptied without reaching the goal. A carved maze is
    /// fully connected, so this only happens on grids assembled by hand.
    Unreachable,
}

/// One element of a solve trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Snapshot published after settling one cell.
    Visited(Grid),
    /// Final snapshot together with the terminal outcome. Always the last
    /// element of the trace.
    Done { grid: Grid, outcome: Outcome },
}

/// Error raised when a solve cannot start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The grid is still fully walled: no maze has been generated on it.
    NoMazeGenerated,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::NoMazeGenerated => {
                write!(f, "solve called on a fully walled grid: generate a maze first")
            }
        }
    }
}

impl std::error::Error for SolveError {}

/// Start position of every solve: the bottom-left cell.
#[inline]
pub fn start_cell(grid: &Grid) -> Coord {
    Coord::new(grid.rows() - 1, 0)
}

/// Goal position of every solve: the top-right cell.
#[inline]
pub fn goal_cell(grid: &Grid) -> Coord {
    Coord::new(0, grid.cols() - 1)
}

/// Run `strategy` over a working copy of `grid`.
///
/// The caller's grid is left untouched: the returned [`Solve`] iterator
/// owns its copy (presentation flags cleared) and publishes snapshots of
/// it, one per settled cell, ending with a single [`Step::Done`].
///
/// Fails fast with [`SolveError::NoMazeGenerated`] when the grid has more
/// than one cell but not a single open wall — the state of a grid that was
/// built but never carved.
pub fn solve(grid: &Grid, strategy: Strategy) -> Result<Solve, SolveError> {
    if grid.len() > 1 && grid.open_wall_count() == 0 {
        return Err(SolveError::NoMazeGenerated);
    }
    let mut working = grid.clone();
    working.clear_marks();
    let start = start_cell(grid);
    let goal = goal_cell(grid);
    let engine = match strategy {
        Strategy::Bfs => Engine::Bfs(BfsSearch::new(working, start, goal)),
        Strategy::AStar => Engine::AStar(AstarSearch::new(working, start, goal)),
    };
    Ok(Solve {
        engine,
        finished: false,
    })
}

enum Engine {
    Bfs(BfsSearch),
    AStar(AstarSearch),
}

/// Lazy, finite, non-restartable trace of one solve.
///
/// Yields a [`Step::Visited`] snapshot per settled cell in settle order,
/// then exactly one [`Step::Done`], then `None` forever.
pub struct Solve {
    engine: Engine,
    finished: bool,
}

impl Solve {
    /// Drain the trace and return only the terminal outcome.
    pub fn finish(self) -> Outcome {
        let mut outcome = Outcome::Unreachable;
        for step in self {
            if let Step::Done { outcome: o, .. } = step {
                outcome = o;
            }
        }
        outcome
    }
}

impl Iterator for Solve {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.finished {
            return None;
        }
        let step = match &mut self.engine {
            Engine::Bfs(search) => search.advance(),
            Engine::AStar(search) => search.advance(),
        };
        if let Step::Done { outcome, .. } = &step {
            match outcome {
                Outcome::Found { moves, .. } => {
                    log::debug!("solve finished: goal reached in {moves} moves");
                }
                Outcome::Unreachable => log::debug!("solve finished: goal unreachable"),
            }
            self.finished = true;
        }
        Some(step)
    }
}

/// Walk the predecessor chain from `goal` back to `start`, mark every cell
/// on it as path, and return the path in start-to-goal order.
pub(crate) fn reconstruct_path(
    grid: &mut Grid,
    prev: &[usize],
    start: Coord,
    goal: Coord,
) -> Vec<Coord> {
    let mut path = Vec::new();
    let Some(mut i) = grid.index_of(goal) else {
        return path;
    };
    loop {
        let c = grid.coord_of(i);
        path.push(c);
        if let Some(cell) = grid.cell_mut(c) {
            cell.is_path = true;
        }
        if c == start || prev[i] == NO_PREV {
            break;
        }
        i = prev[i];
    }
    path.reverse();
    path
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_round_trip() {
        let outcome = Outcome::Found {
            path: vec![Coord::new(1, 0), Coord::new(0, 0)],
            moves: 1,
        };
        let json = serde_json::to_string(&outcome).unwrap();
        let back: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, back);

        let json = serde_json::to_string(&Outcome::Unreachable).unwrap();
        let back: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Outcome::Unreachable);
    }
}
