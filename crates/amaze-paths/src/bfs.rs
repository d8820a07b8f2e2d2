//! Breadth-first search: unweighted shortest path behind a FIFO frontier.

use std::collections::VecDeque;

use amaze_core::{Coord, Grid};

use crate::solver::{NO_PREV, Outcome, Step, reconstruct_path};

/// Incremental BFS over a working grid.
///
/// Each [`advance`](BfsSearch::advance) call settles exactly one frontier
/// cell and publishes one step, so the trace order equals the dequeue order.
pub(crate) struct BfsSearch {
    grid: Grid,
    start: Coord,
    goal: Coord,
    frontier: VecDeque<usize>,
    seen: Vec<bool>,
    prev: Vec<usize>,
}

impl BfsSearch {
    pub(crate) fn new(grid: Grid, start: Coord, goal: Coord) -> Self {
        let len = grid.len();
        let mut search = Self {
            grid,
            start,
            goal,
            frontier: VecDeque::new(),
            seen: vec![false; len],
            prev: vec![NO_PREV; len],
        };
        if let Some(si) = search.grid.index_of(start) {
            search.seen[si] = true;
            search.frontier.push_back(si);
        }
        search
    }

    pub(crate) fn advance(&mut self) -> Step {
        let Some(ci) = self.frontier.pop_front() else {
            return Step::Done {
                grid: self.grid.clone(),
                outcome: Outcome::Unreachable,
            };
        };
        let current = self.grid.coord_of(ci);
        if let Some(cell) = self.grid.cell_mut(current) {
            cell.is_visited = true;
        }

        if current == self.goal {
            let path = reconstruct_path(&mut self.grid, &self.prev, self.start, self.goal);
            let moves = path.len().saturating_sub(1);
            return Step::Done {
                grid: self.grid.clone(),
                outcome: Outcome::Found { path, moves },
            };
        }

        let neighbors: Vec<Coord> = self.grid.open_neighbors(current).collect();
        for n in neighbors {
            let Some(ni) = self.grid.index_of(n) else {
                continue;
            };
            if self.seen[ni] {
                continue;
            }
            self.seen[ni] = true;
            self.prev[ni] = ci;
            self.frontier.push_back(ni);
        }

        Step::Visited(self.grid.clone())
    }
}
