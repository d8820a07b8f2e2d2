//! A* search guided by the Manhattan heuristic.
//!
//! The open set is a [`PriorityQueue`] keyed by `f = g + h`. There is no
//! decrease-key: improving a queued cell re-enqueues it at the better
//! priority, and the superseded entry is dropped when it surfaces (its
//! live flag has been cleared by then). With an admissible heuristic the
//! improved entry always pops first, so a stale entry can never settle
//! its cell.

use amaze_core::{Coord, Grid};

use crate::distance::manhattan;
use crate::queue::PriorityQueue;
use crate::solver::{NO_PREV, Outcome, Step, reconstruct_path};

/// Sentinel g-score meaning "no distance known yet".
const UNKNOWN: i32 = i32::MAX;

/// Incremental A* over a working grid.
pub(crate) struct AstarSearch {
    grid: Grid,
    start: Coord,
    goal: Coord,
    open: PriorityQueue<usize>,
    /// Whether the cell currently has a live entry in the open set.
    live: Vec<bool>,
    settled: Vec<bool>,
    g_score: Vec<i32>,
    prev: Vec<usize>,
}

impl AstarSearch {
    pub(crate) fn new(grid: Grid, start: Coord, goal: Coord) -> Self {
        let len = grid.len();
        let mut search = Self {
            grid,
            start,
            goal,
            open: PriorityQueue::new(),
            live: vec![false; len],
            settled: vec![false; len],
            g_score: vec![UNKNOWN; len],
            prev: vec![NO_PREV; len],
        };
        if let Some(si) = search.grid.index_of(start) {
            search.g_score[si] = 0;
            search.live[si] = true;
            search.open.enqueue(si, manhattan(start, goal));
        }
        search
    }

    pub(crate) fn advance(&mut self) -> Step {
        // Pop the best live entry, discarding entries superseded by a
        // re-enqueue at a better priority.
        let ci = loop {
            if self.open.is_empty() {
                return Step::Done {
                    grid: self.grid.clone(),
                    outcome: Outcome::Unreachable,
                };
            }
            let Ok(i) = self.open.dequeue() else {
                // Not reachable: emptiness was checked above.
                return Step::Done {
                    grid: self.grid.clone(),
                    outcome: Outcome::Unreachable,
                };
            };
            if self.live[i] {
                break i;
            }
        };
        self.live[ci] = false;
        let current = self.grid.coord_of(ci);

        if current == self.goal {
            let path = reconstruct_path(&mut self.grid, &self.prev, self.start, self.goal);
            let moves = path.len().saturating_sub(1);
            return Step::Done {
                grid: self.grid.clone(),
                outcome: Outcome::Found { path, moves },
            };
        }

        self.settled[ci] = true;
        if let Some(cell) = self.grid.cell_mut(current) {
            cell.is_visited = true;
        }

        let neighbors: Vec<Coord> = self.grid.open_neighbors(current).collect();
        for n in neighbors {
            let Some(ni) = self.grid.index_of(n) else {
                continue;
            };
            if self.settled[ni] {
                continue;
            }
            let tentative = self.g_score[ci].saturating_add(1);
            if tentative >= self.g_score[ni] {
                continue;
            }
            self.g_score[ni] = tentative;
            self.prev[ni] = ci;
            self.live[ni] = true;
            self.open.enqueue(ni, tentative + manhattan(n, self.goal));
        }

        Step::Visited(self.grid.clone())
    }
}
