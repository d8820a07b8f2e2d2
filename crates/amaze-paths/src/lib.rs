//! **amaze-paths** — maze solving with incremental search traces.
//!
//! Two interchangeable strategies over a carved [`Grid`](amaze_core::Grid):
//!
//! - **BFS** unweighted shortest path ([`Strategy::Bfs`])
//! - **A\*** Manhattan-guided shortest path ([`Strategy::AStar`])
//!
//! Both run through [`solve`], which returns the lazy [`Solve`] iterator:
//! one grid snapshot per settled cell, terminated by a single
//! [`Step::Done`] carrying the [`Outcome`]. Nothing in this crate sleeps or
//! schedules; the consumer paces the animation entirely on its side by
//! deciding when to pull the next step.

mod astar;
mod bfs;
mod distance;
mod queue;
mod solver;

pub use distance::manhattan;
pub use queue::{EmptyQueue, PriorityQueue};
pub use solver::{Outcome, Solve, SolveError, Step, Strategy, goal_cell, solve, start_cell};
