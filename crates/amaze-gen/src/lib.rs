//! **amaze-gen** — randomized depth-first maze carving.
//!
//! Turns a fully walled [`Grid`](amaze_core::Grid) into a perfect maze:
//! the open-wall graph left behind is a spanning tree rooted at `(0, 0)`,
//! so every pair of cells is connected by exactly one simple path.

pub mod mazegen;

pub use mazegen::{Difficulty, MazeGen};
