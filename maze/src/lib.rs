//! Solve text mazes with depth-first or breadth-first search.
//!
//! A [`Maze`] is parsed from text where `A` marks the start, `B` the goal, a
//! space an open cell and anything else a wall. [`PathSearch`] walks it using
//! a [`Frontier`] whose [`FrontierPolicy`] decides the exploration order.

pub mod error;
pub mod find;
pub mod frontier;
pub mod grid;
pub mod render;
pub mod util;

pub use error::{Error, InvalidMaze};
pub use find::{PathSearch, SearchResult, SearchState};
pub use frontier::{Frontier, FrontierPolicy, SearchNode};
pub use grid::{Action, Maze, Point};
pub use render::{render_image, render_text, save_image, RenderOptions};
