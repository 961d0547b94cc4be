use thiserror::Error;

/// Reasons a maze description is rejected before any search can run.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMaze {
    #[error("the maze must have exactly one start point, found {0}")]
    StartCount(usize),
    #[error("the maze must have exactly one goal, found {0}")]
    GoalCount(usize),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid maze: {0}")]
    InvalidMaze(#[from] InvalidMaze),
    #[error("the frontier is empty")]
    EmptyFrontier,
    #[error("no solution")]
    NoSolution,
}
