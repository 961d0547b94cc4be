use std::{fs, path::Path};

use anyhow::Context;

use crate::Maze;

/// Reads a maze description from a text file
pub fn load_maze<P: AsRef<Path>>(path: P) -> Result<Maze, anyhow::Error> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read maze file {}", path.display()))?;

    let maze = Maze::parse(&contents)
        .with_context(|| format!("failed to parse maze file {}", path.display()))?;

    Ok(maze)
}
