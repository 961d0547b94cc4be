use std::{fs, path::Path};

use anyhow::Context;
use maze::RenderOptions;

use crate::cli::Cli;

/// Reads render options from a JSON file. Missing keys keep their defaults.
pub fn load_render_options(path: &Path) -> Result<RenderOptions, anyhow::Error> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

/// Combines the optional config file with the command line flags
pub fn render_options(cli: &Cli) -> Result<RenderOptions, anyhow::Error> {
    let mut options = match &cli.config {
        Some(path) => load_render_options(path)?,
        None => RenderOptions::default(),
    };

    if cli.show_explored {
        options.show_explored = true;
    }
    if cli.hide_solution {
        options.show_solution = false;
    }

    options.validate()?;
    Ok(options)
}
