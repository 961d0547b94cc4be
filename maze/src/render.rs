use std::path::Path;

use anyhow::{anyhow, ensure};
use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::find::SearchResult;
use crate::grid::{Maze, Point};

const WALL: Rgba<u8> = Rgba([40, 40, 40, 255]);
const START: Rgba<u8> = Rgba([255, 0, 0, 255]);
const GOAL: Rgba<u8> = Rgba([0, 171, 28, 255]);
const SOLUTION: Rgba<u8> = Rgba([220, 235, 113, 255]);
const EXPLORED: Rgba<u8> = Rgba([212, 97, 85, 255]);
const EMPTY: Rgba<u8> = Rgba([237, 240, 252, 255]);
const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub show_solution: bool,
    pub show_explored: bool,
    /// Side length of a cell in pixels
    pub cell_size: u32,
    /// Gap in pixels left around every cell
    pub cell_border: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_solution: true,
            show_explored: false,
            cell_size: 50,
            cell_border: 2,
        }
    }
}

impl RenderOptions {
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        ensure!(self.cell_size > 0, "cell_size must be at least 1 pixel");
        Ok(())
    }
}

/// Draws the maze as text, one line per row. Walls are `█`, the start and
/// goal keep their letters and cells on the solution are marked with `*`.
pub fn render_text(maze: &Maze, result: Option<&SearchResult>, show_solution: bool) -> String {
    let solution = result.filter(|_| show_solution).map(|r| &r.cells);

    let mut out = String::with_capacity((maze.width() + 1) * maze.height());
    for (row, walls) in maze.walls().iter().enumerate() {
        for (col, wall) in walls.iter().enumerate() {
            let point = Point { row, col };
            out.push(if *wall {
                '█'
            } else if point == maze.start() {
                'A'
            } else if point == maze.goal() {
                'B'
            } else if solution.is_some_and(|cells| cells.contains(&point)) {
                '*'
            } else {
                ' '
            });
        }
        out.push('\n');
    }

    out
}

fn cell_color(
    maze: &Maze,
    result: Option<&SearchResult>,
    options: &RenderOptions,
    point: Point,
) -> Rgba<u8> {
    if maze.is_wall(point) {
        return WALL;
    }
    if point == maze.start() {
        return START;
    }
    if point == maze.goal() {
        return GOAL;
    }

    match result {
        Some(r) if options.show_solution && r.cells.contains(&point) => SOLUTION,
        Some(r) if options.show_explored && r.explored.contains(&point) => EXPLORED,
        _ => EMPTY,
    }
}

/// Draws the maze as an image with one square per cell.
///
/// Solution and explored cells are only highlighted when a result is given.
/// Fails when the options do not describe a drawable canvas.
pub fn render_image(
    maze: &Maze,
    result: Option<&SearchResult>,
    options: &RenderOptions,
) -> Result<RgbaImage, anyhow::Error> {
    options.validate()?;

    let size = options.cell_size;
    let border = options.cell_border;

    let canvas = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(size))
            .ok_or_else(|| anyhow!("a {} pixel cell_size is too large for this maze", size))
    };
    let mut img = RgbaImage::from_pixel(canvas(maze.width())?, canvas(maze.height())?, BACKGROUND);

    // every cell edge below fits in u32 since the canvas size did
    for row in 0..maze.height() as u32 {
        for col in 0..maze.width() as u32 {
            let fill = cell_color(
                maze,
                result,
                options,
                Point {
                    row: row as usize,
                    col: col as usize,
                },
            );

            // both corners of the inset square are painted
            let x0 = (col * size).saturating_add(border);
            let y0 = (row * size).saturating_add(border);
            let x1 = ((col + 1) * size).saturating_sub(border);
            let y1 = ((row + 1) * size).saturating_sub(border);

            for y in y0..=y1.min(img.height() - 1) {
                for x in x0..=x1.min(img.width() - 1) {
                    img.put_pixel(x, y, fill);
                }
            }
        }
    }

    Ok(img)
}

/// Renders the maze and writes it to `path`, the format follows the file
/// extension.
pub fn save_image<P: AsRef<Path>>(
    maze: &Maze,
    result: Option<&SearchResult>,
    options: &RenderOptions,
    path: P,
) -> Result<(), anyhow::Error> {
    render_image(maze, result, options)?.save(path.as_ref())?;
    Ok(())
}
