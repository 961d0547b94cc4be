use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{Error, InvalidMaze};
use crate::render::render_text;

/// The move taken between two adjacent cells
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Action::Up => "up",
                Action::Down => "down",
                Action::Left => "left",
                Action::Right => "right",
            }
        )
    }
}

impl FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Action::Up),
            "down" => Ok(Action::Down),
            "left" => Ok(Action::Left),
            "right" => Ok(Action::Right),
            _ => Err(anyhow::anyhow!("Invalid action: {}", s)),
        }
    }
}

/// Points order by row, then column
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The static geometry of a maze: its walls plus the start and goal cells.
///
/// A maze is read-only once built, so any number of searches can run against
/// the same instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    pub(crate) height: usize,
    pub(crate) width: usize,
    pub(crate) walls: Vec<Vec<bool>>,
    pub(crate) start: Point,
    pub(crate) goal: Point,
}

impl Maze {
    /// Builds a maze from its text description.
    ///
    /// `A` marks the start, `B` the goal and a space an open cell. Every other
    /// character is a wall. Rows shorter than the longest one are padded with
    /// open cells.
    pub fn parse(contents: &str) -> Result<Self, Error> {
        let starts = contents.matches('A').count();
        if starts != 1 {
            return Err(InvalidMaze::StartCount(starts).into());
        }
        let goals = contents.matches('B').count();
        if goals != 1 {
            return Err(InvalidMaze::GoalCount(goals).into());
        }

        // `lines` splits on `\n` and `\r\n` only, a lone `\r` stays part of the row
        let lines: Vec<Vec<char>> = contents.lines().map(|l| l.chars().collect()).collect();
        let height = lines.len();
        let width = lines.iter().map(Vec::len).max().unwrap_or(0);

        // cells past the end of a short line stay open
        let mut walls = vec![vec![false; width]; height];
        let mut start = None;
        let mut goal = None;

        for (row, line) in lines.iter().enumerate() {
            for (col, c) in line.iter().enumerate() {
                match c {
                    'A' => start = Some(Point { row, col }),
                    'B' => goal = Some(Point { row, col }),
                    ' ' => {}
                    _ => walls[row][col] = true,
                }
            }
        }

        Ok(Self {
            height,
            width,
            walls,
            start: start.ok_or(InvalidMaze::StartCount(0))?,
            goal: goal.ok_or(InvalidMaze::GoalCount(0))?,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn walls(&self) -> &[Vec<bool>] {
        &self.walls
    }

    /// Check if the provided point lies inside the maze
    pub fn is_valid(&self, point: Point) -> bool {
        point.row < self.height && point.col < self.width
    }

    /// Points outside the maze count as walls
    pub fn is_wall(&self, point: Point) -> bool {
        !self.is_valid(point) || self.walls[point.row][point.col]
    }

    /// Number of cells that are not walls
    pub fn open_cells(&self) -> usize {
        self.walls.iter().flatten().filter(|wall| !**wall).count()
    }

    /// Returns the open cells next to `point` together with the action that
    /// leads there.
    ///
    /// Candidates are always produced in the order up, down, left, right. The
    /// search relies on this order to break ties, so results stay
    /// reproducible.
    pub fn neighbors(&self, point: Point) -> Vec<(Action, Point)> {
        let mut points = Vec::with_capacity(4);

        if point.row > 0 {
            points.push((
                Action::Up,
                Point {
                    row: point.row - 1,
                    col: point.col,
                },
            ));
        }
        points.push((
            Action::Down,
            Point {
                row: point.row + 1,
                col: point.col,
            },
        ));
        if point.col > 0 {
            points.push((
                Action::Left,
                Point {
                    row: point.row,
                    col: point.col - 1,
                },
            ));
        }
        points.push((
            Action::Right,
            Point {
                row: point.row,
                col: point.col + 1,
            },
        ));

        // filter to only keep open cells inside the grid
        points.retain(|(_, p)| !self.is_wall(*p));

        points
    }
}

impl FromStr for Maze {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Maze::parse(s)
    }
}

impl Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render_text(self, None, false))
    }
}
