use std::path::PathBuf;

use clap::Parser;
use maze::FrontierPolicy;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Finds a path from A to B through a text maze.", long_about = None)]
pub struct Cli {
    /// Maze description, `A` is the start, `B` the goal and spaces are open
    pub maze_file: PathBuf,

    /// Exploration order: `stack` searches depth-first, `queue` breadth-first
    #[clap(short, long, default_value = "stack")]
    pub frontier: FrontierPolicy,

    /// Also draw the maze into this image file
    #[clap(short, long)]
    pub image: Option<PathBuf>,

    /// Highlight explored cells in the image
    #[clap(long)]
    pub show_explored: bool,

    /// Do not mark the solution path
    #[clap(long)]
    pub hide_solution: bool,

    /// Give up after expanding this many cells
    #[clap(long)]
    pub max_explored: Option<usize>,

    /// Print the search result as JSON instead of drawing the maze
    #[clap(long)]
    pub json: bool,

    /// JSON file with render options, flags given on the command line win
    #[clap(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["maze", "maze1.txt"]).unwrap();

        assert_eq!(cli.maze_file, PathBuf::from("maze1.txt"));
        assert_eq!(cli.frontier, FrontierPolicy::Stack);
        assert!(cli.image.is_none());
        assert!(!cli.show_explored);
        assert!(!cli.hide_solution);
        assert!(cli.max_explored.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "maze",
            "maze2.txt",
            "--frontier",
            "queue",
            "--image",
            "out.png",
            "--show-explored",
            "--hide-solution",
            "--max-explored",
            "100",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.frontier, FrontierPolicy::Queue);
        assert_eq!(cli.image, Some(PathBuf::from("out.png")));
        assert!(cli.show_explored);
        assert!(cli.hide_solution);
        assert_eq!(cli.max_explored, Some(100));
        assert!(cli.json);
    }

    #[test]
    fn test_bad_frontier() {
        assert!(Cli::try_parse_from(["maze", "maze1.txt", "--frontier", "heap"]).is_err());
    }
}
