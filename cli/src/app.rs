use std::io::Write;

use anyhow::anyhow;
use log::{debug, info};
use maze::{render_text, save_image, Maze, PathSearch, SearchResult, SearchState};

use crate::cli::Cli;
use crate::config::render_options;

/// Runs the search, stepping it so an exploration limit can be enforced
pub fn solve(maze: &Maze, cli: &Cli) -> Result<SearchResult, anyhow::Error> {
    let mut search = PathSearch::new(maze, cli.frontier);

    loop {
        if let Some(limit) = cli.max_explored {
            if search.explored_count() >= limit {
                return Err(anyhow!(
                    "gave up after exploring {} states",
                    search.explored_count()
                ));
            }
        }

        match search.step()? {
            SearchState::Exploring => {}
            SearchState::NoSolution => return Err(maze::Error::NoSolution.into()),
            SearchState::Solved(result) => return Ok(result),
        }
    }
}

pub fn run(cli: &Cli, out: &mut impl Write) -> Result<(), anyhow::Error> {
    let options = render_options(cli)?;
    let maze = maze::util::load_maze(&cli.maze_file)?;
    debug!(
        "loaded {}x{} maze from {}",
        maze.height(),
        maze.width(),
        cli.maze_file.display()
    );

    if !cli.json {
        writeln!(out, "Maze:")?;
        write!(out, "\n{}\n", maze)?;
        writeln!(out, "Solving...")?;
    }

    let result = solve(&maze, cli)?;
    info!(
        "solved with a {} frontier: {} steps, {} states explored",
        cli.frontier,
        result.len(),
        result.explored_count
    );

    if cli.json {
        serde_json::to_writer_pretty(&mut *out, &result)?;
        writeln!(out)?;
    } else {
        writeln!(out, "States Explored: {}", result.explored_count)?;
        writeln!(out, "Solution:")?;
        write!(
            out,
            "\n{}\n",
            render_text(&maze, Some(&result), options.show_solution)
        )?;
    }

    if let Some(path) = &cli.image {
        save_image(&maze, Some(&result), &options, path)?;
        info!("wrote {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod test {

    use super::*;
    use clap::Parser;
    use std::{fs, path::PathBuf};

    fn write_maze(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("maze-cli-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    fn run_with(args: &[&str]) -> (Result<(), anyhow::Error>, String) {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        let res = run(&cli, &mut out);
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_run_text() {
        let path = write_maze("text.txt", "A# \n # \n  B\n");
        let (res, out) = run_with(&["maze", path.to_str().unwrap(), "-f", "queue"]);
        fs::remove_file(&path).unwrap();

        res.unwrap();
        assert!(out.contains("States Explored: "));
        assert!(out.contains("A█ \n*█ \n**B\n"));
    }

    #[test]
    fn test_run_json() {
        let path = write_maze("json.txt", "#####\n#AB #\n#####\n");
        let (res, out) = run_with(&["maze", path.to_str().unwrap(), "--json"]);
        fs::remove_file(&path).unwrap();

        res.unwrap();
        let result: SearchResult = serde_json::from_str(&out).unwrap();
        assert_eq!(result.actions, vec![maze::Action::Right]);
        assert_eq!(result.explored_count, 2);
    }

    #[test]
    fn test_run_no_solution() {
        let path = write_maze("closed.txt", "###  \n#A#  \n### B\n");
        let (res, _) = run_with(&["maze", path.to_str().unwrap()]);
        fs::remove_file(&path).unwrap();

        let err = res.unwrap_err();
        assert_eq!(
            err.downcast_ref::<maze::Error>(),
            Some(&maze::Error::NoSolution)
        );
    }

    #[test]
    fn test_run_exploration_limit() {
        let path = write_maze("limit.txt", "A      \n ##### \n      B\n");
        let (res, _) = run_with(&["maze", path.to_str().unwrap(), "--max-explored", "3"]);
        fs::remove_file(&path).unwrap();

        let err = res.unwrap_err();
        assert!(err.downcast_ref::<maze::Error>().is_none());
        assert!(err.to_string().contains("3 states"));
    }

    #[test]
    fn test_zero_exploration_limit() {
        let maze = Maze::parse("AB").unwrap();
        let cli = Cli::try_parse_from(["maze", "m.txt", "--max-explored", "0"]).unwrap();

        let err = solve(&maze, &cli).unwrap_err();
        assert_eq!(err.to_string(), "gave up after exploring 0 states");
    }

    #[test]
    fn test_limit_reached_on_goal() {
        // the goal is taken on the second expansion, which is still inside the limit
        let maze = Maze::parse("AB").unwrap();
        let cli = Cli::try_parse_from(["maze", "m.txt", "--max-explored", "2"]).unwrap();

        assert_eq!(solve(&maze, &cli).unwrap().explored_count, 2);
    }

    #[test]
    fn test_run_image_bad_options() {
        let path = write_maze("image-bad.txt", "AB");
        let config = std::env::temp_dir().join(format!("maze-cli-{}-huge.json", std::process::id()));
        fs::write(&config, r#"{ "cell_size": 4000000000 }"#).unwrap();
        let image = std::env::temp_dir().join(format!("maze-cli-{}-huge.png", std::process::id()));

        let (res, _) = run_with(&[
            "maze",
            path.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
            "--image",
            image.to_str().unwrap(),
        ]);
        fs::remove_file(&path).unwrap();
        fs::remove_file(&config).unwrap();

        assert!(res.unwrap_err().to_string().contains("too large"));
        assert!(!image.exists());
    }

    #[test]
    fn test_run_image() {
        let path = write_maze("image.txt", "A  \n## \nB  \n");
        let image = std::env::temp_dir().join(format!("maze-cli-{}.png", std::process::id()));
        let (res, _) = run_with(&[
            "maze",
            path.to_str().unwrap(),
            "--image",
            image.to_str().unwrap(),
        ]);
        fs::remove_file(&path).unwrap();

        res.unwrap();
        assert!(image.exists());
        fs::remove_file(&image).unwrap();
    }
}
