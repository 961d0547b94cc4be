use std::process::ExitCode;

use clap::Parser;

mod app;
mod cli;
mod config;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = cli::Cli::parse();

    match app::run(&cli, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(maze::Error::NoSolution) = e.downcast_ref::<maze::Error>() {
                println!("No solution.");
            } else {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}
