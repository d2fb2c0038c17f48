//! Command-line solver.
//!
//! Reads a puzzle from a file (or stdin), solves it, and prints the solved
//! grid. Digits 1-9 are clues; `.`, `_`, and `0` mark empty cells; all other
//! characters are ignored.

use std::{
    error::Error,
    io::Read as _,
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use clap::Parser;
use gridoku_core::Grid;
use gridoku_solver::Solver;

/// Solves a 9×9 puzzle read from a file or stdin.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the puzzle file, or `-` for stdin.
    puzzle: PathBuf,

    /// Print solving statistics to stderr.
    #[arg(long)]
    stats: bool,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let input = if args.puzzle.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().lock().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&args.puzzle)?
    };

    let grid: Grid = input.parse()?;
    log::info!("parsed puzzle:\n{grid}");

    let mut solver = Solver::new(grid);
    let start = Instant::now();
    solver.solve()?;
    let elapsed = start.elapsed();

    print!("{}", solver.grid());

    if args.stats {
        let stats = solver.stats();
        eprintln!("solved in {elapsed:?}");
        eprintln!("propagation passes:   {}", stats.propagation_passes());
        eprintln!("naked singles:        {}", stats.naked_singles_placed());
        eprintln!("hidden singles:       {}", stats.hidden_singles_placed());
        eprintln!("placement attempts:   {}", stats.placement_attempts());
        eprintln!("used search:          {}", stats.used_search());
    }
    Ok(())
}
