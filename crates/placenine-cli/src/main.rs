//! Command-line front end for the placenine engine.
//!
//! Each subcommand wraps one external-interface operation and prints its
//! report as JSON, so the output matches what an HTTP layer built on
//! [`placenine_api`] would return.
//!
//! ```sh
//! placenine solve "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6.."
//! placenine check --coordinate A4 --value 1 "1................................................................................"
//! placenine generate --count 3 --seed 42
//! ```

use clap::{Parser, Subcommand};
use log::info;
use placenine_generator::PuzzleGenerator;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Structurally validate a puzzle string.
    Validate {
        /// The 81-character puzzle string.
        puzzle: String,
    },
    /// Check whether a value can legally occupy a cell.
    Check {
        /// Cell coordinate, row letter plus column number (e.g. A4).
        #[arg(short, long)]
        coordinate: String,
        /// Digit 1-9 to test.
        #[arg(short, long)]
        value: String,
        /// The 81-character puzzle string.
        puzzle: String,
    },
    /// Solve a puzzle, printing the solution or an error.
    Solve {
        /// The 81-character puzzle string.
        puzzle: String,
    },
    /// Audit a completed puzzle for conflicts.
    Verify {
        /// The 81-character puzzle string.
        puzzle: String,
    },
    /// Generate random solvable puzzles.
    Generate {
        /// How many puzzles to generate.
        #[arg(long, value_name = "COUNT", default_value_t = 1)]
        count: usize,
        /// Numeric seed for reproducible output.
        #[arg(long, conflicts_with = "phrase")]
        seed: Option<u64>,
        /// Seed phrase for reproducible output.
        #[arg(long)]
        phrase: Option<String>,
    },
}

fn main() -> Result<(), serde_json::Error> {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match args.command {
        Command::Validate { puzzle } => print_json(&placenine_api::validate(&puzzle))?,
        Command::Check {
            coordinate,
            value,
            puzzle,
        } => print_json(&placenine_api::check(&puzzle, &coordinate, &value))?,
        Command::Solve { puzzle } => print_json(&placenine_api::solve(&puzzle))?,
        Command::Verify { puzzle } => print_json(&placenine_api::check_solve(&puzzle))?,
        Command::Generate {
            count,
            seed,
            phrase,
        } => {
            let mut generator = match (seed, phrase) {
                (Some(seed), _) => PuzzleGenerator::from_seed(seed),
                (None, Some(phrase)) => PuzzleGenerator::from_phrase(&phrase),
                (None, None) => PuzzleGenerator::new(),
            };
            for _ in 0..count {
                println!("{}", generator.generate_str());
            }
            info!("generated {count} puzzle(s)");
        }
    }
    Ok(())
}

fn print_json<T>(report: &T) -> Result<(), serde_json::Error>
where
    T: serde::Serialize,
{
    println!("{}", serde_json::to_string(report)?);
    Ok(())
}
