//! Example demonstrating needlewheel puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` over the standard pattern pool
//! - Generate a puzzle for a chosen bonus pattern and display it with its seed
//! - Sample many seeded puzzles in parallel and report how many draws the
//!   solvability probe rejected
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick the bonus pattern by its row and column in the bonus table:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --row 0 --column 1
//! ```
//!
//! Sample many puzzles and print draw statistics:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --samples 10000
//! ```

use std::process;

use clap::Parser;
use needlewheel_core::{Wheel, catalog};
use needlewheel_generator::{GeneratedPuzzle, PuzzleGenerator};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Bonus table row (battery surplus bucket).
    #[arg(long, value_name = "ROW", default_value_t = 0)]
    row: usize,

    /// Bonus table column (odd/vowel score bucket).
    #[arg(long, value_name = "COLUMN", default_value_t = 0)]
    column: usize,

    /// Number of puzzles to sample for draw statistics.
    #[arg(long, value_name = "COUNT", default_value_t = 0)]
    samples: usize,

    /// Maximum draws per puzzle.
    #[arg(long, value_name = "COUNT", default_value_t = needlewheel_generator::DEFAULT_MAX_DRAWS)]
    max_draws: usize,
}

fn main() {
    let args = Args::parse();
    if args.row >= catalog::BONUS_ROWS || args.column >= catalog::BONUS_COLUMNS {
        eprintln!(
            "Bonus table is {}x{}; got row {} column {}.",
            catalog::BONUS_ROWS,
            catalog::BONUS_COLUMNS,
            args.row,
            args.column
        );
        process::exit(2);
    }

    let bonus = catalog::bonus_pattern(args.row, args.column);
    let generator = PuzzleGenerator::with_standard_pool().max_draws(args.max_draws);

    let puzzle = match generator.generate(bonus) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("Generation failed: {err}");
            process::exit(1);
        }
    };
    print_puzzle(&puzzle);

    if args.samples == 0 {
        return;
    }

    let draws = (0..args.samples)
        .into_par_iter()
        .map(|_| generator.generate(bonus).map(|puzzle| puzzle.draws))
        .collect::<Vec<_>>();
    let failures = draws.iter().filter(|result| result.is_err()).count();
    let accepted = draws
        .iter()
        .filter_map(|result| result.as_ref().ok().copied())
        .collect::<Vec<_>>();
    let total: usize = accepted.iter().sum();
    let worst = accepted.iter().max().copied().unwrap_or(0);

    println!();
    println!("Sampling:");
    println!("  Samples: {}", args.samples);
    println!("  Failed: {failures}");
    println!("  Total draws: {total}");
    println!("  Worst draws: {worst}");
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Draws:");
    println!("  {}", puzzle.draws);
    println!();
    println!("Wheels:");
    for (i, (pattern, &index)) in puzzle
        .patterns
        .iter()
        .zip(&puzzle.start_indices)
        .enumerate()
    {
        let wheel = Wheel::new(pattern.clone(), index).unwrap();
        println!("  #{}: {wheel}", i + 1);
    }
}
