//! Example printing the daily puzzle for a date.
//!
//! Generates the bundle for today (or a given date), prints it, and
//! regenerates it to double-check that generation is deterministic.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example daily_puzzle
//! ```
//!
//! Generate the puzzle for a specific date:
//!
//! ```sh
//! cargo run --example daily_puzzle -- --date 2024-01-01
//! ```
//!
//! Enable debug logging:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example daily_puzzle
//! ```

use chrono::NaiveDate;
use clap::Parser;
use daylace_daily::DailyPuzzle;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Date to generate (YYYY-MM-DD); defaults to today.
    #[arg(long, value_name = "DATE")]
    date: Option<NaiveDate>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let bundle = match args.date {
        Some(date) => DailyPuzzle::generate(date),
        None => DailyPuzzle::today(),
    };

    println!("Date: {} ({})", bundle.date, bundle.day_of_week);
    println!("Difficulty: {}", bundle.difficulty);
    println!();
    println!("Puzzle:");
    println!("{}", bundle.puzzle);
    println!();
    println!("Solution:");
    println!("{}", bundle.solution);

    let again = DailyPuzzle::generate(bundle.date);
    assert_eq!(bundle, again, "puzzle generation must be deterministic");
    println!();
    println!("Generation is deterministic for {}", bundle.date);
}
