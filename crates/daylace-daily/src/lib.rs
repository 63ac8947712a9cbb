//! The daily puzzle API of the Daylace sudoku engine.
//!
//! Every calendar date maps deterministically to one puzzle: the date's
//! ordinal day count yields a seed, the seed selects a difficulty tier and
//! drives canonical-solution construction and carving, so every caller in
//! every process sees the same puzzle on the same day.
//!
//! Three operations make up the public surface:
//!
//! - [`DailyPuzzle::generate`]: the bundle handed to the surrounding
//!   application — date, puzzle, solution, difficulty tier, and weekday
//!   label.
//! - [`verify_solution`]: checks a submitted grid against a date's puzzle,
//!   accepting any valid completion that preserves the givens.
//! - [`is_completion_feasible`]: decides by exhaustive search whether a
//!   tentative single-cell assignment still permits some complete solution.
//!
//! All operations are pure functions of their inputs and safe to call
//! concurrently.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use daylace_daily::{DailyPuzzle, verify_solution};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let puzzle = DailyPuzzle::generate(date);
//!
//! assert_eq!(puzzle.day_of_week, "Monday");
//! assert!(verify_solution(date, &puzzle.solution));
//! ```

pub mod feasibility;
pub mod puzzle;
pub mod seed;
pub mod verify;

pub use self::{
    feasibility::{Feasibility, MoveError, is_completion_feasible, is_completion_feasible_with},
    puzzle::DailyPuzzle,
    seed::{day_of_week, difficulty_for, seed_for},
    verify::{verify_solution, verify_submission},
};
