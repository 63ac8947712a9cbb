//! Seeded puzzle generation for the Daylace sudoku engine.
//!
//! Generation is deterministic: the same seed always produces the same
//! solved grid and, for a given empty-cell fraction, the same carved puzzle.
//! The pseudo-random generator is [`rand_pcg::Pcg64Mcg`], whose algorithm is
//! fixed and platform-independent, so results never drift between processes,
//! restarts, or machines.
//!
//! Solved grids are built from a fixed valid base pattern by applying a
//! seeded sequence of symmetry operations that each preserve sudoku
//! validity, so every generated grid is valid by construction and no
//! backtracking is needed.
//!
//! # Examples
//!
//! ```
//! use daylace_generator::{Difficulty, carve, generate_solution};
//!
//! let solution = generate_solution(42);
//! assert!(solution.is_valid_complete());
//!
//! let puzzle = carve(&solution, 42, Difficulty::Medium.empty_fraction());
//! assert_eq!(puzzle.count_empty(), Difficulty::Medium.empty_cell_count());
//! ```

pub mod carve;
pub mod difficulty;
pub mod solution;

pub use self::{carve::carve, difficulty::Difficulty, solution::generate_solution};
