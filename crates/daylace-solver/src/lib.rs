//! Backtracking search for the Daylace sudoku engine.
//!
//! This crate decides whether a (possibly partial) grid admits a complete
//! valid solution, and produces one when it does. The search combines
//! candidate elimination with depth-first backtracking, always branching on
//! the empty cell with the fewest legal candidates to keep the tree narrow.
//!
//! The solver is a pure function of its input: it works on a private copy of
//! the grid and never mutates the caller's data, so any number of searches
//! may run concurrently.
//!
//! # Examples
//!
//! ```
//! use daylace_core::DigitGrid;
//! use daylace_solver::BacktrackSolver;
//!
//! let puzzle: DigitGrid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()
//! .unwrap();
//!
//! let solver = BacktrackSolver::new();
//! let solution = solver.solve(&puzzle).into_solution().unwrap();
//! assert!(solution.is_valid_complete());
//! ```

pub mod search;

pub use self::search::{BacktrackSolver, SolveOutcome};
