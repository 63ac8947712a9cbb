//! Core data structures for the Daylace sudoku engine.
//!
//! This crate provides the fundamental grid model shared by puzzle
//! generation, solving, and the daily-puzzle API:
//!
//! - [`Digit`]: type-safe representation of sudoku digits 1-9
//! - [`Position`]: board coordinates with row/column/box indexing
//! - [`DigitSet`]: an efficient 9-bit set of digits
//! - [`House`]: a row, column, or 3×3 box
//! - [`DigitGrid`]: a 9×9 grid of optional digits with parsing, display,
//!   plain-array boundary conversion, and full-grid validation
//!
//! The boundary representation accepted from and handed to callers is a
//! plain 9×9 array of integers in 0-9, where 0 means an empty cell. Inputs
//! that are not exactly that shape are rejected with a [`GridError`] before
//! they reach any engine logic.
//!
//! # Examples
//!
//! ```
//! use daylace_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid[Position::new(0, 0)] = Some(Digit::D5);
//!
//! assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
//! assert!(!grid.is_valid_complete()); // 80 cells are still empty
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, GridError, ParseGridError},
    house::House,
    position::Position,
};
