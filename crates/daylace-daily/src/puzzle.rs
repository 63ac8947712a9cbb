//! The daily puzzle bundle.

use chrono::NaiveDate;
use daylace_core::{Digit, DigitGrid, Position};
use daylace_generator::{Difficulty, carve, generate_solution};
use serde::Serialize;

use crate::{
    feasibility::{self, MoveError},
    seed::{day_of_week, difficulty_for, seed_for},
    verify,
};

/// The puzzle generated for one calendar date.
///
/// Bundles everything the surrounding application needs to serve a daily
/// puzzle: the carved grid handed to players, the canonical solution it was
/// carved from, the difficulty tier, and display labels. A fresh bundle is
/// created on every call, and repeated calls for the same date are
/// identical in every field.
///
/// The non-empty cells of `puzzle` are the givens; verification rejects any
/// submission that changes one of them.
///
/// Serialization produces `{date, puzzle, solution, difficulty,
/// day_of_week}` with the date as an ISO-8601 string, grids as plain 9×9
/// integer arrays (0 = empty), and the difficulty as its lowercase label.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use daylace_daily::DailyPuzzle;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let bundle = DailyPuzzle::generate(date);
///
/// assert!(bundle.solution.is_valid_complete());
/// assert_eq!(bundle.puzzle.count_empty(), bundle.difficulty.empty_cell_count());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyPuzzle {
    /// The calendar date this puzzle belongs to.
    pub date: NaiveDate,
    /// The carved grid presented to players; non-empty cells are givens.
    pub puzzle: DigitGrid,
    /// The canonical solution the puzzle was carved from.
    pub solution: DigitGrid,
    /// The difficulty tier selected for the date.
    pub difficulty: Difficulty,
    /// English weekday label for display.
    pub day_of_week: &'static str,
}

impl DailyPuzzle {
    /// Generates the puzzle for a date.
    ///
    /// Deterministic: the same date always yields the same bundle, in this
    /// process and in any other.
    #[must_use]
    pub fn generate(date: NaiveDate) -> Self {
        let seed = seed_for(date);
        let difficulty = difficulty_for(date);
        let solution = generate_solution(seed);
        let puzzle = carve(&solution, seed, difficulty.empty_fraction());
        log::debug!("generated {difficulty} puzzle for {date} (seed {seed})");
        Self {
            date,
            puzzle,
            solution,
            difficulty,
            day_of_week: day_of_week(date),
        }
    }

    /// Generates the puzzle for the current local date.
    #[must_use]
    pub fn today() -> Self {
        Self::generate(chrono::Local::now().date_naive())
    }

    /// Returns `true` if the cell at `pos` is a given of this puzzle.
    #[must_use]
    pub fn is_given(&self, pos: Position) -> bool {
        self.puzzle[pos].is_some()
    }

    /// Checks whether `submitted` is a legitimate completion of this puzzle.
    ///
    /// Accepts any complete valid grid that preserves every given; see
    /// [`verify_solution`](crate::verify_solution) for the date-based form.
    #[must_use]
    pub fn verify(&self, submitted: &DigitGrid) -> bool {
        verify::givens_preserved(&self.puzzle, submitted) && submitted.is_valid_complete()
    }

    /// Checks whether placing `digit` at `pos` on `current` still permits a
    /// complete solution of this puzzle.
    ///
    /// See [`is_completion_feasible`](crate::is_completion_feasible).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GivenCell`] if `pos` is a given of this puzzle.
    pub fn is_move_feasible(
        &self,
        current: &DigitGrid,
        pos: Position,
        digit: Digit,
    ) -> Result<bool, MoveError> {
        feasibility::is_completion_feasible(&self.puzzle, current, pos, digit)
    }
}
