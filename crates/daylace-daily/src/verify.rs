//! Submitted-solution verification.

use chrono::NaiveDate;
use daylace_core::{DigitGrid, GridError, Position};

use crate::puzzle::DailyPuzzle;

/// Checks whether `submitted` is a legitimate completion of the puzzle for
/// `date`.
///
/// The date's bundle is regenerated (generation is deterministic, so this
/// sees exactly the grid the player was served), then the submission must
/// hold the identical digit in every given cell and pass full-grid
/// validation. Because carving does not guarantee a unique completion, any
/// valid completion consistent with the givens is accepted, not only the
/// canonical solution.
///
/// A wrong answer is `false`, never an error.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use daylace_daily::{DailyPuzzle, verify_solution};
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let bundle = DailyPuzzle::generate(date);
///
/// assert!(verify_solution(date, &bundle.solution));
/// assert!(!verify_solution(date, &bundle.puzzle)); // incomplete
/// ```
#[must_use]
pub fn verify_solution(date: NaiveDate, submitted: &DigitGrid) -> bool {
    DailyPuzzle::generate(date).verify(submitted)
}

/// Verifies a submission supplied as a plain 9×9 integer grid.
///
/// Convenience wrapper for callers holding the boundary representation
/// (0 = empty); the grid is validated and converted before verification.
///
/// # Errors
///
/// Returns a [`GridError`] if `rows` is not exactly 9×9 with values 0-9.
pub fn verify_submission<R>(date: NaiveDate, rows: &[R]) -> Result<bool, GridError>
where
    R: AsRef<[u8]>,
{
    let submitted = DigitGrid::from_rows(rows)?;
    Ok(verify_solution(date, &submitted))
}

/// Returns `true` if every given of `puzzle` holds the identical digit in
/// `submitted`.
pub(crate) fn givens_preserved(puzzle: &DigitGrid, submitted: &DigitGrid) -> bool {
    Position::ALL.into_iter().all(|pos| match puzzle[pos] {
        Some(given) => submitted[pos] == Some(given),
        None => true,
    })
}
