//! Single-cell move feasibility checking.
//!
//! A move can be locally clean — no duplicate in its row, column, or box —
//! and still make the grid impossible to complete. Deciding feasibility
//! therefore requires the full backtracking search, not a neighborhood
//! inspection.

use daylace_core::{Digit, DigitGrid, Position};
use daylace_solver::{BacktrackSolver, SolveOutcome};
use derive_more::{Display, Error};

/// The tri-state answer of a budgeted feasibility check.
///
/// [`Feasibility::Undetermined`] is only produced when a step-limited solver
/// runs out of budget; it must not be treated as proven infeasibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feasibility {
    /// At least one complete valid solution exists after the move.
    Feasible,
    /// The search space was exhausted: no completion exists after the move.
    Infeasible,
    /// The solver's step limit was reached before a decision.
    Undetermined,
}

/// A feasibility request that violates the caller contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The targeted cell is a given of the puzzle and cannot be changed.
    #[display("cell ({x}, {y}) is a given and cannot be played")]
    GivenCell {
        /// Column index (0-8).
        x: u8,
        /// Row index (0-8).
        y: u8,
    },
}

/// Checks whether placing `digit` at `pos` on `current` still permits a
/// complete valid solution of `puzzle`.
///
/// The check works on a private copy of `current`: the puzzle's givens are
/// overlaid first (a given always wins over conflicting player input), the
/// tentative digit is applied, and the exhaustive search decides whether any
/// completion remains. Placing a digit equal to the cell's current value is
/// feasible exactly when the unchanged grid is still completable.
///
/// Infeasibility is an ordinary outcome of legitimate difficult puzzles and
/// is reported as `Ok(false)`, never as an error.
///
/// # Errors
///
/// Returns [`MoveError::GivenCell`] if `pos` is a given of `puzzle`;
/// callers are expected to reject such moves before asking.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use daylace_core::Position;
/// use daylace_daily::{DailyPuzzle, is_completion_feasible};
///
/// let bundle = DailyPuzzle::generate(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// let pos = Position::ALL.into_iter().find(|&p| !bundle.is_given(p)).unwrap();
/// let digit = bundle.solution[pos].unwrap();
///
/// // The canonical solution's digit always keeps the puzzle completable
/// let feasible =
///     is_completion_feasible(&bundle.puzzle, &bundle.puzzle, pos, digit).unwrap();
/// assert!(feasible);
/// ```
pub fn is_completion_feasible(
    puzzle: &DigitGrid,
    current: &DigitGrid,
    pos: Position,
    digit: Digit,
) -> Result<bool, MoveError> {
    let feasibility =
        is_completion_feasible_with(&BacktrackSolver::new(), puzzle, current, pos, digit)?;
    // The unlimited solver always decides
    Ok(feasibility == Feasibility::Feasible)
}

/// Like [`is_completion_feasible`], but with a caller-supplied solver.
///
/// With a step-limited solver the answer is a tri-state: limit exhaustion is
/// reported as [`Feasibility::Undetermined`] instead of being conflated with
/// proven infeasibility, so an external time budget can never misreport a
/// completable grid as dead.
///
/// # Errors
///
/// Returns [`MoveError::GivenCell`] if `pos` is a given of `puzzle`.
pub fn is_completion_feasible_with(
    solver: &BacktrackSolver,
    puzzle: &DigitGrid,
    current: &DigitGrid,
    pos: Position,
    digit: Digit,
) -> Result<Feasibility, MoveError> {
    if puzzle[pos].is_some() {
        return Err(MoveError::GivenCell {
            x: pos.x(),
            y: pos.y(),
        });
    }

    let mut working = current.clone();
    for given_pos in Position::ALL {
        if let Some(given) = puzzle[given_pos] {
            working[given_pos] = Some(given);
        }
    }
    working[pos] = Some(digit);

    Ok(match solver.solve(&working) {
        SolveOutcome::Solved(_) => Feasibility::Feasible,
        SolveOutcome::Unsolvable => Feasibility::Infeasible,
        SolveOutcome::LimitReached => Feasibility::Undetermined,
    })
}
