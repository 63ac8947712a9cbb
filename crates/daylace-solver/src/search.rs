//! Depth-first backtracking search with fewest-candidates-first branching.

use daylace_core::{Digit, DigitGrid, DigitSet, Position};
use derive_more::IsVariant;

/// The result of a [`BacktrackSolver`] run.
#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum SolveOutcome {
    /// A complete valid solution was found.
    Solved(DigitGrid),
    /// The search space was exhausted without finding a solution: no
    /// completion of the input grid exists.
    Unsolvable,
    /// The configured step limit was reached before the search could decide
    /// either way. This is an ordinary outcome, not an error, and must not
    /// be interpreted as proven unsolvability.
    LimitReached,
}

impl SolveOutcome {
    /// Returns the solution grid, if one was found.
    #[must_use]
    pub fn into_solution(self) -> Option<DigitGrid> {
        match self {
            SolveOutcome::Solved(grid) => Some(grid),
            SolveOutcome::Unsolvable | SolveOutcome::LimitReached => None,
        }
    }
}

/// A solver that finds one completion of a partial grid, or proves none
/// exists, by exhaustive constrained search.
///
/// At every node the solver branches on the empty cell with the fewest legal
/// candidates (the digits not yet used in the cell's row, column, or box).
/// A cell with zero candidates prunes the branch immediately, so assignments
/// that are locally clean but globally dead are still detected.
///
/// An optional step limit bounds worst-case search time; when it is reached
/// the solver reports [`SolveOutcome::LimitReached`] instead of guessing.
/// The default solver is unlimited, which always terminates on 9×9 grids.
///
/// # Examples
///
/// ```
/// use daylace_core::DigitGrid;
/// use daylace_solver::{BacktrackSolver, SolveOutcome};
///
/// let solver = BacktrackSolver::new();
///
/// // An empty grid has many completions; the solver finds one
/// let outcome = solver.solve(&DigitGrid::new());
/// assert!(outcome.is_solved());
///
/// // A bounded solver gives up explicitly instead of running on
/// let bounded = BacktrackSolver::with_step_limit(3);
/// assert_eq!(bounded.solve(&DigitGrid::new()), SolveOutcome::LimitReached);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BacktrackSolver {
    step_limit: Option<u64>,
}

impl BacktrackSolver {
    /// Creates a solver with no step limit.
    #[must_use]
    pub const fn new() -> Self {
        Self { step_limit: None }
    }

    /// Creates a solver that stops after `limit` placement attempts.
    #[must_use]
    pub const fn with_step_limit(limit: u64) -> Self {
        Self {
            step_limit: Some(limit),
        }
    }

    /// Searches for a completion of `grid`.
    ///
    /// Cells already filled in `grid` are kept fixed. If they conflict with
    /// each other the grid has no completion and the outcome is
    /// [`SolveOutcome::Unsolvable`] without any search.
    #[must_use]
    pub fn solve(&self, grid: &DigitGrid) -> SolveOutcome {
        let Some(mut state) = SearchState::seed(grid) else {
            return SolveOutcome::Unsolvable;
        };
        match state.search(self.step_limit) {
            Ok(true) => {
                log::trace!("search found a completion after {} steps", state.steps);
                SolveOutcome::Solved(state.grid)
            }
            Ok(false) => {
                log::trace!("search space exhausted after {} steps", state.steps);
                SolveOutcome::Unsolvable
            }
            Err(StepLimitExceeded) => SolveOutcome::LimitReached,
        }
    }

    /// Returns `true` if at least one completion of `grid` exists.
    ///
    /// With a step limit configured, `false` may also mean the limit was
    /// reached; use [`BacktrackSolver::solve`] to distinguish the two.
    #[must_use]
    pub fn is_solvable(&self, grid: &DigitGrid) -> bool {
        self.solve(grid).is_solved()
    }
}

struct StepLimitExceeded;

/// Working state for one search: a private grid copy plus per-house
/// used-digit masks kept in sync with it.
struct SearchState {
    grid: DigitGrid,
    rows: [DigitSet; 9],
    columns: [DigitSet; 9],
    boxes: [DigitSet; 9],
    steps: u64,
}

impl SearchState {
    /// Builds the house masks from the filled cells of `grid`, returning
    /// `None` if two filled cells already conflict.
    fn seed(grid: &DigitGrid) -> Option<Self> {
        let mut state = Self {
            grid: grid.clone(),
            rows: [DigitSet::EMPTY; 9],
            columns: [DigitSet::EMPTY; 9],
            boxes: [DigitSet::EMPTY; 9],
            steps: 0,
        };
        for pos in Position::ALL {
            if let Some(digit) = state.grid[pos] {
                if state.used_at(pos).contains(digit) {
                    return None;
                }
                state.mark(pos, digit);
            }
        }
        Some(state)
    }

    fn used_at(&self, pos: Position) -> DigitSet {
        self.rows[usize::from(pos.y())]
            | self.columns[usize::from(pos.x())]
            | self.boxes[usize::from(pos.box_index())]
    }

    fn mark(&mut self, pos: Position, digit: Digit) {
        self.rows[usize::from(pos.y())].insert(digit);
        self.columns[usize::from(pos.x())].insert(digit);
        self.boxes[usize::from(pos.box_index())].insert(digit);
    }

    fn unmark(&mut self, pos: Position, digit: Digit) {
        self.rows[usize::from(pos.y())].remove(digit);
        self.columns[usize::from(pos.x())].remove(digit);
        self.boxes[usize::from(pos.box_index())].remove(digit);
    }

    /// Returns the empty cell with the fewest legal candidates, or `None`
    /// if the grid is complete. A zero-candidate cell short-circuits the
    /// scan: no other cell can make the branch viable.
    fn most_constrained_cell(&self) -> Option<(Position, DigitSet)> {
        let mut best: Option<(Position, DigitSet)> = None;
        for pos in Position::ALL {
            if self.grid[pos].is_some() {
                continue;
            }
            let candidates = self.used_at(pos).complement();
            if best.is_none_or(|(_, b)| candidates.len() < b.len()) {
                best = Some((pos, candidates));
                if candidates.is_empty() {
                    break;
                }
            }
        }
        best
    }

    fn search(&mut self, limit: Option<u64>) -> Result<bool, StepLimitExceeded> {
        let Some((pos, candidates)) = self.most_constrained_cell() else {
            return Ok(true);
        };
        for digit in candidates.iter() {
            self.steps += 1;
            if limit.is_some_and(|limit| self.steps > limit) {
                return Err(StepLimitExceeded);
            }
            self.grid[pos] = Some(digit);
            self.mark(pos, digit);
            if self.search(limit)? {
                return Ok(true);
            }
            self.grid[pos] = None;
            self.unmark(pos, digit);
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIKIPEDIA_PUZZLE: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";

    const WIKIPEDIA_SOLUTION: &str = "
        534 678 912
        672 195 348
        198 342 567
        859 761 423
        426 853 791
        713 924 856
        961 537 284
        287 419 635
        345 286 179
    ";

    #[test]
    fn test_solves_unique_puzzle() {
        let puzzle: DigitGrid = WIKIPEDIA_PUZZLE.parse().unwrap();
        let expected: DigitGrid = WIKIPEDIA_SOLUTION.parse().unwrap();

        let outcome = BacktrackSolver::new().solve(&puzzle);
        assert_eq!(outcome, SolveOutcome::Solved(expected));
    }

    #[test]
    fn test_solution_preserves_filled_cells() {
        let puzzle: DigitGrid = WIKIPEDIA_PUZZLE.parse().unwrap();
        let solution = BacktrackSolver::new()
            .solve(&puzzle)
            .into_solution()
            .unwrap();

        for pos in Position::ALL {
            if let Some(digit) = puzzle[pos] {
                assert_eq!(solution[pos], Some(digit));
            }
        }
    }

    #[test]
    fn test_solves_empty_grid() {
        let solution = BacktrackSolver::new()
            .solve(&DigitGrid::new())
            .into_solution()
            .unwrap();
        assert!(solution.is_valid_complete());
    }

    #[test]
    fn test_complete_valid_grid_is_its_own_solution() {
        let grid: DigitGrid = "
            123 456 789
            456 789 123
            789 123 456
            234 567 891
            567 891 234
            891 234 567
            345 678 912
            678 912 345
            912 345 678
        "
        .parse()
        .unwrap();

        assert_eq!(
            BacktrackSolver::new().solve(&grid),
            SolveOutcome::Solved(grid)
        );
    }

    #[test]
    fn test_conflicting_cells_unsolvable() {
        let mut grid = DigitGrid::new();
        grid[Position::new(0, 0)] = Some(Digit::D5);
        grid[Position::new(8, 0)] = Some(Digit::D5);

        assert_eq!(BacktrackSolver::new().solve(&grid), SolveOutcome::Unsolvable);
    }

    #[test]
    fn test_dead_end_without_local_conflict_unsolvable() {
        // Row 0 needs a 9 in its last cell, but column 8 already has one
        // further down. No two filled cells conflict directly.
        let mut grid = DigitGrid::new();
        for x in 0..8 {
            grid[Position::new(x, 0)] = Some(Digit::from_value(x + 1));
        }
        grid[Position::new(8, 4)] = Some(Digit::D9);

        assert_eq!(BacktrackSolver::new().solve(&grid), SolveOutcome::Unsolvable);
    }

    #[test]
    fn test_step_limit_reported() {
        // 51 empty cells need at least 51 placements; 10 steps cannot finish
        let puzzle: DigitGrid = WIKIPEDIA_PUZZLE.parse().unwrap();
        assert_eq!(
            BacktrackSolver::with_step_limit(10).solve(&puzzle),
            SolveOutcome::LimitReached
        );
    }

    #[test]
    fn test_is_solvable() {
        let puzzle: DigitGrid = WIKIPEDIA_PUZZLE.parse().unwrap();
        assert!(BacktrackSolver::new().is_solvable(&puzzle));

        let mut conflicted = puzzle;
        conflicted[Position::new(2, 0)] = Some(Digit::D5);
        assert!(!BacktrackSolver::new().is_solvable(&conflicted));
    }
}
