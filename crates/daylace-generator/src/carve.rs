//! Seeded carving of puzzles from solved grids.

use daylace_core::{DigitGrid, Position};
use rand::{SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64Mcg;
use tinyvec::ArrayVec;

/// Removes cells from a solved grid to produce a puzzle.
///
/// Exactly `round(81 × empty_fraction)` cells are blanked, chosen as the
/// leading prefix of a seeded shuffle of all 81 coordinates, so the same
/// seed and fraction always blank the same cells. The remaining cells are
/// the puzzle's givens.
///
/// Carving never adds or changes digits, so the input solution remains one
/// valid completion of the carved puzzle. A unique completion is not
/// guaranteed; any valid completion of the givens counts as solving the
/// puzzle.
///
/// # Panics
///
/// Panics if `empty_fraction` is not in the range 0.0-1.0.
///
/// # Examples
///
/// ```
/// use daylace_generator::{carve, generate_solution};
///
/// let solution = generate_solution(1);
/// let puzzle = carve(&solution, 1, 0.5);
/// assert_eq!(puzzle.count_empty(), 41);
/// ```
#[must_use]
pub fn carve(solution: &DigitGrid, seed: u64, empty_fraction: f64) -> DigitGrid {
    assert!(
        (0.0..=1.0).contains(&empty_fraction),
        "empty_fraction must be in 0.0-1.0, got {empty_fraction}"
    );

    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    let mut cells: ArrayVec<[Position; 81]> = Position::ALL.into_iter().collect();
    cells.shuffle(&mut rng);

    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let empty_count = (81.0 * empty_fraction).round() as usize;

    let mut puzzle = solution.clone();
    for &pos in cells.iter().take(empty_count) {
        puzzle[pos] = None;
    }
    log::debug!("carved {empty_count} cells (seed {seed})");
    puzzle
}

#[cfg(test)]
mod tests {
    use daylace_solver::BacktrackSolver;

    use super::*;
    use crate::{difficulty::Difficulty, solution::generate_solution};

    #[test]
    fn test_empty_cell_counts_per_tier() {
        let solution = generate_solution(5);
        for tier in Difficulty::ALL {
            let puzzle = carve(&solution, 5, tier.empty_fraction());
            assert_eq!(puzzle.count_empty(), tier.empty_cell_count());
        }
    }

    #[test]
    fn test_carving_is_deterministic() {
        let solution = generate_solution(99);
        assert_eq!(
            carve(&solution, 99, 0.6),
            carve(&solution, 99, 0.6)
        );
    }

    #[test]
    fn test_distinct_seeds_blank_distinct_cells() {
        let solution = generate_solution(3);
        let a = carve(&solution, 3, 0.5);
        let b = carve(&solution, 4, 0.5);
        assert_ne!(a, b);
    }

    #[test]
    fn test_givens_match_solution() {
        let solution = generate_solution(17);
        let puzzle = carve(&solution, 17, 0.7);
        for pos in Position::ALL {
            if let Some(digit) = puzzle[pos] {
                assert_eq!(Some(digit), solution[pos]);
            }
        }
    }

    #[test]
    fn test_carved_puzzle_remains_solvable() {
        // The canonical solution is always one completion of the carved
        // puzzle, so carving can never produce an unsolvable grid
        for tier in Difficulty::ALL {
            let solution = generate_solution(23);
            let puzzle = carve(&solution, 23, tier.empty_fraction());
            assert!(BacktrackSolver::new().is_solvable(&puzzle));
        }
    }

    #[test]
    fn test_extreme_fractions() {
        let solution = generate_solution(8);
        assert_eq!(carve(&solution, 8, 0.0), solution);
        assert_eq!(carve(&solution, 8, 1.0).count_empty(), 81);
    }

    #[test]
    #[should_panic(expected = "empty_fraction must be in 0.0-1.0")]
    fn test_out_of_range_fraction_panics() {
        let solution = generate_solution(8);
        let _ = carve(&solution, 8, 1.5);
    }
}
