//! Seeded construction of canonical solved grids.

use daylace_core::{Digit, DigitGrid, Position};
use rand::{RngExt as _, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64Mcg;

/// The fixed base pattern `(3·y + ⌊y/3⌋ + x) mod 9 + 1`: a cyclic grid in
/// which every row, column, and box holds each digit exactly once.
#[expect(clippy::cast_possible_truncation)]
const BASE_PATTERN: [[u8; 9]; 9] = {
    let mut cells = [[0; 9]; 9];
    let mut y = 0;
    while y < 9 {
        let mut x = 0;
        while x < 9 {
            cells[y][x] = ((3 * y + y / 3 + x) % 9 + 1) as u8;
            x += 1;
        }
        y += 1;
    }
    cells
};

/// Generates the canonical solved grid for a seed.
///
/// Starting from the fixed base pattern, a seeded sequence of symmetry
/// operations is applied: digit relabeling, row permutations (whole bands
/// and rows within each band), the analogous column permutations, and an
/// optional transpose. Each operation maps valid grids to valid grids, so
/// the result is always a complete valid solution without any search.
///
/// The same seed always yields the same grid.
///
/// # Examples
///
/// ```
/// use daylace_generator::generate_solution;
///
/// let grid = generate_solution(7);
/// assert!(grid.is_valid_complete());
/// assert_eq!(grid, generate_solution(7));
/// ```
#[must_use]
pub fn generate_solution(seed: u64) -> DigitGrid {
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    let mut cells = BASE_PATTERN;

    relabel_digits(&mut cells, &mut rng);
    permute_rows(&mut cells, &mut rng);
    permute_columns(&mut cells, &mut rng);
    if rng.random() {
        transpose(&mut cells);
    }

    log::debug!("generated canonical solution for seed {seed}");
    to_grid(&cells)
}

/// Replaces every digit by its image under a random permutation of 1-9.
fn relabel_digits(cells: &mut [[u8; 9]; 9], rng: &mut Pcg64Mcg) {
    let mut labels: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    labels.shuffle(rng);
    for row in cells {
        for value in row {
            *value = labels[usize::from(*value) - 1];
        }
    }
}

/// Reorders rows: whole bands first, then rows within each band.
fn permute_rows(cells: &mut [[u8; 9]; 9], rng: &mut Pcg64Mcg) {
    let map = group_permutation(rng);
    let permuted = std::array::from_fn(|y| cells[map[y]]);
    *cells = permuted;
}

/// Reorders columns: whole stacks first, then columns within each stack.
fn permute_columns(cells: &mut [[u8; 9]; 9], rng: &mut Pcg64Mcg) {
    let map = group_permutation(rng);
    for row in cells {
        let permuted = std::array::from_fn(|x| row[map[x]]);
        *row = permuted;
    }
}

/// Draws a permutation of 0-8 that only reorders whole groups of three and
/// elements within a group. Applied to rows or columns, such a permutation
/// preserves sudoku validity.
fn group_permutation(rng: &mut Pcg64Mcg) -> [usize; 9] {
    let mut groups = [0_usize, 1, 2];
    groups.shuffle(rng);

    let mut map = [0_usize; 9];
    for (dst_group, &src_group) in groups.iter().enumerate() {
        let mut members = [0_usize, 1, 2];
        members.shuffle(rng);
        for (i, &member) in members.iter().enumerate() {
            map[dst_group * 3 + i] = src_group * 3 + member;
        }
    }
    map
}

/// Mirrors the grid along its main diagonal.
fn transpose(cells: &mut [[u8; 9]; 9]) {
    for y in 0..9 {
        for x in 0..y {
            let tmp = cells[y][x];
            cells[y][x] = cells[x][y];
            cells[x][y] = tmp;
        }
    }
}

fn to_grid(cells: &[[u8; 9]; 9]) -> DigitGrid {
    let mut grid = DigitGrid::new();
    for pos in Position::ALL {
        let value = cells[usize::from(pos.y())][usize::from(pos.x())];
        grid[pos] = Some(Digit::from_value(value));
    }
    grid
}
