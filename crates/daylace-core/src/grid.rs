//! The 9×9 grid of optional digits.

use std::{
    fmt::{self, Display, Write as _},
    ops::{Index, IndexMut},
    str::FromStr,
};

use derive_more::{Display, Error};

use crate::{digit::Digit, digit_set::DigitSet, house::House, position::Position};

/// A 9×9 sudoku grid where each cell holds an optional digit.
///
/// `None` represents an empty cell. At the boundary with callers the grid is
/// exchanged as a plain 9×9 array of integers 0-9 (0 = empty) via
/// [`DigitGrid::from_rows`] and [`DigitGrid::to_rows`]; malformed input is
/// rejected with a [`GridError`] rather than truncated or padded.
///
/// # Examples
///
/// ```
/// use daylace_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// assert_eq!(grid.count_empty(), 81);
///
/// grid[Position::new(3, 0)] = Some(Digit::D7);
/// assert_eq!(grid[Position::new(3, 0)], Some(Digit::D7));
/// ```
///
/// Grids can also be parsed from a compact text form where `1`-`9` are
/// digits, `_`, `.`, or `0` are empty cells, and whitespace is ignored:
///
/// ```
/// use daylace_core::DigitGrid;
///
/// let grid: DigitGrid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()
/// .unwrap();
/// assert_eq!(grid.count_empty(), 51);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates a new grid with all cells empty.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Converts a plain 9×9 integer grid into a `DigitGrid`.
    ///
    /// Accepts any slice-of-rows representation (nested arrays, vectors of
    /// vectors) with exactly 9 rows of exactly 9 cells each, every cell in
    /// 0-9, where 0 means an empty cell.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] describing the first violation if the input
    /// is not exactly 9×9 or contains a value outside 0-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use daylace_core::{DigitGrid, GridError};
    ///
    /// let rows = vec![vec![0_u8; 9]; 9];
    /// let grid = DigitGrid::from_rows(&rows).unwrap();
    /// assert_eq!(grid.count_empty(), 81);
    ///
    /// let short = vec![vec![0_u8; 9]; 8];
    /// assert_eq!(
    ///     DigitGrid::from_rows(&short),
    ///     Err(GridError::RowCount { found: 8 })
    /// );
    /// ```
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, GridError>
    where
        R: AsRef<[u8]>,
    {
        if rows.len() != 9 {
            return Err(GridError::RowCount { found: rows.len() });
        }
        let mut grid = Self::new();
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != 9 {
                return Err(GridError::RowLength {
                    y,
                    found: row.len(),
                });
            }
            for (x, &value) in row.iter().enumerate() {
                grid.cells[y * 9 + x] = match value {
                    0 => None,
                    _ => Some(Digit::try_from_value(value).ok_or(GridError::CellValue {
                        x,
                        y,
                        value,
                    })?),
                };
            }
        }
        Ok(grid)
    }

    /// Converts the grid back into a plain 9×9 integer array, with 0 for
    /// empty cells.
    #[must_use]
    pub fn to_rows(&self) -> [[u8; 9]; 9] {
        std::array::from_fn(|y| std::array::from_fn(|x| self.cells[y * 9 + x].map_or(0, Digit::value)))
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Checks whether this grid is a valid, complete sudoku solution.
    ///
    /// A grid passes when every cell holds a digit and each of the 9 rows,
    /// 9 columns, and 9 boxes contains 9 distinct digits. Returns `false`
    /// on the first violation found; has no side effects.
    ///
    /// # Examples
    ///
    /// ```
    /// use daylace_core::{DigitGrid, Position};
    ///
    /// let mut grid: DigitGrid = "
    ///     123 456 789
    ///     456 789 123
    ///     789 123 456
    ///     234 567 891
    ///     567 891 234
    ///     891 234 567
    ///     345 678 912
    ///     678 912 345
    ///     912 345 678
    /// "
    /// .parse()
    /// .unwrap();
    /// assert!(grid.is_valid_complete());
    ///
    /// grid[Position::new(0, 0)] = None;
    /// assert!(!grid.is_valid_complete());
    /// ```
    #[must_use]
    pub fn is_valid_complete(&self) -> bool {
        for house in House::ALL {
            let mut seen = DigitSet::EMPTY;
            for pos in house.positions() {
                let Some(digit) = self[pos] else {
                    return false;
                };
                if seen.contains(digit) {
                    return false;
                }
                seen.insert(digit);
            }
        }
        true
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for DigitGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Option<Digit> {
        &mut self.cells[pos.index()]
    }
}

impl TryFrom<[[u8; 9]; 9]> for DigitGrid {
    type Error = GridError;

    fn try_from(rows: [[u8; 9]; 9]) -> Result<Self, GridError> {
        Self::from_rows(&rows)
    }
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    #[expect(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        let mut grid = Self::new();
        let mut count = 0;
        for character in s.chars() {
            if character.is_whitespace() {
                continue;
            }
            let cell = match character {
                '_' | '.' | '0' => None,
                '1'..='9' => {
                    let value = character as u8 - b'0';
                    Some(Digit::from_value(value))
                }
                _ => return Err(ParseGridError::InvalidCharacter { character }),
            };
            if count < 81 {
                grid.cells[count] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::CellCount { found: count });
        }
        Ok(grid)
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            if y > 0 {
                f.write_char('\n')?;
            }
            for x in 0..9 {
                if x > 0 && x % 3 == 0 {
                    f.write_char(' ')?;
                }
                match self[Position::new(x, y)] {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_char('_')?,
                }
            }
        }
        Ok(())
    }
}

/// A malformed plain-array grid passed across the boundary.
///
/// Boundary conversion fails fast on the first violation; partial data is
/// never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// The input does not have exactly 9 rows.
    #[display("invalid grid: expected 9 rows, found {found}")]
    RowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row does not have exactly 9 cells.
    #[display("invalid grid: row {y} has {found} cells, expected 9")]
    RowLength {
        /// Row index (0-8).
        y: usize,
        /// Number of cells found in the row.
        found: usize,
    },
    /// A cell holds a value outside 0-9.
    #[display("invalid grid: cell ({x}, {y}) holds {value}, expected 0-9")]
    CellValue {
        /// Column index (0-8).
        x: usize,
        /// Row index (0-8).
        y: usize,
        /// The offending value.
        value: u8,
    },
}

/// A grid text form that could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseGridError {
    /// A character that is not a digit, placeholder, or whitespace.
    #[display("invalid character {character:?} in grid text")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
    /// The text does not describe exactly 81 cells.
    #[display("grid text has {found} cells, expected 81")]
    CellCount {
        /// Number of cells found.
        found: usize,
    },
}

#[cfg(feature = "serde")]
impl serde::Serialize for DigitGrid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_rows().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DigitGrid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rows = <[[u8; 9]; 9]>::deserialize(deserializer)?;
        Self::try_from(rows).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use proptest::{array::uniform9, prelude::*};

    use super::*;

    /// The cyclic base grid; valid by construction.
    const VALID_COMPLETE: &str = "
        123 456 789
        456 789 123
        789 123 456
        234 567 891
        567 891 234
        891 234 567
        345 678 912
        678 912 345
        912 345 678
    ";

    fn valid_grid() -> DigitGrid {
        VALID_COMPLETE.parse().unwrap()
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = DigitGrid::new();
        assert_eq!(grid.count_empty(), 81);
        assert!(!grid.is_complete());
        assert!(!grid.is_valid_complete());
    }

    #[test]
    fn test_index_round_trip() {
        let mut grid = DigitGrid::new();
        grid[Position::new(4, 7)] = Some(Digit::D3);
        assert_eq!(grid[Position::new(4, 7)], Some(Digit::D3));
        assert_eq!(grid[Position::new(7, 4)], None);
        assert_eq!(grid.count_empty(), 80);
    }

    #[test]
    fn test_valid_complete_accepted() {
        let grid = valid_grid();
        assert!(grid.is_complete());
        assert!(grid.is_valid_complete());
    }

    #[test]
    fn test_incomplete_grid_rejected() {
        let mut grid = valid_grid();
        grid[Position::new(8, 8)] = None;
        assert!(!grid.is_valid_complete());
    }

    #[test]
    fn test_row_duplicate_rejected() {
        let mut grid = valid_grid();
        // Row 0 now holds two 2s
        grid[Position::new(0, 0)] = Some(Digit::D2);
        assert!(!grid.is_valid_complete());
    }

    #[test]
    fn test_column_duplicate_rejected() {
        let mut grid = valid_grid();
        // Swap the first two cells of row 0: rows and boxes stay distinct,
        // but columns 0 and 1 each gain a duplicate
        grid[Position::new(0, 0)] = Some(Digit::D2);
        grid[Position::new(1, 0)] = Some(Digit::D1);
        assert!(!grid.is_valid_complete());
    }

    #[test]
    fn test_box_duplicate_rejected() {
        // A Latin square that shifts by one per row: all rows and columns
        // are distinct, but every box has duplicates
        let grid: DigitGrid = "
            123 456 789
            234 567 891
            345 678 912
            456 789 123
            567 891 234
            678 912 345
            789 123 456
            891 234 567
            912 345 678
        "
        .parse()
        .unwrap();
        assert!(!grid.is_valid_complete());
    }

    #[test]
    fn test_from_rows_shape_errors() {
        let short: Vec<Vec<u8>> = vec![vec![0; 9]; 8];
        assert_eq!(
            DigitGrid::from_rows(&short),
            Err(GridError::RowCount { found: 8 })
        );

        let long: Vec<Vec<u8>> = vec![vec![0; 9]; 10];
        assert_eq!(
            DigitGrid::from_rows(&long),
            Err(GridError::RowCount { found: 10 })
        );

        let mut ragged: Vec<Vec<u8>> = vec![vec![0; 9]; 9];
        ragged[4] = vec![0; 8];
        assert_eq!(
            DigitGrid::from_rows(&ragged),
            Err(GridError::RowLength { y: 4, found: 8 })
        );
    }

    #[test]
    fn test_from_rows_value_error() {
        let mut rows = [[0_u8; 9]; 9];
        rows[2][5] = 12;
        assert_eq!(
            DigitGrid::from_rows(&rows),
            Err(GridError::CellValue {
                x: 5,
                y: 2,
                value: 12
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            DigitGrid::from_str("x"),
            Err(ParseGridError::InvalidCharacter { character: 'x' })
        );
        assert_eq!(
            DigitGrid::from_str("123"),
            Err(ParseGridError::CellCount { found: 3 })
        );
    }

    #[test]
    fn test_display_parse_round_trip() {
        let grid = valid_grid();
        let text = grid.to_string();
        assert_eq!(text.parse::<DigitGrid>().unwrap(), grid);

        let mut partial = grid.clone();
        partial[Position::new(0, 0)] = None;
        let text = partial.to_string();
        assert!(text.starts_with("_23 456 789"));
        assert_eq!(text.parse::<DigitGrid>().unwrap(), partial);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GridError::RowCount { found: 3 }.to_string(),
            "invalid grid: expected 9 rows, found 3"
        );
        assert_eq!(
            GridError::CellValue {
                x: 1,
                y: 2,
                value: 42
            }
            .to_string(),
            "invalid grid: cell (1, 2) holds 42, expected 0-9"
        );
    }

    proptest! {
        #[test]
        fn test_rows_round_trip(rows in uniform9(uniform9(0_u8..=9))) {
            let grid = DigitGrid::from_rows(&rows).unwrap();
            prop_assert_eq!(grid.to_rows(), rows);
        }

        #[test]
        fn test_out_of_range_value_rejected(
            mut rows in uniform9(uniform9(0_u8..=9)),
            x in 0_usize..9,
            y in 0_usize..9,
            value in 10_u8..,
        ) {
            rows[y][x] = value;
            prop_assert!(DigitGrid::from_rows(&rows).is_err());
        }
    }
}
