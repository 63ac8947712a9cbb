//! Difficulty tiers and their empty-cell fractions.

use std::fmt::{self, Display};

/// A difficulty tier for a carved puzzle.
///
/// Each tier maps to a fixed fraction of cells removed from the canonical
/// solution; more empty cells make a harder puzzle. The derive ordering
/// follows increasing difficulty.
///
/// # Examples
///
/// ```
/// use daylace_generator::Difficulty;
///
/// assert_eq!(Difficulty::Easy.empty_fraction(), 0.4);
/// assert_eq!(Difficulty::Expert.label(), "expert");
/// assert!(Difficulty::Easy < Difficulty::Hard);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum Difficulty {
    /// 40% of cells removed.
    Easy,
    /// 50% of cells removed.
    Medium,
    /// 60% of cells removed.
    Hard,
    /// 70% of cells removed.
    Expert,
}

impl Difficulty {
    /// Array containing all tiers in increasing difficulty order.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// Returns the fraction of cells removed when carving at this tier.
    #[must_use]
    pub const fn empty_fraction(self) -> f64 {
        match self {
            Self::Easy => 0.4,
            Self::Medium => 0.5,
            Self::Hard => 0.6,
            Self::Expert => 0.7,
        }
    }

    /// Returns the number of cells blanked at this tier,
    /// `round(81 × empty_fraction)`.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn empty_cell_count(self) -> usize {
        (81.0 * self.empty_fraction()).round() as usize
    }

    /// Returns the lowercase display label for this tier.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
