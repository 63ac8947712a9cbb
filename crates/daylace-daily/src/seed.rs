//! Date-based seed and difficulty derivation.

use chrono::{Datelike as _, NaiveDate};
use daylace_generator::Difficulty;
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

/// Odd multiplier applied to the ordinal day count so adjacent days get
/// decorrelated seeds.
const SEED_MULTIPLIER: u64 = 31337;

/// English weekday names indexed by days since Monday.
const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Derives the puzzle seed for a date.
///
/// The seed is the date's ordinal day count (days since 0001-01-01 in the
/// proleptic Gregorian calendar) times a fixed odd multiplier. The same
/// date always produces the same seed.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use daylace_daily::seed_for;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(seed_for(date), 23_154_470_582);
/// ```
#[must_use]
#[expect(clippy::cast_sign_loss)]
pub fn seed_for(date: NaiveDate) -> u64 {
    (i64::from(date.num_days_from_ce()) as u64).wrapping_mul(SEED_MULTIPLIER)
}

/// Selects the difficulty tier for a date.
///
/// A [`Pcg64Mcg`] seeded with [`seed_for`] picks uniformly among the four
/// tiers with its first draw, so the tier and the puzzle content derived
/// from the same seed can never diverge for a date.
#[must_use]
pub fn difficulty_for(date: NaiveDate) -> Difficulty {
    let mut rng = Pcg64Mcg::seed_from_u64(seed_for(date));
    Difficulty::ALL[rng.random_range(0..Difficulty::ALL.len())]
}

/// Returns the English weekday name for a date.
#[must_use]
#[expect(clippy::cast_possible_truncation)]
pub fn day_of_week(date: NaiveDate) -> &'static str {
    DAY_NAMES[date.weekday().num_days_from_monday() as usize]
}
