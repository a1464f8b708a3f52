use crate::consts::{
    CENTURY_CYCLE, DAYS_PER_YEAR, DEFAULT_WEEK_START, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_FISCAL_YEAR,
    MAX_WEEK, MIN_FISCAL_YEAR, MIN_WEEK,
};
use crate::prelude::*;
use crate::range::RangeError;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fiscal year, named after the calendar year it ends in.
///
/// Fiscal year `Y` runs from July 1 of `Y - 1` through June 30 of `Y`.
/// Resolving a date never fails, so any `i32` is a valid value here; only
/// week-range resolution insists on `MIN_FISCAL_YEAR..=MAX_FISCAL_YEAR`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, Display, From, Into,
)]
#[serde(transparent)]
pub struct FiscalYear(i32);

impl FiscalYear {
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the fiscal year as i32
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Whether a week range can be resolved for this year
    pub const fn is_resolvable(self) -> bool {
        self.0 >= MIN_FISCAL_YEAR && self.0 <= MAX_FISCAL_YEAR
    }
}

/// A work-week within a fiscal year, guaranteed to be in `MIN_WEEK..=MAX_WEEK` (1..=52)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "u8", into = "u8")]
pub struct FiscalWeek(u8);

impl FiscalWeek {
    /// Week 1, which also holds the late-June bridge days
    pub const FIRST: Self = Self(MIN_WEEK);
    /// Week 52, which absorbs any 53rd week
    pub const LAST: Self = Self(MAX_WEEK);

    /// Creates a new `FiscalWeek`, validating that it's in `MIN_WEEK..=MAX_WEEK`
    ///
    /// # Errors
    /// Returns `RangeError::WeekOutOfRange` if the value is 0 or > `MAX_WEEK`.
    pub const fn new(value: u8) -> Result<Self, RangeError> {
        if value < MIN_WEEK || value > MAX_WEEK {
            return Err(RangeError::WeekOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the week number as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Builds a week from an unbounded week index, clamping it into range
    pub(crate) fn clamped(index: i64) -> Self {
        let index = index.clamp(i64::from(MIN_WEEK), i64::from(MAX_WEEK));
        Self(u8::try_from(index).unwrap_or(MAX_WEEK))
    }
}

impl TryFrom<u8> for FiscalWeek {
    type Error = RangeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FiscalWeek> for u8 {
    fn from(week: FiscalWeek) -> Self {
        week.0
    }
}

/// The weekday fiscal weeks begin on.
///
/// The numeric form counts from Sunday: 0 = Sunday .. 6 = Saturday.
/// Defaults to Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeekStart(Weekday);

impl WeekStart {
    pub const SUNDAY: Self = Self(Weekday::Sun);
    pub const MONDAY: Self = Self(Weekday::Mon);
    pub const SATURDAY: Self = Self(Weekday::Sat);

    #[inline]
    pub const fn new(weekday: Weekday) -> Self {
        Self(weekday)
    }

    #[inline]
    pub const fn weekday(self) -> Weekday {
        self.0
    }

    /// Returns the Sunday-based number of this weekday (0..=6)
    pub const fn number(self) -> u8 {
        match self.0 {
            Weekday::Sun => 0,
            Weekday::Mon => 1,
            Weekday::Tue => 2,
            Weekday::Wed => 3,
            Weekday::Thu => 4,
            Weekday::Fri => 5,
            Weekday::Sat => 6,
        }
    }

    /// Iterates all seven week starts, Sunday first
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=6u8).filter_map(|n| Self::try_from(n).ok())
    }
}

impl Default for WeekStart {
    fn default() -> Self {
        Self::SATURDAY
    }
}

impl From<Weekday> for WeekStart {
    fn from(weekday: Weekday) -> Self {
        Self(weekday)
    }
}

impl From<WeekStart> for Weekday {
    fn from(week_start: WeekStart) -> Self {
        week_start.0
    }
}

impl TryFrom<u8> for WeekStart {
    type Error = RangeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let weekday = match value {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            DEFAULT_WEEK_START => Weekday::Sat,
            other => return Err(RangeError::InvalidWeekday(other)),
        };
        Ok(Self(weekday))
    }
}

impl From<WeekStart> for u8 {
    fn from(week_start: WeekStart) -> Self {
        week_start.number()
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Days from 0001-01-01 to January 1 of `year` in the proleptic Gregorian
/// calendar. Negative for years before 1.
pub(crate) const fn days_before_year(year: i64) -> i64 {
    let y = year - 1;
    y * DAYS_PER_YEAR + y.div_euclid(LEAP_YEAR_CYCLE) - y.div_euclid(CENTURY_CYCLE) + y.div_euclid(GREGORIAN_CYCLE)
}
