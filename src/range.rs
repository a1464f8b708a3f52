use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    MAX_FISCAL_YEAR, MAX_WEEK, MIN_FISCAL_YEAR, MIN_WEEK,
    boundary::{bridge_week_start, day_number, first_week_start, to_date},
    codec::YearMonthCode,
    consts::DAYS_PER_WEEK,
    prelude::*,
    types::{FiscalWeek, FiscalYear, WeekStart},
};

/// The inclusive range of calendar dates one fiscal week covers.
///
/// Only [`week_range`] builds these, so a range always starts on a week-start
/// weekday and spans seven days, or fourteen for a week 52 that absorbs a
/// 53rd week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct FiscalWeekRange {
    start: NaiveDate,
    end:   NaiveDate,
}

/// Error type for week and range resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Week number outside `MIN_WEEK..=MAX_WEEK`.
    #[error("Invalid week: {0} (must be {min}-{max})", min = MIN_WEEK, max = MAX_WEEK)]
    WeekOutOfRange(u8),

    /// Fiscal year outside `MIN_FISCAL_YEAR..=MAX_FISCAL_YEAR`.
    #[error("Invalid fiscal year: {0} (must be {min}-{max})", min = MIN_FISCAL_YEAR, max = MAX_FISCAL_YEAR)]
    YearOutOfRange(i32),

    /// Weekday number outside 0..=6.
    #[error("Invalid weekday: {0} (must be 0-6, Sunday first)")]
    InvalidWeekday(u8),

    /// A computed day number has no calendar date.
    #[error("Day number {0} is outside the supported date range")]
    DateOutOfRange(i64),
}

/// Returns the inclusive date range of week `week` of fiscal year
/// `fiscal_year`.
///
/// Week 1 runs from the last week-start weekday of June before the fiscal
/// year through the day before the first week start in July. Each later week
/// is seven days, except that week 52 runs up to the next fiscal year's
/// week 1: in years where [`week_number`](crate::week_number) clamps a 53rd
/// week onto 52, that week's days are covered here too.
///
/// # Errors
/// Returns `RangeError::YearOutOfRange` if `fiscal_year` is outside
/// `MIN_FISCAL_YEAR..=MAX_FISCAL_YEAR`, and `RangeError::WeekOutOfRange` if
/// `week` is outside `MIN_WEEK..=MAX_WEEK`.
pub fn week_range(fiscal_year: i32, week: u8, week_start: WeekStart) -> Result<FiscalWeekRange, RangeError> {
    if !FiscalYear::new(fiscal_year).is_resolvable() {
        return Err(RangeError::YearOutOfRange(fiscal_year));
    }
    let week = FiscalWeek::new(week)?;

    // Fiscal year Y starts in July of Y - 1
    let start_year = i64::from(fiscal_year) - 1;
    let first = first_week_start(start_year, week_start);

    let (start, end) = if week == FiscalWeek::FIRST {
        (first - DAYS_PER_WEEK, first - 1)
    } else {
        let start = first + (i64::from(week.get()) - 2) * DAYS_PER_WEEK;
        let end = if week == FiscalWeek::LAST {
            bridge_week_start(start_year + 1, week_start) - 1
        } else {
            start + DAYS_PER_WEEK - 1
        };
        (start, end)
    };

    FiscalWeekRange::from_day_numbers(start, end)
}

impl FiscalWeekRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub(crate) fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    fn from_day_numbers(start: i64, end: i64) -> Result<Self, RangeError> {
        let start = to_date(start).ok_or(RangeError::DateOutOfRange(start))?;
        let end = to_date(end).ok_or(RangeError::DateOutOfRange(end))?;
        Self::new(start, end)
    }

    /// Returns the first date of the range
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last date of the range (inclusive)
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    /// Checks if the range contains a given date
    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Number of days in the range, both ends included
    pub fn num_days(&self) -> i64 {
        day_number(self.end) - day_number(self.start) + 1
    }

    /// Iterates every date in the range, in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }

    /// The `YYMM` code of the range's start date
    pub fn year_month_code(&self) -> YearMonthCode {
        YearMonthCode::from_date(self.start)
    }
}

impl Serialize for FiscalWeekRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
