//! July-start fiscal calendar.
//!
//! Maps calendar dates to fiscal years and work-weeks and back. Fiscal year
//! `Y` runs from July 1 of `Y - 1` through June 30 of `Y`; weeks start on a
//! configurable weekday (Saturday by default).
//!
//! | Direction | Entry points |
//! |-----------|--------------|
//! | date → period | [`week_number`], [`fiscal_year`], [`fiscal_period`] |
//! | period → dates | [`week_range`], [`FiscalPeriod::range`] |
//! | text ↔ period | [`format_period`], [`parse_compact`], [`parse_period`] |
//! | period → `YYMM` | [`to_year_month_code`] |
//!
//! [`FiscalCalendar`] bundles the week-start setting for callers that carry
//! it around as configuration.
//!
//! ```
//! use chrono::NaiveDate;
//! use fiscal_week::{FiscalCalendar, PeriodStyle};
//!
//! let calendar = FiscalCalendar::default();
//! let date = NaiveDate::from_ymd_opt(2024, 8, 15).unwrap();
//! let period = calendar.fiscal_period(date);
//! assert_eq!(period.format(PeriodStyle::Dashed), "2025-07");
//! ```

mod boundary;
mod calendar;
mod codec;
mod consts;
mod prelude;
mod range;
mod types;
mod week;
mod year;

#[cfg(test)]
mod test_utils;

pub use boundary::{first_occurrence_on_or_after, first_week_start_date, is_bridge_day, last_occurrence_in_june};
pub use calendar::FiscalCalendar;
pub use codec::{
    FormatError, PeriodStyle, YearMonthCode, format_parts, format_period, parse_compact, parse_period,
    to_year_month_code,
};
pub use consts::*;
pub use range::{FiscalWeekRange, RangeError, week_range};
pub use types::{FiscalWeek, FiscalYear, WeekStart, is_leap_year};
pub use week::week_number;
pub use year::{fiscal_period, fiscal_year};

use crate::prelude::*;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A fiscal year paired with one of its weeks: the unit records are tagged
/// and reported by.
///
/// Displays as the compact `YYYYWW` key and orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}{:02}", "year.get()", "week.get()")]
pub struct FiscalPeriod {
    year: FiscalYear,
    week: FiscalWeek,
}

impl FiscalPeriod {
    /// Creates a period from already validated parts
    pub const fn new(year: FiscalYear, week: FiscalWeek) -> Self {
        Self { year, week }
    }

    /// Creates a period from raw integers.
    ///
    /// # Errors
    /// Returns `RangeError::WeekOutOfRange` if `week` is outside `MIN_WEEK..=MAX_WEEK`.
    pub const fn try_new(year: i32, week: u8) -> Result<Self, RangeError> {
        match FiscalWeek::new(week) {
            Ok(week) => Ok(Self::new(FiscalYear::new(year), week)),
            Err(err) => Err(err),
        }
    }

    /// The period containing `date`; see [`fiscal_period`]
    pub fn from_date(date: NaiveDate, week_start: WeekStart) -> Self {
        fiscal_period(date, week_start)
    }

    pub const fn year(self) -> FiscalYear {
        self.year
    }

    pub const fn week(self) -> FiscalWeek {
        self.week
    }

    /// Returns (fiscal year, week) as plain integers
    pub const fn parts(self) -> (i32, u8) {
        (self.year.get(), self.week.get())
    }

    /// Renders the period in `style`
    pub fn format(self, style: PeriodStyle) -> String {
        format_period(self, style)
    }

    /// The dates this period covers.
    ///
    /// # Errors
    /// Returns `RangeError::YearOutOfRange` if the fiscal year is outside
    /// `MIN_FISCAL_YEAR..=MAX_FISCAL_YEAR`.
    pub fn range(self, week_start: WeekStart) -> Result<FiscalWeekRange, RangeError> {
        week_range(self.year.get(), self.week.get(), week_start)
    }

    /// The `YYMM` code of the period's first day.
    ///
    /// # Errors
    /// Same as [`FiscalPeriod::range`].
    pub fn year_month_code(self, week_start: WeekStart) -> Result<YearMonthCode, RangeError> {
        Ok(self.range(week_start)?.year_month_code())
    }
}

impl From<FiscalPeriod> for (i32, u8) {
    fn from(period: FiscalPeriod) -> Self {
        period.parts()
    }
}

impl TryFrom<(i32, u8)> for FiscalPeriod {
    type Error = RangeError;

    fn try_from((year, week): (i32, u8)) -> Result<Self, Self::Error> {
        Self::try_new(year, week)
    }
}

impl FromStr for FiscalPeriod {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_period(s)
    }
}

impl Serialize for FiscalPeriod {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for FiscalPeriod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
