//! Fiscal calendar settings carried as a single value.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{
    FiscalPeriod,
    codec::{FormatError, YearMonthCode, to_year_month_code},
    range::{FiscalWeekRange, RangeError, week_range},
    types::{FiscalWeek, FiscalYear, WeekStart},
    week::week_number,
    year::{fiscal_period, fiscal_year},
};

/// Fiscal calendar configuration.
///
/// Embeds in JSON or TOML settings as `week_start = 6` (Sunday = 0); a
/// missing field means Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FiscalCalendar {
    /// Weekday fiscal weeks begin on.
    pub week_start: WeekStart,
}

impl FiscalCalendar {
    pub const fn new(week_start: WeekStart) -> Self {
        Self { week_start }
    }

    /// See [`week_number`](crate::week_number)
    pub fn week_number(&self, date: NaiveDate) -> FiscalWeek {
        week_number(date, self.week_start)
    }

    /// See [`fiscal_year`](crate::fiscal_year)
    pub fn fiscal_year(&self, date: NaiveDate) -> FiscalYear {
        fiscal_year(date, self.week_start)
    }

    /// See [`fiscal_period`](crate::fiscal_period)
    pub fn fiscal_period(&self, date: NaiveDate) -> FiscalPeriod {
        fiscal_period(date, self.week_start)
    }

    /// The period of a timestamp's calendar date; the time of day is ignored.
    pub fn period_of_datetime(&self, datetime: NaiveDateTime) -> FiscalPeriod {
        self.fiscal_period(datetime.date())
    }

    /// See [`week_range`](crate::week_range)
    ///
    /// # Errors
    /// Returns a `RangeError` if the year or week is out of range.
    pub fn week_range(&self, fiscal_year: i32, week: u8) -> Result<FiscalWeekRange, RangeError> {
        week_range(fiscal_year, week, self.week_start)
    }

    /// See [`to_year_month_code`](crate::to_year_month_code)
    ///
    /// # Errors
    /// Returns a `FormatError` if `code` is not a valid compact period code.
    pub fn year_month_code(&self, code: &str) -> Result<YearMonthCode, FormatError> {
        to_year_month_code(code, self.week_start)
    }
}

impl From<WeekStart> for FiscalCalendar {
    fn from(week_start: WeekStart) -> Self {
        Self::new(week_start)
    }
}
