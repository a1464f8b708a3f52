//! Builders shared by the unit tests.

use chrono::NaiveDate;

use crate::{FiscalPeriod, FiscalWeekRange};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| panic!("invalid test date {year}-{month}-{day}"))
}

pub fn period(year: i32, week: u8) -> FiscalPeriod {
    FiscalPeriod::try_new(year, week).unwrap_or_else(|err| panic!("invalid test period: {err}"))
}

pub fn range(start: (i32, u32, u32), end: (i32, u32, u32)) -> FiscalWeekRange {
    FiscalWeekRange::new(date(start.0, start.1, start.2), date(end.0, end.1, end.2))
        .unwrap_or_else(|err| panic!("invalid test range: {err}"))
}
