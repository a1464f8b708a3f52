//! String encodings of fiscal periods.
//!
//! Three period styles are owned here: dashed `YYYY-WW`, verbose
//! `YYYY Week WW` and compact `YYYYWW`, the last being the lookup key other
//! systems store. The `YYMM` year-month code joins a fiscal week against
//! calendar-month data by the week's start date.
//!
//! These encodings are a wire format, versioned by
//! [`PERIOD_CODE_VERSION`](crate::PERIOD_CODE_VERSION).

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    COMPACT_CODE_LEN, DASHED_SEPARATOR, FiscalPeriod, MAX_WEEK, MIN_WEEK, VERBOSE_INFIX, WEEK_DIGITS, YEAR_DIGITS,
    prelude::*,
    range::RangeError,
    types::{FiscalWeek, FiscalYear, WeekStart},
};

/// Error type for parsing period codes and related strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Empty period code")]
    EmptyInput,

    /// Wrong number of characters for the code or one of its segments.
    #[error("Invalid code length: {0:?} (expected a {len}-digit compact code or {year}+{week} digit segments)", len = COMPACT_CODE_LEN, year = YEAR_DIGITS, week = WEEK_DIGITS)]
    InvalidLength(String),

    /// A year or week segment holds something other than ASCII digits.
    #[error("Non-numeric code: {0:?}")]
    NonNumeric(String),

    #[error("Invalid week: {0} (must be {min}-{max})", min = MIN_WEEK, max = MAX_WEEK)]
    InvalidWeek(u8),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Unknown period style: {0:?} (expected \"YYYY-WW\", \"YYYY Week WW\" or \"YYYYWW\")")]
    InvalidStyle(String),

    #[error(transparent)]
    Range(#[from] RangeError),
}

/// The human-readable and compact renderings of a fiscal period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum PeriodStyle {
    /// `YYYY-WW`
    #[display(fmt = "YYYY-WW")]
    #[serde(rename = "YYYY-WW")]
    Dashed,
    /// `YYYY Week WW`
    #[display(fmt = "YYYY Week WW")]
    #[serde(rename = "YYYY Week WW")]
    Verbose,
    /// `YYYYWW`, the stored lookup key
    #[default]
    #[display(fmt = "YYYYWW")]
    #[serde(rename = "YYYYWW")]
    Compact,
}

impl PeriodStyle {
    pub const ALL: [Self; 3] = [Self::Dashed, Self::Verbose, Self::Compact];
}

impl FromStr for PeriodStyle {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|style| style.to_string() == trimmed)
            .ok_or_else(|| FormatError::InvalidStyle(s.to_owned()))
            .inspect_err(|err| debug!(input = s, %err, "rejected period style"))
    }
}

/// Renders `period` in `style`, zero-padding the year to four digits and the
/// week to two.
pub fn format_period(period: FiscalPeriod, style: PeriodStyle) -> String {
    let (year, week) = period.parts();
    match style {
        PeriodStyle::Dashed => format!("{year:04}{DASHED_SEPARATOR}{week:02}"),
        PeriodStyle::Verbose => format!("{year:04}{VERBOSE_INFIX}{week:02}"),
        PeriodStyle::Compact => format!("{year:04}{week:02}"),
    }
}

/// Renders a raw (fiscal year, week) pair in `style`.
///
/// # Errors
/// Returns `RangeError::WeekOutOfRange` if `week` is outside `MIN_WEEK..=MAX_WEEK`.
pub fn format_parts(fiscal_year: i32, week: u8, style: PeriodStyle) -> Result<String, RangeError> {
    let period = FiscalPeriod::try_new(fiscal_year, week)?;
    Ok(format_period(period, style))
}

/// Parses a compact `YYYYWW` code. The code is a stored key, so whitespace
/// is not trimmed; use [`parse_period`] for free-form text.
///
/// # Errors
/// Returns `FormatError::InvalidLength` unless the code is exactly six
/// characters, `FormatError::NonNumeric` unless they are all digits, and
/// `FormatError::InvalidWeek` if the week is outside `MIN_WEEK..=MAX_WEEK`.
pub fn parse_compact(code: &str) -> Result<FiscalPeriod, FormatError> {
    compact(code).inspect_err(|err| debug!(input = code, %err, "rejected compact period code"))
}

/// Parses a period in any of the three styles.
///
/// # Errors
/// Returns a `FormatError` if `text` is none of `YYYY-WW`, `YYYY Week WW`
/// or `YYYYWW`, or names a week outside `MIN_WEEK..=MAX_WEEK`.
pub fn parse_period(text: &str) -> Result<FiscalPeriod, FormatError> {
    let trimmed = text.trim();
    let result = if let Some((year, week)) = trimmed.split_once(VERBOSE_INFIX) {
        segments(year, week, trimmed)
    } else if let Some((year, week)) = trimmed.split_once(DASHED_SEPARATOR) {
        segments(year, week, trimmed)
    } else {
        compact(trimmed)
    };
    result.inspect_err(|err| debug!(input = text, %err, "rejected period code"))
}

/// Resolves a compact code to the `YYMM` code of its week's start date.
///
/// Week 1 starts on the last week-start weekday of June, so every week-1
/// code maps to a June `YYMM`.
///
/// # Errors
/// Returns the errors of [`parse_compact`], or `FormatError::Range` if the
/// fiscal year cannot be resolved to dates.
pub fn to_year_month_code(code: &str, week_start: WeekStart) -> Result<YearMonthCode, FormatError> {
    let period = parse_compact(code)?;
    Ok(period.range(week_start)?.year_month_code())
}

fn compact(code: &str) -> Result<FiscalPeriod, FormatError> {
    if code.is_empty() {
        return Err(FormatError::EmptyInput);
    }
    if code.len() != COMPACT_CODE_LEN {
        return Err(FormatError::InvalidLength(code.to_owned()));
    }
    if !is_digits(code) {
        return Err(FormatError::NonNumeric(code.to_owned()));
    }
    let (year, week) = code.split_at(YEAR_DIGITS);
    segments(year, week, code)
}

fn segments(year: &str, week: &str, input: &str) -> Result<FiscalPeriod, FormatError> {
    if input.is_empty() {
        return Err(FormatError::EmptyInput);
    }
    if year.len() != YEAR_DIGITS || week.len() != WEEK_DIGITS {
        return Err(FormatError::InvalidLength(input.to_owned()));
    }
    if !is_digits(year) || !is_digits(week) {
        return Err(FormatError::NonNumeric(input.to_owned()));
    }

    let year = year
        .parse::<i32>()
        .map_err(|_| FormatError::NonNumeric(input.to_owned()))?;
    let week = week
        .parse::<u8>()
        .map_err(|_| FormatError::NonNumeric(input.to_owned()))?;
    let week = FiscalWeek::new(week).map_err(|_| FormatError::InvalidWeek(week))?;

    Ok(FiscalPeriod::new(FiscalYear::new(year), week))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// A `YYMM` code: two-digit calendar year and two-digit month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:02}{:02}", year, month)]
pub struct YearMonthCode {
    year:  u8,
    month: u8,
}

impl YearMonthCode {
    /// The code of the calendar month `date` falls in
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year:  u8::try_from(date.year().rem_euclid(100)).unwrap_or_default(),
            month: u8::try_from(date.month()).unwrap_or_default(),
        }
    }

    /// Returns the two-digit year (0..=99)
    pub const fn year(self) -> u8 {
        self.year
    }

    /// Returns the month (1..=12)
    pub const fn month(self) -> u8 {
        self.month
    }
}

impl FromStr for YearMonthCode {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() != 4 {
            return Err(FormatError::InvalidLength(s.to_owned()));
        }
        if !is_digits(trimmed) {
            return Err(FormatError::NonNumeric(s.to_owned()));
        }
        let (year, month) = trimmed.split_at(2);
        let year = year.parse::<u8>().map_err(|_| FormatError::NonNumeric(s.to_owned()))?;
        let month = month.parse::<u8>().map_err(|_| FormatError::NonNumeric(s.to_owned()))?;
        if !(1..=12).contains(&month) {
            return Err(FormatError::InvalidFormat(format!("Invalid month in year-month code: {s}")));
        }
        Ok(Self { year, month })
    }
}

impl Serialize for YearMonthCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for YearMonthCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
