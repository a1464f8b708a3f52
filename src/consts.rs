/// Smallest fiscal year a week range can be resolved for (inclusive)
pub const MIN_FISCAL_YEAR: i32 = 1;

/// Largest fiscal year a week range can be resolved for (inclusive)
pub const MAX_FISCAL_YEAR: i32 = 9999;

/// First fiscal week of a fiscal year
pub const MIN_WEEK: u8 = 1;

/// Last fiscal week of a fiscal year; later weeks are clamped onto it
pub const MAX_WEEK: u8 = 52;

/// Month number for June, the last month of a fiscal year
pub const JUNE: u32 = 6;
/// Month number for July, the first month of a fiscal year
pub const JULY: u32 = 7;

/// Week-start weekday used when a caller has no preference (6 = Saturday)
pub const DEFAULT_WEEK_START: u8 = 6;

pub(crate) const DAYS_PER_WEEK: i64 = 7;

/// Zero-based ordinal of July 1 in a common year (Jan 31 + Feb 28 + ... + Jun 30)
pub(crate) const JULY_FIRST_ORDINAL0: i64 = 181;

/// Days in a common year
pub(crate) const DAYS_PER_YEAR: i64 = 365;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Version of the period code encodings below. Bump it alongside a new
/// encoding instead of changing these in place; stored codes depend on them.
pub const PERIOD_CODE_VERSION: u32 = 1;

/// Length of a compact `YYYYWW` period code
pub const COMPACT_CODE_LEN: usize = 6;

/// Digits in the year part of a period code
pub const YEAR_DIGITS: usize = 4;

/// Digits in the week part of a period code
pub const WEEK_DIGITS: usize = 2;

/// Separator of the dashed `YYYY-WW` style
pub const DASHED_SEPARATOR: char = '-';

/// Infix of the verbose `YYYY Week WW` style
pub const VERBOSE_INFIX: &str = " Week ";
