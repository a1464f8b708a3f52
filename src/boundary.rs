//! Week-start boundaries of the fiscal calendar.
//!
//! The forward resolvers work on "day numbers": the count of days with
//! 0001-01-01 as day 1, the same numbering as
//! [`chrono::Datelike::num_days_from_ce`]. Computing in `i64` keeps them total
//! for every [`NaiveDate`], even where a July 1 or a week start would fall
//! outside chrono's representable range.

use crate::consts::{DAYS_PER_WEEK, JULY, JULY_FIRST_ORDINAL0, JUNE};
use crate::types::{WeekStart, days_before_year, is_leap_year};
use chrono::{Datelike, NaiveDate, Weekday};

/// Returns the earliest date on or after `date` that falls on `weekday`.
///
/// Returns `None` only when that date would lie past [`NaiveDate::MAX`].
pub fn first_occurrence_on_or_after(date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let target = i64::from(weekday.num_days_from_sunday());
    to_date(occurrence_on_or_after(day_number(date), target))
}

/// The first week-start weekday on or after July 1 of `year`: the day fiscal
/// week 2 of fiscal year `year + 1` begins.
///
/// Returns `None` if that date is outside chrono's range.
pub fn first_week_start_date(year: i32, week_start: WeekStart) -> Option<NaiveDate> {
    let july_first = NaiveDate::from_ymd_opt(year, JULY, 1)?;
    first_occurrence_on_or_after(july_first, week_start.weekday())
}

/// The last week-start weekday in June of `year`: the first day of the bridge
/// week that opens fiscal year `year + 1`.
///
/// Returns `None` if that date is outside chrono's range.
pub fn last_occurrence_in_june(year: i32, week_start: WeekStart) -> Option<NaiveDate> {
    to_date(bridge_week_start(i64::from(year), week_start))
}

/// Whether `date` falls in the partial week that bridges June into the next
/// fiscal year, i.e. on or after the last week-start weekday of its June.
pub fn is_bridge_day(date: NaiveDate, week_start: WeekStart) -> bool {
    date.month() == JUNE && day_number(date) >= bridge_week_start(i64::from(date.year()), week_start)
}

/// Day number of `date`
pub(crate) fn day_number(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce())
}

/// Converts a day number back to a date, if chrono can represent it
pub(crate) fn to_date(day: i64) -> Option<NaiveDate> {
    i32::try_from(day).ok().and_then(NaiveDate::from_num_days_from_ce_opt)
}

/// Sunday-based weekday of a day number. Day 1 (0001-01-01) is a Monday.
pub(crate) const fn weekday_index(day: i64) -> i64 {
    day.rem_euclid(DAYS_PER_WEEK)
}

/// Day number of July 1 in `year`
pub(crate) const fn fiscal_year_start(year: i64) -> i64 {
    let leap_day = if is_leap_year(year) { 1 } else { 0 };
    days_before_year(year) + 1 + JULY_FIRST_ORDINAL0 + leap_day
}

/// First day number on or after `day` whose Sunday-based weekday is `target`
pub(crate) const fn occurrence_on_or_after(day: i64, target: i64) -> i64 {
    day + (target - weekday_index(day)).rem_euclid(DAYS_PER_WEEK)
}

/// Day number of the first week-start weekday on or after July 1 of `year`
pub(crate) fn first_week_start(year: i64, week_start: WeekStart) -> i64 {
    occurrence_on_or_after(fiscal_year_start(year), i64::from(week_start.number()))
}

/// Day number of the last week-start weekday in June of `year`.
///
/// The first week start in July lands within July 1..=7, so stepping back a
/// week always lands within June 24..=30.
pub(crate) fn bridge_week_start(year: i64, week_start: WeekStart) -> i64 {
    first_week_start(year, week_start) - DAYS_PER_WEEK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;
    use chrono::Days;

    #[test]
    fn test_first_occurrence_cases() {
        struct TestCase {
            from:     (i32, u32, u32),
            weekday:  Weekday,
            expected: (i32, u32, u32),
        }

        let cases = [
            // 2024-07-01 is a Monday
            TestCase {
                from:     (2024, 7, 1),
                weekday:  Weekday::Sat,
                expected: (2024, 7, 6),
            },
            TestCase {
                from:     (2024, 7, 1),
                weekday:  Weekday::Mon,
                expected: (2024, 7, 1),
            },
            TestCase {
                from:     (2024, 7, 1),
                weekday:  Weekday::Sun,
                expected: (2024, 7, 7),
            },
            // 2023-07-01 is a Saturday
            TestCase {
                from:     (2023, 7, 1),
                weekday:  Weekday::Sat,
                expected: (2023, 7, 1),
            },
            TestCase {
                from:     (2023, 7, 1),
                weekday:  Weekday::Fri,
                expected: (2023, 7, 7),
            },
            // crosses a month and a year
            TestCase {
                from:     (2024, 12, 29),
                weekday:  Weekday::Sat,
                expected: (2025, 1, 4),
            },
        ];

        for case in &cases {
            let (y, m, d) = case.from;
            let (ey, em, ed) = case.expected;
            let result = first_occurrence_on_or_after(date(y, m, d), case.weekday).unwrap();
            assert_eq!(result, date(ey, em, ed), "from {y}-{m:02}-{d:02} to {:?}", case.weekday);
            assert_eq!(result.weekday(), case.weekday);
        }
    }

    #[test]
    fn test_first_occurrence_is_earliest_match() {
        let start = date(2020, 1, 1);
        for offset in 0..60 {
            let from = start + Days::new(offset);
            for week_start in WeekStart::all() {
                let found = first_occurrence_on_or_after(from, week_start.weekday()).unwrap();
                let gap = found.signed_duration_since(from).num_days();
                assert!((0..7).contains(&gap), "gap {gap} from {from}");
                assert_eq!(found.weekday(), week_start.weekday());
            }
        }
    }

    #[test]
    fn test_first_occurrence_at_the_ends_of_chrono() {
        let last = NaiveDate::MAX;
        for week_start in WeekStart::all() {
            let weekday = week_start.weekday();
            let expected = (last.weekday() == weekday).then_some(last);
            assert_eq!(first_occurrence_on_or_after(last, weekday), expected, "{weekday:?}");

            let found = first_occurrence_on_or_after(NaiveDate::MIN, weekday).unwrap();
            assert_eq!(found.weekday(), weekday);
        }
    }

    #[test]
    fn test_first_week_start_date_agrees_with_day_numbers() {
        for year in 1990..=2050 {
            for week_start in WeekStart::all() {
                assert_eq!(
                    first_week_start_date(year, week_start),
                    to_date(first_week_start(i64::from(year), week_start)),
                    "{year} {week_start}"
                );
            }
        }
    }

    #[test]
    fn test_weekday_index_matches_chrono() {
        for offset in 0..14 {
            let d = date(2024, 6, 20) + Days::new(offset);
            assert_eq!(
                weekday_index(day_number(d)),
                i64::from(d.weekday().num_days_from_sunday()),
                "{d}"
            );
        }
        // 0001-01-01 was a Monday
        assert_eq!(weekday_index(1), 1);
    }

    #[test]
    fn test_fiscal_year_start_is_july_first() {
        for year in [1, 1900, 1999, 2000, 2023, 2024, 2100, 9999] {
            assert_eq!(
                to_date(fiscal_year_start(i64::from(year))),
                Some(date(year, 7, 1)),
                "July 1 of {year}"
            );
        }
    }

    #[test]
    fn test_first_week_start_date() {
        assert_eq!(first_week_start_date(2024, WeekStart::SATURDAY), Some(date(2024, 7, 6)));
        assert_eq!(first_week_start_date(2023, WeekStart::SATURDAY), Some(date(2023, 7, 1)));
        assert_eq!(first_week_start_date(2024, WeekStart::SUNDAY), Some(date(2024, 7, 7)));
    }

    #[test]
    fn test_last_occurrence_in_june() {
        assert_eq!(last_occurrence_in_june(2024, WeekStart::SATURDAY), Some(date(2024, 6, 29)));
        assert_eq!(last_occurrence_in_june(2023, WeekStart::SATURDAY), Some(date(2023, 6, 24)));
        assert_eq!(last_occurrence_in_june(2025, WeekStart::SATURDAY), Some(date(2025, 6, 28)));

        for year in 1990..=2050 {
            for week_start in WeekStart::all() {
                let found = last_occurrence_in_june(year, week_start).unwrap();
                assert_eq!(found.month(), JUNE, "{year} {week_start}");
                assert!(found.day() >= 24, "{found} is not the last {week_start} of June");
                assert_eq!(found.weekday(), week_start.weekday());
            }
        }
    }

    #[test]
    fn test_is_bridge_day() {
        let saturday = WeekStart::SATURDAY;
        assert!(!is_bridge_day(date(2024, 6, 28), saturday));
        assert!(is_bridge_day(date(2024, 6, 29), saturday));
        assert!(is_bridge_day(date(2024, 6, 30), saturday));
        assert!(!is_bridge_day(date(2024, 7, 1), saturday));
        assert!(!is_bridge_day(date(2024, 5, 31), saturday));
        // June 30, 2024 is a Sunday, so a Sunday week start bridges one day only
        assert!(!is_bridge_day(date(2024, 6, 29), WeekStart::SUNDAY));
        assert!(is_bridge_day(date(2024, 6, 30), WeekStart::SUNDAY));
    }

    #[test]
    fn test_extreme_dates_do_not_overflow() {
        for d in [NaiveDate::MIN, NaiveDate::MAX] {
            let _ = is_bridge_day(d, WeekStart::SATURDAY);
            let start = first_week_start(i64::from(d.year()) - 1, WeekStart::SATURDAY);
            assert!(start < first_week_start(i64::from(d.year()), WeekStart::SATURDAY));
        }
    }
}
