//! Date to fiscal week number.

use crate::boundary::{day_number, first_week_start, is_bridge_day};
use crate::consts::{DAYS_PER_WEEK, JULY, MAX_WEEK};
use crate::types::{FiscalWeek, WeekStart};
use chrono::{Datelike, NaiveDate};
use tracing::trace;

/// Returns the fiscal week `date` falls in.
///
/// Week 1 is the partial week before the first week-start weekday on or
/// after July 1. The bridge days at the end of June (from the last week-start
/// weekday of June onward) also count as week 1, of the *upcoming* fiscal
/// year. Week 2 begins on that first July week start, and weeks run seven
/// days from there. A 53rd week is clamped onto week 52.
///
/// Note that [`fiscal_year`](crate::fiscal_year) assigns bridge days to the
/// fiscal year ending that June; use [`fiscal_period`](crate::fiscal_period)
/// for a consistent pair.
pub fn week_number(date: NaiveDate, week_start: WeekStart) -> FiscalWeek {
    let index = week_index(date, week_start);
    if index > i64::from(MAX_WEEK) {
        trace!(%date, index, "clamping week index onto the last week");
    }
    FiscalWeek::clamped(index)
}

/// Unclamped week index of `date`; 53 in years with a trailing 53rd week
pub(crate) fn week_index(date: NaiveDate, week_start: WeekStart) -> i64 {
    if is_bridge_day(date, week_start) {
        return 1;
    }

    let start_year = if date.month() >= JULY {
        i64::from(date.year())
    } else {
        i64::from(date.year()) - 1
    };
    let first = first_week_start(start_year, week_start);
    let day = day_number(date);
    if day < first {
        1
    } else {
        (day - first).div_euclid(DAYS_PER_WEEK) + 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;
    use chrono::Days;

    #[test]
    fn test_week_number_cases() {
        struct TestCase {
            date:        (i32, u32, u32),
            week_start:  WeekStart,
            expected:    u8,
            description: &'static str,
        }

        let cases = [
            TestCase {
                date:        (2024, 8, 15),
                week_start:  WeekStart::SATURDAY,
                expected:    7,
                description: "mid August, 40 days after July 6",
            },
            TestCase {
                date:        (2024, 7, 1),
                week_start:  WeekStart::SATURDAY,
                expected:    1,
                description: "July 1 before the first Saturday",
            },
            TestCase {
                date:        (2024, 7, 5),
                week_start:  WeekStart::SATURDAY,
                expected:    1,
                description: "day before the first Saturday",
            },
            TestCase {
                date:        (2024, 7, 6),
                week_start:  WeekStart::SATURDAY,
                expected:    2,
                description: "first Saturday opens week 2",
            },
            TestCase {
                date:        (2024, 7, 12),
                week_start:  WeekStart::SATURDAY,
                expected:    2,
                description: "last day of week 2",
            },
            TestCase {
                date:        (2024, 7, 13),
                week_start:  WeekStart::SATURDAY,
                expected:    3,
                description: "second Saturday opens week 3",
            },
            TestCase {
                date:        (2024, 6, 29),
                week_start:  WeekStart::SATURDAY,
                expected:    1,
                description: "last Saturday of June bridges into week 1",
            },
            TestCase {
                date:        (2024, 6, 30),
                week_start:  WeekStart::SATURDAY,
                expected:    1,
                description: "bridge day",
            },
            TestCase {
                date:        (2025, 1, 15),
                week_start:  WeekStart::SATURDAY,
                expected:    29,
                description: "January stays in the fiscal year begun in July",
            },
            TestCase {
                date:        (2025, 6, 27),
                week_start:  WeekStart::SATURDAY,
                expected:    52,
                description: "last day before the 2025 bridge",
            },
            TestCase {
                date:        (2024, 6, 21),
                week_start:  WeekStart::SATURDAY,
                expected:    52,
                description: "regular week 52 of FY2024",
            },
            TestCase {
                date:        (2024, 6, 22),
                week_start:  WeekStart::SATURDAY,
                expected:    52,
                description: "53rd week of FY2024 clamps to 52",
            },
            TestCase {
                date:        (2023, 7, 1),
                week_start:  WeekStart::SATURDAY,
                expected:    2,
                description: "July 1 on a Saturday is the first Saturday",
            },
            TestCase {
                date:        (2023, 6, 24),
                week_start:  WeekStart::SATURDAY,
                expected:    1,
                description: "bridge week before a Saturday July 1",
            },
            TestCase {
                date:        (2024, 7, 1),
                week_start:  WeekStart::MONDAY,
                expected:    2,
                description: "Monday week start with July 1 on a Monday",
            },
            TestCase {
                date:        (2024, 6, 30),
                week_start:  WeekStart::SUNDAY,
                expected:    1,
                description: "Sunday bridge day",
            },
            TestCase {
                date:        (2024, 7, 7),
                week_start:  WeekStart::SUNDAY,
                expected:    2,
                description: "first Sunday of July",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.date;
            assert_eq!(
                week_number(date(y, m, d), case.week_start).get(),
                case.expected,
                "{}: {y}-{m:02}-{d:02}",
                case.description
            );
        }
    }

    #[test]
    fn test_week_index_reports_53rd_week() {
        // FY2024 starts on Saturday 2023-07-01 and has 52 full weeks after it
        assert_eq!(week_index(date(2024, 6, 15), WeekStart::SATURDAY), 52);
        assert_eq!(week_index(date(2024, 6, 22), WeekStart::SATURDAY), 53);
        assert_eq!(week_index(date(2024, 6, 28), WeekStart::SATURDAY), 53);
        assert_eq!(week_index(date(2024, 6, 29), WeekStart::SATURDAY), 1);
    }

    #[test]
    fn test_week_one_spans_bridge_and_leading_days() {
        // Saturday 2024-06-29 through Friday 2024-07-05
        let bridge = date(2024, 6, 29);
        for offset in 0..7 {
            let day = bridge + Days::new(offset);
            assert_eq!(week_number(day, WeekStart::SATURDAY), FiscalWeek::FIRST, "{day}");
        }
        assert_eq!(week_number(bridge - Days::new(1), WeekStart::SATURDAY), FiscalWeek::LAST);
        assert_eq!(week_number(bridge + Days::new(7), WeekStart::SATURDAY).get(), 2);
    }

    #[test]
    fn test_extreme_dates_are_in_range() {
        for d in [NaiveDate::MIN, NaiveDate::MAX] {
            for week_start in WeekStart::all() {
                let week = week_number(d, week_start).get();
                assert!((1..=52).contains(&week), "{d}: {week}");
            }
        }
    }
}
