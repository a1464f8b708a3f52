//! Date to fiscal year, in the legacy and the unified convention.

use crate::FiscalPeriod;
use crate::boundary::is_bridge_day;
use crate::consts::JULY;
use crate::types::{FiscalYear, WeekStart};
use crate::week::week_number;
use chrono::{Datelike, NaiveDate};
use tracing::trace;

/// Returns the fiscal year `date` falls in.
///
/// July through December belong to the fiscal year named after the next
/// calendar year; January through June to the current one. Bridge days at
/// the end of June stay with the fiscal year ending that June (an implied
/// week 53), even though [`week_number`] reports them as week 1 of the next
/// fiscal year. Stored period data depends on this pairing, so it is kept;
/// [`fiscal_period`] resolves both parts consistently.
pub fn fiscal_year(date: NaiveDate, week_start: WeekStart) -> FiscalYear {
    if date.month() >= JULY {
        return FiscalYear::new(date.year() + 1);
    }
    if is_bridge_day(date, week_start) {
        trace!(%date, "bridge day kept in the fiscal year ending this June");
    }
    FiscalYear::new(date.year())
}

/// Returns the fiscal period `date` falls in, with bridge days assigned to
/// week 1 of the upcoming fiscal year.
///
/// Unlike pairing [`fiscal_year`] with [`week_number`], the result always
/// names the period whose [`week_range`](crate::week_range) contains `date`.
pub fn fiscal_period(date: NaiveDate, week_start: WeekStart) -> FiscalPeriod {
    let year = if is_bridge_day(date, week_start) {
        FiscalYear::new(date.year() + 1)
    } else {
        fiscal_year(date, week_start)
    };
    FiscalPeriod::new(year, week_number(date, week_start))
}
