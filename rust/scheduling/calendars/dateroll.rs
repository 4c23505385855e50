use chrono::prelude::*;
use std::collections::BTreeSet;

use crate::scheduling::{busday_count, WeekMask};

/// Simple date classification defining weekdays, holidays and business days.
pub trait DateRoll {
    /// Returns whether the date is part of the general working week.
    fn is_weekday(&self, date: &NaiveDate) -> bool;

    /// Returns whether the date is a specific holiday excluded from the regular working week.
    fn is_holiday(&self, date: &NaiveDate) -> bool;

    /// Returns whether the date is a business day, i.e. part of the working week and not a holiday.
    fn is_bus_day(&self, date: &NaiveDate) -> bool {
        self.is_weekday(date) && !self.is_holiday(date)
    }

    /// Return the ordered set of holidays observed between `start` and `end`, inclusive.
    fn holidays(&self, start: &NaiveDate, end: &NaiveDate) -> BTreeSet<NaiveDate> {
        self.cal_date_range(start, end)
            .into_iter()
            .filter(|d| self.is_holiday(d))
            .collect()
    }

    /// Count dates in `[start, end)` matching `week_mask` which are not holidays of this calendar.
    ///
    /// The calendar's own working week is ignored; only its holidays are excluded.
    fn bus_day_count(&self, start: &NaiveDate, end: &NaiveDate, week_mask: &WeekMask) -> i64 {
        let (lower, upper) = if start <= end { (start, end) } else { (end, start) };
        busday_count(start, end, week_mask, &self.holidays(lower, upper))
    }

    /// Return a vector of calendar dates between a start and end, inclusive.
    fn cal_date_range(&self, start: &NaiveDate, end: &NaiveDate) -> Vec<NaiveDate> {
        start.iter_days().take_while(|d| d <= end).collect()
    }
}
