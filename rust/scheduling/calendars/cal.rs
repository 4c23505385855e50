use chrono::prelude::*;
use indexmap::set::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::scheduling::{DateRoll, WeekMask};

/// A business day calendar with a singular list of holidays.
///
/// A business day calendar is formed of 2 components:
///
/// - `week_mask`: which defines the days of the week that are general business days. In Western
///   culture this is typically `"1111100"`, Monday to Friday.
/// - `holidays`: which defines specific dates that may be exceptions to the general working week,
///   and cannot be business days.
///
/// A [`Cal`] is the natural way to supply a synthetic holiday set to a
/// [`TradingCalendar`](crate::trading::TradingCalendar).
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cal {
    pub(crate) holidays: IndexSet<NaiveDate>,
    pub(crate) week_mask: WeekMask,
}

impl Cal {
    /// Create a calendar.
    ///
    /// `holidays` provide a vector of dates that cannot be business days.
    pub fn new(holidays: Vec<NaiveDate>, week_mask: WeekMask) -> Self {
        Cal {
            holidays: IndexSet::from_iter(holidays),
            week_mask,
        }
    }
}

impl DateRoll for Cal {
    fn is_weekday(&self, date: &NaiveDate) -> bool {
        self.week_mask.contains(date.weekday())
    }

    fn is_holiday(&self, date: &NaiveDate) -> bool {
        self.holidays.contains(date)
    }

    fn holidays(&self, start: &NaiveDate, end: &NaiveDate) -> BTreeSet<NaiveDate> {
        self.holidays
            .iter()
            .filter(|d| *d >= start && *d <= end)
            .copied()
            .collect()
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::nd;

    fn fixture_hol_cal() -> Cal {
        let hols = vec![nd(2015, 9, 5), nd(2015, 9, 7)]; // Saturday and Monday
        Cal::new(hols, WeekMask::MON_FRI)
    }

    #[test]
    fn test_is_holiday() {
        let cal = fixture_hol_cal();
        assert!(cal.is_holiday(&nd(2015, 9, 7))); // In hol list
        assert!(!cal.is_holiday(&nd(2015, 9, 10))); // Not in hol list
        assert!(!cal.is_holiday(&nd(2024, 1, 6))); // Not in hol list
    }

    #[test]
    fn test_is_weekday() {
        let cal = fixture_hol_cal();
        assert!(cal.is_weekday(&nd(2015, 9, 7))); // Monday
        assert!(cal.is_weekday(&nd(2015, 9, 10))); // Thursday
        assert!(!cal.is_weekday(&nd(2024, 1, 6))); // Saturday
        assert!(!cal.is_weekday(&nd(2024, 1, 7))); // Sunday
    }

    #[test]
    fn test_holidays_are_ordered() {
        let cal = Cal::new(
            vec![nd(2024, 12, 25), nd(2024, 1, 1), nd(2024, 7, 4)],
            WeekMask::MON_FRI,
        );
        let hols: Vec<NaiveDate> = cal
            .holidays(&nd(2024, 1, 1), &nd(2024, 7, 4))
            .into_iter()
            .collect();
        assert_eq!(hols, vec![nd(2024, 1, 1), nd(2024, 7, 4)]);
    }
}
