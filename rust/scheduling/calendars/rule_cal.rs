use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::trace;

use crate::scheduling::{DateRoll, Holiday, WeekMask};

/// A business day calendar whose holidays are generated from [`Holiday`] rules.
///
/// Rules are evaluated per year, so the calendar covers any date range without a precomputed
/// list of dates.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuleCal {
    pub(crate) rules: Vec<Holiday>,
    pub(crate) week_mask: WeekMask,
}

impl RuleCal {
    pub fn new(rules: Vec<Holiday>, week_mask: WeekMask) -> Self {
        RuleCal { rules, week_mask }
    }

    /// The holiday rules, including disabled ones.
    pub fn rules(&self) -> &[Holiday] {
        &self.rules
    }

    /// Observed holidays generated by the rules for each of the years `first..=last`.
    ///
    /// Observed dates may fall in a neighbouring year.
    fn generate(&self, first: i32, last: i32) -> BTreeSet<NaiveDate> {
        (first..=last)
            .flat_map(|year| self.rules.iter().filter_map(move |h| h.observed_in(year)))
            .collect()
    }
}

impl DateRoll for RuleCal {
    fn is_weekday(&self, date: &NaiveDate) -> bool {
        self.week_mask.contains(date.weekday())
    }

    fn is_holiday(&self, date: &NaiveDate) -> bool {
        self.generate(date.year() - 1, date.year() + 1)
            .contains(date)
    }

    fn holidays(&self, start: &NaiveDate, end: &NaiveDate) -> BTreeSet<NaiveDate> {
        if end < start {
            return BTreeSet::new();
        }
        let hols: BTreeSet<NaiveDate> = self
            .generate(start.year() - 1, end.year() + 1)
            .range(*start..=*end)
            .copied()
            .collect();
        trace!(%start, %end, count = hols.len(), "generated rule calendar holidays");
        hols
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::{nd, HolidayRule, Observance};

    fn fixture_rule_cal() -> RuleCal {
        RuleCal::new(
            vec![
                Holiday::new(
                    "NewYear",
                    HolidayRule::Fixed {
                        month: 1,
                        day: 1,
                        observance: Observance::NearestWorkday,
                    },
                ),
                Holiday::new("GoodFriday", HolidayRule::EasterOffset { days: -2 }),
            ],
            WeekMask::MON_FRI,
        )
    }

    #[test]
    fn test_is_holiday() {
        let cal = fixture_rule_cal();
        assert!(cal.is_holiday(&nd(2024, 3, 29)));
        assert!(cal.is_holiday(&nd(2024, 1, 1)));
        // 1st January 2022 Saturday observed on Friday 31st December 2021
        assert!(cal.is_holiday(&nd(2021, 12, 31)));
        assert!(!cal.is_holiday(&nd(2022, 1, 1)));
    }

    #[test]
    fn test_holidays_range() {
        let cal = fixture_rule_cal();
        let hols = cal.holidays(&nd(2021, 12, 1), &nd(2022, 12, 31));
        assert_eq!(
            hols,
            BTreeSet::from([nd(2021, 12, 31), nd(2022, 4, 15)])
        );
        assert!(cal.holidays(&nd(2022, 12, 31), &nd(2022, 1, 1)).is_empty());
    }

    #[test]
    fn test_bus_day() {
        let cal = fixture_rule_cal();
        assert!(!cal.is_bus_day(&nd(2024, 3, 29)));
        assert!(cal.is_bus_day(&nd(2024, 3, 28)));
        assert!(!cal.is_bus_day(&nd(2024, 3, 30)));
    }
}
