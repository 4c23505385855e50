use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::scheduling::{Cal, DateRoll, NamedCal, RuleCal};

/// Create a `NaiveDate`.
///
/// Panics if date values are invalid.
pub fn nd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("`year`, `month` `day` are invalid.")
}

/// Create a `NaiveDateTime` with default null time.
///
/// Panics if date values are invalid.
pub fn ndt(year: i32, month: u32, day: u32) -> NaiveDateTime {
    nd(year, month, day).and_time(NaiveTime::MIN)
}

/// Container for calendar types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Calendar {
    Cal(Cal),
    RuleCal(RuleCal),
    NamedCal(NamedCal),
}

impl From<Cal> for Calendar {
    fn from(item: Cal) -> Self {
        Calendar::Cal(item)
    }
}

impl From<RuleCal> for Calendar {
    fn from(item: RuleCal) -> Self {
        Calendar::RuleCal(item)
    }
}

impl From<NamedCal> for Calendar {
    fn from(item: NamedCal) -> Self {
        Calendar::NamedCal(item)
    }
}

impl DateRoll for Calendar {
    fn is_weekday(&self, date: &NaiveDate) -> bool {
        match self {
            Calendar::Cal(c) => c.is_weekday(date),
            Calendar::RuleCal(c) => c.is_weekday(date),
            Calendar::NamedCal(c) => c.is_weekday(date),
        }
    }

    fn is_holiday(&self, date: &NaiveDate) -> bool {
        match self {
            Calendar::Cal(c) => c.is_holiday(date),
            Calendar::RuleCal(c) => c.is_holiday(date),
            Calendar::NamedCal(c) => c.is_holiday(date),
        }
    }

    fn holidays(&self, start: &NaiveDate, end: &NaiveDate) -> BTreeSet<NaiveDate> {
        match self {
            Calendar::Cal(c) => c.holidays(start, end),
            Calendar::RuleCal(c) => c.holidays(start, end),
            Calendar::NamedCal(c) => c.holidays(start, end),
        }
    }
}
