use chrono::prelude::*;
use chrono::Days;
use serde::{Deserialize, Serialize};

use crate::scheduling::utils::days_in_month;

/// Rule moving a fixed-date holiday which falls on a weekend.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Observance {
    /// The holiday is observed on its date regardless of weekday.
    Actual,
    /// Saturday is observed on the preceding Friday and Sunday on the following Monday.
    NearestWorkday,
}

impl Observance {
    /// Return the date on which a holiday falling on `date` is observed.
    pub fn observe(&self, date: NaiveDate) -> NaiveDate {
        match (self, date.weekday()) {
            (Observance::NearestWorkday, Weekday::Sat) => date - Days::new(1),
            (Observance::NearestWorkday, Weekday::Sun) => date + Days::new(1),
            _ => date,
        }
    }
}

/// Generating rule for the date of a holiday within a given year.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HolidayRule {
    /// A fixed month and day, e.g. 25th December.
    Fixed {
        month: u32,
        day: u32,
        observance: Observance,
    },
    /// The `n`th given weekday of the month, e.g. 4th Thursday of November.
    NthWeekday { month: u32, weekday: Weekday, n: u32 },
    /// The last given weekday of the month, e.g. last Monday of May.
    LastWeekday { month: u32, weekday: Weekday },
    /// A number of days relative to (Gregorian) Easter Sunday, e.g. -2 for Good Friday.
    EasterOffset { days: i64 },
}

impl HolidayRule {
    /// Return the observed date of the rule in `year`, or `None` if no such date exists.
    ///
    /// An observed date may fall outside of `year`, e.g. a Saturday 1st January observed on the
    /// preceding Friday 31st December.
    pub fn date_in(&self, year: i32) -> Option<NaiveDate> {
        match self {
            HolidayRule::Fixed {
                month,
                day,
                observance,
            } => NaiveDate::from_ymd_opt(year, *month, *day).map(|d| observance.observe(d)),
            HolidayRule::NthWeekday { month, weekday, n } => {
                nth_weekday_of_month(year, *month, *weekday, *n)
            }
            HolidayRule::LastWeekday { month, weekday } => {
                last_weekday_of_month(year, *month, *weekday)
            }
            HolidayRule::EasterOffset { days } => {
                let easter = easter_sunday(year)?;
                if *days < 0 {
                    easter.checked_sub_days(Days::new(days.unsigned_abs()))
                } else {
                    easter.checked_add_days(Days::new(*days as u64))
                }
            }
        }
    }
}

/// A named holiday rule, optionally effective only from a given year.
///
/// A disabled holiday remains part of a rule set's definition but never yields a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub name: String,
    pub rule: HolidayRule,
    #[serde(default)]
    pub start_year: Option<i32>,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
}

fn enabled_default() -> bool {
    true
}

impl Holiday {
    pub fn new(name: &str, rule: HolidayRule) -> Self {
        Holiday {
            name: name.to_string(),
            rule,
            start_year: None,
            enabled: true,
        }
    }

    /// Restrict the holiday to years from `year` onwards.
    pub fn since(mut self, year: i32) -> Self {
        self.start_year = Some(year);
        self
    }

    /// Keep the definition but stop the holiday being observed.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Return the observed date of the holiday generated by `year`.
    pub fn observed_in(&self, year: i32) -> Option<NaiveDate> {
        if !self.enabled || self.start_year.is_some_and(|s| year < s) {
            return None;
        }
        self.rule.date_in(year)
    }
}

/// Gregorian Easter Sunday (anonymous Meeus/Jones/Butcher algorithm).
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = ((h + l - 7 * m + 114) % 31) + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u32) -> Option<NaiveDate> {
    if n == 0 {
        return None;
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let first_w = first.weekday().num_days_from_monday();
    let target_w = weekday.num_days_from_monday();
    let offset = (7 + target_w - first_w) % 7;
    NaiveDate::from_ymd_opt(year, month, 1 + offset + 7 * (n - 1))
}

fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let last = NaiveDate::from_ymd_opt(year, month, days_in_month(year, month))?;
    let last_w = last.weekday().num_days_from_monday();
    let target_w = weekday.num_days_from_monday();
    let offset = (7 + last_w - target_w) % 7;
    last.checked_sub_days(Days::new(offset as u64))
}
