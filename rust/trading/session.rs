//! The weekly trading session model.
//!
//! Trading runs continuously from Sunday 17:00 to Friday 16:00 in trading-local time, with a
//! daily closure from 16:00 to 17:00. Saturdays and holidays carry no trading. Each calendar
//! date is classified into a [`DayKind`] and each time of day into a [`SessionPhase`]; the
//! boundary corrections used by the trading clock are table lookups on that pair.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};

/// Seconds in a calendar day.
pub const DAY_SECONDS: f64 = 86_400.0;
/// Time of the daily close, 16:00, in seconds after midnight.
pub const CLOSE_SECONDS: f64 = 57_600.0;
/// Time of the daily reopen, 17:00, in seconds after midnight.
pub const REOPEN_SECONDS: f64 = 61_200.0;
/// Length of the daily closure window.
pub const CLOSURE_SECONDS: f64 = REOPEN_SECONDS - CLOSE_SECONDS;
/// Tradable seconds in a Monday to Thursday session day.
pub const FULL_DAY_SECONDS: f64 = DAY_SECONDS - CLOSURE_SECONDS;
/// Tradable seconds on a Friday, midnight to the close.
pub const FRIDAY_SECONDS: f64 = CLOSE_SECONDS;
/// Tradable seconds on a Sunday, the reopen to midnight.
pub const SUNDAY_SECONDS: f64 = DAY_SECONDS - REOPEN_SECONDS;

/// Classification of a trading-local calendar date by its tradable window.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DayKind {
    /// Opens at 17:00 and trades to midnight.
    Sunday,
    /// Monday to Thursday: trades all day except the closure window.
    Weekday,
    /// Trades from midnight to 16:00.
    Friday,
    /// Saturday or a holiday.
    Closed,
}

/// Position of a time of day relative to the daily closure window.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    /// Before 16:00.
    BeforeClose,
    /// Within the 16:00 hour.
    InClosure,
    /// 17:00 or later.
    AfterReopen,
}

impl DayKind {
    /// Classify a date, with `is_holiday` taking precedence over the weekday.
    pub fn classify(date: &NaiveDate, is_holiday: bool) -> Self {
        if is_holiday {
            return DayKind::Closed;
        }
        match date.weekday() {
            Weekday::Sun => DayKind::Sunday,
            Weekday::Fri => DayKind::Friday,
            Weekday::Sat => DayKind::Closed,
            _ => DayKind::Weekday,
        }
    }

    /// Total tradable seconds on a date of this kind.
    pub fn tradable_seconds(&self) -> f64 {
        match self {
            DayKind::Sunday => SUNDAY_SECONDS,
            DayKind::Weekday => FULL_DAY_SECONDS,
            DayKind::Friday => FRIDAY_SECONDS,
            DayKind::Closed => 0.0,
        }
    }

    /// Tradable seconds on this day from midnight up to `seconds` after midnight.
    ///
    /// This is the start-boundary correction: the part of the start date's window that precedes
    /// the actual start.
    ///
    /// # Examples
    /// ```rust
    /// # use daycount::trading::DayKind;
    /// assert_eq!(DayKind::Weekday.elapsed_before(36_000.0), 36_000.0);  // 10:00
    /// assert_eq!(DayKind::Weekday.elapsed_before(59_400.0), 57_600.0);  // 16:30
    /// assert_eq!(DayKind::Sunday.elapsed_before(36_000.0), 0.0);
    /// ```
    pub fn elapsed_before(&self, seconds: f64) -> f64 {
        match (self, SessionPhase::of(seconds)) {
            (DayKind::Sunday, SessionPhase::AfterReopen) => seconds - REOPEN_SECONDS,
            (DayKind::Sunday, _) => 0.0,
            (DayKind::Weekday, SessionPhase::BeforeClose) => seconds,
            (DayKind::Weekday, SessionPhase::InClosure) => CLOSE_SECONDS,
            (DayKind::Weekday, SessionPhase::AfterReopen) => seconds - CLOSURE_SECONDS,
            (DayKind::Friday, SessionPhase::BeforeClose) => seconds,
            (DayKind::Friday, _) => FRIDAY_SECONDS,
            (DayKind::Closed, _) => 0.0,
        }
    }

    /// Tradable seconds on this day from `seconds` after midnight up to the next midnight.
    ///
    /// This is the end-boundary correction: the part of the end date's window that follows the
    /// actual end.
    pub fn remaining_after(&self, seconds: f64) -> f64 {
        match (self, SessionPhase::of(seconds)) {
            (DayKind::Sunday, SessionPhase::AfterReopen) => DAY_SECONDS - seconds,
            (DayKind::Sunday, _) => SUNDAY_SECONDS,
            (DayKind::Weekday, SessionPhase::BeforeClose) => FULL_DAY_SECONDS - seconds,
            (DayKind::Weekday, SessionPhase::InClosure) => DAY_SECONDS - REOPEN_SECONDS,
            (DayKind::Weekday, SessionPhase::AfterReopen) => DAY_SECONDS - seconds,
            (DayKind::Friday, SessionPhase::BeforeClose) => FRIDAY_SECONDS - seconds,
            (DayKind::Friday, _) => 0.0,
            (DayKind::Closed, _) => 0.0,
        }
    }
}

impl SessionPhase {
    /// Classify a time given as seconds after midnight.
    pub fn of(seconds: f64) -> Self {
        if seconds < CLOSE_SECONDS {
            SessionPhase::BeforeClose
        } else if seconds < REOPEN_SECONDS {
            SessionPhase::InClosure
        } else {
            SessionPhase::AfterReopen
        }
    }
}

/// Seconds after midnight of a local datetime, including the fractional part.
pub(crate) fn seconds_of_day(datetime: &NaiveDateTime) -> f64 {
    datetime.num_seconds_from_midnight() as f64 + datetime.nanosecond() as f64 / 1e9
}
