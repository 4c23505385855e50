use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::DayCountError;

/// The days of the week which are counted, Monday first.
///
/// String representation follows the numpy ``weekmask`` convention, e.g. `"1111100"` for a
/// Monday to Friday working week.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeekMask([bool; 7]);

impl WeekMask {
    /// Monday to Friday.
    pub const MON_FRI: WeekMask = WeekMask([true, true, true, true, true, false, false]);
    /// Monday to Thursday, i.e. the days with a full trading session.
    pub const MON_THU: WeekMask = WeekMask([true, true, true, true, false, false, false]);
    pub const FRI: WeekMask = WeekMask([false, false, false, false, true, false, false]);
    pub const SUN: WeekMask = WeekMask([false, false, false, false, false, false, true]);

    /// Returns whether the `weekday` is counted by the mask.
    pub fn contains(&self, weekday: Weekday) -> bool {
        self.0[weekday.num_days_from_monday() as usize]
    }
}

impl Default for WeekMask {
    fn default() -> Self {
        WeekMask::MON_FRI
    }
}

impl FromStr for WeekMask {
    type Err = DayCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 7 {
            return Err(DayCountError::InvalidWeekMask(s.to_string()));
        }
        let mut mask = [false; 7];
        for (i, c) in s.chars().enumerate() {
            mask[i] = match c {
                '1' => true,
                '0' => false,
                _ => return Err(DayCountError::InvalidWeekMask(s.to_string())),
            };
        }
        Ok(WeekMask(mask))
    }
}

impl fmt::Display for WeekMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in self.0 {
            write!(f, "{}", if flag { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl TryFrom<String> for WeekMask {
    type Error = DayCountError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        WeekMask::from_str(&value)
    }
}

impl From<WeekMask> for String {
    fn from(mask: WeekMask) -> Self {
        mask.to_string()
    }
}

/// Count the dates in `[start, end)` whose weekday is in `week_mask` and which are not `holidays`.
///
/// If `end` is before `start` the dates in `(end, start]` are counted and the result is negated,
/// as with numpy's ``busday_count``.
///
/// # Examples
/// ```rust
/// # use daycount::scheduling::{busday_count, nd, WeekMask};
/// # use std::collections::BTreeSet;
/// let holidays = BTreeSet::from([nd(2024, 7, 4)]);
/// // Monday 1st to Monday 8th July 2024, exclusive of the 8th.
/// assert_eq!(busday_count(&nd(2024, 7, 1), &nd(2024, 7, 8), &WeekMask::MON_FRI, &holidays), 4);
/// assert_eq!(busday_count(&nd(2024, 7, 1), &nd(2024, 7, 8), &WeekMask::FRI, &holidays), 1);
/// ```
pub fn busday_count(
    start: &NaiveDate,
    end: &NaiveDate,
    week_mask: &WeekMask,
    holidays: &BTreeSet<NaiveDate>,
) -> i64 {
    if end < start {
        let (Some(first), Some(last)) = (end.succ_opt(), start.succ_opt()) else {
            return 0;
        };
        return -busday_count(&first, &last, week_mask, holidays);
    }
    start
        .iter_days()
        .take_while(|d| d < end)
        .filter(|d| week_mask.contains(d.weekday()) && !holidays.contains(d))
        .count() as i64
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::nd;

    #[test]
    fn test_parse_and_display() {
        let mask = WeekMask::from_str("1111000").unwrap();
        assert_eq!(mask, WeekMask::MON_THU);
        assert_eq!(WeekMask::SUN.to_string(), "0000001");
        assert!(WeekMask::from_str("111100").is_err());
        assert!(WeekMask::from_str("11110x0").is_err());
    }

    #[test]
    fn test_contains() {
        assert!(WeekMask::FRI.contains(nd(2024, 7, 5).weekday()));
        assert!(!WeekMask::FRI.contains(nd(2024, 7, 6).weekday()));
        assert!(WeekMask::SUN.contains(Weekday::Sun));
        assert!(!WeekMask::MON_THU.contains(Weekday::Fri));
    }

    #[test]
    fn test_busday_count_masks() {
        let none = BTreeSet::new();
        // Sunday 30th June to Sunday 14th July 2024 exclusive: two full weeks.
        let (s, e) = (nd(2024, 6, 30), nd(2024, 7, 14));
        assert_eq!(busday_count(&s, &e, &WeekMask::MON_THU, &none), 8);
        assert_eq!(busday_count(&s, &e, &WeekMask::FRI, &none), 2);
        assert_eq!(busday_count(&s, &e, &WeekMask::SUN, &none), 2);
        assert_eq!(busday_count(&s, &e, &WeekMask::from_str("1111111").unwrap(), &none), 14);
    }

    #[test]
    fn test_busday_count_holidays_and_order() {
        let holidays = BTreeSet::from([nd(2024, 7, 4)]);
        let (s, e) = (nd(2024, 7, 1), nd(2024, 7, 8));
        assert_eq!(busday_count(&s, &e, &WeekMask::MON_FRI, &holidays), 4);
        assert_eq!(busday_count(&s, &s, &WeekMask::MON_FRI, &holidays), 0);
        // reversed counts (end, start]
        assert_eq!(busday_count(&e, &s, &WeekMask::MON_FRI, &holidays), -4);
    }

    #[test]
    fn test_serde() {
        let js = serde_json::to_string(&WeekMask::MON_FRI).unwrap();
        assert_eq!(js, "\"1111100\"");
        let mask: WeekMask = serde_json::from_str(&js).unwrap();
        assert_eq!(mask, WeekMask::MON_FRI);
    }
}
