use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::error::{DayCountError, DayCountResult};
use crate::json::JSON;
use crate::scheduling::{us_trading_named_cal, Calendar, DateRoll, NamedCal};

/// The trading timezone and holiday calendar consulted by a
/// [`TradingSessionClock`](crate::trading::TradingSessionClock).
///
/// The weekly session pattern is fixed; only the timezone used to localize instants and the set
/// of holidays are configurable. A value is constructed once and read-only thereafter.
///
/// # Examples
/// ```rust
/// # use daycount::trading::TradingCalendar;
/// # use daycount::json::JSON;
/// let calendar = TradingCalendar::try_from_names("America/Chicago", "us_trading").unwrap();
/// let js = calendar.to_json().unwrap();
/// assert_eq!(js, r#"{"timezone":"America/Chicago","calendar":{"NamedCal":{"name":"us_trading"}}}"#);
/// assert_eq!(TradingCalendar::from_json(&js).unwrap(), calendar);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingCalendar {
    #[serde(with = "tz_serde")]
    pub timezone: Tz,
    pub calendar: Calendar,
}

/// Custom serde module for chrono_tz::Tz
mod tz_serde {
    use chrono_tz::Tz;
    use serde::{self, Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S>(tz: &Tz, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(tz.name())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Tz, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Tz::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl TradingCalendar {
    pub fn new(timezone: Tz, calendar: Calendar) -> Self {
        TradingCalendar { timezone, calendar }
    }

    /// US exchange holidays observed in US Central time.
    pub fn us_trading() -> Self {
        TradingCalendar::new(chrono_tz::America::Chicago, us_trading_named_cal().into())
    }

    /// Create from an IANA timezone name and the name of a pre-defined holiday calendar.
    pub fn try_from_names(timezone: &str, calendar: &str) -> DayCountResult<Self> {
        let tz =
            Tz::from_str(timezone).map_err(|_| DayCountError::UnknownTimezone(timezone.to_string()))?;
        Ok(TradingCalendar::new(tz, NamedCal::try_new(calendar)?.into()))
    }

    /// Holidays observed between `start` and `end`, inclusive, as trading-local dates.
    pub fn holidays(&self, start: &NaiveDate, end: &NaiveDate) -> BTreeSet<NaiveDate> {
        self.calendar.holidays(start, end)
    }
}

impl Default for TradingCalendar {
    fn default() -> Self {
        TradingCalendar::us_trading()
    }
}

impl JSON for TradingCalendar {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::{nd, Cal, WeekMask};

    #[test]
    fn test_us_trading() {
        let cal = TradingCalendar::us_trading();
        assert_eq!(cal, TradingCalendar::default());
        assert_eq!(cal.timezone, chrono_tz::America::Chicago);
        let hols = cal.holidays(&nd(2024, 11, 1), &nd(2024, 12, 31));
        assert_eq!(hols, BTreeSet::from([nd(2024, 11, 28), nd(2024, 12, 25)]));
    }

    #[test]
    fn test_try_from_names_errors() {
        assert_eq!(
            TradingCalendar::try_from_names("Mars/Olympus", "us_trading"),
            Err(DayCountError::UnknownTimezone("Mars/Olympus".to_string()))
        );
        assert!(TradingCalendar::try_from_names("America/Chicago", "mars").is_err());
    }

    #[test]
    fn test_synthetic_json() {
        let cal = TradingCalendar::new(
            chrono_tz::Europe::London,
            Cal::new(vec![nd(2024, 12, 25)], WeekMask::MON_FRI).into(),
        );
        let js = cal.to_json_pretty().unwrap();
        let cal2 = TradingCalendar::from_json(&js).unwrap();
        assert_eq!(cal, cal2);
        assert!(TradingCalendar::from_json(&js.replace("Europe/London", "Nowhere")).is_err());
    }
}
