use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::{DayCountError, DayCountResult};
use crate::scheduling::{get_calendar_by_name, DateRoll, RuleCal};

/// A wrapper for a [`RuleCal`] specified by the name of a pre-defined rule set.
///
/// Serializes to its name only and rebuilds the rules on deserialization.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "NamedCalDataModel")]
pub struct NamedCal {
    pub name: String,
    #[serde(skip)]
    pub rule_cal: RuleCal,
}

#[derive(Deserialize)]
struct NamedCalDataModel {
    name: String,
}

impl TryFrom<NamedCalDataModel> for NamedCal {
    type Error = DayCountError;

    fn try_from(model: NamedCalDataModel) -> Result<Self, Self::Error> {
        Self::try_new(&model.name)
    }
}

impl NamedCal {
    /// Create a new [`NamedCal`].
    ///
    /// # Examples
    /// ```rust
    /// # use daycount::scheduling::{NamedCal, DateRoll, nd};
    /// let named_cal = NamedCal::try_new("us_trading");
    /// # let named_cal = named_cal.unwrap();
    /// assert!(named_cal.is_holiday(&nd(2024, 11, 28)));
    /// ```
    pub fn try_new(name: &str) -> DayCountResult<Self> {
        let name_ = name.to_lowercase();
        let rule_cal = get_calendar_by_name(&name_)?;
        Ok(Self {
            name: name_,
            rule_cal,
        })
    }
}

impl DateRoll for NamedCal {
    fn is_weekday(&self, date: &NaiveDate) -> bool {
        self.rule_cal.is_weekday(date)
    }

    fn is_holiday(&self, date: &NaiveDate) -> bool {
        self.rule_cal.is_holiday(date)
    }

    fn holidays(&self, start: &NaiveDate, end: &NaiveDate) -> BTreeSet<NaiveDate> {
        self.rule_cal.holidays(start, end)
    }
}

impl PartialEq for NamedCal {
    fn eq(&self, other: &NamedCal) -> bool {
        self.name == other.name
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::nd;

    #[test]
    fn test_named_cal() {
        let ncal = NamedCal::try_new("US_Trading").unwrap();
        assert_eq!(ncal.name, "us_trading");
        assert!(ncal.is_holiday(&nd(2024, 7, 4)));
        assert!(!ncal.is_bus_day(&nd(2024, 7, 6)));
    }

    #[test]
    fn test_named_cal_error() {
        assert!(NamedCal::try_new("mars").is_err());
    }
}
