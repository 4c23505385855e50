//! Static rule sets for pre-existing named holiday calendars.
//!

pub mod bus;
pub mod us_trading;

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::{DayCountError, DayCountResult};
use crate::scheduling::{Holiday, NamedCal, RuleCal, WeekMask};

type RuleSet = (&'static str, fn() -> Vec<Holiday>);

fn named_rule_sets() -> HashMap<&'static str, RuleSet> {
    let bus: RuleSet = (bus::WEEKMASK, bus::holidays);
    let us_trading: RuleSet = (us_trading::WEEKMASK, us_trading::holidays);
    HashMap::from([("bus", bus), ("us_trading", us_trading)])
}

/// Return a [`RuleCal`] for a named calendar, e.g. `"us_trading"` or `"bus"`.
pub fn get_calendar_by_name(name: &str) -> DayCountResult<RuleCal> {
    let hmap = named_rule_sets();
    match hmap.get(name.to_lowercase().as_str()) {
        None => Err(DayCountError::UnknownCalendar(name.to_string())),
        Some((mask, rules)) => Ok(RuleCal::new(rules(), WeekMask::from_str(mask)?)),
    }
}

/// The `"us_trading"` calendar, built without a name lookup.
pub(crate) fn us_trading_named_cal() -> NamedCal {
    NamedCal {
        name: "us_trading".to_string(),
        rule_cal: RuleCal::new(us_trading::holidays(), WeekMask::MON_FRI),
    }
}
