//! Business day [`Calendar`]s, holiday rules and day count [`Convention`]s.
//!
//! # Calendars
//!
//! *daycount* provides three calendar types: [`Cal`], [`RuleCal`] and [`NamedCal`] and the
//! container enum [`Calendar`]. A [`Cal`] holds an explicit list of holidays, a [`RuleCal`]
//! generates holidays from [`Holiday`] rules for any year, and a [`NamedCal`] wraps a pre-defined
//! rule set by name, e.g. `"us_trading"`.
//!
//! All calendars implement the [`DateRoll`] trait which classifies dates, returns the holidays
//! in a range and counts dates matching a [`WeekMask`] with holidays excluded.
//!
//! ### Example
//! This example creates a calendar with a specific holiday and counts the Fridays which remain
//! in a fortnight.
//! ```rust
//! # use daycount::scheduling::{Cal, nd, DateRoll, WeekMask};
//! let cal = Cal::new(vec![nd(2024, 3, 29)], WeekMask::MON_FRI);  // Good Friday
//! let fridays = cal.bus_day_count(&nd(2024, 3, 25), &nd(2024, 4, 8), &WeekMask::FRI);
//! assert_eq!(fridays, 1);
//! ```
//!
//! # Day count conventions
//!
//! A [`Convention`] converts a pair of timezone aware instants into a year fraction. Each
//! convention is also available as a free function, e.g. [`dcf_30e360`].
//!
//! ### Example
//! ```rust
//! # use daycount::scheduling::dcf_30e360;
//! # use chrono::{TimeZone, Utc};
//! let start = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
//! let end = Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap();
//! assert_eq!(dcf_30e360(&start, &end, false), 29.0 / 360.0);
//! ```

mod calendars;
mod convention;
mod utils;

mod serde;

pub use crate::scheduling::{
    calendars::{
        busday_count, easter_sunday, get_calendar_by_name, nd, ndt, Cal, Calendar, DateRoll,
        Holiday, HolidayRule, NamedCal, Observance, RuleCal, WeekMask,
    },
    convention::{
        dcf_30360, dcf_30e360, dcf_30e360_isda, dcf_30u360, dcf_act360, dcf_act364, dcf_act365f,
        dcf_act365l, dcf_act_icma, dcf_act_isda, Convention,
    },
    utils::{days_in_month, days_in_year, is_last_day_of_february, is_last_day_of_month, is_leap_year},
};
pub(crate) use crate::scheduling::calendars::us_trading_named_cal;
