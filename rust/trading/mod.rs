//! Trading-session aware durations.
//!
//! A [`TradingSessionClock`] measures the time between two instants that the market is actually
//! open: Sunday 17:00 to Friday 16:00 in trading-local time, less a daily closure from 16:00 to
//! 17:00 and any holiday of its [`TradingCalendar`].
//!
//! ### Example
//! ```rust
//! # use daycount::trading::{TradingCalendar, TradingSessionClock};
//! # use daycount::scheduling::{Cal, nd, WeekMask};
//! # use chrono::TimeZone;
//! # use chrono_tz::America::Chicago;
//! let calendar = TradingCalendar::new(
//!     Chicago,
//!     Cal::new(vec![nd(2024, 7, 4)], WeekMask::MON_FRI).into(),
//! );
//! let clock = TradingSessionClock::new(calendar);
//! let start = Chicago.with_ymd_and_hms(2024, 7, 3, 10, 0, 0).unwrap();
//! let end = Chicago.with_ymd_and_hms(2024, 7, 5, 10, 0, 0).unwrap();
//! assert_eq!(clock.trading_days(&start, &end).unwrap(), 1.0);
//! ```

mod clock;
mod config;
mod session;

pub use crate::trading::{
    clock::{one_year_after, TradingSessionClock},
    config::TradingCalendar,
    session::{
        DayKind, SessionPhase, CLOSE_SECONDS, CLOSURE_SECONDS, DAY_SECONDS, FRIDAY_SECONDS,
        FULL_DAY_SECONDS, REOPEN_SECONDS, SUNDAY_SECONDS,
    },
};
