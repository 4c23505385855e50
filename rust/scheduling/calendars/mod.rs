mod cal;
mod calendar;
mod dateroll;
mod named;
mod named_cal;
mod rule_cal;
mod rules;
mod weekmask;

pub use crate::scheduling::calendars::{
    cal::Cal,
    calendar::{nd, ndt, Calendar},
    dateroll::DateRoll,
    named::get_calendar_by_name,
    named_cal::NamedCal,
    rule_cal::RuleCal,
    rules::{easter_sunday, Holiday, HolidayRule, Observance},
    weekmask::{busday_count, WeekMask},
};
pub(crate) use crate::scheduling::calendars::named::us_trading_named_cal;
