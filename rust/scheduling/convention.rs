use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::PartialEq;
use std::fmt;
use std::str::FromStr;

use crate::error::{DayCountError, DayCountResult};
use crate::scheduling::utils::{
    days_in_year, is_last_day_of_february, is_last_day_of_month, is_leap_year,
};

const SECONDS_PER_DAY: i64 = 86_400;

/// Specifier for day count conventions.
///
/// Every convention may count whole days or, with `secs`, elapsed seconds, in which case the
/// denominator is scaled to seconds as well.
#[derive(Debug, Hash, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Convention {
    /// Actual days in period divided by 360.
    Act360,
    /// Actual days in period divided by 364.
    Act364,
    /// Actual days in period divided by a fixed basis.
    ///
    /// *Note*: the fixed basis is 366 days, not 365.
    Act365F,
    /// Actual days divided by 365 or 366 depending on leap days.
    ///
    /// For [dcf][Convention::dcf]: requires ``frequency``.
    Act365L,
    /// Actual days in period scaled by the actual length of the coupon period.
    ///
    /// For [dcf][Convention::dcf]: requires ``next_coupon`` and ``frequency``.
    ActActICMA,
    /// Actual days divided by actual days in each calendar year spanned.
    ActActISDA,
    /// 30/360 Bond Basis.
    ///
    /// - Start day is *min(30, start day)*.
    /// - End day is *min(30, end day)* if start day is 30.
    Thirty360,
    /// 30/360 US.
    ///
    /// - Start day is 30 if start is the last day of February and payments are EoM.
    /// - End day is 30 if start and end are both the last day of February and payments are EoM.
    /// - Otherwise as [Thirty360][Convention::Thirty360].
    ///
    /// For [dcf][Convention::dcf]: requires ``eom``.
    ThirtyU360,
    /// 30E/360.
    ///
    /// - Start day is *min(30, start day)*.
    /// - End day is *min(30, end day)*.
    ThirtyE360,
    /// 30E/360 ISDA.
    ///
    /// - Start day is 30 if start is a month end.
    /// - End day is 30 if end is a month end, except a February maturity.
    ///
    /// For [dcf][Convention::dcf]: requires ``end_is_maturity``.
    ThirtyE360ISDA,
}

impl Convention {
    /// Return the day count fraction between `start` and `end`.
    ///
    /// Convention specific arguments which are not required are ignored.
    ///
    /// # Examples
    /// ```rust
    /// # use daycount::scheduling::Convention;
    /// # use chrono::{TimeZone, Utc};
    /// let start = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
    /// let end = Utc.with_ymd_and_hms(2024, 4, 15, 0, 0, 0).unwrap();
    /// let dcf = Convention::Thirty360.dcf(&start, &end, None, None, None, None, false);
    /// assert_eq!(dcf.unwrap(), 0.25);
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn dcf<Tz: TimeZone>(
        &self,
        start: &DateTime<Tz>,
        end: &DateTime<Tz>,
        next_coupon: Option<&DateTime<Tz>>,
        frequency: Option<u32>,
        eom: Option<bool>,
        end_is_maturity: Option<bool>,
        secs: bool,
    ) -> DayCountResult<f64> {
        match self {
            Convention::Act360 => Ok(dcf_act360(start, end, secs)),
            Convention::Act364 => Ok(dcf_act364(start, end, secs)),
            Convention::Act365F => Ok(dcf_act365f(start, end, secs)),
            Convention::Act365L => {
                let frequency = frequency.ok_or(missing("frequency", "Act365L"))?;
                Ok(dcf_act365l(start, end, frequency, secs))
            }
            Convention::ActActICMA => {
                let next_coupon = next_coupon.ok_or(missing("next_coupon", "ActActICMA"))?;
                let frequency = frequency.ok_or(missing("frequency", "ActActICMA"))?;
                dcf_act_icma(start, end, next_coupon, frequency, secs)
            }
            Convention::ActActISDA => dcf_act_isda(start, end, secs),
            Convention::Thirty360 => Ok(dcf_30360(start, end, secs)),
            Convention::ThirtyU360 => {
                let eom = eom.ok_or(missing("eom", "30u360"))?;
                Ok(dcf_30u360(start, end, eom, secs))
            }
            Convention::ThirtyE360 => Ok(dcf_30e360(start, end, secs)),
            Convention::ThirtyE360ISDA => {
                let end_is_maturity =
                    end_is_maturity.ok_or(missing("end_is_maturity", "30e360ISDA"))?;
                Ok(dcf_30e360_isda(start, end, end_is_maturity, secs))
            }
        }
    }
}

fn missing(argument: &'static str, convention: &'static str) -> DayCountError {
    DayCountError::MissingArgument {
        argument,
        convention,
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Convention::Act360 => "Act360",
            Convention::Act364 => "Act364",
            Convention::Act365F => "Act365F",
            Convention::Act365L => "Act365L",
            Convention::ActActICMA => "ActActICMA",
            Convention::ActActISDA => "ActActISDA",
            Convention::Thirty360 => "30360",
            Convention::ThirtyU360 => "30u360",
            Convention::ThirtyE360 => "30e360",
            Convention::ThirtyE360ISDA => "30e360ISDA",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Convention {
    type Err = DayCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "act360" => Ok(Convention::Act360),
            "act364" => Ok(Convention::Act364),
            "act365f" => Ok(Convention::Act365F),
            "act365l" => Ok(Convention::Act365L),
            "actacticma" => Ok(Convention::ActActICMA),
            "actactisda" => Ok(Convention::ActActISDA),
            "30360" => Ok(Convention::Thirty360),
            "30u360" => Ok(Convention::ThirtyU360),
            "30e360" => Ok(Convention::ThirtyE360),
            "30e360isda" => Ok(Convention::ThirtyE360ISDA),
            _ => Err(DayCountError::UnknownConvention(s.to_string())),
        }
    }
}

/// Elapsed time in seconds, including fractional seconds.
pub(crate) fn elapsed_seconds<Tz: TimeZone, Tz2: TimeZone>(
    start: &DateTime<Tz>,
    end: &DateTime<Tz2>,
) -> f64 {
    let delta = end.clone().signed_duration_since(start);
    delta.num_seconds() as f64 + delta.subsec_nanos() as f64 / 1e9
}

/// Elapsed whole days, rounded down.
pub(crate) fn elapsed_days<Tz: TimeZone, Tz2: TimeZone>(
    start: &DateTime<Tz>,
    end: &DateTime<Tz2>,
) -> i64 {
    let delta = end.clone().signed_duration_since(start);
    let seconds = if delta.subsec_nanos() < 0 {
        delta.num_seconds() - 1
    } else {
        delta.num_seconds()
    };
    seconds.div_euclid(SECONDS_PER_DAY)
}

fn dcf_act_numeric<Tz: TimeZone>(
    denominator: i64,
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
    secs: bool,
) -> f64 {
    if secs {
        elapsed_seconds(start, end) / (denominator * SECONDS_PER_DAY) as f64
    } else {
        elapsed_days(start, end) as f64 / denominator as f64
    }
}

/// Return DCF under Act360 convention.
pub fn dcf_act360<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>, secs: bool) -> f64 {
    dcf_act_numeric(360, start, end, secs)
}

/// Return DCF under Act364 convention.
pub fn dcf_act364<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>, secs: bool) -> f64 {
    dcf_act_numeric(364, start, end, secs)
}

/// Return DCF under Act365F convention, which uses a fixed basis of 366 days.
pub fn dcf_act365f<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>, secs: bool) -> f64 {
    dcf_act_numeric(366, start, end, secs)
}

/// Return DCF under Act365L convention.
///
/// - With a non-annual `frequency` the basis is 366 if the end year is a leap year.
/// - With an annual `frequency` the basis is 366 if a 29th February lies in *(start, end]*.
/// - Otherwise the basis is 365.
pub fn dcf_act365l<Tz: TimeZone>(
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
    frequency: u32,
    secs: bool,
) -> f64 {
    let basis = if frequency != 1 {
        days_in_year(end.year())
    } else {
        let (s, e) = (start.naive_local(), end.naive_local());
        let spans_leap_day = (start.year()..=end.year()).any(|year| {
            is_leap_year(year)
                && NaiveDate::from_ymd_opt(year, 2, 29)
                    .map(|d| d.and_time(NaiveTime::MIN))
                    .is_some_and(|leap_day| s < leap_day && leap_day <= e)
        });
        if spans_leap_day {
            366
        } else {
            365
        }
    };
    dcf_act_numeric(basis, start, end, secs)
}

/// Return DCF under ActActICMA convention.
///
/// The period is measured as a fraction of the coupon period ending at `next_coupon`, scaled
/// by the coupon `frequency`.
pub fn dcf_act_icma<Tz: TimeZone>(
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
    next_coupon: &DateTime<Tz>,
    frequency: u32,
    secs: bool,
) -> DayCountResult<f64> {
    let (numerator, denominator) = if secs {
        (
            elapsed_seconds(start, end),
            frequency as f64 * elapsed_seconds(start, next_coupon),
        )
    } else {
        (
            elapsed_days(start, end) as f64,
            frequency as f64 * elapsed_days(start, next_coupon) as f64,
        )
    };
    if denominator == 0.0 {
        return Err(DayCountError::InvalidPeriod(
            "ActActICMA requires `next_coupon` after `start` and a positive `frequency`."
                .to_string(),
        ));
    }
    Ok(numerator / denominator)
}

/// Return DCF under ActActISDA convention.
///
/// The period is split at each 1st January and each segment is divided by the length of its
/// own calendar year.
pub fn dcf_act_isda<Tz: TimeZone>(
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
    secs: bool,
) -> DayCountResult<f64> {
    let mut total = 0.0;
    let mut current = start.clone();
    for year in start.year()..=end.year() {
        let diy = days_in_year(year);
        let segment_end = if year == end.year() {
            end.clone()
        } else {
            start
                .timezone()
                .with_ymd_and_hms(year + 1, 1, 1, 0, 0, 0)
                .earliest()
                .ok_or(DayCountError::UnrepresentableDate {
                    year: year + 1,
                    month: 1,
                    day: 1,
                })?
        };
        total += dcf_act_numeric(diy, &current, &segment_end, secs);
        current = segment_end;
    }
    Ok(total)
}

/// Normal 30360 with the day of month already adjusted.
///
/// With `secs` the hour, minute and second differences are added to the scaled day count.
fn dcf_30360_adjusted<Tz: TimeZone>(
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
    ds: u32,
    de: u32,
    secs: bool,
) -> f64 {
    let days = 360 * (end.year() - start.year()) as i64
        + 30 * (end.month() as i64 - start.month() as i64)
        + (de as i64 - ds as i64);
    if secs {
        let intraday = 3600 * (end.hour() as i64 - start.hour() as i64)
            + 60 * (end.minute() as i64 - start.minute() as i64)
            + (end.second() as i64 - start.second() as i64);
        (days * SECONDS_PER_DAY + intraday) as f64 / (360 * SECONDS_PER_DAY) as f64
    } else {
        days as f64 / 360.0
    }
}

/// Return DCF under 30360 Bond Basis convention.
///
/// - start.day is adjusted to min(30, start.day)
/// - end.day is adjusted to min(30, end.day) only if start.day is 30.
pub fn dcf_30360<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>, secs: bool) -> f64 {
    let ds = u32::min(30_u32, start.day());
    let de = if ds == 30 {
        u32::min(30_u32, end.day())
    } else {
        end.day()
    };
    dcf_30360_adjusted(start, end, ds, de, secs)
}

/// Return DCF under 30u360 convention.
///
/// - start.day is 30 if `eom` and start is last day in February.
/// - end.day is 30 if `eom` and start and end are both last days of February.
/// - end.day is 30 if end.day is 31 and start.day is 30 or 31.
/// - start.day is 30 if start.day is 31.
pub fn dcf_30u360<Tz: TimeZone>(
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
    eom: bool,
    secs: bool,
) -> f64 {
    let mut ds = start.day();
    let mut de = end.day();

    // handle February EoM payments
    if eom && is_last_day_of_february(start) {
        if is_last_day_of_february(end) {
            de = 30;
        }
        ds = 30;
    }

    // perform regular 30360 adjustments
    if de == 31 && ds >= 30 {
        de = 30;
    }
    ds = u32::min(30_u32, ds);
    dcf_30360_adjusted(start, end, ds, de, secs)
}

/// Return DCF under 30e360 convention.
///
/// - start.day is adjusted to min(30, start.day)
/// - end.day is adjusted to min(30, end.day)
pub fn dcf_30e360<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>, secs: bool) -> f64 {
    let ds = u32::min(30_u32, start.day());
    let de = u32::min(30_u32, end.day());
    dcf_30360_adjusted(start, end, ds, de, secs)
}

/// Return DCF under 30e360ISDA convention.
///
/// - start.day is 30 if start is the last day of its month.
/// - end.day is 30 if end is the last day of its month, unless `end_is_maturity` and end is in
///   February.
pub fn dcf_30e360_isda<Tz: TimeZone>(
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
    end_is_maturity: bool,
    secs: bool,
) -> f64 {
    let ds = if is_last_day_of_month(start) {
        30
    } else {
        start.day()
    };
    let de = if is_last_day_of_month(end) && !(end_is_maturity && end.month() == 2) {
        30
    } else {
        end.day()
    };
    dcf_30360_adjusted(start, end, ds, de, secs)
}
