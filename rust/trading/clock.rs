use chrono::prelude::*;
use chrono::TimeDelta;
use std::collections::BTreeSet;
use tracing::{debug, trace};

use crate::error::{DayCountError, DayCountResult};
use crate::scheduling::{busday_count, days_in_year, WeekMask};
use crate::trading::session::{
    seconds_of_day, DayKind, CLOSE_SECONDS, FRIDAY_SECONDS, FULL_DAY_SECONDS, SUNDAY_SECONDS,
};
use crate::trading::TradingCalendar;

/// An end time at or before 09:30 does not count its own date in [`TradingSessionClock::trading_ts`].
const TS_END_CUTOFF_SECONDS: f64 = 34_200.0;

/// Measures elapsed trading time between two instants.
///
/// All instants are first localized to the [`TradingCalendar`] timezone; session boundaries and
/// holidays are then evaluated on local wall-clock time.
///
/// # Examples
/// ```rust
/// # use daycount::trading::TradingSessionClock;
/// # use chrono::TimeZone;
/// # use chrono_tz::America::Chicago;
/// let clock = TradingSessionClock::default();
/// let friday_close = Chicago.with_ymd_and_hms(2024, 7, 12, 16, 0, 0).unwrap();
/// let sunday_open = Chicago.with_ymd_and_hms(2024, 7, 14, 17, 0, 0).unwrap();
/// assert_eq!(clock.trading_seconds(&friday_close, &sunday_open).unwrap(), 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TradingSessionClock {
    calendar: TradingCalendar,
}

/// Return the instant 365 or 366 days after `start`, by the leap status of its year.
pub fn one_year_after<Tz: TimeZone>(start: &DateTime<Tz>) -> DateTime<Tz> {
    start.clone() + TimeDelta::days(days_in_year(start.year()))
}

impl TradingSessionClock {
    pub fn new(calendar: TradingCalendar) -> Self {
        TradingSessionClock { calendar }
    }

    pub fn calendar(&self) -> &TradingCalendar {
        &self.calendar
    }

    fn localize<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> NaiveDateTime {
        instant.with_timezone(&self.calendar.timezone).naive_local()
    }

    fn day_kind(&self, date: &NaiveDate, holidays: &BTreeSet<NaiveDate>) -> DayKind {
        DayKind::classify(date, holidays.contains(date))
    }

    /// Return the tradable seconds between `start` and `end`.
    ///
    /// When both instants share a trading-local date, `end` must not precede `start`. Across
    /// dates no ordering check is made and a reversed interval gives an unspecified value.
    ///
    /// Ordered instants whose wall-clock times run backwards, inside a repeated daylight saving
    /// hour, give 0.
    ///
    /// # Examples
    /// ```rust
    /// # use daycount::trading::TradingSessionClock;
    /// # use chrono::TimeZone;
    /// # use chrono_tz::America::Chicago;
    /// let clock = TradingSessionClock::default();
    /// let start = Chicago.with_ymd_and_hms(2024, 7, 8, 10, 0, 0).unwrap();
    /// let end = Chicago.with_ymd_and_hms(2024, 7, 9, 10, 0, 0).unwrap();
    /// assert_eq!(clock.trading_seconds(&start, &end).unwrap(), 82_800.0);
    /// ```
    pub fn trading_seconds<Tz: TimeZone, Tz2: TimeZone>(
        &self,
        start: &DateTime<Tz>,
        end: &DateTime<Tz2>,
    ) -> DayCountResult<f64> {
        let reversed = end.with_timezone(&Utc) < start.with_timezone(&Utc);
        let start = self.localize(start);
        let end = self.localize(end);
        let (start_date, end_date) = (start.date(), end.date());
        let (start_secs, end_secs) = (seconds_of_day(&start), seconds_of_day(&end));
        let holidays = self.calendar.holidays(&start_date, &end_date);

        if start_date == end_date {
            if reversed {
                return Err(DayCountError::InvalidPeriod(format!(
                    "trading seconds end {end} is before start {start}"
                )));
            }
            let kind = self.day_kind(&start_date, &holidays);
            // ordered instants in a repeated DST hour can run backwards on the wall clock
            let total = (kind.elapsed_before(end_secs) - kind.elapsed_before(start_secs)).max(0.0);
            debug!(%start, %end, ?kind, total, "same-day trading seconds");
            return Ok(total);
        }

        let end_exclusive = end_date
            .succ_opt()
            .ok_or_else(|| unrepresentable(&end_date))?;
        let weekdays = busday_count(&start_date, &end_exclusive, &WeekMask::MON_THU, &holidays);
        let fridays = busday_count(&start_date, &end_exclusive, &WeekMask::FRI, &holidays);
        let sundays = busday_count(&start_date, &end_exclusive, &WeekMask::SUN, &holidays);
        let raw = weekdays as f64 * FULL_DAY_SECONDS
            + fridays as f64 * FRIDAY_SECONDS
            + sundays as f64 * SUNDAY_SECONDS;

        let start_kind = self.day_kind(&start_date, &holidays);
        let end_kind = self.day_kind(&end_date, &holidays);
        let start_correction = start_kind.elapsed_before(start_secs);
        let end_correction = end_kind.remaining_after(end_secs);
        trace!(?start_kind, start_correction, ?end_kind, end_correction, "boundary corrections");

        let total = raw - start_correction - end_correction;
        debug!(
            %start, %end, weekdays, fridays, sundays, holidays = holidays.len(), total,
            "multi-day trading seconds"
        );
        Ok(total)
    }

    /// Return the tradable time between `start` and `end` in 23 hour trading days.
    pub fn trading_days<Tz: TimeZone, Tz2: TimeZone>(
        &self,
        start: &DateTime<Tz>,
        end: &DateTime<Tz2>,
    ) -> DayCountResult<f64> {
        Ok(self.trading_seconds(start, end)? / FULL_DAY_SECONDS)
    }

    /// Return the tradable seconds between `start` and `end` as a fraction of those in the year
    /// beginning at `start`.
    pub fn trading_t<Tz: TimeZone, Tz2: TimeZone>(
        &self,
        start: &DateTime<Tz>,
        end: &DateTime<Tz2>,
    ) -> DayCountResult<f64> {
        let numerator = self.trading_seconds(start, end)?;
        let denominator = self.trading_seconds(start, &one_year_after(start))?;
        if denominator == 0.0 {
            return Err(DayCountError::InvalidPeriod(format!(
                "no trading seconds in the year after {start:?}"
            )));
        }
        Ok(numerator / denominator)
    }

    /// Return whole business days between `start` and `end` as a fraction of the business days
    /// in the following year.
    ///
    /// A start at or after 16:00 local moves to the next date and an end at or before 09:30
    /// local moves to the previous date. Both dates are then counted inclusively.
    pub fn trading_ts<Tz: TimeZone, Tz2: TimeZone>(
        &self,
        start: &DateTime<Tz>,
        end: &DateTime<Tz2>,
    ) -> DayCountResult<f64> {
        let start = self.localize(start);
        let end = self.localize(end);
        let mut start_date = start.date();
        if seconds_of_day(&start) >= CLOSE_SECONDS {
            start_date = start_date
                .succ_opt()
                .ok_or_else(|| unrepresentable(&start_date))?;
        }
        let mut end_date = end.date();
        if seconds_of_day(&end) <= TS_END_CUTOFF_SECONDS {
            end_date = end_date
                .pred_opt()
                .ok_or_else(|| unrepresentable(&end_date))?;
        }
        let end_exclusive = end_date
            .succ_opt()
            .ok_or_else(|| unrepresentable(&end_date))?;
        let holidays = self.calendar.holidays(&start_date, &end_date);
        let days = busday_count(&start_date, &end_exclusive, &WeekMask::MON_FRI, &holidays);

        let year_end = start_date
            .checked_add_signed(TimeDelta::days(days_in_year(start_date.year())))
            .ok_or_else(|| unrepresentable(&start_date))?;
        let year_holidays = self.calendar.holidays(&start_date, &year_end);
        let year_days = busday_count(&start_date, &year_end, &WeekMask::MON_FRI, &year_holidays);
        debug!(%start_date, %end_date, days, year_days, "trading business days");
        if year_days == 0 {
            return Err(DayCountError::InvalidPeriod(format!(
                "no business days in the year after {start_date}"
            )));
        }
        Ok(days as f64 / year_days as f64)
    }

    /// [`trading_seconds`](Self::trading_seconds) with `start` defaulting to now and `end`
    /// defaulting to one year after `start`.
    pub fn trading_seconds_or_default(
        &self,
        start: Option<DateTime<FixedOffset>>,
        end: Option<DateTime<FixedOffset>>,
    ) -> DayCountResult<f64> {
        let (start, end) = default_bounds(start, end);
        self.trading_seconds(&start, &end)
    }

    /// [`trading_days`](Self::trading_days) with `start` defaulting to now and `end` defaulting
    /// to one year after `start`.
    pub fn trading_days_or_default(
        &self,
        start: Option<DateTime<FixedOffset>>,
        end: Option<DateTime<FixedOffset>>,
    ) -> DayCountResult<f64> {
        let (start, end) = default_bounds(start, end);
        self.trading_days(&start, &end)
    }
}

fn default_bounds(
    start: Option<DateTime<FixedOffset>>,
    end: Option<DateTime<FixedOffset>>,
) -> (DateTime<FixedOffset>, DateTime<FixedOffset>) {
    let start = start.unwrap_or_else(|| Utc::now().fixed_offset());
    let end = end.unwrap_or_else(|| one_year_after(&start));
    (start, end)
}

fn unrepresentable(date: &NaiveDate) -> DayCountError {
    DayCountError::UnrepresentableDate {
        year: date.year(),
        month: date.month(),
        day: date.day(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::{nd, Cal};
    use chrono_tz::America::Chicago;
    use chrono_tz::Tz;

    fn cst(y: i32, m: u32, d: u32, h: u32, mi: u32) -> DateTime<Tz> {
        Chicago.with_ymd_and_hms(y, m, d, h, mi, 0).unwrap()
    }

    fn synthetic_clock(holidays: Vec<NaiveDate>) -> TradingSessionClock {
        TradingSessionClock::new(TradingCalendar::new(
            Chicago,
            Cal::new(holidays, WeekMask::MON_FRI).into(),
        ))
    }

    fn is_close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_same_day_windows() {
        let clock = synthetic_clock(vec![]);
        // (start, end, expected hours) on the week of 2024-07-07
        let cases = [
            (cst(2024, 7, 8, 10, 0), cst(2024, 7, 8, 15, 0), 5.0),
            (cst(2024, 7, 8, 15, 0), cst(2024, 7, 8, 18, 0), 2.0),
            (cst(2024, 7, 8, 16, 15), cst(2024, 7, 8, 16, 45), 0.0),
            (cst(2024, 7, 8, 16, 30), cst(2024, 7, 8, 17, 30), 0.5),
            (cst(2024, 7, 7, 12, 0), cst(2024, 7, 7, 18, 0), 1.0),
            (cst(2024, 7, 7, 10, 0), cst(2024, 7, 7, 16, 0), 0.0),
            (cst(2024, 7, 12, 15, 0), cst(2024, 7, 12, 18, 0), 1.0),
            (cst(2024, 7, 12, 16, 30), cst(2024, 7, 12, 20, 0), 0.0),
            (cst(2024, 7, 13, 9, 0), cst(2024, 7, 13, 20, 0), 0.0),
        ];
        for (start, end, expected) in cases {
            let result = clock.trading_seconds(&start, &end).unwrap();
            assert_eq!(result, expected * 3600.0, "{start} {end}");
        }
    }

    #[test]
    fn test_same_day_reversed_is_invalid() {
        let clock = synthetic_clock(vec![]);
        let result = clock.trading_seconds(&cst(2024, 7, 8, 15, 0), &cst(2024, 7, 8, 10, 0));
        assert!(matches!(result, Err(DayCountError::InvalidPeriod(_))));
    }

    #[test]
    fn test_repeated_dst_hour_on_a_trading_day() {
        // Tehran left daylight saving at 24:00 on Wednesday 21st September 2022
        let clock = TradingSessionClock::new(TradingCalendar::new(
            chrono_tz::Asia::Tehran,
            Cal::new(vec![], WeekMask::MON_FRI).into(),
        ));
        let before = Utc.with_ymd_and_hms(2022, 9, 21, 19, 0, 0).unwrap(); // 23:30 +04:30
        let after = Utc.with_ymd_and_hms(2022, 9, 21, 19, 40, 0).unwrap(); // 23:10 +03:30
        assert_eq!(clock.trading_seconds(&before, &after).unwrap(), 0.0);
        assert!(matches!(
            clock.trading_seconds(&after, &before),
            Err(DayCountError::InvalidPeriod(_))
        ));
        let later = Utc.with_ymd_and_hms(2022, 9, 21, 20, 15, 0).unwrap(); // 23:45 +03:30
        assert_eq!(clock.trading_seconds(&before, &later).unwrap(), 900.0);
    }

    #[test]
    fn test_same_instant_is_zero() {
        let clock = synthetic_clock(vec![]);
        for t in [
            cst(2024, 7, 7, 18, 0),
            cst(2024, 7, 8, 16, 30),
            cst(2024, 7, 12, 11, 0),
            cst(2024, 7, 13, 11, 0),
        ] {
            assert_eq!(clock.trading_seconds(&t, &t).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_overnight() {
        let clock = synthetic_clock(vec![]);
        let result = clock
            .trading_seconds(&cst(2024, 7, 8, 10, 0), &cst(2024, 7, 9, 10, 0))
            .unwrap();
        assert_eq!(result, 82_800.0);
    }

    #[test]
    fn test_full_week() {
        let clock = synthetic_clock(vec![]);
        let result = clock
            .trading_seconds(&cst(2024, 7, 7, 17, 0), &cst(2024, 7, 12, 16, 0))
            .unwrap();
        assert_eq!(result, 115.0 * 3600.0);
    }

    #[test]
    fn test_weekend_is_zero() {
        let clock = synthetic_clock(vec![]);
        let result = clock
            .trading_seconds(&cst(2024, 7, 12, 16, 0), &cst(2024, 7, 14, 17, 0))
            .unwrap();
        assert_eq!(result, 0.0);
    }

    #[test]
    fn test_saturday_end_gets_no_correction() {
        let clock = synthetic_clock(vec![]);
        let to_saturday = clock
            .trading_seconds(&cst(2024, 7, 12, 10, 0), &cst(2024, 7, 13, 12, 0))
            .unwrap();
        assert_eq!(to_saturday, 6.0 * 3600.0);
    }

    #[test]
    fn test_holiday_in_span() {
        let clock = synthetic_clock(vec![nd(2024, 7, 4)]);
        let result = clock
            .trading_seconds(&cst(2024, 7, 3, 10, 0), &cst(2024, 7, 5, 10, 0))
            .unwrap();
        assert_eq!(result, 23.0 * 3600.0);
        let no_holiday = synthetic_clock(vec![])
            .trading_seconds(&cst(2024, 7, 3, 10, 0), &cst(2024, 7, 5, 10, 0))
            .unwrap();
        assert_eq!(no_holiday, 46.0 * 3600.0);
    }

    #[test]
    fn test_holiday_boundaries() {
        let clock = synthetic_clock(vec![nd(2024, 7, 4)]);
        let from_holiday = clock
            .trading_seconds(&cst(2024, 7, 4, 12, 0), &cst(2024, 7, 5, 10, 0))
            .unwrap();
        assert_eq!(from_holiday, 10.0 * 3600.0);
        let to_holiday = clock
            .trading_seconds(&cst(2024, 7, 3, 20, 0), &cst(2024, 7, 4, 12, 0))
            .unwrap();
        assert_eq!(to_holiday, 4.0 * 3600.0);
        let within_holiday = clock
            .trading_seconds(&cst(2024, 7, 4, 9, 0), &cst(2024, 7, 4, 12, 0))
            .unwrap();
        assert_eq!(within_holiday, 0.0);
    }

    #[test]
    fn test_timezone_normalization() {
        let clock = synthetic_clock(vec![]);
        let start_utc = Utc.with_ymd_and_hms(2024, 7, 8, 15, 0, 0).unwrap();
        let end_utc = Utc.with_ymd_and_hms(2024, 7, 10, 23, 30, 0).unwrap();
        let from_utc = clock.trading_seconds(&start_utc, &end_utc).unwrap();
        let from_local = clock
            .trading_seconds(&cst(2024, 7, 8, 10, 0), &cst(2024, 7, 10, 18, 30))
            .unwrap();
        assert_eq!(from_utc, from_local);
    }

    #[test]
    fn test_fractional_seconds() {
        let clock = synthetic_clock(vec![]);
        let start = cst(2024, 7, 8, 10, 0);
        let end = start + TimeDelta::milliseconds(1_500);
        assert!(is_close(clock.trading_seconds(&start, &end).unwrap(), 1.5));
    }

    #[test]
    fn test_trading_days() {
        let clock = synthetic_clock(vec![]);
        let result = clock
            .trading_days(&cst(2024, 7, 8, 10, 0), &cst(2024, 7, 10, 10, 0))
            .unwrap();
        assert_eq!(result, 2.0);
    }

    #[test]
    fn test_trading_t_over_one_year() {
        let clock = TradingSessionClock::default();
        let start = cst(2024, 3, 14, 11, 20);
        let result = clock.trading_t(&start, &one_year_after(&start)).unwrap();
        assert!(is_close(result, 1.0));
        let half = clock.trading_t(&start, &cst(2024, 9, 14, 11, 20)).unwrap();
        assert!(half > 0.45 && half < 0.55);
    }

    #[test]
    fn test_one_year_after() {
        assert_eq!(one_year_after(&cst(2024, 1, 10, 0, 0)), cst(2025, 1, 10, 0, 0));
        assert_eq!(one_year_after(&cst(2023, 1, 10, 0, 0)), cst(2024, 1, 10, 0, 0));
        let utc = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(one_year_after(&utc), Utc.with_ymd_and_hms(2025, 3, 2, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_trading_ts_synthetic() {
        let clock = synthetic_clock(vec![]);
        let result = clock
            .trading_ts(&cst(2023, 7, 3, 10, 0), &cst(2023, 7, 7, 12, 0))
            .unwrap();
        assert_eq!(result, 5.0 / 261.0);
    }

    #[test]
    fn test_trading_ts_us_trading() {
        let clock = TradingSessionClock::default();
        let result = clock
            .trading_ts(&cst(2024, 7, 1, 10, 0), &cst(2024, 7, 5, 10, 0))
            .unwrap();
        assert_eq!(result, 4.0 / 253.0);
    }

    #[test]
    fn test_trading_ts_cutoffs() {
        let clock = synthetic_clock(vec![]);
        let end = cst(2023, 7, 14, 12, 0);
        let late_start = clock.trading_ts(&cst(2023, 7, 3, 16, 0), &end).unwrap();
        let next_start = clock.trading_ts(&cst(2023, 7, 4, 10, 0), &end).unwrap();
        assert_eq!(late_start, next_start);

        let start = cst(2023, 7, 3, 10, 0);
        let early_end = clock.trading_ts(&start, &cst(2023, 7, 14, 9, 30)).unwrap();
        let previous_end = clock.trading_ts(&start, &cst(2023, 7, 13, 12, 0)).unwrap();
        assert_eq!(early_end, previous_end);
        let after_cutoff = clock.trading_ts(&start, &cst(2023, 7, 14, 9, 31)).unwrap();
        assert!(after_cutoff > early_end);
    }

    #[test]
    fn test_defaults() {
        let clock = TradingSessionClock::default();
        let start = cst(2024, 5, 1, 9, 0).fixed_offset();
        let expected = clock.trading_seconds(&start, &one_year_after(&start)).unwrap();
        assert_eq!(clock.trading_seconds_or_default(Some(start), None).unwrap(), expected);
        assert_eq!(
            clock.trading_days_or_default(Some(start), None).unwrap(),
            expected / FULL_DAY_SECONDS
        );
        let end = cst(2024, 5, 3, 9, 0).fixed_offset();
        assert_eq!(
            clock.trading_seconds_or_default(Some(start), Some(end)).unwrap(),
            2.0 * FULL_DAY_SECONDS
        );
        assert!(clock.trading_seconds_or_default(None, None).unwrap() > 0.0);
    }
}
