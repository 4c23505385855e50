//! Python wrappers, compiled with the `python` feature.
//!
//! Instants cross the boundary as timezone aware ``datetime`` values.

use chrono::prelude::*;
use pyo3::prelude::*;
use std::str::FromStr;

use crate::json::JSON;
use crate::scheduling::Convention;
use crate::trading::{TradingCalendar, TradingSessionClock};

fn clock_from_json(calendar: Option<&str>) -> PyResult<TradingSessionClock> {
    match calendar {
        None => Ok(TradingSessionClock::default()),
        Some(js) => {
            let calendar = TradingCalendar::from_json(js)
                .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;
            Ok(TradingSessionClock::new(calendar))
        }
    }
}

/// Calculate the day count fraction of a period.
///
/// Parameters
/// ----------
/// convention : str
///     The name of the day count convention, e.g. ``"Act360"`` or ``"30e360ISDA"``.
/// start : datetime
///     The timezone aware start of the period.
/// end : datetime
///     The timezone aware end of the period.
/// next_coupon : datetime, optional
///     Required only for ``"ActActICMA"``.
/// frequency : int, optional
///     Coupons per year. Required only for ``"Act365L"`` and ``"ActActICMA"``.
/// eom : bool, optional
///     Required only for ``"30u360"``.
/// end_is_maturity : bool, optional
///     Required only for ``"30e360ISDA"``.
/// secs : bool
///     Whether to include the time of day in the numerator.
///
/// Returns
/// -------
/// float
#[pyfunction]
#[pyo3(signature = (convention, start, end, next_coupon=None, frequency=None, eom=None, end_is_maturity=None, secs=true))]
#[allow(clippy::too_many_arguments)]
pub(crate) fn dcf(
    convention: &str,
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
    next_coupon: Option<DateTime<FixedOffset>>,
    frequency: Option<u32>,
    eom: Option<bool>,
    end_is_maturity: Option<bool>,
    secs: bool,
) -> PyResult<f64> {
    let convention = Convention::from_str(convention)?;
    Ok(convention.dcf(
        &start,
        &end,
        next_coupon.as_ref(),
        frequency,
        eom,
        end_is_maturity,
        secs,
    )?)
}

/// Return the tradable seconds between two instants.
///
/// ``start`` defaults to now and ``end`` to one year after ``start``. ``calendar`` is an optional
/// JSON ``TradingCalendar``; US trading holidays in US Central time are used otherwise.
#[pyfunction]
#[pyo3(signature = (start=None, end=None, calendar=None))]
pub(crate) fn trading_seconds(
    start: Option<DateTime<FixedOffset>>,
    end: Option<DateTime<FixedOffset>>,
    calendar: Option<&str>,
) -> PyResult<f64> {
    Ok(clock_from_json(calendar)?.trading_seconds_or_default(start, end)?)
}

/// Return the tradable time between two instants in 23 hour trading days.
#[pyfunction]
#[pyo3(signature = (start=None, end=None, calendar=None))]
pub(crate) fn trading_days(
    start: Option<DateTime<FixedOffset>>,
    end: Option<DateTime<FixedOffset>>,
    calendar: Option<&str>,
) -> PyResult<f64> {
    Ok(clock_from_json(calendar)?.trading_days_or_default(start, end)?)
}

/// Return the tradable seconds between two instants as a fraction of the trading year
/// beginning at ``start``.
#[pyfunction]
#[pyo3(signature = (start, end, calendar=None))]
pub(crate) fn trading_t(
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
    calendar: Option<&str>,
) -> PyResult<f64> {
    Ok(clock_from_json(calendar)?.trading_t(&start, &end)?)
}

/// Return the business days between two instants as a fraction of the business days in the
/// year beginning at ``start``.
#[pyfunction]
#[pyo3(signature = (start, end, calendar=None))]
pub(crate) fn trading_ts(
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
    calendar: Option<&str>,
) -> PyResult<f64> {
    Ok(clock_from_json(calendar)?.trading_ts(&start, &end)?)
}
