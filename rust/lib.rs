//! This is the documentation for daycount
//!
//! *daycount* computes year fractions between timezone aware instants. It has two parts:
//!
//! - [`scheduling`]: business day [`Calendar`](scheduling::Calendar)s built from holiday rules,
//!   and the day count [`Convention`](scheduling::Convention)s used for accrual.
//! - [`trading`]: a [`TradingSessionClock`](trading::TradingSessionClock) measuring the time a
//!   market is open between two instants, and year fractions derived from it.
//!
//! Optional Python bindings are compiled with the `python` feature.

#[cfg(test)]
mod tests;

pub mod error;
pub use crate::error::{DayCountError, DayCountResult};

pub mod json;
pub mod scheduling;
pub mod trading;

#[cfg(feature = "python")]
mod py;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Conventions
    m.add_function(wrap_pyfunction!(py::dcf, m)?)?;

    // Trading clock
    m.add_function(wrap_pyfunction!(py::trading_seconds, m)?)?;
    m.add_function(wrap_pyfunction!(py::trading_days, m)?)?;
    m.add_function(wrap_pyfunction!(py::trading_t, m)?)?;
    m.add_function(wrap_pyfunction!(py::trading_ts, m)?)?;

    Ok(())
}
