//! Error types returned by conventions, calendars and the trading clock.

use thiserror::Error;

/// Errors raised while evaluating a year fraction or a trading duration.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DayCountError {
    /// A period whose denominator evaluates to zero, or whose bounds are inverted where
    /// ordering is required.
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// A local calendar instant which does not exist.
    #[error("Unrepresentable date: {year:04}-{month:02}-{day:02}")]
    UnrepresentableDate { year: i32, month: u32, day: u32 },

    /// A convention specific argument was not supplied to [`Convention::dcf`](crate::scheduling::Convention).
    #[error("`{argument}` must be supplied for '{convention}' type convention.")]
    MissingArgument {
        argument: &'static str,
        convention: &'static str,
    },

    #[error("'{0}' is not found in list of existing calendars.")]
    UnknownCalendar(String),

    #[error("'{0}' is not a recognised day count convention.")]
    UnknownConvention(String),

    #[error("'{0}' is not a recognised timezone.")]
    UnknownTimezone(String),

    /// Week masks are seven characters of '0' or '1', Monday first.
    #[error("'{0}' is not a valid week mask.")]
    InvalidWeekMask(String),
}

/// Result alias used throughout the crate.
pub type DayCountResult<T> = Result<T, DayCountError>;

#[cfg(feature = "python")]
impl From<DayCountError> for pyo3::PyErr {
    fn from(err: DayCountError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
