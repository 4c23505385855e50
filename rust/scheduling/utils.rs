use chrono::prelude::*;

/// Return whether `year` is a Gregorian leap year.
///
/// Divisible by 4, excluding centuries which are not divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the calendar `year`, 365 or 366.
pub fn days_in_year(year: i32) -> i64 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Number of days in a given calendar month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => unreachable!("invalid month"),
    }
}

/// Return whether the date is the last day of its month.
pub fn is_last_day_of_month<T: Datelike>(date: &T) -> bool {
    date.day() == days_in_month(date.year(), date.month())
}

/// Return whether the date is the last day of February, i.e. the 28th or 29th in a leap year.
pub fn is_last_day_of_february<T: Datelike>(date: &T) -> bool {
    date.month() == 2 && is_last_day_of_month(date)
}
