//! Define a generic Western business weekday calendar without any specific holidays.

use crate::scheduling::Holiday;

pub const WEEKMASK: &str = "1111100"; // Monday to Friday

pub fn holidays() -> Vec<Holiday> {
    vec![] // no specific holidays
}
