//! US exchange trading holidays, observed on the trading timezone calendar.
//!
//! Labor Day is defined but disabled: the exchange trades through it.

use chrono::Weekday;

use crate::scheduling::{Holiday, HolidayRule, Observance};

pub const WEEKMASK: &str = "1111100"; // Monday to Friday

pub fn holidays() -> Vec<Holiday> {
    vec![
        Holiday::new(
            "MartinLutherKingJr",
            HolidayRule::NthWeekday {
                month: 1,
                weekday: Weekday::Mon,
                n: 3,
            },
        )
        .since(1986),
        Holiday::new(
            "PresidentsDay",
            HolidayRule::NthWeekday {
                month: 2,
                weekday: Weekday::Mon,
                n: 3,
            },
        )
        .since(1971),
        Holiday::new("GoodFriday", HolidayRule::EasterOffset { days: -2 }),
        Holiday::new(
            "MemorialDay",
            HolidayRule::LastWeekday {
                month: 5,
                weekday: Weekday::Mon,
            },
        )
        .since(1971),
        Holiday::new(
            "Juneteenth",
            HolidayRule::Fixed {
                month: 6,
                day: 19,
                observance: Observance::Actual,
            },
        ),
        Holiday::new(
            "IndependenceDay",
            HolidayRule::Fixed {
                month: 7,
                day: 4,
                observance: Observance::NearestWorkday,
            },
        ),
        Holiday::new(
            "LaborDay",
            HolidayRule::NthWeekday {
                month: 9,
                weekday: Weekday::Mon,
                n: 1,
            },
        )
        .since(1894)
        .disabled(),
        Holiday::new(
            "ThanksgivingDay",
            HolidayRule::NthWeekday {
                month: 11,
                weekday: Weekday::Thu,
                n: 4,
            },
        ),
        Holiday::new(
            "Christmas",
            HolidayRule::Fixed {
                month: 12,
                day: 25,
                observance: Observance::NearestWorkday,
            },
        ),
        Holiday::new(
            "NewYearsDay",
            HolidayRule::Fixed {
                month: 1,
                day: 1,
                observance: Observance::NearestWorkday,
            },
        ),
    ]
}
