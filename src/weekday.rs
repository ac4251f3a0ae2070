//! The six-day Year360 week.

use std::fmt;
use std::str::FromStr;

use crate::calendar::DAYS_PER_WEEK;

/// Day of the week. The Year360 week has no Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

const WEEKDAYS: [Weekday; DAYS_PER_WEEK as usize] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

impl Weekday {
    /// Weekday of the given zero-based day index, wrapping every six days.
    pub fn from_index(index: u16) -> Self {
        WEEKDAYS[usize::from(index % DAYS_PER_WEEK)]
    }

    /// Zero-based position in the week, Monday being 0.
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Returned when text is not one of the six weekday abbreviations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown weekday `{0}`")]
pub struct UnknownWeekday(pub String);

impl FromStr for Weekday {
    type Err = UnknownWeekday;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WEEKDAYS
            .into_iter()
            .find(|day| day.abbreviation().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownWeekday(s.to_owned()))
    }
}
