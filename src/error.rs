//! Error types for the year360 crate.

use std::fmt;

/// A date component that can be rejected on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Year360 month, 0..=11 (or 12 for Intercalaris where accepted).
    Month,
    /// Year360 day within a regular month, 0..=29.
    Day,
    /// Day within Intercalaris, 0..=4 or 0..=5 in leap years.
    IntercalaryDay,
    /// Zero-based day of the Year360 year.
    DayOfYear,
    /// Gregorian month, 1..=12.
    GregorianMonth,
    /// Gregorian day of month, 1..=31.
    GregorianDay,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::Month => "month",
            Component::Day => "day",
            Component::IntercalaryDay => "intercalary day",
            Component::DayOfYear => "day of year",
            Component::GregorianMonth => "Gregorian month",
            Component::GregorianDay => "Gregorian day",
        };
        f.write_str(name)
    }
}

/// Error type for all fallible operations in the year360 crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A supplied component is outside `min..=max`.
    #[error("invalid {component}: {value} (must be {min}..={max})")]
    InvalidComponent {
        /// Which component was rejected.
        component: Component,
        /// The value that was provided.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value in this context.
        max: i64,
    },

    /// The operation would leave a day of year that does not exist in its year.
    #[error("day of year {day_of_year} does not exist in year {year} ({days_in_year} days)")]
    InvalidState {
        /// The year that was requested.
        year: i32,
        /// The day of year that no longer fits.
        day_of_year: u16,
        /// Length of the requested year.
        days_in_year: u16,
    },

    /// The resulting year cannot be represented.
    #[error("date is outside the representable range")]
    OutOfRange,

    /// Text could not be read as a date.
    #[error("cannot parse `{input}` as a date: {reason}")]
    Parse {
        /// The rejected text.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}

impl Error {
    pub(crate) fn invalid(component: Component, value: impl Into<i64>, min: i64, max: i64) -> Self {
        Error::InvalidComponent {
            component,
            value: value.into(),
            min,
            max,
        }
    }
}
