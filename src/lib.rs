//! # year360
//!
//! Conversions between the proleptic Gregorian calendar and the Year360
//! calendar: twelve months of thirty days, then a five-day intercalary period
//! called Intercalaris that grows to six days in leap years. Leap years follow
//! the Gregorian rule plus one exception, years divisible by 3200 are common.
//!
//! The two calendars meet at the Unix epoch: 1970-01-01 is day 10 of Year360
//! year 11970.
//!
//! ```
//! use year360::{GregorianDate, Year360Date};
//!
//! let date = Year360Date::from_gregorian(2024, 10, 19).unwrap();
//! assert_eq!(date.to_string(), "12024-10-02 Wed");
//!
//! let back = "12024-10-02".parse::<Year360Date>().unwrap().to_gregorian().unwrap();
//! assert_eq!(back, GregorianDate::new(2024, 10, 19).unwrap());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `calendar` | Leap rule, year lengths and leap year counting |
//! | `date` | The [`Year360Date`] value type |
//! | `gregorian` | Proleptic Gregorian dates and epoch day counts |
//! | `weekday` | The six-day week |
//! | `clock` | Today's epoch day from the system clock |
//! | `error` | Error types |

pub mod calendar;
pub mod clock;
mod date;
mod div_rem;
mod error;
mod gregorian;
mod weekday;

pub use calendar::{is_leap_year, last_intercalary_day, num_days_in_year, num_leap_years_between};
pub use date::{Year360Date, EPOCH_DAY_OF_YEAR, EPOCH_YEAR};
pub use error::{Component, Error};
pub use gregorian::GregorianDate;
pub use weekday::{UnknownWeekday, Weekday};
