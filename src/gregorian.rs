//! Proleptic Gregorian dates and their epoch day counts.

// The gregorian calendar works in cycles of 400 years. Each cycle starts with a leap year.
// From then every 4th year is a leap year, except for every 100th year. So the year
// 1600 is a leap year but 1700, 1800 and 1900 are not. This means that each cycle
// has 100-3=97 leap years and 303 normal years. 97*366 + 303*365 = 146097 days.
//
// Having the leap year at the beginning of a cycle or quadrennium makes calculations more
// complicated, since the extra day sits in the initial period. Shifting values so that
// the leap day comes out at the end of each period lets leap days fall out as an
// "overflow" of the last period. So 2000-03-01 is the zero point, right after the last
// leap day of the preceding cycle, and a quadrennium consists of the "years"
// - 2000-03-01 to 2001-02-28
// - 2001-03-01 to 2002-02-28
// - 2002-03-01 to 2003-02-28
// - 2003-03-01 to 2004-02-29

use std::fmt;

use num_integer::Integer;

use crate::div_rem::ClampedDivRem;
use crate::error::{Component, Error};

const GREGORIAN_CYCLE_DAYS: u32 = 97 * 366 + 303 * 365;
const GREGORIAN_CENTURY_DAYS: u16 = 24 * 366 + 76 * 365;
#[allow(clippy::identity_op)]
const GREGORIAN_QUADRENNIUM_DAYS: u16 = 3 * 365 + 1 * 366;
const GREGORIAN_YEAR_DAYS: u16 = 365;
const GREGORIAN_CYCLE_YEARS: u16 = 400;
const GREGORIAN_CENTURY_YEARS: u8 = 100;
const GREGORIAN_QUADRENNIUM_YEARS: u8 = 4;

const NORMALIZED_DATE_OFFSET_DAYS: i64 = 11017; // 11017 days from 1970-01-01 to 2000-03-01
const MARCH_MONTH_STARTS: [u16; 13] =
    [0, 31, 61, 92, 122, 153, 184, 214, 245, 275, 306, 337, 65535]; // Index 0 = March

const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A day of the proleptic Gregorian calendar.
///
/// Year 0 is 1 BC, year -1 is 2 BC and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Validates a Gregorian date with `month` in 1..=12 and `day` within the month.
    ///
    /// ```
    /// use year360::GregorianDate;
    ///
    /// assert!(GregorianDate::new(2000, 2, 29).is_ok());
    /// assert!(GregorianDate::new(1900, 2, 29).is_err());
    /// ```
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, Error> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid(Component::GregorianMonth, month, 1, 12));
        }
        let max_day = days_in_month(year, month);
        if !(1..=max_day).contains(&day) {
            return Err(Error::invalid(
                Component::GregorianDay,
                day,
                1,
                i64::from(max_day),
            ));
        }
        Ok(Self { year, month, day })
    }

    /// The date `days` days after 1970-01-01.
    pub fn from_epoch_day(days: i64) -> Result<Self, Error> {
        let (year, month, day) = NormalizedDate::from_day(days)
            .ok_or(Error::OutOfRange)?
            .to_date();
        let year = i32::try_from(year).map_err(|_| Error::OutOfRange)?;
        Ok(Self { year, month, day })
    }

    /// Days since 1970-01-01, negative before it.
    pub fn to_epoch_day(self) -> i64 {
        NormalizedDate::from_date(self.year, self.month, self.day).to_day()
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u8 {
        self.month
    }

    pub fn day(self) -> u8 {
        self.day
    }

    pub fn is_leap_year(self) -> bool {
        is_leap_year(self.year)
    }

    pub fn days_in_month(self) -> u8 {
        days_in_month(self.year, self.month)
    }
}

/// ISO 8601 calendar date. Years outside 0..=9999 use the expanded
/// six-digit signed form.
impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..=9999).contains(&self.year) {
            write!(f, "{:04}", self.year)?;
        } else {
            let sign = if self.year < 0 { '-' } else { '+' };
            write!(f, "{sign}{:06}", self.year.unsigned_abs())?;
        }
        write!(f, "-{:02}-{:02}", self.month, self.day)
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(year: i32, month: u8) -> u8 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_IN_MONTH[usize::from(month - 1)]
    }
}

fn month_from_day_offset(day: u16) -> u8 {
    let mut month = (day / 30) as u8;
    if day < MARCH_MONTH_STARTS[month as usize] {
        // We have overshot the month. Move back.
        month -= 1;
    }
    month
}

struct NormalizedDate {
    // Number of 400-year cycles since 2000-03-01.
    cycle: i64,
    // Number of centuries since the start of the cycle (0-3)
    century: u8,
    // Number of quadrennia (4-year periods) since the start of the century (0-24).
    quadrennium: u8,
    // Number of years since the start of the quadrennium (0-3).
    year: u8,
    // Number of days since the start of the year (0-365, where the year starts March 1).
    day: u16,
}

impl NormalizedDate {
    fn from_day(day: i64) -> Option<Self> {
        let day = day.checked_sub(NORMALIZED_DATE_OFFSET_DAYS)?;
        let (cycle, days_into_cycle) = day.div_mod_floor(&i64::from(GREGORIAN_CYCLE_DAYS));
        let days_into_cycle = days_into_cycle as u32; // 2^18 days per cycle

        // The first three centuries of each cycle have 24 leap years, the fourth has 25
        // and so one extra day at the end.
        let (century, days_into_century) =
            days_into_cycle.clamped_div_rem(u32::from(GREGORIAN_CENTURY_DAYS), 3_u8);
        let days_into_century = days_into_century as u16; // 2^16 days per century

        // The last quadrennium of the first three centuries lacks its leap day, so it is one
        // day short and a plain division is enough.
        let (quadrennium, days_into_quadrennium) =
            days_into_century.div_rem(&GREGORIAN_QUADRENNIUM_DAYS);
        let quadrennium = quadrennium as u8;

        let (years_into_quadrennium, days_into_year) =
            days_into_quadrennium.clamped_div_rem(GREGORIAN_YEAR_DAYS, 3_u8);

        Some(NormalizedDate {
            cycle,
            century,
            quadrennium,
            year: years_into_quadrennium,
            day: days_into_year,
        })
    }

    fn to_day(&self) -> i64 {
        self.cycle * i64::from(GREGORIAN_CYCLE_DAYS)
            + i64::from(self.century) * i64::from(GREGORIAN_CENTURY_DAYS)
            + i64::from(self.quadrennium) * i64::from(GREGORIAN_QUADRENNIUM_DAYS)
            + i64::from(self.year) * i64::from(GREGORIAN_YEAR_DAYS)
            + i64::from(self.day)
            + NORMALIZED_DATE_OFFSET_DAYS
    }

    // Expects a validated date.
    fn from_date(year: i32, month: u8, day: u8) -> Self {
        let mut year = i64::from(year);
        let mut month = month - 1;
        let day = day - 1;
        if month < 2 {
            month += 12;
            year -= 1;
        }
        month -= 2;
        year -= 2000;
        let (cycle, years_into_cycle) = year.div_mod_floor(&i64::from(GREGORIAN_CYCLE_YEARS));
        let years_into_cycle = years_into_cycle as u16; // 2^9 years per cycle
        let (century, years_into_century) =
            years_into_cycle.clamped_div_rem(u16::from(GREGORIAN_CENTURY_YEARS), 3_u8);
        let (quadrennium, years_into_quadrennium) =
            years_into_century.clamped_div_rem(u16::from(GREGORIAN_QUADRENNIUM_YEARS), 24_u8);

        NormalizedDate {
            cycle,
            century,
            quadrennium,
            year: years_into_quadrennium as u8,
            day: MARCH_MONTH_STARTS[month as usize] + u16::from(day),
        }
    }

    fn to_date(&self) -> (i64, u8, u8) {
        let mut year = 2000
            + 400 * self.cycle
            + 100 * i64::from(self.century)
            + 4 * i64::from(self.quadrennium)
            + i64::from(self.year);

        // Shifted so March is first, the leap day is the last day of the year.
        let mut month = month_from_day_offset(self.day);
        let days_into_month = (self.day - MARCH_MONTH_STARTS[month as usize]) as u8;

        // Back to January-based months.
        month += 2;
        if month >= 12 {
            month -= 12;
            year += 1;
        }
        (year, month + 1, days_into_month + 1)
    }
}
