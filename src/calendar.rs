//! Year360 calendar rules.
//!
//! A Year360 year is twelve months of thirty days followed by Intercalaris, a
//! block of five days (six in leap years). The leap rule is the Gregorian one
//! with one more exception on top: years divisible by 3200 are common years.
//! So a 3200-year cycle holds 800 - 32 + 8 - 1 = 775 leap years.

use num_integer::Integer;

use crate::div_rem::MulDivRemFloor;

pub const DAYS_PER_MONTH: u16 = 30;
pub const MONTHS_PER_YEAR: u8 = 12;
/// Month index of the intercalary period.
pub const INTERCALARIS: u8 = 12;
/// Days in the twelve regular months.
pub const REGULAR_DAYS: u16 = DAYS_PER_MONTH * MONTHS_PER_YEAR as u16;
pub const DAYS_PER_WEEK: u16 = 6;

const COMMON_YEAR_DAYS: i64 = 365;
const CYCLE_YEARS: i64 = 3200;
const CYCLE_DAYS: i64 = CYCLE_YEARS * COMMON_YEAR_DAYS + 775;

/// Whether `year` has six intercalary days instead of five.
///
/// ```
/// use year360::is_leap_year;
///
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(2100));
/// assert!(!is_leap_year(3200));
/// ```
pub const fn is_leap_year(year: i32) -> bool {
    if year % 3200 == 0 {
        false
    } else if year % 400 == 0 {
        true
    } else if year % 100 == 0 {
        false
    } else {
        year % 4 == 0
    }
}

/// Length of `year` in days, 365 or 366.
pub const fn num_days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Last valid day index within Intercalaris: 4, or 5 in leap years.
pub const fn last_intercalary_day(year: i32) -> u8 {
    (num_days_in_year(year) - REGULAR_DAYS - 1) as u8
}

/// Number of leap years in `[start, end)`.
///
/// Computed by inclusion-exclusion over the four divisors of the leap rule.
/// When `end < start` the result is the negated count of `[end, start)`, so
/// counts over adjacent ranges always add up.
///
/// ```
/// use year360::num_leap_years_between;
///
/// assert_eq!(num_leap_years_between(0, 3200), 775);
/// assert_eq!(num_leap_years_between(1900, 2001), 25);
/// assert_eq!(num_leap_years_between(2001, 1900), -25);
/// ```
pub fn num_leap_years_between(start: i32, end: i32) -> i64 {
    let start = i64::from(start);
    let end = i64::from(end);
    multiples_between(start, end, 4) - multiples_between(start, end, 100)
        + multiples_between(start, end, 400)
        - multiples_between(start, end, 3200)
}

// Multiples of `k` in [start, end), signed like num_leap_years_between.
fn multiples_between(start: i64, end: i64, k: i64) -> i64 {
    Integer::div_floor(&(end - 1), &k) - Integer::div_floor(&(start - 1), &k)
}

/// Days from the first day of year 0 to the first day of `year`. Negative for
/// negative years.
pub(crate) fn days_before_year(year: i32) -> i64 {
    COMMON_YEAR_DAYS * i64::from(year) + num_leap_years_between(0, year)
}

/// Splits a day count relative to the first day of year 0 into a year and a
/// day of that year.
///
/// Equivalent to subtracting year lengths one year at a time, but the year is
/// first estimated from the average cycle length, which is never off by more
/// than one.
pub(crate) fn year_and_day_of_year(days: i64) -> Option<(i32, u16)> {
    let (estimate, _) = days.mul_div_rem_floor(CYCLE_YEARS, CYCLE_DAYS);
    let mut year = estimate.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    while days_before_year(year) > days {
        year = year.checked_sub(1)?;
    }
    while year < i32::MAX && days_before_year(year + 1) <= days {
        year += 1;
    }
    let day_of_year = u16::try_from(days - days_before_year(year)).ok()?;
    (day_of_year < num_days_in_year(year)).then_some((year, day_of_year))
}
