//! The Year360 date value type.

use std::fmt;
use std::str::FromStr;

use crate::calendar::{
    self, DAYS_PER_MONTH, DAYS_PER_WEEK, INTERCALARIS, MONTHS_PER_YEAR, REGULAR_DAYS,
};
use crate::clock;
use crate::error::{Component, Error};
use crate::gregorian::GregorianDate;
use crate::weekday::Weekday;

/// Year360 year holding 1970-01-01.
pub const EPOCH_YEAR: i32 = 11970;
/// Day of [`EPOCH_YEAR`] that is 1970-01-01.
pub const EPOCH_DAY_OF_YEAR: u16 = 10;

const SECONDS_PER_DAY: i64 = 86_400;
/// Marks negative years in the textual form, where `-` separates fields.
const MINUS_SIGN: char = '\u{2212}';

/// A day in the Year360 calendar.
///
/// The day of year is always valid for the year: the setters either reject
/// values that do not fit or, for [`Year360Date::set_day_of_year_normalized`]
/// and [`Year360Date::add_days`], carry them into neighbouring years.
///
/// ```
/// use year360::Year360Date;
///
/// let date = Year360Date::from_gregorian(1970, 1, 1).unwrap();
/// assert_eq!(date.year(), 11970);
/// assert_eq!(date.day_of_year(), 10);
/// assert_eq!(date.to_string(), "11970-00-10 Fri");
/// assert_eq!(date.to_epoch_day(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year360Date {
    year: i32,
    day_of_year: u16,
}

impl Year360Date {
    /// Creates a date in one of the twelve regular months.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponent`] if `month` is not in 0..=11 or
    /// `day` is not in 0..=29. Use [`Year360Date::intercalary`] for days of
    /// Intercalaris.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, Error> {
        if month >= MONTHS_PER_YEAR {
            return Err(Error::invalid(
                Component::Month,
                month,
                0,
                i64::from(MONTHS_PER_YEAR - 1),
            ));
        }
        if u16::from(day) >= DAYS_PER_MONTH {
            return Err(Error::invalid(
                Component::Day,
                day,
                0,
                i64::from(DAYS_PER_MONTH - 1),
            ));
        }
        Ok(Self {
            year,
            day_of_year: u16::from(month) * DAYS_PER_MONTH + u16::from(day),
        })
    }

    /// Creates a date within Intercalaris.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponent`] if `day` is past the last
    /// intercalary day of `year` (4, or 5 in leap years).
    pub fn intercalary(year: i32, day: u8) -> Result<Self, Error> {
        let last = calendar::last_intercalary_day(year);
        if day > last {
            return Err(Error::invalid(
                Component::IntercalaryDay,
                day,
                0,
                i64::from(last),
            ));
        }
        Ok(Self {
            year,
            day_of_year: REGULAR_DAYS + u16::from(day),
        })
    }

    /// Creates a date from a zero-based day of year.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponent`] if the day does not exist in `year`.
    pub fn from_day_of_year(year: i32, day_of_year: u16) -> Result<Self, Error> {
        let day_of_year = checked_day_of_year(year, i64::from(day_of_year))?;
        Ok(Self { year, day_of_year })
    }

    /// The date `days` days after 1970-01-01.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the Year360 year does not fit in an
    /// `i32`.
    pub fn from_epoch_day(days: i64) -> Result<Self, Error> {
        let mut date = Self {
            year: EPOCH_YEAR,
            day_of_year: EPOCH_DAY_OF_YEAR,
        };
        let day_of_year = days
            .checked_add(i64::from(EPOCH_DAY_OF_YEAR))
            .ok_or(Error::OutOfRange)?;
        date.set_day_of_year_normalized(day_of_year)?;
        Ok(date)
    }

    /// Converts a proleptic Gregorian date.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponent`] if `month` is not in 1..=12 or
    /// `day` is not a day of that month, and [`Error::OutOfRange`] if the
    /// Year360 year (10000 after the Gregorian one) does not fit in an `i32`.
    pub fn from_gregorian(year: i32, month: u8, day: u8) -> Result<Self, Error> {
        Self::from_gregorian_date(GregorianDate::new(year, month, day)?)
    }

    /// Converts an already validated Gregorian date.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the Year360 year does not fit in an
    /// `i32`.
    pub fn from_gregorian_date(date: GregorianDate) -> Result<Self, Error> {
        Self::from_epoch_day(date.to_epoch_day())
    }

    /// The current date in UTC, according to the system clock.
    pub fn today() -> Result<Self, Error> {
        let days = clock::today_epoch_day();
        #[cfg(feature = "log")]
        log::debug!("system clock is at epoch day {days}");
        Self::from_epoch_day(days)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based day of the year.
    pub fn day_of_year(&self) -> u16 {
        self.day_of_year
    }

    /// Zero-based month, or [`INTERCALARIS`] (12) for the intercalary days.
    pub fn month(&self) -> u8 {
        if self.is_intercalary() {
            INTERCALARIS
        } else {
            (self.day_of_year / DAYS_PER_MONTH) as u8
        }
    }

    /// Zero-based day of the month, or of Intercalaris.
    pub fn day(&self) -> u8 {
        if self.is_intercalary() {
            (self.day_of_year - REGULAR_DAYS) as u8
        } else {
            (self.day_of_year % DAYS_PER_MONTH) as u8
        }
    }

    pub fn is_intercalary(&self) -> bool {
        self.day_of_year >= REGULAR_DAYS
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::from_index(self.day_of_year)
    }

    /// Three-letter abbreviation of the weekday.
    pub fn weekday_string(&self) -> &'static str {
        self.weekday().abbreviation()
    }

    /// Zero-based six-day week of the year.
    pub fn week(&self) -> u16 {
        self.day_of_year / DAYS_PER_WEEK
    }

    pub fn is_leap_year(&self) -> bool {
        calendar::is_leap_year(self.year)
    }

    pub fn num_days_in_year(&self) -> u16 {
        calendar::num_days_in_year(self.year)
    }

    pub fn last_intercalary_day(&self) -> u8 {
        calendar::last_intercalary_day(self.year)
    }

    /// Moves the date to another year, keeping the day of year.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if the day of year does not exist in
    /// `year`, i.e. the last day of a leap year moved to a common year. The
    /// date is left unchanged.
    pub fn set_year(&mut self, year: i32) -> Result<(), Error> {
        let days_in_year = calendar::num_days_in_year(year);
        if self.day_of_year >= days_in_year {
            return Err(Error::InvalidState {
                year,
                day_of_year: self.day_of_year,
                days_in_year,
            });
        }
        self.year = year;
        Ok(())
    }

    /// Sets the day of year within the current year.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponent`] if `day_of_year` is negative or not
    /// below the length of the year. See
    /// [`Year360Date::set_day_of_year_normalized`] to carry into other years.
    pub fn set_day_of_year(&mut self, day_of_year: i64) -> Result<(), Error> {
        self.day_of_year = checked_day_of_year(self.year, day_of_year)?;
        Ok(())
    }

    /// Sets the day of year counted from the start of the current year,
    /// carrying whole years forwards or backwards until it fits.
    ///
    /// ```
    /// use year360::Year360Date;
    ///
    /// let mut date = Year360Date::new(11970, 0, 0).unwrap();
    /// date.set_day_of_year_normalized(365).unwrap();
    /// assert_eq!((date.year(), date.day_of_year()), (11971, 0));
    ///
    /// date.set_day_of_year_normalized(-1).unwrap();
    /// assert_eq!((date.year(), date.day_of_year()), (11970, 364));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the resulting year does not fit an
    /// `i32`. The date is left unchanged.
    pub fn set_day_of_year_normalized(&mut self, day_of_year: i64) -> Result<(), Error> {
        let days = calendar::days_before_year(self.year)
            .checked_add(day_of_year)
            .ok_or(Error::OutOfRange)?;
        let (year, day_of_year) =
            calendar::year_and_day_of_year(days).ok_or(Error::OutOfRange)?;
        #[cfg(feature = "log")]
        {
            if year != self.year {
                log::trace!("carried into year {year} from year {}", self.year);
            }
        }
        self.year = year;
        self.day_of_year = day_of_year;
        Ok(())
    }

    /// Moves the date by `days`, which may be negative.
    pub fn add_days(&mut self, days: i64) -> Result<(), Error> {
        let day_of_year = i64::from(self.day_of_year)
            .checked_add(days)
            .ok_or(Error::OutOfRange)?;
        self.set_day_of_year_normalized(day_of_year)
    }

    /// Moves the date to another month of the same year, keeping the day of
    /// the month. Month 12 moves into Intercalaris.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponent`] if `month` is above 12, or if it
    /// is 12 and the day is past the end of Intercalaris.
    pub fn set_month(&mut self, month: u8) -> Result<(), Error> {
        let day = self.day();
        *self = if month == INTERCALARIS {
            Self::intercalary(self.year, day)?
        } else if month < MONTHS_PER_YEAR {
            Self::new(self.year, month, day)?
        } else {
            return Err(Error::invalid(
                Component::Month,
                month,
                0,
                i64::from(INTERCALARIS),
            ));
        };
        Ok(())
    }

    /// Moves the date to another day of the current month.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponent`] if the month has no such day.
    pub fn set_day(&mut self, day: u8) -> Result<(), Error> {
        *self = if self.is_intercalary() {
            Self::intercalary(self.year, day)?
        } else {
            Self::new(self.year, self.month(), day)?
        };
        Ok(())
    }

    /// Days since 1970-01-01, negative before it.
    pub fn to_epoch_day(&self) -> i64 {
        calendar::days_before_year(self.year) - calendar::days_before_year(EPOCH_YEAR)
            + i64::from(self.day_of_year)
            - i64::from(EPOCH_DAY_OF_YEAR)
    }

    /// Unix time at midnight UTC starting this day.
    pub fn unix_timestamp(&self) -> i64 {
        self.to_epoch_day() * SECONDS_PER_DAY
    }

    /// The same day in the proleptic Gregorian calendar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the Gregorian year does not fit an `i32`.
    pub fn to_gregorian(&self) -> Result<GregorianDate, Error> {
        GregorianDate::from_epoch_day(self.to_epoch_day())
    }

    /// `YYYYY-MM-DD`, with the year zero-padded to five digits. Negative
    /// years start with U+2212 MINUS SIGN so the field separator stays
    /// unambiguous.
    pub fn to_date_string(&self) -> String {
        let sign = if self.year < 0 {
            MINUS_SIGN.to_string()
        } else {
            String::new()
        };
        format!(
            "{sign}{:05}-{:02}-{:02}",
            self.year.unsigned_abs(),
            self.month(),
            self.day()
        )
    }
}

fn checked_day_of_year(year: i32, day_of_year: i64) -> Result<u16, Error> {
    let days_in_year = calendar::num_days_in_year(year);
    u16::try_from(day_of_year)
        .ok()
        .filter(|&day| day < days_in_year)
        .ok_or_else(|| {
            Error::invalid(
                Component::DayOfYear,
                day_of_year,
                0,
                i64::from(days_in_year - 1),
            )
        })
}

impl TryFrom<GregorianDate> for Year360Date {
    type Error = Error;

    fn try_from(date: GregorianDate) -> Result<Self, Self::Error> {
        Self::from_gregorian_date(date)
    }
}

impl fmt::Display for Year360Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_date_string(), self.weekday())
    }
}

/// Reads `YYYYY-MM-DD` with an optional weekday suffix, as written by
/// [`Display`](fmt::Display). Month 12 denotes Intercalaris. A leading `−`
/// or `-` makes the year negative.
impl FromStr for Year360Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = |reason: &'static str| Error::Parse {
            input: s.to_owned(),
            reason,
        };

        let text = s.trim();
        let (date, weekday) = match text.split_once(' ') {
            Some((date, weekday)) => (date, Some(weekday.trim())),
            None => (text, None),
        };
        let (negative, date) = match date
            .strip_prefix(MINUS_SIGN)
            .or_else(|| date.strip_prefix('-'))
        {
            Some(rest) => (true, rest),
            None => (false, date),
        };

        let mut fields = date.split('-');
        let (Some(year), Some(month), Some(day), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(parse_error("expected YYYYY-MM-DD"));
        };
        let is_number = |field: &str| !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit());
        if ![year, month, day].into_iter().all(is_number) {
            return Err(parse_error("fields must be decimal numbers"));
        }

        let magnitude: i64 = year.parse().map_err(|_| parse_error("year is too large"))?;
        let year = i32::try_from(if negative { -magnitude } else { magnitude })
            .map_err(|_| parse_error("year is too large"))?;
        let month: u8 = month.parse().map_err(|_| parse_error("month is too large"))?;
        let day: u8 = day.parse().map_err(|_| parse_error("day is too large"))?;

        let date = match month {
            INTERCALARIS => Self::intercalary(year, day)?,
            m if m < MONTHS_PER_YEAR => Self::new(year, m, day)?,
            _ => {
                return Err(Error::invalid(
                    Component::Month,
                    month,
                    0,
                    i64::from(INTERCALARIS),
                ))
            }
        };

        if let Some(weekday) = weekday {
            let weekday: Weekday = weekday
                .parse()
                .map_err(|_| parse_error("unknown weekday"))?;
            if weekday != date.weekday() {
                return Err(parse_error("weekday does not match the date"));
            }
        }
        Ok(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(year: i32, day_of_year: u16) -> Year360Date {
        Year360Date::from_day_of_year(year, day_of_year).unwrap()
    }

    #[test]
    fn test_anchor() {
        let anchor = at(EPOCH_YEAR, EPOCH_DAY_OF_YEAR);
        assert_eq!(anchor.to_epoch_day(), 0);
        assert_eq!(anchor.unix_timestamp(), 0);
        assert_eq!(anchor.to_date_string(), "11970-00-10");
        assert_eq!(anchor.to_gregorian(), GregorianDate::new(1970, 1, 1));
        assert_eq!(Year360Date::from_epoch_day(0), Ok(anchor));
    }

    #[test]
    fn test_from_gregorian() {
        let cases: &[((i32, u8, u8), &str)] = &[
            ((1970, 1, 1), "11970-00-10 Fri"),
            ((1969, 12, 31), "11970-00-09 Thu"),
            ((2000, 1, 1), "12000-00-10 Fri"),
            ((2024, 10, 19), "12024-10-02 Wed"),
            ((2026, 10, 19), "12026-10-01 Tue"),
            ((1600, 3, 1), "11600-02-10 Fri"),
            ((1, 1, 1), "10001-00-10 Fri"),
        ];
        for &((year, month, day), expected) in cases {
            let date = Year360Date::from_gregorian(year, month, day).unwrap();
            assert_eq!(date.to_string(), expected);
            assert_eq!(
                date.to_gregorian(),
                GregorianDate::new(year, month, day),
                "{expected}"
            );
        }
    }

    #[test]
    fn test_from_gregorian_rejects_invalid_dates() {
        assert_eq!(
            Year360Date::from_gregorian(2023, 2, 29),
            Err(Error::invalid(Component::GregorianDay, 29, 1, 28))
        );
        assert_eq!(
            Year360Date::from_gregorian(2023, 13, 1),
            Err(Error::invalid(Component::GregorianMonth, 13, 1, 12))
        );
    }

    #[test]
    fn test_new() {
        let date = Year360Date::new(12024, 10, 2).unwrap();
        assert_eq!(date.day_of_year(), 302);
        assert_eq!(date.month(), 10);
        assert_eq!(date.day(), 2);
        assert!(!date.is_intercalary());

        let date = Year360Date::new(-5, 11, 29).unwrap();
        assert_eq!(date.day_of_year(), 359);

        assert_eq!(
            Year360Date::new(11970, 12, 0),
            Err(Error::invalid(Component::Month, 12, 0, 11))
        );
        assert_eq!(
            Year360Date::new(11970, 0, 30),
            Err(Error::invalid(Component::Day, 30, 0, 29))
        );
    }

    #[test]
    fn test_intercalary() {
        let date = Year360Date::intercalary(11970, 4).unwrap();
        assert_eq!(date.day_of_year(), 364);
        assert_eq!(date.month(), INTERCALARIS);
        assert_eq!(date.day(), 4);
        assert!(date.is_intercalary());
        assert_eq!(date.to_date_string(), "11970-12-04");

        let date = Year360Date::intercalary(11972, 5).unwrap();
        assert_eq!(date.day_of_year(), 365);
        assert_eq!(date.day(), 5);

        assert_eq!(
            Year360Date::intercalary(11970, 5),
            Err(Error::invalid(Component::IntercalaryDay, 5, 0, 4))
        );
        assert_eq!(
            Year360Date::intercalary(11970, 6),
            Err(Error::invalid(Component::IntercalaryDay, 6, 0, 4))
        );
        // 3200-year exception: 12800 is a common year.
        assert!(Year360Date::intercalary(12800, 5).is_err());
    }

    #[test]
    fn test_from_day_of_year() {
        assert!(Year360Date::from_day_of_year(11972, 365).is_ok());
        assert_eq!(
            Year360Date::from_day_of_year(11970, 365),
            Err(Error::invalid(Component::DayOfYear, 365, 0, 364))
        );
    }

    #[test]
    fn test_accessors() {
        let date = at(11970, 0);
        assert_eq!(date.weekday(), Weekday::Mon);
        assert_eq!(date.week(), 0);

        let date = at(11970, 37);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 7);
        assert_eq!(date.weekday(), Weekday::Tue);
        assert_eq!(date.weekday_string(), "Tue");
        assert_eq!(date.week(), 6);

        let date = at(11972, 365);
        assert_eq!(date.month(), 12);
        assert_eq!(date.day(), 5);
        assert_eq!(date.weekday(), Weekday::Sat);
        assert_eq!(date.week(), 60);
        assert!(date.is_leap_year());
        assert_eq!(date.num_days_in_year(), 366);
        assert_eq!(date.last_intercalary_day(), 5);
    }

    #[test]
    fn test_set_year() {
        let mut date = at(11972, 100);
        date.set_year(11973).unwrap();
        assert_eq!((date.year(), date.day_of_year()), (11973, 100));

        let mut date = at(11972, 365);
        assert_eq!(
            date.set_year(11973),
            Err(Error::InvalidState {
                year: 11973,
                day_of_year: 365,
                days_in_year: 365,
            })
        );
        // Unchanged after the rejected call.
        assert_eq!((date.year(), date.day_of_year()), (11972, 365));
        date.set_year(11976).unwrap();
        assert_eq!(date.year(), 11976);
    }

    #[test]
    fn test_set_day_of_year() {
        let mut date = at(11970, 0);
        date.set_day_of_year(364).unwrap();
        assert_eq!(date.day_of_year(), 364);
        assert_eq!(
            date.set_day_of_year(365),
            Err(Error::invalid(Component::DayOfYear, 365, 0, 364))
        );
        assert_eq!(
            date.set_day_of_year(-1),
            Err(Error::invalid(Component::DayOfYear, -1, 0, 364))
        );
        assert_eq!(date.day_of_year(), 364);
    }

    #[test]
    fn test_set_day_of_year_normalized_carries() {
        for year in [-3201, -1, 0, 1, 11970, 11972, 12799, 12800, 15999] {
            let length = i64::from(calendar::num_days_in_year(year));

            let mut date = at(year, 0);
            date.set_day_of_year_normalized(length).unwrap();
            assert_eq!((date.year(), date.day_of_year()), (year + 1, 0));

            let mut date = at(year, 0);
            date.set_day_of_year_normalized(-1).unwrap();
            let previous = calendar::num_days_in_year(year - 1);
            assert_eq!((date.year(), date.day_of_year()), (year - 1, previous - 1));
        }
    }

    #[test]
    fn test_set_day_of_year_normalized_is_idempotent() {
        let offsets = [
            0,
            1,
            -1,
            364,
            365,
            366,
            -365,
            -366,
            1_000,
            -1_000,
            1_168_775,
            -1_168_776,
            123_456_789,
            -987_654_321,
        ];
        for offset in offsets {
            let mut date = at(11970, 10);
            date.set_day_of_year_normalized(offset).unwrap();
            assert!(date.day_of_year() < date.num_days_in_year());

            let before = date;
            date.set_day_of_year_normalized(i64::from(date.day_of_year()))
                .unwrap();
            assert_eq!(date, before);

            // Same as walking there one day at a time would be, expressed in epoch days.
            assert_eq!(date.to_epoch_day(), offset - 10);
        }
    }

    #[test]
    fn test_set_day_of_year_normalized_out_of_range() {
        let mut date = at(i32::MAX, 0);
        assert_eq!(date.set_day_of_year_normalized(365), Err(Error::OutOfRange));
        assert_eq!(date, Year360Date::from_day_of_year(i32::MAX, 0).unwrap());
        date.set_day_of_year_normalized(364).unwrap();
        assert_eq!(date.day_of_year(), 364);

        let mut date = at(i32::MIN, 0);
        assert_eq!(date.set_day_of_year_normalized(-1), Err(Error::OutOfRange));
        assert_eq!(
            date.set_day_of_year_normalized(i64::MIN),
            Err(Error::OutOfRange)
        );

        assert_eq!(Year360Date::from_epoch_day(i64::MAX), Err(Error::OutOfRange));
        assert_eq!(Year360Date::from_epoch_day(i64::MIN), Err(Error::OutOfRange));
        assert_eq!(
            Year360Date::from_gregorian(i32::MAX, 12, 31),
            Err(Error::OutOfRange)
        );
        let gregorian = GregorianDate::new(i32::MAX - 9_999, 1, 1).unwrap();
        assert_eq!(
            Year360Date::from_gregorian_date(gregorian),
            Err(Error::OutOfRange)
        );
    }

    #[test]
    fn test_add_days() {
        let mut date = Year360Date::from_gregorian(1970, 1, 1).unwrap();
        date.add_days(20015).unwrap();
        assert_eq!(date, Year360Date::from_gregorian(2024, 10, 19).unwrap());
        date.add_days(-20016).unwrap();
        assert_eq!(date, Year360Date::from_gregorian(1969, 12, 31).unwrap());
        assert_eq!(date.add_days(i64::MAX), Err(Error::OutOfRange));
    }

    #[test]
    fn test_set_month() {
        let mut date = Year360Date::new(11970, 3, 4).unwrap();
        date.set_month(11).unwrap();
        assert_eq!((date.month(), date.day()), (11, 4));
        date.set_month(12).unwrap();
        assert_eq!((date.month(), date.day()), (12, 4));
        date.set_month(0).unwrap();
        assert_eq!((date.month(), date.day()), (0, 4));

        let mut date = Year360Date::new(11970, 3, 20).unwrap();
        assert_eq!(
            date.set_month(12),
            Err(Error::invalid(Component::IntercalaryDay, 20, 0, 4))
        );
        assert_eq!(
            date.set_month(13),
            Err(Error::invalid(Component::Month, 13, 0, 12))
        );
        assert_eq!((date.month(), date.day()), (3, 20));
    }

    #[test]
    fn test_set_day() {
        let mut date = Year360Date::new(11970, 3, 4).unwrap();
        date.set_day(29).unwrap();
        assert_eq!((date.month(), date.day()), (3, 29));
        assert_eq!(
            date.set_day(30),
            Err(Error::invalid(Component::Day, 30, 0, 29))
        );

        let mut date = Year360Date::intercalary(11972, 0).unwrap();
        date.set_day(5).unwrap();
        assert_eq!(date.day_of_year(), 365);
        let mut date = Year360Date::intercalary(11970, 0).unwrap();
        assert_eq!(
            date.set_day(5),
            Err(Error::invalid(Component::IntercalaryDay, 5, 0, 4))
        );
    }

    #[test]
    fn test_ordering() {
        assert!(at(11970, 364) < at(11971, 0));
        assert!(at(-1, 0) < at(0, 0));
        assert!(at(11970, 3) < at(11970, 4));
    }

    #[test]
    fn test_negative_years() {
        let date = Year360Date::new(-25, 2, 10).unwrap();
        assert_eq!(date.to_date_string(), "\u{2212}00025-02-10");
        assert_eq!(date.to_string(), "\u{2212}00025-02-10 Fri");

        let date = Year360Date::from_epoch_day(date.to_epoch_day()).unwrap();
        assert_eq!(date.year(), -25);
        assert_eq!(date.day_of_year(), 70);

        let date = Year360Date::new(-1, 11, 29).unwrap();
        assert_eq!(date.to_date_string(), "\u{2212}00001-11-29");
        assert_eq!(date.to_epoch_day() + 6, at(0, 0).to_epoch_day());
    }

    #[test]
    fn test_epoch_day_between_years() {
        assert_eq!(at(11971, 0).to_epoch_day(), 355);
        assert_eq!(at(11970, 364).to_epoch_day(), 354);
        assert_eq!(at(0, 0).to_epoch_day(), -4_371_959);
        assert_eq!(at(-1, 364).to_epoch_day(), -4_371_960);
    }

    #[test]
    fn test_parse() {
        assert_eq!("11970-00-10".parse(), Ok(at(11970, 10)));
        assert_eq!("11970-00-10 Fri".parse(), Ok(at(11970, 10)));
        assert_eq!(" 11972-12-05 Sat ".parse(), Ok(at(11972, 365)));
        assert_eq!("\u{2212}00025-02-10".parse(), Ok(at(-25, 70)));
        assert_eq!("-00025-02-10".parse(), Ok(at(-25, 70)));
        assert_eq!("5-1-1".parse(), Ok(at(5, 31)));

        for text in ["11970-00-10 Sat", "11970/00/10", "11970-00", "11970-00-10-1", "x-00-10"] {
            assert!(
                matches!(text.parse::<Year360Date>(), Err(Error::Parse { .. })),
                "{text}"
            );
        }
        assert_eq!(
            "11970-12-05".parse::<Year360Date>(),
            Err(Error::invalid(Component::IntercalaryDay, 5, 0, 4))
        );
        assert_eq!(
            "11970-13-00".parse::<Year360Date>(),
            Err(Error::invalid(Component::Month, 13, 0, 12))
        );
        assert_eq!(
            "11972-99-00".parse::<Year360Date>(),
            Err(Error::invalid(Component::Month, 99, 0, 12))
        );
    }

    #[test]
    fn test_display_roundtrip() {
        let dates = [
            at(11970, 10),
            at(11972, 365),
            at(-25, 70),
            at(0, 0),
            at(123_456, 200),
            at(i32::MIN, 0),
        ];
        for date in dates {
            assert_eq!(date.to_string().parse(), Ok(date));
        }
    }

    #[test]
    fn test_today() {
        let today = Year360Date::today().unwrap();
        // Not earlier than 2024-10-19.
        assert!(today >= Year360Date::new(12024, 10, 2).unwrap());
    }
}
