mod calendar;
mod consts;
mod prelude;
mod types;

pub use calendar::{days_in_month, is_leap_year};
pub use consts::*;
pub use types::{DateComponents, WeekStartDay};

use crate::prelude::*;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use std::str::FromStr;

/// An immutable civil calendar date: year, month, and day under the
/// proleptic Gregorian calendar, with no time-of-day or timezone component.
///
/// Every constructed value denotes a real calendar date, and every
/// transforming operation returns a new value, so instances are freely
/// shareable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

/// Error type for parsing and validating calendar dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input is not of the `YYYY-MM-DD` form.
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidFormat(String),

    /// Month outside 1..=12.
    #[error("Invalid month: {month} (must be 1-12)")]
    InvalidMonth { month: u8 },

    /// Day outside the valid range for its month and year.
    #[error("Invalid day {day} for month {year:04}-{month:02} (max {max_day})")]
    InvalidDay {
        year: i32,
        month: u8,
        day: u8,
        max_day: u8,
    },

    /// Empty date string.
    #[error("Empty date string")]
    EmptyInput,
}

impl CalendarDate {
    /// Creates a date from components, validating that they denote a real
    /// Gregorian calendar date.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` or `ParseError::InvalidDay` when
    /// the components do not form a valid date.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        if !(JANUARY..=MAX_MONTH).contains(&month) {
            return Err(ParseError::InvalidMonth { month });
        }
        let max_day = days_in_month(year, month);
        if !(MIN_DAY..=max_day).contains(&day) {
            return Err(ParseError::InvalidDay {
                year,
                month,
                day,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Samples the current local date from the system clock.
    pub fn today() -> Self {
        Self::from_datelike(&Local::now().date_naive())
    }

    /// Extracts the local-time year, month, and day from a platform
    /// date-time value. The time-of-day is discarded and no timezone
    /// conversion is performed; the source is taken as already expressing
    /// the intended local date.
    pub fn from_datelike(dt: &impl Datelike) -> Self {
        Self {
            year: dt.year(),
            month: dt.month() as u8,
            day: dt.day() as u8,
        }
    }

    /// Returns the year.
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month of year (1..=12).
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of month (1..=31).
    pub const fn day_of_month(self) -> u8 {
        self.day
    }

    /// Returns the labeled `(year, month, day)` projection.
    pub const fn components(self) -> DateComponents {
        DateComponents {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }

    /// Renders the date as an ISO 8601 timestamp string at midnight:
    /// `YYYY-MM-DDT00:00:00.000`.
    ///
    /// This is the calendar date formatted as a timestamp, not a real
    /// instant.
    pub fn iso_datetime(self) -> String {
        format!("{self}T00:00:00.000")
    }

    /// Converts to a platform date-time at local midnight.
    ///
    /// Goes through chrono's own constructor, so extracting the components
    /// again yields exactly the stored fields. Returns `None` when the year
    /// falls outside the range chrono can represent (roughly +/-262143).
    pub fn to_datetime(self) -> Option<NaiveDateTime> {
        let date = NaiveDate::from_ymd_opt(self.year, u32::from(self.month), u32::from(self.day))?;
        date.and_hms_opt(0, 0, 0)
    }

    /// Adds `n` days (negative to subtract), rolling day overflow and
    /// underflow into month and year.
    pub fn add_days(self, n: i64) -> Self {
        let mut year = self.year;
        let mut month = self.month;
        let mut day = i64::from(self.day) + n;

        while day > i64::from(days_in_month(year, month)) {
            day -= i64::from(days_in_month(year, month));
            month += 1;
            if month > MAX_MONTH {
                month = JANUARY;
                year += 1;
            }
        }
        while day < i64::from(MIN_DAY) {
            month -= 1;
            if month < JANUARY {
                month = DECEMBER;
                year -= 1;
            }
            day += i64::from(days_in_month(year, month));
        }

        Self {
            year,
            month,
            day: day as u8,
        }
    }

    /// Day-of-week index, 0 = Sunday .. 6 = Saturday.
    ///
    /// Computed from the date components alone, independent of any platform
    /// timezone state.
    pub const fn day_of_week(self) -> u8 {
        calendar::weekday_index(self.year, self.month, self.day)
    }

    /// English name of the weekday ("Sunday" .. "Saturday").
    pub const fn day_name(self) -> &'static str {
        calendar::weekday_name(self.day_of_week())
    }

    /// True iff this date equals today's local date at the moment of the
    /// call.
    pub fn is_today(self) -> bool {
        self == Self::today()
    }

    /// True iff `lo <= self <= hi`.
    ///
    /// The bounds are applied as given: when `lo > hi` no date satisfies
    /// them.
    pub fn is_between_inclusive(self, lo: Self, hi: Self) -> bool {
        lo <= self && self <= hi
    }

    /// True iff `lo < self < hi`; equality with either bound yields false.
    pub fn is_between_exclusive(self, lo: Self, hi: Self) -> bool {
        lo < self && self < hi
    }

    /// Signed day count from `self` to `other`, positive when `other` is
    /// later. Exact across month and year boundaries.
    pub const fn days_between(self, other: Self) -> i64 {
        calendar::days_from_civil(other.year, other.month, other.day)
            - calendar::days_from_civil(self.year, self.month, self.day)
    }

    /// Returns the first day of the 7-day week containing this date, with
    /// week boundaries defined by `week_start`.
    pub fn first_day_of_week(self, week_start: WeekStartDay) -> Self {
        let sunday_based = i64::from(self.day_of_week());
        let offset = match week_start {
            WeekStartDay::Sunday => sunday_based,
            // Remap so Monday = 0 .. Sunday = 6
            WeekStartDay::Monday => (sunday_based + 6) % i64::from(DAYS_PER_WEEK),
        };
        self.add_days(-offset)
    }
}

impl CalendarDate {
    /// Helper to parse the year field with better error messages
    fn parse_year_field(s: &str) -> Result<i32, ParseError> {
        s.parse::<i32>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse month and day fields with better error messages
    fn parse_component_field(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // A leading sign on the year would otherwise read as a separator
        let (year_sign, unsigned) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (-1, rest),
            None => (1, trimmed),
        };

        let parts: Vec<&str> = unsigned.split(DATE_SEPARATOR).map(|p| p.trim()).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "expected 2 {} separators, found {}",
                DATE_SEPARATOR,
                parts.len() - 1
            )));
        }

        let year = year_sign * Self::parse_year_field(parts[0])?;
        let month = Self::parse_component_field(parts[1])?;
        let day = Self::parse_component_field(parts[2])?;

        Self::new(year, month, day)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_datelike(&date)
    }
}

impl From<NaiveDateTime> for CalendarDate {
    fn from(dt: NaiveDateTime) -> Self {
        Self::from_datelike(&dt)
    }
}

impl TryFrom<(i32, u8, u8)> for CalendarDate {
    type Error = ParseError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
