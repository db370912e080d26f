//! Proleptic Gregorian calendar math.
//!
//! Leaf helpers shared by the date type: leap-year test, days-in-month
//! lookup, and the civil-date-to-day-number conversion that backs exact
//! day differences and day-of-week computation. No platform time API is
//! involved anywhere here.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_WEEK, EPOCH_WEEKDAY, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, WEEKDAY_NAMES,
};

/// One 400-year Gregorian era in days.
const DAYS_PER_ERA: i64 = 146_097;

/// Days from 0000-03-01 to the epoch 1970-01-01.
const EPOCH_SHIFT: i64 = 719_468;

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Number of days from 1970-01-01 to the given civil date (negative for
/// earlier dates).
///
/// Era arithmetic over the 400-year Gregorian cycle, with years counted
/// from March so the leap day falls at the end of the shifted year.
pub(crate) const fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let y = (if month <= FEBRUARY { year - 1 } else { year }) as i64;
    let m = month as i64;
    let d = day as i64;

    let era = if y >= 0 { y } else { y - 399 } / 400;
    let year_of_era = y - era * 400;
    // Day within the March-based year: March 1 is 0, February 29 is 365.
    let day_of_year = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + d - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

    era * DAYS_PER_ERA + day_of_era - EPOCH_SHIFT
}

/// Day-of-week index for a civil date: 0 = Sunday .. 6 = Saturday.
pub(crate) const fn weekday_index(year: i32, month: u8, day: u8) -> u8 {
    let days = days_from_civil(year, month, day) + EPOCH_WEEKDAY;
    days.rem_euclid(DAYS_PER_WEEK as i64) as u8
}

/// English name for a day-of-week index produced by [`weekday_index`].
pub(crate) const fn weekday_name(index: u8) -> &'static str {
    debug_assert!(index < DAYS_PER_WEEK);
    WEEKDAY_NAMES[index as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i32,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2020,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2021,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 2400,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 0,
                is_leap: true,
                description: "year zero is divisible by 400",
            },
            TestCase {
                year: -4,
                is_leap: true,
                description: "negative year divisible by 4",
            },
            TestCase {
                year: -100,
                is_leap: false,
                description: "negative century not divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap {
                    "leap year"
                } else {
                    "not leap year"
                }
            );
        }
    }

    #[test]
    fn test_days_in_month_31_day_months() {
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(
                days_in_month(2024, month),
                31,
                "Month {month} should have 31 days"
            );
        }
    }

    #[test]
    fn test_days_in_month_30_day_months() {
        for month in [4, 6, 9, 11] {
            assert_eq!(
                days_in_month(2024, month),
                30,
                "Month {month} should have 30 days"
            );
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(
            days_in_month(1900, 2),
            28,
            "Century year not divisible by 400"
        );
        assert_eq!(days_in_month(2000, 2), 29, "Century year divisible by 400");
    }

    #[test]
    fn test_days_from_civil_epoch() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(days_from_civil(1970, 1, 2), 1);
        assert_eq!(days_from_civil(1969, 12, 31), -1);
    }

    #[test]
    fn test_days_from_civil_known_counts() {
        // 30 years with 7 leap days between the epoch and 2000-01-01
        assert_eq!(days_from_civil(2000, 1, 1), 10_957);
        // 0001-01-01 is the classic 719162 days before the epoch
        assert_eq!(days_from_civil(1, 1, 1), -719_162);
    }

    #[test]
    fn test_days_from_civil_year_lengths() {
        assert_eq!(
            days_from_civil(2024, 1, 1) - days_from_civil(2023, 1, 1),
            365
        );
        assert_eq!(
            days_from_civil(2021, 1, 1) - days_from_civil(2020, 1, 1),
            366,
            "2020 is a leap year"
        );
        assert_eq!(
            days_from_civil(2101, 1, 1) - days_from_civil(2100, 1, 1),
            365,
            "2100 is not a leap year"
        );
    }

    #[test]
    fn test_days_from_civil_february_boundary() {
        assert_eq!(
            days_from_civil(2024, 3, 1) - days_from_civil(2024, 2, 28),
            2,
            "Leap year February has a 29th"
        );
        assert_eq!(
            days_from_civil(2023, 3, 1) - days_from_civil(2023, 2, 28),
            1
        );
    }

    #[test]
    fn test_weekday_index_anchors() {
        // The epoch was a Thursday
        assert_eq!(weekday_index(1970, 1, 1), 4);
        // Known weekdays on either side of the epoch
        assert_eq!(weekday_index(1900, 1, 1), 1, "1900-01-01 was a Monday");
        assert_eq!(weekday_index(2000, 1, 1), 6, "2000-01-01 was a Saturday");
    }

    #[test]
    fn test_weekday_index_october_2024_week() {
        assert_eq!(weekday_index(2024, 10, 20), 0, "Sunday");
        assert_eq!(weekday_index(2024, 10, 21), 1, "Monday");
        assert_eq!(weekday_index(2024, 10, 26), 6, "Saturday");
    }

    #[test]
    fn test_weekday_name_table() {
        assert_eq!(weekday_name(0), "Sunday");
        assert_eq!(weekday_name(3), "Wednesday");
        assert_eq!(weekday_name(6), "Saturday");
    }
}
