use serde::{Deserialize, Serialize};

/// Which weekday opens a 7-day week.
///
/// Pure configuration value consumed by
/// [`CalendarDate::first_day_of_week`](crate::CalendarDate::first_day_of_week).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekStartDay {
    /// US convention (Sunday = day 0 of the week)
    Sunday,
    /// ISO 8601 convention (Monday = day 0 of the week)
    Monday,
}

/// Structural projection of a calendar date: the `(year, month, day)` triple
/// with labeled fields, for callers that want plain data instead of the
/// value type's API.
///
/// Serializes as a `{"year": …, "month": …, "day": …}` mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateComponents {
    /// Calendar year, any sign
    pub year: i32,
    /// Month of year (1..=12)
    pub month: u8,
    /// Day of month (1..=31)
    pub day: u8,
}
