//! Error types for the crate.

/// Error type for all fallible operations in the crate.
///
/// Conversions refuse dates outside the ephemeris coverage window and
/// malformed solar or lunar dates instead of clamping; a silently corrected
/// date would corrupt every derived ganzhi and festival value downstream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a date or lunar year falls outside the supported
    /// 1900..=2100 range.
    #[error("year {year} outside supported range 1900..=2100")]
    OutOfRange {
        /// The Gregorian or lunar year that was requested.
        year: i32,
    },

    /// Returned when a Gregorian (year, month, day) triple does not denote a
    /// real calendar day, e.g. month 13 or February 30.
    #[error("invalid gregorian date {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year component of the rejected triple.
        year: i32,
        /// Month component of the rejected triple.
        month: i32,
        /// Day component of the rejected triple.
        day: i32,
    },

    /// Returned when a lunar date names a month or day that does not exist in
    /// its lunar year: a leap flag on a month that was not the designated
    /// leap month, a day past the end of a 29-day month, or a month number
    /// outside 1..=12.
    #[error("invalid lunar date: year {year} month {month} (leap: {leap}) day {day}")]
    InvalidLunarDate {
        /// Lunar year of the rejected date.
        year: i32,
        /// Month number of the rejected date.
        month: u32,
        /// Whether the rejected date carried the leap-month flag.
        leap: bool,
        /// Day number of the rejected date.
        day: u32,
    },
}
