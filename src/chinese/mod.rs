//! Chinese lunisolar calendar.
//!
//! The civil rules implemented here are the modern convention: days are
//! reckoned in Beijing time (UTC+8), a month begins on the day of the new
//! moon, the month containing the winter solstice is month 11, and when a
//! solstice-to-solstice frame holds thirteen months, the first one without a
//! principal solar term (zhongqi) becomes the leap month.
//!
//! Calendar arithmetic is organized around the [`Sui`] — the
//! winter-solstice-to-winter-solstice frame — because leap-month placement
//! is only well-defined within that frame. The civil lunar *year* (starting
//! at month 1) is derived from it afterwards.
//!
//! # Examples
//!
//! ```
//! use nongli::Date;
//! use nongli::chinese::{solar_to_lunar, Month};
//!
//! let date = Date::new(2000, 1, 1).unwrap();
//! let lunar = solar_to_lunar(date).unwrap();
//!
//! assert_eq!(1999, lunar.year);
//! assert_eq!(Month::Common(11), lunar.month);
//! assert_eq!(25, lunar.day);
//! ```

use tracing::trace;

use crate::date::{Date, MAX_YEAR, MIN_YEAR};
use crate::error::CalendarError;
use crate::time_scales::{Tdb, Ut};

pub mod almanac;
pub mod ephemeris;
pub mod fmt;
pub mod ganzhi;

/// A date in the Chinese lunisolar calendar.
///
/// `year` follows the civil convention: it increments at month 1 (春节), not
/// at the Gregorian new year, so months 11 and 12 carry the year of the
/// preceding month 1. A `LunarDate` is only meaningful relative to the
/// ephemeris; [`lunar_to_solar`] validates it fully.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LunarDate {
    /// Civil lunar year.
    pub year: i32,
    /// Month within the year, with the leap flag.
    pub month: Month,
    /// Day of the month, `1..=30`.
    pub day: u32,
}

impl LunarDate {
    /// Builds a `LunarDate` from components and validates it against the
    /// calendar: the month must exist in that lunar year (a leap flag is
    /// only accepted on the designated leap month) and the day must not
    /// exceed the month's length.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::chinese::LunarDate;
    ///
    /// assert!(LunarDate::new(2017, 6, true, 1).is_ok());
    /// // 2017 has leap month 6, not leap month 5
    /// assert!(LunarDate::new(2017, 5, true, 1).is_err());
    /// ```
    pub fn new(year: i32, month: u32, leap: bool, day: u32) -> Result<Self, CalendarError> {
        let month = if leap {
            Month::Leap(month)
        } else {
            Month::Common(month)
        };
        let date = LunarDate { year, month, day };
        lunar_to_solar(&date)?;
        Ok(date)
    }

    /// Month number regardless of the leap flag.
    pub fn month_number(&self) -> u32 {
        self.month.number()
    }

    /// `true` if the date falls in a leap month.
    pub fn is_leap_month(&self) -> bool {
        self.month.is_leap()
    }

    /// Canonical Chinese month name, e.g. `正月` or `闰六月`.
    pub fn month_name(&self) -> String {
        fmt::month(self.month)
    }

    /// Canonical Chinese day name, e.g. `初一` or `廿五`.
    pub fn day_name(&self) -> String {
        fmt::day(self.day)
    }
}

/// Month name, `Common` for ordinary months, `Leap` for the leap month.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Month {
    Common(u32),
    Leap(u32),
}

impl Month {
    /// Month number regardless of the leap flag.
    pub fn number(&self) -> u32 {
        *match self {
            Month::Common(v) | Month::Leap(v) => v,
        }
    }

    /// `true` for a leap month.
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }

    /// Canonical Chinese name; months 11 and 12 are 冬月 and 腊月.
    pub fn name(&self) -> String {
        fmt::month(*self)
    }
}

/// A sui (歲): the frame from one winter-solstice month start to the next.
///
/// The sui, not the civil year, is the unit in which months are partitioned
/// and the leap month designated; [`Sui::lunar_date_for`] then assigns the
/// civil year. Numbered by the Gregorian year containing most of the frame.
///
/// # Examples
///
/// ```
/// use nongli::Date;
/// use nongli::chinese::Sui;
///
/// let date = Date::new(2000, 1, 1).unwrap();
/// let sui = Sui::for_date(date).unwrap();
///
/// assert_eq!(2000, sui.sui);
/// ```
#[derive(Debug, Clone)]
pub struct Sui {
    /// Frame number, the Gregorian year containing most of the frame.
    pub sui: i32,
    /// Ephemeris table backing the frame.
    pub table: &'static ephemeris::SuiTable,
    /// All month starts, including the next frame's month 11 as a sentinel
    /// marking the end of the last month.
    pub months: Vec<MonthStart>,
}

/// A month start within a sui.
#[derive(Debug, Copy, Clone)]
pub struct MonthStart {
    /// Month name.
    pub month: Month,
    /// First day of the month.
    pub date: Date,
}

impl Sui {
    /// Builds the sui numbered `sui`.
    ///
    /// Fails with [`CalendarError::OutOfRange`] outside the ephemeris
    /// coverage window.
    pub fn new(sui: i32) -> Result<Self, CalendarError> {
        use Month::*;

        let table =
            ephemeris::SuiTable::get(sui).ok_or(CalendarError::OutOfRange { year: sui })?;
        let new_moon_dates: Vec<_> = table.new_moon.iter().map(|&tdb| date_cst(tdb)).collect();
        let ws = date_cst(table.solar_term[0]);
        let ws_next = date_cst(table.solar_term[24]);
        // month 11 contains the solstice day; a new moon falling on the
        // solstice day itself starts the containing month
        let m11_idx = new_moon_dates.partition_point(|date| date <= &ws) - 1;
        let m11n_idx = new_moon_dates.partition_point(|date| date <= &ws_next) - 1;
        let mut needs_leap = match m11n_idx - m11_idx {
            12 => false,
            13 => true,
            n => panic!("{n} months between winter solstices in sui {sui}"),
        };

        let mut months = Vec::with_capacity(m11n_idx - m11_idx + 1);
        let mut month = 10;
        let mut term = 0;
        for i in m11_idx..=m11n_idx {
            // leap: the month ends before the next expected principal term
            if needs_leap && new_moon_dates[i + 1] <= date_cst(table.solar_term[term]) {
                trace!(sui, month, "leap month designated");
                months.push(MonthStart {
                    month: Leap(month),
                    date: new_moon_dates[i],
                });
                needs_leap = false;
                continue;
            }
            month = month % 12 + 1;
            months.push(MonthStart {
                month: Common(month),
                date: new_moon_dates[i],
            });
            term += 2;
        }
        assert!(!needs_leap, "13-month sui {sui} left without a leap month");

        Ok(Sui { sui, table, months })
    }

    /// Builds the sui containing a given date.
    pub fn for_date(date: Date) -> Result<Self, CalendarError> {
        let mut y = date.gregorian().0;
        loop {
            let sui = Self::new(y)?;

            let start = sui.months[0].date;
            let end = sui.months.last().unwrap().date;

            if (start..end).contains(&date) {
                return Ok(sui);
            }

            y += if date < start { -1 } else { 1 };
        }
    }

    /// The lunar date of `date` within this sui.
    ///
    /// Reports `Err` with the direction when the date lies outside the
    /// frame.
    pub fn lunar_date_for(&self, date: Date) -> Result<LunarDate, OutsideSui> {
        let begin = self.months[0].date;
        let end = self.months.last().unwrap().date;

        if date < begin {
            return Err(OutsideSui::Before);
        } else if date >= end {
            return Err(OutsideSui::After);
        }

        let m = self
            .months
            .iter()
            .take_while(|m| m.date <= date)
            .last()
            .unwrap();
        let day = date.jdn() - m.date.jdn() + 1;
        // months 11 and 12 precede the year's month 1
        let year = if m.month.number() >= 11 {
            self.sui - 1
        } else {
            self.sui
        };
        Ok(LunarDate {
            year,
            month: m.month,
            day,
        })
    }

    /// The leap month of this sui, if any.
    pub fn leap_month(&self) -> Option<Month> {
        self.months
            .iter()
            .map(|m| m.month)
            .find(|m| m.is_leap())
    }

    /// The solar term governing a date, as
    /// `(sui, term number, days since the term)`.
    ///
    /// Term numbers run `1..=24` from 立春 through 大寒; a third component
    /// of `0` means the date is the term's own day. Supported from the
    /// frame's first day to the day before the next winter solstice; the
    /// few days before the frame's solstice resolve to the previous frame's
    /// final terms, hence the sui in the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use nongli::Date;
    /// use nongli::chinese::Sui;
    ///
    /// let date = Date::new(2000, 1, 1).unwrap();
    /// let sui = Sui::for_date(date).unwrap();
    ///
    /// // ten days past the winter solstice (term 22)
    /// assert_eq!(Ok((2000, 22, 10)), sui.solar_term_for(date));
    /// ```
    pub fn solar_term_for(&self, date: Date) -> Result<(i32, u32, u32), SolarTermError> {
        use self::OutsideSui::{After, Before};
        use self::SolarTermError::{NoData, OutsideSui};
        if date < self.months[0].date {
            return Err(OutsideSui(Before));
        } else if date >= date_cst(self.table.solar_term[24]) {
            return Err(OutsideSui(After));
        }
        if date < date_cst(self.table.solar_term[0]) {
            let last = ephemeris::SuiTable::get(self.sui - 1).ok_or(NoData)?;
            for (idx, &tdb) in (22..24).zip(&last.solar_term[22..24]).rev() {
                let term_start = date_cst(tdb);
                if date >= term_start {
                    return Ok((self.sui - 1, (idx + 21) % 24 + 1, (date - term_start) as u32));
                }
            }
            panic!("ephemeris data for sui {} is inconsistent", self.sui - 1);
        }
        let idx = self.table.solar_term[..24].partition_point(|&tdb| date_cst(tdb) <= date) - 1;
        let off = date - date_cst(self.table.solar_term[idx]);
        Ok((self.sui, (idx as u32 + 21) % 24 + 1, off as u32))
    }
}

/// Indicates that a date lies outside a sui, and in which direction.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OutsideSui {
    Before,
    After,
}

/// Failure modes of [`Sui::solar_term_for`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SolarTermError {
    NoData,
    OutsideSui(OutsideSui),
}

/// Converts a solar date to its lunar calendar date.
///
/// # Examples
///
/// ```
/// use nongli::Date;
/// use nongli::chinese::{solar_to_lunar, Month};
///
/// let spring_festival = Date::new(2024, 2, 10).unwrap();
/// let lunar = solar_to_lunar(spring_festival).unwrap();
/// assert_eq!(
///     (2024, Month::Common(1), 1),
///     (lunar.year, lunar.month, lunar.day)
/// );
/// ```
pub fn solar_to_lunar(date: Date) -> Result<LunarDate, CalendarError> {
    let sui = Sui::for_date(date)?;
    match sui.lunar_date_for(date) {
        Ok(lunar) => Ok(lunar),
        Err(_) => unreachable!("Sui::for_date returned a frame not containing the date"),
    }
}

/// Converts a lunar calendar date back to its solar date.
///
/// Mutual inverse of [`solar_to_lunar`] over the supported range. A leap
/// flag on a month that was not designated the leap month, a day past the
/// month's length, or a month number outside `1..=12` is rejected with
/// [`CalendarError::InvalidLunarDate`].
pub fn lunar_to_solar(lunar: &LunarDate) -> Result<Date, CalendarError> {
    let LunarDate { year, month, day } = *lunar;
    let invalid = || CalendarError::InvalidLunarDate {
        year,
        month: month.number(),
        leap: month.is_leap(),
        day,
    };

    if !(1..=12).contains(&month.number()) || !(1..=30).contains(&day) {
        return Err(invalid());
    }
    // months 11 and 12 of a civil year fall in the following sui; lunar
    // year 1899 is admitted because early-1900 solar dates map into it
    if !(MIN_YEAR - 1..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::OutOfRange { year });
    }
    let sui = Sui::new(if month.number() >= 11 { year + 1 } else { year })?;

    let months = &sui.months[..sui.months.len() - 1];
    let start = months
        .iter()
        .find(|m| m.month == month)
        .map(|m| m.date)
        .ok_or_else(invalid)?;
    let next = sui
        .months
        .iter()
        .find(|m| m.date > start)
        .map(|m| m.date)
        .unwrap();
    if day > (next - start) as u32 {
        return Err(invalid());
    }
    Ok(start + (day as i32 - 1))
}

/// The leap month of a civil lunar year, if any.
///
/// # Examples
///
/// ```
/// use nongli::chinese::leap_month;
///
/// assert_eq!(Some(6), leap_month(2017).unwrap());
/// assert_eq!(None, leap_month(2024).unwrap());
/// ```
pub fn leap_month(lunar_year: i32) -> Result<Option<u32>, CalendarError> {
    if !(MIN_YEAR - 1..=MAX_YEAR).contains(&lunar_year) {
        return Err(CalendarError::OutOfRange { year: lunar_year });
    }
    // leap 1..=10 sit in this year's sui, leap 11 or 12 in the next
    if let Some(m) = Sui::new(lunar_year)?.leap_month()
        && m.number() <= 10
    {
        return Ok(Some(m.number()));
    }
    if let Some(m) = Sui::new(lunar_year + 1)?.leap_month()
        && m.number() >= 11
    {
        return Ok(Some(m.number()));
    }
    Ok(None)
}

/// Whether a term number (`1..=24`, 立春-based) is one of the twelve
/// principal terms (zhongqi) that anchor the leap-month rule.
///
/// # Examples
///
/// ```
/// use nongli::chinese::is_principal_term;
///
/// assert!(is_principal_term(22)); // 冬至
/// assert!(!is_principal_term(1)); // 立春
/// ```
pub fn is_principal_term(term: u32) -> bool {
    term % 2 == 0
}

/// Converts an ephemeris instant to the Beijing (UTC+8) civil date.
pub fn date_cst(tdb: Tdb) -> Date {
    Ut::convert(tdb).date_in_timezone(480)
}
