//! Chinese lunisolar calendar and almanac engine.
//!
//! Converts Gregorian dates to the traditional Chinese calendar — lunar
//! year/month/day with leap months, sexagenary (ganzhi) cycles, the zodiac,
//! the 24 solar terms, festivals, and daily yi/ji almanac guidance — and
//! generates month grids for calendar displays. Everything is computed from
//! astronomical series for 1900 through 2100; the only state is a set of
//! ephemeris tables built once on first use and read-only afterwards, so
//! every function is safe to call concurrently.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use nongli::Date;
//!
//! let date = Date::new(2000, 1, 1).unwrap();
//!
//! assert_eq!(6, date.weekday()); // Saturday
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Chinese lunisolar calendar:
//!
//! ```
//! use nongli::{Date, solar_to_lunar};
//! use nongli::chinese::Month;
//!
//! let date = Date::new(2024, 2, 10).unwrap();
//! let lunar = solar_to_lunar(date).unwrap();
//!
//! assert_eq!((2024, Month::Common(1), 1), (lunar.year, lunar.month, lunar.day));
//! ```
//!
//! Ganzhi, zodiac, and the almanac:
//!
//! ```
//! use nongli::{Date, almanac_for, ganzhi_for, zodiac_for_year};
//!
//! let date = Date::new(2024, 2, 10).unwrap();
//!
//! assert_eq!("甲辰", ganzhi_for(date).unwrap().year.name());
//! assert_eq!("龙", zodiac_for_year(2024).name());
//! assert_eq!(vec!["春节"], almanac_for(date).unwrap().festivals);
//! ```
//!
//! Month grids for a calendar display:
//!
//! ```
//! use nongli::month_grid;
//!
//! let cells = month_grid(2024, 2).unwrap();
//! assert_eq!(42, cells.len());
//! ```

pub mod astro;
pub mod chinese;
pub mod date;
pub mod error;
pub mod grid;
pub mod time_scales;

pub use chinese::almanac::{AlmanacEntry, almanac_for};
pub use chinese::ganzhi::{
    GanZhi, GanZhiSet, Zodiac, day_ganzhi, ganzhi_for, hour_ganzhi, month_ganzhi, year_ganzhi,
    zodiac_for_year,
};
pub use chinese::{LunarDate, leap_month, lunar_to_solar, solar_to_lunar};
pub use date::{Date, MAX_YEAR, MIN_YEAR};
pub use error::CalendarError;
pub use grid::{DayCell, month_grid};
