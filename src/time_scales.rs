//! Deals with different time scales, specifically, conversion from TDB/TT
//! into UT.
//!
//! Ephemeris instants (solar terms, new moons) are computed in TDB; turning
//! them into civil dates requires the TT−UT offset (ΔT) and a timezone
//! shift. Only conversions needed by the calendar computations are included.

use crate::date::Date;

/// [Barycentric dynamic time](https://en.wikipedia.org/wiki/Barycentric_Dynamical_Time),
/// represented in Julian date (JD).
///
/// Ephemeris instants are computed in this time scale, and should be
/// converted to UT when determining civil dates.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Tdb(pub f64);

/// [Terrestrial time](https://en.wikipedia.org/wiki/Terrestrial_Time),
/// represented in Julian date (JD).
///
/// Note: TT differs from TDB by no more than milliseconds over the supported
/// range, so the two are treated numerically the same for calendar work.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Tt(pub f64);

impl From<Tdb> for Tt {
    fn from(tdb: Tdb) -> Tt {
        Tt(tdb.0)
    }
}

/// [Universal time](https://en.wikipedia.org/wiki/Universal_Time), the civil
/// time scale used for determining the date at a given instant.
///
/// Conversion from TT uses the polynomial ΔT = TT − UT1 expressions fitted
/// by Espenak and Meeus to the historical record and its extrapolation,
/// piecewise over 1860–2150. The fit error is a few seconds at worst, far
/// below the day-level precision the calendar needs.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Ut(pub f64);

impl Ut {
    /// Converts a TT (or other time scale easily convertible to TT) into UT.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::time_scales::{Tdb, Ut};
    /// let tdb = Tdb(2451543.166666667);
    /// let ut = Ut::convert(tdb);
    /// assert_eq!((1999, 12, 30), ut.date_in_timezone(0).gregorian());
    /// ```
    pub fn convert<T>(time: T) -> Self
    where
        T: Into<Tt>,
    {
        let tt = time.into();
        let year = 2000.0 + (tt.0 - 2451545.0) / 365.2425;
        Ut(tt.0 - delta_t_seconds(year) / 86400.0)
    }

    /// Returns the date at the time point in a timezone ahead (east) of UTC
    /// by `tz_offset_minutes` minutes.
    ///
    /// For Beijing time (UTC+8), `tz_offset_minutes` should be +480.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::time_scales::{Tdb, Ut};
    /// let tdb = Tdb(2451543.166666667);
    /// let ut = Ut::convert(tdb);
    /// assert_eq!((1999, 12, 30), ut.date_in_timezone(480).gregorian());
    /// ```
    pub fn date_in_timezone(&self, tz_offset_minutes: i32) -> Date {
        let jdn = (self.0 + tz_offset_minutes as f64 / 1440.0).round() as u32;
        Date::from_jdn(jdn)
    }
}

/// ΔT = TT − UT in seconds for a decimal year, per the Espenak–Meeus
/// piecewise polynomials (NASA Five Millennium Canon of Solar Eclipses).
///
/// Valid from 1860 through 2150, which covers the ephemeris range with
/// margin on both sides.
pub fn delta_t_seconds(year: f64) -> f64 {
    let y = year;
    if y < 1900.0 {
        let t = y - 1860.0;
        7.62 + 0.5737 * t - 0.251754 * t * t + 0.01680668 * t.powi(3) - 0.0004473624 * t.powi(4)
            + t.powi(5) / 233174.0
    } else if y < 1920.0 {
        let t = y - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t * t + 0.0061966 * t.powi(3) - 0.000197 * t.powi(4)
    } else if y < 1941.0 {
        let t = y - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t * t + 0.0020936 * t.powi(3)
    } else if y < 1961.0 {
        let t = y - 1950.0;
        29.07 + 0.407 * t - t * t / 233.0 + t.powi(3) / 2547.0
    } else if y < 1986.0 {
        let t = y - 1975.0;
        45.45 + 1.067 * t - t * t / 260.0 - t.powi(3) / 718.0
    } else if y < 2005.0 {
        let t = y - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t * t + 0.0017275 * t.powi(3) + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if y < 2050.0 {
        let t = y - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t * t
    } else {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
    }
}
