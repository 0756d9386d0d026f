//! Precomputed solar-term and new-moon tables, one entry per sui.
//!
//! The tables are generated from the series in [`crate::astro`] for every
//! sui in the coverage window, once, on first access, and held in a
//! process-wide immutable static. All calendar queries afterwards are plain
//! binary-search lookups; nothing is ever written again.

use std::sync::LazyLock;

use tracing::debug;

use crate::astro;
use crate::date::Date;
use crate::time_scales::Tdb;

/// First sui with a computed table. One year of margin before the supported
/// civil range so that grid cells and month-ganzhi lookups at the lower edge
/// stay on the tables.
pub const MIN_SUI: i32 = 1898;
/// Last sui with a computed table, one year past the supported civil range.
pub const MAX_SUI: i32 = 2101;

/// Ephemeris data for one sui (winter-solstice year frame).
#[derive(Debug)]
pub struct SuiTable {
    /// The sui number, the Gregorian year containing most of the frame.
    pub sui: i32,
    /// Solar-term instants from this frame's starting winter solstice
    /// through the next one, at 15° steps of solar longitude. Even indices
    /// are principal terms (zhongqi).
    pub solar_term: [Tdb; 25],
    /// New-moon instants covering the frame: index 0 is the new moon on or
    /// before the starting winter solstice (the start of month 11), with
    /// enough following lunations to pass the next winter solstice.
    pub new_moon: [Tdb; 15],
}

static TABLES: LazyLock<Vec<SuiTable>> = LazyLock::new(|| {
    let tables: Vec<_> = (MIN_SUI..=MAX_SUI).map(SuiTable::compute).collect();
    debug!(
        suis = tables.len(),
        first = MIN_SUI,
        last = MAX_SUI,
        "ephemeris tables computed"
    );
    tables
});

impl SuiTable {
    /// Returns the table for the sui numbered `sui`, or `None` outside the
    /// coverage window.
    pub fn get(sui: i32) -> Option<&'static Self> {
        TABLES
            .binary_search_by_key(&sui, |t| t.sui)
            .ok()
            .map(|i| &TABLES[i])
    }

    fn compute(sui: i32) -> Self {
        // the starting winter solstice falls within a day or two of
        // December 21 of the preceding Gregorian year
        let ws_guess = Date::from_gregorian_unchecked(sui - 1, 12, 21).jdn() as f64;
        let mut solar_term = [Tdb(0.0); 25];
        solar_term[0] = astro::solar_longitude_crossing(ws_guess, 270.0);
        for i in 1..25 {
            let target = (270.0 + 15.0 * i as f64) % 360.0;
            solar_term[i] =
                astro::solar_longitude_crossing(solar_term[i - 1].0 + 15.2184, target);
        }

        // month 11 begins at the last new moon on or before the solstice day
        let ws_date = super::date_cst(solar_term[0]);
        let mut k = astro::lunation_near(solar_term[0].0);
        while super::date_cst(astro::new_moon(k + 1)) <= ws_date {
            k += 1;
        }
        while super::date_cst(astro::new_moon(k)) > ws_date {
            k -= 1;
        }
        let mut new_moon = [Tdb(0.0); 15];
        for (j, slot) in new_moon.iter_mut().enumerate() {
            *slot = astro::new_moon(k + j as i32);
        }

        SuiTable {
            sui,
            solar_term,
            new_moon,
        }
    }
}
