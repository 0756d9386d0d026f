//! Month-grid generation for a calendar display.
//!
//! A month view is a fixed 7×6 grid of consecutive days starting on a
//! Sunday, padded with trailing days of the previous month and leading days
//! of the next. Generation is pure: the same `(year, month)` always yields
//! the identical sequence, with no dependency on the current day.

use crate::chinese::almanac::{AlmanacEntry, almanac_for};
use crate::chinese::{LunarDate, solar_to_lunar};
use crate::date::Date;
use crate::error::CalendarError;

/// Number of cells in a month grid: six full weeks.
pub const GRID_CELLS: usize = 42;

/// One cell of a month grid.
///
/// Built fresh on every [`month_grid`] call; cells own their values and
/// share no state.
#[derive(Debug, Clone)]
pub struct DayCell {
    /// The solar date of the cell.
    pub date: Date,
    /// The lunar date of the cell.
    pub lunar: LunarDate,
    /// `true` when the cell belongs to the grid's own month rather than the
    /// padding from an adjacent month.
    pub is_current_month: bool,
    /// `true` on Saturdays and Sundays.
    pub is_weekend: bool,
    /// Festival, solar-term, and yi/ji annotations for the day.
    pub almanac: AlmanacEntry,
}

/// Generates the 42-cell grid for a Gregorian month.
///
/// The grid starts on the Sunday on or before the 1st of the month, so the
/// month's first day lands in its proper weekday column, and runs for six
/// consecutive weeks. Errors from any constituent day propagate.
///
/// # Examples
///
/// ```
/// use nongli::grid::{GRID_CELLS, month_grid};
///
/// let cells = month_grid(2024, 2).unwrap();
/// assert_eq!(GRID_CELLS, cells.len());
/// assert_eq!(0, cells[0].date.weekday());
/// assert!(!cells[0].is_current_month); // January padding
/// ```
pub fn month_grid(year: i32, month: i32) -> Result<Vec<DayCell>, CalendarError> {
    let first = Date::new(year, month, 1)?;
    let start = first + -(first.weekday() as i32);

    (0..GRID_CELLS as i32)
        .map(|offset| {
            let date = start + offset;
            let lunar = solar_to_lunar(date)?;
            let almanac = almanac_for(date)?;
            Ok(DayCell {
                date,
                lunar,
                is_current_month: date.gregorian().1 == month,
                is_weekend: date.is_weekend(),
                almanac,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chinese::Month;

    #[test]
    fn forty_two_cells_starting_sunday() {
        for (y, m) in [(1900, 1), (2000, 2), (2024, 2), (2100, 12)] {
            let cells = month_grid(y, m).unwrap();
            assert_eq!(GRID_CELLS, cells.len(), "{y}-{m}");
            assert_eq!(0, cells[0].date.weekday(), "{y}-{m}");
            for (i, cell) in cells.iter().enumerate() {
                assert_eq!(cell.date.weekday(), (i % 7) as u32);
            }
        }
    }

    #[test]
    fn consecutive_days_without_gaps() {
        let cells = month_grid(2024, 2).unwrap();
        for pair in cells.windows(2) {
            assert_eq!(1, pair[1].date - pair[0].date);
        }
    }

    #[test]
    fn current_month_flags() {
        let cells = month_grid(2024, 2).unwrap();
        let current = cells.iter().filter(|c| c.is_current_month).count();
        assert_eq!(29, current); // February 2024 is a leap February
        // padding on both sides
        assert_eq!((2024, 1, 28), cells[0].date.gregorian());
        assert!(!cells[0].is_current_month);
        assert_eq!((2024, 3, 9), cells[41].date.gregorian());
        assert!(!cells[41].is_current_month);
    }

    #[test]
    fn first_day_lands_in_weekday_column() {
        // 2024-02-01 is a Thursday: column 4 of the first row
        let cells = month_grid(2024, 2).unwrap();
        assert_eq!((2024, 2, 1), cells[4].date.gregorian());
        assert!(cells[4].is_current_month);
    }

    #[test]
    fn spring_festival_annotated() {
        let cells = month_grid(2024, 2).unwrap();
        let feb10 = cells
            .iter()
            .find(|c| c.date.gregorian() == (2024, 2, 10))
            .unwrap();
        assert_eq!(
            (2024, Month::Common(1), 1),
            (feb10.lunar.year, feb10.lunar.month, feb10.lunar.day)
        );
        assert_eq!(Some("春节"), feb10.almanac.display_label());
        assert!(feb10.is_weekend); // a Saturday
    }

    #[test]
    fn weekend_flags_match_columns() {
        let cells = month_grid(2024, 2).unwrap();
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(matches!(i % 7, 0 | 6), cell.is_weekend);
        }
    }

    #[test]
    fn stable_across_calls() {
        let a = month_grid(2024, 2).unwrap();
        let b = month_grid(2024, 2).unwrap();
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.date, y.date);
            assert_eq!(x.lunar, y.lunar);
            assert_eq!(x.almanac, y.almanac);
        }
    }

    #[test]
    fn out_of_range_month_rejected() {
        assert!(matches!(
            month_grid(1899, 12),
            Err(CalendarError::OutOfRange { .. })
        ));
        assert!(matches!(
            month_grid(2101, 1),
            Err(CalendarError::OutOfRange { .. })
        ));
        assert!(matches!(
            month_grid(2024, 13),
            Err(CalendarError::InvalidDate { .. })
        ));
    }
}
