//! Sexagenary (ganzhi) cycle: stems, branches, and the zodiac.
//!
//! All functions here are pure arithmetic over calibrated offsets. The day
//! cycle is anchored to the JDN (see [`Date::sexagenary`]); the year cycle
//! to the fact that 4 BCE (astronomical year -2696... +2696 ≡ 0) opened a
//! cycle; the month and hour cycles follow the traditional five-tigers and
//! five-rats derivation rules from the year and day stems.

use crate::chinese::{date_cst, ephemeris, solar_to_lunar};
use crate::date::Date;
use crate::error::CalendarError;

/// The ten heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

const STEM_NAMES: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

const STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// Stem for an index taken modulo 10.
    pub fn from_index(index: u32) -> Self {
        STEMS[(index % 10) as usize]
    }

    /// Position in the cycle, `0..=9`.
    pub fn index(&self) -> u32 {
        *self as u32
    }

    /// Canonical Chinese name.
    pub fn name(&self) -> &'static str {
        STEM_NAMES[self.index() as usize]
    }
}

/// The twelve earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

const BRANCH_NAMES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

impl Branch {
    /// Branch for an index taken modulo 12.
    pub fn from_index(index: u32) -> Self {
        BRANCHES[(index % 12) as usize]
    }

    /// Position in the cycle, `0..=11`.
    pub fn index(&self) -> u32 {
        *self as u32
    }

    /// Canonical Chinese name.
    pub fn name(&self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }

    /// The zodiac animal mapped 1:1 to this branch.
    pub fn zodiac(&self) -> Zodiac {
        ZODIACS[self.index() as usize]
    }
}

/// The twelve zodiac animals, in branch order starting from the Rat (子).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zodiac {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

const ZODIAC_NAMES: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

const ZODIACS: [Zodiac; 12] = [
    Zodiac::Rat,
    Zodiac::Ox,
    Zodiac::Tiger,
    Zodiac::Rabbit,
    Zodiac::Dragon,
    Zodiac::Snake,
    Zodiac::Horse,
    Zodiac::Goat,
    Zodiac::Monkey,
    Zodiac::Rooster,
    Zodiac::Dog,
    Zodiac::Pig,
];

impl Zodiac {
    /// Canonical Chinese name.
    pub fn name(&self) -> &'static str {
        ZODIAC_NAMES[*self as usize]
    }
}

/// A stem-branch pair from the sexagenary cycle.
///
/// The stem and branch always advance together, so only 60 of the 120
/// combinations occur; `cycle index % 10` gives the stem and
/// `cycle index % 12` the branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GanZhi {
    pub stem: Stem,
    pub branch: Branch,
}

impl GanZhi {
    /// Pair for a cycle index taken modulo 60 (0 = 甲子).
    pub fn from_index(index: u32) -> Self {
        GanZhi {
            stem: Stem::from_index(index),
            branch: Branch::from_index(index),
        }
    }

    /// Pair for a cycle number `1..=60` (1 = 甲子), the numbering of
    /// [`Date::sexagenary`].
    pub fn from_number(number: u32) -> Self {
        Self::from_index((number + 59) % 60)
    }

    /// Position in the cycle, `0..=59`.
    pub fn index(&self) -> u32 {
        // unique solution of index ≡ stem (mod 10), index ≡ branch (mod 12)
        (6 * self.stem.index() + 55 * self.branch.index()) % 60
    }

    /// Cycle number `1..=60`.
    pub fn number(&self) -> u32 {
        self.index() + 1
    }

    /// Canonical two-character name, e.g. `甲辰`.
    pub fn name(&self) -> String {
        format!("{}{}", self.stem.name(), self.branch.name())
    }
}

/// The day ganzhi of a solar date.
///
/// # Examples
///
/// ```
/// use nongli::Date;
/// use nongli::chinese::ganzhi::day_ganzhi;
///
/// let date = Date::new(2000, 1, 1).unwrap();
/// assert_eq!("戊午", day_ganzhi(date).name());
/// ```
pub fn day_ganzhi(date: Date) -> GanZhi {
    GanZhi::from_number(date.sexagenary())
}

/// The ganzhi of a civil lunar year.
///
/// # Examples
///
/// ```
/// use nongli::chinese::ganzhi::year_ganzhi;
///
/// assert_eq!("甲辰", year_ganzhi(2024).name());
/// ```
pub fn year_ganzhi(lunar_year: i32) -> GanZhi {
    GanZhi::from_index((lunar_year + 2696).rem_euclid(60) as u32)
}

/// The zodiac animal of a civil lunar year.
///
/// # Examples
///
/// ```
/// use nongli::chinese::ganzhi::{zodiac_for_year, Zodiac};
///
/// assert_eq!(Zodiac::Dragon, zodiac_for_year(2024));
/// ```
pub fn zodiac_for_year(lunar_year: i32) -> Zodiac {
    year_ganzhi(lunar_year).branch.zodiac()
}

/// The month ganzhi of a solar date.
///
/// Ganzhi months follow the minor solar terms (jie), not the lunar months:
/// the 寅 month opens at 立春 and each subsequent jie advances the branch.
/// The stem derives from the 立春-bounded year's stem by the five-tigers
/// rule.
pub fn month_ganzhi(date: Date) -> Result<GanZhi, CalendarError> {
    let lichun = |year: i32| -> Result<Date, CalendarError> {
        let table =
            ephemeris::SuiTable::get(year).ok_or(CalendarError::OutOfRange { year })?;
        Ok(date_cst(table.solar_term[3]))
    };

    let (year, _, _) = date.gregorian();
    let gz_year = if date >= lichun(year)? { year } else { year - 1 };

    // count jie boundaries passed since 立春 (odd term indices); the last
    // one, 小寒, lies in the following frame
    let table = ephemeris::SuiTable::get(gz_year)
        .ok_or(CalendarError::OutOfRange { year: gz_year })?;
    let mut passed = 0;
    for idx in (5..24).step_by(2) {
        if date >= date_cst(table.solar_term[idx]) {
            passed += 1;
        }
    }
    let next = ephemeris::SuiTable::get(gz_year + 1)
        .ok_or(CalendarError::OutOfRange { year: gz_year + 1 })?;
    if date >= date_cst(next.solar_term[1]) {
        passed += 1;
    }

    let year_stem = year_ganzhi(gz_year).stem.index();
    Ok(GanZhi {
        stem: Stem::from_index(2 * year_stem + 2 + passed),
        branch: Branch::from_index(2 + passed),
    })
}

/// The hour ganzhi for a solar date and an hour of day (`0..=23`).
///
/// The branch covers two-hour blocks starting with 子 at 23:00; the stem
/// derives from the day stem by the five-rats rule. The day stem used is
/// that of the given civil day throughout, including the 23:00 block.
///
/// # Panics
///
/// Panics if `hour` is not in `0..=23`.
pub fn hour_ganzhi(date: Date, hour: u32) -> GanZhi {
    assert!(hour < 24, "hour {hour} not in 0..=23");
    let branch = ((hour + 1) / 2) % 12;
    let day_stem = day_ganzhi(date).stem.index();
    GanZhi {
        stem: Stem::from_index((day_stem % 5) * 2 + branch),
        branch: Branch::from_index(branch),
    }
}

/// Year, month, and day ganzhi of one civil date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GanZhiSet {
    /// Ganzhi of the civil lunar year containing the date.
    pub year: GanZhi,
    /// Jie-based month ganzhi.
    pub month: GanZhi,
    /// Day ganzhi.
    pub day: GanZhi,
}

/// Bundles the year, month, and day ganzhi of a solar date.
///
/// The year component follows the civil lunar year (changing at 春节); the
/// month component follows the jie boundaries.
///
/// # Examples
///
/// ```
/// use nongli::Date;
/// use nongli::chinese::ganzhi::ganzhi_for;
///
/// let set = ganzhi_for(Date::new(2000, 1, 1).unwrap()).unwrap();
/// assert_eq!("己卯", set.year.name());
/// assert_eq!("丙子", set.month.name());
/// assert_eq!("戊午", set.day.name());
/// ```
pub fn ganzhi_for(date: Date) -> Result<GanZhiSet, CalendarError> {
    let lunar = solar_to_lunar(date)?;
    Ok(GanZhiSet {
        year: year_ganzhi(lunar.year),
        month: month_ganzhi(date)?,
        day: day_ganzhi(date),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_index_round_trip() {
        for i in 0..60 {
            let gz = GanZhi::from_index(i);
            assert_eq!(i, gz.index());
            assert_eq!(i + 1, gz.number());
        }
    }

    #[test]
    fn sixty_distinct_combinations() {
        let mut seen = std::collections::HashSet::new();
        for i in 0..60 {
            seen.insert(GanZhi::from_index(i).name());
        }
        assert_eq!(60, seen.len());
    }

    #[test]
    fn named_pairs() {
        assert_eq!("甲子", GanZhi::from_number(1).name());
        assert_eq!("庚寅", GanZhi::from_number(27).name());
        assert_eq!("癸亥", GanZhi::from_number(60).name());
    }

    #[test]
    fn day_cycle_period_60() {
        let date = Date::new(2024, 2, 10).unwrap();
        assert_eq!(day_ganzhi(date), day_ganzhi(date + 60));
        assert_ne!(day_ganzhi(date), day_ganzhi(date + 30));
    }

    #[test]
    fn known_day_ganzhi() {
        assert_eq!("戊午", day_ganzhi(Date::new(2000, 1, 1).unwrap()).name());
        assert_eq!("辛巳", day_ganzhi(Date::new(1970, 1, 1).unwrap()).name());
    }

    #[test]
    fn known_year_ganzhi() {
        assert_eq!("甲子", year_ganzhi(1984).name());
        assert_eq!("己卯", year_ganzhi(1999).name());
        assert_eq!("庚辰", year_ganzhi(2000).name());
        assert_eq!("甲辰", year_ganzhi(2024).name());
    }

    #[test]
    fn zodiac_years() {
        assert_eq!(Zodiac::Rat, zodiac_for_year(2020));
        assert_eq!(Zodiac::Rabbit, zodiac_for_year(1999));
        assert_eq!(Zodiac::Dragon, zodiac_for_year(2024));
        assert_eq!("龙", zodiac_for_year(2024).name());
    }

    #[test]
    fn month_ganzhi_at_boundaries() {
        // before 立春 2024 (Feb 4) the month is 丑 of the 癸卯 frame
        assert_eq!(
            "乙丑",
            month_ganzhi(Date::new(2024, 2, 3).unwrap()).unwrap().name()
        );
        // from 立春 the 寅 month of the 甲辰 frame opens with stem 丙
        assert_eq!(
            "丙寅",
            month_ganzhi(Date::new(2024, 2, 4).unwrap()).unwrap().name()
        );
        assert_eq!(
            "丙寅",
            month_ganzhi(Date::new(2024, 2, 10).unwrap()).unwrap().name()
        );
    }

    #[test]
    fn hour_ganzhi_five_rats() {
        let date = Date::new(2000, 1, 1).unwrap(); // 戊午 day
        assert_eq!("壬子", hour_ganzhi(date, 0).name());
        assert_eq!("戊午", hour_ganzhi(date, 12).name());
        assert_eq!("壬子", hour_ganzhi(date, 23).name());
    }

    #[test]
    fn ganzhi_set_for_spring_festival_2024() {
        let set = ganzhi_for(Date::new(2024, 2, 10).unwrap()).unwrap();
        assert_eq!("甲辰", set.year.name());
        assert_eq!("丙寅", set.month.name());
    }
}
