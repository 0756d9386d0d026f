//! Canonical Chinese names for calendar values.
//!
//! These are name payloads, not presentation: the rendering layer decides
//! layout and locale, the calendar returns the standard simplified-Chinese
//! forms.

/// Chinese numerals; entries `1..=9` are 一 through 九, entry 0 is 十 for
/// convenient day/month formatting.
pub const NUM_CHINESE: &[&str] = &["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// Weekday names, indexed by [`crate::Date::weekday`] (0 = 日 for Sunday).
pub const WEEKDAY_CHINESE: &[&str] = &["日", "一", "二", "三", "四", "五", "六"];

/// The month name (with the 月 suffix); months 11 and 12 are 冬月 and 腊月,
/// and a leap month carries the 闰 prefix.
///
/// # Examples
///
/// ```
/// use nongli::chinese::{fmt, Month::*};
///
/// assert_eq!("冬月", fmt::month(Common(11)));
/// assert_eq!("闰正月", fmt::month(Leap(1)));
/// ```
///
/// # Panics
///
/// Panics if the month number is not in `1..=12`.
pub fn month(m: super::Month) -> String {
    let mut rt = String::new();
    if m.is_leap() {
        rt += "闰";
    }
    let num = m.number();
    rt += match num {
        1 => "正",
        2..=9 => NUM_CHINESE[num as usize],
        10 => "十",
        11 => "冬",
        12 => "腊",
        _ => panic!("month {} not in 1..=12", num),
    };
    rt += "月";
    rt
}

/// The day name; days 1 through 10 are 初一 through 初十, days 21 through
/// 29 are 廿一 through 廿九.
///
/// # Examples
///
/// ```
/// use nongli::chinese::fmt;
///
/// assert_eq!("初十", fmt::day(10));
/// assert_eq!("廿五", fmt::day(25));
/// assert_eq!("三十", fmt::day(30));
/// ```
///
/// # Panics
///
/// Panics if the day number is not in `1..=30`.
pub fn day(d: u32) -> String {
    match d {
        1..=10 => "初",
        11..=19 => "十",
        20 => "二",
        21..=29 => "廿",
        30 => "三",
        _ => panic!("day {} not in 1..=30", d),
    }
    .to_owned()
        + NUM_CHINESE[(d % 10) as usize]
}

/// The solar-term name for a term number; `1..=24` run from 立春 through
/// 大寒.
///
/// # Examples
///
/// ```
/// use nongli::chinese::fmt;
///
/// assert_eq!("谷雨", fmt::solar_term(6));
/// assert_eq!("冬至", fmt::solar_term(22));
/// ```
pub fn solar_term(term: u32) -> &'static str {
    const NAMES: &[&str] = &[
        "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至",
        "小暑", "大暑", "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪",
        "冬至", "小寒",
    ];
    NAMES[term.rem_euclid(24) as usize]
}
