//! Almanac data: festivals, solar-term days, and daily yi/ji guidance.
//!
//! Everything here is a lookup over `'static` tables plus the calendar
//! conversions; no state is kept. A query that matches no rule yields empty
//! results, never an error.
//!
//! Yi/ji guidance follows the twelve day officers (建除十二神): the officer
//! of a day is fixed by the position of the day branch relative to the
//! solar-term month branch, so it advances one step per day and repeats
//! across a jie boundary, as the traditional almanacs have it.

use crate::chinese::{Sui, fmt, ganzhi, solar_to_lunar};
use crate::date::Date;
use crate::error::CalendarError;

/// Festivals tied to a solar month and day.
const SOLAR_FESTIVALS: &[(i32, i32, &str)] = &[
    (1, 1, "元旦节"),
    (2, 14, "情人节"),
    (3, 8, "妇女节"),
    (3, 12, "植树节"),
    (4, 1, "愚人节"),
    (5, 1, "劳动节"),
    (5, 4, "青年节"),
    (6, 1, "儿童节"),
    (7, 1, "建党节"),
    (8, 1, "建军节"),
    (9, 10, "教师节"),
    (10, 1, "国庆节"),
    (12, 24, "平安夜"),
    (12, 25, "圣诞节"),
];

/// Festivals tied to a lunar month and day (common months only).
const LUNAR_FESTIVALS: &[(u32, u32, &str)] = &[
    (1, 1, "春节"),
    (1, 15, "元宵节"),
    (2, 2, "龙头节"),
    (5, 5, "端午节"),
    (7, 7, "七夕节"),
    (7, 15, "中元节"),
    (8, 15, "中秋节"),
    (9, 9, "重阳节"),
    (12, 8, "腊八节"),
];

/// The almanac record of one civil day.
///
/// Derived entirely from the static tables; the festival list is usually
/// empty or a single entry, but coincidences (e.g. a solar festival on a
/// lunar festival day) yield several.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlmanacEntry {
    /// All festivals falling on the day, solar-table and lunar-table
    /// matches combined.
    pub festivals: Vec<&'static str>,
    /// The solar-term name when a term instant falls on this civil day.
    pub solar_term: Option<&'static str>,
    /// Auspicious activities of the day.
    pub yi: Vec<&'static str>,
    /// Inauspicious activities of the day.
    pub ji: Vec<&'static str>,
}

impl AlmanacEntry {
    /// The single annotation a compact day cell shows: the first festival,
    /// or failing that the solar-term name.
    pub fn display_label(&self) -> Option<&'static str> {
        self.festivals.first().copied().or(self.solar_term)
    }
}

/// The twelve day officers (建除十二神), in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayOfficer {
    Jian,
    Chu,
    Man,
    Ping,
    Ding,
    Zhi,
    Po,
    Wei,
    Cheng,
    Shou,
    Kai,
    Bi,
}

const OFFICERS: [DayOfficer; 12] = [
    DayOfficer::Jian,
    DayOfficer::Chu,
    DayOfficer::Man,
    DayOfficer::Ping,
    DayOfficer::Ding,
    DayOfficer::Zhi,
    DayOfficer::Po,
    DayOfficer::Wei,
    DayOfficer::Cheng,
    DayOfficer::Shou,
    DayOfficer::Kai,
    DayOfficer::Bi,
];

impl DayOfficer {
    /// Canonical single-character name.
    pub fn name(&self) -> &'static str {
        const NAMES: [&str; 12] = [
            "建", "除", "满", "平", "定", "执", "破", "危", "成", "收", "开", "闭",
        ];
        NAMES[*self as usize]
    }

    /// Auspicious activities under this officer.
    pub fn yi(&self) -> &'static [&'static str] {
        match self {
            DayOfficer::Jian => &["出行", "上任", "会友", "祈福"],
            DayOfficer::Chu => &["祭祀", "沐浴", "扫舍", "求医"],
            DayOfficer::Man => &["开市", "交易", "纳财", "祭祀"],
            DayOfficer::Ping => &["修造", "平治道涂", "安床"],
            DayOfficer::Ding => &["嫁娶", "订盟", "祭祀", "宴会"],
            DayOfficer::Zhi => &["捕捉", "纳采", "修造"],
            DayOfficer::Po => &["求医", "破屋坏垣"],
            DayOfficer::Wei => &["祭祀", "安床", "纳畜"],
            DayOfficer::Cheng => &["嫁娶", "开市", "入学", "修造", "安葬"],
            DayOfficer::Shou => &["纳财", "收账", "入仓"],
            DayOfficer::Kai => &["开市", "动土", "求嗣", "入学", "出行"],
            DayOfficer::Bi => &["安葬", "筑堤", "塞穴"],
        }
    }

    /// Inauspicious activities under this officer.
    pub fn ji(&self) -> &'static [&'static str] {
        match self {
            DayOfficer::Jian => &["动土", "开仓", "安葬"],
            DayOfficer::Chu => &["嫁娶", "出行"],
            DayOfficer::Man => &["安葬", "栽种"],
            DayOfficer::Ping => &["祈福", "嫁娶", "开市"],
            DayOfficer::Ding => &["诉讼", "出行"],
            DayOfficer::Zhi => &["开市", "出行", "移徙"],
            DayOfficer::Po => &["嫁娶", "开市", "出行", "安葬"],
            DayOfficer::Wei => &["登高", "行船", "出行"],
            DayOfficer::Cheng => &["诉讼"],
            DayOfficer::Shou => &["放债", "出行", "安葬"],
            DayOfficer::Kai => &["安葬"],
            DayOfficer::Bi => &["开市", "出行", "动土"],
        }
    }
}

/// The day officer governing a civil date.
pub fn officer_for(date: Date) -> Result<DayOfficer, CalendarError> {
    let month_branch = ganzhi::month_ganzhi(date)?.branch.index();
    let day_branch = ganzhi::day_ganzhi(date).branch.index();
    Ok(OFFICERS[((day_branch + 12 - month_branch) % 12) as usize])
}

/// All festivals falling on a civil date.
///
/// Checks the solar table, the lunar table (common months only), and the
/// New Year's Eve rule (the day before lunar month 1 day 1). Multiple
/// coincident festivals are all reported.
pub fn festivals_for(date: Date) -> Result<Vec<&'static str>, CalendarError> {
    let lunar = solar_to_lunar(date)?;
    let (_, sm, sd) = date.gregorian();
    let mut found = Vec::new();
    for &(m, d, name) in SOLAR_FESTIVALS {
        if (m, d) == (sm, sd) {
            found.push(name);
        }
    }
    if !lunar.is_leap_month() {
        for &(m, d, name) in LUNAR_FESTIVALS {
            if (m, d) == (lunar.month_number(), lunar.day) {
                found.push(name);
            }
        }
    }
    // the eve of month 1 day 1, whether the closing month has 29 or 30 days
    if let Ok(next) = solar_to_lunar(date + 1)
        && !next.is_leap_month()
        && (next.month_number(), next.day) == (1, 1)
    {
        found.push("除夕");
    }
    Ok(found)
}

/// The solar-term name when a term instant falls on this civil day.
pub fn solar_term_on(date: Date) -> Result<Option<&'static str>, CalendarError> {
    let sui = Sui::for_date(date)?;
    Ok(sui
        .solar_term_for(date)
        .ok()
        .filter(|&(_, _, days_since)| days_since == 0)
        .map(|(_, term, _)| fmt::solar_term(term)))
}

/// The full almanac record of a civil date.
///
/// # Examples
///
/// ```
/// use nongli::Date;
/// use nongli::chinese::almanac::almanac_for;
///
/// let entry = almanac_for(Date::new(2024, 2, 10).unwrap()).unwrap();
/// assert_eq!(vec!["春节"], entry.festivals);
/// assert!(!entry.yi.is_empty());
/// ```
pub fn almanac_for(date: Date) -> Result<AlmanacEntry, CalendarError> {
    let festivals = festivals_for(date)?;
    let solar_term = solar_term_on(date)?;
    let officer = officer_for(date)?;
    Ok(AlmanacEntry {
        festivals,
        solar_term,
        yi: officer.yi().to_vec(),
        ji: officer.ji().to_vec(),
    })
}
