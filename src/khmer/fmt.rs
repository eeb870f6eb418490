//! Khmer names and numerals used when formatting a date.

use chrono::Weekday;

use super::lunar::{LunarDay, MoonPhase};
use super::month::LunarMonth;

/// Khmer digits, `0..=9`.
pub const NUM_KHMER: &[char] = &['០', '១', '២', '៣', '៤', '៥', '៦', '៧', '៨', '៩'];

/// Writes a number with Khmer digits.
///
/// # Example
///
/// ```
/// use chhankitek::khmer;
///
/// assert_eq!("២៥៦៨", khmer::fmt::khmer_number(2568));
/// ```
pub fn khmer_number(num: i64) -> String {
    let mut rt = String::new();
    if num < 0 {
        rt.push('-');
    }
    for c in num.unsigned_abs().to_string().chars() {
        rt.push(c.to_digit(10).map_or(c, |d| NUM_KHMER[d as usize]));
    }
    rt
}

/// Name of a weekday, without the leading "ថ្ងៃ".
pub fn day_of_week(weekday: Weekday) -> &'static str {
    const NAMES: &[&str] = &["ច័ន្ទ", "អង្គារ", "ពុធ", "ព្រហស្បតិ៍", "សុក្រ", "សៅរ៍", "អាទិត្យ"];
    NAMES[weekday.num_days_from_monday() as usize]
}

pub fn moon_phase(phase: MoonPhase) -> &'static str {
    match phase {
        MoonPhase::Kert => "កើត",
        MoonPhase::Roch => "រោច",
    }
}

/// Lunar day as written in the almanac, e.g. "៥ រោច".
pub fn lunar_day(day: LunarDay) -> String {
    format!("{} {}", khmer_number(i64::from(day.count)), moon_phase(day.phase))
}

/// Name of a lunar month, without the leading "ខែ".
///
/// # Example
///
/// ```
/// use chhankitek::khmer::{self, LunarMonth};
///
/// assert_eq!("ពិសាខ", khmer::fmt::month(LunarMonth::Pisak));
/// ```
pub fn month(month: LunarMonth) -> &'static str {
    const NAMES: &[&str] = &[
        "មិគសិរ", "បុស្ស", "មាឃ", "ផល្គុន", "ចេត្រ", "ពិសាខ", "ជេស្ឋ", "អាសាឍ", "ស្រាពណ៍", "ភទ្របទ", "អស្សុជ", "កក្ដិក", "បឋមាសាឍ", "ទុតិយាសាឍ",
    ];
    NAMES[usize::from(month.index())]
}

/// Animal of the twelve-year cycle, `0` is the Rat.
pub fn zodiac(index: u32) -> &'static str {
    const NAMES: &[&str] = &[
        "ជូត", "ឆ្លូវ", "ខាល", "ថោះ", "រោង", "ម្សាញ់", "មមីរ", "មមែ", "វក", "រកា", "ច", "កុរ",
    ];
    NAMES[index.rem_euclid(12) as usize]
}

/// Name in the ten-year era (ស័ក) cycle.
pub fn era(index: u32) -> &'static str {
    const NAMES: &[&str] = &[
        "សំរឹទ្ធិស័ក", "ឯកស័ក", "ទោស័ក", "ត្រីស័ក", "ចត្វាស័ក", "បញ្ចស័ក", "ឆស័ក", "សប្តស័ក", "អដ្ឋស័ក", "នព្វស័ក",
    ];
    NAMES[index.rem_euclid(10) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        for (std, num) in [("០", 0), ("១៥", 15), ("២៤៤៣", 2443), ("-៧", -7)] {
            assert_eq!(std, khmer_number(num));
        }
    }

    #[test]
    fn lunar_days() {
        for (std, count, phase) in [
            ("១ កើត", 1, MoonPhase::Kert),
            ("១៥ រោច", 15, MoonPhase::Roch),
        ] {
            assert_eq!(std, lunar_day(LunarDay { count, phase }));
        }
    }

    #[test]
    fn names() {
        assert_eq!("អាទិត្យ", day_of_week(Weekday::Sun));
        assert_eq!("ច័ន្ទ", day_of_week(Weekday::Mon));
        assert_eq!("ទុតិយាសាឍ", month(LunarMonth::DutiyaAsath));
        assert_eq!("ជូត", zodiac(0));
        assert_eq!("រោង", zodiac(16));
        assert_eq!("សំរឹទ្ធិស័ក", era(0));
        assert_eq!("ត្រីស័ក", era(13));
    }

    #[test]
    fn every_month_named() {
        let mut seen = std::collections::HashSet::new();
        for m in LunarMonth::ALL {
            assert!(seen.insert(month(m)), "{m:?}");
        }
    }
}
