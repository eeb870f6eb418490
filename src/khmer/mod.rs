//! Khmer lunar calendar (ចន្ទគតិ)
//!
//! Month lengths come from integer almanac rules (see [`astro`] and
//! [`leap`]); dates are found by walking months from a fixed epoch (see
//! [`lunar`]). The zodiac animal and era change at the computed new year
//! ([`new_year`]), the Buddhist Era on the day after Visakha Bochea
//! ([`visakha`]).
//!
//! # Example
//!
//! ```
//! use chhankitek::khmer;
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 5, 22).unwrap();
//! let lunar = khmer::convert_date(date).unwrap();
//!
//! assert_eq!(2567, lunar.buddhist_era_year);
//! assert_eq!(khmer::LunarMonth::Pisak, lunar.lunar_date.month);
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::error::ChhankitekError;

pub mod astro;
pub mod fmt;
pub mod leap;
pub mod lunar;
pub mod month;
pub mod new_year;
pub mod visakha;

pub use leap::LeapClass;
pub use lunar::{LunarDate, LunarDay, MoonPhase, find_lunar_date};
pub use month::LunarMonth;
pub use new_year::{KhmerNewYear, khmer_new_year};
pub use visakha::visakha_bochea;

/// Buddhist-Era year minus Gregorian year before Visakha Bochea.
pub const BE_OFFSET: i32 = 543;

/// Jolak Sakaraj year counted from the Buddhist Era.
const JOLAK_SAKARAJ_FROM_BE: i32 = 1182;

/// A solar date expressed in the Khmer lunar calendar.
///
/// [`Display`](std::fmt::Display) writes the full almanac line.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct KhmerLunarDate {
    pub day_of_week: String,
    pub lunar_day: String,
    pub lunar_month: String,
    pub lunar_zodiac: String,
    pub lunar_era: String,
    /// Buddhist-Era year in Khmer digits.
    pub lunar_year: String,
    pub lunar_date: LunarDate,
    pub buddhist_era_year: i32,
    /// `0..12`, `0` is the Rat.
    pub zodiac_index: u32,
    /// `0..10`
    pub era_index: u32,
}

impl std::fmt::Display for KhmerLunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ថ្ងៃ{} {} ខែ{} ឆ្នាំ{} {} ពុទ្ធសករាជ {}",
            self.day_of_week,
            self.lunar_day,
            self.lunar_month,
            self.lunar_zodiac,
            self.lunar_era,
            self.lunar_year
        )
    }
}

/// Buddhist-Era year at `target`: one more than [`BE_OFFSET`] once the
/// instant is past midnight of Visakha Bochea.
pub fn buddhist_era_year(target: NaiveDateTime) -> Result<i32, ChhankitekError> {
    let year = target.year();
    let visakha = visakha_bochea(year)?.and_time(NaiveTime::MIN);
    Ok(if target > visakha {
        year + BE_OFFSET + 1
    } else {
        year + BE_OFFSET
    })
}

/// Zodiac and era indices at `target`, given the new year moment of its
/// Gregorian year.
fn zodiac_and_era(target: NaiveDateTime, new_year_moment: NaiveDateTime) -> (u32, u32) {
    let mut year = target.year() + BE_OFFSET;
    if target >= new_year_moment {
        year += 1;
    }
    (
        (year + 4).rem_euclid(12) as u32,
        (year - JOLAK_SAKARAJ_FROM_BE).rem_euclid(10) as u32,
    )
}

/// Converts a date and time.
///
/// Only the date decides the lunar day; the time matters around the new year
/// and Visakha Bochea.
///
/// # Example
///
/// ```
/// use chhankitek::khmer;
/// use chrono::NaiveDate;
///
/// let new_year = NaiveDate::from_ymd_opt(2022, 4, 14).unwrap();
/// let before = khmer::convert(new_year.and_hms_opt(9, 59, 0).unwrap()).unwrap();
/// let after = khmer::convert(new_year.and_hms_opt(10, 0, 0).unwrap()).unwrap();
///
/// assert_eq!("ឆ្លូវ", before.lunar_zodiac);
/// assert_eq!("ខាល", after.lunar_zodiac);
/// ```
pub fn convert(target: NaiveDateTime) -> Result<KhmerLunarDate, ChhankitekError> {
    let lunar_date = find_lunar_date(target.date())?;
    let buddhist_era_year = buddhist_era_year(target)?;
    let new_year_moment = khmer_new_year(target.year())?.new_year_moment;
    let (zodiac_index, era_index) = zodiac_and_era(target, new_year_moment);

    let converted = KhmerLunarDate {
        day_of_week: fmt::day_of_week(target.weekday()).to_owned(),
        lunar_day: fmt::lunar_day(lunar_date.lunar_day()),
        lunar_month: fmt::month(lunar_date.month).to_owned(),
        lunar_zodiac: fmt::zodiac(zodiac_index).to_owned(),
        lunar_era: fmt::era(era_index).to_owned(),
        lunar_year: fmt::khmer_number(i64::from(buddhist_era_year)),
        lunar_date,
        buddhist_era_year,
        zodiac_index,
        era_index,
    };
    debug!(%target, %converted, "converted date");
    Ok(converted)
}

/// [`convert`] at midnight.
pub fn convert_date(date: NaiveDate) -> Result<KhmerLunarDate, ChhankitekError> {
    convert(date.and_time(NaiveTime::MIN))
}
