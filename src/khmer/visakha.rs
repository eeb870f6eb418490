//! Visakha Bochea (វិសាខបូជា), the full moon of Pisak. The Buddhist Era
//! advances on the day after it.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use super::leap::LeapMemo;
use super::lunar::find_lunar_date_with;
use super::month::LunarMonth;
use crate::error::ChhankitekError;

/// Lunar day of the full moon, 15 Kert.
const FULL_MOON_DAY: u32 = 14;

/// Finds Visakha Bochea in Gregorian year `year`.
///
/// Scans forward from January 1 for at most 365 days.
///
/// # Example
///
/// ```
/// use chhankitek::khmer::visakha_bochea;
///
/// assert_eq!("2024-05-22", visakha_bochea(2024).unwrap().to_string());
/// ```
pub fn visakha_bochea(year: i32) -> Result<NaiveDate, ChhankitekError> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or(ChhankitekError::VisakhaBocheaNotFound { year })?;
    let date = scan(start, SCAN_DAYS)?;
    debug!(year, %date, "found visakha bochea");
    Ok(date)
}

/// Days examined from January 1.
const SCAN_DAYS: u32 = 365;

/// First full moon of Pisak within `limit` days from `start`, staying in
/// `start`'s year.
fn scan(start: NaiveDate, limit: u32) -> Result<NaiveDate, ChhankitekError> {
    let year = start.year();
    let mut memo = LeapMemo::new();
    let mut date = start;
    for _ in 0..limit {
        let lunar = find_lunar_date_with(date, &mut memo)?;
        if lunar.month == LunarMonth::Pisak && lunar.day == FULL_MOON_DAY {
            return Ok(date);
        }
        date = match date.succ_opt() {
            Some(next) if next.year() == year => next,
            _ => break,
        };
    }
    Err(ChhankitekError::VisakhaBocheaNotFound { year })
}
