//! Lunar date of a solar date, found by walking month by month from a fixed
//! epoch.

use chrono::{Datelike, Days, NaiveDate};

use super::leap::LeapMemo;
use super::month::LunarMonth;
use crate::error::ChhankitekError;

/// 1900-01-01, which is 1 Kert of Bos.
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1900, 1, 1) {
    Some(date) => date,
    None => panic!("invalid epoch"),
};

/// Lunar month in effect on [`EPOCH`].
pub const EPOCH_MONTH: LunarMonth = LunarMonth::Bos;

/// Last solar month counted in the earlier Buddhist-Era year when month
/// lengths are looked up.
const APPROXIMATE_CUTOVER_MONTH: u32 = 4;

/// Buddhist-Era year used to look up month lengths during the walk.
///
/// Switches after April instead of at the computed new year, so the two
/// disagree for a few days around mid-April.
pub fn approximate_be_year(date: NaiveDate) -> i32 {
    if date.month() <= APPROXIMATE_CUTOVER_MONTH {
        date.year() + 543
    } else {
        date.year() + 544
    }
}

/// Waxing (កើត) or waning (រោច) half of a month.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MoonPhase {
    Kert,
    Roch,
}

/// Day as written in the almanac, e.g. "5 Roch".
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LunarDay {
    /// `1..=15`
    pub count: u32,
    pub phase: MoonPhase,
}

/// Lunar date of a solar date.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LunarDate {
    /// Day in the month, `0..=29`. Days `0..=14` are 1 to 15 Kert, days
    /// `15..=29` are 1 to 15 Roch.
    pub day: u32,
    pub month: LunarMonth,
    /// The solar date this lunar date was computed for.
    pub date: NaiveDate,
}

impl LunarDate {
    /// Splits [`LunarDate::day`] into a count and a moon phase.
    ///
    /// # Example
    ///
    /// ```
    /// use chhankitek::khmer::{find_lunar_date, LunarMonth, MoonPhase};
    /// use chrono::NaiveDate;
    ///
    /// let date = find_lunar_date(NaiveDate::from_ymd_opt(1900, 1, 30).unwrap()).unwrap();
    /// assert_eq!(LunarMonth::Bos, date.month);
    /// assert_eq!((15, MoonPhase::Roch), (date.lunar_day().count, date.lunar_day().phase));
    /// ```
    pub fn lunar_day(&self) -> LunarDay {
        LunarDay {
            count: self.day % 15 + 1,
            phase: if self.day > 14 {
                MoonPhase::Roch
            } else {
                MoonPhase::Kert
            },
        }
    }
}

/// Finds the lunar date of `target`.
///
/// Every call walks from [`EPOCH`]; nothing is kept between calls.
///
/// # Example
///
/// ```
/// use chhankitek::khmer::{find_lunar_date, LunarMonth};
/// use chrono::NaiveDate;
///
/// let date = find_lunar_date(NaiveDate::from_ymd_opt(2022, 5, 15).unwrap()).unwrap();
/// assert_eq!((14, LunarMonth::Pisak), (date.day, date.month)); // 15 Kert, Visakha Bochea
/// ```
pub fn find_lunar_date(target: NaiveDate) -> Result<LunarDate, ChhankitekError> {
    find_lunar_date_with(target, &mut LeapMemo::new())
}

fn month_days(memo: &mut LeapMemo, month: LunarMonth, date: NaiveDate) -> u32 {
    month.days(memo.resolve(approximate_be_year(date)).is_leap_day())
}

fn next_month(memo: &mut LeapMemo, month: LunarMonth, date: NaiveDate) -> LunarMonth {
    month.next(memo.resolve(approximate_be_year(date)).is_leap_month())
}

/// [`find_lunar_date`] sharing a caller-scoped leap memo.
pub(crate) fn find_lunar_date_with(
    target: NaiveDate,
    memo: &mut LeapMemo,
) -> Result<LunarDate, ChhankitekError> {
    if target < EPOCH {
        return Err(ChhankitekError::BeforeEpoch { date: target });
    }

    let mut anchor = EPOCH;
    let mut month = EPOCH_MONTH;
    loop {
        let days = month_days(memo, month, anchor);
        if target.signed_duration_since(anchor).num_days() <= i64::from(days) {
            break;
        }
        anchor = anchor
            .checked_add_days(Days::new(u64::from(days)))
            .ok_or(ChhankitekError::DateOutOfRange {
                year: target.year(),
            })?;
        month = next_month(memo, month, anchor);
    }

    // The walk stops with up to a full month left over; the length check
    // here goes by the target's own year.
    let mut day = target.signed_duration_since(anchor).num_days() as u32;
    let total = month_days(memo, month, target);
    if day >= total {
        day %= total;
        month = next_month(memo, month, anchor);
    }

    Ok(LunarDate {
        day,
        month,
        date: target,
    })
}
