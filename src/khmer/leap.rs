//! Leap rules: leap-month (អធិកមាស) and leap-day (ចន្ទ្រាធិមាស) years.
//!
//! A year is first classified from its own Bodithey and Avoman, with
//! lookahead into the next year for the consecutive-value cases. A year that
//! comes out as both leap-month and leap-day keeps only the leap month; its
//! leap day moves to the following year.

use std::collections::HashMap;

use super::astro::YearAstroInfo;

/// Classification of a year before and after deferring the leap day.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum LeapClass {
    /// 12 months, 354 days.
    Regular,
    /// 13 months (Adhikameas), 384 days.
    LeapMonth,
    /// Jesth has 30 days (Chhantrea Thimeas), 355 days.
    LeapDay,
    /// Both indicators hit. Only produced by [`classify`], never by
    /// [`resolve`].
    LeapBoth,
}

impl LeapClass {
    /// `true` for [`LeapClass::LeapMonth`].
    pub fn is_leap_month(self) -> bool {
        matches!(self, Self::LeapMonth)
    }
    /// `true` for [`LeapClass::LeapDay`].
    pub fn is_leap_day(self) -> bool {
        matches!(self, Self::LeapDay)
    }
}

/// Classifies a year from its constants and those of the year after.
pub fn classify_with(year: &YearAstroInfo, next: &YearAstroInfo) -> LeapClass {
    let mut bodithey_leap = year.bodithey >= 25 || year.bodithey <= 5;

    let avoman_leap = if year.has_366_days() {
        year.avaman <= 126
    } else {
        // 137 followed by 0: the 137 year is regular
        year.avaman <= 137 && !(year.avaman == 137 && next.avaman == 0)
    };

    // 25 followed by 5: only the 5 year takes the leap month
    if year.bodithey == 25 && next.bodithey == 5 {
        bodithey_leap = false;
    }
    // 24 followed by 6: the 24 year takes it
    if year.bodithey == 24 && next.bodithey == 6 {
        bodithey_leap = true;
    }

    match (bodithey_leap, avoman_leap) {
        (true, true) => LeapClass::LeapBoth,
        (true, false) => LeapClass::LeapMonth,
        (false, true) => LeapClass::LeapDay,
        (false, false) => LeapClass::Regular,
    }
}

/// Classifies a Buddhist-Era year, possibly as [`LeapClass::LeapBoth`].
pub fn classify(be_year: i32) -> LeapClass {
    classify_with(
        &YearAstroInfo::for_buddhist_era(be_year),
        &YearAstroInfo::for_buddhist_era(be_year + 1),
    )
}

fn defer_leap_day(previous: LeapClass, current: LeapClass) -> LeapClass {
    match current {
        LeapClass::LeapBoth => LeapClass::LeapMonth,
        LeapClass::LeapMonth | LeapClass::LeapDay => current,
        LeapClass::Regular if previous == LeapClass::LeapBoth => LeapClass::LeapDay,
        LeapClass::Regular => LeapClass::Regular,
    }
}

/// Final classification of a Buddhist-Era year. Never
/// [`LeapClass::LeapBoth`].
///
/// # Example
///
/// ```
/// use chhankitek::khmer::leap::{self, LeapClass};
///
/// assert_eq!(LeapClass::LeapMonth, leap::resolve(2559));
/// assert_eq!(LeapClass::LeapDay, leap::resolve(2560)); // deferred from 2559
/// ```
pub fn resolve(be_year: i32) -> LeapClass {
    let previous = YearAstroInfo::for_buddhist_era(be_year - 1);
    let current = YearAstroInfo::for_buddhist_era(be_year);
    let next = YearAstroInfo::for_buddhist_era(be_year + 1);
    defer_leap_day(
        classify_with(&previous, &current),
        classify_with(&current, &next),
    )
}

/// Whether the year has 13 months.
pub fn is_khmer_leap_month(be_year: i32) -> bool {
    resolve(be_year).is_leap_month()
}

/// Whether the year's Jesth has 30 days.
pub fn is_khmer_leap_day(be_year: i32) -> bool {
    resolve(be_year).is_leap_day()
}

/// Resolved classes of the years seen during one query.
///
/// The lunar walk asks for the same handful of years over and over; this
/// keeps each answer once. Not meant to outlive the query that created it.
#[derive(Debug, Default)]
pub struct LeapMemo {
    classes: HashMap<i32, LeapClass>,
}

impl LeapMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same as [`resolve`], remembered.
    pub fn resolve(&mut self, be_year: i32) -> LeapClass {
        *self
            .classes
            .entry(be_year)
            .or_insert_with(|| resolve(be_year))
    }
}

// Rules of the new year computation, counted in Jolak Sakaraj years.

/// Leap-month year (អធិកមាស) in the new year computation.
pub fn is_athikameas(js_year: i32) -> bool {
    let year = YearAstroInfo::for_jolak_sakaraj(js_year);
    let next = YearAstroInfo::for_jolak_sakaraj(js_year + 1);
    !(year.bodithey == 25 && next.bodithey == 5)
        && (year.bodithey > 24
            || year.bodithey < 6
            || (year.bodithey == 24 && next.bodithey == 6))
}

/// Leap-day year (ចន្ទ្រាធិមាស) in the new year computation.
pub fn is_chantreathimeas(js_year: i32) -> bool {
    let previous = YearAstroInfo::for_jolak_sakaraj(js_year - 1);
    let year = YearAstroInfo::for_jolak_sakaraj(js_year);
    let next = YearAstroInfo::for_jolak_sakaraj(js_year + 1);
    let has_366_days = year.has_366_days();
    (has_366_days && year.avaman < 127)
        || (!(year.avaman == 137 && next.avaman == 0)
            && ((!has_366_days && year.avaman < 138)
                || (previous.avaman == 137 && year.avaman == 0)))
}

/// Whether Jesth has 30 days, after moving a clashing leap day to the next
/// year.
pub fn jesth_has_30(js_year: i32) -> bool {
    let chantreathimeas = is_chantreathimeas(js_year);
    if chantreathimeas && is_athikameas(js_year) {
        return false;
    }
    if !chantreathimeas && is_athikameas(js_year - 1) && is_chantreathimeas(js_year - 1) {
        return true;
    }
    chantreathimeas
}
