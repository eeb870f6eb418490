//! Khmer New Year (ចូលឆ្នាំ): the day and time the mean sun, corrected by
//! the phol table, crosses into a new reasey.
//!
//! Positions are sexagesimal: 1 reasey (រាសី) = 30 angsar (អង្សា), 1 angsar
//! = 60 libda (លិប្ដា). Arithmetic is carried out in libda.
//!
//! This computation counts years in Jolak Sakaraj; a Gregorian year `G`
//! begins Jolak Sakaraj year `G - 638` in April.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Weekday};
use tracing::{debug, trace};

use super::astro::YearAstroInfo;
use super::leap;
use super::lunar::find_lunar_date;
use super::month::LunarMonth;
use crate::error::ChhankitekError;

pub const LIBDA_PER_ANGSAR: i64 = 60;
pub const LIBDA_PER_REASEY: i64 = 30 * LIBDA_PER_ANGSAR;

/// Gregorian year minus Jolak Sakaraj year, from the new year on.
pub const JOLAK_SAKARAJ_OFFSET: i32 = 1182 - 544;

/// A position in reasey, angsar and libda.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SunPosition {
    pub reasey: i64,
    pub angsar: i64,
    pub libda: i64,
}

impl SunPosition {
    pub const fn new(reasey: i64, angsar: i64, libda: i64) -> Self {
        Self {
            reasey,
            angsar,
            libda,
        }
    }

    /// Splits a libda count.
    ///
    /// # Example
    ///
    /// ```
    /// use chhankitek::khmer::new_year::SunPosition;
    ///
    /// assert_eq!(SunPosition::new(12, 0, 4), SunPosition::from_libda(21604));
    /// ```
    pub fn from_libda(libda: i64) -> Self {
        Self {
            reasey: libda.div_euclid(LIBDA_PER_REASEY),
            angsar: libda.rem_euclid(LIBDA_PER_REASEY).div_euclid(LIBDA_PER_ANGSAR),
            libda: libda.rem_euclid(LIBDA_PER_ANGSAR),
        }
    }

    pub fn as_libda(&self) -> i64 {
        self.reasey * LIBDA_PER_REASEY + self.angsar * LIBDA_PER_ANGSAR + self.libda
    }
}

/// Intermediate values for one sotin (សុទិន).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SunInfo {
    /// Mean sun (មធ្យមព្រះអាទិត្យ), in libda.
    pub sun_average: i64,
    /// Khan (ខណ្ឌ)
    pub khan: i64,
    pub pouichalip: i64,
    pub phol: SunPosition,
    /// Sun inauguration (សម្ពោធព្រះអាទិត្យ), in libda.
    pub sun_inauguration: i64,
}

/// Mean sun on day `sotin` of the solar year following `previous`.
pub fn sun_average(sotin: i64, previous: &YearAstroInfo) -> i64 {
    let r2 = 800 * sotin + i64::from(previous.kromathopol);
    let reasey = r2.div_euclid(24350);
    let r3 = r2.rem_euclid(24350);
    let angsar = r3.div_euclid(811);
    let r4 = r3.rem_euclid(811);
    let libda = r4.div_euclid(14) - 3;
    SunPosition::new(reasey, angsar, libda).as_libda()
}

/// Mean sun minus 2 reasey 20 angsar, borrowing 12 reasey when negative.
fn leftover(sun_average: i64) -> i64 {
    let origin = SunPosition::new(2, 20, 0).as_libda();
    let leftover = sun_average - origin;
    if leftover < 0 {
        leftover + 12 * LIBDA_PER_REASEY
    } else {
        leftover
    }
}

/// Folds the leftover into the first quarter of the circle.
fn last_leftover(kaen: i64, leftover: i64) -> SunPosition {
    let residual = match kaen {
        0..=2 => leftover,
        3..=5 => 6 * LIBDA_PER_REASEY - leftover,
        6..=8 => leftover - 6 * LIBDA_PER_REASEY,
        // R11.A29.L60
        _ => SunPosition::new(11, 29, 60).as_libda() - leftover,
    };
    SunPosition::from_libda(residual)
}

/// Phol (ផល) correction for a khan and pouichalip.
///
/// # Example
///
/// ```
/// use chhankitek::khmer::new_year::{phol, SunPosition};
///
/// assert_eq!(SunPosition::new(0, 2, 11), phol(5, 427));
/// ```
pub fn phol(khan: i64, pouichalip: i64) -> SunPosition {
    const TABLE: [(i64, i64); 6] = [(35, 0), (32, 35), (27, 67), (22, 94), (13, 116), (5, 129)];
    let (multiplicity, chhaya) = usize::try_from(khan)
        .ok()
        .and_then(|khan| TABLE.get(khan).copied())
        .unwrap_or((0, 134));
    let q = (pouichalip * multiplicity).div_euclid(900);
    SunPosition::from_libda(q + chhaya)
}

/// Runs the full correction for one sotin.
pub fn sun_info(sotin: i64, previous: &YearAstroInfo) -> SunInfo {
    let sun_average = sun_average(sotin, previous);
    let leftover = leftover(sun_average);
    let kaen = leftover.div_euclid(LIBDA_PER_REASEY);
    let last = last_leftover(kaen, leftover);

    let (khan, pouichalip) = if last.angsar >= 15 {
        (2 * last.reasey + 1, 60 * (last.angsar - 15) + last.libda)
    } else {
        (2 * last.reasey, 60 * last.angsar + last.libda)
    };

    let phol = phol(khan, pouichalip);
    let sun_inauguration = if kaen <= 5 {
        sun_average - phol.as_libda()
    } else {
        sun_average + phol.as_libda()
    };

    SunInfo {
        sun_average,
        khan,
        pouichalip,
        phol,
        sun_inauguration,
    }
}

/// One of the four candidate days examined for the new year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NewYearDaySotin {
    pub sotin: i64,
    /// Sun inauguration on that day.
    pub position: SunPosition,
}

/// Time of day the new year begins (ម៉ោងទេវតាចុះ).
///
/// `hour` is 24 when the threshold libda is 0.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NewYearTime {
    pub hour: u32,
    pub minute: u32,
}

impl NewYearTime {
    /// Time implied by the threshold sotin's libda; 24 hours span 60 libda.
    ///
    /// `libda` is a [`SunPosition::libda`], so `0..60`; 0 gives 24:00.
    pub fn from_libda(libda: i64) -> Self {
        let minutes = (24 * 60 - libda * 24) as u32;
        Self {
            hour: minutes / 60,
            minute: minutes % 60,
        }
    }

    pub fn minutes_of_day(&self) -> i64 {
        i64::from(self.hour * 60 + self.minute)
    }
}

/// Lunar date of Lerng Sak (ថ្ងៃឡើងស័ក), the day the era number advances.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LerngSakDate {
    pub day: u32,
    /// Chetr or Pisak.
    pub month: LunarMonth,
}

impl LerngSakDate {
    fn from_bodithey(bodithey: u32) -> Self {
        if bodithey >= 6 {
            Self {
                day: bodithey - 1,
                month: LunarMonth::Chetr,
            }
        } else {
            Self {
                day: bodithey,
                month: LunarMonth::Pisak,
            }
        }
    }
}

/// Everything the almanac derives about one new year.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct KhmerNewYear {
    pub solar_year: i32,
    pub jolak_sakaraj_year: i32,
    pub info: YearAstroInfo,
    pub has_366_days: bool,
    /// Adhikameas
    pub is_leap_month_year: bool,
    /// Chhantrea Thimeas
    pub is_leap_day_year: bool,
    pub jesth_has_30_days: bool,
    pub day_of_week_lerng_sak: Weekday,
    pub lunar_date_lerng_sak: LerngSakDate,
    pub sotins: [NewYearDaySotin; 4],
    pub time_of_new_year: NewYearTime,
    /// 4 when the first sotin already sits on angsar 0, otherwise 3.
    pub number_of_new_year_days: u32,
    /// Date and time the new year begins.
    pub new_year_moment: NaiveDateTime,
}

const LERNG_SAK_WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

impl KhmerNewYear {
    /// New year falling in Gregorian year `solar_year`.
    ///
    /// # Example
    ///
    /// ```
    /// use chhankitek::khmer::KhmerNewYear;
    ///
    /// let new_year = KhmerNewYear::for_solar_year(2024).unwrap();
    /// assert_eq!(4, new_year.number_of_new_year_days);
    /// assert_eq!((22, 24), (new_year.time_of_new_year.hour, new_year.time_of_new_year.minute));
    /// assert_eq!("2024-04-13 22:24:00", new_year.new_year_moment.to_string());
    /// ```
    pub fn for_solar_year(solar_year: i32) -> Result<Self, ChhankitekError> {
        let js_year = solar_year - JOLAK_SAKARAJ_OFFSET;
        let info = YearAstroInfo::for_jolak_sakaraj(js_year);
        let previous = YearAstroInfo::for_jolak_sakaraj(js_year - 1);

        let first_sotin = if previous.has_366_days() { 363 } else { 362 };
        let sotins: [NewYearDaySotin; 4] = std::array::from_fn(|i| {
            let sotin = first_sotin + i as i64;
            let sun = sun_info(sotin, &previous);
            trace!(
                sotin,
                average = sun.sun_average,
                khan = sun.khan,
                pouichalip = sun.pouichalip,
                inauguration = sun.sun_inauguration,
                "sotin"
            );
            NewYearDaySotin {
                sotin,
                position: SunPosition::from_libda(sun.sun_inauguration),
            }
        });

        let threshold = threshold_sotin(&sotins, solar_year)?;
        let time_of_new_year = NewYearTime::from_libda(threshold.position.libda);
        let number_of_new_year_days = if sotins[0].position.angsar == 0 { 4 } else { 3 };

        let mut bodithey = info.bodithey;
        if leap::is_athikameas(js_year - 1) && leap::is_chantreathimeas(js_year - 1) {
            bodithey = (bodithey + 1) % 30;
        }
        let lunar_date_lerng_sak = LerngSakDate::from_bodithey(bodithey);
        let new_year_moment = new_year_moment(
            solar_year,
            time_of_new_year,
            lunar_date_lerng_sak,
            number_of_new_year_days,
        )?;

        let new_year = Self {
            solar_year,
            jolak_sakaraj_year: js_year,
            info,
            has_366_days: info.has_366_days(),
            is_leap_month_year: leap::is_athikameas(js_year),
            is_leap_day_year: leap::is_chantreathimeas(js_year),
            jesth_has_30_days: leap::jesth_has_30(js_year),
            day_of_week_lerng_sak: LERNG_SAK_WEEKDAYS[(info.harkun - 2).rem_euclid(7) as usize],
            lunar_date_lerng_sak,
            sotins,
            time_of_new_year,
            number_of_new_year_days,
            new_year_moment,
        };
        debug!(
            solar_year,
            js_year,
            %new_year_moment,
            weekday = ?new_year_moment.weekday(),
            days = number_of_new_year_days,
            "computed khmer new year"
        );
        Ok(new_year)
    }
}

/// First sotin whose inauguration sits on angsar 0.
fn threshold_sotin(
    sotins: &[NewYearDaySotin],
    solar_year: i32,
) -> Result<&NewYearDaySotin, ChhankitekError> {
    sotins
        .iter()
        .find(|s| s.position.angsar == 0)
        .ok_or(ChhankitekError::NewYearThresholdNotFound { solar_year })
}

/// Date and time the new year begins.
///
/// Counted back from April 17 by the lunar distance to Lerng Sak; the time
/// of day is added last, so 24:00 ends on the following midnight.
fn new_year_moment(
    solar_year: i32,
    time: NewYearTime,
    lerng_sak: LerngSakDate,
    number_of_days: u32,
) -> Result<NaiveDateTime, ChhankitekError> {
    let out_of_range = || ChhankitekError::DateOutOfRange { year: solar_year };
    let lerng_sak_epoch = NaiveDate::from_ymd_opt(solar_year, 4, 17).ok_or_else(out_of_range)?;

    let lunar = find_lunar_date(lerng_sak_epoch)?;
    let diff = month_offset(lunar.month, lunar.day) - month_offset(lerng_sak.month, lerng_sak.day);
    let days_back = diff + i64::from(number_of_days) - 1;

    lerng_sak_epoch
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| midnight.checked_sub_signed(TimeDelta::days(days_back)))
        .and_then(|day| day.checked_add_signed(TimeDelta::minutes(time.minutes_of_day())))
        .ok_or_else(out_of_range)
}

/// Day position counting 30 days per month from Chetr.
fn month_offset(month: LunarMonth, day: u32) -> i64 {
    (i64::from(month.index()) - 4) * 30 + i64::from(day)
}

/// Shorthand for [`KhmerNewYear::for_solar_year`].
pub fn khmer_new_year(solar_year: i32) -> Result<KhmerNewYear, ChhankitekError> {
    KhmerNewYear::for_solar_year(solar_year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use LunarMonth::*;

    #[test]
    fn positions() {
        for (std, libda) in [
            ((0, 0, 0), 0),
            ((0, 2, 11), 131),
            ((11, 29, 49), 21589),
            ((12, 0, 4), 21604),
            ((12, 2, 59), 21779),
        ] {
            let pos = SunPosition::from_libda(libda);
            assert_eq!(std, (pos.reasey, pos.angsar, pos.libda));
            assert_eq!(libda, pos.as_libda());
        }
    }

    #[test]
    fn phol_table() {
        for (std, (khan, pouichalip)) in [
            (0, (0, 0)),
            (35, (0, 900)),
            (67, (1, 900)),
            (131, (5, 427)),
            (133, (5, 899)),
            (134, (6, 500)),
            (134, (9, 0)),
        ] {
            assert_eq!(std, phol(khan, pouichalip).as_libda(), "{khan} {pouichalip}");
        }
    }

    #[test]
    fn sun_info_of_sotin() {
        // 2024: previous year is Jolak Sakaraj 1385
        let previous = YearAstroInfo::for_jolak_sakaraj(1385);
        assert_eq!(
            SunInfo {
                sun_average: 21473,
                khan: 5,
                pouichalip: 427,
                phol: SunPosition::new(0, 2, 11),
                sun_inauguration: 21604,
            },
            sun_info(363, &previous)
        );
    }

    #[test]
    fn last_leftover_quarters() {
        let r = LIBDA_PER_REASEY;
        for (std, kaen, leftover) in [
            (SunPosition::new(1, 10, 5), 1, r + 605),
            (SunPosition::new(1, 0, 0), 5, 5 * r),
            (SunPosition::new(1, 0, 0), 7, 7 * r),
            (SunPosition::new(2, 22, 7), 9, 16673),
        ] {
            assert_eq!(std, last_leftover(kaen, leftover), "{kaen} {leftover}");
        }
    }

    #[test]
    fn leftover_borrows() {
        assert_eq!(16673, leftover(21473));
        assert_eq!(20999, leftover(4199));
        assert_eq!(12 * LIBDA_PER_REASEY - 1, leftover(4799));
        assert_eq!(0, leftover(4800));
    }

    #[test]
    fn new_year_2024() {
        let ny = KhmerNewYear::for_solar_year(2024).unwrap();
        assert_eq!(1386, ny.jolak_sakaraj_year);
        assert_eq!(
            [
                (363, 12, 0, 4),
                (364, 12, 1, 3),
                (365, 12, 2, 1),
                (366, 12, 2, 59)
            ],
            ny.sotins
                .map(|s| (s.sotin, s.position.reasey, s.position.angsar, s.position.libda))
        );
        assert_eq!(NewYearTime { hour: 22, minute: 24 }, ny.time_of_new_year);
        assert_eq!(4, ny.number_of_new_year_days);
        assert_eq!(LerngSakDate { day: 7, month: Chetr }, ny.lunar_date_lerng_sak);
        assert_eq!(Weekday::Tue, ny.day_of_week_lerng_sak);
        assert!(!ny.has_366_days);
        assert!(!ny.is_leap_month_year);
        assert!(!ny.is_leap_day_year);
        assert!(!ny.jesth_has_30_days);
    }

    #[test]
    fn new_year_2025() {
        let ny = KhmerNewYear::for_solar_year(2025).unwrap();
        assert_eq!(362, ny.sotins[0].sotin);
        assert_eq!(SunPosition::new(11, 29, 49), ny.sotins[0].position);
        assert_eq!(3, ny.number_of_new_year_days);
        assert_eq!(NewYearTime { hour: 4, minute: 48 }, ny.time_of_new_year);
        assert_eq!(LerngSakDate { day: 18, month: Chetr }, ny.lunar_date_lerng_sak);
        assert_eq!(Weekday::Wed, ny.day_of_week_lerng_sak);
        assert!(ny.is_leap_day_year);
        assert!(ny.jesth_has_30_days);
    }

    #[test]
    fn lerng_sak_after_double_leap_year() {
        // Jolak Sakaraj 1377 was both leap-month and leap-day
        let ny = KhmerNewYear::for_solar_year(2016).unwrap();
        assert_eq!(9, ny.info.bodithey);
        assert_eq!(LerngSakDate { day: 9, month: Chetr }, ny.lunar_date_lerng_sak);
        assert!(ny.jesth_has_30_days);
        assert_eq!(NewYearTime { hour: 20, minute: 0 }, ny.time_of_new_year);
    }

    #[test]
    fn lerng_sak_in_pisak() {
        let ny = KhmerNewYear::for_solar_year(2029).unwrap();
        assert_eq!(LerngSakDate { day: 3, month: Pisak }, ny.lunar_date_lerng_sak);
        assert!(ny.is_leap_month_year);
        assert_eq!(NewYearTime { hour: 5, minute: 36 }, ny.time_of_new_year);
    }

    #[test]
    fn number_of_days() {
        for (std, year) in [
            (4, 1900),
            (3, 2021),
            (3, 2022),
            (3, 2023),
            (4, 2024),
            (3, 2025),
            (4, 2028),
        ] {
            assert_eq!(
                std,
                KhmerNewYear::for_solar_year(year)
                    .unwrap()
                    .number_of_new_year_days,
                "{year}"
            );
        }
    }

    #[test]
    fn moments() {
        for (std, year) in [
            ("1900-04-12 19:36:00", 1900),
            ("1901-04-13 02:48:00", 1901),
            ("1996-04-13 16:00:00", 1996),
            ("2010-04-14 07:36:00", 2010),
            ("2012-04-13 19:12:00", 2012),
            ("2016-04-13 20:00:00", 2016),
            ("2020-04-13 20:48:00", 2020),
            ("2021-04-14 04:00:00", 2021),
            ("2022-04-14 10:00:00", 2022),
            ("2023-04-14 16:00:00", 2023),
            ("2024-04-13 22:24:00", 2024),
            ("2025-04-14 04:48:00", 2025),
            ("2026-04-13 10:48:00", 2026),
            ("2030-04-14 11:36:00", 2030),
        ] {
            let moment = khmer_new_year(year).unwrap().new_year_moment;
            assert_eq!(std, moment.to_string(), "{year}");
        }
    }

    #[test]
    fn new_year_at_midnight() {
        // threshold libda 0: the new year starts at the end of its day
        for (std, year) in [("1974-04-14 00:00:00", 1974), ("2032-04-14 00:00:00", 2032)] {
            let ny = khmer_new_year(year).unwrap();
            assert_eq!(NewYearTime { hour: 24, minute: 0 }, ny.time_of_new_year, "{year}");
            assert_eq!(std, ny.new_year_moment.to_string(), "{year}");
        }
    }

    #[test]
    fn moment_time_added_after_counting_back() {
        let lerng_sak = LerngSakDate { day: 5, month: Chetr };
        let at = |hour, minute| {
            new_year_moment(2032, NewYearTime { hour, minute }, lerng_sak, 4)
                .unwrap()
                .to_string()
        };
        assert_eq!("2032-04-13 23:59:00", at(23, 59));
        assert_eq!("2032-04-14 00:00:00", at(24, 0));
    }

    #[test]
    fn threshold_missing() {
        let sotins: [NewYearDaySotin; 4] = std::array::from_fn(|i| NewYearDaySotin {
            sotin: 362 + i as i64,
            position: SunPosition::new(11, 29 - i as i64, 30),
        });
        assert_eq!(
            Err(ChhankitekError::NewYearThresholdNotFound { solar_year: 2024 }),
            threshold_sotin(&sotins, 2024)
        );
        let found = NewYearDaySotin {
            sotin: 366,
            position: SunPosition::new(12, 0, 10),
        };
        let with_threshold = [sotins[0], sotins[1], found];
        assert_eq!(Ok(&found), threshold_sotin(&with_threshold, 2024));
    }

    #[test]
    fn time_from_libda() {
        for (std, libda) in [((22, 24), 4), ((4, 0), 50), ((24, 0), 0), ((0, 24), 59)] {
            let time = NewYearTime::from_libda(libda);
            assert_eq!(std, (time.hour, time.minute), "{libda}");
        }
    }
}
