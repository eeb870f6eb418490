//! Per-year astronomical constants: Aharkun (អាហារគុណ), Kromthupul
//! (ក្រមធុបុល), Avoman (អវមាន) and Bodithey (បូតិថី).
//!
//! Every quantity is an exact integer function of a single year number. All
//! divisions floor, so the functions stay well defined for any `i32` input,
//! though only years after the 1900 epoch are meaningful.

/// Aharkun of a Buddhist-Era year, the day-count based seed of [`avoman`] and
/// [`bodithey`].
///
/// # Example
///
/// ```
/// use chhankitek::khmer::astro;
///
/// assert_eq!(937989, astro::aharkun(2568));
/// ```
pub fn aharkun(be_year: i32) -> i64 {
    (i64::from(be_year) * 292207 + 499).div_euclid(800) + 4
}

/// Remainder left by the division in [`aharkun`], `0..800`.
pub fn aharkun_mod(be_year: i32) -> i64 {
    (i64::from(be_year) * 292207 + 499).rem_euclid(800)
}

/// Kromthupul, `1..=800`.
pub fn kromthupul(be_year: i32) -> u32 {
    (800 - aharkun_mod(be_year)) as u32
}

/// Whether the Khmer solar year is a leap one (366 days).
pub fn is_solar_leap(be_year: i32) -> bool {
    kromthupul(be_year) <= 207
}

/// Avoman, `0..=691`. Decides leap-day years.
pub fn avoman(be_year: i32) -> u32 {
    (11 * aharkun(be_year) + 25).rem_euclid(692) as u32
}

/// Bodithey, `0..=29`. Decides leap-month years.
///
/// # Example
///
/// ```
/// use chhankitek::khmer::astro;
///
/// assert_eq!(8, astro::bodithey(2568));
/// ```
pub fn bodithey(be_year: i32) -> u32 {
    let ahk = aharkun(be_year);
    ((11 * ahk + 25).div_euclid(692) + ahk + 29).rem_euclid(30) as u32
}

/// The four constants of one year, computed together.
///
/// The same quantities exist counted from two eras: the Buddhist Era, which
/// drives the lunar month lengths, and the Jolak Sakaraj (ចុល្លសករាជ), which
/// the new year computation is written in. The two seeds differ, but
/// `kromathopol`, `avaman` and `bodithey` agree for `be == js + 1182`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct YearAstroInfo {
    /// Harkun (ហារគុណ)
    pub harkun: i64,
    /// `1..=800`
    pub kromathopol: u32,
    /// `0..=691`
    pub avaman: u32,
    /// `0..=29`
    pub bodithey: u32,
}

impl YearAstroInfo {
    /// Constants of a Buddhist-Era year.
    pub fn for_buddhist_era(be_year: i32) -> Self {
        Self {
            harkun: aharkun(be_year),
            kromathopol: kromthupul(be_year),
            avaman: avoman(be_year),
            bodithey: bodithey(be_year),
        }
    }

    /// Constants of a Jolak Sakaraj year, as used by the new year
    /// computation.
    ///
    /// # Example
    ///
    /// ```
    /// use chhankitek::khmer::astro::YearAstroInfo;
    ///
    /// let info = YearAstroInfo::for_jolak_sakaraj(1386);
    /// assert_eq!((506250, 725, 184, 8), (info.harkun, info.kromathopol, info.avaman, info.bodithey));
    /// ```
    pub fn for_jolak_sakaraj(js_year: i32) -> Self {
        let h = 292207 * i64::from(js_year) + 373;
        let harkun = h.div_euclid(800) + 1;
        let a = 11 * harkun + 650;
        Self {
            harkun,
            kromathopol: (800 - h.rem_euclid(800)) as u32,
            avaman: a.rem_euclid(692) as u32,
            bodithey: (harkun + a.div_euclid(692)).rem_euclid(30) as u32,
        }
    }

    /// Whether the solar year has 366 days.
    pub fn has_366_days(&self) -> bool {
        self.kromathopol <= 207
    }
}
