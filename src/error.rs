//! Error kinds raised by the calendar engine.

use chrono::NaiveDate;

/// Error type for all fallible operations in this crate.
///
/// None of these are expected for dates in the supported range: they mark an
/// input far outside the historical range the almanac arithmetic was built
/// for, or a broken invariant of that arithmetic. Retrying cannot help, since
/// every computation is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChhankitekError {
    /// No sotin candidate reached angsar 0, so the new year threshold day
    /// could not be located.
    #[error("no sotin with angsar 0 for the new year of {solar_year}")]
    NewYearThresholdNotFound {
        /// Gregorian year whose new year was requested.
        solar_year: i32,
    },

    /// The day scan did not meet the full moon of Pisak within 365 days.
    #[error("cannot find Visakha Bochea day in {year}")]
    VisakhaBocheaNotFound {
        /// Gregorian year that was scanned.
        year: i32,
    },

    /// A raw month index does not name any of the 14 lunar months.
    #[error("invalid lunar month index: {index} (must be 0..=13)")]
    UnmappedMonthSuccessor {
        /// The offending index.
        index: u8,
    },

    /// The date precedes the 1900-01-01 epoch of the lunar walk.
    #[error("date {date} is before the 1900-01-01 epoch")]
    BeforeEpoch {
        /// The rejected date.
        date: NaiveDate,
    },

    /// A derived date cannot be represented.
    #[error("date out of supported range in year {year}")]
    DateOutOfRange {
        /// Gregorian year being computed.
        year: i32,
    },
}
