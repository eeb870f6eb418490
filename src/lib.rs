//! Conversion of Gregorian dates into the Khmer lunar calendar (ចន្ទគតិ), as
//! printed in the traditional almanac (ចន្ទគតិ/ឆន្ទគតិ, Chhankitek).
//!
//! Everything is computed from integer almanac arithmetic, counted from
//! 1900-01-01. Dates before that are rejected.
//!
//! # Examples
//!
//! Converting a date:
//!
//! ```
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2022, 5, 16).unwrap();
//! let lunar = chhankitek::convert_date(date).unwrap();
//!
//! assert_eq!("ថ្ងៃច័ន្ទ ១ រោច ខែពិសាខ ឆ្នាំខាល ចត្វាស័ក ពុទ្ធសករាជ ២៥៦៦", lunar.to_string());
//! ```
//!
//! Khmer New Year:
//!
//! ```
//! let new_year = chhankitek::khmer_new_year(2024).unwrap();
//!
//! assert_eq!("2024-04-13 22:24:00", new_year.new_year_moment.to_string());
//! assert_eq!(4, new_year.number_of_new_year_days);
//! ```
//!
//! The building blocks (yearly constants, leap rules, month walk) are public
//! under [`khmer`].

pub mod error;
pub mod khmer;

pub use error::ChhankitekError;
pub use khmer::{KhmerLunarDate, KhmerNewYear, convert, convert_date, khmer_new_year};
