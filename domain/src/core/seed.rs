//! Daily seed value object
//!
//! The fortune service must return the same picks for the same day (and the
//! same user), so the seed is derived from the date string with a stable
//! rolling hash rather than from a random source.

use chrono::{Datelike, NaiveDate};

/// Deterministic seed for one day's fortune (Value Object)
///
/// Wraps the unpadded `YYYY-M-D` date string and its hash. An optional user
/// identity can be mixed in so different users get different picks on the
/// same day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSeed {
    date_string: String,
    value: i32,
}

impl DateSeed {
    /// Seed for a date alone
    pub fn for_date(date: NaiveDate) -> Self {
        let date_string = format_date(date);
        let value = rolling_hash(&date_string);
        Self { date_string, value }
    }

    /// Seed for a date combined with a caller identity
    pub fn for_date_and_identity(date: NaiveDate, identity: &str) -> Self {
        let date_string = format_date(date);
        let value = rolling_hash(&format!("{}-{}", date_string, identity));
        Self { date_string, value }
    }

    /// The unpadded date string, e.g. `2026-8-6`
    pub fn date_string(&self) -> &str {
        &self.date_string
    }

    /// The hash value
    pub fn value(&self) -> i32 {
        self.value
    }
}

/// Unpadded date string: month and day carry no leading zero
fn format_date(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

/// 31-multiplier rolling hash over UTF-16 code units, wrapping at i32.
///
/// Equivalent to `h = h * 31 + unit` for each unit.
fn rolling_hash(s: &str) -> i32 {
    s.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(unit as i32)
    })
}
