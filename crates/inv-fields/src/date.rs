//! Calendar dates as extracted from documents.
//!
//! Extraction delivers dates in whatever notation the document used. The
//! canonical form is the ISO 8601 extended calendar date `YYYY-MM-DD`;
//! date-time values keep only their date part.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Canonical, FieldError};

const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// Delimited notations accepted besides the canonical one, tried in order.
const ACCEPTED_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%d.%m.%Y"];

/// A date field holding its raw or canonical text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(String);

impl Date {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date.format(CANONICAL_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Calendar value of this date, if it parses in any accepted notation.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        parse_date(&self.0).ok()
    }
}

/// Parse a date in any accepted notation.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, `YYYY.MM.DD`, `DD.MM.YYYY`, the basic
/// format `YYYYMMDD`, and ISO 8601 date-times (`YYYY-MM-DDThh:mm...`).
pub fn parse_date(raw: &str) -> Result<NaiveDate, FieldError> {
    let trimmed = raw.trim();
    let invalid = || FieldError::Date {
        value: raw.to_string(),
    };
    if trimmed.is_empty() {
        return Err(invalid());
    }

    // Date-time: keep the date part only
    let date_part = match trimmed.as_bytes().get(10) {
        Some(b'T' | b' ') if trimmed.len() > 10 => &trimmed[..10],
        _ => trimmed,
    };

    if date_part.len() == 8 && date_part.bytes().all(|b| b.is_ascii_digit()) {
        return parse_basic(date_part).ok_or_else(invalid);
    }

    ACCEPTED_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date_part, format).ok())
        .ok_or_else(invalid)
}

/// `YYYYMMDD` split by position; chrono's `%Y` would consume all eight digits.
fn parse_basic(digits: &str) -> Option<NaiveDate> {
    let year = digits[0..4].parse().ok()?;
    let month = digits[4..6].parse().ok()?;
    let day = digits[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

impl Canonical for Date {
    fn normalized(&self) -> Result<Self, FieldError> {
        parse_date(&self.0).map(Self::from_naive)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Date {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Date {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<NaiveDate> for Date {
    fn from(value: NaiveDate) -> Self {
        Self::from_naive(value)
    }
}
