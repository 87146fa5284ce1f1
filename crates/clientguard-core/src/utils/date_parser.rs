//! Date parsing policy for the birth date column.
//!
//! A value is a date if, once trimmed, it matches one of the configured
//! chrono formats either as a plain date or as a date-time, or if it is a
//! valid RFC 3339 timestamp. There is no locale detection: ambiguous
//! day/month orders are decided solely by the chosen format list.
//!
//! The default [`DateParser::iso`] policy is year-first, so `25-03-1998`
//! is rejected. [`DateParser::day_first`] opts into `dd-mm-yyyy` style
//! values.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const ISO_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

const DAY_FIRST_FORMATS: [&str; 3] = ["%d-%m-%Y", "%d/%m/%Y", "%d.%m.%Y"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParser {
    formats: Vec<String>,
}

impl Default for DateParser {
    fn default() -> Self {
        Self::iso()
    }
}

impl DateParser {
    /// Year-first formats only
    pub fn iso() -> Self {
        Self::with_formats(ISO_FORMATS)
    }

    /// ISO formats followed by day-first ones (`25-03-1998`, `25/03/1998`, `25.03.1998`)
    pub fn day_first() -> Self {
        Self::with_formats(ISO_FORMATS.into_iter().chain(DAY_FIRST_FORMATS))
    }

    pub fn with_formats<I, S>(formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            formats: formats.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a cell into a calendar date, `None` when it cannot be read as one.
    pub fn parse(&self, value: &str) -> Option<NaiveDate> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        for format in &self.formats {
            if let Ok(date) = NaiveDate::parse_from_str(value, format) {
                return Some(date);
            }
            if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
                return Some(datetime.date());
            }
        }

        DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|datetime| datetime.date_naive())
    }

    pub fn is_date(&self, value: &str) -> bool {
        self.parse(value).is_some()
    }
}
