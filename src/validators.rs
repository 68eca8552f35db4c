//! Scalar validators.
//!
//! Each validator takes one raw value and returns the normalized value or the
//! [`ConstraintError`] it violates. They are pure: the reference date for
//! "not in the future" checks is passed in.

use chrono::NaiveDate;
use email_address::{EmailAddress, Options};
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::OnceLock;
use url::Url;

use crate::error::ConstraintError;

/// Format used for calendar dates in input and output.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const DIMENSION_PATTERN: &str = r"^(?:\d+(?:\.\d*)?|\.\d+)(?:cm|mm|in|pt|pc|bp|dd|cc|sp|em|ex|px)$";

/// Longest phone number allowed by E.164, country code included.
const PHONE_MAX_DIGITS: usize = 15;
const PHONE_MIN_DIGITS: usize = 7;

fn dimension_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(DIMENSION_PATTERN).expect("dimension pattern is valid"))
}

/// Reject blank values for fields that must carry text.
pub fn required_text(raw: String) -> Result<String, ConstraintError> {
    if raw.trim().is_empty() {
        Err(ConstraintError::EmptyField)
    } else {
        Ok(raw)
    }
}

/// Parse an ISO calendar date (`YYYY-MM-DD`).
pub fn iso_date(raw: &str) -> Result<NaiveDate, ConstraintError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| ConstraintError::InvalidDate(raw.to_string()))
}

/// Parse an ISO date that must not be after `today`.
pub fn past_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, ConstraintError> {
    let date = iso_date(raw)?;
    if date > today {
        return Err(ConstraintError::FutureDate {
            date: date.format(DATE_FORMAT).to_string(),
            today: today.format(DATE_FORMAT).to_string(),
        });
    }
    Ok(date)
}

/// End of a date range: a past date or the literal `present`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndDate {
    Date(NaiveDate),
    Present,
}

impl EndDate {
    pub const PRESENT: &'static str = "present";

    /// The concrete date this end stands for, with `present` meaning `today`.
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            EndDate::Date(date) => *date,
            EndDate::Present => today,
        }
    }
}

impl fmt::Display for EndDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndDate::Date(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            EndDate::Present => write!(f, "{}", Self::PRESENT),
        }
    }
}

impl Serialize for EndDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub fn end_date(raw: &str, today: NaiveDate) -> Result<EndDate, ConstraintError> {
    if raw.trim() == EndDate::PRESENT {
        return Ok(EndDate::Present);
    }
    past_date(raw, today).map(EndDate::Date)
}

/// Parse an absolute `http`/`https` URL with a host.
pub fn http_url(raw: &str) -> Result<Url, ConstraintError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConstraintError::InvalidUrl {
        value: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(ConstraintError::UnsupportedUrlScheme(other.to_string())),
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(ConstraintError::InvalidUrl {
            value: raw.to_string(),
            reason: "missing host".to_string(),
        });
    }

    Ok(url)
}

/// Check address syntax; the domain part is lowercased.
///
/// Plain `local@domain.tld` addresses only: no display name, no domain literal.
pub fn email(raw: &str) -> Result<String, ConstraintError> {
    let options = Options::default()
        .with_required_tld()
        .without_display_text()
        .without_domain_literal();

    let address = EmailAddress::parse_with_options(raw.trim(), options)
        .map_err(|_| ConstraintError::InvalidEmail(raw.to_string()))?;

    Ok(format!(
        "{}@{}",
        address.local_part(),
        address.domain().to_lowercase()
    ))
}

/// A range must not end before it starts.
pub fn ordered_range(start: NaiveDate, end: NaiveDate) -> Result<(), ConstraintError> {
    if end < start {
        return Err(ConstraintError::EndBeforeStart {
            start: start.format(DATE_FORMAT).to_string(),
            end: end.format(DATE_FORMAT).to_string(),
        });
    }
    Ok(())
}
