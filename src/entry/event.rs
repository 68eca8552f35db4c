//! Fields shared by every entry: dates, location, highlights and URL.

use chrono::NaiveDate;
use serde::Serialize;
use url::Url;

use crate::context::Context;
use crate::dates::{compute_time_span, format_date};
use crate::diagnostics::{DateConflict, WarningKind};
use crate::raw::RawEvent;
use crate::validators::{self, serialize_date, EndDate};

/// The two ways an entry can be dated: a free-form `date`, or a start/end range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateFields {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<EndDate>,
    pub date: Option<String>,
}

impl DateFields {
    /// Settle on one date shape when both were given.
    ///
    /// A complete range wins over `date`; a partial range loses to it.
    pub fn reconcile(self) -> (Self, Option<DateConflict>) {
        let has_start = self.start_date.is_some();
        let has_end = self.end_date.is_some();

        match self.date {
            Some(_) if has_start && has_end => (
                Self { date: None, ..self },
                Some(DateConflict::DateIgnored),
            ),
            Some(date) if has_start || has_end => (
                Self {
                    start_date: None,
                    end_date: None,
                    date: Some(date),
                },
                Some(DateConflict::RangeIgnored),
            ),
            _ => (self, None),
        }
    }
}

/// Base of every entry variant. Display fields are derived once, at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    #[serde(
        serialize_with = "serialize_date",
        skip_serializing_if = "Option::is_none"
    )]
    start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_date: Option<EndDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    highlights: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<Url>,

    date_and_location_strings: Vec<String>,
    date_and_location_strings_without_time_span: Vec<String>,
    markdown_url: Option<String>,
}

impl Event {
    pub(crate) fn from_raw(raw: RawEvent, ctx: &mut Context) -> Self {
        let today = ctx.today();

        let start_date = ctx.check_optional("start_date", raw.start_date, |v| {
            validators::past_date(&v, today)
        });
        let end_date =
            ctx.check_optional("end_date", raw.end_date, |v| validators::end_date(&v, today));
        let url = ctx.check_optional("url", raw.url, |v| validators::http_url(&v));

        let highlights = raw.highlights.unwrap_or_default();
        for (i, highlight) in highlights.iter().enumerate() {
            ctx.spell_check(&format!("highlights[{}]", i), highlight);
        }

        let (dates, conflict) = DateFields {
            start_date,
            end_date,
            date: raw.date,
        }
        .reconcile();
        if let Some(resolution) = conflict {
            ctx.warn(None, WarningKind::DateConflict { resolution });
        }

        if let (Some(start), Some(EndDate::Date(end))) = (dates.start_date, dates.end_date) {
            ctx.check("end_date", validators::ordered_range(start, end));
        }

        Self::new(dates, raw.location, highlights, url, today)
    }

    /// Build an event from already-valid parts.
    ///
    /// Conflicting date fields are reconciled the same way validation does;
    /// the conflict itself is not reported here.
    pub fn new(
        dates: DateFields,
        location: Option<String>,
        highlights: Vec<String>,
        url: Option<Url>,
        today: NaiveDate,
    ) -> Self {
        let (dates, _) = dates.reconcile();
        let date_and_location_strings = date_and_location_strings(&dates, location.as_deref(), today);
        let date_and_location_strings_without_time_span =
            without_time_span(&date_and_location_strings);
        let markdown_url = url.as_ref().map(markdown_url);

        Self {
            start_date: dates.start_date,
            end_date: dates.end_date,
            date: dates.date,
            location,
            highlights,
            url,
            date_and_location_strings,
            date_and_location_strings_without_time_span,
            markdown_url,
        }
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<EndDate> {
        self.end_date
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn highlights(&self) -> &[String] {
        &self.highlights
    }

    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// Location first, then the date line, then the time span when there is a range.
    pub fn date_and_location_strings(&self) -> &[String] {
        &self.date_and_location_strings
    }

    pub fn date_and_location_strings_without_time_span(&self) -> &[String] {
        &self.date_and_location_strings_without_time_span
    }

    /// `[view on GitHub](https://github.com/...)` and friends.
    pub fn markdown_url(&self) -> Option<&str> {
        self.markdown_url.as_deref()
    }

    /// Highlight lines with `prefix` lines in front.
    pub(crate) fn highlight_strings_with(&self, prefix: Vec<String>) -> Vec<String> {
        let mut strings = prefix;
        strings.extend(self.highlights.iter().cloned());
        strings
    }
}

fn date_and_location_strings(
    dates: &DateFields,
    location: Option<&str>,
    today: NaiveDate,
) -> Vec<String> {
    let mut strings = Vec::new();

    if let Some(location) = location {
        strings.push(location.to_string());
    }

    if let Some(date) = &dates.date {
        let formatted = validators::iso_date(date)
            .map(format_date)
            .unwrap_or_else(|_| date.clone());
        strings.push(formatted);
        return strings;
    }

    match (dates.start_date, dates.end_date) {
        (Some(start), Some(end)) => {
            let end_text = match end {
                EndDate::Present => EndDate::PRESENT.to_string(),
                EndDate::Date(date) => format_date(date),
            };
            strings.push(format!("{} to {}", format_date(start), end_text));
            strings.push(compute_time_span(start, end.resolve(today)));
        }
        (Some(start), None) => strings.push(format_date(start)),
        (None, Some(EndDate::Date(end))) => strings.push(format_date(end)),
        (None, Some(EndDate::Present)) => strings.push(EndDate::PRESENT.to_string()),
        (None, None) => {}
    }

    strings
}

fn without_time_span(strings: &[String]) -> Vec<String> {
    strings
        .iter()
        .filter(|s| !s.contains("year") && !s.contains("month"))
        .cloned()
        .collect()
}

fn markdown_url(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default().to_lowercase();

    let label = if host.contains("github") {
        "view on GitHub"
    } else if host.contains("linkedin") {
        "view on LinkedIn"
    } else if host.contains("instagram") {
        "view on Instagram"
    } else if host.contains("youtube") {
        "view on YouTube"
    } else {
        "view on my website"
    };

    format!("[{}]({})", label, url)
}
