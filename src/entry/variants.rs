//! The four entry shapes.

use serde::Serialize;
use url::Url;

use super::{Entry, EntryKind, Event};
use crate::context::Context;
use crate::raw::{RawInstitutionEntry, RawNamedEntry, RawPositionEntry, RawSingleLineEntry};
use crate::validators::{self, required_text};

/// `name: details` on a single line, e.g. a skill or a test score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SingleLineEntry {
    name: String,
    details: String,
    #[serde(flatten)]
    event: Event,
    highlight_strings: Vec<String>,
}

impl SingleLineEntry {
    pub(crate) fn from_raw(raw: RawSingleLineEntry, ctx: &mut Context) -> Option<Self> {
        let name = ctx.check("name", required_text(raw.name));
        let details = ctx.check("details", required_text(raw.details));
        let event = Event::from_raw(raw.event, ctx);

        Some(Self {
            name: name?,
            details: details?,
            highlight_strings: event.highlight_strings_with(Vec::new()),
            event,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn details(&self) -> &str {
        &self.details
    }
}

impl Entry for SingleLineEntry {
    fn kind(&self) -> EntryKind {
        EntryKind::SingleLine
    }

    fn event(&self) -> &Event {
        &self.event
    }

    fn highlight_strings(&self) -> &[String] {
        &self.highlight_strings
    }
}

/// An item with just a name, e.g. a project or a certificate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedEntry {
    name: String,
    #[serde(flatten)]
    event: Event,
    highlight_strings: Vec<String>,
}

impl NamedEntry {
    pub(crate) fn from_raw(raw: RawNamedEntry, ctx: &mut Context) -> Option<Self> {
        let name = ctx.check("name", required_text(raw.name));
        let event = Event::from_raw(raw.event, ctx);

        Some(Self {
            name: name?,
            highlight_strings: event.highlight_strings_with(Vec::new()),
            event,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entry for NamedEntry {
    fn kind(&self) -> EntryKind {
        EntryKind::Named
    }

    fn event(&self) -> &Event {
        &self.event
    }

    fn highlight_strings(&self) -> &[String] {
        &self.highlight_strings
    }
}

/// A position held at a company or organization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionEntry {
    company: String,
    position: String,
    #[serde(flatten)]
    event: Event,
    highlight_strings: Vec<String>,
}

impl PositionEntry {
    pub(crate) fn from_raw(raw: RawPositionEntry, ctx: &mut Context) -> Option<Self> {
        let company = ctx.check("company", required_text(raw.company));
        let position = ctx.check("position", required_text(raw.position));
        let event = Event::from_raw(raw.event, ctx);

        Some(Self {
            company: company?,
            position: position?,
            highlight_strings: event.highlight_strings_with(Vec::new()),
            event,
        })
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn position(&self) -> &str {
        &self.position
    }
}

impl Entry for PositionEntry {
    fn kind(&self) -> EntryKind {
        EntryKind::Position
    }

    fn event(&self) -> &Event {
        &self.event
    }

    fn highlight_strings(&self) -> &[String] {
        &self.highlight_strings
    }
}

/// A degree or program at an institution.
///
/// When `gpa` is set, its line (with a transcript link when one is given)
/// comes before the highlights.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstitutionEntry {
    institution: String,
    area: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    study_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gpa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transcript_url: Option<Url>,
    #[serde(flatten)]
    event: Event,
    highlight_strings: Vec<String>,
}

impl InstitutionEntry {
    pub(crate) fn from_raw(raw: RawInstitutionEntry, ctx: &mut Context) -> Option<Self> {
        let institution = ctx.check("institution", required_text(raw.institution));
        let area = ctx.check("area", required_text(raw.area));
        let transcript_url = ctx.check_optional("transcript_url", raw.transcript_url, |v| {
            validators::http_url(&v)
        });
        let event = Event::from_raw(raw.event, ctx);

        let prefix = gpa_line(raw.gpa.as_deref(), transcript_url.as_ref())
            .into_iter()
            .collect();

        Some(Self {
            institution: institution?,
            area: area?,
            study_type: raw.study_type,
            gpa: raw.gpa,
            transcript_url,
            highlight_strings: event.highlight_strings_with(prefix),
            event,
        })
    }

    pub fn institution(&self) -> &str {
        &self.institution
    }

    pub fn area(&self) -> &str {
        &self.area
    }

    pub fn study_type(&self) -> Option<&str> {
        self.study_type.as_deref()
    }

    pub fn gpa(&self) -> Option<&str> {
        self.gpa.as_deref()
    }

    pub fn transcript_url(&self) -> Option<&Url> {
        self.transcript_url.as_ref()
    }
}

impl Entry for InstitutionEntry {
    fn kind(&self) -> EntryKind {
        EntryKind::Institution
    }

    fn event(&self) -> &Event {
        &self.event
    }

    fn highlight_strings(&self) -> &[String] {
        &self.highlight_strings
    }
}

fn gpa_line(gpa: Option<&str>, transcript_url: Option<&Url>) -> Option<String> {
    let gpa = gpa?;
    Some(match transcript_url {
        Some(url) => format!("GPA: {} ([Transcript]({}))", gpa, url),
        None => format!("GPA: {}", gpa),
    })
}
