//! CV entries.
//!
//! Every entry shares the [`Event`] fields (dates, location, highlights, URL)
//! and adds its own required fields on top. Renderers that need to branch on
//! the shape of an entry use [`EntryKind`].

use serde::Serialize;
use std::fmt;

mod event;
mod variants;

pub use event::{DateFields, Event};
pub use variants::{InstitutionEntry, NamedEntry, PositionEntry, SingleLineEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// `name: details` on one line (skills, test scores).
    SingleLine,
    /// A titled item (projects, certificates).
    Named,
    /// A position at a company (jobs, activities).
    Position,
    /// A degree at an institution.
    Institution,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::SingleLine => write!(f, "single_line"),
            EntryKind::Named => write!(f, "named"),
            EntryKind::Position => write!(f, "position"),
            EntryKind::Institution => write!(f, "institution"),
        }
    }
}

/// What every entry variant exposes to a renderer.
pub trait Entry {
    fn kind(&self) -> EntryKind;

    fn event(&self) -> &Event;

    /// Lines shown under the entry: the highlights, possibly with variant-specific lines first.
    fn highlight_strings(&self) -> &[String];

    fn date_and_location_strings(&self) -> &[String] {
        self.event().date_and_location_strings()
    }

    fn date_and_location_strings_without_time_span(&self) -> &[String] {
        self.event().date_and_location_strings_without_time_span()
    }

    fn markdown_url(&self) -> Option<&str> {
        self.event().markdown_url()
    }
}
