//! # RenderCV - CV data model
//!
//! Validates a CV document (content plus a visual theme) and normalizes it
//! into a typed model ready for a rendering stage.
//!
//! ## Overview
//!
//! A document has two parts: `design` selects a theme and its visual
//! parameters, `cv` holds the content. Validation checks every field,
//! reports all violations at once, reconciles conflicting date fields with
//! a warning, and derives the display strings a template needs (date
//! ranges, time spans, link labels, highlight lists).
//!
//! ## Modules
//!
//! - [`document`] - The document root and the [`Validator`] pipeline
//! - [`curriculum`] - CV content, social accounts and derived connections
//! - [`entry`] - The entry variants and their shared event fields
//! - [`design`] - Themes and theme options
//! - [`validators`] - Scalar field rules (dates, URLs, emails, phones, lengths)
//! - [`spelling`] - Spell checking of highlights
//! - [`config`] - Tool configuration
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rendercv::{ValidationOptions, Validator};
//!
//! let validator = Validator::new(ValidationOptions::with_today(
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//! ));
//!
//! let validated = validator
//!     .validate_str("cv:\n  name: Jane Doe\n  email: jane@example.com\n")
//!     .expect("valid document");
//!
//! assert_eq!(validated.document.cv().name(), "Jane Doe");
//! assert_eq!(validated.document.cv().connections().len(), 1);
//! ```

pub mod color;
pub mod config;
pub mod context;
pub mod curriculum;
pub mod dates;
pub mod design;
pub mod diagnostics;
pub mod document;
pub mod entry;
pub mod error;
pub mod raw;
pub mod spelling;
pub mod validators;

pub use context::ValidationOptions;
pub use diagnostics::{Warning, WarningKind};
pub use document::{Document, InputFormat, Validated, Validator};
pub use error::{ConstraintError, DocumentError, ValidationError, ValidationErrors};
