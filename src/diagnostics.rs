//! Collection of errors and warnings during a validation pass.
//!
//! Validation never stops at the first bad value: each field is checked, every
//! violation is recorded against its path, and the caller decides at the end
//! whether the pass failed. Warnings are returned to the caller, not printed.

use serde::Serialize;
use std::fmt;

use crate::error::{ConstraintError, ValidationError, ValidationErrors};

/// Which of the two date shapes lost during reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateConflict {
    /// `date`, `start_date` and `end_date` were all given; `date` was dropped.
    DateIgnored,
    /// `date` was given together with part of the range; the range was dropped.
    RangeIgnored,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WarningKind {
    DateConflict { resolution: DateConflict },
    Spelling { word: String },
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::DateConflict {
                resolution: DateConflict::DateIgnored,
            } => write!(
                f,
                "start_date, end_date and date are all provided. Therefore, date will be ignored."
            ),
            WarningKind::DateConflict {
                resolution: DateConflict::RangeIgnored,
            } => write!(
                f,
                "date is provided. Therefore, start_date and end_date will be ignored."
            ),
            WarningKind::Spelling { word } => {
                write!(f, "The word \"{}\" might be misspelled.", word)
            }
        }
    }
}

/// A non-fatal finding attached to the field it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub path: String,
    #[serde(flatten)]
    pub kind: WarningKind,
}

impl Warning {
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

/// Accumulates errors and warnings while tracking the current field path.
#[derive(Debug, Default)]
pub struct Diagnostics {
    segments: Vec<String>,
    errors: Vec<ValidationError>,
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Descend into the field `segment`.
    pub fn enter(&mut self, segment: &str) {
        self.segments.push(segment.to_string());
    }

    /// Descend into the list element `index`.
    pub fn enter_index(&mut self, index: usize) {
        self.segments.push(format!("[{}]", index));
    }

    /// Return to the enclosing scope.
    pub fn leave(&mut self) {
        self.segments.pop();
    }

    /// Dotted path of the current scope, e.g. `cv.education[0]`.
    pub fn path(&self) -> String {
        let mut path = String::new();
        for segment in &self.segments {
            if !path.is_empty() && !segment.starts_with('[') {
                path.push('.');
            }
            path.push_str(segment);
        }
        path
    }

    /// Path of `field` inside the current scope.
    pub fn path_to(&self, field: &str) -> String {
        let base = self.path();
        if base.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", base, field)
        }
    }

    /// Record the error of `result` against `field`, passing the value through on success.
    pub fn check<T>(&mut self, field: &str, result: Result<T, ConstraintError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.error(field, error);
                None
            }
        }
    }

    /// Validate an optional raw value; absence is not an error.
    pub fn check_optional<R, T>(
        &mut self,
        field: &str,
        raw: Option<R>,
        validate: impl FnOnce(R) -> Result<T, ConstraintError>,
    ) -> Option<T> {
        raw.and_then(|value| self.check(field, validate(value)))
    }

    pub fn error(&mut self, field: &str, error: ConstraintError) {
        let path = self.path_to(field);
        self.errors.push(ValidationError { path, error });
    }

    pub fn warn(&mut self, field: Option<&str>, kind: WarningKind) {
        let path = match field {
            Some(field) => self.path_to(field),
            None => self.path(),
        };
        self.warnings.push(Warning { path, kind });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Close the pass: the collected errors (if any) and every warning.
    pub fn finish(self) -> (Option<ValidationErrors>, Vec<Warning>) {
        (ValidationErrors::from_vec(self.errors), self.warnings)
    }
}
