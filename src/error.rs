//! Error types for document validation.
//!
//! Constraint violations are collected during a validation pass and reported
//! together; structural problems (missing required fields, wrong shapes) stop
//! the pass immediately.

use std::fmt;

/// A value that is present but breaks a semantic rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    InvalidDate(String),
    FutureDate { date: String, today: String },
    EndBeforeStart { start: String, end: String },
    InvalidUrl { value: String, reason: String },
    UnsupportedUrlScheme(String),
    InvalidEmail(String),
    InvalidPhone(String),
    InvalidColor(String),
    InvalidDimension(String),
    UnknownTheme(String),
    UnknownNetwork(String),
    EmptyField,
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintError::InvalidDate(value) => {
                write!(f, "'{}' is not a valid date (expected YYYY-MM-DD)", value)
            }
            ConstraintError::FutureDate { date, today } => {
                write!(f, "{} is in the future (today is {})", date, today)
            }
            ConstraintError::EndBeforeStart { start, end } => {
                write!(f, "end date {} is before start date {}", end, start)
            }
            ConstraintError::InvalidUrl { value, reason } => {
                write!(f, "'{}' is not a valid URL: {}", value, reason)
            }
            ConstraintError::UnsupportedUrlScheme(scheme) => {
                write!(f, "URL scheme '{}' is not supported (use http or https)", scheme)
            }
            ConstraintError::InvalidEmail(value) => {
                write!(f, "'{}' is not a valid email address", value)
            }
            ConstraintError::InvalidPhone(value) => write!(
                f,
                "'{}' is not a valid international phone number (expected +<country code><number>)",
                value
            ),
            ConstraintError::InvalidColor(value) => write!(
                f,
                "'{}' is not a valid color (expected a color name, #hex or rgb())",
                value
            ),
            ConstraintError::InvalidDimension(value) => write!(
                f,
                "'{}' is not a valid length (expected a number followed by a unit, e.g. 1.35cm)",
                value
            ),
            ConstraintError::UnknownTheme(value) => {
                write!(f, "unknown theme '{}' (available: classic)", value)
            }
            ConstraintError::UnknownNetwork(value) => write!(
                f,
                "unknown social network '{}' (available: LinkedIn, GitHub, Instagram)",
                value
            ),
            ConstraintError::EmptyField => write!(f, "must not be empty"),
        }
    }
}

impl std::error::Error for ConstraintError {}

/// A constraint violation located at a field path such as `cv.education[0].start_date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub path: String,
    pub error: ConstraintError,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.error)
    }
}

impl std::error::Error for ValidationError {}

/// Every constraint violation found in one validation pass. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Wrap the collected errors, or `None` when nothing was collected.
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Whether any violation was recorded for exactly this path.
    pub fn has_path(&self, path: &str) -> bool {
        self.0.iter().any(|e| e.path == path)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.0.len() == 1 { "error" } else { "errors" };
        write!(f, "{} validation {}", self.0.len(), noun)?;
        for error in &self.0 {
            write!(f, "\n  - {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Why a document could not be built.
#[derive(Debug)]
pub enum DocumentError {
    /// The input does not have the expected shape (missing required field, wrong type).
    Structure(String),
    /// The input has the right shape but some values break their constraints.
    Invalid(ValidationErrors),
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::Structure(msg) => write!(f, "Invalid document structure: {}", msg),
            DocumentError::Invalid(errors) => write!(f, "{}", errors),
        }
    }
}

impl std::error::Error for DocumentError {}

impl From<ValidationErrors> for DocumentError {
    fn from(errors: ValidationErrors) -> Self {
        DocumentError::Invalid(errors)
    }
}

impl From<serde_yaml::Error> for DocumentError {
    fn from(err: serde_yaml::Error) -> Self {
        DocumentError::Structure(err.to_string())
    }
}

impl From<serde_json::Error> for DocumentError {
    fn from(err: serde_json::Error) -> Self {
        DocumentError::Structure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_empty_is_none() {
        assert!(ValidationErrors::from_vec(vec![]).is_none());
    }

    #[test]
    fn test_display_lists_every_error() {
        let errors = ValidationErrors::from_vec(vec![
            ValidationError {
                path: "cv.email".to_string(),
                error: ConstraintError::InvalidEmail("nope".to_string()),
            },
            ValidationError {
                path: "design.theme".to_string(),
                error: ConstraintError::UnknownTheme("modern".to_string()),
            },
        ])
        .unwrap();

        let text = errors.to_string();
        assert!(text.starts_with("2 validation errors"));
        assert!(text.contains("cv.email: 'nope' is not a valid email address"));
        assert!(text.contains("design.theme: unknown theme 'modern'"));
        assert!(errors.has_path("cv.email"));
        assert!(!errors.has_path("cv.phone"));
    }

    #[test]
    fn test_single_error_uses_singular() {
        let errors = ValidationErrors::from_vec(vec![ValidationError {
            path: "cv.name".to_string(),
            error: ConstraintError::EmptyField,
        }])
        .unwrap();
        assert!(errors.to_string().starts_with("1 validation error\n"));
    }
}
