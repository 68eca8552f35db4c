//! The document root and the validation pipeline that produces it.

use serde::Serialize;
use std::path::Path;

use crate::context::{Context, ValidationOptions};
use crate::curriculum::Curriculum;
use crate::design::Design;
use crate::diagnostics::Warning;
use crate::error::DocumentError;
use crate::raw::RawDocument;
use crate::spelling::SpellCheck;

/// A validated CV: one design and one curriculum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    design: Design,
    cv: Curriculum,
}

impl Document {
    pub fn design(&self) -> &Design {
        &self.design
    }

    pub fn cv(&self) -> &Curriculum {
        &self.cv
    }
}

/// A validated value together with the warnings raised while building it.
#[derive(Debug, Clone)]
pub struct Validated<T> {
    pub document: T,
    pub warnings: Vec<Warning>,
}

impl<T> Validated<T> {
    pub fn into_inner(self) -> T {
        self.document
    }
}

/// Source format of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    #[default]
    Yaml,
    Json,
}

impl InputFormat {
    /// JSON for a `.json` extension, YAML otherwise.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Yaml,
        }
    }
}

/// Validates raw documents against a fixed reference date and optional spell checker.
#[derive(Debug, Default)]
pub struct Validator {
    options: ValidationOptions,
    spell: Option<SpellCheck>,
}

impl Validator {
    pub fn new(options: ValidationOptions) -> Self {
        Self {
            options,
            spell: None,
        }
    }

    pub fn with_spell_check(mut self, spell: SpellCheck) -> Self {
        self.spell = Some(spell);
        self
    }

    pub fn options(&self) -> ValidationOptions {
        self.options
    }

    pub fn validate(&self, text: &str, format: InputFormat) -> Result<Validated<Document>, DocumentError> {
        match format {
            InputFormat::Yaml => self.validate_str(text),
            InputFormat::Json => self.validate_json(text),
        }
    }

    /// Validate a YAML document.
    pub fn validate_str(&self, yaml: &str) -> Result<Validated<Document>, DocumentError> {
        let raw: RawDocument = serde_yaml::from_str(yaml)?;
        self.validate_raw(raw)
    }

    pub fn validate_json(&self, json: &str) -> Result<Validated<Document>, DocumentError> {
        let raw: RawDocument = serde_json::from_str(json)?;
        self.validate_raw(raw)
    }

    /// Validate an already parsed mapping.
    pub fn validate_value(&self, value: serde_yaml::Value) -> Result<Validated<Document>, DocumentError> {
        let raw: RawDocument = serde_yaml::from_value(value)?;
        self.validate_raw(raw)
    }

    /// Run every constraint over the raw document.
    ///
    /// All constraint violations are collected before failing. A document is
    /// only returned when there are none.
    pub fn validate_raw(&self, raw: RawDocument) -> Result<Validated<Document>, DocumentError> {
        let mut ctx = Context::new(self.options, self.spell.as_ref());

        let design = ctx.scoped("design", |ctx| Design::from_raw(raw.design, ctx))?;
        let cv = ctx.scoped("cv", |ctx| Curriculum::from_raw(raw.cv, ctx));

        let (errors, warnings) = ctx.finish();
        if let Some(errors) = errors {
            return Err(errors.into());
        }

        assemble(design, cv, warnings)
    }
}

/// Pair the validated halves; a missing half is reported rather than assumed away.
fn assemble(
    design: Option<Design>,
    cv: Option<Curriculum>,
    warnings: Vec<Warning>,
) -> Result<Validated<Document>, DocumentError> {
    match (design, cv) {
        (Some(design), Some(cv)) => Ok(Validated {
            document: Document { design, cv },
            warnings,
        }),
        (None, _) => Err(DocumentError::Structure(
            "design was rejected without a recorded violation".to_string(),
        )),
        (_, None) => Err(DocumentError::Structure(
            "cv was rejected without a recorded violation".to_string(),
        )),
    }
}
