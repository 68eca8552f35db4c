//! State threaded through one validation pass.

use chrono::{Local, NaiveDate};

use crate::diagnostics::{Diagnostics, Warning, WarningKind};
use crate::error::{ConstraintError, ValidationErrors};
use crate::spelling::SpellCheck;

/// Inputs that make a validation pass reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Reference date for "not in the future" checks and for `present` spans.
    pub today: NaiveDate,
}

impl ValidationOptions {
    pub fn with_today(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            today: Local::now().date_naive(),
        }
    }
}

/// Reference date, optional spell checker, and the diagnostics collected so far.
pub struct Context<'a> {
    today: NaiveDate,
    spell: Option<&'a SpellCheck>,
    diag: Diagnostics,
}

impl<'a> Context<'a> {
    pub fn new(options: ValidationOptions, spell: Option<&'a SpellCheck>) -> Self {
        Self {
            today: options.today,
            spell,
            diag: Diagnostics::new(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Run `f` with `segment` appended to the current field path.
    pub fn scoped<T>(&mut self, segment: &str, f: impl FnOnce(&mut Self) -> T) -> T {
        self.diag.enter(segment);
        let result = f(self);
        self.diag.leave();
        result
    }

    /// Run `f` inside list element `index` of the current field path.
    pub fn indexed<T>(&mut self, index: usize, f: impl FnOnce(&mut Self) -> T) -> T {
        self.diag.enter_index(index);
        let result = f(self);
        self.diag.leave();
        result
    }

    /// Validate every element of a list, each inside its own indexed scope.
    ///
    /// Elements that fail validation are dropped; their errors stay recorded.
    pub fn each<R, T>(
        &mut self,
        field: &str,
        items: Vec<R>,
        mut validate: impl FnMut(R, &mut Self) -> Option<T>,
    ) -> Vec<T> {
        self.scoped(field, |ctx| {
            items
                .into_iter()
                .enumerate()
                .filter_map(|(i, item)| ctx.indexed(i, |ctx| validate(item, ctx)))
                .collect()
        })
    }

    pub fn check<T>(&mut self, field: &str, result: Result<T, ConstraintError>) -> Option<T> {
        self.diag.check(field, result)
    }

    pub fn check_optional<R, T>(
        &mut self,
        field: &str,
        raw: Option<R>,
        validate: impl FnOnce(R) -> Result<T, ConstraintError>,
    ) -> Option<T> {
        self.diag.check_optional(field, raw, validate)
    }

    pub fn warn(&mut self, field: Option<&str>, kind: WarningKind) {
        self.diag.warn(field, kind);
    }

    /// Report the misspelled words of `text` as warnings on `field`. Never fails.
    pub fn spell_check(&mut self, field: &str, text: &str) {
        let Some(spell) = self.spell else {
            return;
        };
        for word in spell.misspelled(text) {
            self.diag.warn(Some(field), WarningKind::Spelling { word });
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diag.has_errors()
    }

    pub fn finish(self) -> (Option<ValidationErrors>, Vec<Warning>) {
        self.diag.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::WordList;

    fn options() -> ValidationOptions {
        ValidationOptions::with_today(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    #[test]
    fn test_each_indexes_errors() {
        let mut ctx = Context::new(options(), None);
        let valid = ctx.scoped("cv", |ctx| {
            ctx.each("phones", vec!["+15550109999", "nope", "+442079460958"], |raw, ctx| {
                ctx.check("value", crate::validators::PhoneNumber::parse(raw))
            })
        });
        assert_eq!(valid.len(), 2);

        let (errors, _) = ctx.finish();
        let errors = errors.unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors.has_path("cv.phones[1].value"));
    }

    #[test]
    fn test_spell_check_without_checker_is_silent() {
        let mut ctx = Context::new(options(), None);
        ctx.spell_check("highlights[0]", "Complete gibberish: xqzt wrrrd");
        let (errors, warnings) = ctx.finish();
        assert!(errors.is_none());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_spell_check_warns_per_word() {
        let spell = SpellCheck::new(Box::new(WordList::new(["led", "a", "team"])));
        let mut ctx = Context::new(options(), Some(&spell));
        ctx.scoped("cv", |ctx| ctx.spell_check("highlights[0]", "Led a teem of fuor"));

        let (errors, warnings) = ctx.finish();
        assert!(errors.is_none());
        let words: Vec<String> = warnings
            .iter()
            .map(|w| {
                assert_eq!(w.path, "cv.highlights[0]");
                match &w.kind {
                    WarningKind::Spelling { word } => word.clone(),
                    other => panic!("unexpected warning {:?}", other),
                }
            })
            .collect();
        assert_eq!(words, vec!["fuor".to_string(), "of".to_string(), "teem".to_string()]);
    }
}
