//! Theme selection and the theme-specific visual parameters.

mod classic;
mod defaults;

pub use classic::ClassicThemeOptions;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::context::Context;
use crate::error::{ConstraintError, DocumentError};
use crate::raw::{RawClassicThemeOptions, RawDesign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Classic,
}

impl Theme {
    pub const ALL: &'static [Theme] = &[Theme::Classic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Classic => "classic",
        }
    }
}

impl FromStr for Theme {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .iter()
            .copied()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| ConstraintError::UnknownTheme(s.to_string()))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options record matching a [`Theme`]; one variant per theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ThemeOptions {
    Classic(ClassicThemeOptions),
}

impl ThemeOptions {
    /// Defaults of the given theme.
    pub fn defaults(theme: Theme) -> Self {
        match theme {
            Theme::Classic => ThemeOptions::Classic(ClassicThemeOptions::default()),
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeOptions::Classic(_) => Theme::Classic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Design {
    theme: Theme,
    options: ThemeOptions,
}

impl Default for Design {
    fn default() -> Self {
        Self::new(ThemeOptions::defaults(Theme::default()))
    }
}

impl Design {
    /// The theme always matches the options variant.
    pub fn new(options: ThemeOptions) -> Self {
        Self {
            theme: options.theme(),
            options,
        }
    }

    /// Validate `design` from its raw shape.
    ///
    /// The options are only shaped once the theme is known, so a malformed
    /// options mapping surfaces here as a structural error. An unknown theme
    /// is recorded and its options are not looked at.
    pub(crate) fn from_raw(raw: RawDesign, ctx: &mut Context) -> Result<Option<Self>, DocumentError> {
        let theme = match raw.theme {
            Some(value) => match ctx.check("theme", value.parse::<Theme>()) {
                Some(theme) => theme,
                None => return Ok(None),
            },
            None => Theme::default(),
        };

        // `options: ~` means "use the defaults"
        let options = raw.options.filter(|value| !value.is_null());

        let options = match theme {
            Theme::Classic => {
                let raw = match options {
                    Some(value) => serde_yaml::from_value::<RawClassicThemeOptions>(value)
                        .map_err(|e| DocumentError::Structure(format!("design.options: {}", e)))?,
                    None => RawClassicThemeOptions::default(),
                };
                ThemeOptions::Classic(ctx.scoped("options", |ctx| {
                    ClassicThemeOptions::from_raw(raw, ctx)
                }))
            }
        };

        Ok(Some(Self { theme, options }))
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn options(&self) -> &ThemeOptions {
        &self.options
    }

    /// Classic options, if that is the selected theme.
    pub fn classic(&self) -> Option<&ClassicThemeOptions> {
        match &self.options {
            ThemeOptions::Classic(options) => Some(options),
        }
    }
}
