//! Terminal output for the rendercv binary.
//!
//! Warnings and violations go to stderr so stdout stays machine readable.
//! Color is used only on a terminal and never when `NO_COLOR` is set.

use colored::Colorize;
use std::path::Path;

use rendercv::{ValidationErrors, Warning};

pub struct Reporter {
    quiet: bool,
    color_stderr: bool,
    color_stdout: bool,
}

impl Reporter {
    pub fn new(quiet: bool) -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some();
        Self {
            quiet,
            color_stderr: !no_color && atty::is(atty::Stream::Stderr),
            color_stdout: !no_color && atty::is(atty::Stream::Stdout),
        }
    }

    pub fn warnings(&self, warnings: &[Warning]) {
        if self.quiet {
            return;
        }
        let prefix = if self.color_stderr {
            "Warning:".yellow().to_string()
        } else {
            "Warning:".to_string()
        };
        for warning in warnings {
            eprintln!("{} {}", prefix, warning);
        }
    }

    /// Print every violation of a failed document.
    pub fn violations(&self, path: &Path, errors: &ValidationErrors) {
        let prefix = if self.color_stderr {
            "Error:".red().to_string()
        } else {
            "Error:".to_string()
        };
        eprintln!(
            "{} {} has {} validation error(s)",
            prefix,
            path.display(),
            errors.len()
        );
        for error in errors.iter() {
            eprintln!("  - {}", error);
        }
    }

    pub fn success(&self, msg: &str) {
        let prefix = if self.color_stdout {
            "✓".green().to_string()
        } else {
            "✓".to_string()
        };
        println!("{} {}", prefix, msg);
    }
}
