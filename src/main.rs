//! CLI entry point and command handlers for rendercv.

mod cli;
mod output;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::fs;
use std::io;
use std::path::Path;

use cli::{Cli, Commands, InputArgs, OutputFormat};
use output::Reporter;
use rendercv::config::Config;
use rendercv::{Document, DocumentError, InputFormat, Validated, ValidationOptions, Validator};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let reporter = Reporter::new(cli.quiet);

    match cli.command {
        Commands::Validate {
            file,
            format,
            input,
        } => cmd_validate(&file, format, &input, &reporter),
        Commands::Check { file, input } => cmd_check(&file, &input, &reporter),
        Commands::Completions { shell } => cmd_completion(shell),
    }
}

/// Validate and print the document with its derived fields
fn cmd_validate(
    path: &Path,
    format: OutputFormat,
    input: &InputArgs,
    reporter: &Reporter,
) -> Result<()> {
    let validated = validate_file(path, input, reporter)?;

    let rendered = match format {
        OutputFormat::Yaml => serde_yaml::to_string(&validated.document)
            .context("Failed to serialize document as YAML")?,
        OutputFormat::Json => serde_json::to_string_pretty(&validated.document)
            .context("Failed to serialize document as JSON")?,
    };
    println!("{}", rendered.trim_end());
    Ok(())
}

/// Validate and print a one-line summary
fn cmd_check(path: &Path, input: &InputArgs, reporter: &Reporter) -> Result<()> {
    let validated = validate_file(path, input, reporter)?;

    reporter.success(&format!(
        "{}: valid, {} warning(s)",
        validated.document.cv().name(),
        validated.warnings.len()
    ));
    Ok(())
}

/// Generate shell completion script
fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "rendercv", &mut io::stdout());
    Ok(())
}

/// Read and validate `path`, printing its warnings.
///
/// Exits with status 1 after listing the violations of an invalid document.
fn validate_file(path: &Path, input: &InputArgs, reporter: &Reporter) -> Result<Validated<Document>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let validator = build_validator(input)?;

    match validator.validate(&content, InputFormat::from_path(path)) {
        Ok(validated) => {
            reporter.warnings(&validated.warnings);
            Ok(validated)
        }
        Err(DocumentError::Invalid(errors)) => {
            reporter.violations(path, &errors);
            std::process::exit(1);
        }
        Err(e) => Err(e).with_context(|| format!("Failed to validate {}", path.display())),
    }
}

/// Configure a validator from the config file and command-line overrides.
fn build_validator(input: &InputArgs) -> Result<Validator> {
    let config = match &input.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut spelling = config.spelling;
    if input.no_spell_check {
        spelling.enabled = false;
    }
    if let Some(dictionary) = &input.dictionary {
        spelling.dictionary = Some(dictionary.to_string_lossy().to_string());
    }

    let options = input
        .today
        .map(ValidationOptions::with_today)
        .unwrap_or_default();

    let validator = Validator::new(options);
    Ok(match spelling.spell_check()? {
        Some(spell) => validator.with_spell_check(spell),
        None => validator,
    })
}
