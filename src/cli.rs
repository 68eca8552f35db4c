//! CLI argument definitions for rendercv.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rendercv")]
#[command(version)]
#[command(about = "Validate and normalize CV documents", long_about = None)]
pub struct Cli {
    /// Do not print warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a document and print it with its derived fields
    Validate {
        /// YAML or JSON document (JSON when the extension is .json)
        file: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Validate a document and print a one-line summary
    Check {
        /// YAML or JSON document (JSON when the extension is .json)
        file: PathBuf,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options shared by the commands that validate a document.
#[derive(Args)]
pub struct InputArgs {
    /// Reference date for date checks and "present" (YYYY-MM-DD, default: today)
    #[arg(long, value_name = "DATE")]
    pub today: Option<NaiveDate>,
    /// Skip spell checking of highlights
    #[arg(long)]
    pub no_spell_check: bool,
    /// Word list to spell check against, one word per line
    #[arg(long, value_name = "PATH")]
    pub dictionary: Option<PathBuf>,
    /// Config file (default: ./rendercv.yaml, then the global config)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}
