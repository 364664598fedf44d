//! CLI argument parsing using clap

use crate::scan::collector::DEFAULT_ROOT;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for extraction results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Human,
    /// One pretty-printed JSON document
    Json,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl ColorChoice {
    pub fn to_termcolor(self) -> termcolor::ColorChoice {
        match self {
            ColorChoice::Auto => termcolor::ColorChoice::Auto,
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
        }
    }
}

/// lintdex CLI entry point
#[derive(Parser, Debug)]
#[command(name = "lintdex")]
#[command(about = "Extracts lint metadata and configuration options from lint definition sources")]
#[command(version)]
pub struct Cli {
    /// Root of the lint source tree to scan
    #[arg(default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Aggregate configuration file (defaults to <ROOT>/utils/conf.rs)
    #[arg(long)]
    pub conf_file: Option<PathBuf>,

    /// Glob patterns for files to skip (may be repeated)
    #[arg(short, long)]
    pub exclude: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Output coloring
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose diagnostics
    #[arg(short, long)]
    pub verbose: bool,
}
