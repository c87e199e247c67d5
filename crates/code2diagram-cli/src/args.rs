//! Command-line argument definitions for the Code2Diagram CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the code to analyze, the output format
//! and destination, configuration file selection, and logging verbosity.

use clap::{Parser, ValueEnum};

/// Command-line arguments for the Code2Diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the source file to analyze; `-` reads standard input
    #[arg(required_unless_present = "github", conflicts_with = "github")]
    pub input: Option<String>,

    /// Analyze the script files at the root of a GitHub repository
    #[arg(long, value_name = "OWNER/REPO")]
    pub github: Option<String>,

    /// Declared language of the input (e.g. javascript, python)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Path to the output file; standard output if omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// How analysis results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The analysis report as JSON
    Json,
    /// Only the Mermaid flowchart text
    Mermaid,
    /// A human-readable summary with issues and recommendations
    Text,
}
