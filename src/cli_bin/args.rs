//! Command-line argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Main CLI application
#[derive(Parser)]
#[command(
    name = "fman",
    version,
    about = "Read and write files as ordered lines",
    long_about = "fman reads a file into its lines, replaces a file with a list of lines, \
                  and reports whether a path exists and when it was last modified."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the lines of a file
    Read(ReadArgs),
    /// Replace a file with the given lines
    Write(WriteArgs),
    /// Report whether a path exists and its modification time
    Stat(StatArgs),
}

/// Output rendering
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text
    #[default]
    Text,
    /// JSON object
    Json,
    /// YAML document
    Yaml,
}

#[derive(Args, Debug)]
pub struct ReadArgs {
    /// File to read
    pub path: PathBuf,

    /// Maximum line length in bytes
    #[arg(long, value_name = "BYTES")]
    pub max_line_length: Option<usize>,

    /// Keep a carriage return in front of the line terminator
    #[arg(long)]
    pub keep_cr: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct WriteArgs {
    /// File to replace
    pub path: PathBuf,

    /// Lines to write, one argument per line
    pub lines: Vec<String>,

    /// Take the lines from standard input instead
    #[arg(long, conflicts_with = "lines")]
    pub stdin: bool,

    /// Output format for the summary
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct StatArgs {
    /// Path to probe
    pub path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}
