//! CLI command handlers that bridge CLI arguments to library operations
//!
//! Handlers write to the `out` they are given and never touch the process
//! streams directly; `main` passes the locked stdin and stdout.

use crate::cli_bin::args::*;
use anyhow::{Context, Result};
use fman::{File, LineReader, ReaderConfig};
use log::debug;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// What `stat` reports about a path
#[derive(Debug, Serialize)]
pub struct StatReport {
    pub path: PathBuf,
    pub exists: bool,
    pub modified: Option<SystemTime>,
}

/// Execute the read command
pub fn read_command(args: ReadArgs, out: &mut dyn Write) -> Result<()> {
    debug!("Executing read command with args: {:?}", args);

    let mut config = ReaderConfig {
        strip_carriage_return: !args.keep_cr,
        ..Default::default()
    };
    if let Some(limit) = args.max_line_length {
        config.max_line_length = limit;
    }

    let mut file = File::new(&args.path);
    let result = file
        .read_with(&LineReader::with_config(config))
        .with_context(|| format!("failed to read {}", args.path.display()))?;

    output(out, &result, args.format, |out, result| {
        for line in &result.lines {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    })
}

/// Execute the write command
pub fn write_command(
    args: WriteArgs,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    debug!("Executing write command with args: {:?}", args);

    let lines = if args.stdin {
        LineReader::new()
            .read_lines(input, Path::new("<stdin>"))
            .context("failed to read lines from standard input")?
    } else {
        args.lines
    };

    let mut file = File::new(&args.path);
    let result = file
        .write(&lines)
        .with_context(|| format!("failed to write {}", args.path.display()))?;

    output(out, &result, args.format, |out, result| {
        writeln!(
            out,
            "Wrote {} lines ({} bytes) to {}{}",
            result.lines_written,
            result.bytes_written,
            result.path.display(),
            if result.replaced { ", replacing the previous file" } else { "" }
        )
    })
}

/// Execute the stat command
pub fn stat_command(args: StatArgs, out: &mut dyn Write) -> Result<()> {
    debug!("Executing stat command with args: {:?}", args);

    let file = File::new(&args.path);
    let exists = file.existence().into_result(file.path())?;
    // The probe does not follow a trailing symlink, so neither may the stat
    let modified = if exists {
        Some(fman::io::fs::entry_modified(file.path())?)
    } else {
        None
    };

    let report = StatReport {
        path: args.path,
        exists,
        modified,
    };

    output(out, &report, args.format, |out, report| match report.modified {
        Some(modified) => writeln!(
            out,
            "{}: exists, modified {}",
            report.path.display(),
            format_time(modified)
        ),
        None => writeln!(out, "{}: absent", report.path.display()),
    })
}

/// Render `value` as JSON or YAML, or as text through `render_text`
fn output<T, F>(
    out: &mut dyn Write,
    value: &T,
    format: OutputFormat,
    render_text: F,
) -> Result<()>
where
    T: Serialize,
    F: FnOnce(&mut dyn Write, &T) -> io::Result<()>,
{
    match format {
        OutputFormat::Text => render_text(out, value)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(value)?)?,
        OutputFormat::Yaml => write!(out, "{}", serde_yaml::to_string(value)?)?,
    }
    Ok(())
}

/// Seconds since the Unix epoch with nanosecond precision
fn format_time(time: SystemTime) -> String {
    match time.duration_since(UNIX_EPOCH) {
        Ok(d) => format!("{}.{:09}", d.as_secs(), d.subsec_nanos()),
        Err(e) => {
            let d = e.duration();
            format!("-{}.{:09}", d.as_secs(), d.subsec_nanos())
        }
    }
}
