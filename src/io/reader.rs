//! Line-by-line file reading
//!
//! Files are split on `\n`. The terminator is never part of a line and a
//! trailing newline does not produce a final empty line. Lines longer than
//! the configured limit are reported as errors instead of being truncated.
//!
//! Bytes are never transcoded. [`LineReader::read_file_raw`] returns lines
//! exactly as stored; [`LineReader::read_file`] turns them into strings
//! according to [`Utf8Handling`].

use crate::core::{RawReadResult, ReadResult};
use crate::error::{FmanError, Operation, Result};
use crate::io::fs;
use log::debug;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::time::SystemTime;

/// Default maximum line length in bytes, terminator excluded
pub const DEFAULT_MAX_LINE_LENGTH: usize = 64 * 1024;

/// Default capacity of the read buffer
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// How lines that are not valid UTF-8 become strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Utf8Handling {
    /// Replace invalid sequences with U+FFFD
    #[default]
    Lossy,
    /// Fail the read with [`FmanError::InvalidUtf8`]
    Strict,
}

/// Configuration for the line reader
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Maximum length of a single line in bytes, terminator excluded
    pub max_line_length: usize,
    /// Drop a `\r` that directly precedes the line terminator or end of input
    pub strip_carriage_return: bool,
    /// Capacity of the buffered reader wrapped around the file handle
    pub buffer_capacity: usize,
    /// Treatment of lines that are not valid UTF-8
    pub utf8: Utf8Handling,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            strip_carriage_return: true,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            utf8: Utf8Handling::default(),
        }
    }
}

/// Reads files into ordered sequences of lines
#[derive(Debug, Clone, Default)]
pub struct LineReader {
    config: ReaderConfig,
}

impl LineReader {
    /// Create a new reader with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new reader with custom configuration
    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Get reader configuration
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Read every line of the file at `path`.
    ///
    /// The modification time is taken from the opened handle before the
    /// content is scanned. No partial result is returned on failure.
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<ReadResult> {
        let path = path.as_ref();
        let (raw, modified) = self.scan_file(path)?;
        let lines = self.decode(raw, path)?;

        Ok(ReadResult {
            path: path.to_path_buf(),
            lines,
            modified,
        })
    }

    /// Read every line of the file at `path` without decoding it
    pub fn read_file_raw<P: AsRef<Path>>(&self, path: P) -> Result<RawReadResult> {
        let path = path.as_ref();
        let (lines, modified) = self.scan_file(path)?;

        Ok(RawReadResult {
            path: path.to_path_buf(),
            lines,
            modified,
        })
    }

    /// Split everything `reader` yields into decoded lines.
    ///
    /// `path` is only used to label errors.
    pub fn read_lines<R: BufRead>(&self, reader: R, path: &Path) -> Result<Vec<String>> {
        let raw = self.read_raw_lines(reader, path)?;
        self.decode(raw, path)
    }

    /// Split everything `reader` yields into lines of raw bytes.
    ///
    /// `path` is only used to label errors.
    pub fn read_raw_lines<R: BufRead>(
        &self,
        mut reader: R,
        path: &Path,
    ) -> Result<Vec<Vec<u8>>> {
        let limit = self.config.max_line_length;
        // Room for the longest allowed line plus "\r\n"
        let window = limit.saturating_add(2) as u64;

        let mut lines = Vec::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = (&mut reader)
                .take(window)
                .read_until(b'\n', &mut buf)
                .map_err(|e| FmanError::from_io(path, Operation::Read, e))?;
            if read == 0 {
                break;
            }

            if buf.last() == Some(&b'\n') {
                buf.pop();
            }
            if self.config.strip_carriage_return && buf.last() == Some(&b'\r') {
                buf.pop();
            }
            if buf.len() > limit {
                return Err(FmanError::line_too_long(path, lines.len() + 1, limit));
            }

            lines.push(std::mem::take(&mut buf));
        }

        Ok(lines)
    }

    fn scan_file(&self, path: &Path) -> Result<(Vec<Vec<u8>>, SystemTime)> {
        let file = fs::open(path)?;
        let modified = fs::modified(&file, path)?;
        debug!("Opened {} for reading", path.display());

        let reader = BufReader::with_capacity(self.config.buffer_capacity.max(1), file);
        let lines = self.read_raw_lines(reader, path)?;
        debug!("Read {} lines from {}", lines.len(), path.display());

        Ok((lines, modified))
    }

    fn decode(&self, raw: Vec<Vec<u8>>, path: &Path) -> Result<Vec<String>> {
        raw.into_iter()
            .enumerate()
            .map(|(index, bytes)| match String::from_utf8(bytes) {
                Ok(line) => Ok(line),
                Err(e) => match self.config.utf8 {
                    Utf8Handling::Lossy => {
                        debug!("Line {} of {} is not valid UTF-8", index + 1, path.display());
                        Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
                    }
                    Utf8Handling::Strict => Err(FmanError::invalid_utf8(path, index + 1)),
                },
            })
            .collect()
    }
}
