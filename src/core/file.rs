//! The `File` type: a path plus the time it was last read or written

use crate::error::Result;
use crate::io::fs::{self, Existence};
use crate::io::{LineReader, LineWriter};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Lines read from a file together with its modification time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadResult {
    /// Path that was read
    pub path: PathBuf,
    /// Lines in file order, without terminators
    pub lines: Vec<String>,
    /// Modification time reported by the filesystem for the opened file
    pub modified: SystemTime,
}

impl ReadResult {
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// Undecoded lines read from a file together with its modification time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawReadResult {
    /// Path that was read
    pub path: PathBuf,
    /// Lines in file order as stored on disk, without terminators
    pub lines: Vec<Vec<u8>>,
    /// Modification time reported by the filesystem for the opened file
    pub modified: SystemTime,
}

/// Outcome of a successful write
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteResult {
    /// Path that was written
    pub path: PathBuf,
    /// Number of lines written
    pub lines_written: usize,
    /// Size of the new file in bytes
    pub bytes_written: u64,
    /// Whether an existing entry was deleted first
    pub replaced: bool,
    /// Wall-clock time after the final flush
    pub written_at: SystemTime,
}

/// A file of interest on disk.
///
/// `last_update` starts unset and only changes when a read or write
/// succeeds: reads record the file's modification time, writes record the
/// time the data was flushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    last_update: Option<SystemTime>,
}

impl File {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last_update: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Time of the last successful read or write, if any
    pub fn last_update(&self) -> Option<SystemTime> {
        self.last_update
    }

    /// Probe whether something currently exists at the path
    pub fn existence(&self) -> Existence {
        fs::probe(&self.path)
    }

    /// Read all lines with the default reader
    pub fn read(&mut self) -> Result<ReadResult> {
        self.read_with(&LineReader::new())
    }

    pub fn read_with(&mut self, reader: &LineReader) -> Result<ReadResult> {
        let result = reader.read_file(&self.path)?;
        self.last_update = Some(result.modified);
        Ok(result)
    }

    /// Read all lines as raw bytes with the default reader
    pub fn read_raw(&mut self) -> Result<RawReadResult> {
        self.read_raw_with(&LineReader::new())
    }

    pub fn read_raw_with(&mut self, reader: &LineReader) -> Result<RawReadResult> {
        let result = reader.read_file_raw(&self.path)?;
        self.last_update = Some(result.modified);
        Ok(result)
    }

    /// Replace the file's content with `lines` using the default writer
    pub fn write<I, S>(&mut self, lines: I) -> Result<WriteResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.write_with(&LineWriter::new(), lines)
    }

    pub fn write_with<I, S>(&mut self, writer: &LineWriter, lines: I) -> Result<WriteResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let result = writer.write_file(&self.path, lines)?;
        self.last_update = Some(result.written_at);
        Ok(result)
    }
}
