//! Line-by-line file writing
//!
//! Writing is destructive: whatever is at the target path is removed before
//! the new file is created, and it stays removed if a later step fails.
//! Every line, the last one included, is followed by a single `\n`.

use crate::core::WriteResult;
use crate::error::{FmanError, Operation, Result};
use crate::io::fs;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::SystemTime;

/// Default capacity of the write buffer
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// Configuration for the line writer
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Capacity of the buffered writer wrapped around the file handle
    pub buffer_capacity: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

/// Writes ordered sequences of lines to files
#[derive(Debug, Clone, Default)]
pub struct LineWriter {
    config: WriterConfig,
}

impl LineWriter {
    /// Create a new writer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new writer with custom configuration
    pub fn with_config(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Get writer configuration
    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Replace the file at `path` with `lines`.
    ///
    /// `written_at` in the result is taken after the final flush succeeded.
    pub fn write_file<P, I, S>(&self, path: P, lines: I) -> Result<WriteResult>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let path = path.as_ref();

        let replaced = fs::probe(path).into_result(path)?;
        if replaced {
            info!("File {} already exists, deleting it", path.display());
            fs::remove(path)?;
        }

        let file = fs::create(path)?;
        debug!("Created {}", path.display());

        let mut writer = BufWriter::with_capacity(self.config.buffer_capacity, file);
        let (lines_written, bytes_written) = self.write_lines(&mut writer, lines, path)?;
        writer
            .flush()
            .map_err(|e| FmanError::from_io(path, Operation::Flush, e))?;
        let written_at = SystemTime::now();

        debug!(
            "Wrote {} lines ({} bytes) to {}",
            lines_written,
            bytes_written,
            path.display()
        );

        Ok(WriteResult {
            path: path.to_path_buf(),
            lines_written,
            bytes_written,
            replaced,
            written_at,
        })
    }

    /// Write each line followed by `\n` to `writer`.
    ///
    /// Returns the number of lines and bytes handed to `writer`. Nothing is
    /// flushed; `path` is only used to label errors.
    pub fn write_lines<W, I, S>(
        &self,
        writer: &mut W,
        lines: I,
        path: &Path,
    ) -> Result<(usize, u64)>
    where
        W: Write,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut count = 0;
        let mut bytes = 0u64;

        for line in lines {
            let line = line.as_ref().as_bytes();
            writer
                .write_all(line)
                .and_then(|_| writer.write_all(b"\n"))
                .map_err(|e| FmanError::from_io(path, Operation::Write, e))?;
            count += 1;
            bytes += line.len() as u64 + 1;
        }

        Ok((count, bytes))
    }
}
