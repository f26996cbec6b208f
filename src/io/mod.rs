//! File I/O: existence probing, line reading and line writing

pub mod fs;
pub mod reader;
pub mod writer;

pub use fs::Existence;
pub use reader::{LineReader, ReaderConfig, Utf8Handling};
pub use writer::{LineWriter, WriterConfig};

/// Convenience functions for common operations
pub mod convenience {
    use super::*;
    use crate::error::Result;
    use std::path::Path;

    /// Read all lines of a file with default settings
    pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
        LineReader::new().read_file(path).map(|r| r.lines)
    }

    /// Replace a file with `lines` using default settings
    pub fn write_lines<P, I, S>(path: P, lines: I) -> Result<crate::WriteResult>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        LineWriter::new().write_file(path, lines)
    }

    /// Check whether something exists at `path`, failing if that cannot be determined
    pub fn exists<P: AsRef<Path>>(path: P) -> Result<bool> {
        let path = path.as_ref();
        fs::probe(path).into_result(path)
    }
}
