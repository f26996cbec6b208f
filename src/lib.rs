//! fman: read and write files as ordered sequences of lines
//!
//! This library wraps the standard file primitives with a small, typed API:
//! a [`File`] value names a path and remembers when it was last read or
//! written, and two operations move whole files in and out of memory as
//! `Vec<String>`.
//!
//! # Quick Start
//!
//! ## Writing and Reading
//!
//! ```rust,no_run
//! use fman::{File, Result};
//!
//! fn main() -> Result<()> {
//!     let mut file = File::new("greeting.txt");
//!
//!     // Replaces any existing file; every line gets a trailing "\n"
//!     let written = file.write(["Hello", "World!"])?;
//!     assert_eq!(written.bytes_written, 13);
//!
//!     let read = file.read()?;
//!     assert_eq!(read.lines, vec!["Hello", "World!"]);
//!     assert_eq!(file.last_update(), Some(read.modified));
//!     Ok(())
//! }
//! ```
//!
//! ## Handling Missing Files
//!
//! ```rust,no_run
//! use fman::File;
//!
//! let mut file = File::new("does-not-exist.txt");
//! match file.read() {
//!     Ok(read) => println!("{} lines", read.lines.len()),
//!     Err(e) if e.is_not_found() => println!("nothing there yet"),
//!     Err(e) => return Err(e),
//! }
//! # Ok::<(), fman::FmanError>(())
//! ```
//!
//! ## Custom Limits
//!
//! ```rust,no_run
//! use fman::{File, LineReader, ReaderConfig, Result};
//!
//! fn main() -> Result<()> {
//!     let reader = LineReader::with_config(ReaderConfig {
//!         max_line_length: 1024,
//!         ..Default::default()
//!     });
//!     let lines = File::new("notes.txt").read_with(&reader)?.into_lines();
//!     println!("{lines:?}");
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`core`](crate::core): the [`File`] type and the explicit read/write results
//! - [`io`]: existence probing, line reading and line writing
//! - [`error`]: the [`FmanError`] taxonomy
//!
//! All operations are synchronous. Each call opens, uses and closes its own
//! handle; nothing is shared between calls and concurrent writers to the same
//! path are not coordinated.

// Public API exports
pub use crate::error::{FmanError, Operation, Result};

// Core types
pub use crate::core::{File, RawReadResult, ReadResult, WriteResult};

// IO types
pub use crate::io::{
    Existence, LineReader, LineWriter, ReaderConfig, Utf8Handling, WriterConfig,
};

pub mod core;
pub mod error;
pub mod io;

/// Convenience functions for common operations
pub mod convenience {
    //! One-call helpers using default reader and writer settings

    pub use crate::io::convenience::*;
}
