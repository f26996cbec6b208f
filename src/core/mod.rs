//! Core library types
//!
//! - File: a path plus the time it was last successfully read or written
//! - ReadResult / RawReadResult / WriteResult: explicit outcomes of the operations

pub mod file;

pub use file::{File, RawReadResult, ReadResult, WriteResult};
