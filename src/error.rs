//! Error types for the fman library
//!
//! Every failure is surfaced to the caller as an [`FmanError`]. Errors that
//! originate in the operating system keep the path and the operation that
//! failed, so callers can branch on them (most commonly on "not found").

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The filesystem operation that was being performed when an error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Open,
    Stat,
    Read,
    Create,
    Remove,
    Write,
    Flush,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::Open => "open",
            Self::Stat => "stat",
            Self::Read => "read",
            Self::Create => "create",
            Self::Remove => "remove",
            Self::Write => "write",
            Self::Flush => "flush",
        };
        f.write_str(verb)
    }
}

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum FmanError {
    /// The path does not exist
    #[error("File not found: {path}")]
    NotFound { path: PathBuf },

    /// The OS refused access to the path
    #[error("Permission denied: failed to {operation} {path}")]
    PermissionDenied { path: PathBuf, operation: Operation },

    /// Any other OS-level failure
    #[error("Failed to {operation} {path}: {source}")]
    Io {
        path: PathBuf,
        operation: Operation,
        #[source]
        source: io::Error,
    },

    /// A line exceeded the reader's maximum line length
    #[error("Line {line} of {path} exceeds the maximum line length of {limit} bytes")]
    LineTooLong {
        path: PathBuf,
        line: usize,
        limit: usize,
    },

    /// A line is not valid UTF-8
    #[error("Line {line} of {path} is not valid UTF-8")]
    InvalidUtf8 { path: PathBuf, line: usize },

    /// Probing the path failed for a reason other than "does not exist"
    #[error("Cannot determine whether {path} exists: {source}")]
    ExistenceUnknown {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, FmanError>;

impl FmanError {
    /// Classify an `io::Error` raised while performing `operation` on `path`
    pub fn from_io(path: impl Into<PathBuf>, operation: Operation, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, operation },
            _ => Self::Io {
                path,
                operation,
                source,
            },
        }
    }

    /// Create a new not found error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a new line too long error
    pub fn line_too_long(path: impl Into<PathBuf>, line: usize, limit: usize) -> Self {
        Self::LineTooLong {
            path: path.into(),
            line,
            limit,
        }
    }

    /// Create a new invalid UTF-8 error
    pub fn invalid_utf8(path: impl Into<PathBuf>, line: usize) -> Self {
        Self::InvalidUtf8 {
            path: path.into(),
            line,
        }
    }

    /// Create a new existence unknown error
    pub fn existence_unknown(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ExistenceUnknown {
            path: path.into(),
            source,
        }
    }

    /// Whether this error means the path does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether retrying the same call could plausibly succeed
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::NotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::LineTooLong { .. }
            | Self::InvalidUtf8 { .. } => false,
            Self::Io { source, .. } | Self::ExistenceUnknown { source, .. } => matches!(
                source.kind(),
                io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
            ),
        }
    }

    /// The path the failed operation targeted
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::PermissionDenied { path, .. }
            | Self::Io { path, .. }
            | Self::LineTooLong { path, .. }
            | Self::InvalidUtf8 { path, .. }
            | Self::ExistenceUnknown { path, .. } => path,
        }
    }

    /// The underlying I/O error kind, if the error came from the OS
    pub fn kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::NotFound { .. } => Some(io::ErrorKind::NotFound),
            Self::PermissionDenied { .. } => Some(io::ErrorKind::PermissionDenied),
            Self::Io { source, .. } | Self::ExistenceUnknown { source, .. } => Some(source.kind()),
            Self::LineTooLong { .. } | Self::InvalidUtf8 { .. } => None,
        }
    }
}
