// UserSleuth - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation. All errors preserve the causal
// chain for diagnostic logging.
//
// Each subsystem has its own error enum, consumed directly at the
// app::query boundary; there is no fatal path that would need a
// unifying top-level type.

use std::fmt;
use std::io;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Store errors
// ---------------------------------------------------------------------------

/// Errors related to loading the backing store.
#[derive(Debug)]
pub enum StoreError {
    /// The store file does not exist.
    NotFound { path: PathBuf },

    /// The store file exceeds the maximum allowed size.
    TooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// The store content is not a valid JSON array of user objects.
    Format {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// I/O error reading the store file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "User store '{}' not found", path.display())
            }
            Self::TooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "User store '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::Format { path, source } => {
                write!(
                    f,
                    "User store '{}' is not a valid JSON user list: {source}",
                    path.display()
                )
            }
            Self::Io { path, source } => {
                write!(
                    f,
                    "I/O error reading user store '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Format { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Query errors
// ---------------------------------------------------------------------------

/// Errors related to filter query values.
#[derive(Debug)]
pub enum QueryError {
    /// The age query could not be parsed as an integer.
    InvalidAge { input: String },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAge { input } => {
                write!(f, "Please enter a valid age (number); got '{input}'")
            }
        }
    }
}

impl std::error::Error for QueryError {}
