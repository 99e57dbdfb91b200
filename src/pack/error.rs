//! Error types for pack planning.
//!
//! Provides the pack-level [`Error`] enum, the [`Context`] and [`ErrorExt`]
//! extension traits for attaching context to fallible calls, and the
//! crate-wide [`bail!`](crate::bail) macro.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for pack operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while constructing options or planning a pack.
#[derive(Error, Debug)]
pub enum Error {
    /// Delta mode string is not one of the known strategies.
    #[error("invalid delta mode '{0}' (expected one of: none, best-speed, best-size)")]
    InvalidDeltaMode(String),

    /// Runtime identifier could not be parsed.
    #[error("invalid runtime identifier '{0}' (expected e.g. win-x64, osx-arm64, linux-x64)")]
    InvalidRuntime(String),

    /// Package version is not valid semver.
    #[error("invalid package version '{version}': {source}")]
    InvalidVersion {
        /// Version string as supplied
        version: String,
        /// Parser error
        #[source]
        source: semver::Error,
    },

    /// Pre-flight validation failed.
    #[error("configuration is invalid:\n  - {}", .0.join("\n  - "))]
    Validation(Vec<String>),

    /// Explicit or inferred entry executable does not exist in the payload.
    #[error("entry executable not found: {0}")]
    EntryNotFound(String),

    /// More than one executable could be the entry point.
    #[error("cannot infer entry executable, candidates: {}; pass --main-exe", .0.join(", "))]
    EntryAmbiguous(Vec<String>),

    /// Invalid exclude glob.
    #[error("invalid exclude pattern '{pattern}': {source}")]
    Pattern {
        /// Offending pattern
        pattern: String,
        /// Glob parser error
        #[source]
        source: glob::PatternError,
    },

    /// Directory traversal error.
    #[error("failed to walk payload directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// IO error with an operation description and path.
    #[error("{context} {}: {source}", .path.display())]
    Fs {
        /// What was being done
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Everything else.
    #[error("{0}")]
    GenericError(String),
}

/// Attach a message to an `Option` or `Result`, turning it into [`Error::GenericError`].
pub trait Context<T> {
    /// Converts `None`/`Err` into a generic error carrying `msg`.
    fn context<C>(self, msg: C) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static;
}

impl<T> Context<T> for Option<T> {
    fn context<C>(self, msg: C) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }
}

impl<T, E: std::fmt::Display> Context<T> for std::result::Result<T, E> {
    fn context<C>(self, msg: C) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::GenericError(format!("{msg}: {e}")))
    }
}

/// Filesystem context for IO results.
pub trait ErrorExt<T> {
    /// Wraps an IO error with what was being done and to which path.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Return early with an [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::pack::Error::GenericError(format!($($arg)*)))
    };
}
