//! Error taxonomy for the CLI.
//!
//! Three tiers with distinct propagation rules:
//! - [`ConfigError`]: fatal at startup, before any scanning begins.
//! - [`InvocationError`]: fatal at orchestration level, aborts the run with a
//!   non-zero exit and no partial report.
//! - per-file scan failures are *not* Rust errors: they are
//!   [`crate::scanner::ScanError`] values captured into the report's error
//!   list while the run proceeds.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal configuration problems detected before any file is touched.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid pattern for rule `{rule_id}` (language `{language}`): {source}")]
    InvalidPattern {
        language: &'static str,
        rule_id: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("no rules registered for language `{0}`")]
    UnknownLanguage(String),
}

/// Fatal invocation-level faults. Individual file failures never produce
/// these; they accumulate in the report instead.
#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("input path does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error("cannot write output to {path}: {source}")]
    OutputNotWritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no rules available for any file type discovered under {0}")]
    NoSupportedFiles(PathBuf),
}

/// Top-level error type for the CLI.
#[derive(Debug, Error)]
pub enum CodesweepError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invocation error: {0}")]
    Invocation(#[from] InvocationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience result type used throughout the crate.
pub type Result<T> = std::result::Result<T, CodesweepError>;
