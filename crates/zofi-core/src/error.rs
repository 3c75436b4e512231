//! Error types for the zofi launcher.
//!
//! None of these reach the user as dialogs. They are logged where they
//! happen and the launcher carries on.

use std::path::PathBuf;
use thiserror::Error;

/// Filesystem errors hit while discovering candidates.
///
/// One failing directory or entry only costs that directory or entry.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Directory could not be listed.
    #[error("Cannot read directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory entry could not be read while iterating.
    #[error("Cannot read entry in {path:?}: {source}")]
    ReadEntry {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Entry could not be stat'ed.
    #[error("Cannot stat {path:?}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Process launch failure.
#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("Failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Mode selection errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModeError {
    /// Mode name not recognised.
    #[error("unknown mode {0}")]
    UnknownMode(String),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error in {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parse error.
    #[error("Parse error in {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}
