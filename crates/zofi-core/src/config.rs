//! Configuration types.
//!
//! Settings come from `<config dir>/zofi/config.toml` when present. Command
//! line flags override whatever the file says.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::error::{ConfigError, ModeError};

/// Which candidate source the launcher runs with.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModeKind {
    /// Run commands found on PATH.
    #[default]
    Command,
    /// Run installed desktop applications.
    Desktop,
}

impl FromStr for ModeKind {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "command" => Ok(ModeKind::Command),
            "desktop" => Ok(ModeKind::Desktop),
            other => Err(ModeError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeKind::Command => f.write_str("command"),
            ModeKind::Desktop => f.write_str("desktop"),
        }
    }
}

/// Launcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LauncherConfig {
    /// Operating mode.
    pub mode: ModeKind,

    /// Picker width in pixels.
    pub width: u32,

    /// Picker height in pixels.
    pub height: u32,

    /// Give up on PATH discovery after this many milliseconds.
    /// Unset means wait for every directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovery_timeout_ms: Option<u64>,

    /// Extra key bindings, key name to action name, e.g. `"ctrl+n" = "cursor_down"`.
    /// Applied on top of the defaults.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub keys: BTreeMap<String, String>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            mode: ModeKind::Command,
            width: 640,
            height: 320,
            discovery_timeout_ms: None,
            keys: BTreeMap::new(),
        }
    }
}

impl LauncherConfig {
    /// Parse a config from TOML text. `path` is only used for error messages.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load the user's config file.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_file_path().ok_or(ConfigError::NoConfigDir)?;
        Self::load_from(&path)
    }

    /// Overall deadline for candidate discovery, if configured.
    pub fn discovery_deadline(&self) -> Option<Duration> {
        self.discovery_timeout_ms.map(Duration::from_millis)
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("zofi"))
}

/// Get the path to config.toml.
pub fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}
