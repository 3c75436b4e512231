//! Core types for the zofi launcher.
//!
//! This crate contains the pieces shared by every other zofi crate:
//! - Candidate type and name-list helpers
//! - The two-tier match filter
//! - The selection model (cursor over the visible list)
//! - Configuration types
//! - Error types

mod config;
mod error;
mod filter;
mod item;
mod selection;

pub use config::{config_dir, config_file_path, LauncherConfig, ModeKind};
pub use error::{ConfigError, DiscoveryError, ModeError, SpawnError};
pub use filter::filter_choices;
pub use item::{sorted_unique_names, Candidate};
pub use selection::SelectionModel;
