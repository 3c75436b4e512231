//! Candidate sources for the zofi launcher.
//!
//! This crate provides the two launcher modes and their collaborators:
//! - `Mode` contract and the `LauncherMode` tagged union
//! - Command mode: concurrent PATH discovery
//! - Desktop mode: application entries from XDG data directories
//! - Desktop entry parsing
//! - Detached process launching

pub mod command;
pub mod desktop;
pub mod desktop_entry;
pub mod launch;
pub mod mode;

pub use command::{search_path, CommandMode};
pub use desktop::{data_dirs, DesktopMode};
pub use desktop_entry::{parse_desktop_entry, DesktopEntry, EntryType};
pub use launch::{spawn_detached, Launch, SharedLauncher, ShellLauncher};
pub use mode::{DiscoveryOptions, LauncherMode, Mode};

// Re-export zofi_core types for convenience
pub use zofi_core::{Candidate, ModeKind};
