//! Desktop mode: installed applications from XDG data directories.
//!
//! Each data directory's `applications/` tree is walked in path order.
//! When two entries share a display name, the first one found wins.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use zofi_core::{sorted_unique_names, Candidate, DiscoveryError};

use crate::desktop_entry::parse_desktop_entry;
use crate::launch::{launch_logged, SharedLauncher, ShellLauncher};

/// Runs installed applications by name.
pub struct DesktopMode {
    choices: Vec<String>,
    commands: HashMap<String, Candidate>,
    launcher: SharedLauncher,
}

impl DesktopMode {
    /// Build from already discovered applications.
    pub fn new(commands: HashMap<String, Candidate>) -> Self {
        Self::with_launcher(commands, ShellLauncher::shared())
    }

    /// Same as `new`, with a custom launcher.
    pub fn with_launcher(commands: HashMap<String, Candidate>, launcher: SharedLauncher) -> Self {
        Self {
            choices: sorted_unique_names(commands.keys().cloned()),
            commands,
            launcher,
        }
    }

    /// Scan the standard data directories.
    pub fn from_env() -> Self {
        Self::new(search_dirs(&data_dirs()))
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Only listed applications can be launched.
    pub fn custom_allowed(&self) -> bool {
        false
    }

    pub fn resolve(&self, choice: &str) -> Option<Candidate> {
        self.commands.get(choice).cloned()
    }

    /// Launch the named application. Unknown names do nothing.
    pub fn execute(&self, choice: &str) {
        match self.commands.get(choice) {
            Some(candidate) => launch_logged(self.launcher.as_ref(), &candidate.exec),
            None => tracing::debug!("No application named '{}'", choice),
        }
    }
}

/// Collect application entries from `<dir>/applications` for each data dir.
pub fn search_dirs(data_dirs: &[PathBuf]) -> HashMap<String, Candidate> {
    let mut commands = HashMap::new();

    for data_dir in data_dirs {
        let apps_dir = data_dir.join("applications");
        if !apps_dir.is_dir() {
            tracing::debug!("No applications directory in {:?}", data_dir);
            continue;
        }

        let mut files = Vec::new();
        collect_desktop_files(&apps_dir, &mut files);

        for file in files {
            let content = match std::fs::read_to_string(&file) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!("Cannot read {:?}: {}", file, e);
                    continue;
                }
            };

            let Some(entry) = parse_desktop_entry(&content) else {
                tracing::debug!("Skipping malformed entry {:?}", file);
                continue;
            };

            if entry.hidden || !entry.is_application() {
                continue;
            }

            // TODO: pick Name[locale] once a locale is available here
            commands
                .entry(entry.name.clone())
                .or_insert_with(|| Candidate::application(entry.name, entry.exec));
        }
    }

    tracing::info!("Found {} desktop applications", commands.len());
    commands
}

/// Recursively gather `*.desktop` files under `dir`, sorted by path.
///
/// Symlinked directories are not followed, so there are no loops.
fn collect_desktop_files(dir: &Path, files: &mut Vec<PathBuf>) {
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(dir).to_path_buf();
                let error = DiscoveryError::ReadEntry {
                    path,
                    source: e.into(),
                };
                tracing::warn!("{}", error);
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_dir() && path.extension().is_some_and(|ext| ext == "desktop") {
            files.push(path.to_path_buf());
        }
    }
}

/// Standard data directories, most specific first.
pub fn data_dirs() -> Vec<PathBuf> {
    data_dirs_from(
        std::env::var("XDG_DATA_HOME").ok(),
        std::env::var("XDG_DATA_DIRS").ok(),
    )
}

fn data_dirs_from(data_home: Option<String>, data_dirs: Option<String>) -> Vec<PathBuf> {
    let mut result = Vec::new();

    match data_home.filter(|s| !s.is_empty()) {
        Some(home) => result.push(PathBuf::from(home)),
        None => result.extend(dirs::data_dir()),
    }

    match data_dirs.filter(|s| !s.is_empty()) {
        Some(list) => result.extend(
            list.split(':')
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
        ),
        None => {
            result.push(PathBuf::from("/usr/local/share"));
            result.push(PathBuf::from("/usr/share"));
        }
    }

    result
}
