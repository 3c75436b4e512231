//! Command mode: every executable name found on PATH.
//!
//! ## Discovery
//!
//! ```text
//!  PATH = /usr/bin:/bin:...
//!           │      │
//!           ▼      ▼
//!       worker   worker   ...      one task per entry (JoinSet)
//!           │      │
//!           └──┬───┘  names (unbounded mpsc)
//!              ▼
//!          collector ──► BTreeSet ──► sorted Vec
//! ```
//!
//! The collector drains names while it waits for workers to finish, so
//! no worker ever blocks on a full channel. Only the collector touches
//! the name set.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinSet;
use zofi_core::{sorted_unique_names, Candidate, DiscoveryError};

use crate::launch::{launch_logged, SharedLauncher, ShellLauncher};
use crate::mode::DiscoveryOptions;

/// Runs commands found on PATH, or any text the user types.
pub struct CommandMode {
    choices: Vec<String>,
    launcher: SharedLauncher,
}

impl CommandMode {
    /// Create a command mode over a known set of names.
    pub fn new<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_launcher(choices, ShellLauncher::shared())
    }

    /// Same as `new`, with a custom launcher.
    pub fn with_launcher<I, S>(choices: I, launcher: SharedLauncher) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            choices: sorted_unique_names(choices),
            launcher,
        }
    }

    /// Discover commands on the `PATH` of this process.
    pub async fn from_env(options: &DiscoveryOptions) -> Self {
        let path = std::env::var_os("PATH").unwrap_or_default();
        Self::new(search_path(&path, options).await)
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Typed text is a valid command on its own.
    pub fn custom_allowed(&self) -> bool {
        true
    }

    /// Any choice, listed or typed, runs as itself.
    pub fn resolve(&self, choice: &str) -> Option<Candidate> {
        Some(Candidate::command(choice))
    }

    pub fn execute(&self, choice: &str) {
        if let Some(candidate) = self.resolve(choice) {
            launch_logged(self.launcher.as_ref(), &candidate.exec);
        }
    }
}

/// Scan every entry of a colon-separated PATH value concurrently.
///
/// Unreadable directories and entries are logged and skipped. Returns a
/// sorted list without duplicates.
pub async fn search_path(path_var: &OsStr, options: &DiscoveryOptions) -> Vec<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut workers = JoinSet::new();

    for dir in split_path_var(path_var) {
        if dir.as_os_str().is_empty() {
            tracing::debug!("Empty PATH entry");
        }
        let tx = tx.clone();
        workers.spawn(async move { search_one_dir(&dir, &tx).await });
    }
    drop(tx);

    tracing::debug!("Scanning {} PATH entries", workers.len());

    let names = gather(workers, rx, options).await;
    tracing::info!("Found {} commands on PATH", names.len());
    names.into_iter().collect()
}

/// Split on `:` byte-wise so one non UTF-8 entry only costs itself.
/// Empty entries are kept.
#[cfg(unix)]
fn split_path_var(path_var: &OsStr) -> Vec<PathBuf> {
    use std::os::unix::ffi::OsStrExt;
    path_var
        .as_bytes()
        .split(|&b| b == b':')
        .map(|raw| PathBuf::from(OsStr::from_bytes(raw)))
        .collect()
}

#[cfg(not(unix))]
fn split_path_var(path_var: &OsStr) -> Vec<PathBuf> {
    std::env::split_paths(path_var).collect()
}

/// Collect names from the workers, giving up at the deadline if one is set.
async fn gather(
    mut workers: JoinSet<()>,
    mut rx: UnboundedReceiver<String>,
    options: &DiscoveryOptions,
) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    match options.deadline {
        Some(deadline) => {
            let timed_out = tokio::time::timeout(
                deadline,
                collect_names(&mut workers, &mut rx, &mut names),
            )
            .await
            .is_err();

            if timed_out {
                tracing::warn!(
                    "PATH discovery exceeded {:?}, keeping {} names found so far",
                    deadline,
                    names.len()
                );
                workers.abort_all();
            }
        }
        None => collect_names(&mut workers, &mut rx, &mut names).await,
    }

    // Names sent just before the last worker finished.
    while let Ok(name) = rx.try_recv() {
        names.insert(name);
    }

    names
}

/// Drain names until every worker has finished.
async fn collect_names(
    workers: &mut JoinSet<()>,
    rx: &mut UnboundedReceiver<String>,
    names: &mut BTreeSet<String>,
) {
    loop {
        tokio::select! {
            Some(name) = rx.recv() => {
                names.insert(name);
            }
            joined = workers.join_next() => match joined {
                Some(Ok(())) => {}
                Some(Err(e)) => tracing::warn!("PATH worker failed: {}", e),
                None => break,
            },
        }
    }
}

async fn search_one_dir(dir: &Path, names: &UnboundedSender<String>) {
    if let Err(e) = scan_dir(dir, names).await {
        tracing::warn!("{}", e);
    }
}

/// Send the name of every entry in `dir` that has any permission bit set.
async fn scan_dir(dir: &Path, names: &UnboundedSender<String>) -> Result<(), DiscoveryError> {
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|source| DiscoveryError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

    loop {
        let entry = match entries.next_entry().await {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(source) => {
                return Err(DiscoveryError::ReadEntry {
                    path: dir.to_path_buf(),
                    source,
                })
            }
        };

        let path = entry.path();
        // stat, not lstat: a symlink counts as whatever it points to.
        let metadata = match fs::metadata(&path).await {
            Ok(metadata) => metadata,
            Err(source) => {
                tracing::warn!("{}", DiscoveryError::Stat { path, source });
                continue;
            }
        };

        if !has_permission_bits(&metadata) {
            tracing::debug!("Skipping {:?}: no permission bits", path);
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) => {
                // Receiver only goes away after a deadline; nothing to do then.
                let _ = names.send(name);
            }
            Err(raw) => tracing::debug!("Skipping non UTF-8 name {:?}", raw),
        }
    }

    Ok(())
}

/// Deliberately weak executability check: any of the 0o777 bits.
#[cfg(unix)]
fn has_permission_bits(metadata: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o777 != 0
}

#[cfg(not(unix))]
fn has_permission_bits(_metadata: &std::fs::Metadata) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launch::MockLaunch;
    use std::sync::Arc;
    use std::time::Duration;

    fn touch(dir: &Path, name: &str, mode: u32) {
        let path = dir.join(name);
        std::fs::write(&path, b"#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(mode)).unwrap();
        }
        #[cfg(not(unix))]
        let _ = mode;
    }

    fn path_of(dirs: &[&Path]) -> std::ffi::OsString {
        std::env::join_paths(dirs).unwrap()
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_skips_zero_permission_and_missing_dirs() {
        let bin = tempfile::tempdir().unwrap();
        touch(bin.path(), "ls", 0o755);
        touch(bin.path(), "locked", 0o000);

        let path = format!("{}:/nonexistent/zofi-test-dir", bin.path().display());
        let names = search_path(OsStr::new(&path), &DiscoveryOptions::default()).await;

        assert_eq!(names, vec!["ls"]);
    }

    #[tokio::test]
    async fn test_merges_and_sorts_across_dirs() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        touch(a.path(), "zsh", 0o755);
        touch(a.path(), "tool", 0o755);
        touch(b.path(), "tool", 0o700);
        touch(b.path(), "awk", 0o644);
        touch(b.path(), "Make", 0o755);

        let names =
            search_path(&path_of(&[a.path(), b.path()]), &DiscoveryOptions::default()).await;

        assert_eq!(names, vec!["Make", "awk", "tool", "zsh"]);
        assert!(names.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_empty_entries_contribute_nothing() {
        let names = search_path(OsStr::new("::"), &DiscoveryOptions::default()).await;
        assert!(names.is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_utf8_entry_only_costs_itself() {
        use std::os::unix::ffi::OsStrExt;

        let bin = tempfile::tempdir().unwrap();
        touch(bin.path(), "ls", 0o755);

        let mut raw = bin.path().as_os_str().as_bytes().to_vec();
        raw.extend_from_slice(b":/opt/caf\xe9/bin");
        let names = search_path(OsStr::from_bytes(&raw), &DiscoveryOptions::default()).await;

        assert_eq!(names, vec!["ls"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_split_keeps_empty_and_raw_entries() {
        use std::os::unix::ffi::OsStrExt;

        let dirs = split_path_var(OsStr::from_bytes(b"/bin::/opt/caf\xe9"));
        assert_eq!(dirs.len(), 3);
        assert_eq!(dirs[0], PathBuf::from("/bin"));
        assert!(dirs[1].as_os_str().is_empty());
        assert_eq!(dirs[2].as_os_str().as_bytes(), b"/opt/caf\xe9");
    }

    #[tokio::test]
    async fn test_deadline_keeps_names_from_stalled_scan() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut workers = JoinSet::new();
        workers.spawn(async move {
            tx.send("ls".to_string()).unwrap();
            std::future::pending::<()>().await;
        });

        let options = DiscoveryOptions {
            deadline: Some(Duration::from_millis(50)),
        };
        let started = std::time::Instant::now();
        let names = gather(workers, rx, &options).await;

        assert!(started.elapsed() < Duration::from_secs(5));
        assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["ls"]);
    }

    #[tokio::test]
    async fn test_deadline_that_does_not_fire() {
        let bin = tempfile::tempdir().unwrap();
        touch(bin.path(), "cat", 0o755);

        let options = DiscoveryOptions {
            deadline: Some(Duration::from_secs(30)),
        };
        let names = search_path(&path_of(&[bin.path()]), &options).await;
        assert_eq!(names, vec!["cat"]);
    }

    #[test]
    fn test_new_sorts_and_dedups() {
        let mode = CommandMode::new(["vim", "bash", "vim"]);
        assert_eq!(mode.choices(), &["bash".to_string(), "vim".to_string()]);
        assert!(mode.custom_allowed());
    }

    #[test]
    fn test_execute_runs_choice_verbatim() {
        let mut launcher = MockLaunch::new();
        launcher
            .expect_launch()
            .withf(|command: &str| command == "echo hi | wc -c")
            .times(1)
            .returning(|_| Ok(()));

        let mode = CommandMode::with_launcher(["echo"], Arc::new(launcher));
        mode.execute("echo hi | wc -c");
    }

    #[test]
    fn test_resolve_any_text() {
        let mode = CommandMode::new(["ls"]);
        assert_eq!(mode.resolve("not-listed"), Some(Candidate::command("not-listed")));
    }
}
