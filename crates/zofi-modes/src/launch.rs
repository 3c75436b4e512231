//! Detached process launching.
//!
//! Execution is fire-and-forget: the child is spawned through `sh -c`
//! and never waited on. Failures are logged, never surfaced.

use std::process::{Command, Stdio};
use std::sync::Arc;

use zofi_core::SpawnError;

/// Something that can start a shell command.
#[cfg_attr(test, mockall::automock)]
pub trait Launch {
    /// Start `command` without waiting for it.
    fn launch(&self, command: &str) -> Result<(), SpawnError>;
}

/// Launcher shared by a mode for its whole lifetime.
pub type SharedLauncher = Arc<dyn Launch + Send + Sync>;

/// The real launcher: `sh -c <command>` with null stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellLauncher;

impl Launch for ShellLauncher {
    fn launch(&self, command: &str) -> Result<(), SpawnError> {
        spawn_detached(command)
    }
}

impl ShellLauncher {
    pub fn shared() -> SharedLauncher {
        Arc::new(ShellLauncher)
    }
}

/// Spawn `sh -c <command>` and return as soon as the child exists.
pub fn spawn_detached(command: &str) -> Result<(), SpawnError> {
    let child = Command::new("sh")
        .args(["-c", command])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| SpawnError::Spawn {
            command: command.to_string(),
            source,
        })?;

    tracing::info!("Launched '{}' (pid {})", command, child.id());
    Ok(())
}

/// Launch and log any failure. Used by `Mode::execute`.
pub(crate) fn launch_logged(launcher: &dyn Launch, command: &str) {
    if let Err(e) = launcher.launch(command) {
        tracing::error!("{}", e);
    }
}
