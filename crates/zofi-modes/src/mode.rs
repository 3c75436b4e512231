//! The mode contract and the two concrete modes.

use std::time::Duration;

use zofi_core::{Candidate, ModeKind};

use crate::command::CommandMode;
use crate::desktop::DesktopMode;

/// A source of choices plus a way to run them.
pub trait Mode {
    /// The choices the user can select from.
    /// Must be lexicographically sorted.
    fn choices(&self) -> &[String];

    /// If true, pressing enter without a selected choice is valid.
    fn custom_allowed(&self) -> bool;

    /// Map a choice back to what would be run for it.
    fn resolve(&self, choice: &str) -> Option<Candidate>;

    /// Execute the given choice. Fire-and-forget.
    fn execute(&self, choice: &str);
}

/// Knobs for candidate discovery.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryOptions {
    /// Stop waiting for PATH directories after this long.
    pub deadline: Option<Duration>,
}

/// The mode the launcher runs with.
pub enum LauncherMode {
    Command(CommandMode),
    Desktop(DesktopMode),
}

impl LauncherMode {
    /// Build the mode for `kind`, blocking until discovery is done.
    pub async fn load(kind: ModeKind, options: &DiscoveryOptions) -> Self {
        tracing::info!("Loading {} mode", kind);
        match kind {
            ModeKind::Command => LauncherMode::Command(CommandMode::from_env(options).await),
            ModeKind::Desktop => {
                match tokio::task::spawn_blocking(DesktopMode::from_env).await {
                    Ok(mode) => LauncherMode::Desktop(mode),
                    Err(e) => {
                        tracing::error!("Desktop discovery failed: {}", e);
                        LauncherMode::Desktop(DesktopMode::new(Default::default()))
                    }
                }
            }
        }
    }

    pub fn kind(&self) -> ModeKind {
        match self {
            LauncherMode::Command(_) => ModeKind::Command,
            LauncherMode::Desktop(_) => ModeKind::Desktop,
        }
    }
}

impl Mode for LauncherMode {
    fn choices(&self) -> &[String] {
        match self {
            LauncherMode::Command(mode) => mode.choices(),
            LauncherMode::Desktop(mode) => mode.choices(),
        }
    }

    fn custom_allowed(&self) -> bool {
        match self {
            LauncherMode::Command(mode) => mode.custom_allowed(),
            LauncherMode::Desktop(mode) => mode.custom_allowed(),
        }
    }

    fn resolve(&self, choice: &str) -> Option<Candidate> {
        match self {
            LauncherMode::Command(mode) => mode.resolve(choice),
            LauncherMode::Desktop(mode) => mode.resolve(choice),
        }
    }

    fn execute(&self, choice: &str) {
        match self {
            LauncherMode::Command(mode) => mode.execute(choice),
            LauncherMode::Desktop(mode) => mode.execute(choice),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_command_variant_dispatch() {
        let mode = LauncherMode::Command(CommandMode::new(["ls", "cat"]));
        assert_eq!(mode.kind(), ModeKind::Command);
        assert!(mode.custom_allowed());
        assert_eq!(mode.choices(), &["cat".to_string(), "ls".to_string()]);
        assert_eq!(mode.resolve("ls -la").unwrap().exec, "ls -la");
    }

    #[test]
    fn test_desktop_variant_dispatch() {
        let mut commands = HashMap::new();
        commands.insert(
            "Files".to_string(),
            Candidate::application("Files", "nautilus --new-window"),
        );
        let mode = LauncherMode::Desktop(DesktopMode::new(commands));

        assert_eq!(mode.kind(), ModeKind::Desktop);
        assert!(!mode.custom_allowed());
        assert_eq!(mode.choices(), &["Files".to_string()]);
        assert_eq!(mode.resolve("Files").unwrap().exec, "nautilus --new-window");
        assert!(mode.resolve("nautilus").is_none());
    }

    #[tokio::test]
    async fn test_load_command_mode_is_sorted() {
        let mode = LauncherMode::load(ModeKind::Command, &DiscoveryOptions::default()).await;
        assert_eq!(mode.kind(), ModeKind::Command);
        assert!(mode.choices().windows(2).all(|w| w[0] < w[1]));
    }
}
