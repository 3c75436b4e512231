//! Centralized actions for the zofi launcher.
//!
//! Keys are bound to these actions through the `Keymap`. Actions are also
//! addressable by name so the config file can bind extra keys.

/// Something the user can ask the launcher to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move the selection up one row.
    CursorUp,
    /// Move the selection down one row.
    CursorDown,
    /// Copy the selected name into the input.
    Complete,
    /// Run the selection, or the typed text if the mode allows it.
    Submit,
    /// Close without running anything.
    Dismiss,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::CursorUp => "cursor_up",
            Action::CursorDown => "cursor_down",
            Action::Complete => "complete",
            Action::Submit => "submit",
            Action::Dismiss => "dismiss",
        }
    }
}

/// Look up an action by name.
pub fn action_from_name(name: &str) -> Option<Action> {
    match name {
        // Navigation
        "cursor_up" => Some(Action::CursorUp),
        "cursor_down" => Some(Action::CursorDown),

        // Input
        "complete" => Some(Action::Complete),

        // Execution
        "submit" => Some(Action::Submit),
        "dismiss" => Some(Action::Dismiss),

        _ => None,
    }
}

/// Get all available action names.
pub fn available_actions() -> &'static [&'static str] {
    &["cursor_up", "cursor_down", "complete", "submit", "dismiss"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_name() {
        assert_eq!(action_from_name("cursor_up"), Some(Action::CursorUp));
        assert_eq!(action_from_name("submit"), Some(Action::Submit));
        assert!(action_from_name("unknown_action").is_none());
    }

    #[test]
    fn test_available_actions_round_trip() {
        for name in available_actions() {
            let action = action_from_name(name).unwrap();
            assert_eq!(action.name(), *name);
        }
    }
}
