//! Key names and the key-to-action table.
//!
//! ## Binding Order
//!
//! Defaults are registered first, then the `[keys]` table from the config
//! file. A later binding for the same key replaces the earlier one.

use std::collections::{BTreeMap, HashMap};

use crate::actions::{action_from_name, available_actions, Action};

/// Config value that removes a key's binding instead of setting one.
const UNBIND: &str = "none";

/// A key press as the controller sees it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Tab,
    Enter,
    Escape,
    /// Anything else, by normalized name (e.g. "a", "backspace", "ctrl+n").
    Other(String),
}

impl Key {
    /// Parse a key name.
    ///
    /// Accepts both "ctrl+n" and "ctrl-n" and is case-insensitive for
    /// named keys. Single characters keep their case.
    pub fn parse(name: &str) -> Key {
        if name.chars().count() == 1 {
            return Key::Other(name.to_string());
        }

        let normalized = name.trim().to_lowercase().replace('-', "+");
        match normalized.as_str() {
            "up" => Key::Up,
            "down" => Key::Down,
            "tab" => Key::Tab,
            "enter" | "return" => Key::Enter,
            "escape" | "esc" => Key::Escape,
            _ => Key::Other(normalized),
        }
    }
}

/// Key-to-action bindings.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<Key, Action>,
}

impl Keymap {
    /// Create an empty keymap.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Add a binding. If the key is already bound, it's overwritten.
    pub fn set(&mut self, key: Key, action: Action) {
        self.bindings.insert(key, action);
    }

    /// Delete a binding. Returns `true` if one was removed.
    pub fn del(&mut self, key: &Key) -> bool {
        self.bindings.remove(key).is_some()
    }

    /// Action bound to `key`, if any. Unbound keys fall through to text entry.
    pub fn lookup(&self, key: &Key) -> Option<Action> {
        self.bindings.get(key).copied()
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Apply user bindings from the config file.
    ///
    /// The action name `none` removes the key's binding. Unknown action
    /// names are logged and skipped.
    pub fn apply_overrides(&mut self, keys: &BTreeMap<String, String>) {
        for (key, action_name) in keys {
            if action_name == UNBIND {
                if self.del(&Key::parse(key)) {
                    tracing::debug!("Removed binding for {}", key);
                }
                continue;
            }

            match action_from_name(action_name) {
                Some(action) => {
                    tracing::debug!("Registered binding: {} -> {}", key, action_name);
                    self.set(Key::parse(key), action);
                }
                None => tracing::warn!(
                    "Unknown action '{}' for key '{}', expected one of {:?} or '{}'",
                    action_name,
                    key,
                    available_actions(),
                    UNBIND
                ),
            }
        }
    }
}

impl Default for Keymap {
    /// The standard bindings.
    fn default() -> Self {
        let mut keymap = Self::empty();
        keymap.set(Key::Up, Action::CursorUp);
        keymap.set(Key::Down, Action::CursorDown);
        keymap.set(Key::Tab, Action::Complete);
        keymap.set(Key::Enter, Action::Submit);
        keymap.set(Key::Escape, Action::Dismiss);
        keymap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(Key::parse("up"), Key::Up);
        assert_eq!(Key::parse("Down"), Key::Down);
        assert_eq!(Key::parse("TAB"), Key::Tab);
        assert_eq!(Key::parse("return"), Key::Enter);
        assert_eq!(Key::parse("esc"), Key::Escape);
    }

    #[test]
    fn test_parse_other_keys() {
        assert_eq!(Key::parse("A"), Key::Other("A".to_string()));
        assert_eq!(Key::parse("-"), Key::Other("-".to_string()));
        assert_eq!(Key::parse("Ctrl-N"), Key::Other("ctrl+n".to_string()));
        assert_eq!(Key::parse("ctrl+n"), Key::Other("ctrl+n".to_string()));
    }

    #[test]
    fn test_default_bindings() {
        let keymap = Keymap::default();
        assert_eq!(keymap.binding_count(), 5);
        assert_eq!(keymap.lookup(&Key::Tab), Some(Action::Complete));
        assert_eq!(keymap.lookup(&Key::Enter), Some(Action::Submit));
        assert_eq!(keymap.lookup(&Key::Other("a".to_string())), None);
    }

    #[test]
    fn test_set_overrides_and_del() {
        let mut keymap = Keymap::default();
        keymap.set(Key::Tab, Action::CursorDown);
        assert_eq!(keymap.lookup(&Key::Tab), Some(Action::CursorDown));
        assert_eq!(keymap.binding_count(), 5);

        assert!(keymap.del(&Key::Tab));
        assert!(!keymap.del(&Key::Tab));
        assert_eq!(keymap.lookup(&Key::Tab), None);
    }

    #[test]
    fn test_apply_overrides() {
        let mut keys = BTreeMap::new();
        keys.insert("ctrl+n".to_string(), "cursor_down".to_string());
        keys.insert("ctrl-p".to_string(), "cursor_up".to_string());
        keys.insert("ctrl+x".to_string(), "explode".to_string());

        let mut keymap = Keymap::default();
        keymap.apply_overrides(&keys);

        assert_eq!(keymap.binding_count(), 7);
        assert_eq!(
            keymap.lookup(&Key::parse("ctrl+n")),
            Some(Action::CursorDown)
        );
        assert_eq!(keymap.lookup(&Key::parse("ctrl+p")), Some(Action::CursorUp));
        assert_eq!(keymap.lookup(&Key::parse("ctrl+x")), None);
    }

    #[test]
    fn test_apply_overrides_can_unbind() {
        let mut keys = BTreeMap::new();
        keys.insert("tab".to_string(), "none".to_string());
        keys.insert("ctrl+q".to_string(), "none".to_string());

        let mut keymap = Keymap::default();
        keymap.apply_overrides(&keys);

        assert_eq!(keymap.binding_count(), 4);
        assert_eq!(keymap.lookup(&Key::Tab), None);
        assert_eq!(keymap.lookup(&Key::Escape), Some(Action::Dismiss));
    }
}
