//! Candidate type for launcher entries.

use std::collections::BTreeSet;

/// A selectable entry: what the user sees plus what gets run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Display name, unique within a mode.
    pub name: String,

    /// Shell command string handed to `sh -c`.
    pub exec: String,
}

impl Candidate {
    /// A command found on PATH. The name is the command.
    pub fn command(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            exec: name.clone(),
            name,
        }
    }

    /// An installed application with its own exec line.
    pub fn application(name: impl Into<String>, exec: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exec: exec.into(),
        }
    }
}

/// Collect names into a strictly ascending list with no duplicates.
///
/// Ordering is plain `String` ordering (case-sensitive, byte-wise), which
/// is what the filter and every mode rely on.
pub fn sorted_unique_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names
        .into_iter()
        .map(Into::into)
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}
