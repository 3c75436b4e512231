//! Desktop entry parsing.
//!
//! Only the `[Desktop Entry]` group is read, and only the unlocalised
//! `Type`, `Name`, `Exec` and `Hidden` keys. Localised names such as
//! `Name[de]=` are ignored.

/// The `Type=` key of a desktop entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryType {
    Application,
    Link,
    Directory,
    Other(String),
}

impl EntryType {
    fn parse(value: &str) -> Self {
        match value {
            "Application" => EntryType::Application,
            "Link" => EntryType::Link,
            "Directory" => EntryType::Directory,
            other => EntryType::Other(other.to_string()),
        }
    }
}

/// A parsed desktop entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopEntry {
    pub entry_type: EntryType,
    pub name: String,
    /// Exec line with field codes removed. Empty when the key is absent.
    pub exec: String,
    /// `Hidden=true`: the entry counts as deleted.
    pub hidden: bool,
}

impl DesktopEntry {
    pub fn is_application(&self) -> bool {
        self.entry_type == EntryType::Application
    }
}

/// Parse the contents of a `.desktop` file.
///
/// Returns `None` when `Type` or `Name` is missing.
pub fn parse_desktop_entry(content: &str) -> Option<DesktopEntry> {
    let mut entry_type = None;
    let mut name = None;
    let mut exec = None;
    let mut hidden = false;
    let mut in_desktop_entry = false;

    for line in content.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if trimmed.starts_with('[') {
            in_desktop_entry = trimmed == "[Desktop Entry]";
            continue;
        }

        if !in_desktop_entry {
            continue;
        }

        let Some((key, value)) = trimmed.split_once('=') else {
            continue;
        };
        let value = value.trim();

        match key.trim() {
            "Type" if entry_type.is_none() => entry_type = Some(EntryType::parse(value)),
            "Name" if name.is_none() => name = Some(value.to_string()),
            "Exec" if exec.is_none() => exec = Some(strip_field_codes(value)),
            "Hidden" => hidden = value == "true",
            _ => {}
        }
    }

    Some(DesktopEntry {
        entry_type: entry_type?,
        name: name?,
        exec: exec.unwrap_or_default(),
        hidden,
    })
}

/// Drop standalone field codes (`%u`, `%F`, ...) and unescape `%%`.
fn strip_field_codes(exec: &str) -> String {
    exec.split(' ')
        .filter(|token| !is_field_code(token))
        .map(|token| token.replace("%%", "%"))
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

fn is_field_code(token: &str) -> bool {
    matches!(
        token,
        "%f" | "%F" | "%u" | "%U" | "%d" | "%D" | "%n" | "%N" | "%i" | "%c" | "%k" | "%v" | "%m"
    )
}
