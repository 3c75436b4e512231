//! Cursor over the visible list.

/// The visible list plus a cursor that is either an index into it or unset.
///
/// The cursor never wraps. Every rebuild puts it on the first row, or
/// unsets it when the new list is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionModel {
    visible: Vec<String>,
    cursor: Option<usize>,
}

impl SelectionModel {
    /// Create an empty model with no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the visible list and reset the cursor.
    pub fn rebuild(&mut self, visible: Vec<String>) {
        self.cursor = if visible.is_empty() { None } else { Some(0) };
        self.visible = visible;
    }

    /// Move the cursor up one row.
    ///
    /// Returns `true` if the cursor moved.
    pub fn move_up(&mut self) -> bool {
        match self.cursor {
            Some(index) if index > 0 => {
                self.cursor = Some(index - 1);
                true
            }
            _ => false,
        }
    }

    /// Move the cursor down one row.
    ///
    /// Returns `true` if the cursor moved.
    pub fn move_down(&mut self) -> bool {
        match self.cursor {
            Some(index) if index + 1 < self.visible.len() => {
                self.cursor = Some(index + 1);
                true
            }
            _ => false,
        }
    }

    /// The display name under the cursor.
    pub fn current(&self) -> Option<&str> {
        self.cursor
            .and_then(|index| self.visible.get(index))
            .map(String::as_str)
    }

    /// The cursor index, if set.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The visible list.
    pub fn visible(&self) -> &[String] {
        &self.visible
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}
