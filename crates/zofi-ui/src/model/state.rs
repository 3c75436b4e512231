//! Per-session state for the launcher.
//!
//! Nothing here outlives a session. The visible list itself lives in
//! `zofi_core::SelectionModel`, next to the cursor that indexes it.

use std::ops::Range;

use serde::Serialize;

// =============================================================================
// Session Phase
// =============================================================================

/// Where the session is. Only `Editing` accepts input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    /// Picker open, taking keys.
    #[default]
    Editing,
    /// Closed by the user, nothing run.
    Cancelled,
    /// Closed after handing a command to the mode.
    Launched,
}

impl SessionPhase {
    pub fn is_finished(&self) -> bool {
        !matches!(self, SessionPhase::Editing)
    }
}

// =============================================================================
// Filter State
// =============================================================================

/// The text field: input text and the edit cursor inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Current input text.
    pub input: String,

    /// Edit position, in chars, within `input`.
    pub edit_cursor: usize,
}

impl FilterState {
    /// Replace the text and put the edit cursor at the end.
    pub fn set_text(&mut self, text: String) {
        self.edit_cursor = text.chars().count();
        self.input = text;
    }
}

// =============================================================================
// Viewport
// =============================================================================

/// The window of rows a front-end can show at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Number of rows that fit.
    pub rows: usize,

    /// Index of the first shown row.
    pub offset: usize,
}

impl Viewport {
    pub fn new(rows: usize) -> Self {
        Self {
            rows: rows.max(1),
            offset: 0,
        }
    }

    /// Back to the top, used whenever the list is rebuilt.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Scroll the minimum amount needed to show `index`.
    pub fn scroll_to(&mut self, index: usize) {
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + self.rows {
            self.offset = index + 1 - self.rows;
        }
    }

    /// Rows to show for a list of `len` items.
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = self.offset.min(len);
        start..(start + self.rows).min(len)
    }
}

// =============================================================================
// Frame
// =============================================================================

/// Everything a front-end needs to draw the picker once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub input: String,
    pub edit_cursor: usize,

    /// Rows inside the viewport.
    pub rows: Vec<Row>,

    /// Size of the whole visible list.
    pub total: usize,

    /// Enter would run the typed text (no selection, mode allows it).
    pub runs_input: bool,

    pub phase: SessionPhase,
}

/// One shown row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    /// Index into the visible list.
    pub index: usize,
    pub name: String,
    pub selected: bool,
}

// =============================================================================
// Tests
// =============================================================================
