//! Key dispatch for a launcher session.
//!
//! ```text
//! text change ──► filter_choices(mode.choices(), input) ──► selection.rebuild()
//! Up / Down   ──► selection.move_*()  ──► viewport.scroll_to(cursor)
//! Tab         ──► input = selected name (then rebuilt as a text change)
//! Enter       ──► mode.execute(selected or typed text) ──► Launched
//! Escape      ──► Cancelled
//! ```
//!
//! Everything runs on the caller's thread. Once the phase leaves
//! `Editing`, further input is ignored.

use zofi_core::{filter_choices, SelectionModel};
use zofi_modes::Mode;

use crate::actions::Action;
use crate::keymap::{Key, Keymap};
use crate::model::{FilterState, Frame, Row, SessionPhase, Viewport};

/// Whether a key was consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    /// Not bound; the front-end's text entry gets it.
    Unhandled,
}

/// One picker session over a mode.
pub struct InputController<M: Mode> {
    mode: M,
    keymap: Keymap,
    filter: FilterState,
    selection: SelectionModel,
    viewport: Viewport,
    phase: SessionPhase,
}

impl<M: Mode> InputController<M> {
    /// Start a session showing every choice, first one selected.
    pub fn new(mode: M, keymap: Keymap, rows: usize) -> Self {
        let mut controller = Self {
            mode,
            keymap,
            filter: FilterState::default(),
            selection: SelectionModel::new(),
            viewport: Viewport::new(rows),
            phase: SessionPhase::Editing,
        };
        controller.rebuild_list();
        controller
    }

    /// The input text changed.
    pub fn set_input(&mut self, text: impl Into<String>) {
        if self.phase.is_finished() {
            return;
        }
        self.filter.set_text(text.into());
        self.rebuild_list();
    }

    /// Dispatch a key through the keymap.
    pub fn handle_key(&mut self, key: &Key) -> KeyOutcome {
        match self.keymap.lookup(key) {
            Some(action) => {
                self.dispatch(action);
                KeyOutcome::Handled
            }
            None => KeyOutcome::Unhandled,
        }
    }

    /// Run an action directly.
    pub fn dispatch(&mut self, action: Action) {
        if self.phase.is_finished() {
            tracing::debug!("Ignoring {} after session ended", action.name());
            return;
        }

        match action {
            Action::CursorUp => {
                if self.selection.move_up() {
                    self.scroll_to_cursor();
                }
            }
            Action::CursorDown => {
                if self.selection.move_down() {
                    self.scroll_to_cursor();
                }
            }
            Action::Complete => {
                if let Some(name) = self.selection.current().map(str::to_string) {
                    self.set_input(name);
                }
            }
            Action::Submit => self.submit(),
            Action::Dismiss => {
                tracing::debug!("Session cancelled");
                self.phase = SessionPhase::Cancelled;
            }
        }
    }

    fn submit(&mut self) {
        let choice = match self.selection.current() {
            Some(name) => name.to_string(),
            None if self.mode.custom_allowed() => self.filter.input.clone(),
            None => {
                tracing::debug!("Nothing selected and custom input not allowed");
                return;
            }
        };

        self.mode.execute(&choice);
        self.phase = SessionPhase::Launched;
    }

    fn rebuild_list(&mut self) {
        let visible = filter_choices(self.mode.choices(), &self.filter.input);
        self.selection.rebuild(visible);
        self.viewport.reset();
    }

    fn scroll_to_cursor(&mut self) {
        if let Some(cursor) = self.selection.cursor() {
            self.viewport.scroll_to(cursor);
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn input(&self) -> &str {
        &self.filter.input
    }

    /// Edit position within the input, in chars.
    pub fn edit_cursor(&self) -> usize {
        self.filter.edit_cursor
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Snapshot for rendering. Names are cut to `columns` chars.
    pub fn frame(&self, columns: usize) -> Frame {
        let visible = self.selection.visible();
        let cursor = self.selection.cursor();
        let rows = self
            .viewport
            .range(visible.len())
            .map(|index| Row {
                index,
                name: visible[index].chars().take(columns).collect(),
                selected: cursor == Some(index),
            })
            .collect();

        Frame {
            input: self.filter.input.clone(),
            edit_cursor: self.filter.edit_cursor,
            rows,
            total: visible.len(),
            runs_input: cursor.is_none() && self.mode.custom_allowed(),
            phase: self.phase,
        }
    }
}
