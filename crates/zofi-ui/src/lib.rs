//! Session layer for the zofi launcher.
//!
//! This crate provides everything between a mode and a screen:
//! - Actions and the keymap
//! - Per-session state (input, viewport, frames)
//! - The input controller (key dispatch)
//! - A headless line-driven front-end

pub mod actions;
pub mod controller;
pub mod driver;
pub mod keymap;
pub mod model;

// Re-export commonly used types
pub use actions::{action_from_name, available_actions, Action};
pub use controller::{InputController, KeyOutcome};
pub use driver::{Event, OutputFormat};
pub use keymap::{Key, Keymap};
pub use model::{FilterState, Frame, Row, SessionPhase, Viewport};
pub use zofi_modes::{LauncherMode, Mode};

/// Approximate pixel size of one rendered character.
pub const CHAR_WIDTH: u32 = 8;

/// Approximate pixel height of one row, input line included.
pub const ROW_HEIGHT: u32 = 20;

/// Columns of text that fit in `width` pixels.
pub fn columns_for_width(width: u32) -> usize {
    (width / CHAR_WIDTH).max(1) as usize
}

/// List rows that fit in `height` pixels, below the input line.
pub fn rows_for_height(height: u32) -> usize {
    (height / ROW_HEIGHT).saturating_sub(1).max(1) as usize
}
