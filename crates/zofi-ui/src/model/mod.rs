//! State model for the zofi launcher UI.
//!
//! This module contains the per-session state and the data a front-end
//! renders. All types are front-end independent for testability.

mod state;

pub use state::{FilterState, Frame, Row, SessionPhase, Viewport};
