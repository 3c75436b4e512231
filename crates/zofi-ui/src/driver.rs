//! Headless front-end.
//!
//! Reads one event per line and writes a frame after each one, so the
//! launcher can be driven from a script or another process:
//!
//! ```text
//! text fire      set the input text to "fire"
//! down           a key, by name (up, down, tab, enter, escape, ctrl+n, ...)
//! f              a single character is typed into the input
//! backspace      deletes the last character
//! ```
//!
//! The session ends on enter/escape or when input runs out.

use std::io::{self, BufRead, Write};

use zofi_modes::Mode;

use crate::controller::{InputController, KeyOutcome};
use crate::keymap::Key;
use crate::model::{Frame, SessionPhase};

/// One line of driver input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replace the input text.
    Text(String),
    /// A key press.
    Key(Key),
}

impl Event {
    pub fn parse(line: &str) -> Event {
        let line = line.trim_end_matches(['\r', '\n']);
        if line == "text" {
            return Event::Text(String::new());
        }
        match line.strip_prefix("text ") {
            Some(text) => Event::Text(text.to_string()),
            None => Event::Key(Key::parse(line)),
        }
    }
}

/// How frames are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Plain,
    /// One JSON object per line.
    Json,
}

/// Apply one event, including the text-entry fallback for unbound keys.
pub fn apply_event<M: Mode>(controller: &mut InputController<M>, event: Event) {
    match event {
        Event::Text(text) => controller.set_input(text),
        Event::Key(key) => {
            if controller.handle_key(&key) == KeyOutcome::Unhandled {
                default_text_entry(controller, &key);
            }
        }
    }
}

/// What a text field does with a key nobody bound.
fn default_text_entry<M: Mode>(controller: &mut InputController<M>, key: &Key) {
    let Key::Other(name) = key else {
        return;
    };

    let mut text = controller.input().to_string();
    if name.chars().count() == 1 {
        text.push_str(name);
    } else if name == "space" {
        text.push(' ');
    } else if name == "backspace" {
        if text.pop().is_none() {
            return;
        }
    } else {
        tracing::debug!("Unhandled key '{}'", name);
        return;
    }
    controller.set_input(text);
}

/// Render a frame as text: the input line, then one line per row.
pub fn render_plain(frame: &Frame) -> String {
    let mut out = String::new();
    let prompt = if frame.runs_input { '$' } else { '>' };
    out.push_str(&format!("{} {}\n", prompt, frame.input));

    for row in &frame.rows {
        let marker = if row.selected { '*' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, row.name));
    }

    match frame.phase {
        SessionPhase::Editing => {}
        SessionPhase::Cancelled => out.push_str("[cancelled]\n"),
        SessionPhase::Launched => out.push_str("[launched]\n"),
    }
    out
}

fn write_frame<W: Write>(out: &mut W, frame: &Frame, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Plain => {
            out.write_all(render_plain(frame).as_bytes())?;
            out.write_all(b"\n")?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, frame)?;
            out.write_all(b"\n")?;
        }
    }
    out.flush()
}

/// Drive a session from `input` until it ends or input is exhausted.
pub fn run<M, R, W>(
    controller: &mut InputController<M>,
    input: R,
    out: &mut W,
    format: OutputFormat,
    columns: usize,
) -> io::Result<SessionPhase>
where
    M: Mode,
    R: BufRead,
    W: Write,
{
    write_frame(out, &controller.frame(columns), format)?;

    for line in input.lines() {
        apply_event(controller, Event::parse(&line?));
        write_frame(out, &controller.frame(columns), format)?;

        if controller.phase().is_finished() {
            break;
        }
    }

    Ok(controller.phase())
}
