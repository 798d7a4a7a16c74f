//! # Chat Input Sources
//!
//! File: cli/src/commands/chat/input.rs
//!
//! ## Overview
//!
//! The session loop reads lines through the [`LineSource`] trait so it does
//! not care where they come from:
//!
//! - [`TerminalInput`]: a `rustyline` editor, used when stdin is a terminal.
//!   Ctrl-C and Ctrl-D come back as [`InputEvent::Interrupted`] and
//!   [`InputEvent::Closed`] instead of killing the process.
//! - [`PipedInput`]: any `BufRead`, used for pipes, files and tests. It echoes
//!   the prompt to its writer so a piped transcript matches an interactive one.
//!   Bytes that are not valid UTF-8 are replaced rather than ending the session.
//!
use crate::common::ui;
use crate::core::error::{AuenlandError, Result};
use anyhow::Context;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::borrow::Cow;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// What a single read produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A line of text, without its line terminator.
    Line(String),
    /// End of input (Ctrl-D or end of stream).
    Closed,
    /// The user pressed Ctrl-C.
    Interrupted,
}

/// A source of user input lines.
pub trait LineSource {
    /// Shows `prompt` and blocks until the next event.
    fn read_line(&mut self, prompt: &str) -> Result<InputEvent>;
}

pub struct TerminalInput {
    editor: DefaultEditor,
}

impl TerminalInput {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()
            .map_err(AuenlandError::from)
            .context("Failed to initialise the terminal line editor")?;
        Ok(Self { editor })
    }
}

impl LineSource for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> Result<InputEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        debug!("Could not add line to editor history: {}", e);
                    }
                }
                Ok(InputEvent::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(InputEvent::Interrupted),
            Err(ReadlineError::Eof) => Ok(InputEvent::Closed),
            Err(e) => Err(AuenlandError::from(e)).context("Failed to read from terminal"),
        }
    }
}

pub struct PipedInput<R, W> {
    reader: R,
    echo: W,
}

impl<R: BufRead, W: Write> PipedInput<R, W> {
    /// Reads lines from `reader`, writing each prompt to `echo`.
    pub fn new(reader: R, echo: W) -> Self {
        Self { reader, echo }
    }
}

impl<R: BufRead, W: Write> LineSource for PipedInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<InputEvent> {
        ui::write_prompt(&mut self.echo, prompt).map_err(AuenlandError::from)?;

        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => Ok(InputEvent::Closed),
            Ok(_) => {
                let bytes = buf.strip_suffix(b"\n").unwrap_or(buf.as_slice());
                let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
                let line = String::from_utf8_lossy(bytes);
                if let Cow::Owned(_) = line {
                    warn!("Input line is not valid UTF-8; replacing the invalid bytes.");
                }
                Ok(InputEvent::Line(line.into_owned()))
            }
            Err(e) => Err(AuenlandError::Input(e.to_string()).into()),
        }
    }
}
