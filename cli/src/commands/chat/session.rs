//! # Chat Session Loop
//!
//! File: cli/src/commands/chat/session.rs
//!
//! ## Overview
//!
//! Drives one conversation: read a line, ask the [`Responder`], print the
//! reply, log the exchange. The loop ends when
//! - the responder asks to terminate (a farewell command), or
//! - the input source closes or is interrupted, in which case a goodbye line
//!   is printed.
//!
//! Blank lines are skipped without a reply. The exchange that ends the
//! session is printed but never logged.
//!
use super::input::{InputEvent, LineSource};
use crate::bot::Responder;
use crate::common::ui;
use crate::core::error::{AuenlandError, Result};
use std::io::Write;
use tracing::{debug, info};

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user said goodbye.
    Farewell,
    /// Input reached end-of-stream.
    InputClosed,
    /// The user pressed Ctrl-C.
    Interrupted,
}

pub struct Session {
    responder: Responder,
    prompt: String,
}

impl Session {
    pub fn new(responder: Responder, prompt: impl Into<String>) -> Self {
        Self {
            responder,
            prompt: prompt.into(),
        }
    }

    pub fn responder(&self) -> &Responder {
        &self.responder
    }

    /// Runs the read-reply loop until the conversation ends.
    pub fn run<S, W>(&mut self, input: &mut S, out: &mut W) -> Result<SessionEnd>
    where
        S: LineSource,
        W: Write,
    {
        let name = self.responder.name();
        loop {
            let line = match input.read_line(&self.prompt)? {
                InputEvent::Line(line) => line,
                InputEvent::Closed => {
                    info!("Input closed, ending session.");
                    ui::write_goodbye(out, name).map_err(AuenlandError::from)?;
                    return Ok(SessionEnd::InputClosed);
                }
                InputEvent::Interrupted => {
                    info!("Interrupted, ending session.");
                    ui::write_goodbye(out, name).map_err(AuenlandError::from)?;
                    return Ok(SessionEnd::Interrupted);
                }
            };

            let user_text = line.trim();
            if user_text.is_empty() {
                continue;
            }

            let reply = self.responder.classify(user_text);
            ui::write_reply(out, name, &reply.text).map_err(AuenlandError::from)?;

            if reply.terminate {
                info!("Farewell received, ending session.");
                return Ok(SessionEnd::Farewell);
            }
            self.responder.record(user_text, &reply.text);
            debug!("Logged exchange #{}", self.responder.log().len());
        }
    }
}
