//! # AUENLÄND Bot UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Terminal output for the chat session. All writers are generic over
//! `std::io::Write` so the session loop can be exercised against an in-memory
//! buffer in tests and against stdout in the real binary.
//!
//! ## Output Layout
//!
//! ```text
//! ==================================================
//! Welcome to AUENLÄND Bot!
//! ==================================================
//! Type 'help' for available commands or 'exit' to quit.
//!
//! You: hello
//! AUENLÄND Bot: Hello! How can I help you today?
//!
//! ```
//!
use std::io::{self, Write};

/// Width of the `=` rule framing the welcome banner.
const BANNER_WIDTH: usize = 50;

/// Prints the welcome banner shown once at session start.
pub fn write_banner<W: Write>(out: &mut W, bot_name: &str) -> io::Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "Welcome to {bot_name}!")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Type 'help' for available commands or 'exit' to quit.")?;
    writeln!(out)
}

/// Prints one bot reply followed by a blank separator line.
pub fn write_reply<W: Write>(out: &mut W, bot_name: &str, text: &str) -> io::Result<()> {
    writeln!(out, "{bot_name}: {text}")?;
    writeln!(out)
}

/// Prints the farewell used when input ends or is interrupted.
pub fn write_goodbye<W: Write>(out: &mut W, bot_name: &str) -> io::Result<()> {
    writeln!(out, "\n\n{bot_name}: Goodbye!")
}

/// Prints the input prompt without a trailing newline and flushes it.
pub fn write_prompt<W: Write>(out: &mut W, prompt: &str) -> io::Result<()> {
    write!(out, "{prompt}")?;
    out.flush()
}
