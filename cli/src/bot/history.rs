//! # Conversation Log
//!
//! File: cli/src/bot/history.rs
//!
//! ## Overview
//!
//! In-memory, insertion-ordered record of the current session. Entries are
//! only ever appended or dropped all at once; an [`Exchange`] cannot be edited
//! after it is logged. Nothing is written to disk.
//!
//! ## Rendering
//!
//! [`ConversationLog::render`] produces the text shown for the `history`
//! command:
//!
//! ```text
//!
//! --- Conversation History ---
//! [2026-10-18 09:15:02]
//! You: hello
//! Bot: Hi there! What would you like to talk about?
//!
//! ```
//!
use chrono::Local;
use std::fmt::Write as _;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One user input paired with the bot's reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    timestamp: String,
    user_text: String,
    bot_text: String,
}

impl Exchange {
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn user_text(&self) -> &str {
        &self.user_text
    }

    pub fn bot_text(&self) -> &str {
        &self.bot_text
    }
}

#[derive(Debug, Default, Clone)]
pub struct ConversationLog {
    entries: Vec<Exchange>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an exchange stamped with the current local time.
    pub fn append(&mut self, user_text: impl Into<String>, bot_text: impl Into<String>) {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        self.append_at(timestamp, user_text, bot_text);
    }

    /// Records an exchange with a caller-supplied timestamp.
    pub fn append_at(
        &mut self,
        timestamp: impl Into<String>,
        user_text: impl Into<String>,
        bot_text: impl Into<String>,
    ) {
        self.entries.push(Exchange {
            timestamp: timestamp.into(),
            user_text: user_text.into(),
            bot_text: bot_text.into(),
        });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Exchange> {
        self.entries.iter()
    }

    /// Formats the log for display, or `None` when nothing has been logged.
    pub fn render(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let mut out = String::from("\n--- Conversation History ---\n");
        for entry in self.iter() {
            // Writing into a String cannot fail.
            let _ = write!(
                out,
                "[{}]\nYou: {}\nBot: {}\n\n",
                entry.timestamp(),
                entry.user_text(),
                entry.bot_text()
            );
        }
        Some(out)
    }
}
