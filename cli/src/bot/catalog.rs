//! # Response Catalog
//!
//! File: cli/src/bot/catalog.rs
//!
//! ## Overview
//!
//! Static canned responses, grouped by [`Category`]. Every category holds at
//! least one candidate; the responder picks one uniformly at random per reply.
//! The fixed (non-random) replies for the name, mood and capability questions
//! also live here so all user-visible bot text is in one place.
//!
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// The bot's fixed display name.
pub const BOT_NAME: &str = "AUENLÄND Bot";

/// A named bucket of interchangeable canned responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Greeting,
    Farewell,
    Thanks,
    Help,
    Default,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::Greeting => "greeting",
            Category::Farewell => "farewell",
            Category::Thanks => "thanks",
            Category::Help => "help",
            Category::Default => "default",
        }
    }

    /// The candidate responses for this category.
    pub fn candidates(self) -> &'static [&'static str] {
        match self {
            Category::Greeting => GREETINGS,
            Category::Farewell => FAREWELLS,
            Category::Thanks => THANKS,
            Category::Help => &[HELP_TEXT],
            Category::Default => DEFAULTS,
        }
    }

    /// Picks one candidate uniformly at random.
    pub fn pick<R: Rng + ?Sized>(self, rng: &mut R) -> &'static str {
        self.candidates().choose(rng).copied().unwrap_or_default()
    }

    #[cfg(test)]
    pub fn contains(self, response: &str) -> bool {
        self.candidates().iter().any(|candidate| *candidate == response)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const GREETINGS: &[&str] = &[
    "Hello! How can I help you today?",
    "Hi there! What would you like to talk about?",
    "Greetings! I'm here to chat with you.",
];

const FAREWELLS: &[&str] = &[
    "Goodbye! Have a great day!",
    "See you later! Take care!",
    "Farewell! It was nice chatting with you!",
];

const THANKS: &[&str] = &["You're welcome!", "My pleasure!", "Happy to help!"];

const DEFAULTS: &[&str] = &[
    "That's interesting! Tell me more.",
    "I see. What else would you like to discuss?",
    "Thanks for sharing that with me!",
    "Fascinating! Can you elaborate?",
];

pub const HELP_TEXT: &str = "I'm AUENLÄND Bot, here to chat with you!\n\
You can ask me questions, have a conversation, or use these commands:\n  \
- 'help' - Show this help message\n  \
- 'history' - Show conversation history\n  \
- 'clear' - Clear conversation history\n  \
- 'exit' or 'quit' - End the conversation";

pub const NO_HISTORY: &str = "No conversation history yet.";

pub const HISTORY_CLEARED: &str = "Conversation history cleared.";

pub const HOW_ARE_YOU: &str = "I'm doing great, thank you for asking! How are you?";

pub const CAPABILITIES: &str = "I'm a chatbot designed to have conversations with you. \
I can respond to your messages, remember our conversation, and answer simple questions. \
Type 'help' to see available commands.";

/// Reply to "what is your name" style questions.
pub fn name_reply() -> String {
    format!("My name is {}. What's yours?", BOT_NAME)
}
