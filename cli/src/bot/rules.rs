//! # Input Classification Rules
//!
//! File: cli/src/bot/rules.rs
//!
//! ## Overview
//!
//! Maps a normalized input line to an [`Intent`]. Rules are kept in a single
//! ordered table and evaluated top-down; the first rule whose predicate holds
//! decides the intent, and [`Intent::Chatter`] is the fallback.
//!
//! Commands (`exit`, `help`, `history`, `clear`) need an exact match of the
//! whole line. Conversational rules use plain substring checks, so `"hi"`
//! also fires inside `"this"` or `"nothing"`.
//!
use tracing::trace;

/// What the user is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Farewell,
    Help,
    ShowHistory,
    ClearHistory,
    Greeting,
    Thanks,
    AskName,
    HowAreYou,
    Capabilities,
    Chatter,
}

const TERMINATION_WORDS: &[&str] = &["exit", "quit", "bye", "goodbye"];
const HELP_WORDS: &[&str] = &["help", "?", "help me"];
const GREETING_KEYWORDS: &[&str] = &["hello", "hi", "hey", "greetings"];
const THANKS_KEYWORDS: &[&str] = &["thank", "thanks", "thx"];
const CAPABILITY_PHRASES: &[&str] = &["what can you do", "what do you do"];

struct Rule {
    intent: Intent,
    matches: fn(&str) -> bool,
}

const RULES: &[Rule] = &[
    Rule {
        intent: Intent::Farewell,
        matches: |s| is_one_of(s, TERMINATION_WORDS),
    },
    Rule {
        intent: Intent::Help,
        matches: |s| is_one_of(s, HELP_WORDS),
    },
    Rule {
        intent: Intent::ShowHistory,
        matches: |s| s == "history",
    },
    Rule {
        intent: Intent::ClearHistory,
        matches: |s| s == "clear",
    },
    Rule {
        intent: Intent::Greeting,
        matches: |s| contains_any(s, GREETING_KEYWORDS),
    },
    Rule {
        intent: Intent::Thanks,
        matches: |s| contains_any(s, THANKS_KEYWORDS),
    },
    Rule {
        intent: Intent::AskName,
        matches: |s| s.contains("name") && (s.contains("your") || s.contains("you")),
    },
    Rule {
        intent: Intent::HowAreYou,
        matches: |s| s.contains("how are you"),
    },
    Rule {
        intent: Intent::Capabilities,
        matches: |s| contains_any(s, CAPABILITY_PHRASES),
    },
];

fn is_one_of(input: &str, words: &[&str]) -> bool {
    words.iter().any(|word| *word == input)
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Trims and lowercases raw user input.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Classifies an already normalized line.
pub fn detect(normalized: &str) -> Intent {
    let intent = RULES
        .iter()
        .find(|rule| (rule.matches)(normalized))
        .map_or(Intent::Chatter, |rule| rule.intent);
    trace!("Classified {:?} as {:?}", normalized, intent);
    intent
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(raw: &str) -> Intent {
        detect(&normalize(raw))
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  HeLLo There \t"), "hello there");
        assert_eq!(normalize("AUENLÄND"), "auenländ");
    }

    #[test]
    fn termination_words_need_exact_match() {
        for word in ["exit", "QUIT", " bye ", "Goodbye"] {
            assert_eq!(classify(word), Intent::Farewell, "{word}");
        }
        // Not an exact match, and "bye" is no conversational keyword.
        assert_eq!(classify("bye for now"), Intent::Chatter);
    }

    #[test]
    fn help_words() {
        assert_eq!(classify("help"), Intent::Help);
        assert_eq!(classify("?"), Intent::Help);
        assert_eq!(classify("Help Me"), Intent::Help);
        assert_eq!(classify("help me please"), Intent::Chatter);
    }

    #[test]
    fn history_commands() {
        assert_eq!(classify("history"), Intent::ShowHistory);
        assert_eq!(classify(" CLEAR "), Intent::ClearHistory);
        assert_eq!(classify("clear all"), Intent::Chatter);
    }

    #[test]
    fn greeting_substring_matches() {
        assert_eq!(classify("Hello there"), Intent::Greeting);
        assert_eq!(classify("hey you"), Intent::Greeting);
        // Unscoped substring: "hi" inside "this".
        assert_eq!(classify("is this thing on"), Intent::Greeting);
    }

    #[test]
    fn greeting_wins_over_later_rules() {
        // Contains both "hi" and "thank"; greeting is checked first.
        assert_eq!(classify("hi, thank you"), Intent::Greeting);
        assert_eq!(classify("hello, what is your name"), Intent::Greeting);
    }

    #[test]
    fn thanks_keywords() {
        assert_eq!(classify("thanks"), Intent::Thanks);
        assert_eq!(classify("Thank you"), Intent::Thanks);
        assert_eq!(classify("thx a lot"), Intent::Thanks);
    }

    #[test]
    fn name_question() {
        assert_eq!(classify("what is your name"), Intent::AskName);
        assert_eq!(classify("do you have a name"), Intent::AskName);
        assert_eq!(classify("name a color"), Intent::Chatter);
    }

    #[test]
    fn how_are_you() {
        assert_eq!(classify("how are you"), Intent::HowAreYou);
        assert_eq!(classify("So, how are you doing?"), Intent::HowAreYou);
    }

    #[test]
    fn capabilities() {
        assert_eq!(classify("what can you do"), Intent::Capabilities);
        assert_eq!(classify("So what do you do?"), Intent::Capabilities);
    }

    #[test]
    fn fallback() {
        assert_eq!(classify("tell me a joke"), Intent::Chatter);
        assert_eq!(classify(""), Intent::Chatter);
    }
}
