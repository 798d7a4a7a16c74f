//! # Responder
//!
//! File: cli/src/bot/responder.rs
//!
//! ## Overview
//!
//! The [`Responder`] turns one line of user input into a [`Reply`]. It owns
//! the conversation log and the random source used to pick canned responses.
//!
//! ## Architecture
//!
//! 1. The input is normalized and classified by [`rules::detect`].
//! 2. The resulting [`Intent`] selects either a random response from a
//!    [`Category`] or a fixed text from the catalog.
//! 3. Only the `clear` command touches the log from inside [`Responder::classify`];
//!    recording an exchange is the caller's job via [`Responder::record`], which
//!    keeps terminating exchanges out of the log.
//!
//! ## Examples
//!
//! ```rust
//! let mut bot = Responder::with_seed(42);
//! let reply = bot.classify("hello");
//! if !reply.terminate {
//!     bot.record("hello", &reply.text);
//! }
//! ```
//!
use super::catalog::{self, Category};
use super::history::ConversationLog;
use super::rules::{self, Intent};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// The bot's answer to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// When set, the session should end after showing `text`.
    pub terminate: bool,
}

impl Reply {
    fn keep_going(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            terminate: false,
        }
    }

    fn end(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            terminate: true,
        }
    }
}

pub struct Responder {
    log: ConversationLog,
    rng: StdRng,
}

impl Responder {
    /// Creates a responder whose random choices are seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a responder with reproducible random choices.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            log: ConversationLog::new(),
            rng,
        }
    }

    pub fn name(&self) -> &'static str {
        catalog::BOT_NAME
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    /// Maps an input line to a reply.
    pub fn classify(&mut self, input: &str) -> Reply {
        let normalized = rules::normalize(input);
        let intent = rules::detect(&normalized);
        debug!("Input matched intent {:?}", intent);

        match intent {
            Intent::Farewell => Reply::end(self.pick(Category::Farewell)),
            Intent::Help => Reply::keep_going(self.pick(Category::Help)),
            Intent::ShowHistory => match self.log.render() {
                Some(rendered) => Reply::keep_going(rendered),
                None => Reply::keep_going(catalog::NO_HISTORY),
            },
            Intent::ClearHistory => {
                debug!("Clearing {} logged exchange(s)", self.log.len());
                self.log.clear();
                Reply::keep_going(catalog::HISTORY_CLEARED)
            }
            Intent::Greeting => Reply::keep_going(self.pick(Category::Greeting)),
            Intent::Thanks => Reply::keep_going(self.pick(Category::Thanks)),
            Intent::AskName => Reply::keep_going(catalog::name_reply()),
            Intent::HowAreYou => Reply::keep_going(catalog::HOW_ARE_YOU),
            Intent::Capabilities => Reply::keep_going(catalog::CAPABILITIES),
            Intent::Chatter => Reply::keep_going(self.pick(Category::Default)),
        }
    }

    fn pick(&mut self, category: Category) -> &'static str {
        let response = category.pick(&mut self.rng);
        debug!("Picked {:?} from the {} category", response, category);
        response
    }

    /// Appends a non-terminal exchange to the conversation log.
    pub fn record(&mut self, user_text: &str, bot_text: &str) {
        self.log.append(user_text, bot_text);
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bot() -> Responder {
        Responder::with_seed(2026)
    }

    #[test]
    fn termination_words_end_the_session() {
        let mut bot = bot();
        for word in ["exit", "quit", "bye", "goodbye"] {
            let reply = bot.classify(word);
            assert!(reply.terminate, "{word} should terminate");
            assert!(!reply.text.is_empty());
            assert!(Category::Farewell.contains(&reply.text));
        }
    }

    #[test]
    fn help_mentions_help_and_history() {
        let mut bot = bot();
        for word in ["help", "?", "help me"] {
            let reply = bot.classify(word);
            assert!(!reply.terminate);
            let lower = reply.text.to_lowercase();
            assert!(lower.contains("help"));
            assert!(lower.contains("history"));
            assert!(Category::Help.contains(&reply.text));
            assert_eq!(reply.text, catalog::HELP_TEXT);
        }
    }

    #[test]
    fn history_when_empty() {
        let mut bot = bot();
        let reply = bot.classify("history");
        assert_eq!(reply, Reply::keep_going("No conversation history yet."));
    }

    #[test]
    fn history_lists_recorded_exchange() {
        let mut bot = bot();
        bot.record("hello", "Hi there! What would you like to talk about?");

        let reply = bot.classify("History");
        assert!(!reply.terminate);
        assert!(reply.text.contains("You: hello"));
        assert!(reply
            .text
            .contains("Bot: Hi there! What would you like to talk about?"));
        // Viewing the history is not itself logged.
        assert_eq!(bot.log().len(), 1);
    }

    #[test]
    fn clear_empties_log() {
        let mut bot = bot();
        bot.record("hello", "Hello! How can I help you today?");
        bot.record("thanks", "My pleasure!");

        let reply = bot.classify("clear");
        assert!(!reply.terminate);
        assert_eq!(reply.text, "Conversation history cleared.");
        assert!(bot.log().is_empty());
    }

    #[test]
    fn asks_name() {
        let mut bot = bot();
        let reply = bot.classify("what is your name");
        assert!(!reply.terminate);
        assert!(reply.text.contains("AUENLÄND Bot"));
    }

    #[test]
    fn thanks_replies() {
        let mut bot = bot();
        for input in ["thanks", "thank you", "Thank you so much"] {
            let reply = bot.classify(input);
            assert!(!reply.terminate);
            assert!(Category::Thanks.contains(&reply.text), "{input}");
        }
    }

    #[test]
    fn greeting_replies() {
        let mut bot = bot();
        let reply = bot.classify("  HELLO ");
        assert!(!reply.terminate);
        assert!(Category::Greeting.contains(&reply.text));
    }

    #[test]
    fn fixed_replies() {
        let mut bot = bot();
        assert_eq!(
            bot.classify("how are you").text,
            "I'm doing great, thank you for asking! How are you?"
        );
        assert_eq!(bot.classify("what can you do").text, catalog::CAPABILITIES);
    }

    #[test]
    fn fallback_uses_default_category() {
        let mut bot = bot();
        let reply = bot.classify("tell me a joke");
        assert!(!reply.terminate);
        assert!(Category::Default.contains(&reply.text));
    }

    #[test]
    fn classify_never_records() {
        let mut bot = bot();
        bot.classify("hello");
        bot.classify("what is your name");
        bot.classify("exit");
        assert!(bot.log().is_empty());
    }

    #[test]
    fn same_seed_same_choices() {
        let mut a = Responder::with_seed(9);
        let mut b = Responder::with_seed(9);
        for input in ["hello", "random words", "thanks", "bye", "hey", "hmm"] {
            assert_eq!(a.classify(input), b.classify(input));
        }
    }

    #[test]
    fn record_round_trips_through_history() {
        let mut bot = bot();
        let user = "Ist das Auenland schön?";
        let bot_text = "That's interesting! Tell me more.";
        bot.record(user, bot_text);

        let rendered = bot.classify("history").text;
        assert!(rendered.contains(&format!("You: {user}\nBot: {bot_text}\n")));
    }
}
