//! # AUENLÄND Bot Conversation Core
//!
//! File: cli/src/bot/mod.rs
//!
//! ## Overview
//!
//! Everything that decides what the bot says. The module has no I/O of its
//! own; the session loop in `commands::chat` feeds it lines and prints what
//! comes back.
//!
//! - `catalog`: Static canned responses and the bot's name
//! - `rules`: Ordered keyword rules that turn input into an `Intent`
//! - `history`: The in-memory conversation log
//! - `responder`: Ties the three together behind `Responder::classify`
//!

/// Canned responses grouped by category.
pub mod catalog;
/// In-memory conversation log.
pub mod history;
/// The responder owning the log and random source.
pub mod responder;
/// Input normalization and intent detection.
pub mod rules;

pub use responder::Responder;
