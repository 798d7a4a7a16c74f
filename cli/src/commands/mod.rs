//! # AUENLÄND Bot Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the command handlers reachable from `main.rs`.
//! The binary currently has a single behaviour, the chat session, so there is
//! one command module. Each command module defines its own arguments struct
//! and a handler function that processes those arguments.
//!

/// The interactive chat session: argument parsing, input sources and the read-reply loop.
pub mod chat;
