//! # AUENLÄND Bot Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the AUENLÄND Bot CLI.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Handing control to the chat session
//!
//! ## Architecture
//!
//! - `bot`: The conversation core (rules, canned responses, conversation log)
//! - `commands`: The chat command, its input sources and session loop
//! - `common`: Terminal output helpers
//! - `core`: Configuration and error types
//!
//! Logs go to stderr so stdout carries nothing but the conversation.
//!
//! ## Examples
//!
//! ```bash
//! # Start a conversation
//! auenland
//!
//! # Same, with debug logging
//! auenland -vv
//! ```
//!
//! Processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level (or `RUST_LOG`)
//! 3. Run the chat session
//! 4. Format and display any errors that occur
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod bot; // Conversation logic (rules, catalog, history, responder)
mod commands; // The chat command and its session loop
mod common; // Shared output helpers
mod core; // Core infrastructure (errors, config)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "auenland",
    about = "AUENLÄND Bot: a friendly keyword chatbot for your terminal",
    long_about = "Chat with AUENLÄND Bot. Type 'help' inside the session for commands,\n\
                  'history' to review the conversation and 'exit' to leave.",
    version
)]
struct Cli {
    #[command(flatten)]
    chat: commands::chat::ChatArgs,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = commands::chat::handle_chat(cli.chat) {
        tracing::error!("Chat session failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
