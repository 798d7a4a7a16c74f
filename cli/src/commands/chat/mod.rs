//! # AUENLÄND Bot Chat Command
//!
//! File: cli/src/commands/chat/mod.rs
//!
//! ## Overview
//!
//! The interactive chat session, which is what the `auenland` binary runs.
//! This module wires configuration, the responder, and the right input source
//! together and hands control to the session loop.
//!
//! ## Architecture
//!
//! - `input`: Line sources (terminal line editor or buffered pipe reader)
//! - `session`: The read-reply loop
//!
//! Startup flow:
//! 1. Load configuration (`--config`, or user + project files) and apply CLI overrides
//! 2. Build the responder, seeded if a seed is configured
//! 3. Print the banner unless disabled
//! 4. Pick `TerminalInput` when stdin is a terminal, `PipedInput` otherwise
//! 5. Run the session until farewell, end-of-input or Ctrl-C
//!
//! ## Examples
//!
//! ```bash
//! # Start chatting
//! auenland
//!
//! # Reproducible replies, no banner
//! auenland --seed 42 --no-banner
//!
//! # Scripted conversation
//! printf 'hello\nhistory\nbye\n' | auenland
//! ```
//!
use crate::bot::Responder;
use crate::common::ui;
use crate::core::config;
use crate::core::error::{AuenlandError, Result};
use anyhow::Context;
use clap::Parser;
use std::io::{self, IsTerminal};
use tracing::{debug, info};

mod input;
mod session;

use input::{PipedInput, TerminalInput};
use session::Session;

/// # Chat Arguments (`ChatArgs`)
///
/// Options for the chat session. None are required; every one of them only
/// adjusts the session around the conversation.
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Read settings from this TOML file instead of the user/project config files.
    #[arg(short, long, env = "AUENLAND_CONFIG", value_name = "PATH")]
    pub config: Option<String>,

    /// Seed for response selection, making replies reproducible.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Do not print the welcome banner.
    #[arg(long)]
    pub no_banner: bool,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Runs one chat session on stdin/stdout.
///
/// ## Returns
///
/// * `Ok(())` once the session has ended normally (farewell, end-of-input or Ctrl-C).
/// * `Err` if configuration cannot be loaded, the terminal cannot be set up, or
///   stdout cannot be written.
pub fn handle_chat(args: ChatArgs) -> Result<()> {
    let mut cfg = config::load_config(args.config.as_deref())
        .context("Failed to load AUENLÄND Bot configuration")?;
    cfg.apply_overrides(args.seed, args.no_banner);

    let responder = match cfg.session.seed {
        Some(seed) => {
            debug!("Seeding responder with {}", seed);
            Responder::with_seed(seed)
        }
        None => Responder::new(),
    };

    let mut out = io::stdout();
    if cfg.session.show_banner {
        ui::write_banner(&mut out, responder.name()).map_err(AuenlandError::from)?;
    }

    let mut session = Session::new(responder, cfg.session.prompt);
    let end = if io::stdin().is_terminal() {
        info!("Starting interactive session.");
        let mut input = TerminalInput::new()?;
        session.run(&mut input, &mut out)?
    } else {
        info!("Starting session on piped input.");
        let mut input = PipedInput::new(io::stdin().lock(), io::stdout());
        session.run(&mut input, &mut out)?
    };

    info!(
        "Session ended ({:?}) after {} logged exchange(s).",
        end,
        session.responder().log().len()
    );
    Ok(())
}
