//! # AUENLÄND Bot Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` and drives the compiled `auenland` binary through
//! `assert_cmd`, feeding the conversation on stdin.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// # Get AUENLÄND Command (`auenland_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `auenland` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn auenland_cmd() -> Command {
    Command::cargo_bin("auenland").expect("Failed to find auenland binary for testing")
}

/// # Isolated Chat Command (`isolated_chat_cmd`)
///
/// Like [`auenland_cmd`], but pinned to a config file inside a fresh temp
/// directory so user or project config files on the test machine cannot
/// change the outcome. `config_toml` is written verbatim.
///
/// The returned `TempDir` must stay alive until the command has run.
pub fn isolated_chat_cmd(config_toml: &str) -> (TempDir, Command) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir for config");
    let config_path = dir.path().join("auenland.toml");
    fs::write(&config_path, config_toml).expect("Failed to write test config");

    let mut cmd = auenland_cmd();
    cmd.arg("--config").arg(&config_path).env_remove("RUST_LOG");
    (dir, cmd)
}
