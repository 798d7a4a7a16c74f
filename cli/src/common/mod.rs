//! # AUENLÄND Bot Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared helpers that are not part of the conversation logic itself. At the
//! moment this is only terminal output; the layout of banner, prompt and
//! replies lives in `ui` so the session loop stays focused on control flow.
//!

/// Terminal output helpers (banner, prompt, replies, goodbye line).
pub mod ui;
