//! # AUENLÄND Bot Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used by the application shell around
//! the chatbot. The conversation itself cannot fail: every string is a valid
//! input and the responder always produces a reply. What can fail is the
//! machinery around it, such as reading a configuration file or talking to
//! the terminal.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `AuenlandError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if prompt.contains('\n') {
//!     return Err(AuenlandError::Config("prompt must be a single line".into()))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the AUENLÄND Bot application.
#[derive(Error, Debug)]
pub enum AuenlandError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file '{path}' not found.")]
    ConfigNotFound { path: String },

    #[error("Input error: {0}")]
    Input(String),

    #[error("Line editor failed: {source}")]
    LineEditor {
        #[from]
        source: rustyline::error::ReadlineError,
    },

    #[error("Failed to write to the terminal: {source}")]
    Output {
        #[from]
        source: std::io::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
