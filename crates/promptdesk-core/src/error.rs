//! Unified error types for the promptdesk toolkit.
//!
//! The template functions themselves (validation, caret insertion, storage
//! encoding) are total and never fail. Errors only come from the edges:
//! configuration files, vocabulary lookup, guarded editing and plan drafts.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur during promptdesk operations.
#[derive(Error, Debug)]
pub enum PromptDeskError {
    // --- Configuration ---

    /// The configuration file (`promptdesk.config.json`) was not found or could not be read.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- Vocabulary ---

    /// The requested vocabulary is neither built in nor defined in the config.
    #[error("unknown vocabulary: {0} (built-in: coaching, closing-mode)")]
    UnknownVocabulary(String),

    /// A custom vocabulary is malformed (empty, duplicate entries, bad placeholder syntax).
    #[error("invalid vocabulary '{name}': {reason}")]
    InvalidVocabulary { name: String, reason: String },

    // --- Editing ---

    /// The token is not part of the vocabulary the template is edited against.
    #[error("placeholder {token} is not allowed in '{vocabulary}' templates")]
    PlaceholderNotAllowed { token: String, vocabulary: String },

    /// The token is already present and each placeholder may be used only once.
    #[error("placeholder {0} is already used")]
    PlaceholderAlreadyUsed(String),

    // --- Plans ---

    /// A subscription plan draft failed field validation.
    #[error("invalid plan: {0}")]
    InvalidPlan(String),

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, PromptDeskError>`.
pub type Result<T> = std::result::Result<T, PromptDeskError>;
