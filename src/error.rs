//! Error types for raidscout.
//!
//! Every variant's `Display` text is what the chat user sees, so messages are
//! short and lowercase rather than prefixed with a category.

use thiserror::Error;

/// Main error type for raidscout operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BotError {
    /// Malformed input or wrong number of arguments.
    #[error("could not parse user input")]
    Parse,

    /// The region alias is not in the region table.
    #[error("could not find server region")]
    RegionNotFound,

    /// The expansion alias is not in the expansion table.
    #[error("could not find expansion")]
    ExpansionNotFound,

    /// The expansion exists but the character has no recorded raid activity there.
    #[error("character has no raid progress in this expansion")]
    NoProgress,

    /// Fetch or token acquisition failure, carrying the collaborator's detail.
    #[error("{0}")]
    Transport(String),

    /// Configuration errors (invalid config file, missing credentials, etc.)
    #[error("configuration error: {0}")]
    Config(String),
}

impl BotError {
    /// Creates a transport error with the given message.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns the error category as a string for log output.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Parse => "Parse Error",
            Self::RegionNotFound => "Region Error",
            Self::ExpansionNotFound => "Expansion Error",
            Self::NoProgress => "No Progress",
            Self::Transport(_) => "Transport Error",
            Self::Config(_) => "Configuration Error",
        }
    }
}

/// Result type alias using BotError.
pub type Result<T> = std::result::Result<T, BotError>;
