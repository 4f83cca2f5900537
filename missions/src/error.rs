//! Error types for the missions library
//!
//! This module defines error types for each layer:
//! - `FetchError`: JSON fetch helper failures (HTTP status, transport, parse)
//! - `MissionError`: mission layer errors (input validation, unexpected shapes)
//! - `ParseError`: text command parsing errors

use thiserror::Error;

/// JSON fetch helper errors
///
/// Every failure of a single GET surfaces through this one channel. The
/// `Display` text keeps the three cases distinguishable by message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Non-2xx status. The body is never parsed.
    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("{0}")]
    Transport(String),

    #[error("Invalid JSON: {0}")]
    Parse(String),
}

impl FetchError {
    /// Status code for HTTP-level failures
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest's top-level message is generic ("error sending request for url");
        // the root cause ("Connection refused", DNS failure) lives in the source chain.
        let mut message = e.to_string();
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        FetchError::Transport(message)
    }
}

/// Mission layer errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MissionError {
    /// A required text input was empty. Rendered as a warning.
    #[error("Please enter a {0}")]
    MissingInput(&'static str),

    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The body parsed as JSON but lacks the fields the mission reads
    #[error("Unexpected response: {0}")]
    UnexpectedShape(String),
}

impl MissionError {
    /// Whether this is a local warning rather than a failure
    pub fn is_warning(&self) -> bool {
        matches!(self, MissionError::MissingInput(_))
    }
}

/// Parse error for mission commands
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}
