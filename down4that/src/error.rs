//! Error types for down4that.

use thiserror::Error;

/// Errors that can occur while building or managing events.
#[derive(Error, Debug)]
pub enum Down4Error {
    #[error("Invalid date-time '{input}', expected dd-MM-yyyy HH:mm")]
    InvalidDateTime {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Missing required event field: {0}")]
    MissingField(&'static str),

    #[error("Vote index {index} out of range for {len} votes")]
    VoteIndexOutOfRange { index: usize, len: usize },

    #[error("An event named '{0}' already exists at that time and place")]
    DuplicateEvent(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),
}

/// Result type alias for down4that operations.
pub type Down4Result<T> = Result<T, Down4Error>;
