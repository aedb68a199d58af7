//! Submission failure kinds surfaced to the UI. Validation errors never
//! reach this type; they stay inside the form controller.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// No response was received (DNS failure, refused connection, offline).
    Network(String),
    /// The server answered with a non-200 status. `message` is the
    /// server-provided `msg` field when present, else a generic fallback.
    Server { status: u16, message: String },
    /// The 200 response body could not be decoded.
    Parse(String),
    /// The request body could not be encoded or the request not built.
    Serialization(String),
}

impl AppError {
    /// Text shown in the error toast. Server messages pass through verbatim;
    /// everything else collapses to a generic, retry-friendly sentence.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Server { message, .. } => message.clone(),
            AppError::Network(_) => "Unable to reach the server. Please try again.".to_string(),
            AppError::Parse(_) | AppError::Serialization(_) => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Server { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => write!(formatter, "Request error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}
