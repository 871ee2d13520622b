//! Errors surfaced by the browser client. Every message is safe to show in an
//! alert: response bodies are trimmed and capped before they get here.

use super::api::DEFAULT_TIMEOUT_MS;
use postboard_core::validate::FormErrors;
use std::fmt;

#[derive(Clone, Debug)]
pub enum AppError {
    /// The browser could not set up request plumbing such as the timeout.
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    /// A response body did not have the expected shape, or a token payload
    /// could not be read.
    Parse(String),
    /// A request body (JSON or multipart) could not be built.
    Serialization(String),
    Storage(String),
    /// No token stored; the caller should send the visitor to the login page.
    Unauthorized,
    /// The API answered `status: false` with a message.
    Rejected(String),
    Invalid(FormErrors),
}

impl AppError {
    /// Classifies a failed fetch. An aborted request is the timeout firing.
    /// The payload carries the detail only; `Display` adds the label.
    pub(crate) fn request_failure(detail: &str) -> Self {
        let lowered = detail.to_lowercase();
        if lowered.contains("timeout") || lowered.contains("abort") {
            Self::Timeout(format!(
                "no response within {} seconds",
                DEFAULT_TIMEOUT_MS / 1000
            ))
        } else {
            Self::Network(detail.trim().to_string())
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(message) => write!(f, "Config error: {message}"),
            Self::Network(message) => write!(f, "Unable to reach the server: {message}"),
            Self::Timeout(message) => write!(f, "The server took too long to answer: {message}"),
            Self::Http { status, message } => write!(f, "Request failed ({status}): {message}"),
            Self::Parse(message) => write!(f, "Unexpected response: {message}"),
            Self::Serialization(message) => write!(f, "Could not prepare the request: {message}"),
            Self::Storage(message) => write!(f, "Storage error: {message}"),
            Self::Unauthorized => f.write_str("Please sign in again."),
            Self::Rejected(message) => f.write_str(message),
            Self::Invalid(errors) => write!(f, "{errors}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<FormErrors> for AppError {
    fn from(errors: FormErrors) -> Self {
        Self::Invalid(errors)
    }
}

impl From<postboard_core::Error> for AppError {
    fn from(err: postboard_core::Error) -> Self {
        match err {
            postboard_core::Error::Storage(message) => Self::Storage(message),
            other => Self::Parse(other.to_string()),
        }
    }
}
