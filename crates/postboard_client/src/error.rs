use postboard_core::validate::FormErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("not signed in, run `postboard login` first")]
    NotAuthenticated,
    #[error("invalid input: {0}")]
    Invalid(#[from] FormErrors),
    #[error("request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("{0}")]
    Rejected(String),
    #[error("unable to reach the server: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid base url: {0}")]
    Url(#[from] url::ParseError),
    #[error("unsupported url scheme: {0}")]
    Scheme(String),
    #[error(transparent)]
    Session(#[from] postboard_core::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
