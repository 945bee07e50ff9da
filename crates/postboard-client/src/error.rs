use std::fmt;

/// Result type for postboard-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the client layer
#[derive(Debug)]
pub enum Error {
    /// Transport-level failure (connect, timeout, non-2xx status)
    Http(reqwest::Error),

    /// Response body did not decode to the expected shape
    Decode(reqwest::Error),

    /// Client configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Decode(err) => write!(f, "Decode error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) | Error::Decode(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}
