use std::fmt;

/// Result type for postboard-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// An identifier could not be parsed, or parsed to the reserved zero id
    InvalidId(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidId(raw) => write!(f, "Invalid identifier: {}", raw),
        }
    }
}

impl std::error::Error for Error {}
