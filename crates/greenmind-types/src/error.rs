use std::fmt;

/// Result type for greenmind-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Model profile has out-of-range fields (id, message)
    InvalidProfile(String, String),

    /// Comparison record has out-of-range fields (name, message)
    InvalidRecord(String, String),

    /// Token approximation ratio is not a finite positive number
    InvalidRatio(f64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidProfile(id, msg) => write!(f, "Invalid model profile '{}': {}", id, msg),
            Error::InvalidRecord(name, msg) => {
                write!(f, "Invalid comparison record '{}': {}", name, msg)
            }
            Error::InvalidRatio(ratio) => {
                write!(f, "Invalid token ratio {}: must be finite and > 0", ratio)
            }
        }
    }
}

impl std::error::Error for Error {}
