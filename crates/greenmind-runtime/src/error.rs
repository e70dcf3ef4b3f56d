use std::fmt;
use std::path::PathBuf;

/// Result type for greenmind-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Configuration file could not be resolved, parsed or written
    Config(String),

    /// Configured table entries failed validation
    Catalog(greenmind_types::Error),

    /// Refusing to overwrite an existing file
    AlreadyExists(PathBuf),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Catalog(err) => write!(f, "Catalog error: {}", err),
            Error::AlreadyExists(path) => {
                write!(f, "File already exists: {}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Catalog(err) => Some(err),
            Error::Config(_) | Error::AlreadyExists(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<greenmind_types::Error> for Error {
    fn from(err: greenmind_types::Error) -> Self {
        Error::Catalog(err)
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
