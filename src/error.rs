use std::fmt::{self, Display};
use std::io;

/// Provides `OutbreakError` and maps other errors to
/// convert to an `OutbreakError`
#[derive(Debug)]
pub enum OutbreakError {
    IoError(io::Error),
    JsonError(serde_json::Error),
    CSVError(csv::Error),
    /// An operation was called with an argument outside its domain, such as
    /// a zero infection duration.
    InvalidArgument(String),
    /// Supplied simulation parameters failed the validity predicate.
    ConfigurationError(String),
}

impl From<io::Error> for OutbreakError {
    fn from(error: io::Error) -> Self {
        OutbreakError::IoError(error)
    }
}

impl From<serde_json::Error> for OutbreakError {
    fn from(error: serde_json::Error) -> Self {
        OutbreakError::JsonError(error)
    }
}

impl From<csv::Error> for OutbreakError {
    fn from(error: csv::Error) -> Self {
        OutbreakError::CSVError(error)
    }
}

impl std::error::Error for OutbreakError {}

impl Display for OutbreakError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OutbreakError::IoError(error) => write!(f, "IO error: {error}"),
            OutbreakError::JsonError(error) => write!(f, "JSON error: {error}"),
            OutbreakError::CSVError(error) => write!(f, "CSV error: {error}"),
            OutbreakError::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            OutbreakError::ConfigurationError(message) => {
                write!(f, "invalid configuration: {message}")
            }
        }
    }
}
