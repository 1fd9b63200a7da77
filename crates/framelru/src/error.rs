//! Error types for framelru

use std::fmt;

/// Result type alias for framelru operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache construction and use
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Cache constructed with an unusable capacity (must be >= 1)
    InvalidCapacity(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCapacity(cap) => {
                write!(f, "Invalid capacity: {} (must be at least 1)", cap)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::InvalidCapacity(0);
        assert_eq!(err.to_string(), "Invalid capacity: 0 (must be at least 1)");
    }
}
