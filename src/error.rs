//! Error types for the Calclex lexer

use thiserror::Error;

/// Lexer errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Numeral run rejected by numeric conversion
    ///
    /// **Triggered by:** A run of digits and `.` that is not a valid number
    /// **Example:** `1.2.3`, a lone `.`, or an integer that overflows `i64`
    #[error("Invalid number '{text}' at position {position}")]
    InvalidNumber {
        /// Raw text of the run
        text: String,
        /// Character offset where the run starts
        position: usize,
    },

    /// Character outside the arithmetic symbol set
    ///
    /// **Triggered by:** Only under [`UnknownCharPolicy::Reject`](crate::UnknownCharPolicy::Reject)
    /// **Example:** `2 % 3`
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter {
        /// The offending character
        ch: char,
        /// Character offset of the offending character
        position: usize,
    },

    /// Scanner configuration could not be loaded
    #[error("Config error: {0}")]
    Config(String),
}

/// Error severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Input cannot be tokenized as written
    Fatal,
    /// Caller may retry with different settings
    Recoverable,
}

impl Error {
    /// Create a config error with a message
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Classify error severity
    pub fn classify(&self) -> ErrorSeverity {
        match self {
            Error::InvalidNumber { .. } => ErrorSeverity::Fatal,
            Error::UnexpectedCharacter { .. } => ErrorSeverity::Recoverable,
            Error::Config(_) => ErrorSeverity::Recoverable,
        }
    }

    /// Character offset the error refers to, if any
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::InvalidNumber { position, .. } | Error::UnexpectedCharacter { position, .. } => {
                Some(*position)
            }
            Error::Config(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::config(err.to_string())
    }
}

/// Result type for Calclex operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::InvalidNumber {
            text: "1.2.3".to_string(),
            position: 4,
        };
        assert_eq!(err.to_string(), "Invalid number '1.2.3' at position 4");

        let err = Error::UnexpectedCharacter { ch: '%', position: 2 };
        assert_eq!(err.to_string(), "Unexpected character '%' at position 2");
    }

    #[test]
    fn test_classify() {
        let err = Error::InvalidNumber {
            text: ".".to_string(),
            position: 0,
        };
        assert_eq!(err.classify(), ErrorSeverity::Fatal);
        assert_eq!(err.position(), Some(0));
        assert_eq!(Error::config("bad").classify(), ErrorSeverity::Recoverable);
        assert_eq!(Error::config("bad").position(), None);
    }
}
