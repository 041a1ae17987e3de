//! Error types for the settings manager

use thiserror::Error;

/// Error codes for settings failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Input was not valid JSON
    ParseError = 1,
    /// Partial update had the wrong shape for a known field
    InvalidPartial = 2,
    /// Settings could not be serialized
    SerializationFailed = 3,
}

impl ErrorCode {
    /// Get the error code value
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Main error type for settings operations
///
/// Only the JSON boundary can fail. Applying an already-typed partial
/// update never does.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The partial update was not valid JSON at all
    #[error("Malformed settings JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The partial update parsed but a known field had the wrong type
    #[error("Invalid partial settings: {0}")]
    InvalidPartial(#[source] serde_json::Error),

    /// The current settings could not be serialized
    #[error("Failed to serialize settings: {0}")]
    Serialization(#[source] serde_json::Error),
}

/// Result type for settings operations
pub type Result<T> = std::result::Result<T, SettingsError>;

impl SettingsError {
    /// Classify a `serde_json` error raised while reading a partial update
    pub fn from_partial(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_eof() {
            SettingsError::Malformed(err)
        } else {
            SettingsError::InvalidPartial(err)
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> ErrorCode {
        match self {
            SettingsError::Malformed(_) => ErrorCode::ParseError,
            SettingsError::InvalidPartial(_) => ErrorCode::InvalidPartial,
            SettingsError::Serialization(_) => ErrorCode::SerializationFailed,
        }
    }

    /// Check if this error was caused by caller input
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SettingsError::Malformed(_) | SettingsError::InvalidPartial(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_err(input: &str) -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>(input).unwrap_err()
    }

    #[test]
    fn test_from_partial_syntax_is_malformed() {
        let err = SettingsError::from_partial(parse_err("{\"connections\":"));
        assert!(matches!(err, SettingsError::Malformed(_)));
        assert_eq!(err.error_code(), ErrorCode::ParseError);
        assert_eq!(err.error_code().code(), 1);
    }

    #[test]
    fn test_from_partial_type_mismatch_is_invalid() {
        let err = serde_json::from_str::<Vec<u8>>("{\"a\": 1}").unwrap_err();
        let err = SettingsError::from_partial(err);
        assert!(matches!(err, SettingsError::InvalidPartial(_)));
        assert_eq!(err.error_code(), ErrorCode::InvalidPartial);
        assert!(err.to_string().starts_with("Invalid partial settings:"));
    }

    #[test]
    fn test_is_client_error() {
        assert!(SettingsError::Malformed(parse_err("{")).is_client_error());
        assert!(!SettingsError::Serialization(parse_err("{")).is_client_error());
    }
}
