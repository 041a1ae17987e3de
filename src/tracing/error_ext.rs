//! Error tracing extensions
//!
//! Provides utilities for enriching error handling with tracing context.

use crate::types::SettingsError;
use std::error::Error as StdError;

/// Extension trait for adding tracing context to errors
pub trait ErrorTraceExt {
    /// Log error with its code, client-error status and source chain
    fn trace_error(&self) -> &Self;
}

impl ErrorTraceExt for SettingsError {
    fn trace_error(&self) -> &Self {
        let error_code = self.error_code();

        let mut error_chain = Vec::new();
        let mut current_source = self.source();
        while let Some(source) = current_source {
            error_chain.push(source.to_string());
            current_source = source.source();
        }

        tracing::warn!(
            error = %self,
            error_code = error_code.code(),
            error_code_name = ?error_code,
            is_client_error = self.is_client_error(),
            error_chain = ?error_chain,
            "Settings error"
        );

        self
    }
}

/// Extension trait for Result types
pub trait ResultTraceExt<T> {
    /// Log the error, if any, and pass the result through
    fn trace_context(self) -> Result<T, SettingsError>;
}

impl<T> ResultTraceExt<T> for Result<T, SettingsError> {
    fn trace_context(self) -> Result<T, SettingsError> {
        self.inspect_err(|e| {
            e.trace_error();
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid() -> SettingsError {
        SettingsError::from_partial(serde_json::from_str::<bool>("\"yes\"").unwrap_err())
    }

    #[test]
    fn test_error_trace_ext() {
        let error = invalid();
        // Should log without panic
        assert!(error.trace_error().is_client_error());
    }

    #[test]
    fn test_result_trace_ext() {
        let result: Result<(), SettingsError> = Err(invalid());
        assert!(result.trace_context().is_err());

        let ok: Result<u8, SettingsError> = Ok(1);
        assert_eq!(ok.trace_context().unwrap(), 1);
    }
}
