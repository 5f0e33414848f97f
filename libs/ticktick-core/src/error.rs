//! Error types for the TickTick export library

use thiserror::Error;

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Main error type for export operations
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid recurrence rule '{rule}': {reason}")]
    InvalidRecurrence { rule: String, reason: String },

    #[error("Invalid timezone: {name}")]
    InvalidTimezone { name: String },

    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    #[error("API error: {message}")]
    Api { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ExportError {
    /// Create an invalid recurrence error
    pub fn invalid_recurrence(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecurrence {
            rule: rule.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid timezone error
    pub fn invalid_timezone(name: impl Into<String>) -> Self {
        Self::InvalidTimezone { name: name.into() }
    }

    /// Create an authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Create an API error
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_serialization_error_from_serde() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let export_error: ExportError = json_error.into();

        match export_error {
            ExportError::Serialization(_) => (),
            _ => panic!("Expected Serialization error"),
        }
    }

    #[test]
    fn test_io_error_from_std() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let export_error: ExportError = io_error.into();

        match export_error {
            ExportError::Io(_) => (),
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_invalid_recurrence_error() {
        let error = ExportError::invalid_recurrence("RRULE:FREQ=HOURLY", "unrecognized FREQ");

        assert!(error.to_string().contains("Invalid recurrence rule"));
        assert!(error.to_string().contains("RRULE:FREQ=HOURLY"));
        assert!(error.to_string().contains("unrecognized FREQ"));
    }

    #[test]
    fn test_invalid_timezone_error() {
        let error = ExportError::invalid_timezone("Mars/Olympus_Mons");

        assert!(error.to_string().contains("Invalid timezone"));
        assert!(error.to_string().contains("Mars/Olympus_Mons"));
    }

    #[test]
    fn test_authentication_error() {
        let error = ExportError::authentication("bad credentials");

        assert!(error.to_string().contains("Authentication failed"));
        assert!(error.to_string().contains("bad credentials"));
    }

    #[test]
    fn test_api_error() {
        let error = ExportError::api("unexpected response shape");

        assert!(error.to_string().contains("API error"));
        assert!(error.to_string().contains("unexpected response shape"));
    }

    #[test]
    fn test_configuration_error() {
        let error = ExportError::configuration("missing output directory");

        match error {
            ExportError::Configuration { ref message } => {
                assert_eq!(message, "missing output directory");
            }
            _ => panic!("Expected Configuration error"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_error() -> Result<String> {
            Err(ExportError::api("test error"))
        }

        assert!(returns_error().is_err());
    }
}
