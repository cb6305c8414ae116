//! Error handling for weather station ingestion.
//!
//! Client errors (malformed parameters) and server errors (storage failures)
//! share one enum so the HTTP layer can classify them in one place.

use thiserror::Error;

/// Comprehensive error types for telemetry ingestion
#[derive(Error, Debug)]
pub enum Error {
    /// A recognized parameter carried a value that is not a valid number
    #[error("Error parsing value for {field}: '{raw_value}' is not a valid {expected}")]
    Decode {
        field: String,
        raw_value: String,
        expected: &'static str,
    },

    /// The station supplied a date string that is not `YYYY-MM-DD HH:MM:SS`
    #[error("invalid date format for dateutc: '{raw_value}' ({reason})")]
    Timestamp { raw_value: String, reason: String },

    /// The time-series backend rejected or never received the point
    #[error("Storage write failed: {message}")]
    StorageWrite {
        message: String,
        status: Option<u16>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a decode error for the parameter that failed
    pub fn decode(
        field: impl Into<String>,
        raw_value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::Decode {
            field: field.into(),
            raw_value: raw_value.into(),
            expected,
        }
    }

    /// Create a timestamp error
    pub fn timestamp(raw_value: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::Timestamp {
            raw_value: raw_value.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a storage write error from an HTTP status returned by the backend
    pub fn storage_status(status: u16, message: impl Into<String>) -> Self {
        Self::StorageWrite {
            message: message.into(),
            status: Some(status),
            source: None,
        }
    }

    /// Create a storage write error from a transport failure
    pub fn storage_write(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::StorageWrite {
            message: message.into(),
            status: None,
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// True when the station sent something we cannot accept (HTTP 400)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::Timestamp { .. })
    }

    /// Name of the offending parameter, when the error is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Decode { field, .. } => Some(field),
            Self::Timestamp { .. } => Some("dateutc"),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_names_field() {
        let err = Error::decode("tempf", "abc", "float");
        assert!(err.is_client_error());
        assert_eq!(err.field(), Some("tempf"));
        assert_eq!(
            err.to_string(),
            "Error parsing value for tempf: 'abc' is not a valid float"
        );
    }

    #[test]
    fn test_timestamp_error_is_client_error() {
        let source = chrono::DateTime::parse_from_rfc3339("garbage").unwrap_err();
        let err = Error::timestamp("garbage", source);
        assert!(err.is_client_error());
        assert_eq!(err.field(), Some("dateutc"));
        assert!(err.to_string().contains("'garbage'"));
    }

    #[test]
    fn test_storage_error_is_server_error() {
        let err = Error::storage_status(503, "service unavailable");
        assert!(!err.is_client_error());
        assert_eq!(err.field(), None);
        assert!(err.to_string().contains("service unavailable"));
    }
}
