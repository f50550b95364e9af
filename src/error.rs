//! Error types for Fabula
//!
//! This module defines all error types used throughout the client,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Fabula operations
///
/// This enum encompasses all possible errors that can occur while
/// loading configuration, talking to the story API, and rendering
/// results.
#[derive(Error, Debug)]
pub enum FabulaError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The backend answered with a non-success status
    ///
    /// `message` carries the raw response body text, which the backend
    /// uses for its failure details (e.g. "prompt is empty").
    #[error("Story API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend
        status: u16,
        /// Response body text, used as the user-facing message
        message: String,
    },

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FabulaError {
    /// The text shown in the generation error banner.
    ///
    /// API failures surface the response body verbatim; when the body was
    /// empty (or the failure happened before a response arrived) a generic
    /// description is used instead.
    pub fn banner_text(&self) -> String {
        match self {
            Self::Api { message, .. } if !message.is_empty() => message.clone(),
            Self::Api { status, .. } => format!("story request failed with status {}", status),
            other => other.to_string(),
        }
    }
}

/// Result type alias for Fabula operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = FabulaError::Config("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_api_error_display() {
        let error = FabulaError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(error.to_string(), "Story API error (500): boom");
    }

    #[test]
    fn test_banner_text_uses_response_body() {
        let error = FabulaError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(error.banner_text(), "boom");
    }

    #[test]
    fn test_banner_text_empty_body_falls_back() {
        let error = FabulaError::Api {
            status: 502,
            message: String::new(),
        };
        assert_eq!(error.banner_text(), "story request failed with status 502");
    }

    #[test]
    fn test_banner_text_non_api_error() {
        let error = FabulaError::Config("bad".to_string());
        assert_eq!(error.banner_text(), "Configuration error: bad");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: FabulaError = io_error.into();
        assert!(matches!(error, FabulaError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_str = "{invalid json}";
        let json_error = serde_json::from_str::<serde_json::Value>(json_str).unwrap_err();
        let error: FabulaError = json_error.into();
        assert!(matches!(error, FabulaError::Serialization(_)));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_str = "invalid: : yaml";
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let error: FabulaError = yaml_error.into();
        assert!(matches!(error, FabulaError::Yaml(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FabulaError>();
    }
}
