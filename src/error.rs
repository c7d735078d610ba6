//! Error types for Taskdeck
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Taskdeck operations
///
/// This enum encompasses all possible errors that can occur while loading
/// configuration, talking to the task service, persisting the session,
/// and parsing interactive commands.
#[derive(Error, Debug)]
pub enum TaskdeckError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Task service errors (transport failures, unparseable responses)
    #[error("API error: {0}")]
    Api(String),

    /// Authentication errors (missing or rejected session)
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Session store errors (unreadable or unwritable entries)
    #[error("Session error: {0}")]
    Session(String),

    /// Invalid user input (malformed edit request, unknown status value)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Taskdeck operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = TaskdeckError::Config("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_api_error_display() {
        let error = TaskdeckError::Api("connection refused".to_string());
        assert_eq!(error.to_string(), "API error: connection refused");
    }

    #[test]
    fn test_auth_error_display() {
        let error = TaskdeckError::Auth("not logged in".to_string());
        assert_eq!(error.to_string(), "Authentication error: not logged in");
    }

    #[test]
    fn test_session_error_display() {
        let error = TaskdeckError::Session("unreadable profile".to_string());
        assert_eq!(error.to_string(), "Session error: unreadable profile");
    }

    #[test]
    fn test_invalid_input_error_display() {
        let error = TaskdeckError::InvalidInput("no fields given".to_string());
        assert_eq!(error.to_string(), "Invalid input: no fields given");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: TaskdeckError = io_error.into();
        assert!(matches!(error, TaskdeckError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_str = "{invalid json}";
        let json_error = serde_json::from_str::<serde_json::Value>(json_str).unwrap_err();
        let error: TaskdeckError = json_error.into();
        assert!(matches!(error, TaskdeckError::Serialization(_)));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_str = "invalid: : yaml";
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let error: TaskdeckError = yaml_error.into();
        assert!(matches!(error, TaskdeckError::Yaml(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TaskdeckError>();
    }
}
