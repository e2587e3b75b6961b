//! Error types and handling for the trip planner

use thiserror::Error;

/// Main error type for the trip planner
#[derive(Error, Debug)]
pub enum PlannerError {
    /// A user selection is out of range or does not name a known variant
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A lookup against the built-in dataset missed
    #[error("Unknown {kind}: '{key}'")]
    KeyNotFound { kind: &'static str, key: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl PlannerError {
    /// Create a new invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a new dataset lookup error
    pub fn key_not_found<S: Into<String>>(kind: &'static str, key: S) -> Self {
        Self::KeyNotFound {
            kind,
            key: key.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether the user can recover by changing their selections
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, PlannerError::InvalidInput { .. })
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            PlannerError::InvalidInput { message } => {
                format!("Invalid input: {message}")
            }
            PlannerError::KeyNotFound { kind, key } => {
                format!("No {kind} named '{key}' is available.")
            }
            PlannerError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let input_err = PlannerError::invalid_input("days must be at least 1");
        assert!(matches!(input_err, PlannerError::InvalidInput { .. }));
        assert!(input_err.is_recoverable());

        let key_err = PlannerError::key_not_found("city", "Атина");
        assert!(matches!(key_err, PlannerError::KeyNotFound { kind: "city", .. }));
        assert!(!key_err.is_recoverable());
        assert_eq!(key_err.to_string(), "Unknown city: 'Атина'");
    }

    #[test]
    fn test_user_messages() {
        let input_err = PlannerError::invalid_input("travelers must be at least 1");
        assert!(input_err.user_message().contains("travelers must be at least 1"));

        let config_err = PlannerError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let key_err = PlannerError::key_not_found("route", "bg-gr");
        assert_eq!(key_err.user_message(), "No route named 'bg-gr' is available.");
    }
}
