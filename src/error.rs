use serde::Serialize;
use std::fmt;

/// Application error types. The resolver itself never fails; everything that
/// feeds it (network, settings, parsing) reports through this enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    /// Errors related to the local settings file
    Settings(String),
    /// Errors related to network operations
    Network(String),
    /// The timings API answered, but not with usable data
    Provider(String),
    /// Errors related to city geolocation
    Location(String),
    /// Errors related to data validation
    Validation(String),
    /// Errors related to desktop notifications
    Notification(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Settings(msg) => write!(f, "Settings error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Provider(msg) => write!(f, "Provider error: {}", msg),
            AppError::Location(msg) => write!(f, "Location error: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Notification(msg) => write!(f, "Notification error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ureq::Error> for AppError {
    fn from(error: ureq::Error) -> Self {
        match error {
            ureq::Error::Status(code, _) => AppError::Network(format!("HTTP status {}", code)),
            ureq::Error::Transport(t) => AppError::Network(t.to_string()),
        }
    }
}

// Convenience constructors
impl AppError {
    pub fn settings<S: Into<String>>(msg: S) -> Self {
        AppError::Settings(msg.into())
    }

    pub fn network<S: Into<String>>(msg: S) -> Self {
        AppError::Network(msg.into())
    }

    pub fn provider<S: Into<String>>(msg: S) -> Self {
        AppError::Provider(msg.into())
    }

    pub fn location<S: Into<String>>(msg: S) -> Self {
        AppError::Location(msg.into())
    }

    pub fn validation<S: Into<String>>(msg: S) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn notification<S: Into<String>>(msg: S) -> Self {
        AppError::Notification(msg.into())
    }
}

/// Result type alias used across the crate
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::settings("file not found");
        assert_eq!(err.to_string(), "Settings error: file not found");
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(AppError::provider("code 400"));
        assert!(err.to_string().contains("Provider error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(AppError::network("x"), AppError::Network(_)));
        assert!(matches!(AppError::location("x"), AppError::Location(_)));
        assert!(matches!(AppError::notification("x"), AppError::Notification(_)));
    }

    #[test]
    fn test_error_serialization() {
        let err = AppError::validation("invalid input");
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"type":"Validation","message":"invalid input"}"#);
    }
}
