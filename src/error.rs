//! Error types for Signal Dash
//!
//! Every failure in the dashboard is recoverable: errors are turned into
//! toast notifications and the dashboard keeps running.

use thiserror::Error;

/// Main error type for Signal Dash operations
#[derive(Error, Debug)]
pub enum DashError {
    /// File I/O error
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// A saved dashboard file could not be read
    #[error("Failed to read configuration: {0}")]
    Load(#[source] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required form field was missing or empty
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// A filter date did not parse as `YYYY-MM-DD`
    #[error("Invalid date: {value}")]
    InvalidDate { value: String },

    /// Local app storage is not available
    #[error("Local storage is unavailable")]
    StorageUnavailable,

    /// System clipboard error
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Runtime settings file error
    #[error("Settings error: {0}")]
    Settings(String),

    /// The analysis backend stopped before answering
    #[error("Analysis backend disconnected")]
    BackendDisconnected,
}

/// Result type alias for Signal Dash operations
pub type Result<T> = std::result::Result<T, DashError>;

/// UI-friendly error message formatting
impl DashError {
    /// Get a user-friendly error message suitable for displaying in UI
    pub fn user_message(&self) -> String {
        match self {
            DashError::FileIo(e) => format!("File error: {}", e),
            DashError::Load(e) => format!("Could not open configuration file: {}", e),
            DashError::Json(e) => format!("Could not read configuration: {}", e),
            DashError::MissingField { field } => format!("Please provide a {}", field),
            DashError::InvalidDate { value } => format!("'{}' is not a valid date (expected YYYY-MM-DD)", value),
            DashError::StorageUnavailable => "Local storage is not available".to_string(),
            DashError::Clipboard(msg) => format!("Clipboard error: {}", msg),
            DashError::Settings(msg) => format!("Settings error: {}", msg),
            DashError::BackendDisconnected => "The analysis service stopped responding".to_string(),
        }
    }

    /// Get a short title for the error (for toast notifications)
    pub fn title(&self) -> &'static str {
        match self {
            DashError::FileIo(_) => "File Error",
            DashError::Load(_) | DashError::Json(_) => "Load Failed",
            DashError::MissingField { .. } => "Missing Information",
            DashError::InvalidDate { .. } => "Invalid Filters",
            DashError::StorageUnavailable => "Storage Error",
            DashError::Clipboard(_) => "Clipboard Error",
            DashError::Settings(_) => "Settings Error",
            DashError::BackendDisconnected => "Service Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DashError::MissingField { field: "chart title" };
        assert_eq!(err.user_message(), "Please provide a chart title");
        assert_eq!(err.title(), "Missing Information");

        let err = DashError::StorageUnavailable;
        assert_eq!(err.title(), "Storage Error");
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let dash_err: DashError = io_err.into();
        assert!(matches!(dash_err, DashError::FileIo(_)));

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let dash_err: DashError = json_err.into();
        assert_eq!(dash_err.title(), "Load Failed");
    }
}
