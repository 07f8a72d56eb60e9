//! Error types for awork API operations.

use thiserror::Error;

/// Errors that can occur during awork API operations.
#[derive(Debug, Error)]
pub enum AworkError {
    /// Configuration is missing or incomplete.
    #[error("awork configuration required: {0}")]
    ConfigMissing(String),

    /// The API rejected the bearer token (HTTP 401).
    #[error("awork authentication failed: {message}")]
    Authentication { message: String },

    /// The requested resource does not exist (HTTP 404).
    #[error("{message}")]
    NotFound { message: String },

    /// Any other non-success response.
    #[error("awork API error: {message}")]
    Api { message: String, status_code: u16 },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A resource path that resolves outside the versioned API root.
    #[error("Path is outside the awork API: {0}")]
    InvalidPath(String),
}

impl AworkError {
    /// The message extracted from the API response, if this error came from one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Authentication { message }
            | Self::NotFound { message }
            | Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// The HTTP status that produced this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Authentication { .. } => Some(401),
            Self::NotFound { .. } => Some(404),
            Self::Api { status_code, .. } => Some(*status_code),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for awork operations.
pub type Result<T> = core::result::Result<T, AworkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_for_classified_errors() {
        let err = AworkError::Authentication {
            message: "bad token".to_string(),
        };
        assert_eq!(err.message(), Some("bad token"));
        assert_eq!(err.status_code(), Some(401));

        let err = AworkError::Api {
            message: "internal failure".to_string(),
            status_code: 500,
        };
        assert_eq!(err.message(), Some("internal failure"));
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(err.to_string(), "awork API error: internal failure");
    }

    #[test]
    fn test_not_found_displays_message_verbatim() {
        let err = AworkError::NotFound {
            message: "The requested resource x could not be found.".to_string(),
        };
        assert_eq!(err.to_string(), "The requested resource x could not be found.");
    }

    #[test]
    fn test_config_error_has_no_message() {
        let err = AworkError::ConfigMissing("AWORK_API_TOKEN".to_string());
        assert!(err.message().is_none());
        assert!(err.status_code().is_none());
    }

    #[test]
    fn test_invalid_path_names_the_path() {
        let err = AworkError::InvalidPath("../other".to_string());
        assert_eq!(err.to_string(), "Path is outside the awork API: ../other");
        assert!(err.status_code().is_none());
    }
}
