// src/error.rs
use thiserror::Error;

/// Shown whenever the backend cannot be reached at the transport level.
pub const UNREACHABLE_BACKEND: &str =
    "Cannot connect to the backend server. Make sure the API is running.";

/// Every failure layer collapsed into one displayable message.
///
/// The `Display` impl is the normalizer: whatever went wrong, `to_string()`
/// yields the single line the user sees.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The remote host could not be reached at all.
    #[error("Cannot connect to the backend server. Make sure the API is running.")]
    Connectivity,

    /// Non-2xx response. `detail` is the server-provided message when the
    /// failure body parsed as `{detail}`, otherwise `HTTP <status>`.
    #[error("{detail}")]
    Http { status: u16, detail: String },

    /// A success-status response whose body was not valid JSON.
    #[error("{0}")]
    Parse(String),

    /// Transport failure other than connectivity (e.g. connection reset).
    #[error("{0}")]
    Transport(String),

    /// Local pre-flight failure. Never reaches the network layer.
    #[error("{0}")]
    Validation(String),

    /// Clipboard or file-save platform failure.
    #[error("{0}")]
    Capability(String),
}

impl ApiError {
    /// Build an HTTP failure, falling back to the status code when the
    /// server provided no usable detail.
    pub fn http(status: u16, detail: Option<String>) -> Self {
        let detail = detail.unwrap_or_else(|| format!("HTTP {}", status));
        Self::Http { status, detail }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn capability(message: impl Into<String>) -> Self {
        Self::Capability(message.into())
    }

    /// Classify a raw transport error: connectivity failures map to the
    /// fixed unreachable-backend message, everything else keeps its own text.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_connect() {
            Self::Connectivity
        } else if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connectivity_uses_fixed_message() {
        assert_eq!(ApiError::Connectivity.to_string(), UNREACHABLE_BACKEND);
    }

    #[test]
    fn http_error_prefers_server_detail() {
        let err = ApiError::http(404, Some("Job not found".to_string()));
        assert_eq!(err.to_string(), "Job not found");
    }

    #[test]
    fn http_error_without_detail_names_the_status() {
        let err = ApiError::http(500, None);
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn validation_message_passes_through() {
        let err = ApiError::validation("Please enter your resume.");
        assert_eq!(err.to_string(), "Please enter your resume.");
    }
}
