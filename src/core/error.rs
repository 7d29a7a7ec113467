//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`ApiError`] - network/HTTP errors for REST API requests
//! - [`ExportError`] - spreadsheet export failures

use std::fmt;

/// Network/HTTP errors for REST API requests.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network request failed (CORS, connection refused, etc.)
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    HttpError(u16),
    /// Failed to read response body
    ResponseReadFailed,
    /// Invalid response content (not text)
    InvalidContent,
    /// JSON parsing error
    JsonParseError(String),
    /// Request timed out
    Timeout,
}

impl ApiError {
    /// Whether this error is an authorization failure (401/403).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::HttpError(401) | Self::HttpError(403))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::HttpError(401) | Self::HttpError(403) => write!(f, "Not authorized"),
            Self::HttpError(status) => write!(f, "HTTP error: {}", status),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::InvalidContent => write!(f, "Invalid response content"),
            Self::JsonParseError(msg) => write!(f, "JSON parse error: {}", msg),
            Self::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Spreadsheet export failures.
#[derive(Debug, Clone)]
pub enum ExportError {
    /// CSV serialization failed.
    WriteFailed(String),
    /// The browser refused to build or download the file blob.
    DownloadFailed,
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WriteFailed(msg) => write!(f, "Failed to write sheet: {}", msg),
            Self::DownloadFailed => write!(f, "Failed to download file"),
        }
    }
}

impl std::error::Error for ExportError {}
