//! Error types for Raplan
//!
//! This module defines all error types used throughout the application.
//! The two engine errors (`InvalidInput`, `NoFittingPattern`) are terminal,
//! user-visible failures; the rest cover catalog loading and the remote
//! spec lookup.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Raplan operations
#[derive(Error, Debug)]
pub enum RaplanError {
    /// Malformed request, rejected before any catalog work
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No catalog pattern satisfies the request
    #[error("{0}")]
    NoFittingPattern(String),

    /// Catalog file missing on disk
    #[error("Catalog file not found: {0}")]
    CatalogNotFound(PathBuf),

    /// Catalog failed structural validation after parsing
    #[error("Invalid catalog '{path}': {message}")]
    InvalidCatalog { path: PathBuf, message: String },

    /// YAML parsing error with file context
    #[error("Failed to parse '{path}': {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Required environment variable is missing
    #[error("{name} not found. Set it in your environment or in a local .env file.")]
    MissingApiKey { name: String },

    /// Remote spec lookup transport failure
    #[error("Spec lookup request failed: {0}")]
    SpecLookupTransport(#[from] reqwest::Error),

    /// Remote spec lookup returned something other than the expected JSON
    #[error("Spec lookup returned invalid response: {0}")]
    SpecLookupResponse(String),

    /// I/O error with path context
    #[error("I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RaplanError {
    /// Create an invalid-input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create an invalid-catalog error with path context
    pub fn invalid_catalog(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidCatalog {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for the engine's user-facing request failures, as opposed to
    /// environment or catalog problems
    pub fn is_request_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::NoFittingPattern(_))
    }

    /// Get the path associated with this error, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::CatalogNotFound(path)
            | Self::InvalidCatalog { path, .. }
            | Self::CatalogParse { path, .. }
            | Self::Io { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Result type alias for Raplan operations
pub type Result<T> = std::result::Result<T, RaplanError>;

impl From<serde_json::Error> for RaplanError {
    fn from(err: serde_json::Error) -> Self {
        RaplanError::SpecLookupResponse(err.to_string())
    }
}

/// Extension trait for adding path context to std::io::Result
pub trait IoResultExt<T> {
    /// Add path context to an I/O error
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| RaplanError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_with_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = RaplanError::io("/test/path", io_err);
        assert!(err.path().is_some());
        assert_eq!(err.path().unwrap(), &PathBuf::from("/test/path"));
    }

    #[test]
    fn test_request_error_classification() {
        assert!(RaplanError::invalid_input("total_gpus must be >= 1").is_request_error());
        assert!(RaplanError::NoFittingPattern("no fit".into()).is_request_error());
        assert!(!RaplanError::CatalogNotFound(PathBuf::from("/x")).is_request_error());
    }

    #[test]
    fn test_missing_api_key_message() {
        let err = RaplanError::MissingApiKey {
            name: "NVIDIA_API_KEY".into(),
        };
        assert!(err.to_string().contains("NVIDIA_API_KEY"));
        assert!(err.to_string().contains(".env"));
    }
}
