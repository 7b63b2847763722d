//! # Error Types
//!
//! Structured error types for page_core. Document assembly and in-memory
//! rendering are infallible by design; errors only arise at the edges,
//! when an embedded asset fails to resolve or an export touches the
//! filesystem.
//!
//! ## Example
//!
//! ```rust
//! use page_core::errors::{PageError, PageResult};
//!
//! fn resolve_asset(name: &str) -> PageResult<Vec<u8>> {
//!     Err(PageError::asset_unavailable(name))
//! }
//!
//! assert!(resolve_asset("logo1.svg").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for page_core operations
pub type PageResult<T> = Result<T, PageError>;

/// Structured error type for rendering-edge operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum PageError {
    /// An embedded image asset could not be resolved. Renderers degrade to
    /// a text label; surrounding content is never dropped.
    #[error("Asset unavailable: '{name}'")]
    AssetUnavailable { name: String },

    /// File I/O error during export
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl PageError {
    /// Create an AssetUnavailable error
    pub fn asset_unavailable(name: impl Into<String>) -> Self {
        PageError::AssetUnavailable { name: name.into() }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        PageError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = PageError::asset_unavailable("logo1.svg");
        assert_eq!(error.to_string(), "Asset unavailable: 'logo1.svg'");
    }

    #[test]
    fn test_error_serialization() {
        let error = PageError::file_error("rename", "index.html", "permission denied");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: PageError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }
}
