//! Error types for inventory generation

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::hostname::SEGMENT_COUNT;
use crate::domain::HostnameError;
use crate::merge::MergeError;

/// Errors that can occur while building or emitting an inventory
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Host name does not split into exactly five segments
    #[error("Host format is invalid: {hostname} ({segments} segments, expected {})", SEGMENT_COUNT)]
    MalformedHostName { hostname: String, segments: usize },

    /// Enumerated host name field outside its allowed set
    #[error("Invalid {field}: {value}")]
    InvalidFieldValue { field: &'static str, value: String },

    /// A host could not be assembled; aborts the whole build
    #[error("Failed to parse host {hostname}: {source}")]
    HostBuildFailed {
        hostname: String,
        #[source]
        source: HostnameError,
    },

    /// Base and overlay disagree on a scalar value
    #[error("Conflict at {path}")]
    MergeConflict { path: String },

    /// Public inventory missing or not valid YAML
    #[error("Cannot read inventory {}: {message}", .path.display())]
    SourceUnreadable { path: PathBuf, message: String },

    /// Decrypt tool missing or not usable
    #[error("Cannot find or use {tool} executable: {reason}")]
    DecryptUnavailable { tool: String, reason: String },

    /// A secrets file could not be decrypted or parsed
    #[error("Cannot load {}: {message}", .path.display())]
    DecryptFailed { path: PathBuf, message: String },

    /// No secrets directory could be located
    #[error("Secrets root not found: {message}")]
    SecretsRootNotFound { message: String },

    /// Host override file is malformed
    #[error("Invalid overrides file {} at line {line}: {message}", .path.display())]
    OverridesInvalid {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;

impl From<HostnameError> for InventoryError {
    fn from(err: HostnameError) -> Self {
        match err {
            HostnameError::Malformed { hostname, segments } => {
                InventoryError::MalformedHostName { hostname, segments }
            }
            HostnameError::InvalidFieldValue { field, value } => {
                InventoryError::InvalidFieldValue { field, value }
            }
        }
    }
}

impl From<MergeError> for InventoryError {
    fn from(err: MergeError) -> Self {
        match err {
            MergeError::Conflict { path } => InventoryError::MergeConflict { path },
        }
    }
}

impl InventoryError {
    /// Whether this error only affects a single secret access level
    pub fn is_tier_local(&self) -> bool {
        matches!(
            self,
            Self::DecryptFailed { .. } | Self::DecryptUnavailable { .. }
        )
    }
}
