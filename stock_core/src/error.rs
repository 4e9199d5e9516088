//! Error types for the stock_core library.

use std::io;
use std::path::PathBuf;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for stock_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Recoverable ledger condition surfaced as a hard error
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// How loudly a ledger diagnostic should be reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Expected and not worth showing to the user
    Debug,
    Warning,
    Error,
}

/// Conditions detected by ledger operations.
///
/// None of these are fatal: the operation that detects one skips its
/// mutation (or substitutes an empty inventory) and hands the value to a
/// [`Reporter`](crate::diagnostics::Reporter).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("Invalid type for item or quantity. Skipping: ({item}, {quantity})")]
    InvalidType { item: String, quantity: String },

    #[error("Item name is empty. Skipping.")]
    EmptyItemName,

    #[error("Item '{0}' not in inventory. Cannot remove.")]
    NotFound(String),

    #[error("{} not found. Starting with empty inventory.", .0.display())]
    StorageMissing(PathBuf),

    #[error("Could not decode {}: {reason}. Starting with empty inventory.", .path.display())]
    StorageCorrupt { path: PathBuf, reason: String },
}

impl LedgerError {
    pub fn severity(&self) -> Severity {
        match self {
            LedgerError::EmptyItemName => Severity::Debug,
            LedgerError::StorageMissing(_) => Severity::Warning,
            LedgerError::InvalidType { .. }
            | LedgerError::NotFound(_)
            | LedgerError::StorageCorrupt { .. } => Severity::Error,
        }
    }

    /// True for wrong-type and empty-name rejections.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LedgerError::InvalidType { .. } | LedgerError::EmptyItemName
        )
    }
}
