//! Error types for the task store and its boundaries.

use thiserror::Error;

/// Errors produced by the store, the date boundary, and export.
///
/// Every variant is terminal to the single attempted operation; nothing here
/// is fatal to the process, and the caller may always retry.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("invalid date '{0}'")]
    InvalidDate(String),

    #[error("task not found: {0}")]
    TaskNotFound(i64),

    #[error("unknown status '{0}': expected new, in-progress, or done")]
    UnknownStatus(String),

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
