//! Error types for the bmi_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for bmi_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// SQLite error from the history store
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Non-numeric or non-finite measurement input
    #[error("Invalid {field}: '{value}' is not a valid number")]
    InvalidNumber { field: &'static str, value: String },

    /// Degenerate height (zero or negative after conversion)
    #[error("Invalid height: must be greater than zero")]
    InvalidHeight,

    /// An action that needs a user was attempted without one
    #[error("No user selected")]
    MissingUser,

    /// Natural-key collision on save
    #[error("An entry with this weight and height already exists for '{user}'")]
    DuplicateEntry { user: String },
}
