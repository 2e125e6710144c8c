use thiserror::Error;

/// Errors produced by the store layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A required field was empty or malformed. Raised before any store access.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An update targeted a record that does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A unique value is already taken (e.g. a registered email).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Unknown email or wrong password on sign-in.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A stored password hash is malformed.
    #[error("Credential error: {0}")]
    Credential(#[from] venuvibe_shared::CredentialError),

    /// A stored value could not be decoded.
    #[error("Corrupt data under key '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be encoded for writing.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// SQLite error.
    #[cfg(feature = "sqlite")]
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Failed to determine a platform data directory.
    #[error("Could not determine application data directory")]
    NoDataDir,

    /// Generic I/O error (e.g. creating the database directory).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Migration failure.
    #[error("Migration error: {0}")]
    Migration(String),

    /// A thread panicked while holding a store lock.
    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),
}

impl StoreError {
    pub(crate) fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub(crate) fn poisoned<E: std::fmt::Display>(e: E) -> Self {
        Self::LockPoisoned(e.to_string())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
