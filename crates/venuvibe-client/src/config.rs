//! Client configuration loaded from environment variables.
//!
//! All settings have defaults so the client starts with zero configuration.

use std::path::PathBuf;
use std::str::FromStr;

use venuvibe_store::sqlite::{SqliteStore, DEFAULT_DB_FILE};
use venuvibe_store::{Database, MemoryStore};

use crate::error::{ClientError, Result};

/// Where collections are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// SQLite file in the data directory.
    #[default]
    Sqlite,
    /// Process memory; nothing survives a restart.
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "memory" => Ok(Self::Memory),
            other => Err(ClientError::Config(format!(
                "unknown storage backend '{other}' (expected sqlite or memory)"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Env: `VENUVIBE_STORAGE` (`sqlite` | `memory`)
    /// Default: `sqlite`
    pub storage: StorageBackend,

    /// Directory holding the database file.
    /// Env: `VENUVIBE_DATA_DIR`
    /// Default: the platform data directory.
    pub data_dir: Option<PathBuf>,

    /// Env: `VENUVIBE_DB_FILE`
    /// Default: `venuvibe.db`
    pub db_file: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            storage: StorageBackend::Sqlite,
            data_dir: None,
            db_file: DEFAULT_DB_FILE.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("VENUVIBE_STORAGE") {
            match value.parse() {
                Ok(storage) => config.storage = storage,
                Err(e) => tracing::warn!(error = %e, "Invalid VENUVIBE_STORAGE, using default"),
            }
        }

        if let Some(dir) = lookup("VENUVIBE_DATA_DIR").filter(|d| !d.trim().is_empty()) {
            config.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(file) = lookup("VENUVIBE_DB_FILE") {
            let file = file.trim();
            if file.is_empty() || file.contains(['/', '\\']) {
                tracing::warn!(value = %file, "Invalid VENUVIBE_DB_FILE, using default");
            } else {
                config.db_file = file.to_string();
            }
        }

        config
    }

    /// Full path of the SQLite file this configuration points at.
    pub fn database_path(&self) -> Result<PathBuf> {
        let dir = match &self.data_dir {
            Some(dir) => dir.clone(),
            None => SqliteStore::default_data_dir()?,
        };
        Ok(dir.join(&self.db_file))
    }

    /// Open the configured storage backend.
    pub fn open_database(&self) -> Result<Database> {
        match self.storage {
            StorageBackend::Memory => Ok(Database::new(MemoryStore::new())),
            StorageBackend::Sqlite => {
                let path = self.database_path()?;
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent).map_err(venuvibe_store::StoreError::from)?;
                }
                Ok(Database::open_at(&path)?)
            }
        }
    }
}
