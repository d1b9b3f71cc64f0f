//! Storage configuration for the CardioLog journal
//!
//! The journal document lives in one of two backends:
//! - a JSON file on disk (default)
//! - process memory (nothing survives the process)

use std::env;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

/// Environment variable selecting the storage backend
pub const STORAGE_TYPE_VAR: &str = "CARDIOLOG_STORAGE";
/// Environment variable holding the data directory
pub const DATA_DIR_VAR: &str = "CARDIOLOG_DATA_DIR";
/// Environment variable holding the document key
pub const STORAGE_KEY_VAR: &str = "CARDIOLOG_STORAGE_KEY";

/// Default data directory
pub const DEFAULT_DATA_DIR: &str = "data";
/// Default document key, doubles as the file stem
pub const DEFAULT_STORAGE_KEY: &str = "cardioLogData_v1";

/// Supported storage types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// JSON document on disk
    File,
    /// Process memory only
    Memory,
}

impl StorageType {
    /// Convert from string to storage type
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s.trim().to_lowercase().as_str() {
            "file" | "json" => Ok(StorageType::File),
            "memory" | "in-memory" => Ok(StorageType::Memory),
            _ => Err(ConfigError::UnsupportedStorageType(s.to_string())),
        }
    }
}

/// Configuration error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Unsupported storage type
    #[error("Unsupported storage type: {0}")]
    UnsupportedStorageType(String),

    /// A value that must not be empty was empty
    #[error("Empty configuration value: {0}")]
    EmptyValue(String),
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Backend used for the journal document
    pub storage_type: StorageType,
    /// Directory holding the document file
    pub data_dir: PathBuf,
    /// Document key, used as the file stem
    pub storage_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            storage_type: StorageType::File,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl StorageConfig {
    /// Create a new storage configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let storage_type = match env::var(STORAGE_TYPE_VAR) {
            Ok(value) => StorageType::parse(&value)?,
            Err(_) => StorageType::File,
        };

        let data_dir = env::var(DATA_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));

        let storage_key = env::var(STORAGE_KEY_VAR)
            .unwrap_or_else(|_| DEFAULT_STORAGE_KEY.to_string());
        if storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyValue(STORAGE_KEY_VAR.to_string()));
        }

        let config = StorageConfig {
            storage_type,
            data_dir,
            storage_key,
        };

        match config.storage_type {
            StorageType::File => info!("Using journal file at: {}", config.document_path().display()),
            StorageType::Memory => info!("Using in-memory journal storage"),
        }

        Ok(config)
    }

    /// Configuration for a journal that lives only in memory
    pub fn in_memory() -> Self {
        Self {
            storage_type: StorageType::Memory,
            ..Self::default()
        }
    }

    /// Path of the journal document for the file backend
    pub fn document_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.storage_key))
    }
}
