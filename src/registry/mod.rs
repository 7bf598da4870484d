pub mod file;
pub mod memory;
pub mod models;

use std::path::PathBuf;
use thiserror::Error;

pub use file::FileRegistry;
pub use memory::MemoryRegistry;
pub use models::{ManagedObjectConfig, ManagedObjectSchema, ManagedObjects, PropertySchema};

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Failed to read managed object config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration registry unavailable: {0}")]
    Unavailable(String),
}

/// Source of the managed object configuration (`config/managed`).
///
/// Reads are synchronous and return a fully materialized snapshot. Callers
/// re-read on every request, so implementations must be safe to share
/// across threads.
pub trait ConfigRegistry: Send + Sync {
    fn read_managed_objects(&self) -> Result<ManagedObjects, RegistryError>;
}
