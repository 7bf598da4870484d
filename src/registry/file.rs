use std::fs;
use std::path::PathBuf;

use crate::registry::models::ManagedObjects;
use crate::registry::{ConfigRegistry, RegistryError};

/// Managed object configuration backed by a `managed.json` (or YAML) file.
/// The file is read again on every call; edits are picked up immediately.
#[derive(Debug, Clone)]
pub struct FileRegistry {
    path: PathBuf,
}

impl FileRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_yaml(&self) -> bool {
        matches!(
            self.path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        )
    }
}

impl ConfigRegistry for FileRegistry {
    fn read_managed_objects(&self) -> Result<ManagedObjects, RegistryError> {
        let content = fs::read_to_string(&self.path).map_err(|source| RegistryError::Io {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!("Read managed object config from {}", self.path.display());

        if self.is_yaml() {
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(serde_json::from_str(&content)?)
        }
    }
}
