use std::sync::{Arc, RwLock};

use crate::registry::models::{ManagedObjectConfig, ManagedObjects};
use crate::registry::{ConfigRegistry, RegistryError};

/// In-memory managed object configuration.
/// Clones share the same underlying snapshot.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    objects: Arc<RwLock<ManagedObjects>>,
    unavailable: Arc<RwLock<Option<String>>>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_objects(objects: Vec<ManagedObjectConfig>) -> Self {
        let registry = Self::new();
        registry.replace(ManagedObjects { objects });
        registry
    }

    /// Swap the whole configuration snapshot
    pub fn replace(&self, objects: ManagedObjects) {
        *self.objects.write().unwrap_or_else(|e| e.into_inner()) = objects;
    }

    /// Replace the managed object with the same name, or append it
    pub fn upsert(&self, object: ManagedObjectConfig) {
        let mut guard = self.objects.write().unwrap_or_else(|e| e.into_inner());
        match guard.objects.iter_mut().find(|existing| object.name.is_some() && existing.name == object.name) {
            Some(existing) => *existing = object,
            None => guard.objects.push(object),
        }
    }

    /// Make subsequent reads fail with `RegistryError::Unavailable`
    pub fn set_unavailable(&self, reason: Option<String>) {
        *self.unavailable.write().unwrap_or_else(|e| e.into_inner()) = reason;
    }
}

impl ConfigRegistry for MemoryRegistry {
    fn read_managed_objects(&self) -> Result<ManagedObjects, RegistryError> {
        if let Some(reason) = self.unavailable.read().unwrap_or_else(|e| e.into_inner()).as_ref() {
            return Err(RegistryError::Unavailable(reason.clone()));
        }
        Ok(self.objects.read().unwrap_or_else(|e| e.into_inner()).clone())
    }
}
