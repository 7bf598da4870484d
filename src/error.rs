// Authorization hook error types
use serde_json::{json, Value};
use thiserror::Error;

use crate::registry::RegistryError;

/// Failures raised by authorization hooks. All of them abort the hook before
/// the context is touched; the host pipeline decides what the request sees.
#[derive(Debug, Error)]
pub enum AuthzError {
    #[error("No managed object matches component '{component}'")]
    ConfigLookupFailure { component: String },

    #[error(transparent)]
    ConfigRegistryUnavailable(#[from] RegistryError),

    #[error("Authorization hook not registered: {0}")]
    HookNotFound(String),
}

impl AuthzError {
    pub fn lookup_failure(component: impl Into<String>) -> Self {
        AuthzError::ConfigLookupFailure { component: component.into() }
    }

    /// HTTP-equivalent status for hosts that surface hook failures to clients
    pub fn status_code(&self) -> u16 {
        match self {
            AuthzError::ConfigLookupFailure { .. } => 404,
            AuthzError::ConfigRegistryUnavailable(_) => 503,
            AuthzError::HookNotFound(_) => 500,
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthzError::ConfigLookupFailure { .. } => "CONFIG_LOOKUP_FAILURE",
            AuthzError::ConfigRegistryUnavailable(_) => "CONFIG_REGISTRY_UNAVAILABLE",
            AuthzError::HookNotFound(_) => "HOOK_NOT_FOUND",
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "error": true,
            "message": self.to_string(),
            "code": self.error_code()
        })
    }
}
