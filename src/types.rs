/// Shared types used across the codebase

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Prefix the host uses to address managed-object components
pub const MANAGED_PREFIX: &str = "managed/";

/// Authorization key that carries the protected attribute names
pub const PROTECTED_ATTRIBUTE_LIST: &str = "protectedAttributeList";

/// Per-request authorization context handed to every hook.
/// `authorization` holds whatever the upstream pipeline computed (roles, subject id, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorizationContext {
    pub component: String,
    #[serde(default)]
    pub authorization: Map<String, Value>,
}

impl AuthorizationContext {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            authorization: Map::new(),
        }
    }

    /// Builder-style insert into the authorization map
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.authorization.insert(key.into(), value.into());
        self
    }

    /// Protected attribute names previously attached by the annotator
    pub fn protected_attributes(&self) -> Option<Vec<&str>> {
        self.authorization
            .get(PROTECTED_ATTRIBUTE_LIST)?
            .as_array()
            .map(|items| items.iter().filter_map(Value::as_str).collect())
    }
}
