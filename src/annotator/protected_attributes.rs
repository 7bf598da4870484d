use std::sync::Arc;

use serde_json::Value;

use crate::annotator::AuthorizationAnnotator;
use crate::error::AuthzError;
use crate::registry::ConfigRegistry;
use crate::types::{AuthorizationContext, PROTECTED_ATTRIBUTE_LIST};

/// Attaches the names of the `isProtected` properties of the addressed
/// managed object to the authorization map under `protectedAttributeList`.
///
/// Reporting only: nothing here denies access to those attributes.
pub struct ProtectedAttributeAnnotator {
    registry: Arc<dyn ConfigRegistry>,
}

impl ProtectedAttributeAnnotator {
    pub const HOOK_NAME: &'static str = "setProtectedAttributes";

    pub fn new(registry: Arc<dyn ConfigRegistry>) -> Self {
        Self { registry }
    }

    /// Protected property names declared by the managed object behind `component`.
    /// Reads a fresh configuration snapshot on every call.
    pub fn protected_attributes_for(&self, component: &str) -> Result<Vec<String>, AuthzError> {
        let managed = self.registry.read_managed_objects()?;
        let object = managed
            .find(component)
            .ok_or_else(|| AuthzError::lookup_failure(component))?;

        let protected = object.protected_properties();
        tracing::debug!(
            "Managed object '{}' declares {} protected attribute(s)",
            component,
            protected.len()
        );
        Ok(protected)
    }
}

impl AuthorizationAnnotator for ProtectedAttributeAnnotator {
    fn name(&self) -> &'static str {
        Self::HOOK_NAME
    }

    fn annotate<'a>(
        &self,
        context: &'a mut AuthorizationContext,
    ) -> Result<&'a mut AuthorizationContext, AuthzError> {
        let protected = self.protected_attributes_for(&context.component)?;

        let mut authorization = context.authorization.clone();
        authorization.insert(
            PROTECTED_ATTRIBUTE_LIST.to_string(),
            Value::Array(protected.into_iter().map(Value::String).collect()),
        );
        context.authorization = authorization;

        Ok(context)
    }
}
