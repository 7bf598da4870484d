pub mod protected_attributes;

use crate::error::AuthzError;
use crate::types::AuthorizationContext;

pub use protected_attributes::ProtectedAttributeAnnotator;

/// Post-processing hook run by the host authorization pipeline after the base
/// authorization decision has been computed.
pub trait AuthorizationAnnotator: Send + Sync {
    /// Hook name the host registers and invokes this annotator under
    fn name(&self) -> &'static str;

    /// Augment the context in place and hand it back for chaining.
    /// On error the context must be left exactly as it was passed in.
    fn annotate<'a>(
        &self,
        context: &'a mut AuthorizationContext,
    ) -> Result<&'a mut AuthorizationContext, AuthzError>;
}
