// Authorization hook pipeline with explicit, named registration

use std::sync::Arc;
use std::time::Instant;

use crate::activity::ActivityRecord;
use crate::annotator::{AuthorizationAnnotator, ProtectedAttributeAnnotator};
use crate::config::AuditConfig;
use crate::error::AuthzError;
use crate::registry::ConfigRegistry;
use crate::types::AuthorizationContext;

pub type AnnotatorBox = Box<dyn AuthorizationAnnotator>;

/// Ordered set of authorization hooks the host runs after computing the base
/// authorization decision. Hooks are looked up by the name they register under.
pub struct HookPipeline {
    hooks: Vec<AnnotatorBox>,
    audit: AuditConfig,
}

impl HookPipeline {
    pub fn new(audit: AuditConfig) -> Self {
        Self {
            hooks: Vec::new(),
            audit,
        }
    }

    /// Pipeline with the stock hooks (`setProtectedAttributes`) registered
    pub fn with_defaults(registry: Arc<dyn ConfigRegistry>, audit: AuditConfig) -> Self {
        let mut pipeline = Self::new(audit);
        pipeline.register(Box::new(ProtectedAttributeAnnotator::new(registry)));
        pipeline
    }

    /// Register a hook. A hook registered under an existing name replaces it in place.
    pub fn register(&mut self, hook: AnnotatorBox) {
        let name = hook.name();
        match self.hooks.iter_mut().find(|existing| existing.name() == name) {
            Some(existing) => {
                tracing::debug!("Replacing authorization hook '{}'", name);
                *existing = hook;
            }
            None => {
                tracing::debug!("Registered authorization hook '{}'", name);
                self.hooks.push(hook);
            }
        }
    }

    pub fn hook_names(&self) -> Vec<&'static str> {
        self.hooks.iter().map(|hook| hook.name()).collect()
    }

    /// Invoke a single hook by name
    pub fn invoke<'a>(
        &self,
        name: &str,
        context: &'a mut AuthorizationContext,
    ) -> Result<&'a mut AuthorizationContext, AuthzError> {
        let hook = self
            .hooks
            .iter()
            .find(|hook| hook.name() == name)
            .ok_or_else(|| AuthzError::HookNotFound(name.to_string()))?;

        self.execute(hook.as_ref(), context)
    }

    /// Run every registered hook in registration order, stopping at the first failure
    pub fn run<'a>(
        &self,
        context: &'a mut AuthorizationContext,
    ) -> Result<&'a mut AuthorizationContext, AuthzError> {
        for hook in &self.hooks {
            self.execute(hook.as_ref(), context)?;
        }
        Ok(context)
    }

    fn execute<'a>(
        &self,
        hook: &dyn AuthorizationAnnotator,
        context: &'a mut AuthorizationContext,
    ) -> Result<&'a mut AuthorizationContext, AuthzError> {
        let start_time = Instant::now();

        match hook.annotate(context).map(|_| ()) {
            Ok(()) => {
                tracing::debug!(
                    "Hook '{}' completed for {} in {:?}",
                    hook.name(),
                    context.component,
                    start_time.elapsed()
                );
                if self.audit.enable_activity_log {
                    ActivityRecord::success(hook.name(), context, &self.audit).emit();
                }
                Ok(context)
            }
            Err(e) => {
                tracing::warn!("Hook '{}' failed for {}: {}", hook.name(), context.component, e);
                if self.audit.enable_activity_log {
                    ActivityRecord::failure(hook.name(), context, &e, &self.audit).emit();
                }
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ACTIVITY_TARGET;
    use crate::registry::{ManagedObjectConfig, MemoryRegistry, PropertySchema};
    use serde_json::{json, Value};
    use std::fmt;
    use std::sync::Mutex;
    use tracing::field::{Field, Visit};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    /// Collects the JSON body of every activity record event
    #[derive(Clone, Default)]
    struct ActivityCapture(Arc<Mutex<Vec<Value>>>);

    struct MessageVisitor(Option<String>);

    impl Visit for MessageVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.0 = Some(format!("{:?}", value));
            }
        }
    }

    impl<S: Subscriber> Layer<S> for ActivityCapture {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if event.metadata().target() != ACTIVITY_TARGET {
                return;
            }
            let mut visitor = MessageVisitor(None);
            event.record(&mut visitor);
            if let Some(body) = visitor.0.and_then(|message| serde_json::from_str(&message).ok()) {
                self.0.lock().unwrap().push(body);
            }
        }
    }

    impl ActivityCapture {
        fn records(&self) -> Vec<Value> {
            self.0.lock().unwrap().clone()
        }
    }

    /// Run `f` with activity events captured, returning what was emitted
    fn capture_activity(f: impl FnOnce()) -> Vec<Value> {
        let capture = ActivityCapture::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());
        tracing::subscriber::with_default(subscriber, f);
        capture.records()
    }

    fn pipeline_with_audit(audit: AuditConfig) -> HookPipeline {
        let registry = MemoryRegistry::with_objects(vec![
            ManagedObjectConfig::new("user").with_property("password", PropertySchema::protected())
        ]);
        HookPipeline::with_defaults(Arc::new(registry), audit)
    }

    struct TagHook;

    impl AuthorizationAnnotator for TagHook {
        fn name(&self) -> &'static str {
            "tagRequest"
        }

        fn annotate<'a>(
            &self,
            context: &'a mut AuthorizationContext,
        ) -> Result<&'a mut AuthorizationContext, AuthzError> {
            context.authorization.insert("tagged".into(), json!(true));
            Ok(context)
        }
    }

    fn pipeline() -> HookPipeline {
        pipeline_with_audit(AuditConfig::default())
    }

    #[test]
    fn test_defaults_register_protected_attribute_hook() {
        assert_eq!(pipeline().hook_names(), vec!["setProtectedAttributes"]);
    }

    #[test]
    fn test_invoke_by_name() {
        let pipeline = pipeline();
        let mut context = AuthorizationContext::new("managed/user");

        pipeline.invoke("setProtectedAttributes", &mut context).unwrap();

        assert_eq!(context.protected_attributes(), Some(vec!["password"]));
    }

    #[test]
    fn test_invoke_unknown_hook() {
        let pipeline = pipeline();
        let mut context = AuthorizationContext::new("managed/user");

        let err = pipeline.invoke("setSomethingElse", &mut context).unwrap_err();

        assert!(matches!(err, AuthzError::HookNotFound(ref name) if name == "setSomethingElse"));
        assert!(context.authorization.is_empty());
    }

    #[test]
    fn test_run_executes_in_registration_order() {
        let mut pipeline = pipeline();
        pipeline.register(Box::new(TagHook));
        let mut context = AuthorizationContext::new("managed/user");

        pipeline.run(&mut context).unwrap();

        assert_eq!(pipeline.hook_names(), vec!["setProtectedAttributes", "tagRequest"]);
        assert_eq!(context.authorization["tagged"], json!(true));
        assert_eq!(context.protected_attributes(), Some(vec!["password"]));
    }

    #[test]
    fn test_run_stops_at_first_failure() {
        let mut pipeline = pipeline();
        pipeline.register(Box::new(TagHook));
        let mut context = AuthorizationContext::new("managed/nonexistent");

        let err = pipeline.run(&mut context).unwrap_err();

        assert!(matches!(err, AuthzError::ConfigLookupFailure { .. }));
        assert!(context.authorization.get("tagged").is_none());
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut pipeline = HookPipeline::new(AuditConfig::default());
        pipeline.register(Box::new(TagHook));
        pipeline.register(Box::new(TagHook));
        assert_eq!(pipeline.hook_names(), vec!["tagRequest"]);
    }

    #[test]
    fn test_success_emits_one_activity_record() {
        let pipeline = pipeline();
        let records = capture_activity(|| {
            let mut context = AuthorizationContext::new("managed/user").with_entry("roles", json!(["user"]));
            pipeline.invoke("setProtectedAttributes", &mut context).unwrap();
        });

        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["status"], "SUCCESS");
        assert_eq!(records[0]["hook"], "setProtectedAttributes");
        assert_eq!(records[0]["component"], "managed/user");
        assert_eq!(records[0]["protected_count"], 1);
        assert!(records[0].get("authorization").is_none());
    }

    #[test]
    fn test_failure_emits_one_activity_record() {
        let pipeline = pipeline();
        let records = capture_activity(|| {
            let mut context = AuthorizationContext::new("managed/nonexistent");
            assert!(pipeline.run(&mut context).is_err());
        });

        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["status"], "FAILURE");
        assert!(records[0]["message"].as_str().unwrap().contains("managed/nonexistent"));
    }

    #[test]
    fn test_full_objects_in_emitted_record_when_enabled() {
        let pipeline = pipeline_with_audit(AuditConfig { enable_activity_log: true, log_full_objects: true });
        let records = capture_activity(|| {
            let mut context = AuthorizationContext::new("managed/user").with_entry("roles", json!(["user"]));
            pipeline.run(&mut context).unwrap();
        });

        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["authorization"]["roles"], json!(["user"]));
        assert_eq!(records[0]["authorization"]["protectedAttributeList"], json!(["password"]));
    }

    #[test]
    fn test_disabled_activity_log_emits_nothing() {
        let pipeline = pipeline_with_audit(AuditConfig { enable_activity_log: false, log_full_objects: true });
        let records = capture_activity(|| {
            let mut ok = AuthorizationContext::new("managed/user");
            pipeline.run(&mut ok).unwrap();
            let mut missing = AuthorizationContext::new("managed/nonexistent");
            assert!(pipeline.run(&mut missing).is_err());
        });

        assert!(records.is_empty());
    }
}
