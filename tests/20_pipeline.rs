mod common;

use std::sync::Arc;

use anyhow::Result;
use idm_protected_attrs::config::AuditConfig;
use idm_protected_attrs::{AuthorizationContext, AuthzError, FileRegistry, HookPipeline, ProtectedAttributeAnnotator};
use serde_json::json;

fn pipeline(path: &std::path::Path) -> HookPipeline {
    let audit = AuditConfig { enable_activity_log: true, log_full_objects: true };
    HookPipeline::with_defaults(Arc::new(FileRegistry::new(path)), audit)
}

#[test]
fn host_invokes_hook_by_name() -> Result<()> {
    let config = common::write_managed_config(&common::managed_document())?;
    let pipeline = pipeline(config.path());
    let mut context = AuthorizationContext::new("managed/user").with_entry("id", "bjensen");

    let annotated = pipeline.invoke(ProtectedAttributeAnnotator::HOOK_NAME, &mut context)?;
    assert_eq!(annotated.component, "managed/user");

    assert_eq!(context.authorization["id"], json!("bjensen"));
    assert_eq!(context.protected_attributes(), Some(vec!["password", "ssn"]));
    Ok(())
}

#[test]
fn repeated_runs_give_same_list() -> Result<()> {
    let config = common::write_managed_config(&common::managed_document())?;
    let pipeline = pipeline(config.path());
    let mut context = AuthorizationContext::new("managed/user");

    pipeline.run(&mut context)?;
    let first = context.clone();
    pipeline.run(&mut context)?;

    assert_eq!(context, first);
    Ok(())
}

#[test]
fn unregistered_hook_is_rejected() -> Result<()> {
    let config = common::write_managed_config(&common::managed_document())?;
    let pipeline = pipeline(config.path());
    let mut context = AuthorizationContext::new("managed/user");

    let result = pipeline.invoke("customHook", &mut context);

    assert!(matches!(result, Err(AuthzError::HookNotFound(_))));
    Ok(())
}
