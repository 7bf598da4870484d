use std::sync::Arc;

use serde_json::{json, Value};

use crate::annotator::ProtectedAttributeAnnotator;
use crate::cli::utils::{format_list, output_success, parse_json_object};
use crate::cli::OutputFormat;
use crate::pipeline::HookPipeline;
use crate::registry::ConfigRegistry;
use crate::types::AuthorizationContext;

/// Build the context, run `setProtectedAttributes` through the hook pipeline
/// and return the annotated context
pub fn execute(
    registry: Arc<dyn ConfigRegistry>,
    component: &str,
    authorization: Option<&str>,
) -> anyhow::Result<AuthorizationContext> {
    let mut context = AuthorizationContext {
        component: component.to_string(),
        authorization: parse_json_object(authorization)?,
    };

    let pipeline = HookPipeline::with_defaults(registry, crate::config::config().audit.clone());
    pipeline.invoke(ProtectedAttributeAnnotator::HOOK_NAME, &mut context)?;

    Ok(context)
}

pub fn handle(
    registry: Arc<dyn ConfigRegistry>,
    component: &str,
    authorization: Option<&str>,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let context = execute(registry, component, authorization)?;

    let protected: Vec<String> = context
        .protected_attributes()
        .unwrap_or_default()
        .into_iter()
        .map(str::to_string)
        .collect();
    let text = format!(
        "{}\n  protectedAttributeList: {}\n  authorization: {}",
        context.component,
        format_list(&protected),
        Value::Object(context.authorization.clone())
    );

    output_success(&output_format, json!({ "context": context }), &text)
}
