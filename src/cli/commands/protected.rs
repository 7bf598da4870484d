use std::sync::Arc;

use serde_json::json;

use crate::annotator::ProtectedAttributeAnnotator;
use crate::cli::utils::{format_list, output_success};
use crate::cli::OutputFormat;
use crate::registry::ConfigRegistry;

pub fn execute(registry: Arc<dyn ConfigRegistry>, component: &str) -> anyhow::Result<Vec<String>> {
    Ok(ProtectedAttributeAnnotator::new(registry).protected_attributes_for(component)?)
}

pub fn handle(registry: Arc<dyn ConfigRegistry>, component: &str, output_format: OutputFormat) -> anyhow::Result<()> {
    let protected = execute(registry, component)?;

    output_success(
        &output_format,
        json!({ "component": component, "protectedAttributeList": protected }),
        &format!("{}: {}", component, format_list(&protected)),
    )
}
