use std::sync::Arc;

use serde_json::{json, Value};

use crate::cli::utils::{format_list, output_success};
use crate::cli::OutputFormat;
use crate::registry::ConfigRegistry;

/// Component path and protected attributes of every named managed object, in config order
pub fn summarize(registry: &dyn ConfigRegistry) -> anyhow::Result<Vec<(String, Vec<String>)>> {
    let managed = registry.read_managed_objects()?;
    Ok(managed
        .objects
        .iter()
        .filter_map(|object| Some((object.component()?, object.protected_properties())))
        .collect())
}

pub fn handle(registry: Arc<dyn ConfigRegistry>, output_format: OutputFormat) -> anyhow::Result<()> {
    let summary = summarize(registry.as_ref())?;

    let objects: Vec<Value> = summary
        .iter()
        .map(|(component, protected)| json!({ "component": component, "protectedAttributeList": protected }))
        .collect();
    let text = if summary.is_empty() {
        "No managed objects configured".to_string()
    } else {
        summary
            .iter()
            .map(|(component, protected)| format!("{}: {}", component, format_list(protected)))
            .collect::<Vec<_>>()
            .join("\n")
    };

    output_success(&output_format, json!({ "objects": objects }), &text)
}
