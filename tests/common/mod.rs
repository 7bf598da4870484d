#![allow(dead_code)]

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{json, Value};
use tempfile::NamedTempFile;

/// Managed object document in the shape the platform ships as `conf/managed.json`
pub fn managed_document() -> Value {
    json!({
        "objects": [
            {
                "name": "user",
                "schema": {
                    "$schema": "http://forgerock.org/json-schema#",
                    "type": "object",
                    "title": "User",
                    "properties": {
                        "password": { "type": "string", "isProtected": true, "encryption": { "key": "openidm-sym-default" } },
                        "givenName": { "type": "string", "isProtected": false },
                        "ssn": { "type": "string", "isProtected": true }
                    }
                }
            },
            {
                "name": "role",
                "schema": {
                    "properties": {
                        "name": { "type": "string" },
                        "description": { "type": "string", "isProtected": false }
                    }
                }
            }
        ]
    })
}

/// Write `document` to a temporary `.json` file the registry can read
pub fn write_managed_config(document: &Value) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .context("failed to create temp config")?;
    write!(file, "{}", serde_json::to_string_pretty(document)?)?;
    file.flush()?;
    Ok(file)
}

/// Overwrite an existing config file in place
pub fn rewrite_managed_config(path: &Path, document: &Value) -> Result<()> {
    std::fs::write(path, serde_json::to_string_pretty(document)?).context("failed to rewrite config")
}
