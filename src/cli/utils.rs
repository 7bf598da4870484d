use serde_json::{json, Value};
use crate::cli::OutputFormat;
use crate::error::AuthzError;

/// Output a success payload in the appropriate format.
/// Text mode prints `text` instead of the JSON body.
pub fn output_success(output_format: &OutputFormat, data: Value, text: &str) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({ "success": true });
            if let (Some(target), Value::Object(fields)) = (response.as_object_mut(), data) {
                target.extend(fields);
            }
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("{}", text);
        }
    }
    Ok(())
}

/// JSON body for a failed command; hook failures keep their own error code
pub fn error_body(error: &anyhow::Error) -> Value {
    match error.downcast_ref::<AuthzError>() {
        Some(authz) => authz.to_json(),
        None => json!({
            "error": true,
            "message": error.to_string(),
            "code": "CLI_ERROR"
        }),
    }
}

/// Output an error in the appropriate format
pub fn output_error(output_format: &OutputFormat, error: &anyhow::Error, verbose: bool) {
    match output_format {
        OutputFormat::Json => match serde_json::to_string_pretty(&error_body(error)) {
            Ok(body) => println!("{}", body),
            Err(_) => eprintln!("Error: {error}"),
        },
        OutputFormat::Text if verbose => eprintln!("Error: {error:?}"),
        OutputFormat::Text => eprintln!("Error: {error}"),
    }
}

/// Render a list of attribute names for text output
pub fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}

/// Parse an optional JSON object argument, e.g. `--authorization '{"roles":["user"]}'`
pub fn parse_json_object(input: Option<&str>) -> anyhow::Result<serde_json::Map<String, Value>> {
    let Some(raw) = input else {
        return Ok(serde_json::Map::new());
    };
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => Ok(map),
        other => anyhow::bail!("expected a JSON object, got: {}", other),
    }
}
