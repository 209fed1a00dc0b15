//! Validate tool arguments against a tool's input schema before any call.

use serde_json::Value;

/// Validate tool arguments against a JSON Schema.
///
/// Checks the top-level type, required field presence, property types and,
/// for array properties, the type of each item. Returns `Err(message)`
/// describing the first violation found.
pub fn validate_arguments(args: &Value, schema: &Value) -> Result<(), String> {
    if schema.get("type").and_then(Value::as_str) == Some("object") && !args.is_object() {
        return Err(format!(
            "expected object arguments, got {}",
            json_type_name(args)
        ));
    }

    let Some(obj) = args.as_object() else {
        return Ok(());
    };

    if let Some(required) = schema.get("required").and_then(Value::as_array) {
        for name in required.iter().filter_map(Value::as_str) {
            if !obj.contains_key(name) {
                return Err(format!("missing required field '{name}'"));
            }
        }
    }

    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
        return Ok(());
    };

    for (key, value) in obj {
        let Some(prop_schema) = properties.get(key) else {
            continue;
        };
        check_type(key, value, prop_schema)?;

        if let (Some(items), Some(item_schema)) = (value.as_array(), prop_schema.get("items")) {
            for (index, item) in items.iter().enumerate() {
                check_type(&format!("{key}[{index}]"), item, item_schema)?;
                if item.is_object() {
                    validate_arguments(item, item_schema)
                        .map_err(|message| format!("{key}[{index}]: {message}"))?;
                }
            }
        }
    }

    Ok(())
}

fn check_type(field: &str, value: &Value, schema: &Value) -> Result<(), String> {
    match schema.get("type").and_then(Value::as_str) {
        Some(expected) if !value_matches_type(value, expected) => Err(format!(
            "field '{field}' expected type '{expected}', got {}",
            json_type_name(value)
        )),
        _ => Ok(()),
    }
}

fn value_matches_type(value: &Value, expected: &str) -> bool {
    match expected {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        "object" => value.is_object(),
        "array" => value.is_array(),
        "null" => value.is_null(),
        _ => true,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
