//! Tool input schemas.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::client::JsonObject;

/// JSON Schema describing a tool's input object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolParameters {
    pub schema: Value,
}

impl ToolParameters {
    /// Create from a raw JSON Schema value.
    pub fn from_schema(schema: Value) -> Self {
        Self { schema }
    }

    /// Schema for a tool that takes no input.
    pub fn empty() -> Self {
        ParameterBuilder::default().build()
    }

    /// Start an object schema.
    pub fn object() -> ParameterBuilder {
        ParameterBuilder::default()
    }

    /// Declared properties, if any.
    pub fn properties(&self) -> Option<&JsonObject> {
        self.schema.get("properties").and_then(Value::as_object)
    }

    /// True when the schema declares no properties.
    pub fn is_empty(&self) -> bool {
        self.properties().map_or(true, JsonObject::is_empty)
    }

    pub fn declares(&self, name: &str) -> bool {
        self.properties().is_some_and(|props| props.contains_key(name))
    }

    /// Keep only the declared keys of `arguments`.
    ///
    /// Object items of list properties are pruned against the item schema.
    /// Non-object arguments yield an empty object.
    pub fn retain_declared(&self, arguments: Value) -> JsonObject {
        match (arguments, self.properties()) {
            (Value::Object(map), Some(properties)) => retain_properties(map, properties),
            _ => JsonObject::new(),
        }
    }

    /// Schema as a JSON object, as MCP tool listings expect.
    pub fn to_object(&self) -> JsonObject {
        match &self.schema {
            Value::Object(map) => map.clone(),
            _ => JsonObject::new(),
        }
    }
}

fn retain_properties(mut map: JsonObject, properties: &JsonObject) -> JsonObject {
    map.retain(|key, _| properties.contains_key(key));
    for (key, value) in map.iter_mut() {
        let item_properties = properties
            .get(key)
            .and_then(|prop| prop.pointer("/items/properties"))
            .and_then(Value::as_object);
        let (Some(item_properties), Value::Array(items)) = (item_properties, value) else {
            continue;
        };
        for item in items.iter_mut() {
            if let Value::Object(fields) = item {
                *fields = retain_properties(std::mem::take(fields), item_properties);
            }
        }
    }
    map
}

/// Builder for tool input schemas.
#[derive(Debug, Default)]
pub struct ParameterBuilder {
    properties: JsonObject,
    required: Vec<String>,
}

impl ParameterBuilder {
    fn property(mut self, name: &str, schema: Value, required: bool) -> Self {
        self.properties.insert(name.to_string(), schema);
        if required {
            self.required.push(name.to_string());
        }
        self
    }

    pub fn string(self, name: &str, required: bool) -> Self {
        self.property(name, json!({ "type": "string" }), required)
    }

    pub fn number(self, name: &str, required: bool) -> Self {
        self.property(name, json!({ "type": "number" }), required)
    }

    pub fn boolean(self, name: &str, required: bool) -> Self {
        self.property(name, json!({ "type": "boolean" }), required)
    }

    /// Add a free-form object property.
    pub fn object(self, name: &str, required: bool) -> Self {
        self.property(
            name,
            json!({ "type": "object", "additionalProperties": true }),
            required,
        )
    }

    /// Add an array-of-strings property.
    pub fn string_list(self, name: &str, required: bool) -> Self {
        self.property(
            name,
            json!({ "type": "array", "items": { "type": "string" } }),
            required,
        )
    }

    /// Add an array property whose items follow `item`.
    pub fn object_list(self, name: &str, item: ParameterBuilder, required: bool) -> Self {
        self.property(
            name,
            json!({ "type": "array", "items": item.into_schema() }),
            required,
        )
    }

    /// Attach a description to an already added property.
    pub fn describe(mut self, name: &str, description: &str) -> Self {
        if let Some(Value::Object(prop)) = self.properties.get_mut(name) {
            prop.insert("description".into(), Value::String(description.to_string()));
        }
        self
    }

    fn into_schema(self) -> Value {
        json!({
            "type": "object",
            "properties": self.properties,
            "required": self.required,
        })
    }

    pub fn build(self) -> ToolParameters {
        ToolParameters {
            schema: self.into_schema(),
        }
    }
}
