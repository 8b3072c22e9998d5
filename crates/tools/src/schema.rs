//! Tool input schemas
//!
//! A small JSON-Schema-shaped description of each tool's arguments,
//! checked before the tool runs. Validation covers required fields,
//! primitive types and enum membership; unknown extra properties pass
//! through untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::facade::ToolError;

/// Declared schema of one tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    pub input_schema: InputSchema,
}

impl ToolSchema {
    pub fn validate(&self, input: &Value) -> Result<(), ToolError> {
        self.input_schema.validate(input)
    }
}

/// Object schema for tool arguments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSchema {
    #[serde(rename = "type")]
    pub schema_type: String,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertySchema>,
    #[serde(default)]
    pub required: Vec<String>,
}

impl InputSchema {
    pub fn object() -> Self {
        Self {
            schema_type: "object".to_string(),
            properties: BTreeMap::new(),
            required: Vec::new(),
        }
    }

    pub fn property(mut self, name: &str, schema: PropertySchema, required: bool) -> Self {
        self.properties.insert(name.to_string(), schema);
        if required {
            self.required.push(name.to_string());
        }
        self
    }

    fn validate(&self, input: &Value) -> Result<(), ToolError> {
        let obj = match input {
            Value::Object(obj) => obj,
            _ if self.properties.is_empty() => return Ok(()),
            _ => return Err(ToolError::invalid_params("Input must be a JSON object")),
        };

        for required in &self.required {
            if !obj.contains_key(required) {
                return Err(ToolError::invalid_params(format!(
                    "Missing required field: {required}"
                )));
            }
        }

        for (name, value) in obj {
            if let Some(schema) = self.properties.get(name) {
                schema.check(name, value)?;
            }
        }

        Ok(())
    }
}

/// Schema of a single property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub prop_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

impl PropertySchema {
    pub fn string(description: impl Into<String>) -> Self {
        Self {
            prop_type: "string".to_string(),
            description: Some(description.into()),
            enum_values: None,
        }
    }

    pub fn integer(description: impl Into<String>) -> Self {
        Self {
            prop_type: "integer".to_string(),
            description: Some(description.into()),
            enum_values: None,
        }
    }

    pub fn boolean(description: impl Into<String>) -> Self {
        Self {
            prop_type: "boolean".to_string(),
            description: Some(description.into()),
            enum_values: None,
        }
    }

    pub fn enum_type(description: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            prop_type: "string".to_string(),
            description: Some(description.into()),
            enum_values: Some(values),
        }
    }

    fn check(&self, name: &str, value: &Value) -> Result<(), ToolError> {
        let type_ok = match self.prop_type.as_str() {
            "string" => value.is_string(),
            "integer" => value.is_i64() || value.is_u64(),
            "number" => value.is_number(),
            "boolean" => value.is_boolean(),
            _ => true,
        };
        if !type_ok {
            return Err(ToolError::invalid_params(format!(
                "Field '{name}' must be of type '{}'",
                self.prop_type
            )));
        }

        if let (Some(allowed), Some(actual)) = (&self.enum_values, value.as_str()) {
            if !allowed.iter().any(|v| v == actual) {
                return Err(ToolError::invalid_params(format!(
                    "Field '{name}' must be one of: [{}], got '{actual}'",
                    allowed.join(", ")
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> ToolSchema {
        ToolSchema {
            name: "test".to_string(),
            description: "test schema".to_string(),
            input_schema: InputSchema::object()
                .property("text", PropertySchema::string("Utterance"), true)
                .property(
                    "language",
                    PropertySchema::enum_type(
                        "Locale",
                        vec!["ru-RU".into(), "en-US".into(), "th-TH".into()],
                    ),
                    false,
                ),
        }
    }

    #[test]
    fn accepts_valid_input() {
        assert!(schema()
            .validate(&json!({"text": "book a court", "language": "en-US"}))
            .is_ok());
    }

    #[test]
    fn rejects_missing_required_field() {
        let error = schema().validate(&json!({"language": "en-US"})).unwrap_err();
        assert!(error.message.contains("text"));
    }

    #[test]
    fn rejects_wrong_type() {
        let error = schema().validate(&json!({"text": 42})).unwrap_err();
        assert!(error.message.contains("string"));
    }

    #[test]
    fn rejects_unknown_enum_value() {
        let error = schema()
            .validate(&json!({"text": "hi", "language": "de-DE"}))
            .unwrap_err();
        assert!(error.message.contains("must be one of"));
    }

    #[test]
    fn unknown_extra_properties_pass() {
        assert!(schema()
            .validate(&json!({"text": "hi", "extra": {"nested": true}}))
            .is_ok());
    }

    #[test]
    fn non_object_input_rejected_when_properties_declared() {
        assert!(schema().validate(&json!("just a string")).is_err());
    }
}
