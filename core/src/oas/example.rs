#![deny(missing_docs)]

//! # Example Synthesis
//!
//! Builds example payloads and copyable request snippets from resolved
//! schemas, mirroring what the reference explorer shows in its Example tab.

use crate::error::AppResult;
use crate::oas::document::{Components, Operation};
use crate::oas::resolver::resolve_schema;
use serde_json::Value as JsonValue;

/// Synthesizes an example payload from a resolved schema.
///
/// One key per declared property, in declared order. The property's
/// `example` value is used verbatim when present (including `0`, `false`
/// and `null`); otherwise the value is the empty string. Schemas without
/// properties produce an empty object.
pub fn example_payload(schema: &JsonValue) -> JsonValue {
    let mut payload = serde_json::Map::new();

    if let Some(properties) = schema.get("properties").and_then(|p| p.as_object()) {
        for (name, declaration) in properties {
            let value = declaration
                .get("example")
                .cloned()
                .unwrap_or_else(|| JsonValue::String(String::new()));
            payload.insert(name.clone(), value);
        }
    }

    JsonValue::Object(payload)
}

/// Builds the example request-body payload for an operation.
///
/// Operations without an `application/json` request body yield an empty
/// object. The schema is resolved first, so `$ref` bodies work.
pub fn request_body_example(components: &Components, operation: &Operation) -> AppResult<JsonValue> {
    let Some(schema) = operation.json_request_schema() else {
        return Ok(JsonValue::Object(serde_json::Map::new()));
    };

    let resolved = resolve_schema(components, schema)?;
    Ok(example_payload(resolved))
}

/// Renders a copyable curl invocation for an endpoint.
pub fn curl_snippet(url: &str, headers: &[(String, String)], body: &JsonValue) -> String {
    let mut lines = vec![format!("curl --location '{}' \\", url)];
    for (name, value) in headers {
        lines.push(format!("--header '{}: {}' \\", name, value));
    }
    let payload = serde_json::to_string_pretty(body).unwrap_or_else(|_| "{}".to_string());
    lines.push(format!("--data '{}'", payload));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_example_payload_one_key_per_property() {
        let schema = json!({
            "type": "object",
            "properties": {
                "contact": {"type": "string", "example": "user@example.com"},
                "channel": {"type": "string"}
            }
        });

        let payload = example_payload(&schema);
        assert_eq!(
            payload,
            json!({"contact": "user@example.com", "channel": ""})
        );
    }

    #[test]
    fn test_example_payload_keeps_falsy_examples() {
        // Presence decides, not truthiness: 0, false and null are kept.
        let schema = json!({
            "properties": {
                "tries": {"type": "integer", "example": 0},
                "isNewUser": {"type": "boolean", "example": false},
                "parent": {"type": "string", "example": null}
            }
        });

        let payload = example_payload(&schema);
        assert_eq!(payload["tries"], 0);
        assert_eq!(payload["isNewUser"], false);
        assert_eq!(payload["parent"], JsonValue::Null);
    }

    #[test]
    fn test_example_payload_without_properties_is_empty_object() {
        let schema = json!({"type": "string"});
        assert_eq!(example_payload(&schema), json!({}));
    }

    #[test]
    fn test_request_body_example_resolves_ref() {
        let components: Components = serde_json::from_value(json!({
            "schemas": {
                "InitRequest": {
                    "properties": {
                        "contact": {"type": "string", "example": "+15550100"}
                    }
                }
            }
        }))
        .unwrap();

        let operation: Operation = serde_json::from_value(json!({
            "requestBody": {
                "content": {
                    "application/json": {
                        "schema": {"$ref": "#/components/schemas/InitRequest"}
                    }
                }
            },
            "responses": {"200": {"description": "OK"}}
        }))
        .unwrap();

        let payload = request_body_example(&components, &operation).unwrap();
        assert_eq!(payload, json!({"contact": "+15550100"}));
    }

    #[test]
    fn test_request_body_example_without_body_is_empty() {
        let components = Components::default();
        let operation = Operation::default();
        let payload = request_body_example(&components, &operation).unwrap();
        assert_eq!(payload, json!({}));
    }

    #[test]
    fn test_curl_snippet_shape() {
        let headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        let snippet = curl_snippet(
            "https://api.example.com/v1/signin",
            &headers,
            &json!({"username": "user1"}),
        );

        assert!(snippet.starts_with("curl --location 'https://api.example.com/v1/signin' \\"));
        assert!(snippet.contains("--header 'Content-Type: application/json' \\"));
        assert!(snippet.contains("--data '{"));
        assert!(snippet.contains("\"username\": \"user1\""));
    }
}
