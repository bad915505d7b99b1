#![deny(missing_docs)]

//! # Document Validation
//!
//! Reference-integrity checks over a parsed document. Every `$ref` string
//! found anywhere in the document must resolve against the components
//! section; the first dangling reference is reported as a data error with
//! the context it was found in.

use crate::error::{AppError, AppResult};
use crate::oas::document::ApiDocument;
use crate::oas::resolver::resolve_ref;
use serde_json::Value as JsonValue;

/// Validates that every `$ref` in the document resolves.
///
/// Returns the number of references checked.
pub fn validate_document(document: &ApiDocument) -> AppResult<usize> {
    let mut references = Vec::new();
    collect_refs(&document.raw, "#", &mut references);

    for (context, reference) in &references {
        resolve_ref(&document.components, reference)
            .map_err(|e| AppError::General(format!("Dangling reference at {}: {}", context, e)))?;
    }

    Ok(references.len())
}

/// Recursively collects `(context, $ref)` pairs from a JSON tree.
fn collect_refs(value: &JsonValue, context: &str, out: &mut Vec<(String, String)>) {
    match value {
        JsonValue::Object(map) => {
            for (key, child) in map {
                if key == "$ref" {
                    if let Some(reference) = child.as_str() {
                        out.push((context.to_string(), reference.to_string()));
                        continue;
                    }
                }
                let child_context = format!("{}.{}", context, key);
                collect_refs(child, &child_context, out);
            }
        }
        JsonValue::Array(items) => {
            for (idx, child) in items.iter().enumerate() {
                let child_context = format!("{}[{}]", context, idx);
                collect_refs(child, &child_context, out);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::document::parse_document;

    #[test]
    fn test_validate_document_accepts_resolving_refs() {
        let yaml = r#"
info: {title: T, version: "1.0"}
paths:
  /v1/signin:
    post:
      requestBody:
        content:
          application/json:
            schema:
              $ref: '#/components/schemas/SignInRequest'
      responses:
        '200':
          content:
            application/json:
              schema:
                oneOf:
                  - $ref: '#/components/schemas/TokenResponse'
          description: OK
components:
  schemas:
    SignInRequest:
      type: object
    TokenResponse:
      type: object
"#;
        let document = parse_document(yaml).unwrap();
        let checked = validate_document(&document).unwrap();
        assert_eq!(checked, 2);
    }

    #[test]
    fn test_validate_document_reports_dangling_ref_with_context() {
        let yaml = r#"
info: {title: T, version: "1.0"}
paths:
  /v1/signin:
    post:
      requestBody:
        content:
          application/json:
            schema:
              $ref: '#/components/schemas/Missing'
      responses:
        '200': {description: OK}
components:
  schemas:
    SignInRequest:
      type: object
"#;
        let document = parse_document(yaml).unwrap();
        let err = validate_document(&document).unwrap_err();
        let message = format!("{}", err);
        assert!(message.contains("Dangling reference"));
        assert!(message.contains("paths./v1/signin.post.requestBody"));
        assert!(message.contains("'Missing'"));
    }

    #[test]
    fn test_validate_document_without_refs_checks_nothing() {
        let yaml = r#"
info: {title: T, version: "1.0"}
paths:
  /ping:
    get:
      responses:
        '200': {description: OK}
"#;
        let document = parse_document(yaml).unwrap();
        assert_eq!(validate_document(&document).unwrap(), 0);
    }

    #[test]
    fn test_nested_component_refs_are_checked() {
        // A ref inside a component schema itself must also resolve
        let yaml = r#"
info: {title: T, version: "1.0"}
paths: {}
components:
  schemas:
    Parent:
      type: object
      properties:
        child:
          $ref: '#/components/schemas/Gone'
"#;
        let document = parse_document(yaml).unwrap();
        let err = validate_document(&document).unwrap_err();
        assert!(format!("{}", err).contains("#.components.schemas.Parent"));
    }
}
