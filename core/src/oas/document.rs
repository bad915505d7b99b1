#![deny(missing_docs)]

//! # OpenAPI Document Parsing
//!
//! Typed shims over the raw spec document. Parsing goes through
//! `serde_json::Value` with key order preserved, so YAML and JSON specs take
//! the same path and path/method insertion order survives into the catalog.

use crate::error::{AppError, AppResult};
use indexmap::IndexMap;
use regex::Regex;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Methods recognized as operations inside a Path Item.
const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// A parsed OpenAPI document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiDocument {
    /// Declared OpenAPI version string (e.g. "3.0.0").
    #[serde(default)]
    pub openapi: Option<String>,
    /// Document-level metadata.
    pub info: ApiInfo,
    /// Path key -> Path Item, in document order.
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
    /// Reusable component definitions.
    #[serde(default)]
    pub components: Components,
    /// Raw JSON representation of the whole document.
    #[serde(skip)]
    pub raw: JsonValue,
}

/// Document-level `info` metadata.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiInfo {
    /// API title.
    pub title: String,
    /// API version.
    pub version: String,
    /// Longer description.
    #[serde(default)]
    pub description: Option<String>,
}

/// A single path entry: method -> operation, in document order.
///
/// Non-method keys (`summary`, `parameters`, `x-` extensions) are preserved
/// verbatim in `extensions`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathItem {
    /// Lowercased HTTP method -> operation.
    pub operations: IndexMap<String, Operation>,
    /// Keys of the Path Item that are not operations.
    pub extensions: BTreeMap<String, JsonValue>,
}

impl<'de> Deserialize<'de> for PathItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = IndexMap::<String, JsonValue>::deserialize(deserializer)?;
        let mut operations = IndexMap::new();
        let mut extensions = BTreeMap::new();

        for (key, value) in entries {
            let method = key.to_ascii_lowercase();
            if HTTP_METHODS.contains(&method.as_str()) {
                let operation: Operation =
                    serde_json::from_value(value).map_err(de::Error::custom)?;
                operations.insert(method, operation);
            } else {
                extensions.insert(key, value);
            }
        }

        Ok(PathItem {
            operations,
            extensions,
        })
    }
}

/// A single HTTP method handler definition.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Short summary shown in endpoint listings.
    #[serde(default)]
    pub summary: Option<String>,
    /// Longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// Tags grouping this operation for navigation.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Deprecation marker.
    #[serde(default)]
    pub deprecated: bool,
    /// Request body definition (if any).
    #[serde(default)]
    pub request_body: Option<RequestBody>,
    /// Status code (or range, or "default") -> response declaration.
    #[serde(default)]
    pub responses: IndexMap<String, ResponseDecl>,
}

impl Operation {
    /// Returns the `application/json` request body schema, if declared.
    pub fn json_request_schema(&self) -> Option<&JsonValue> {
        self.request_body
            .as_ref()?
            .content
            .get("application/json")?
            .schema
            .as_ref()
    }

    /// Returns the `application/json` schema of the 200 response, if declared.
    pub fn success_response_schema(&self) -> Option<&JsonValue> {
        self.responses
            .get("200")?
            .content
            .as_ref()?
            .get("application/json")?
            .schema
            .as_ref()
    }
}

/// Request body declaration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RequestBody {
    /// Description of the body.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the body is required.
    #[serde(default)]
    pub required: bool,
    /// Media type -> content declaration.
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

/// A media type entry inside `content`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MediaType {
    /// The raw schema object (inline or `$ref`).
    #[serde(default)]
    pub schema: Option<JsonValue>,
}

/// A declared response for one status code.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ResponseDecl {
    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,
    /// Media type -> content declaration, when a body is declared.
    #[serde(default)]
    pub content: Option<IndexMap<String, MediaType>>,
}

/// The `components` section: kind (`schemas`, `responses`, ...) -> raw map.
///
/// Entries stay as raw JSON so the resolver can walk arbitrarily deep
/// pointer segments below a component name.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct Components {
    sections: IndexMap<String, JsonValue>,
}

impl Components {
    /// Returns a whole component section (e.g. everything under `schemas`).
    pub fn section(&self, kind: &str) -> Option<&JsonValue> {
        self.sections.get(kind)
    }

    /// Returns one named entry of a section.
    pub fn get(&self, kind: &str, name: &str) -> Option<&JsonValue> {
        self.sections.get(kind)?.get(name)
    }

    /// True if no sections are declared.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Parses an OpenAPI document from YAML or JSON text.
///
/// Structural requirements enforced here:
/// - `info.title` and `info.version` are non-empty,
/// - every path key starts with `/`,
/// - no two path templates share the same templated shape.
///
/// Reference integrity is checked separately by
/// [`validate_document`](crate::oas::validation::validate_document).
pub fn parse_document(content: &str) -> AppResult<ApiDocument> {
    let raw: JsonValue = serde_yaml::from_str(content)
        .map_err(|e| AppError::General(format!("Failed to parse OpenAPI document: {}", e)))?;

    let mut document: ApiDocument = serde_json::from_value(raw.clone())
        .map_err(|e| AppError::General(format!("Failed to parse OpenAPI document: {}", e)))?;
    document.raw = raw;

    if document.info.title.trim().is_empty() {
        return Err(AppError::General(
            "Info.title must be a non-empty string".into(),
        ));
    }
    if document.info.version.trim().is_empty() {
        return Err(AppError::General(
            "Info.version must be a non-empty string".into(),
        ));
    }

    validate_paths(&document.paths)?;

    Ok(document)
}

/// Validates path keys and template uniqueness constraints.
fn validate_paths(paths: &IndexMap<String, PathItem>) -> AppResult<()> {
    let template_re = Regex::new(r"\{[^}]+}").expect("Invalid regex constant");
    let mut normalized: IndexMap<String, &str> = IndexMap::new();

    for path in paths.keys() {
        if !path.starts_with('/') {
            return Err(AppError::General(format!(
                "Path item key '{}' must start with '/'",
                path
            )));
        }

        let normalized_path = template_re.replace_all(path, "{}").to_string();
        if let Some(existing) = normalized.get(&normalized_path) {
            if *existing != path.as_str() {
                return Err(AppError::General(format!(
                    "Path template '{}' conflicts with '{}' (same templated shape)",
                    path, existing
                )));
            }
        } else {
            normalized.insert(normalized_path, path.as_str());
        }
    }

    Ok(())
}
