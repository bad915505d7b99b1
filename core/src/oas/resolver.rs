#![deny(missing_docs)]

//! # Reference Resolver
//!
//! Resolves `#/components/...` references against the components section of
//! the current document. Resolution is strictly local: external documents
//! are never fetched, and a reference that leaves the `#/components/`
//! namespace is a lookup error.

use crate::error::{AppError, AppResult};
use crate::oas::document::Components;
use percent_encoding::percent_decode_str;
use serde_json::Value as JsonValue;

const COMPONENTS_PREFIX: &str = "#/components/";

/// Resolves a `$ref` string to the concrete object it points to.
///
/// The path after `#/components/` is split into JSON Pointer segments and
/// walked one at a time; any absent segment fails with a lookup error
/// naming the reference and the segment that was missing. Dangling refs are
/// a data error in the source document, not a condition to recover from.
pub fn resolve_ref<'a>(components: &'a Components, reference: &str) -> AppResult<&'a JsonValue> {
    let Some(pointer) = reference.strip_prefix(COMPONENTS_PREFIX) else {
        return Err(AppError::Lookup(format!(
            "Reference '{}' does not point into {}",
            reference, COMPONENTS_PREFIX
        )));
    };

    let mut segments = pointer.split('/').map(decode_pointer_segment);

    let kind = match segments.next() {
        Some(kind) if !kind.is_empty() => kind,
        _ => {
            return Err(AppError::Lookup(format!(
                "Reference '{}' is missing a component section",
                reference
            )));
        }
    };

    let mut current = components.section(&kind).ok_or_else(|| {
        AppError::Lookup(format!(
            "Reference '{}' names unknown component section '{}'",
            reference, kind
        ))
    })?;

    for segment in segments {
        current = walk_segment(current, &segment).ok_or_else(|| {
            AppError::Lookup(format!(
                "Reference '{}' has no entry for segment '{}'",
                reference, segment
            ))
        })?;
    }

    Ok(current)
}

/// Resolves the schema actually used for rendering a body.
///
/// - an inline schema passes through untouched,
/// - a `$ref` schema resolves against components,
/// - a `oneOf` resolves to its first variant (the variant shown by the
///   reference explorer), following that variant's `$ref` if present.
pub fn resolve_schema<'a>(
    components: &'a Components,
    schema: &'a JsonValue,
) -> AppResult<&'a JsonValue> {
    if let Some(reference) = schema.get("$ref").and_then(|v| v.as_str()) {
        return resolve_ref(components, reference);
    }

    if let Some(first) = schema
        .get("oneOf")
        .and_then(|v| v.as_array())
        .and_then(|variants| variants.first())
    {
        if let Some(reference) = first.get("$ref").and_then(|v| v.as_str()) {
            return resolve_ref(components, reference);
        }
        return Ok(first);
    }

    Ok(schema)
}

/// Walks one pointer segment into an object (by key) or array (by index).
fn walk_segment<'a>(value: &'a JsonValue, segment: &str) -> Option<&'a JsonValue> {
    match value {
        JsonValue::Object(map) => map.get(segment),
        JsonValue::Array(items) => items.get(segment.parse::<usize>().ok()?),
        _ => None,
    }
}

/// Decodes a JSON Pointer segment (handles `~1` and `~0`).
fn decode_pointer_segment(segment: &str) -> String {
    let decoded = segment.replace("~1", "/").replace("~0", "~");
    percent_decode_str(&decoded)
        .decode_utf8_lossy()
        .into_owned()
}
