#![deny(missing_docs)]

//! # Endpoint Catalog
//!
//! Groups the operations of a document by tag and supports the
//! case-insensitive substring filtering used by the explorer's search box.

use crate::oas::document::{ApiDocument, Operation};
use indexmap::IndexMap;

/// Bucket used for operations that declare no tags.
pub const DEFAULT_TAG: &str = "default";

/// Tag name -> endpoint entries, both in document insertion order.
pub type EndpointCatalog = IndexMap<String, Vec<EndpointEntry>>;

/// One (path, method, operation) triple of the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointEntry {
    /// The URL path (e.g. "/v1/signin").
    pub path: String,
    /// Lowercased HTTP method.
    pub method: String,
    /// The operation definition.
    pub operation: Operation,
}

/// Builds the tag -> endpoints mapping for a document.
///
/// An operation appears once under each tag it declares; untagged
/// operations are filed under [`DEFAULT_TAG`]. Tag order follows first
/// appearance in the document, entry order follows path/method insertion
/// order.
pub fn build_catalog(document: &ApiDocument) -> EndpointCatalog {
    let mut catalog = EndpointCatalog::new();

    for (path, item) in &document.paths {
        for (method, operation) in &item.operations {
            let tags: Vec<&str> = if operation.tags.is_empty() {
                vec![DEFAULT_TAG]
            } else {
                operation.tags.iter().map(String::as_str).collect()
            };

            for tag in tags {
                catalog
                    .entry(tag.to_string())
                    .or_default()
                    .push(EndpointEntry {
                        path: path.clone(),
                        method: method.clone(),
                        operation: operation.clone(),
                    });
            }
        }
    }

    catalog
}

/// Filters a catalog by a case-insensitive substring query.
///
/// An entry survives when the query occurs in its path, its summary, or in
/// the tag name; entries without a summary only match on path and tag.
/// Tags with no surviving entry are dropped, so a query matching nothing
/// yields an empty catalog. The empty query keeps everything.
pub fn filter_catalog(catalog: &EndpointCatalog, query: &str) -> EndpointCatalog {
    let needle = query.to_lowercase();
    let mut filtered = EndpointCatalog::new();

    for (tag, entries) in catalog {
        let tag_matches = tag.to_lowercase().contains(&needle);
        let surviving: Vec<EndpointEntry> = entries
            .iter()
            .filter(|entry| {
                tag_matches
                    || entry.path.to_lowercase().contains(&needle)
                    || entry
                        .operation
                        .summary
                        .as_deref()
                        .is_some_and(|summary| summary.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();

        if !surviving.is_empty() {
            filtered.insert(tag.clone(), surviving);
        }
    }

    filtered
}
