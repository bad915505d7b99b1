#![deny(missing_docs)]

//! # OpenAPI Module
//!
//! - **document**: typed shims over the raw spec document.
//! - **resolver**: `$ref` resolution against the components section.
//! - **example**: example payload synthesis from resolved schemas.
//! - **catalog**: tag-grouped endpoint catalog with filtering.
//! - **validation**: document-level reference checks.

pub mod catalog;
pub mod document;
pub mod example;
pub mod resolver;
pub mod validation;

// Re-export public API to keep call sites short
pub use catalog::{build_catalog, filter_catalog, EndpointCatalog, EndpointEntry, DEFAULT_TAG};
pub use document::{
    parse_document, ApiDocument, ApiInfo, Components, MediaType, Operation, PathItem, RequestBody,
    ResponseDecl,
};
pub use example::{curl_snippet, example_payload, request_body_example};
pub use resolver::{resolve_ref, resolve_schema};
pub use validation::validate_document;
