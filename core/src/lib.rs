#![deny(missing_docs)]

//! # Apiref Core
//!
//! Core library for the API reference explorer toolchain.

/// Shared error types.
pub mod error;

/// Markdown frontmatter rewriting for the docs build.
pub mod frontmatter;

/// OpenAPI document parsing and cataloguing.
pub mod oas;

/// Canned request/response simulation for the explorer demo.
pub mod sandbox;

pub use error::{AppError, AppResult};
pub use oas::{
    build_catalog, example_payload, filter_catalog, parse_document, resolve_ref, resolve_schema,
    validate_document, ApiDocument, Components, EndpointCatalog, EndpointEntry, Operation,
    DEFAULT_TAG,
};
pub use sandbox::{Sandbox, SimulatedExchange};
