#![deny(missing_docs)]

//! # Catalog Command
//!
//! Prints the tag-grouped endpoint listing the explorer shows in its
//! sidebar, with optional search filtering.

use apiref_core::oas::{build_catalog, filter_catalog, parse_document};
use apiref_core::{AppError, AppResult};
use std::fs;
use std::path::PathBuf;

/// Arguments for the catalog command.
#[derive(clap::Args, Debug, Clone)]
pub struct CatalogArgs {
    /// Path to the OpenAPI spec (YAML or JSON).
    #[clap(long, default_value = "docs/openapi.yaml")]
    pub spec: PathBuf,

    /// Case-insensitive substring filter over path, summary and tag.
    #[clap(long)]
    pub filter: Option<String>,
}

/// Executes the catalog command.
pub fn execute(args: &CatalogArgs) -> AppResult<()> {
    if !args.spec.exists() {
        return Err(AppError::General(format!(
            "Spec file not found: {:?}",
            args.spec
        )));
    }

    let content = fs::read_to_string(&args.spec)?;
    let document = parse_document(&content)?;

    println!("{} {}", document.info.title, document.info.version);
    if let Some(description) = &document.info.description {
        println!("{}", description);
    }
    println!();

    let catalog = build_catalog(&document);
    let catalog = match &args.filter {
        Some(query) => filter_catalog(&catalog, query),
        None => catalog,
    };

    if catalog.is_empty() {
        println!("No endpoints match.");
        return Ok(());
    }

    for (tag, entries) in &catalog {
        println!("{} ({})", tag, entries.len());
        for entry in entries {
            let summary = entry.operation.summary.as_deref().unwrap_or("");
            let marker = if entry.operation.deprecated {
                " [deprecated]"
            } else {
                ""
            };
            println!(
                "  {:7} {}  {}{}",
                entry.method.to_uppercase(),
                entry.path,
                summary,
                marker
            );
        }
        println!();
    }

    Ok(())
}
