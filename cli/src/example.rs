#![deny(missing_docs)]

//! # Example Command
//!
//! Prints what the explorer's Request/Response/Example tabs show for one
//! endpoint: the resolved body template, a synthesized example payload,
//! response codes, and a copyable curl invocation.

use apiref_core::oas::{
    curl_snippet, example_payload, parse_document, request_body_example, resolve_schema,
};
use apiref_core::{AppError, AppResult};
use std::fs;
use std::path::PathBuf;

/// Arguments for the example command.
#[derive(clap::Args, Debug, Clone)]
pub struct ExampleArgs {
    /// Path to the OpenAPI spec (YAML or JSON).
    #[clap(long, default_value = "docs/openapi.yaml")]
    pub spec: PathBuf,

    /// Endpoint path as written in the spec (e.g. /v1/signin).
    #[clap(long)]
    pub path: String,

    /// HTTP method of the operation.
    #[clap(long, default_value = "post")]
    pub method: String,

    /// Base URL used in the curl snippet.
    #[clap(long, default_value = "https://api.example.com")]
    pub url: String,

    /// Extra request headers for the curl snippet.
    /// Format: `"Name=value"`, repeatable.
    #[clap(long, value_parser = parse_key_val)]
    pub header: Vec<(String, String)>,
}

/// Helper to parse "key=value" arguments.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid KEY=value: no `=` found in `{}`", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Executes the example command.
pub fn execute(args: &ExampleArgs) -> AppResult<()> {
    let content = fs::read_to_string(&args.spec)
        .map_err(|e| AppError::General(format!("Failed to read spec {:?}: {}", args.spec, e)))?;
    let document = parse_document(&content)?;

    let method = args.method.to_lowercase();
    let item = document.paths.get(&args.path).ok_or_else(|| {
        AppError::General(format!("Path not found in spec: {}", args.path))
    })?;
    let operation = item.operations.get(&method).ok_or_else(|| {
        AppError::General(format!(
            "No {} operation for {}",
            method.to_uppercase(),
            args.path
        ))
    })?;

    println!(
        "{} {}  {}",
        method.to_uppercase(),
        args.path,
        operation.summary.as_deref().unwrap_or("")
    );
    if let Some(description) = &operation.description {
        println!("{}", description);
    }
    println!();

    if let Some(schema) = operation.json_request_schema() {
        let resolved = resolve_schema(&document.components, schema)?;
        println!("Request body template:");
        println!("{}", pretty(resolved));
        println!();
    }

    let payload = request_body_example(&document.components, operation)?;
    println!("Example payload:");
    println!("{}", pretty(&payload));
    println!();

    if !operation.responses.is_empty() {
        println!("Responses:");
        for (status, response) in &operation.responses {
            println!(
                "  {}  {}",
                status,
                response.description.as_deref().unwrap_or("")
            );
        }
        println!();
    }

    if let Some(schema) = operation.success_response_schema() {
        let resolved = resolve_schema(&document.components, schema)?;
        println!("Example response (200):");
        println!("{}", pretty(&example_payload(resolved)));
        println!();
    }

    let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
    headers.extend(args.header.iter().cloned());
    let url = format!("{}{}", args.url.trim_end_matches('/'), args.path);

    println!("Example request:");
    println!("{}", curl_snippet(&url, &headers, &payload));

    Ok(())
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
