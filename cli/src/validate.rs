#![deny(missing_docs)]

//! # Validate Command
//!
//! Checks a spec's reference integrity: dangling `$ref`s are data errors
//! and should fail the docs build instead of surfacing in the explorer UI.

use apiref_core::oas::{parse_document, validate_document};
use apiref_core::{AppError, AppResult};
use std::fs;
use std::path::PathBuf;

/// Arguments for the validate command.
#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Path to the OpenAPI spec (YAML or JSON).
    #[clap(long, default_value = "docs/openapi.yaml")]
    pub spec: PathBuf,
}

/// Executes the validate command.
pub fn execute(args: &ValidateArgs) -> AppResult<()> {
    if !args.spec.exists() {
        return Err(AppError::General(format!(
            "Spec file not found: {:?}",
            args.spec
        )));
    }

    let content = fs::read_to_string(&args.spec)?;
    let document = parse_document(&content)?;
    let checked = validate_document(&document)?;

    println!("{:?}: {} references checked, all resolve.", args.spec, checked);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_execute_valid_spec() {
        let dir = tempdir().unwrap();
        let spec_path = dir.path().join("openapi.yaml");
        fs::write(
            &spec_path,
            r#"
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
        '200': {description: OK}
components:
  schemas:
    SignInRequest: {type: object}
"#,
        )
        .unwrap();

        execute(&ValidateArgs { spec: spec_path }).unwrap();
    }

    #[test]
    fn test_execute_dangling_ref_fails() {
        let dir = tempdir().unwrap();
        let spec_path = dir.path().join("openapi.yaml");
        fs::write(
            &spec_path,
            r#"
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
"#,
        )
        .unwrap();

        let err = execute(&ValidateArgs { spec: spec_path }).unwrap_err();
        assert!(format!("{}", err).contains("Dangling reference"));
    }
}
