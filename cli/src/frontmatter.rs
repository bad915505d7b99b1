#![deny(missing_docs)]

//! # Frontmatter Command
//!
//! Docs-build post-processing: walks a Markdown tree and makes sure every
//! file carries a well-formed YAML `title:` in its frontmatter.

use apiref_core::frontmatter::rewrite;
use apiref_core::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Arguments for the frontmatter command.
#[derive(clap::Args, Debug, Clone)]
pub struct FrontmatterArgs {
    /// Directory holding the Markdown docs.
    #[clap(long, default_value = "src/content/docs")]
    pub docs_dir: PathBuf,
}

/// Executes the frontmatter command.
pub fn execute(args: &FrontmatterArgs) -> AppResult<()> {
    if !args.docs_dir.exists() {
        return Err(AppError::General(format!(
            "Docs directory not found: {:?}",
            args.docs_dir
        )));
    }

    println!("Adding frontmatter to markdown files...");
    let updated = process_directory(&args.docs_dir)?;
    println!("Done: {} file(s) updated.", updated);

    Ok(())
}

/// Walks the docs tree and rewrites each Markdown file that needs it.
///
/// Returns the number of files updated.
pub fn process_directory(docs_dir: &Path) -> AppResult<usize> {
    let mut updated = 0;

    for entry in WalkDir::new(docs_dir).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "md") {
            if process_file(path)? {
                updated += 1;
            }
        }
    }

    Ok(updated)
}

fn process_file(path: &Path) -> AppResult<bool> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::General(format!("Failed to read {:?}: {}", path, e)))?;

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let Some(rewritten) = rewrite(&content, &stem) else {
        return Ok(false);
    };

    fs::write(path, rewritten)
        .map_err(|e| AppError::General(format!("Failed to write {:?}: {}", path, e)))?;
    println!(
        "  Updated frontmatter in {}",
        path.file_name().unwrap_or_default().to_string_lossy()
    );

    Ok(true)
}
