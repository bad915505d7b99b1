#![deny(missing_docs)]

//! # Apiref CLI
//!
//! Command Line Interface for the API reference explorer toolchain.
//!
//! Supported Commands:
//! - `catalog`: prints the tag-grouped endpoint listing for a spec.
//! - `example`: prints request template, example payload and curl snippet.
//! - `simulate`: runs a canned request/response exchange.
//! - `validate`: checks that every `$ref` in a spec resolves.
//! - `frontmatter`: injects YAML frontmatter into Markdown docs.
//! - `stats`: fetches repository stats with a fixed timeout.

use apiref_core::AppResult;
use clap::{Parser, Subcommand};

mod catalog;
mod example;
mod frontmatter;
mod simulate;
#[cfg(feature = "client")]
mod stats;
mod validate;

#[derive(Parser, Debug)]
#[clap(author, version, about = "API reference explorer toolchain")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Prints the tag-grouped endpoint catalog of an OpenAPI spec.
    Catalog(catalog::CatalogArgs),
    /// Prints the request body template, example payload and curl snippet
    /// for one endpoint.
    Example(example::ExampleArgs),
    /// Runs a simulated request/response exchange (no network traffic).
    Simulate(simulate::SimulateArgs),
    /// Verifies that every schema reference in a spec resolves.
    Validate(validate::ValidateArgs),
    /// Adds or normalizes YAML frontmatter across a Markdown docs tree.
    Frontmatter(frontmatter::FrontmatterArgs),
    /// Fetches star/fork counts for a repository (best effort).
    #[cfg(feature = "client")]
    Stats(stats::StatsArgs),
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Catalog(args) => catalog::execute(args)?,
        Commands::Example(args) => example::execute(args)?,
        Commands::Simulate(args) => simulate::execute(args)?,
        Commands::Validate(args) => validate::execute(args)?,
        Commands::Frontmatter(args) => frontmatter::execute(args)?,
        #[cfg(feature = "client")]
        Commands::Stats(args) => stats::execute(args)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
