#![deny(missing_docs)]

//! # Stats Command
//!
//! Best-effort star/fork counts for the landing page. The fetch aborts
//! after a fixed timeout and every failure path (DNS, HTTP status, bad
//! payload, timeout) degrades to zero values instead of propagating.

use apiref_core::{AppError, AppResult};
use serde::Deserialize;
use std::time::Duration;

/// Arguments for the stats command.
#[derive(clap::Args, Debug, Clone)]
pub struct StatsArgs {
    /// Repository in `owner/name` form.
    #[clap(long)]
    pub repo: String,

    /// API base URL.
    #[clap(long, default_value = "https://api.github.com")]
    pub api_base: String,

    /// Abort the fetch after this many seconds.
    #[clap(long, default_value_t = 5)]
    pub timeout_secs: u64,
}

/// Star and fork counts for a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RepoStats {
    /// Stargazer count.
    pub stars: u64,
    /// Fork count.
    pub forks: u64,
}

/// Wire shape of the repository endpoint; everything else is ignored.
#[derive(Debug, Deserialize)]
struct RepoPayload {
    #[serde(default)]
    stargazers_count: Option<u64>,
    #[serde(default)]
    forks_count: Option<u64>,
}

/// Executes the stats command.
pub fn execute(args: &StatsArgs) -> AppResult<()> {
    let stats = fetch_stats(
        &args.api_base,
        &args.repo,
        Duration::from_secs(args.timeout_secs),
    );
    println!("{}: {} stars, {} forks", args.repo, stats.stars, stats.forks);
    Ok(())
}

/// Fetches stats, degrading to zero values on any failure.
pub fn fetch_stats(api_base: &str, repo: &str, timeout: Duration) -> RepoStats {
    match try_fetch(api_base, repo, timeout) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("Stats fetch failed ({}); using defaults.", e);
            RepoStats::default()
        }
    }
}

fn try_fetch(api_base: &str, repo: &str, timeout: Duration) -> AppResult<RepoStats> {
    let agent: ureq::Agent = ureq::Agent::config_builder()
        .timeout_global(Some(timeout))
        .build()
        .into();

    let url = format!("{}/repos/{}", api_base.trim_end_matches('/'), repo);
    let mut response = agent
        .get(&url)
        .header("User-Agent", "apiref-website")
        .call()
        .map_err(|e| AppError::General(format!("request to {} failed: {}", url, e)))?;

    let payload: RepoPayload = response
        .body_mut()
        .read_json()
        .map_err(|e| AppError::General(format!("unexpected stats payload: {}", e)))?;

    Ok(RepoStats {
        stars: payload.stargazers_count.unwrap_or(0),
        forks: payload.forks_count.unwrap_or(0),
    })
}
