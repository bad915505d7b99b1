#![deny(missing_docs)]

//! # Simulate Command
//!
//! Runs the explorer's "Send Request" demo from the terminal: a canned
//! response chosen by path, after an artificial delay. No network traffic.

use apiref_core::{AppResult, Sandbox};
use std::time::Duration;

/// Arguments for the simulate command.
#[derive(clap::Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Endpoint path to simulate (e.g. /v1/passwordless/init).
    #[clap(long)]
    pub path: String,

    /// HTTP method of the simulated request.
    #[clap(long, default_value = "post")]
    pub method: String,

    /// Artificial delay before the canned response, in milliseconds.
    #[clap(long, default_value_t = 1000)]
    pub delay_ms: u64,
}

/// Executes the simulate command.
pub fn execute(args: &SimulateArgs) -> AppResult<()> {
    let sandbox = Sandbox::new(Duration::from_millis(args.delay_ms));
    let exchange = sandbox.simulate(&args.path, &args.method);

    println!("{} {}", exchange.method, exchange.path);
    println!(
        "{} ({} ms, simulated)",
        exchange.status,
        exchange.elapsed.as_millis()
    );
    for (name, value) in &exchange.headers {
        println!("{}: {}", name, value);
    }
    println!();
    println!(
        "{}",
        serde_json::to_string_pretty(&exchange.body).unwrap_or_else(|_| "{}".to_string())
    );

    Ok(())
}
