//! Command-line driver for the planning engine.
//!
//! Reads a JSON `PlanRequest` from a file (or stdin when no path is given)
//! and writes the `PlanResponse` as JSON to stdout.
//!
//! # Usage
//!
//! ```bash
//! planner request.json
//! cat request.json | planner
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: log filter (default: info)

use std::env;
use std::io::Read;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use tourplan::{plan, EngineConfig, PlanRequest, PlanResponse};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let input = match env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read request file '{}'", path))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("cannot read request from stdin")?;
            buffer
        }
    };

    let request: PlanRequest =
        serde_json::from_str(&input).context("request is not a valid PlanRequest")?;

    let outcome = plan(&request, &EngineConfig::default())?;
    let response = PlanResponse::from(&outcome);

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
