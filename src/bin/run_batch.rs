//! Evaluate a batch of calculation requests from a JSON file
//!
//! Reads a JSON array of tagged requests, runs every calculator in
//! parallel, and emits one outcome per request in input order:
//! `{"success":true,"result":...}` or `{"success":false,"error":...}`.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use fincalc_system::{evaluate, CalculationRequest, CalculationResult};
use rayon::prelude::*;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "run_batch", version, about = "Batch calculator runner")]
struct Args {
    /// Path to a JSON array of calculation requests
    input: PathBuf,

    /// Write outcomes here instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Pretty-print the output JSON
    #[arg(long)]
    pretty: bool,
}

/// One outcome per request, mirroring the HTTP layer's body convention
#[derive(Debug, Serialize)]
struct BatchOutcome {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<CalculationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let requests: Vec<CalculationRequest> =
        serde_json::from_str(&raw).context("input is not a JSON array of calculation requests")?;

    log::info!("evaluating {} requests", requests.len());
    let start = Instant::now();

    // Every calculator is pure, so requests fan out trivially
    let outcomes: Vec<BatchOutcome> = requests
        .par_iter()
        .map(|request| match evaluate(request) {
            Ok(result) => BatchOutcome {
                success: true,
                result: Some(result),
                error: None,
            },
            Err(err) => {
                log::warn!("request failed validation: {}", err);
                BatchOutcome {
                    success: false,
                    result: None,
                    error: Some(err.to_string()),
                }
            }
        })
        .collect();

    let failures = outcomes.iter().filter(|o| !o.success).count();
    log::info!(
        "evaluated {} requests ({} failed) in {:?}",
        outcomes.len(),
        failures,
        start.elapsed()
    );

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&outcomes)?
    } else {
        serde_json::to_string(&outcomes)?
    };

    match args.output {
        Some(path) => fs::write(&path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{}", rendered),
    }

    Ok(())
}
