//! Raplan CLI - GPU cluster reference-architecture advisor
//!
//! All command output is strict JSON on stdout; failures print an
//! `{"error": "..."}` envelope and exit with code 2.

use clap::Parser;
use raplan::catalog::{load_networking_defaults, load_patterns, resolve_catalog_dir};
use raplan::config::{CliArgs, Commands, GpuCommands, RaCommands};
use raplan::engine::{recommend_pattern, RecommendRequest};
use raplan::error::{RaplanError, Result};
use raplan::report::{ErrorReport, ListReport, RecommendReport};
use raplan::spec::lookup_or_model;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = CliArgs::parse();

    // Initialize logging; RUST_LOG overrides the verbosity flags.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter())),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args) {
        // Stdout stays JSON-only for callers, errors included.
        print_json(&ErrorReport::new(e.to_string()));
        std::process::exit(2);
    }
}

fn run(args: &CliArgs) -> Result<()> {
    match &args.command {
        Commands::Gpu { command } => match command {
            GpuCommands::Spec { gpu } => cmd_gpu_spec(gpu),
        },
        Commands::Ra { command } => match command {
            RaCommands::List => cmd_ra_list(args),
            RaCommands::Recommend { gpus, workload } => {
                cmd_ra_recommend(args, *gpus, *workload)
            }
        },
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize output: {}", e);
            std::process::exit(1);
        }
    }
}

fn cmd_gpu_spec(gpu: &str) -> Result<()> {
    // The fallback path is async; build a runtime only when this command runs.
    let rt = tokio::runtime::Runtime::new().map_err(|e| RaplanError::io("tokio-runtime", e))?;
    let spec = rt.block_on(lookup_or_model(gpu))?;
    print_json(&spec);
    Ok(())
}

fn cmd_ra_list(args: &CliArgs) -> Result<()> {
    let dir = resolve_catalog_dir(args.catalog_dir.as_deref());
    let catalog = load_patterns(&dir)?;
    print_json(&ListReport::new(&catalog.patterns));
    Ok(())
}

fn cmd_ra_recommend(args: &CliArgs, gpus: i64, workload: raplan::Workload) -> Result<()> {
    // Negative counts reject here with the engine's own error so the CLI
    // contract stays a JSON envelope rather than a clap usage message.
    let total_gpus = u32::try_from(gpus)
        .map_err(|_| RaplanError::invalid_input("total_gpus must be >= 1"))?;

    let dir = resolve_catalog_dir(args.catalog_dir.as_deref());
    let catalog = load_patterns(&dir)?;
    let net = load_networking_defaults(&dir)?;

    let request = RecommendRequest {
        total_gpus,
        workload,
        fabric: net.fabric().to_string(),
        platform: net.platform().to_string(),
    };

    let rec = recommend_pattern(&catalog.patterns, &request)?;
    print_json(&RecommendReport::new(total_gpus, workload, rec));
    Ok(())
}
