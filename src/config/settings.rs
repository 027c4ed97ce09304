//! CLI configuration for Raplan
//!
//! Defines the command-line surface: GPU spec lookup and the
//! reference-architecture commands, all emitting strict JSON on stdout.

use crate::catalog::Workload;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Raplan - reference-architecture advisor for GPU cluster sizing
#[derive(Parser, Debug, Clone)]
#[command(name = "raplan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Strict JSON outputs for GPU specs and RA pattern selection")]
#[command(long_about = r#"
Raplan recommends a GPU cluster reference-architecture pattern for a
requested GPU count and workload, and resolves GPU model names to memory
capacity.

All command output is strict JSON on stdout, suitable for piping into
other tooling. Errors are emitted as {"error": "..."} with exit code 2.

Examples:
  raplan ra recommend --gpus 128 --workload training
  raplan ra list
  raplan gpu spec --gpu "NVIDIA H100"
"#)]
pub struct CliArgs {
    /// Directory holding ra_patterns.yaml and networking_defaults.yaml
    #[arg(long, value_name = "DIR", env = "RAPLAN_CATALOG_DIR", global = true)]
    pub catalog_dir: Option<PathBuf>,

    /// Verbose logging (can be repeated: -v, -vv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// GPU-related commands
    Gpu {
        #[command(subcommand)]
        command: GpuCommands,
    },
    /// Reference-architecture related commands
    Ra {
        #[command(subcommand)]
        command: RaCommands,
    },
}

/// GPU subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum GpuCommands {
    /// Lookup GPU specs (strict JSON)
    Spec {
        /// GPU model name, e.g. "NVIDIA H100"
        #[arg(long, value_name = "NAME")]
        gpu: String,
    },
}

/// Reference-architecture subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum RaCommands {
    /// List available RA patterns (strict JSON)
    List,
    /// Recommend an RA pattern for a GPU count (strict JSON)
    Recommend {
        /// Total GPUs desired, e.g. 128
        #[arg(long, value_name = "NUM", allow_negative_numbers = true)]
        gpus: i64,
        /// Workload type
        #[arg(long, value_enum)]
        workload: Workload,
    },
}

impl CliArgs {
    /// Tracing filter directive derived from the verbosity flags
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                _ => "debug",
            }
        }
    }
}
