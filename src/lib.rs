//! # Raplan - GPU Cluster Reference-Architecture Advisor
//!
//! Raplan recommends a data-center GPU cluster topology for a requested
//! GPU count and workload, and resolves GPU model names to memory
//! capacity.
//!
//! ## Features
//!
//! - **Pattern Selection Engine**: deterministic filtering and ranking of
//!   catalog topologies by workload fit, node range, and bandwidth
//! - **YAML Catalogs**: schema-validated pattern and networking-defaults
//!   files, loaded once per invocation
//! - **GPU Spec Resolver**: static lookup table with a strict-JSON
//!   inference fallback for unknown models
//! - **Strict JSON CLI**: machine-readable reports for every command
//!
//! ## Quick Start
//!
//! ```no_run
//! use raplan::catalog::{load_patterns, resolve_catalog_dir};
//! use raplan::catalog::Workload;
//! use raplan::engine::{recommend_pattern, RecommendRequest};
//!
//! let dir = resolve_catalog_dir(None);
//! let catalog = load_patterns(&dir).unwrap();
//!
//! let request = RecommendRequest::new(128, Workload::Training);
//! let rec = recommend_pattern(&catalog.patterns, &request).unwrap();
//!
//! println!("{} nodes of {}", rec.nodes, rec.pattern_id);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod report;
pub mod spec;

// Re-export commonly used types
pub use catalog::{Pattern, PatternCatalog, Workload};
pub use engine::{recommend_pattern, Recommendation, RecommendRequest};
pub use error::{RaplanError, Result};
pub use spec::GpuSpec;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    //! Convenient re-exports for common usage
    //!
    //! ```no_run
    //! use raplan::prelude::*;
    //! ```

    pub use crate::catalog::{
        load_networking_defaults, load_patterns, resolve_catalog_dir, NetworkingDefaults,
        NodeCountRange, Pattern, PatternCatalog, Workload,
    };
    pub use crate::engine::{recommend_pattern, Recommendation, RecommendRequest, ScoreKey};
    pub use crate::error::{RaplanError, Result};
    pub use crate::spec::{lookup_or_model, lookup_static, GpuSpec, NimClient};
}
