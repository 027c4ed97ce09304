//! Catalog schema types
//!
//! Defines the reference-architecture pattern catalog and networking
//! defaults as deserialized from YAML. Structural invariants (positive
//! per-node counts, ordered node ranges, unique pattern ids) are enforced
//! by [`PatternCatalog::validate`] before any recommendation runs, so the
//! engine can treat the catalog as trusted input.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Workload type a pattern can be matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Workload {
    /// Large-scale distributed training
    Training,
    /// Fine-tuning of existing models
    Finetune,
    /// Inference serving
    Inference,
}

impl Workload {
    /// Training and finetune traffic is east-west heavy, so bandwidth
    /// counts double when scoring candidates for them
    pub fn bandwidth_weight(self) -> u64 {
        match self {
            Workload::Training | Workload::Finetune => 2,
            Workload::Inference => 1,
        }
    }
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Workload::Training => "training",
            Workload::Finetune => "finetune",
            Workload::Inference => "inference",
        };
        f.write_str(s)
    }
}

/// Valid node-count range for a pattern, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeCountRange {
    /// Minimum deployable node count
    pub min: u32,
    /// Maximum deployable node count
    pub max: u32,
}

impl NodeCountRange {
    /// Check whether a computed node count lies within the range
    pub fn contains(&self, nodes: u32) -> bool {
        self.min <= nodes && nodes <= self.max
    }
}

/// A predefined cluster topology template
///
/// Fixed per-node ratios plus a deployable node-count range. Immutable
/// once loaded from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    /// Unique identifier within the catalog
    pub id: String,
    /// Architecture family this pattern belongs to
    pub family: String,
    /// Human-readable description
    pub description: String,

    /// CPU sockets per node
    pub c: u32,
    /// GPUs per node
    pub g: u32,
    /// NICs per node
    pub n: u32,
    /// East-west bandwidth per GPU in Gbps
    pub b_gbps_per_gpu: u32,

    /// Deployable node-count range
    pub node_count: NodeCountRange,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Workloads this pattern fits; empty means it fits all
    #[serde(default)]
    pub workload_fit: Vec<Workload>,
    /// Free-form notes
    #[serde(default)]
    pub notes: Vec<String>,
}

impl Pattern {
    /// Whether this pattern is eligible for the given workload
    pub fn fits_workload(&self, workload: Workload) -> bool {
        self.workload_fit.is_empty() || self.workload_fit.contains(&workload)
    }

    /// Structural invariants for a single pattern
    fn validate(&self) -> std::result::Result<(), String> {
        if self.id.is_empty() {
            return Err("pattern id must not be empty".into());
        }
        if self.c == 0 {
            return Err(format!("pattern '{}': c (CPU sockets) must be >= 1", self.id));
        }
        if self.g == 0 {
            return Err(format!("pattern '{}': g (GPUs per node) must be >= 1", self.id));
        }
        if self.n == 0 {
            return Err(format!("pattern '{}': n (NICs per node) must be >= 1", self.id));
        }
        if self.node_count.min == 0 || self.node_count.max == 0 {
            return Err(format!(
                "pattern '{}': node_count bounds must be >= 1",
                self.id
            ));
        }
        if self.node_count.min > self.node_count.max {
            return Err(format!(
                "pattern '{}': node_count.min ({}) exceeds node_count.max ({})",
                self.id, self.node_count.min, self.node_count.max
            ));
        }
        Ok(())
    }
}

/// Provenance descriptor for a catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSource {
    /// Source name (document or team the patterns were derived from)
    pub name: String,
    /// Free-form notes about the source
    #[serde(default)]
    pub notes: Vec<String>,
}

/// Versioned collection of patterns, loaded once per invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternCatalog {
    /// Catalog schema version
    pub version: u64,
    /// Where the patterns came from
    pub source: CatalogSource,
    /// Ordered pattern list; order is significant for tie-breaking
    pub patterns: Vec<Pattern>,
}

impl PatternCatalog {
    /// Validate structural invariants across the whole catalog
    pub fn validate(&self) -> std::result::Result<(), String> {
        let mut seen = HashSet::new();
        for pattern in &self.patterns {
            pattern.validate()?;
            if !seen.insert(pattern.id.as_str()) {
                return Err(format!("duplicate pattern id '{}'", pattern.id));
            }
        }
        Ok(())
    }
}

/// Versioned fabric/platform defaults, independent of the pattern catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkingDefaults {
    /// Defaults schema version
    pub version: u64,
    /// Default settings keyed by name; at least `fabric` and `platform`
    #[serde(default)]
    pub defaults: HashMap<String, String>,
}

impl NetworkingDefaults {
    /// Default fabric, falling back to ethernet when absent
    pub fn fabric(&self) -> &str {
        self.defaults.get("fabric").map_or("ethernet", String::as_str)
    }

    /// Default platform, falling back to spectrum-x when absent
    pub fn platform(&self) -> &str {
        self.defaults
            .get("platform")
            .map_or("spectrum-x", String::as_str)
    }
}
