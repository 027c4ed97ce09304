//! Pattern selection engine
//!
//! Filters the catalog by workload fit and node-range capacity, then ranks
//! the survivors with an explicit composite score key. The whole operation
//! is a pure function of the request and the catalog snapshot: same inputs,
//! same recommendation.

use crate::catalog::{Pattern, Workload};
use crate::error::{RaplanError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A sizing request as seen by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendRequest {
    /// Total GPUs desired; must be >= 1
    pub total_gpus: u32,
    /// Workload the cluster will run
    pub workload: Workload,
    /// Network fabric label, echoed into the output unchanged
    pub fabric: String,
    /// Vendor platform label, echoed into the output unchanged
    pub platform: String,
}

impl RecommendRequest {
    /// Build a request with the stock fabric/platform defaults
    pub fn new(total_gpus: u32, workload: Workload) -> Self {
        Self {
            total_gpus,
            workload,
            fabric: "ethernet".to_string(),
            platform: "spectrum-x".to_string(),
        }
    }
}

/// The engine's output: one chosen pattern plus the computed sizing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Chosen pattern id
    pub pattern_id: String,
    /// Computed node count; always within the pattern's declared range
    pub nodes: u32,
    /// GPUs per node of the chosen pattern
    pub gpus_per_node: u32,
    /// East-west bandwidth per GPU of the chosen pattern, in Gbps
    pub b_gbps_per_gpu: u32,
    /// Fabric label echoed from the request
    pub fabric: String,
    /// Platform label echoed from the request
    pub platform: String,
    /// Human-readable notes about the selection
    pub notes: Vec<String>,
}

/// Composite score key for ranking candidates, lower is better
///
/// Ordering is the derived lexicographic tuple order:
/// 1. negated weighted bandwidth (higher bandwidth wins),
/// 2. node count (fewer nodes wins),
/// 3. negated GPUs per node (denser nodes win).
///
/// Ties beyond all three fields fall back to catalog order because the
/// sort below is stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScoreKey {
    neg_weighted_bandwidth: i64,
    nodes: u32,
    neg_gpus_per_node: i64,
}

impl ScoreKey {
    /// Score a candidate pattern at its computed node count
    pub fn for_candidate(pattern: &Pattern, nodes: u32, workload: Workload) -> Self {
        let weighted = i64::from(pattern.b_gbps_per_gpu) * workload.bandwidth_weight() as i64;
        Self {
            neg_weighted_bandwidth: -weighted,
            nodes,
            neg_gpus_per_node: -i64::from(pattern.g),
        }
    }
}

/// Nodes needed to host `total_gpus` on a pattern with `gpus_per_node` GPUs
fn nodes_required(total_gpus: u32, gpus_per_node: u32) -> u32 {
    total_gpus.div_ceil(gpus_per_node)
}

/// Recommend the best-fitting pattern for a GPU count and workload
///
/// Filters `patterns` to those whose workload fit and node-count range
/// accommodate the request, ranks them by [`ScoreKey`], and returns the
/// winner with sizing notes. Fails with [`RaplanError::InvalidInput`] for
/// a zero GPU count and [`RaplanError::NoFittingPattern`] when no catalog
/// entry fits; neither is retryable.
pub fn recommend_pattern(patterns: &[Pattern], request: &RecommendRequest) -> Result<Recommendation> {
    if request.total_gpus == 0 {
        return Err(RaplanError::invalid_input("total_gpus must be >= 1"));
    }

    let mut candidates: Vec<(&Pattern, u32)> = Vec::new();
    for pattern in patterns {
        if !pattern.fits_workload(request.workload) {
            continue;
        }
        let nodes = nodes_required(request.total_gpus, pattern.g);
        if pattern.node_count.contains(nodes) {
            candidates.push((pattern, nodes));
        }
    }

    if candidates.is_empty() {
        return Err(RaplanError::NoFittingPattern(format!(
            "No Enterprise RA pattern fits {} GPUs for the {} workload within its node range. \
             Consider the NCP Reference Architecture track for larger scales.",
            request.total_gpus, request.workload
        )));
    }

    // Stable sort preserves catalog order for fully tied candidates.
    candidates.sort_by_key(|(pattern, nodes)| {
        ScoreKey::for_candidate(pattern, *nodes, request.workload)
    });
    let (best, nodes) = candidates[0];

    debug!(
        pattern_id = %best.id,
        nodes,
        candidates = candidates.len(),
        "selected pattern"
    );

    let mut notes = vec![
        "Selected pattern supports computed node count within its declared node range.".to_string(),
    ];
    let capacity = u64::from(nodes) * u64::from(best.g);
    if capacity != u64::from(request.total_gpus) {
        notes.push(format!(
            "Rounding up nodes: {} nodes * {} GPUs/node = {} GPUs capacity.",
            nodes, best.g, capacity
        ));
    }

    Ok(Recommendation {
        pattern_id: best.id.clone(),
        nodes,
        gpus_per_node: best.g,
        b_gbps_per_gpu: best.b_gbps_per_gpu,
        fabric: request.fabric.clone(),
        platform: request.platform.clone(),
        notes,
    })
}
