//! JSON report shapes
//!
//! Stable stdout contracts for the CLI: pattern listings, recommendation
//! reports, and the error envelope. Field names and nesting are part of
//! the tool's interface; downstream automation parses them.

use crate::catalog::{NodeCountRange, Pattern, Workload};
use crate::engine::Recommendation;
use serde::Serialize;

/// One pattern row in the `ra list` output
#[derive(Debug, Serialize)]
pub struct PatternSummary {
    /// Pattern id
    pub id: String,
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
    pub tags: Vec<String>,
    /// Workloads this pattern fits
    pub workload_fit: Vec<Workload>,
}

impl From<&Pattern> for PatternSummary {
    fn from(p: &Pattern) -> Self {
        Self {
            id: p.id.clone(),
            c: p.c,
            g: p.g,
            n: p.n,
            b_gbps_per_gpu: p.b_gbps_per_gpu,
            node_count: p.node_count,
            tags: p.tags.clone(),
            workload_fit: p.workload_fit.clone(),
        }
    }
}

/// `ra list` report
#[derive(Debug, Serialize)]
pub struct ListReport {
    /// Pattern summaries in catalog order
    pub patterns: Vec<PatternSummary>,
}

impl ListReport {
    /// Build the listing from catalog patterns
    pub fn new(patterns: &[Pattern]) -> Self {
        Self {
            patterns: patterns.iter().map(PatternSummary::from).collect(),
        }
    }
}

/// Echo of the sizing request in the `ra recommend` report
#[derive(Debug, Serialize)]
pub struct RequestEcho {
    /// Requested GPU count
    pub gpus: u32,
    /// Requested workload
    pub workload: Workload,
}

/// Chosen pattern and sizing in the `ra recommend` report
#[derive(Debug, Serialize)]
pub struct RecommendationBody {
    /// Chosen pattern id
    pub pattern_id: String,
    /// Computed node count
    pub nodes: u32,
    /// GPUs per node
    pub gpus_per_node: u32,
    /// East-west bandwidth per GPU in Gbps
    pub b_gbps_per_gpu: u32,
    /// Fabric label
    pub fabric: String,
    /// Platform label
    pub platform: String,
}

/// `ra recommend` report
#[derive(Debug, Serialize)]
pub struct RecommendReport {
    /// Request echo
    pub input: RequestEcho,
    /// Chosen pattern and sizing
    pub recommendation: RecommendationBody,
    /// Selection notes
    pub notes: Vec<String>,
}

impl RecommendReport {
    /// Assemble the report from the request and engine output
    pub fn new(gpus: u32, workload: Workload, rec: Recommendation) -> Self {
        Self {
            input: RequestEcho { gpus, workload },
            recommendation: RecommendationBody {
                pattern_id: rec.pattern_id,
                nodes: rec.nodes,
                gpus_per_node: rec.gpus_per_node,
                b_gbps_per_gpu: rec.b_gbps_per_gpu,
                fabric: rec.fabric,
                platform: rec.platform,
            },
            notes: rec.notes,
        }
    }
}

/// Error envelope printed for any failure
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    /// Error message
    pub error: String,
}

impl ErrorReport {
    /// Wrap an error message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_report_json_shape() {
        let rec = Recommendation {
            pattern_id: "ent-8g".into(),
            nodes: 16,
            gpus_per_node: 8,
            b_gbps_per_gpu: 400,
            fabric: "ethernet".into(),
            platform: "spectrum-x".into(),
            notes: vec!["note".into()],
        };
        let report = RecommendReport::new(128, Workload::Training, rec);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["input"]["gpus"], 128);
        assert_eq!(value["input"]["workload"], "training");
        assert_eq!(value["recommendation"]["pattern_id"], "ent-8g");
        assert_eq!(value["recommendation"]["nodes"], 16);
        assert_eq!(value["notes"][0], "note");
    }

    #[test]
    fn test_list_report_preserves_catalog_order() {
        let mk = |id: &str| Pattern {
            id: id.into(),
            family: "enterprise".into(),
            description: String::new(),
            c: 2,
            g: 8,
            n: 9,
            b_gbps_per_gpu: 400,
            node_count: NodeCountRange { min: 1, max: 32 },
            tags: vec![],
            workload_fit: vec![],
            notes: vec![],
        };
        let report = ListReport::new(&[mk("b"), mk("a")]);
        assert_eq!(report.patterns[0].id, "b");
        assert_eq!(report.patterns[1].id, "a");
    }

    #[test]
    fn test_error_report_envelope() {
        let value = serde_json::to_value(ErrorReport::new("boom")).unwrap();
        assert_eq!(value["error"], "boom");
    }
}
