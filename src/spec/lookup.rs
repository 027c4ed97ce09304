//! GPU spec lookup
//!
//! Resolves a GPU model name to its memory capacity. A small normalized
//! table answers the common models deterministically; anything else falls
//! back to the remote inference endpoint in [`crate::spec::nim`].

use crate::error::Result;
use crate::spec::nim::NimClient;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Resolved GPU specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpuSpec {
    /// GPU model name as provided by the caller
    pub gpu: String,
    /// Onboard GPU memory in GiB; 0 when the fallback could not determine it
    pub memory_gb: u32,
    /// Caveats and assumptions about the resolution
    #[serde(default)]
    pub notes: Vec<String>,
}

// Typical common configs; H100 SXM is usually 80GB, PCIe variants exist.
const GPU_MEMORY_GB: &[(&str, u32)] = &[
    ("nvidia h100", 80),
    ("h100", 80),
    ("nvidia a100", 80),
    ("a100", 80),
    ("nvidia l40s", 48),
    ("l40s", 48),
    ("nvidia rtx 4090", 24),
    ("rtx 4090", 24),
];

/// Lowercase and collapse whitespace for table matching
pub fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Look up a GPU in the static table
pub fn lookup_static(gpu_name: &str) -> Option<GpuSpec> {
    let key = normalize(gpu_name);
    GPU_MEMORY_GB
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, memory_gb)| GpuSpec {
            gpu: gpu_name.to_string(),
            memory_gb: *memory_gb,
            notes: vec!["from local lookup table".to_string()],
        })
}

/// Resolve a GPU spec from the table, or ask the model as a fallback
pub async fn lookup_or_model(gpu_name: &str) -> Result<GpuSpec> {
    if let Some(spec) = lookup_static(gpu_name) {
        debug!(gpu = gpu_name, memory_gb = spec.memory_gb, "static table hit");
        return Ok(spec);
    }
    debug!(gpu = gpu_name, "static table miss, querying model");
    let client = NimClient::from_env()?;
    client.resolve_gpu_spec(gpu_name).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_case_and_whitespace() {
        assert_eq!(normalize("  NVIDIA   H100 "), "nvidia h100");
        assert_eq!(normalize("L40S"), "l40s");
    }

    #[test]
    fn test_static_lookup_known_models() {
        let spec = lookup_static("NVIDIA H100").unwrap();
        assert_eq!(spec.memory_gb, 80);
        assert_eq!(spec.gpu, "NVIDIA H100");
        assert_eq!(spec.notes, vec!["from local lookup table".to_string()]);

        assert_eq!(lookup_static("rtx 4090").unwrap().memory_gb, 24);
        assert_eq!(lookup_static("l40s").unwrap().memory_gb, 48);
    }

    #[test]
    fn test_static_lookup_miss() {
        assert!(lookup_static("NVIDIA B200").is_none());
    }
}
