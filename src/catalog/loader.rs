//! Catalog loading
//!
//! Reads the pattern catalog and networking defaults from YAML files in a
//! catalog directory. Resolution order for the directory: explicit path
//! from the caller, the `RAPLAN_CATALOG_DIR` environment variable, then
//! the `catalog/` directory next to the working directory.

use crate::catalog::schema::{NetworkingDefaults, PatternCatalog};
use crate::error::{RaplanError, Result};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the pattern catalog inside the catalog directory
pub const PATTERNS_FILE: &str = "ra_patterns.yaml";

/// File name of the networking defaults inside the catalog directory
pub const NETWORKING_FILE: &str = "networking_defaults.yaml";

/// Environment variable overriding the catalog directory
pub const CATALOG_DIR_ENV: &str = "RAPLAN_CATALOG_DIR";

/// Resolve the catalog directory from an optional explicit override
pub fn resolve_catalog_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    if let Ok(dir) = std::env::var(CATALOG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    PathBuf::from("catalog")
}

fn load_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(RaplanError::CatalogNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path).map_err(|e| RaplanError::io(path, e))?;
    serde_yaml::from_str(&content).map_err(|e| RaplanError::CatalogParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load and validate the pattern catalog from a catalog directory
pub fn load_patterns(catalog_dir: &Path) -> Result<PatternCatalog> {
    let path = catalog_dir.join(PATTERNS_FILE);
    let catalog: PatternCatalog = load_yaml(&path)?;
    catalog
        .validate()
        .map_err(|message| RaplanError::invalid_catalog(&path, message))?;
    debug!(
        patterns = catalog.patterns.len(),
        version = catalog.version,
        "loaded pattern catalog"
    );
    Ok(catalog)
}

/// Load the networking defaults from a catalog directory
pub fn load_networking_defaults(catalog_dir: &Path) -> Result<NetworkingDefaults> {
    let path = catalog_dir.join(NETWORKING_FILE);
    let defaults: NetworkingDefaults = load_yaml(&path)?;
    debug!(version = defaults.version, "loaded networking defaults");
    Ok(defaults)
}
