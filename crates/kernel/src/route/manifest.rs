//! Parser for route manifest files.
//!
//! A manifest replaces the built-in route table, e.g. for a white-labelled
//! deployment or for tests:
//!
//! ```toml
//! [[routes]]
//! id = "dashboard"
//! path = "/"
//! name = "Dashboard"
//! show_in_navigation = true
//!
//! [[routes]]
//! id = "orders"
//! path = "/orders"
//! name = "Orders"
//! parent = "dashboard"
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::{Route, RouteError, RouteRegistry};

/// Top-level manifest document.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RouteManifest {
    #[serde(default)]
    routes: Vec<Route>,
}

impl RouteRegistry {
    /// Load a registry from a manifest file.
    pub fn from_file(path: &Path) -> Result<Self, RouteError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| RouteError::ManifestUnreadable {
                source_path: path.display().to_string(),
                details: e.to_string(),
            })?;

        let registry = Self::from_toml_str(&content, path)?;
        info!(
            path = %path.display(),
            routes = registry.len(),
            "loaded route manifest"
        );
        Ok(registry)
    }

    /// Load a registry from manifest text.
    ///
    /// `source` is only used in error messages.
    pub fn from_toml_str(content: &str, source: &Path) -> Result<Self, RouteError> {
        let manifest: RouteManifest =
            toml::from_str(content).map_err(|e| RouteError::InvalidManifest {
                source_path: source.display().to_string(),
                details: e.message().to_string(),
            })?;

        Self::from_routes(manifest.routes)
    }
}
