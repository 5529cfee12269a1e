//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::pricing::DEFAULT_VAT_BASIS_POINTS;
use crate::route::RouteRegistry;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend API base URL (default: http://localhost:8080/api).
    pub api_base_url: String,

    /// Per-request timeout (default: 30 seconds).
    pub api_timeout: Duration,

    /// Route manifest replacing the built-in routes. When None, the
    /// built-in table is used.
    pub routes_file: Option<PathBuf>,

    /// File holding the bearer token between runs (default: .orderlee/token).
    pub token_file: PathBuf,

    /// Route shown at start and used as the navigation fallback
    /// (default: dashboard).
    pub default_route: String,

    /// VAT rate in basis points (default: 750, i.e. 7.5%).
    pub vat_basis_points: u32,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_base_url =
            var("API_BASE_URL").unwrap_or_else(|| "http://localhost:8080/api".to_string());

        let api_timeout = var("API_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .map(Duration::from_secs)
            .context("API_TIMEOUT_SECS must be a whole number of seconds")?;

        let routes_file = var("ROUTES_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let token_file = var("TOKEN_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".orderlee/token"));

        let default_route = var("DEFAULT_ROUTE").unwrap_or_else(|| "dashboard".to_string());

        let vat_basis_points = match var("VAT_BASIS_POINTS") {
            Some(v) => v
                .parse()
                .context("VAT_BASIS_POINTS must be a valid u32")?,
            None => DEFAULT_VAT_BASIS_POINTS,
        };

        Ok(Self {
            api_base_url,
            api_timeout,
            routes_file,
            token_file,
            default_route,
            vat_basis_points,
        })
    }

    /// Build the route registry: the manifest if one is configured, the
    /// built-in table otherwise. The default route must exist in it.
    pub fn route_registry(&self) -> Result<RouteRegistry> {
        let registry = match &self.routes_file {
            Some(path) => RouteRegistry::from_file(path)?,
            None => RouteRegistry::builtin().context("built-in route table is invalid")?,
        };

        registry
            .get_route(&self.default_route)
            .context("DEFAULT_ROUTE must name a registered route")?;

        Ok(registry)
    }
}
