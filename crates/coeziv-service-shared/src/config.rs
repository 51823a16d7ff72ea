//! Service configuration loaded from the environment.
//!
//! # Environment Variables
//!
//! - `SERVICE_PORT`: HTTP port (default: 8080)
//! - `COEZIV_NETWORK_PATH`: JSON road network definition (default: built-in reference network)
//! - `COEZIV_DEFAULT_SRC`: node used when a query omits `src` (default: `A`)
//! - `COEZIV_DEFAULT_DST`: node used when a query omits `dst` (default: `F`)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default source node for route queries.
pub const DEFAULT_SRC: &str = "A";

/// Default destination node for route queries.
pub const DEFAULT_DST: &str = "F";

/// Runtime configuration for a routing service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub port: u16,
    /// Road network file; `None` selects the reference network.
    pub network_path: Option<PathBuf>,
    pub default_src: String,
    pub default_dst: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            network_path: None,
            default_src: DEFAULT_SRC.to_string(),
            default_dst: DEFAULT_DST.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Create configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    ///
    /// Unset or empty values keep their defaults; an unparsable port falls
    /// back to [`DEFAULT_PORT`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            port: get("SERVICE_PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            network_path: get("COEZIV_NETWORK_PATH").map(PathBuf::from),
            default_src: get("COEZIV_DEFAULT_SRC").unwrap_or(defaults.default_src),
            default_dst: get("COEZIV_DEFAULT_DST").unwrap_or(defaults.default_dst),
        }
    }
}
