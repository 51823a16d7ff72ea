// One module per subcommand; main.rs only parses arguments and dispatches.

pub mod export;
pub mod graph;
pub mod route;

use std::path::Path;

use anyhow::{Context, Result};

use coeziv_lib::{reference_network, RoadNetwork};

/// Load the network named by `--network`, or the built-in reference network.
pub fn load_network(path: Option<&Path>) -> Result<RoadNetwork> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading road network");
            RoadNetwork::from_path(path)
                .with_context(|| format!("failed to load road network from {}", path.display()))
        }
        None => Ok(reference_network()),
    }
}
