//! Export command handler: writes the network definition as JSON.

use std::path::Path;

use anyhow::{Context, Result};

use crate::commands::load_network;

/// Handle the export subcommand.
pub fn handle_export_command(network_path: Option<&Path>, output: &Path) -> Result<()> {
    let network = load_network(network_path)?;
    network.build().context("invalid road network")?;

    network
        .write_to_path(output)
        .with_context(|| format!("failed to write network to {}", output.display()))?;

    println!(
        "Exported {} nodes and {} roads to {}",
        network.nodes.len(),
        network.edges.len(),
        output.display()
    );
    Ok(())
}
