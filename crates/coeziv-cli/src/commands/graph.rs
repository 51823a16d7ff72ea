//! Graph command handler: prints the road network.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use crate::commands::load_network;
use crate::output::{render_network, OutputFormat};

/// Handle the graph subcommand.
///
/// The network is built before printing so an invalid file is reported
/// instead of echoed.
pub fn handle_graph_command(network_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let network = load_network(network_path)?;
    let graph = network.build().context("invalid road network")?;

    render_network(&mut io::stdout().lock(), format, &graph.to_network())
        .context("failed to write network")
}
