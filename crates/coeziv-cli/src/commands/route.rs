//! Route command handler for computing the cheapest path between two nodes.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use coeziv_lib::{plan_route, CostWeights, Error as RouteError, RouteRequest};

use crate::commands::load_network;
use crate::output::{render_route, OutputFormat};

/// Arguments for the route command.
///
/// Weights stay as raw strings: a malformed value resets both weights to
/// their defaults instead of failing argument parsing.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    pub src: String,
    pub dst: String,
    pub alpha: Option<String>,
    pub beta: Option<String>,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        let weights = CostWeights::parse_lenient(self.alpha.as_deref(), self.beta.as_deref());
        RouteRequest::new(self.src.clone(), self.dst.clone()).with_weights(weights)
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    network_path: Option<&Path>,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let network = load_network(network_path)?;
    let graph = network.build().context("invalid road network")?;

    let request = args.to_request();
    tracing::debug!(
        src = %request.src,
        dst = %request.dst,
        alpha = request.weights.alpha,
        beta = request.weights.beta,
        "planning route"
    );

    let plan = match plan_route(&graph, &request) {
        Ok(plan) => plan,
        Err(err) => return Err(handle_route_failure(&graph, &request, err)),
    };

    render_route(&mut io::stdout().lock(), format, &graph, &plan)
        .context("failed to write route")
}

/// Turn a library failure into a user-facing error.
fn handle_route_failure(
    graph: &coeziv_lib::Graph,
    request: &RouteRequest,
    err: RouteError,
) -> anyhow::Error {
    if !matches!(err, RouteError::RouteNotFound { .. }) {
        return anyhow::Error::new(err).context("route planning failed");
    }

    let unknown: Vec<&str> = [request.src.as_str(), request.dst.as_str()]
        .into_iter()
        .filter(|node| !graph.contains_node(node))
        .collect();

    if unknown.is_empty() {
        anyhow::anyhow!("{}", err)
    } else {
        anyhow::anyhow!(
            "{} (unknown node: {}; known nodes: {})",
            err,
            unknown.join(", "),
            graph.nodes().join(", ")
        )
    }
}
