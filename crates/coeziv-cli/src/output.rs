//! Output formatting for routes and road networks.
//!
//! Renderers write to any [`Write`] so commands print to stdout while tests
//! capture into a buffer.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use coeziv_lib::{travel_time_minutes, Graph, RoadNetwork, RoutePlan};

use crate::terminal::ColorPalette;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing.
    #[default]
    Text,
    /// Pretty-printed JSON, same shape as the HTTP API.
    Json,
}

/// Render a route in the requested format.
pub fn render_route<W: Write>(
    out: &mut W,
    format: OutputFormat,
    graph: &Graph,
    plan: &RoutePlan,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => render_route_text(out, graph, plan, ColorPalette::detect()),
        OutputFormat::Json => render_json(out, plan),
    }
}

/// Render the road network in the requested format.
pub fn render_network<W: Write>(
    out: &mut W,
    format: OutputFormat,
    network: &RoadNetwork,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => render_network_text(out, network, ColorPalette::detect()),
        OutputFormat::Json => render_json(out, network),
    }
}

/// Route listing, one line per visited node.
///
/// Every node after the first is annotated with the edge used to reach it.
pub fn render_route_text<W: Write>(
    out: &mut W,
    graph: &Graph,
    plan: &RoutePlan,
    palette: ColorPalette,
) -> io::Result<()> {
    let start = plan.nodes.first().map(String::as_str).unwrap_or("<unknown>");
    let goal = plan.nodes.last().map(String::as_str).unwrap_or("<unknown>");
    writeln!(
        out,
        "Route from {} to {} ({} edges):",
        start,
        goal,
        plan.hop_count()
    )?;
    writeln!(out, " - {}{}{}", palette.white_bold, start, palette.reset)?;

    for (node, edge_id) in plan.nodes.iter().skip(1).zip(&plan.edges) {
        match graph.edge(edge_id) {
            Some(edge) => writeln!(
                out,
                " - {bold}{node}{reset} {gray}via {edge_id}{reset} ({cyan}{time:.2} min{reset}, {tc}tension {tension:.2}{reset})",
                bold = palette.white_bold,
                gray = palette.gray,
                cyan = palette.cyan,
                tc = palette.tension(edge.tension),
                reset = palette.reset,
                time = travel_time_minutes(edge),
                tension = edge.tension,
            )?,
            None => writeln!(out, " - {} via {}", node, edge_id)?,
        }
    }

    writeln!(out)?;
    writeln!(out, "Total time: {:.2} min", plan.total_time_min)?;
    writeln!(out, "Average tension: {:.3}", plan.avg_tension)?;
    writeln!(out, "Total cost: {:.2}", plan.total_cost)?;
    Ok(())
}

/// Network listing: the node list followed by every base road.
pub fn render_network_text<W: Write>(
    out: &mut W,
    network: &RoadNetwork,
    palette: ColorPalette,
) -> io::Result<()> {
    writeln!(out, "Nodes: {}", network.nodes.join(", "))?;
    writeln!(out, "Roads ({}):", network.edges.len())?;
    for edge in &network.edges {
        writeln!(
            out,
            " - {gray}{id}{reset}: {from} <-> {to}, {len:.2} km at {speed:.0} km/h, {tc}tension {tension:.2}{reset}, traffic {traffic:.2}",
            gray = palette.gray,
            reset = palette.reset,
            tc = palette.tension(edge.tension),
            id = edge.id,
            from = edge.from,
            to = edge.to,
            len = edge.length_km,
            speed = edge.speed_kmh,
            tension = edge.tension,
            traffic = edge.traffic,
        )?;
    }
    Ok(())
}

/// Pretty JSON followed by a newline.
pub fn render_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    out.write_all(b"\n")
}
