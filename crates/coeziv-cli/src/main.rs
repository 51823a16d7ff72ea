use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use coeziv_cli::commands::export::handle_export_command;
use coeziv_cli::commands::graph::handle_graph_command;
use coeziv_cli::commands::route::{handle_route_command, RouteCommandArgs};
use coeziv_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Multi-criteria road routing utilities")]
struct Cli {
    /// Road network JSON file (defaults to the built-in reference network).
    #[arg(long, global = true)]
    network: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the cheapest route between two nodes.
    Route {
        /// Source node id.
        #[arg(long, default_value = "A")]
        src: String,
        /// Destination node id.
        #[arg(long, default_value = "F")]
        dst: String,
        /// Weight of travel time in minutes (default 1.0).
        #[arg(long, allow_hyphen_values = true)]
        alpha: Option<String>,
        /// Weight of road tension (default 2.0).
        #[arg(long, allow_hyphen_values = true)]
        beta: Option<String>,
    },
    /// Print the road network.
    Graph,
    /// Write the road network definition as JSON.
    Export {
        /// Destination file.
        #[arg(long, short)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let network = cli.network.as_deref();

    match cli.command {
        Command::Route {
            src,
            dst,
            alpha,
            beta,
        } => {
            let args = RouteCommandArgs {
                src,
                dst,
                alpha,
                beta,
            };
            handle_route_command(network, cli.format, &args)
        }
        Command::Graph => handle_graph_command(network, cli.format),
        Command::Export { output } => handle_export_command(network, &output),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
