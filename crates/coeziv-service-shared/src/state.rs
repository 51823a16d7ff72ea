//! Application state for HTTP microservices.
//!
//! This module provides the shared state structure that axum handlers use to
//! access the immutable road graph and the configured default endpoints.

use std::sync::Arc;

use coeziv_lib::{reference_network, Error as LibError, Graph, RoadNetwork};

use crate::config::ServiceConfig;

/// Error during application state initialization.
#[derive(Debug)]
pub enum AppStateError {
    /// Failed to read or parse the road network definition.
    NetworkLoad(LibError),

    /// The road network definition violates a graph invariant.
    InvalidNetwork(LibError),

    /// A configured default node is not part of the graph.
    UnknownDefaultNode(String),
}

impl std::fmt::Display for AppStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkLoad(e) => write!(f, "failed to load road network: {}", e),
            Self::InvalidNetwork(e) => write!(f, "invalid road network: {}", e),
            Self::UnknownDefaultNode(node) => {
                write!(f, "default node {} is not part of the road network", node)
            }
        }
    }
}

impl std::error::Error for AppStateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NetworkLoad(e) | Self::InvalidNetwork(e) => Some(e),
            Self::UnknownDefaultNode(_) => None,
        }
    }
}

impl From<LibError> for AppStateError {
    fn from(err: LibError) -> Self {
        if err.is_construction_error() {
            Self::InvalidNetwork(err)
        } else {
            Self::NetworkLoad(err)
        }
    }
}

/// Shared application state for all axum handlers.
///
/// This struct is cheaply cloneable (using `Arc` internally) and should be
/// shared via axum's `State` extractor. The graph is never mutated after
/// construction, so handlers read it without locking.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    graph: Graph,
    default_src: String,
    default_dst: String,
}

impl AppState {
    /// Build application state from service configuration.
    ///
    /// Loads the network file named by the configuration, or the reference
    /// network when none is configured, and builds the graph. Any invalid
    /// data is returned as an error so the service refuses to start.
    pub fn load(config: &ServiceConfig) -> Result<Self, AppStateError> {
        let network = match &config.network_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading road network");
                RoadNetwork::from_path(path)?
            }
            None => {
                tracing::info!("no network file configured, using reference network");
                reference_network()
            }
        };

        let graph = network.build()?;
        tracing::info!(
            nodes = graph.nodes().len(),
            edges = graph.edge_count(),
            "road graph built"
        );

        Self::from_graph(graph, &config.default_src, &config.default_dst)
    }

    /// Create application state from a pre-built graph.
    ///
    /// This is useful for testing or when embedding the service.
    pub fn from_graph(
        graph: Graph,
        default_src: &str,
        default_dst: &str,
    ) -> Result<Self, AppStateError> {
        for node in [default_src, default_dst] {
            if !graph.contains_node(node) {
                return Err(AppStateError::UnknownDefaultNode(node.to_string()));
            }
        }

        Ok(Self {
            inner: Arc::new(AppStateInner {
                graph,
                default_src: default_src.to_string(),
                default_dst: default_dst.to_string(),
            }),
        })
    }

    /// Access the road graph.
    pub fn graph(&self) -> &Graph {
        &self.inner.graph
    }

    /// Source node used when a query omits `src`.
    pub fn default_src(&self) -> &str {
        &self.inner.default_src
    }

    /// Destination node used when a query omits `dst`.
    pub fn default_dst(&self) -> &str {
        &self.inner.default_dst
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("node_count", &self.inner.graph.nodes().len())
            .field("edge_count", &self.inner.graph.edge_count())
            .field("default_src", &self.inner.default_src)
            .field("default_dst", &self.inner.default_dst)
            .finish()
    }
}
