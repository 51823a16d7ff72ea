use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the coeziv library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A road references a node that is not part of the network.
    #[error("road {road} references unknown node {node}")]
    UnknownNode { road: String, node: String },

    /// The same node identifier was declared more than once.
    #[error("node {node} is declared more than once")]
    DuplicateNode { node: String },

    /// The same road identifier was declared more than once.
    #[error("road {road} is declared more than once")]
    DuplicateRoad { road: String },

    /// Road length must be a positive, finite number of kilometres.
    #[error("road {road} has invalid length_km {value}; expected a positive value")]
    InvalidLength { road: String, value: f64 },

    /// Nominal speed must be a positive, finite number of km/h.
    #[error("road {road} has invalid speed_kmh {value}; expected a positive value")]
    InvalidSpeed { road: String, value: f64 },

    /// Tension must lie within `[0, 1]`.
    #[error("road {road} has invalid tension {value}; expected a value within [0, 1]")]
    InvalidTension { road: String, value: f64 },

    /// Traffic is a congestion multiplier and cannot speed a road up.
    #[error("road {road} has invalid traffic factor {value}; expected a value >= 1.0")]
    InvalidTraffic { road: String, value: f64 },

    /// Raised when no route could be found between two nodes.
    ///
    /// Unknown nodes and unreachable destinations both surface as this error.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// The predecessor chain produced by the search could not be walked back.
    #[error("failed to reconstruct route at node {node}: edge {edge} is not an outgoing edge")]
    PathReconstruction { node: String, edge: String },

    /// Network definition file could not be located.
    #[error("road network definition not found at {path}")]
    NetworkNotFound { path: PathBuf },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON (de)serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error describes bad network data rather than a query outcome.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownNode { .. }
                | Error::DuplicateNode { .. }
                | Error::DuplicateRoad { .. }
                | Error::InvalidLength { .. }
                | Error::InvalidSpeed { .. }
                | Error::InvalidTension { .. }
                | Error::InvalidTraffic { .. }
        )
    }
}
