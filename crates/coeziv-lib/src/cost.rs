//! Edge cost model.
//!
//! The cost of traversing an edge combines travel time (weighted by `alpha`)
//! and structural tension (weighted by `beta`). All functions here are pure.

use serde::{Deserialize, Serialize};

use crate::graph::Edge;

/// Floor applied to the effective speed before dividing by it.
pub const MIN_EFFECTIVE_SPEED_KMH: f64 = 1.0;

/// Default weight on travel time.
pub const DEFAULT_ALPHA: f64 = 1.0;

/// Default weight on tension.
pub const DEFAULT_BETA: f64 = 2.0;

/// Weighting coefficients supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostWeights {
    pub alpha: f64,
    pub beta: f64,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
        }
    }
}

impl CostWeights {
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    /// Parse raw weight parameters, falling back to the defaults.
    ///
    /// A missing value takes its own default. If any supplied value is not a
    /// finite, non-negative number, both weights revert to the defaults. This
    /// never fails.
    pub fn parse_lenient(alpha: Option<&str>, beta: Option<&str>) -> Self {
        let defaults = Self::default();
        let alpha = parse_weight(alpha, defaults.alpha);
        let beta = parse_weight(beta, defaults.beta);

        match (alpha, beta) {
            (Some(alpha), Some(beta)) => Self { alpha, beta },
            _ => {
                tracing::debug!("malformed route weights, using defaults");
                defaults
            }
        }
    }

    /// Weighted cost of traversing `edge`.
    pub fn cost(&self, edge: &Edge) -> f64 {
        edge_cost(edge, self.alpha, self.beta)
    }
}

fn parse_weight(raw: Option<&str>, default: f64) -> Option<f64> {
    let Some(raw) = raw else {
        return Some(default);
    };
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

/// Nominal speed degraded by the traffic factor.
pub fn effective_speed(edge: &Edge) -> f64 {
    edge.speed_kmh / edge.traffic
}

/// Travel time in minutes, with the effective speed clamped to
/// [`MIN_EFFECTIVE_SPEED_KMH`].
pub fn travel_time_minutes(edge: &Edge) -> f64 {
    60.0 * edge.length_km / effective_speed(edge).max(MIN_EFFECTIVE_SPEED_KMH)
}

/// `alpha * travel_time_minutes + beta * tension`.
pub fn edge_cost(edge: &Edge, alpha: f64, beta: f64) -> f64 {
    alpha * travel_time_minutes(edge) + beta * edge.tension
}
