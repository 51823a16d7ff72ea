//! Query parameters for route requests.
//!
//! Route queries are deliberately lenient: missing endpoints take the
//! configured defaults and malformed weights silently fall back to
//! `alpha = 1.0`, `beta = 2.0`. Nothing here ever produces an error response.

use serde::{Deserialize, Serialize};

use coeziv_lib::{CostWeights, RouteRequest};

/// Raw `GET /api/route` query string.
///
/// Weights are kept as strings so a malformed number never rejects the
/// request at extraction time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dst: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta: Option<String>,
}

/// Route parameters after defaults have been applied.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteParams {
    pub src: String,
    pub dst: String,
    pub weights: CostWeights,
}

impl RouteQuery {
    /// Build from raw query pairs, keeping the first value of each key.
    ///
    /// Unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "src" => &mut query.src,
                "dst" => &mut query.dst,
                "alpha" => &mut query.alpha,
                "beta" => &mut query.beta,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }

    /// Apply endpoint defaults and parse the weights leniently.
    pub fn resolve(&self, default_src: &str, default_dst: &str) -> RouteParams {
        RouteParams {
            src: self.src.clone().unwrap_or_else(|| default_src.to_string()),
            dst: self.dst.clone().unwrap_or_else(|| default_dst.to_string()),
            weights: CostWeights::parse_lenient(self.alpha.as_deref(), self.beta.as_deref()),
        }
    }
}

impl From<RouteParams> for RouteRequest {
    fn from(params: RouteParams) -> Self {
        RouteRequest::new(params.src, params.dst).with_weights(params.weights)
    }
}
