use super::graph::LocationGraph;
use super::path::shortest_path;
use serde::{Serialize, Serializer};
use std::fmt;

/// Route risk assigned when a path has no intermediate stops.
pub const BASELINE_ROUTE_RISK: f64 = 0.2;

/// How the traveller moves between locations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TransportMode {
    #[default]
    Public,
    Private,
    Other(String),
}

impl TransportMode {
    /// Case-insensitive parse; anything unrecognised keeps its raw label.
    pub fn from_label(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "public" => Self::Public,
            "private" => Self::Private,
            _ => Self::Other(value.trim().to_string()),
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Public => 1.2,
            Self::Private => 0.8,
            Self::Other(_) => 1.0,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Other(raw) => raw.as_str(),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for TransportMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Shortest path between two locations and its transport-adjusted risk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteRisk {
    pub risk: f64,
    pub path: Vec<String>,
    pub multiplier: f64,
}

/// Resolve the route between `origin` and `destination` and score it.
pub fn route_risk(
    graph: &LocationGraph,
    origin: &str,
    destination: &str,
    mode: &TransportMode,
) -> RouteRisk {
    let path = shortest_path(graph, origin, destination);
    let multiplier = mode.multiplier();
    let risk = (path_risk(graph, &path) * multiplier).clamp(0.0, 1.0);

    RouteRisk {
        risk,
        path,
        multiplier,
    }
}

/// Unadjusted risk of a path: the clamped sum of its intermediate stops.
pub fn path_risk(graph: &LocationGraph, path: &[String]) -> f64 {
    if path.len() < 3 {
        return BASELINE_ROUTE_RISK;
    }

    let intermediate = &path[1..path.len() - 1];
    intermediate
        .iter()
        .map(|name| graph.risk_weight(name))
        .sum::<f64>()
        .min(1.0)
}
