use super::graph::LocationGraph;

/// Simulated "current location" used when a journey omits its origin.
pub const DEFAULT_ORIGIN: &str = "CUHK";

const HONG_KONG_EDGES: &[(&str, &str)] = &[
    ("CUHK", "New Town Plaza"),
    ("CUHK", "Admiralty Station"),
    ("New Town Plaza", "Exhibition Centre"),
    ("New Town Plaza", "Admiralty Station"),
    ("Hong Kong Museum of Art", "Exhibition Centre"),
    ("Hong Kong Museum of Art", "Central"),
    ("Exhibition Centre", "Admiralty Station"),
    ("Exhibition Centre", "Central"),
    ("Admiralty Station", "Central"),
    ("Admiralty Station", "HKU"),
    ("Victoria Harbor", "Central"),
    ("Victoria Harbor", "International Airport"),
    ("Central", "HKU"),
    ("Central", "International Airport"),
];

// Ocean Park carries a weight but no edges; it is never reachable.
const HONG_KONG_RISK: &[(&str, f64)] = &[
    ("CUHK", 0.3),
    ("New Town Plaza", 0.7),
    ("Hong Kong Museum of Art", 0.5),
    ("Exhibition Centre", 0.6),
    ("Admiralty Station", 0.8),
    ("Victoria Harbor", 0.4),
    ("Central", 0.8),
    ("HKU", 0.3),
    ("Ocean Park", 0.7),
    ("International Airport", 0.9),
];

impl LocationGraph {
    /// Canonical Hong Kong network shipped as the default deployment graph.
    pub fn hong_kong() -> Self {
        let graph = HONG_KONG_EDGES
            .iter()
            .fold(LocationGraph::new(), |graph, (a, b)| graph.connect(a, b));

        HONG_KONG_RISK
            .iter()
            .fold(graph, |graph, (name, weight)| graph.with_risk(name, *weight))
    }
}
