use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Static adjacency model of named places and their intrinsic risk weights.
///
/// Neighbor sets are ordered lexicographically so every traversal over the
/// graph enumerates neighbors in the same order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationGraph {
    #[serde(default)]
    adjacency: BTreeMap<String, BTreeSet<String>>,
    #[serde(default)]
    risk: BTreeMap<String, f64>,
}

impl LocationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an undirected edge between `a` and `b`, registering both as keys.
    pub fn connect(mut self, a: &str, b: &str) -> Self {
        self.add_neighbor(a, b);
        self.add_neighbor(b, a);
        self
    }

    /// Declare a directed adjacency entry exactly as given.
    pub fn with_neighbors<I, S>(mut self, name: &str, neighbors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.adjacency.entry(name.to_string()).or_default();
        entry.extend(neighbors.into_iter().map(Into::into));
        self
    }

    pub fn with_risk(mut self, name: &str, weight: f64) -> Self {
        self.risk.insert(name.to_string(), weight);
        self
    }

    pub(crate) fn add_neighbor(&mut self, name: &str, neighbor: &str) {
        self.adjacency
            .entry(name.to_string())
            .or_default()
            .insert(neighbor.to_string());
    }

    pub(crate) fn set_risk(&mut self, name: &str, weight: f64) {
        self.risk.insert(name.to_string(), weight);
    }

    /// Neighbors of `name` in lexicographic order; empty for unknown locations.
    pub fn neighbors(&self, name: &str) -> impl Iterator<Item = &str> + '_ {
        self.adjacency
            .get(name)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Intrinsic risk weight of `name`, 0 when none is configured.
    pub fn risk_weight(&self, name: &str) -> f64 {
        self.risk.get(name).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    pub fn locations(&self) -> impl Iterator<Item = &str> + '_ {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn risk_weights(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.risk.iter().map(|(name, weight)| (name.as_str(), *weight))
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Locations a journey from `origin` can be planned to.
    ///
    /// A known origin offers its adjacent locations that are themselves graph
    /// keys; an unknown or empty origin offers every location.
    pub fn destination_options(&self, origin: &str) -> Vec<&str> {
        match self.adjacency.get(origin) {
            Some(neighbors) => self
                .locations()
                .filter(|name| neighbors.contains(*name))
                .collect(),
            None => self.locations().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> LocationGraph {
        LocationGraph::new()
            .connect("A", "B")
            .connect("B", "C")
            .with_risk("B", 0.5)
    }

    #[test]
    fn unknown_locations_have_no_neighbors_and_zero_risk() {
        let graph = triangle();
        assert_eq!(graph.neighbors("Nowhere").count(), 0);
        assert_eq!(graph.risk_weight("Nowhere"), 0.0);
        assert_eq!(graph.risk_weight("A"), 0.0);
        assert_eq!(graph.risk_weight("B"), 0.5);
    }

    #[test]
    fn neighbors_enumerate_lexicographically() {
        let graph = LocationGraph::new().with_neighbors("Hub", ["Zeta", "Alpha", "Mid"]);
        let order: Vec<_> = graph.neighbors("Hub").collect();
        assert_eq!(order, vec!["Alpha", "Mid", "Zeta"]);
    }

    #[test]
    fn connect_declares_both_directions() {
        let graph = triangle();
        assert!(graph.neighbors("A").any(|name| name == "B"));
        assert!(graph.neighbors("B").any(|name| name == "A"));
        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn destination_options_filter_by_origin() {
        let graph = triangle().with_neighbors("C", ["Leaf"]);
        assert_eq!(graph.destination_options("B"), vec!["A", "C"]);
        // leaf neighbors that are not keys are not offered
        assert_eq!(graph.destination_options("C"), vec!["B"]);
        assert_eq!(graph.destination_options(""), vec!["A", "B", "C"]);
        assert_eq!(graph.destination_options("Unknown"), vec!["A", "B", "C"]);
    }
}
