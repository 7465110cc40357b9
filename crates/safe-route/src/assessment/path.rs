use super::graph::LocationGraph;
use std::collections::{HashMap, HashSet, VecDeque};

/// Minimum-hop path from `origin` to `destination`, inclusive of both ends.
///
/// Returns an empty path when either end is not a graph key or no route
/// exists. Ties between equally short paths go to the one discovered first
/// under the graph's lexicographic neighbor order.
pub fn shortest_path(graph: &LocationGraph, origin: &str, destination: &str) -> Vec<String> {
    if !graph.contains(origin) || !graph.contains(destination) {
        return Vec::new();
    }

    let mut visited: HashSet<&str> = HashSet::from([origin]);
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut queue: VecDeque<&str> = VecDeque::from([origin]);

    while let Some(current) = queue.pop_front() {
        if current == destination {
            return trace_back(&parents, origin, destination);
        }

        for neighbor in graph.neighbors(current) {
            if visited.insert(neighbor) {
                parents.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    Vec::new()
}

fn trace_back<'a>(
    parents: &HashMap<&'a str, &'a str>,
    origin: &str,
    destination: &'a str,
) -> Vec<String> {
    let mut path = vec![destination.to_string()];
    let mut cursor = destination;
    while cursor != origin {
        match parents.get(cursor) {
            Some(&parent) => {
                path.push(parent.to_string());
                cursor = parent;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> LocationGraph {
        LocationGraph::new()
            .connect("A", "B")
            .connect("B", "C")
            .connect("C", "D")
    }

    #[test]
    fn finds_path_along_a_line() {
        assert_eq!(shortest_path(&line(), "A", "D"), vec!["A", "B", "C", "D"]);
        assert_eq!(shortest_path(&line(), "D", "B"), vec!["D", "C", "B"]);
    }

    #[test]
    fn same_origin_and_destination_is_single_node() {
        assert_eq!(shortest_path(&line(), "B", "B"), vec!["B"]);
    }

    #[test]
    fn unknown_endpoints_yield_empty_path() {
        assert!(shortest_path(&line(), "Nonexistent", "A").is_empty());
        assert!(shortest_path(&line(), "A", "Nonexistent").is_empty());
    }

    #[test]
    fn disconnected_components_yield_empty_path() {
        let graph = line().connect("X", "Y");
        assert!(shortest_path(&graph, "A", "Y").is_empty());
    }

    #[test]
    fn leaf_only_destination_is_not_routable() {
        // "Leaf" is a neighbor of C but not itself a key
        let graph = line().with_neighbors("C", ["Leaf"]);
        assert!(shortest_path(&graph, "A", "Leaf").is_empty());
    }

    #[test]
    fn ties_resolve_to_lexicographically_first_branch() {
        let graph = LocationGraph::new()
            .connect("Start", "Zulu")
            .connect("Start", "Alpha")
            .connect("Zulu", "End")
            .connect("Alpha", "End");
        assert_eq!(
            shortest_path(&graph, "Start", "End"),
            vec!["Start", "Alpha", "End"]
        );
    }

    #[test]
    fn prefers_fewer_hops_over_declaration_order() {
        let graph = line().connect("A", "D");
        assert_eq!(shortest_path(&graph, "A", "D"), vec!["A", "D"]);
    }
}
