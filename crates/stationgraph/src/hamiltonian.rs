//! Exhaustive search for the maximum-weight Hamiltonian cycle.

use rustc_hash::FxBuildHasher;

use crate::graph::Graph;
use crate::station::StationId;

type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

/// Finds the cycle that visits every vertex exactly once and returns to the
/// start, maximizing total edge distance. "Largest" means greatest summed
/// distance; the vertex count of any Hamiltonian cycle is fixed.
///
/// Brute-force backtracking: exponential in vertex count, with no pruning
/// beyond the visited set. The search never mutates `graph`; the partial
/// cycle is built in a private working graph that is rolled back on every
/// return. Equal-weight maxima resolve to the first cycle found. `None`
/// when the graph is empty or has no Hamiltonian cycle.
pub fn largest_hamiltonian_cycle(graph: &Graph) -> Option<Graph> {
    let start = graph.station_ids().next()?;
    let mut visited: HashSet<StationId> = HashSet::default();
    visited.insert(start);

    let mut working = Graph::new();
    working.insert_vertex(*graph.vertex(start)?.station());

    let mut best: Option<Graph> = None;
    search(graph, start, start, &mut working, &mut visited, &mut best);
    best
}

fn search(
    graph: &Graph,
    current: StationId,
    start: StationId,
    working: &mut Graph,
    visited: &mut HashSet<StationId>,
    best: &mut Option<Graph>,
) {
    if working.size() == graph.size() && graph.are_adjacent(current, start) {
        // Close the cycle on a candidate copy; the working graph itself
        // stays a simple path for the rollback below.
        let mut candidate = working.clone();
        candidate.insert_edge_deduplicating(start, current);
        let replace = best
            .as_ref()
            .is_none_or(|b| candidate.total_distance() > b.total_distance());
        if replace {
            *best = Some(candidate);
        }
    }

    let Some(vertex) = graph.vertex(current) else {
        return;
    };
    for &edge_id in vertex.adjacency() {
        let Some(edge) = graph.edge(edge_id) else {
            continue;
        };
        let other = edge.other(current);
        if !visited.insert(other) {
            continue;
        }
        let Some(other_vertex) = graph.vertex(other) else {
            visited.remove(&other);
            continue;
        };
        working.insert_vertex(*other_vertex.station());
        working.insert_edge(current, other);

        search(graph, other, start, working, visited, best);

        visited.remove(&other);
        working.remove_vertex(other);
    }
}
