//! Single-source shortest-path trees (Dijkstra with decrease-key).

use std::collections::BTreeMap;

use rustc_hash::FxBuildHasher;

use crate::graph::Graph;
use crate::heap::IndexHeap;
use crate::station::StationId;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;
type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

/// Result of a single-source shortest-path computation.
///
/// `tree` holds one vertex per reachable vertex of the source graph and one
/// edge per shortest-path parent link; its total distance is the sum of all
/// parent-link weights. `predecessors` maps each reachable station to its
/// predecessor on the shortest path from the source, with the source itself
/// mapped to `None`. Unreachable vertices appear in neither.
#[derive(Debug)]
pub struct ShortestPathTree {
    pub tree: Graph,
    pub predecessors: BTreeMap<StationId, Option<StationId>>,
}

impl ShortestPathTree {
    /// The shortest path from the source to `target`, as station ids in
    /// travel order. `None` when `target` was not reached.
    pub fn path_to(&self, target: StationId) -> Option<Vec<StationId>> {
        if !self.predecessors.contains_key(&target) {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(Some(previous)) = self.predecessors.get(&current) {
            path.push(*previous);
            current = *previous;
        }
        path.reverse();
        Some(path)
    }
}

/// Builds the shortest-path tree rooted at `source`.
///
/// Every vertex starts at tentative distance +inf (0 for the source) and is
/// pushed into an indexed min-heap. Relaxation uses strict inequality, so
/// an equal-length path discovered later never replaces the first-found
/// predecessor. Vertices popped at +inf are unreachable; since the heap
/// pops all finite keys first, the loop stops at the first one.
pub fn shortest_path_tree(graph: &Graph, source: StationId) -> ShortestPathTree {
    let mut distances: HashMap<StationId, f64> = HashMap::default();
    let mut previous: HashMap<StationId, StationId> = HashMap::default();
    let mut finalized: HashSet<StationId> = HashSet::default();
    let mut heap = IndexHeap::new();

    for id in graph.station_ids() {
        let distance = if id == source { 0.0 } else { f64::INFINITY };
        distances.insert(id, distance);
        heap.push(id, distance);
    }

    let mut tree = Graph::new();
    let mut predecessors: BTreeMap<StationId, Option<StationId>> = BTreeMap::new();

    while let Some((current, distance)) = heap.pop() {
        if distance.is_infinite() {
            break;
        }
        let Some(vertex) = graph.vertex(current) else {
            continue;
        };

        tree.insert_vertex(*vertex.station());
        let parent = previous.get(&current).copied();
        if let Some(parent) = parent {
            tree.insert_edge(current, parent);
        }
        predecessors.insert(current, parent);

        for &edge_id in vertex.adjacency() {
            let Some(edge) = graph.edge(edge_id) else {
                continue;
            };
            let neighbor = edge.other(current);
            if finalized.contains(&neighbor) {
                continue;
            }
            let Some(weight) = graph.edge_distance(edge_id) else {
                continue;
            };
            let candidate = distance + weight;
            let Some(tentative) = distances.get_mut(&neighbor) else {
                continue;
            };
            if candidate < *tentative {
                *tentative = candidate;
                previous.insert(neighbor, current);
                heap.decrease_key(neighbor, candidate);
            }
        }
        finalized.insert(current);
    }

    ShortestPathTree { tree, predecessors }
}
