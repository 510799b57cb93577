//! Depth-first traversal spanning every connected component.

use rustc_hash::FxBuildHasher;

use crate::graph::{EdgeId, Graph};
use crate::station::StationId;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;
type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

/// Classification assigned to an edge during a depth-first traversal.
///
/// Discovery edges lead to a newly visited vertex; back edges connect to an
/// already-visited one and mark a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalLabel {
    #[default]
    Unexplored,
    Discovery,
    Back,
}

/// Lazy depth-first iterator over a graph, yielding every vertex exactly
/// once in pop order, regardless of how many connected components exist.
///
/// When the frontier drains with unvisited vertices remaining, the
/// traversal reseeds itself from the next unvisited vertex in ascending id
/// order and bumps the component count. Labels live here, not on the graph,
/// so the traversal only needs a shared borrow.
pub struct DfsTraversal<'g> {
    graph: &'g Graph,
    visited: HashSet<StationId>,
    edge_labels: HashMap<EdgeId, TraversalLabel>,
    frontier: Vec<StationId>,
    cursor: Option<StationId>,
    components: usize,
}

impl<'g> DfsTraversal<'g> {
    /// Starts a traversal at `start`, which must be a vertex of `graph`.
    pub fn new(graph: &'g Graph, start: StationId) -> Self {
        debug_assert!(
            graph.vertex(start).is_some(),
            "traversal start must be a graph vertex"
        );
        let mut visited = HashSet::default();
        let mut frontier = Vec::new();
        let mut components = 0;
        if graph.vertex(start).is_some() {
            visited.insert(start);
            frontier.push(start);
            components = 1;
        }
        Self {
            graph,
            visited,
            edge_labels: HashMap::default(),
            frontier,
            cursor: None,
            components,
        }
    }

    /// Number of connected components seen so far. Monotone during
    /// iteration; equals the true component count once the iterator is
    /// exhausted.
    pub fn connected_components(&self) -> usize {
        self.components
    }

    /// The label assigned to `edge` so far. Every edge ends up `Discovery`
    /// or `Back` once the traversal is exhausted.
    pub fn edge_label(&self, edge: EdgeId) -> TraversalLabel {
        self.edge_labels
            .get(&edge)
            .copied()
            .unwrap_or(TraversalLabel::Unexplored)
    }

    /// Reseeds the frontier from the next unvisited vertex after the
    /// cursor, in ascending id order.
    fn chain_next_component(&mut self) -> bool {
        let mut seed = None;
        for id in self.graph.station_ids_after(self.cursor) {
            self.cursor = Some(id);
            if !self.visited.contains(&id) {
                seed = Some(id);
                break;
            }
        }
        let Some(seed) = seed else {
            return false;
        };
        self.visited.insert(seed);
        self.frontier.push(seed);
        self.components += 1;
        true
    }
}

impl Iterator for DfsTraversal<'_> {
    type Item = StationId;

    fn next(&mut self) -> Option<StationId> {
        if self.frontier.is_empty() && !self.chain_next_component() {
            return None;
        }
        let current = self.frontier.pop()?;
        let Some(vertex) = self.graph.vertex(current) else {
            return Some(current);
        };
        for &edge_id in vertex.adjacency() {
            let Some(edge) = self.graph.edge(edge_id) else {
                continue;
            };
            let other = edge.other(current);
            if self.visited.insert(other) {
                self.edge_labels.insert(edge_id, TraversalLabel::Discovery);
                self.frontier.push(other);
            } else if !self.edge_labels.contains_key(&edge_id) {
                self.edge_labels.insert(edge_id, TraversalLabel::Back);
            }
        }
        Some(current)
    }
}
