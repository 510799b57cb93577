//! Connectivity and Eulerian classification.

use crate::graph::Graph;
use crate::traverse::DfsTraversal;

/// Eulerian classification of a connected graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eulerian {
    /// No Eulerian path or circuit (also reported for disconnected graphs).
    None,
    /// An Eulerian path exists: exactly two odd-degree vertices.
    Path,
    /// An Eulerian circuit exists: every vertex has even degree.
    Circuit,
}

impl Eulerian {
    /// Numeric code: 0 none, 1 path, 2 circuit.
    pub fn code(self) -> u8 {
        match self {
            Eulerian::None => 0,
            Eulerian::Path => 1,
            Eulerian::Circuit => 2,
        }
    }
}

/// True iff the graph is non-empty and a full depth-first traversal from
/// the store-order-first vertex finds a single connected component.
pub fn is_connected(graph: &Graph) -> bool {
    let Some(start) = graph.station_ids().next() else {
        return false;
    };
    let mut traversal = DfsTraversal::new(graph, start);
    for _ in traversal.by_ref() {}
    traversal.connected_components() == 1
}

/// Classifies the graph by degree parity.
///
/// A disconnected (or empty) graph is never Eulerian. An odd-degree count
/// of exactly 1 cannot occur in a finite undirected graph.
pub fn eulerian(graph: &Graph) -> Eulerian {
    if !is_connected(graph) {
        return Eulerian::None;
    }
    let odd_count = graph.vertices().filter(|v| v.degree() % 2 == 1).count();
    if odd_count > 2 {
        Eulerian::None
    } else if odd_count == 2 {
        Eulerian::Path
    } else {
        Eulerian::Circuit
    }
}
