#![forbid(unsafe_code)]

//! Undirected station-network graph engine.
//!
//! Design goals:
//! - id-addressed vertices and edges (no pointer cycles, cheap deep copies)
//! - deterministic iteration: vertices in ascending station id, edges in
//!   insertion order
//! - algorithm state (traversal labels, tentative distances) lives in the
//!   engines, never on the stored graph

pub mod connectivity;
pub mod error;
pub mod graph;
pub mod hamiltonian;
pub mod heap;
pub mod ingest;
pub mod shortest_path;
pub mod station;
pub mod traverse;

pub use connectivity::{Eulerian, eulerian, is_connected};
pub use error::{Error, Result};
pub use graph::{Edge, EdgeId, Graph, Vertex};
pub use hamiltonian::largest_hamiltonian_cycle;
pub use shortest_path::{ShortestPathTree, shortest_path_tree};
pub use station::{Station, StationId};
pub use traverse::{DfsTraversal, TraversalLabel};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
