// src/graph/mod.rs
// =============================================================================
// This module answers "how many hops from page A to page B".
//
// Submodules:
// - build: turns a LinkTree into a directed or undirected Graph
// - search: breadth-first shortest path over that Graph
// =============================================================================

mod build;
mod search;

pub use build::build_graph;
#[cfg(test)]
pub use build::Node;
pub use search::shortest_path;
