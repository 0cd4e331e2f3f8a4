// src/graph/search.rs
// =============================================================================
// This module finds the fewest-hops path between two articles.
//
// Breadth-first search over whole candidate paths:
// 1. The queue starts with the one-node path [start]
// 2. Take the path at the front; look at its last node
// 3. If that node was not expanded yet, enqueue one extended path per
//    neighbour, returning as soon as a neighbour is the target
// 4. Mark the node expanded
//
// A node is marked only after its neighbours are queued, so the same node
// can sit at the end of several queued paths. All paths with k hops are
// queued before any path with k + 1 hops is taken, so the first path that
// reaches the target is a shortest one. Which shortest path wins depends on
// neighbour order, which is sorted here.
//
// Rust concepts:
// - VecDeque: FIFO queue (push_back / pop_front)
// - Option<Path>: None means there is no route
// =============================================================================

use std::collections::{HashSet, VecDeque};
use std::fmt;

use super::build::{Graph, Node};

/// A route through the graph, from start to end inclusive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path(Vec<Node>);

impl Path {
    #[cfg(test)]
    pub fn nodes(&self) -> &[Node] {
        &self.0
    }

    /// Number of edges walked
    pub fn hops(&self) -> usize {
        self.0.len() - 1
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}

// Finds a path with the fewest hops from `start` to `end`
//
// Returns None when `end` cannot be reached, including when either title is
// not in the graph at all. `start == end` is always a zero-hop path.
pub fn shortest_path(graph: &Graph, start: &str, end: &str) -> Option<Path> {
    let start = Node::page(start);
    let end = Node::page(end);

    if start == end {
        return Some(Path(vec![start]));
    }

    let mut visited: HashSet<Node> = HashSet::new();
    let mut queue: VecDeque<Vec<Node>> = VecDeque::new();
    queue.push_back(vec![start]);

    while let Some(path) = queue.pop_front() {
        let Some(node) = path.last() else {
            continue;
        };

        if visited.contains(node) {
            continue;
        }

        for neighbor in graph.neighbors(node) {
            let mut extended = path.clone();
            extended.push(neighbor.clone());

            if *neighbor == end {
                return Some(Path(extended));
            }
            queue.push_back(extended);
        }

        visited.insert(node.clone());
    }

    None
}
