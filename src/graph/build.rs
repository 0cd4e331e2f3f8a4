// src/graph/build.rs
// =============================================================================
// This module flattens a LinkTree into an adjacency graph.
//
// Every parent -> child pair in the tree becomes one edge. The top level of
// the tree has no article above it, so its keys hang off Node::Root.
// Nothing else is inferred: siblings are not connected, and an article that
// appears in two branches simply collects edges from both.
//
// In an undirected graph each edge is stored in both directions.
//
// Rust concepts:
// - Enums as identifiers: Root can never collide with an article title
// - BTreeMap/BTreeSet: sorted containers give a stable iteration order
// =============================================================================

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::crawl::LinkTree;

/// A vertex of the link graph
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Node {
    /// Synthetic parent of the tree's top-level articles
    Root,
    Page(String),
}

impl Node {
    pub fn page(title: impl Into<String>) -> Self {
        Node::Page(title.into())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Root => write!(f, "<root>"),
            Node::Page(title) => write!(f, "{}", title),
        }
    }
}

/// Adjacency-set graph over article titles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    directed: bool,
    adjacency: BTreeMap<Node, BTreeSet<Node>>,
}

impl Graph {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            adjacency: BTreeMap::new(),
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Adds `source -> target`, and `target -> source` when undirected
    pub fn add_edge(&mut self, source: Node, target: Node) {
        if !self.directed {
            self.adjacency
                .entry(target.clone())
                .or_default()
                .insert(source.clone());
        }
        self.adjacency.entry(source).or_default().insert(target);
    }

    /// Outgoing neighbours of `node`; empty for unknown nodes
    pub fn neighbors<'a>(&'a self, node: &Node) -> impl Iterator<Item = &'a Node> + 'a {
        self.adjacency.get(node).into_iter().flatten()
    }

    #[cfg(test)]
    pub fn has_edge(&self, source: &Node, target: &Node) -> bool {
        self.adjacency
            .get(source)
            .is_some_and(|targets| targets.contains(target))
    }

    #[cfg(test)]
    /// True if `node` has at least one outgoing edge
    pub fn contains(&self, node: &Node) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Number of nodes with outgoing edges
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored (directed) edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum()
    }

    #[cfg(test)]
    /// All stored edges in sorted order
    pub fn edges(&self) -> impl Iterator<Item = (&Node, &Node)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(source, targets)| targets.iter().map(move |target| (source, target)))
    }
}

// Builds the graph for a whole link tree
//
// Parameters:
//   tree: the crawl result
//   undirected: store each parent/child edge in both directions
pub fn build_graph(tree: &LinkTree, undirected: bool) -> Graph {
    let mut graph = Graph::new(!undirected);
    add_subtree(&mut graph, &Node::Root, tree);
    graph
}

fn add_subtree(graph: &mut Graph, parent: &Node, tree: &LinkTree) {
    for (title, subtree) in tree.iter() {
        let child = Node::page(title.as_str());
        graph.add_edge(parent.clone(), child.clone());
        add_subtree(graph, &child, subtree);
    }
}
