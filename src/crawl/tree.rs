// src/crawl/tree.rs
// =============================================================================
// This module implements the crawl itself.
//
// How it works:
// 1. Stop right away if the depth is used up or the visit budget is spent
// 2. Fetch the page and walk its links in order
// 3. For every link with a title: count it against the budget, crawl its
//    target one level shallower, and store the result under the title
//
// The result is a LinkTree: title -> LinkTree, nested as deep as the crawl
// went. The same article can show up in several branches; each occurrence
// is expanded on its own.
//
// The budget is checked only when a page is entered. Links already being
// walked on the current page keep counting past the limit; only the pages
// they lead to come back empty.
//
// Rust concepts:
// - Recursive async: each level returns a boxed future (LocalBoxFuture)
// - &mut threading: one VisitBudget is reborrowed by every recursive call
// =============================================================================

use anyhow::Result;
use futures::future::{FutureExt, LocalBoxFuture};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

use super::source::LinkSource;

/// Number of followed links after which pages stop being fetched
pub const DEFAULT_VISIT_LIMIT: usize = 1000;

/// Nested map of article title -> links found on that article
///
/// Serializes as plain nested JSON objects, e.g.
/// `{"Graph": {"Vertex": {}}, "Path": {}}`. An empty map is a leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkTree(BTreeMap<String, LinkTree>);

impl LinkTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a subtree, replacing any earlier one under the same title
    pub fn insert(&mut self, title: impl Into<String>, subtree: LinkTree) {
        self.0.insert(title.into(), subtree);
    }

    #[cfg(test)]
    pub fn get(&self, title: &str) -> Option<&LinkTree> {
        self.0.get(title)
    }

    pub fn is_leaf(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of keys at this level
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &LinkTree)> {
        self.0.iter()
    }

    /// Number of keys at every level
    pub fn node_count(&self) -> usize {
        self.0.values().map(|child| 1 + child.node_count()).sum()
    }

    /// Number of nesting levels; a leaf has depth 0
    pub fn depth(&self) -> usize {
        self.0
            .values()
            .map(|child| 1 + child.depth())
            .max()
            .unwrap_or(0)
    }
}

impl FromIterator<(String, LinkTree)> for LinkTree {
    fn from_iter<I: IntoIterator<Item = (String, LinkTree)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Counts followed links across one whole crawl
#[derive(Debug, Clone)]
pub struct VisitBudget {
    visited: usize,
    limit: usize,
}

impl VisitBudget {
    pub fn new(limit: usize) -> Self {
        Self { visited: 0, limit }
    }

    pub fn record(&mut self) {
        self.visited += 1;
    }

    pub fn count(&self) -> usize {
        self.visited
    }

    /// True once the count is strictly past the limit
    pub fn is_exhausted(&self) -> bool {
        self.visited > self.limit
    }
}

impl Default for VisitBudget {
    fn default() -> Self {
        Self::new(DEFAULT_VISIT_LIMIT)
    }
}

// Crawls `page` and everything reachable from it within `depth` levels
//
// Parameters:
//   source: where page links come from
//   page:   reference of the page to fetch (e.g. "/wiki/Graph")
//   depth:  levels left; 0 returns an empty tree without fetching
//   budget: shared across the whole crawl
//
// Any fetch error aborts the whole crawl.
pub fn crawl_links<'a, S: LinkSource>(
    source: &'a S,
    page: &'a str,
    depth: usize,
    budget: &'a mut VisitBudget,
) -> LocalBoxFuture<'a, Result<LinkTree>> {
    async move {
        if depth == 0 || budget.is_exhausted() {
            return Ok(LinkTree::new());
        }

        let links = source.fetch(page).await?;

        let mut tree = LinkTree::new();
        for link in links {
            let title = match link.title {
                Some(title) if !title.is_empty() => title,
                _ => continue,
            };

            budget.record();
            info!(href = %link.href, visited = budget.count(), "visited page");

            let subtree = crawl_links(source, &link.href, depth - 1, &mut *budget).await?;
            tree.insert(title, subtree);
        }

        Ok(tree)
    }
    .boxed_local()
}
