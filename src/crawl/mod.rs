// src/crawl/mod.rs
// =============================================================================
// This module handles crawling the wiki into a link tree.
//
// Submodules:
// - source: the LinkSource trait and the HTTP-backed WikipediaSource
// - extract: pulls in-body and "See also" links out of article HTML
// - tree: the LinkTree type and the depth/budget limited crawl
//
// Features:
// - Depth-limited recursive crawl from a seed article
// - One visit budget shared by the whole crawl
// - Strictly sequential: one request in flight at a time
// =============================================================================

mod extract;
mod source;
mod tree;

pub use source::{WikipediaSource, DEFAULT_BASE_URL};
#[cfg(test)]
pub use source::{LinkDescriptor, LinkSource};
pub use tree::{crawl_links, LinkTree, VisitBudget, DEFAULT_VISIT_LIMIT};
