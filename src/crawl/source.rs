// src/crawl/source.rs
// =============================================================================
// This module defines where the crawler gets its links from.
//
// - LinkSource: a trait with one operation, "give me the links on this page"
// - WikipediaSource: the real implementation, downloading articles over HTTP
//
// Keeping the HTTP side behind a trait lets the crawler be tested against an
// in-memory source without touching the network.
//
// Rust concepts:
// - Traits with async fn: the caller awaits whatever future the impl returns
// - Url::join: resolving "/wiki/Foo" against "https://en.wikipedia.org"
// =============================================================================

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::extract::extract_links;

/// Default wiki the crawler talks to
pub const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org";

/// One link found on a page
///
/// `title` is `None` for links that do not point at an article (citations,
/// edit links, ...). `href` is the reference used to fetch the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDescriptor {
    pub title: Option<String>,
    pub href: String,
}

/// Anything that can list the outgoing links of a page
///
/// Links come back in page order: in-body links first, then the
/// "See also" links.
#[allow(async_fn_in_trait)]
pub trait LinkSource {
    async fn fetch(&self, page: &str) -> Result<Vec<LinkDescriptor>>;
}

// Downloads articles from a MediaWiki site and extracts their links
pub struct WikipediaSource {
    client: Client,
    base: Url,
}

impl WikipediaSource {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)
            .with_context(|| format!("Invalid base URL '{}'", base_url))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(concat!("wiki-hops/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base })
    }

    // Turns a page reference into the URL to download
    //
    //   "/wiki/Graph"               -> "https://en.wikipedia.org/wiki/Graph"
    //   "https://example.org/x"     -> unchanged
    fn page_url(&self, page: &str) -> Result<Url> {
        self.base
            .join(page)
            .with_context(|| format!("Cannot resolve page reference '{}'", page))
    }
}

impl LinkSource for WikipediaSource {
    async fn fetch(&self, page: &str) -> Result<Vec<LinkDescriptor>> {
        let url = self.page_url(page)?;
        debug!(%url, "fetching page");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?;

        // Error pages still get parsed; a missing article only loses its links
        if !response.status().is_success() {
            warn!(%url, status = %response.status(), "non-success response");
        }

        let html = response
            .text()
            .await
            .with_context(|| format!("Failed to read body of {}", url))?;

        Ok(extract_links(&html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_wiki_path() {
        let source = WikipediaSource::new(DEFAULT_BASE_URL).unwrap();
        let url = source.page_url("/wiki/Erd%C5%91s_number").unwrap();
        assert_eq!(url.as_str(), "https://en.wikipedia.org/wiki/Erd%C5%91s_number");
    }

    #[test]
    fn test_resolve_absolute_reference() {
        let source = WikipediaSource::new(DEFAULT_BASE_URL).unwrap();
        let url = source.page_url("https://example.org/page").unwrap();
        assert_eq!(url.as_str(), "https://example.org/page");
    }

    #[test]
    fn test_encode_non_ascii_title() {
        let source = WikipediaSource::new(DEFAULT_BASE_URL).unwrap();
        let url = source.page_url("/wiki/Erdős_number").unwrap();
        assert_eq!(url.path(), "/wiki/Erd%C5%91s_number");
    }

    #[test]
    fn test_reject_invalid_base() {
        assert!(WikipediaSource::new("not a url").is_err());
    }
}
