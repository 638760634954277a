// src/sitemap/mod.rs
// =============================================================================
// This module turns the crawler's visited set into a sitemap.
//
// Submodules:
// - xml: writes the sitemaps.org <urlset> document
// =============================================================================

mod xml;

use std::collections::HashSet;

use serde::Serialize;

/// Namespace every sitemaps.org document declares on <urlset>.
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Ordered list of page URLs, one entry per visited page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sitemap {
    #[serde(rename = "xmlns")]
    pub namespace: &'static str,
    pub urls: Vec<String>,
}

impl Sitemap {
    // Builds a sitemap from a crawl result
    //
    // A HashSet cannot hold duplicates, so every URL appears exactly once.
    // Entries are sorted so that two crawls of the same site print the same
    // document.
    pub fn assemble(visited: HashSet<String>) -> Self {
        let mut urls: Vec<String> = visited.into_iter().collect();
        urls.sort();

        Self {
            namespace: SITEMAP_NAMESPACE,
            urls,
        }
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
