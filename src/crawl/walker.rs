// src/crawl/walker.rs
// =============================================================================
// This module walks a website breadth-first, one depth level at a time.
//
// How it works:
// 1. The seed URL is the only entry of the first frontier
// 2. Each level: claim the unvisited URLs, fetch them all (concurrently, up
//    to `concurrency` at once), then extract their same-origin links
// 3. Those links become the next frontier
// 4. Stop after `max_depth` levels; whatever was claimed is the result
//
// The origin (scheme + host) comes from the seed's FINAL URL after
// redirects and is fixed for the whole crawl.
//
// Failure policy:
// - The seed cannot be fetched -> the whole crawl fails
// - Any other page cannot be fetched or parsed -> logged, treated as a page
//   with no links, and the crawl carries on
// =============================================================================

use std::collections::HashSet;

use futures::stream::{self, StreamExt};
use tracing::{debug, info, trace, warn};
use url::Url;

use super::frontier::Frontier;
use crate::config::{CrawlConfig, DEFAULT_CONCURRENCY, DEFAULT_MAX_DEPTH};
use crate::error::{CrawlError, FetchError, Result};
use crate::fetch::{Fetch, Origin, Page};
use crate::link::extract_links;

pub struct Crawler<F> {
    fetcher: F,
    max_depth: usize,
    concurrency: usize,
}

impl<F: Fetch> Crawler<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            max_depth: DEFAULT_MAX_DEPTH,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    pub fn from_config(fetcher: F, config: &CrawlConfig) -> Self {
        Self::new(fetcher)
            .with_max_depth(config.max_depth)
            .with_concurrency(config.concurrency)
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    // Crawls the site that `seed` belongs to
    //
    // Returns: every URL that was visited, as normalized absolute strings.
    // URLs first discovered at depth max_depth + 1 are not included.
    // max_depth = 0 returns an empty set without touching the network.
    pub async fn crawl(&self, seed: &str) -> Result<HashSet<String>> {
        let seed_url = parse_seed(seed)?;
        info!(seed = %seed_url, max_depth = self.max_depth, "Starting crawl");

        let mut frontier = Frontier::new(seed_url);
        let mut origin: Option<Origin> = None;
        let mut failed = 0usize;
        let mut depth_reached = 0usize;

        for depth in 1..=self.max_depth {
            frontier.advance();
            let batch = frontier.claim();
            if batch.is_empty() {
                debug!(depth, "Frontier is empty, stopping early");
                break;
            }
            depth_reached = depth;
            info!(depth, pages = batch.len(), "Crawling frontier");

            // Every fetch of this level finishes before any link is merged
            // into the next frontier.
            let fetcher = &self.fetcher;
            let results: Vec<(Url, std::result::Result<Page, FetchError>)> = stream::iter(batch)
                .map(|url| async move {
                    let result = fetcher.fetch(&url).await;
                    (url, result)
                })
                .buffer_unordered(self.concurrency)
                .collect()
                .await;

            for (url, result) in results {
                let page = match result {
                    Ok(page) => page,
                    Err(source) if origin.is_none() => {
                        return Err(CrawlError::SeedResolution {
                            url: url.to_string(),
                            source,
                        });
                    }
                    Err(e) => {
                        warn!(url = %url, error = %e, "Failed to fetch page");
                        failed += 1;
                        continue;
                    }
                };

                // The first successful fetch is the seed; its final URL fixes the origin
                if origin.is_none() {
                    let resolved =
                        page.origin().ok_or_else(|| CrawlError::NoOrigin(url.to_string()))?;
                    debug!(origin = %resolved, "Resolved crawl origin");
                    origin = Some(resolved);
                }

                if let Some(scope) = &origin {
                    let added = expand(&mut frontier, &page, scope);
                    debug!(url = %url, depth, new_links = added, "Crawled page");
                }
            }
        }

        info!(
            visited = frontier.visited_len(),
            failed,
            depth = depth_reached,
            "Crawl finished"
        );
        Ok(frontier.into_visited())
    }
}

// Adds a page's same-origin links to the next frontier
//
// Returns: how many new URLs were scheduled
fn expand(frontier: &mut Frontier, page: &Page, origin: &Origin) -> usize {
    let links = match extract_links(&page.body) {
        Ok(links) => links,
        Err(e) => {
            warn!(url = %page.url, error = %e, "Failed to parse page");
            return 0;
        }
    };

    links
        .iter()
        .inspect(|link| trace!(href = %link.href, text = %link.text, "Found link"))
        .filter_map(|link| resolve_link(&page.url, &link.href))
        .filter(|url| origin.contains(url))
        .filter(|url| frontier.enqueue(url.clone()))
        .count()
}

// Resolves an href (possibly relative) against the page it was found on
//
// Examples, on page https://a.example/blog/post:
//   "/about"          -> https://a.example/about
//   "next"            -> https://a.example/blog/next
//   "//b.example/x"   -> https://b.example/x
//   "#top"            -> https://a.example/blog/post (fragment dropped)
fn resolve_link(base: &Url, href: &str) -> Option<Url> {
    let url = base.join(href.trim()).ok()?;
    Some(normalize(url))
}

// Two URLs that differ only by #fragment are the same page
fn normalize(mut url: Url) -> Url {
    url.set_fragment(None);
    url
}

fn parse_seed(seed: &str) -> Result<Url> {
    let url = Url::parse(seed.trim()).map_err(|e| CrawlError::InvalidSeed {
        url: seed.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(CrawlError::InvalidSeed {
            url: seed.to_string(),
            reason: "URL has no host".to_string(),
        });
    }
    Ok(normalize(url))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why two frontiers instead of one VecDeque?
//    - A single queue mixes "this level" and "next level" URLs
//    - Keeping them apart makes the depth limit exact: a level is finished
//      before anything from the next one starts
//
// 2. What does buffer_unordered(n) do here?
//    - It runs up to n fetch futures at the same time on this task
//    - Results come back in completion order, not request order
//    - collect().await waits for ALL of them, which is our level barrier
//
// 3. Why is the fetcher a generic F instead of HttpFetcher?
//    - Crawler<F: Fetch> works with any fetcher
//    - Tests use an in-memory site, so they never touch the network
//
// 4. Why can't two fetches claim the same URL?
//    - claim() runs before any fetch starts, on a single owner (&mut Frontier)
//    - HashSet::insert returns false for a URL that is already visited
// -----------------------------------------------------------------------------
