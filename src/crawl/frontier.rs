// src/crawl/frontier.rs
// =============================================================================
// Per-crawl traversal state: the visited set and the two frontiers.
//
// How it works:
// - `next` collects URLs discovered while expanding the current level
// - advance() swaps `next` into `current` and starts a fresh `next`
// - claim() drains `current`, marking each URL visited BEFORE it is fetched
//
// Only two frontiers ever exist, so memory is bounded by the widest level
// rather than by every link ever seen. A Frontier is created for one crawl
// call and dropped when it returns; nothing is shared between crawls.
// =============================================================================

use std::collections::HashSet;
use std::mem;

use url::Url;

#[derive(Debug, Default)]
pub(crate) struct Frontier {
    visited: HashSet<String>,
    current: HashSet<Url>,
    next: HashSet<Url>,
}

impl Frontier {
    pub(crate) fn new(seed: Url) -> Self {
        Self {
            next: HashSet::from([seed]),
            ..Self::default()
        }
    }

    /// Moves the discovered URLs into the current level.
    pub(crate) fn advance(&mut self) {
        self.current = mem::take(&mut self.next);
    }

    /// Marks every not-yet-visited URL of the current level as visited and
    /// returns those URLs. Each URL is handed out at most once per crawl.
    pub(crate) fn claim(&mut self) -> Vec<Url> {
        let visited = &mut self.visited;
        self.current
            .drain()
            // insert() is the check-and-set: false means someone got here first
            .filter(|url| visited.insert(url.to_string()))
            .collect()
    }

    /// Schedules a URL for the next level. Already-visited URLs are dropped
    /// here instead of at claim time.
    pub(crate) fn enqueue(&mut self, url: Url) -> bool {
        if self.visited.contains(url.as_str()) {
            return false;
        }
        self.next.insert(url)
    }

    pub(crate) fn visited_len(&self) -> usize {
        self.visited.len()
    }

    pub(crate) fn into_visited(self) -> HashSet<String> {
        self.visited
    }
}
