// src/config.rs
// =============================================================================
// Runtime configuration for a crawl.
//
// All settings come from the command line (see cli.rs). CrawlConfig is the
// resolved, validated form that the fetcher and crawler are built from, so
// neither of them needs to know about clap.
// =============================================================================

use std::time::Duration;

use crate::cli::SitemapArgs;

pub const DEFAULT_MAX_DEPTH: usize = 3;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONCURRENCY: usize = 8;
pub const DEFAULT_MAX_REDIRECTS: usize = 10;
pub const DEFAULT_USER_AGENT: &str = concat!("sitemap-builder/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    /// Number of BFS levels to expand; 0 visits nothing
    pub max_depth: usize,
    /// Per-request timeout, so one dead host cannot stall a whole level
    pub timeout: Duration,
    /// Max fetches in flight within one frontier level (always >= 1)
    pub concurrency: usize,
    pub max_redirects: usize,
    pub user_agent: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            concurrency: DEFAULT_CONCURRENCY,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl From<&SitemapArgs> for CrawlConfig {
    fn from(args: &SitemapArgs) -> Self {
        Self {
            max_depth: args.max_depth,
            timeout: Duration::from_secs(args.timeout),
            concurrency: args.concurrency.max(1),
            max_redirects: args.max_redirects,
            user_agent: args.user_agent.clone(),
        }
    }
}
