// src/error.rs
// =============================================================================
// Error types for the crawler.
//
// There are three kinds of failure and they have very different blast radii:
// - ParseError: one page's HTML could not be read. That page yields no links.
// - FetchError: one page could not be downloaded. That page yields no links.
// - CrawlError: the crawl itself cannot start (bad seed, seed unreachable).
//
// Only CrawlError ever reaches main(). The other two are logged and dropped
// inside the frontier walker.
// =============================================================================

use thiserror::Error;

/// Failure to turn a page body into links.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("anchor selector failed to compile: {0}")]
    Selector(String),
}

/// Failure to download a single page.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("request timed out")]
    Timeout,

    #[error("too many redirects")]
    TooManyRedirects,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("could not read response body: {0}")]
    Body(String),

    #[error("request failed: {0}")]
    Request(String),
}

/// Failure that aborts a whole crawl.
#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("invalid seed URL '{url}': {reason}")]
    InvalidSeed { url: String, reason: String },

    #[error("could not resolve seed URL '{url}': {source}")]
    SeedResolution {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("seed URL '{0}' resolved to a URL without a host")]
    NoOrigin(String),
}

pub type Result<T> = std::result::Result<T, CrawlError>;
