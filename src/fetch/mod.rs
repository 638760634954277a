// src/fetch/mod.rs
// =============================================================================
// This module downloads pages for the crawler.
//
// Submodules:
// - http: the real fetcher, backed by reqwest
//
// The crawler only depends on the Fetch trait defined here. That keeps the
// traversal logic testable with an in-memory site and no network at all.
// =============================================================================

mod http;

use std::fmt;

use url::Url;

use crate::error::FetchError;

pub use http::HttpFetcher;

/// The scheme + host pair that bounds a crawl.
///
/// `host` keeps an explicit non-default port ("127.0.0.1:8080"), so two
/// servers on the same machine are different origins.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin {
    pub scheme: String,
    pub host: String,
}

impl Origin {
    /// Returns None for URLs with no host (mailto:, data:, file:///...).
    pub fn of(url: &Url) -> Option<Self> {
        let host = url.host_str()?;
        let host = match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };
        Some(Self {
            scheme: url.scheme().to_string(),
            host,
        })
    }

    pub fn contains(&self, url: &Url) -> bool {
        Self::of(url).as_ref() == Some(self)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)
    }
}

/// A successfully downloaded page.
#[derive(Debug, Clone)]
pub struct Page {
    /// Where the page actually came from, after redirects
    pub url: Url,
    pub body: Vec<u8>,
}

impl Page {
    /// Origin of the final URL. Scoping must use the redirect destination.
    pub fn origin(&self) -> Option<Origin> {
        Origin::of(&self.url)
    }
}

/// Anything that can turn a URL into a page body.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn fetch(&self, url: &Url) -> Result<Page, FetchError>;
}

impl<T: Fetch> Fetch for &T {
    async fn fetch(&self, url: &Url) -> Result<Page, FetchError> {
        (**self).fetch(url).await
    }
}
