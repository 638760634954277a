// src/fetch/http.rs
// =============================================================================
// This module fetches pages over HTTP with reqwest.
//
// Key functionality:
// - One shared Client (connection pooling across the whole crawl)
// - Per-request timeout so a single unreachable host cannot stall a level
// - Follows redirects and reports the final URL, because same-origin
//   scoping has to use the destination host, not the requested one
// - Decodes the body by its declared charset
// - Turns reqwest errors into our own FetchError categories
//
// Rust concepts:
// - async/await: For network I/O
// - Result<T, E>: Every failure mode is a FetchError variant
// =============================================================================

use reqwest::{redirect, Client};
use tracing::debug;
use url::Url;

use super::{Fetch, Page};
use crate::config::CrawlConfig;
use crate::error::FetchError;

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &CrawlConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .redirect(redirect::Policy::limited(config.max_redirects))
            .build()?;

        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<Page, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(categorize_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        // reqwest has already followed any redirects at this point
        let final_url = response.url().clone();
        if final_url != *url {
            debug!(from = %url, to = %final_url, "Followed redirect");
        }

        // text() decodes using the charset in Content-Type (UTF-8 if none),
        // so Latin-1 and windows-1252 pages come out as proper UTF-8
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))?;

        Ok(Page {
            url: final_url,
            body: body.into_bytes(),
        })
    }
}

// Categorizes reqwest errors into FetchError variants
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - Too many redirects
// - DNS resolution failure / connection refused
// - A URL reqwest refuses to build a request for
fn categorize_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_redirect() {
        FetchError::TooManyRedirects
    } else if error.is_connect() {
        FetchError::Connect(error.to_string())
    } else if error.is_builder() {
        FetchError::InvalidUrl(error.to_string())
    } else {
        FetchError::Request(error.to_string())
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why one Client for the whole crawl?
//    - A Client keeps a pool of open connections
//    - Reusing it means pages on the same host skip the TCP/TLS handshake
//    - Cloning a Client is cheap (it is reference counted internally)
//
// 2. Where do redirects happen?
//    - Inside send(): reqwest follows them according to redirect::Policy
//    - response.url() is the LAST URL in the chain, not the one we asked for
//
// 3. Why map_err(categorize_error)?
//    - reqwest::Error is one type for many problems
//    - Turning it into FetchError lets the crawler log a clear reason
//      ("request timed out") instead of a long library message
//
// 4. What does impl Fetch for HttpFetcher mean?
//    - Fetch is a trait (like an interface)
//    - The crawler accepts any type that implements it, so tests can swap in
//      an in-memory website
// -----------------------------------------------------------------------------
