// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Breadth-first crawling, one depth level at a time
// - Same-origin restriction (scheme + host of the seed, after redirects)
// - Hard depth limit
// - Bounded concurrent fetching within a level
//
// Submodules:
// - frontier: visited set + current/next frontiers for one crawl
// - walker: the Crawler that drives fetching and link expansion
// =============================================================================

mod frontier;
mod walker;

pub use walker::Crawler;
