// src/link/mod.rs
// =============================================================================
// This module turns raw HTML into a list of hyperlinks.
//
// Submodules:
// - extract: walks the parsed document and builds one Link per <a href>
// =============================================================================

mod extract;

pub use extract::{extract_links, Link};
