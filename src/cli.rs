// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Two subcommands:
// - sitemap: crawl a website and print its sitemap
// - links:   list every link (href + text) in a local HTML file
// =============================================================================

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{
    DEFAULT_CONCURRENCY, DEFAULT_MAX_DEPTH, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "sitemap-builder",
    version,
    about = "Build sitemaps for websites and list the links in HTML files",
    long_about = "sitemap-builder starts from a URL, follows links breadth-first up to a maximum depth, \
                  stays on the starting page's scheme and host, and prints the pages it found as a \
                  sitemaps.org XML document. It can also list the links of a single HTML file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides this.
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

// Each variant represents a different subcommand the user can run
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a website and print its sitemap
    ///
    /// Example: sitemap-builder sitemap --url https://example.com --max-depth 2
    Sitemap(SitemapArgs),

    /// Print every link in a local HTML file
    ///
    /// Example: sitemap-builder links --html-path page.html
    Links {
        /// Path to the HTML file to read
        #[arg(long, default_value = "data/ex1.html")]
        html_path: PathBuf,

        /// Output the links as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

// Flags of the `sitemap` subcommand
//
// Kept in its own struct (instead of inline fields like `Links`) because
// CrawlConfig is built straight from it.
#[derive(Args, Debug)]
pub struct SitemapArgs {
    /// URL to build a sitemap for
    #[arg(long, default_value = "https://gophercises.com")]
    pub url: String,

    /// Maximum number of link hops to traverse
    ///
    /// Depth 1 = just the starting page
    /// Depth 2 = starting page + all pages it links to
    /// Depth 0 = nothing is fetched and the sitemap is empty
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Maximum number of pages fetched at the same time
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Maximum number of redirects followed per request
    #[arg(long, default_value_t = DEFAULT_MAX_REDIRECTS)]
    pub max_redirects: usize,

    /// User-Agent header sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Output the sitemap as JSON instead of XML
    #[arg(long)]
    pub json: bool,

    /// Write the sitemap to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Parser vs Subcommand vs Args?
//    - Parser: the top-level struct, the thing you call ::parse() on
//    - Subcommand: an enum, one variant per subcommand
//    - Args: a plain group of flags that can be reused or embedded
//
// 2. What does global = true do?
//    - The flag is accepted before OR after the subcommand name
//    - `sitemap-builder -v sitemap` and `sitemap-builder sitemap -v` both work
//
// 3. What is ArgAction::Count?
//    - Counts how many times a flag appears: -v = 1, -vv = 2
//    - Handy for verbosity levels
//
// 4. default_value vs default_value_t?
//    - default_value takes a string that clap parses like user input
//    - default_value_t takes an already-typed Rust value (e.g. a usize constant)
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sitemap_flags() {
        let cli = Cli::parse_from([
            "sitemap-builder",
            "sitemap",
            "--url",
            "https://example.com",
            "--max-depth",
            "5",
            "--json",
            "-o",
            "out.json",
            "-vv",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Sitemap(args) => {
                assert_eq!(args.url, "https://example.com");
                assert_eq!(args.max_depth, 5);
                assert!(args.json);
                assert_eq!(args.output, Some(PathBuf::from("out.json")));
            }
            other => panic!("expected sitemap subcommand, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_links_defaults() {
        let cli = Cli::parse_from(["sitemap-builder", "links"]);
        match cli.command {
            Commands::Links { html_path, json } => {
                assert_eq!(html_path, PathBuf::from("data/ex1.html"));
                assert!(!json);
            }
            other => panic!("expected links subcommand, got {other:?}"),
        }
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["sitemap-builder"]).is_err());
    }
}
