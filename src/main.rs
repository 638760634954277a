// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing, to stderr so stdout stays clean)
// 3. Dispatch to the subcommand:
//    - sitemap: crawl the site breadth-first and print XML (or JSON)
//    - links:   read one HTML file and print its links
// 4. Exit with proper code (0 = success, 2 = error)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;      // src/cli.rs - command-line parsing
mod config;   // src/config.rs - resolved crawl settings
mod crawl;    // src/crawl/ - breadth-first frontier walker
mod error;    // src/error.rs - error types
mod fetch;    // src/fetch/ - HTTP page fetcher
mod link;     // src/link/ - HTML link extraction
mod sitemap;  // src/sitemap/ - sitemap assembly and output

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser; // Parser trait enables the parse() method
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, SitemapArgs};
use config::CrawlConfig;
use crawl::Crawler;
use fetch::HttpFetcher;
use link::{extract_links, Link};
use sitemap::Sitemap;

// The #[tokio::main] attribute transforms our async main into a real main function
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Match on which subcommand was used
    match cli.command {
        Commands::Sitemap(args) => handle_sitemap(&args).await,
        Commands::Links { html_path, json } => handle_links(&html_path, json),
    }
}

// Handles the 'sitemap' subcommand
async fn handle_sitemap(args: &SitemapArgs) -> Result<()> {
    let config = CrawlConfig::from(args);
    let sitemap = build_sitemap(&args.url, &config).await?;
    if sitemap.is_empty() {
        warn!("No pages were visited; the sitemap is empty");
    } else {
        info!(pages = sitemap.len(), "Sitemap built");
    }

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("could not create {}", path.display()))?;
            write_sitemap(&sitemap, args.json, BufWriter::new(file))
                .with_context(|| format!("could not write {}", path.display()))?;
        }
        None => {
            let stdout = io::stdout();
            write_sitemap(&sitemap, args.json, stdout.lock()).context("could not write to stdout")?;
        }
    }

    Ok(())
}

// Handles the 'links' subcommand
fn handle_links(html_path: &Path, json: bool) -> Result<()> {
    let links = read_links(html_path)?;
    info!(path = %html_path.display(), links = links.len(), "Parsed HTML file");

    let stdout = io::stdout();
    write_links(&links, json, stdout.lock()).context("could not write to stdout")
}

fn read_links(html_path: &Path) -> Result<Vec<Link>> {
    let html = fs::read(html_path)
        .with_context(|| format!("could not read {}", html_path.display()))?;
    extract_links(&html).with_context(|| format!("could not parse {}", html_path.display()))
}

// Prints links either as text blocks or as a JSON array
fn write_links<W: Write>(links: &[Link], json: bool, mut out: W) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(links)?)?;
    } else {
        for link in links {
            writeln!(out, "{{href: {}\n text: {}}}", link.href, link.text)?;
        }
    }
    out.flush()?;
    Ok(())
}

// Crawls `url` and assembles the result
//
// This is the whole pipeline minus argument parsing and output, which
// keeps it easy to test against a local server.
async fn build_sitemap(url: &str, config: &CrawlConfig) -> Result<Sitemap> {
    let fetcher = HttpFetcher::new(config).context("could not build HTTP client")?;
    let crawler = Crawler::from_config(fetcher, config);

    let visited = crawler
        .crawl(url)
        .await
        .with_context(|| format!("crawl of {} failed", url))?;

    Ok(Sitemap::assemble(visited))
}

fn write_sitemap<W: Write>(sitemap: &Sitemap, json: bool, mut out: W) -> Result<()> {
    if json {
        writeln!(out, "{}", sitemap.to_json()?)?;
        out.flush()?;
    } else {
        sitemap.write_xml(out)?;
    }
    Ok(())
}

// RUST_LOG wins when it is set; otherwise -v flags pick the level
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sitemap_builder={level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
