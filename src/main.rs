// src/main.rs
// =============================================================================
// This is the entry point of the wiki-hops CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, so stdout only carries results)
// 3. Dispatch to the crawl or path handler
// 4. Exit with 0 on success, 2 on an unexpected error
// =============================================================================

mod cli;
mod crawl;
mod graph;
mod store;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use crawl::{crawl_links, VisitBudget, WikipediaSource};
use store::StoreError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// --verbose always means debug; otherwise RUST_LOG, falling back to info
fn init_logging(verbose: bool) {
    let directive = log_directive(verbose, std::env::var("RUST_LOG").ok());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn log_directive(verbose: bool, rust_log: Option<String>) -> String {
    if verbose {
        return "debug".to_string();
    }
    rust_log
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| "info".to_string())
}

async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Crawl {
            page,
            depth,
            max_visits,
            base_url,
            database,
        } => handle_crawl(&page, depth, max_visits, &base_url, &database).await,
        Commands::Path {
            from,
            to,
            non_directed,
            database,
        } => handle_path(&from, &to, non_directed, &database),
    }
}

// Handles the 'crawl' subcommand
//
// The tree is only written once the whole crawl has succeeded; a failed
// fetch leaves any earlier database untouched.
async fn handle_crawl(
    page: &str,
    depth: usize,
    max_visits: usize,
    base_url: &str,
    database: &Path,
) -> Result<i32> {
    let seed = seed_reference(page);
    info!(%seed, depth, max_visits, "starting crawl");

    let source = WikipediaSource::new(base_url)?;
    let mut budget = VisitBudget::new(max_visits);

    let tree = crawl_links(&source, &seed, depth, &mut budget).await?;

    store::save_tree(database, &tree)
        .with_context(|| format!("Failed to write {}", database.display()))?;

    if tree.is_leaf() {
        warn!(%seed, "crawl found no links");
    }
    info!(
        top_level = tree.len(),
        depth = tree.depth(),
        visited = budget.count(),
        "crawl finished"
    );

    println!(
        "Saved {} page(s) to {} ({} link(s) followed)",
        tree.node_count(),
        database.display(),
        budget.count()
    );
    Ok(0)
}

// Handles the 'path' subcommand
fn handle_path(from: &str, to: &str, non_directed: bool, database: &Path) -> Result<i32> {
    println!("{}", query_path(from, to, non_directed, database)?);
    Ok(0)
}

// Answers one path query with the line to print:
//   the hop count, "Database not found" or "Path not found"
//
// Only a missing database is handled here; a malformed one is an error.
fn query_path(from: &str, to: &str, non_directed: bool, database: &Path) -> Result<String> {
    let tree = match store::load_tree(database) {
        Ok(tree) => tree,
        Err(StoreError::NotFound(path)) => {
            debug!(path = %path.display(), "no database");
            return Ok("Database not found".to_string());
        }
        Err(e) => return Err(e.into()),
    };

    let graph = graph::build_graph(&tree, non_directed);
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        directed = graph.is_directed(),
        "graph loaded"
    );

    match graph::shortest_path(&graph, from, to) {
        Some(path) => {
            debug!("Shortest path found: {}", path);
            Ok(path.hops().to_string())
        }
        None => Ok("Path not found".to_string()),
    }
}

// Turns an article title into the reference the crawler fetches
//
//   "Erdős number" -> "/wiki/Erdős_number"
fn seed_reference(title: &str) -> String {
    format!("/wiki/{}", title.replace(' ', "_"))
}
