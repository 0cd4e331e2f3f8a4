// src/cli.rs
// =============================================================================
// This file defines the command-line interface using `clap`.
//
// Two subcommands:
// - crawl: walk the wiki from a seed article and save the link tree
// - path:  load the saved tree and count hops between two articles
//
// The database path can also come from the WIKI_FILE environment variable.
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::crawl::{DEFAULT_BASE_URL, DEFAULT_VISIT_LIMIT};
use crate::store::DEFAULT_DATABASE;

#[derive(Parser, Debug)]
#[command(
    name = "wiki-hops",
    version,
    about = "Crawl a region of Wikipedia and count the link hops between two articles",
    long_about = "wiki-hops follows links outward from a seed article, saves the discovered \
                  link tree as JSON, and answers shortest-path queries over it."
)]
pub struct Cli {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl outward from a seed article and save the link tree
    ///
    /// Example: wiki-hops crawl --page "Graph theory" --depth 2
    Crawl {
        /// Title of the seed article
        #[arg(short, long, default_value = "Erdős number")]
        page: String,

        /// How many levels of links to follow (0 saves an empty tree)
        #[arg(short, long, default_value_t = 3)]
        depth: usize,

        /// Stop fetching pages once this many links have been followed
        #[arg(long, default_value_t = DEFAULT_VISIT_LIMIT)]
        max_visits: usize,

        /// Wiki to crawl
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// Where to write the link tree
        #[arg(long, env = "WIKI_FILE", default_value = DEFAULT_DATABASE)]
        database: PathBuf,
    },

    /// Print the number of hops between two articles in the saved tree
    ///
    /// Example: wiki-hops path --from "Erdős number" --to "Paul Erdős"
    Path {
        /// Starting article title
        #[arg(long = "from")]
        from: String,

        /// Target article title
        #[arg(long = "to")]
        to: String,

        /// Treat links as two-way
        #[arg(long)]
        non_directed: bool,

        /// Where to read the link tree from
        #[arg(long, env = "WIKI_FILE", default_value = DEFAULT_DATABASE)]
        database: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crawl_defaults() {
        let cli = Cli::try_parse_from(["wiki-hops", "crawl"]).unwrap();
        match cli.command {
            Commands::Crawl {
                page,
                depth,
                max_visits,
                base_url,
                ..
            } => {
                assert_eq!(page, "Erdős number");
                assert_eq!(depth, 3);
                assert_eq!(max_visits, 1000);
                assert_eq!(base_url, "https://en.wikipedia.org");
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_path_arguments() {
        let cli = Cli::try_parse_from([
            "wiki-hops",
            "path",
            "--from",
            "A",
            "--to",
            "B",
            "--non-directed",
            "-v",
            "--database",
            "other.json",
        ])
        .unwrap();
        match cli.command {
            Commands::Path {
                from,
                to,
                non_directed,
                database,
            } => {
                assert_eq!(from, "A");
                assert_eq!(to, "B");
                assert!(non_directed);
                assert_eq!(database, PathBuf::from("other.json"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(cli.verbose);
    }

    #[test]
    fn test_path_requires_endpoints() {
        assert!(Cli::try_parse_from(["wiki-hops", "path", "--from", "A"]).is_err());
    }

    #[test]
    fn test_path_defaults_to_directed() {
        let cli = Cli::try_parse_from(["wiki-hops", "path", "--from", "A", "--to", "B"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Path {
                non_directed: false,
                ..
            }
        ));
    }
}
