//! CLI command definitions and handlers

mod extract;
mod score;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Readiness - content-readiness scoring for product and category pages
#[derive(Parser, Debug)]
#[command(name = "readiness")]
#[command(
    version,
    about = "Score saved HTML pages for content readiness across five weighted pillars",
    after_help = "\
Examples:
  readiness score page.html                          Score one page
  readiness score a.html b.html --format json        Score several pages as JSON
  readiness score page.html --url https://shop.example.com/p/widget
  readiness score page.html --external signals.json  Use off-site review counts
  readiness extract page.html                        Dump extracted signals"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract signals and score one or more HTML files
    Score {
        /// HTML files to score (scored in parallel)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Origin URL of the page(s), used for link and HTTPS checks
        #[arg(long)]
        url: Option<String>,

        /// JSON file with external trust-signal counts
        #[arg(long)]
        external: Option<PathBuf>,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json", "markdown", "md"])]
        format: String,

        /// Scoring config file (.toml or .json); defaults to readiness.toml in the working directory
        #[arg(long, env = "READINESS_CONFIG")]
        config: Option<PathBuf>,

        /// Append a full scoring breakdown (text/markdown only)
        #[arg(long)]
        explain: bool,
    },

    /// Print the extracted content signals of an HTML file as JSON
    Extract {
        /// HTML file to read
        file: PathBuf,

        /// Origin URL of the page
        #[arg(long)]
        url: Option<String>,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Score {
            files,
            url,
            external,
            format,
            config,
            explain,
        } => score::run(
            &files,
            url.as_deref(),
            external.as_deref(),
            &format,
            config.as_deref(),
            explain,
        ),
        Commands::Extract { file, url } => extract::run(&file, url.as_deref()),
    }
}
