mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "placescout")]
#[command(about = "Scrape business details and visitor reviews from Naver Place pages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve, fetch, and extract one place, printing the result envelope
    Scrape {
        /// Short link, map listing, or mobile detail URL
        url: String,
        /// Review candidates inspected per page (defaults to config)
        #[arg(long, value_parser = parse_positive)]
        max_reviews: Option<usize>,
        /// Print single-line JSON instead of pretty JSON
        #[arg(long)]
        compact: bool,
    },
    /// Print the detail-page URL an input URL resolves to
    Resolve {
        url: String,
    },
    /// Run the offline extraction stages over a saved detail page
    Extract {
        /// Path to an HTML file
        file: PathBuf,
        /// Review candidates inspected per page (defaults to config)
        #[arg(long, value_parser = parse_positive)]
        max_reviews: Option<usize>,
        #[arg(long)]
        compact: bool,
    },
}

fn parse_positive(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = placescout_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    // stdout carries the JSON result.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scrape {
            url,
            max_reviews,
            compact,
        } => commands::run_scrape(&config, &url, max_reviews, compact).await,
        Commands::Resolve { url } => commands::run_resolve(&config, &url).await,
        Commands::Extract {
            file,
            max_reviews,
            compact,
        } => commands::run_extract(&config, &file, max_reviews, compact),
    }
}
