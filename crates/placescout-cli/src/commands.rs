//! Command handlers. Each prints its result to stdout and returns an error
//! when the run should exit non-zero.

use std::path::Path;

use anyhow::Context;
use placescout_core::AppConfig;
use placescout_scraper::{extract_record, PlaceEnvelope, PlaceScraper, RawDocument, ScraperConfig};

fn scraper_config(config: &AppConfig, max_reviews: Option<usize>) -> ScraperConfig {
    let mut scraper_config = ScraperConfig::from_app_config(config);
    if let Some(max) = max_reviews {
        scraper_config.max_review_candidates = max;
    }
    scraper_config
}

pub(crate) fn render_envelope(envelope: &PlaceEnvelope, compact: bool) -> anyhow::Result<String> {
    let rendered = if compact {
        serde_json::to_string(envelope)
    } else {
        serde_json::to_string_pretty(envelope)
    };
    rendered.context("failed to serialize result envelope")
}

fn print_envelope(envelope: &PlaceEnvelope, compact: bool) -> anyhow::Result<()> {
    println!("{}", render_envelope(envelope, compact)?);
    if envelope.is_success() {
        Ok(())
    } else {
        anyhow::bail!("no place record produced")
    }
}

pub(crate) async fn run_scrape(
    config: &AppConfig,
    url: &str,
    max_reviews: Option<usize>,
    compact: bool,
) -> anyhow::Result<()> {
    let scraper = PlaceScraper::new(scraper_config(config, max_reviews))
        .context("failed to build HTTP client")?;
    let envelope = scraper.scrape_envelope(url).await;
    print_envelope(&envelope, compact)
}

pub(crate) async fn run_resolve(config: &AppConfig, url: &str) -> anyhow::Result<()> {
    let scraper = PlaceScraper::new(scraper_config(config, None))
        .context("failed to build HTTP client")?;
    let resolved = scraper
        .resolve(url)
        .await
        .with_context(|| format!("failed to resolve {url}"))?;
    println!("{resolved}");
    Ok(())
}

/// Run extraction over HTML already in memory, labelling the result with
/// `source_label`.
pub(crate) fn extract_document(
    source_label: &str,
    html: String,
    max_review_candidates: usize,
) -> PlaceEnvelope {
    let document = RawDocument {
        url: source_label.to_owned(),
        status: 200,
        body: html,
    };
    PlaceEnvelope::from_result(
        source_label,
        extract_record(&document, max_review_candidates),
    )
}

pub(crate) fn run_extract(
    config: &AppConfig,
    file: &Path,
    max_reviews: Option<usize>,
    compact: bool,
) -> anyhow::Result<()> {
    let html = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    tracing::debug!(file = %file.display(), bytes = html.len(), "loaded saved page");

    let max = max_reviews.unwrap_or(config.max_review_candidates);
    let envelope = extract_document(&file.display().to_string(), html, max);
    print_envelope(&envelope, compact)
}
