//! HTTP client driving the full pipeline: resolve, fetch, extract.

mod fetch;
mod resolve;

use std::time::Duration;

use reqwest::{redirect, Client};

use placescout_core::{AppConfig, DEFAULT_USER_AGENT};

use crate::envelope::PlaceEnvelope;
use crate::error::PlaceError;
use crate::extract::{extract_record, DEFAULT_MAX_REVIEW_CANDIDATES};
use crate::site::{classify_url, detail_url_from_listing, SiteProfile, UrlKind};
use crate::types::{BusinessRecord, RawDocument, ResolvedUrl};

/// Tunables for [`PlaceScraper`].
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Whole-request timeout applied to both network calls.
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: String,
    pub accept_language: String,
    pub referer: String,
    /// Review-typed graph nodes inspected per page.
    pub max_review_candidates: usize,
    pub profile: SiteProfile,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            connect_timeout_secs: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: "ko-KR,ko;q=0.9,en;q=0.8".to_string(),
            referer: "https://m.naver.com/".to_string(),
            max_review_candidates: DEFAULT_MAX_REVIEW_CANDIDATES,
            profile: SiteProfile::naver(),
        }
    }
}

impl ScraperConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            timeout_secs: config.scraper_timeout_secs,
            user_agent: config.scraper_user_agent.clone(),
            max_review_candidates: config.max_review_candidates,
            ..Self::default()
        }
    }
}

/// Scrapes one place per call. Cheap to share behind an `Arc`; concurrent
/// calls share only the connection pool.
pub struct PlaceScraper {
    /// Redirects disabled so a short link's `Location` can be read.
    redirect_client: Client,
    page_client: Client,
    config: ScraperConfig,
}

impl PlaceScraper {
    /// # Errors
    ///
    /// Returns [`PlaceError::Network`] if a `reqwest::Client` cannot be built.
    pub fn new(config: ScraperConfig) -> Result<Self, PlaceError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let connect_timeout = Duration::from_secs(config.connect_timeout_secs);

        let redirect_client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .user_agent(&config.user_agent)
            .redirect(redirect::Policy::none())
            .build()?;
        let page_client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            redirect_client,
            page_client,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Normalize `url` into a fetchable detail-page URL.
    ///
    /// Detail URLs pass through unchanged, listing URLs are rewritten from
    /// their place ID, and short links are followed for exactly one hop.
    ///
    /// # Errors
    ///
    /// - [`PlaceError::InvalidUrl`] for URLs outside the site's host families
    ///   or listing URLs without a place ID.
    /// - [`PlaceError::RedirectResolution`] when a short link yields no usable
    ///   `Location`.
    /// - [`PlaceError::Network`] if the short-link request fails.
    pub async fn resolve(&self, url: &str) -> Result<ResolvedUrl, PlaceError> {
        let url = url.trim();
        let profile = &self.config.profile;
        match classify_url(url, profile)? {
            UrlKind::Detail => Ok(ResolvedUrl::new(url)),
            UrlKind::Listing => detail_url_from_listing(url, profile),
            UrlKind::ShortLink => {
                resolve::follow_short_link(&self.redirect_client, url, profile).await
            }
        }
    }

    /// Fetch the detail page markup.
    ///
    /// # Errors
    ///
    /// - [`PlaceError::Fetch`] on a non-2xx response.
    /// - [`PlaceError::Network`] on transport failure or timeout.
    pub async fn fetch(&self, url: &ResolvedUrl) -> Result<RawDocument, PlaceError> {
        fetch::fetch_document(&self.page_client, url, &self.config).await
    }

    /// Run the whole pipeline for one input URL.
    ///
    /// No stage is retried; the first network failure ends the run.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::resolve`] and [`Self::fetch`] errors, and returns
    /// [`PlaceError::NoRecord`] when no extraction strategy succeeds.
    pub async fn scrape(&self, url: &str) -> Result<BusinessRecord, PlaceError> {
        let resolved = self.resolve(url).await?;
        tracing::debug!(url, resolved = %resolved, "resolved place URL");

        let document = self.fetch(&resolved).await?;
        let record = extract_record(&document, self.config.max_review_candidates)?;

        tracing::info!(
            url,
            source = ?record.source,
            site_id = record.site_id.as_deref().unwrap_or(""),
            reviews = record.reviews.len(),
            "scraped place"
        );
        Ok(record)
    }

    /// [`Self::scrape`] wrapped in the caller-facing envelope.
    pub async fn scrape_envelope(&self, url: &str) -> PlaceEnvelope {
        let result = self.scrape(url).await;
        if let Err(err) = &result {
            tracing::error!(url, kind = err.kind(), error = %err, "place scrape failed");
        }
        PlaceEnvelope::from_result(url, result)
    }
}
