//! Detail page fetch with browser-like headers.

use reqwest::{header, Client};

use super::ScraperConfig;
use crate::error::PlaceError;
use crate::types::{RawDocument, ResolvedUrl};

const HTML_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

pub(super) async fn fetch_document(
    client: &Client,
    url: &ResolvedUrl,
    config: &ScraperConfig,
) -> Result<RawDocument, PlaceError> {
    let response = client
        .get(url.as_str())
        .header(header::ACCEPT, HTML_ACCEPT)
        .header(header::ACCEPT_LANGUAGE, &config.accept_language)
        .header(header::REFERER, &config.referer)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(url = url.as_str(), status = status.as_u16(), "detail page fetch failed");
        return Err(PlaceError::Fetch {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.text().await?;
    tracing::debug!(url = url.as_str(), body_len = body.len(), "fetched detail page");

    Ok(RawDocument {
        url: url.to_string(),
        status: status.as_u16(),
        body,
    })
}
