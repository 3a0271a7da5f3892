//! Single-hop short-link resolution.

use reqwest::{header, Client, Url};

use crate::error::PlaceError;
use crate::site::{build_detail_url, extract_place_id, SiteProfile};
use crate::types::ResolvedUrl;

/// `HEAD` the short link without following redirects and turn its
/// `Location` into a detail URL. A `Location` that redirects again is not
/// chased.
pub(super) async fn follow_short_link(
    client: &Client,
    url: &str,
    profile: &SiteProfile,
) -> Result<ResolvedUrl, PlaceError> {
    let fail = |reason: String| PlaceError::RedirectResolution {
        url: url.to_owned(),
        reason,
    };

    let response = client.head(url).send().await?;
    let status = response.status();

    let Some(location) = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
    else {
        tracing::warn!(url, status = status.as_u16(), "short link returned no Location header");
        return Err(fail(format!("no Location header in HTTP {status} response")));
    };

    // Relative locations resolve against the short link itself.
    let target = Url::parse(url)
        .and_then(|base| base.join(location))
        .map_err(|e| fail(format!("unusable Location \"{location}\": {e}")))?;

    tracing::debug!(url, location = target.as_str(), "short link redirect target");

    if target.host_str().is_some_and(|host| profile.is_detail_host(host)) {
        return Ok(ResolvedUrl::new(target.as_str()));
    }

    let place_id = extract_place_id(target.as_str())
        .ok_or_else(|| fail(format!("redirect target {target} carries no place ID")))?;
    Ok(build_detail_url(&place_id, profile))
}
