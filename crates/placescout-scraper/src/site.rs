//! URL families of the target site and the detail-page URL template.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::Url;

use crate::error::PlaceError;
use crate::types::ResolvedUrl;

static PLACE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"place/(\d+)").expect("valid regex"));
static RESTAURANT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"restaurant/(\d+)").expect("valid regex"));

/// Host families and detail-page base for one directory site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteProfile {
    /// Hosts serving already-canonical mobile detail pages.
    pub detail_hosts: Vec<String>,
    /// Hosts serving map/listing pages that carry a place ID in the path.
    pub listing_hosts: Vec<String>,
    /// Hosts issuing a single redirect to a listing or detail page.
    pub short_link_hosts: Vec<String>,
    /// Scheme and host the detail URL template is built on.
    pub detail_base_url: String,
}

impl SiteProfile {
    #[must_use]
    pub fn naver() -> Self {
        Self {
            detail_hosts: vec!["m.place.naver.com".to_string()],
            listing_hosts: vec!["map.naver.com".to_string()],
            short_link_hosts: vec!["naver.me".to_string()],
            detail_base_url: "https://m.place.naver.com".to_string(),
        }
    }

    pub(crate) fn is_detail_host(&self, host: &str) -> bool {
        host_in_family(host, &self.detail_hosts)
    }
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self::naver()
    }
}

/// Classification of an input URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlKind {
    Detail,
    Listing,
    ShortLink,
}

/// Classify `url` into one of the profile's URL families.
///
/// # Errors
///
/// Returns [`PlaceError::InvalidUrl`] if the URL does not parse, is not
/// HTTP(S), or its host belongs to none of the families.
pub fn classify_url(url: &str, profile: &SiteProfile) -> Result<UrlKind, PlaceError> {
    let invalid = |reason: String| PlaceError::InvalidUrl {
        url: url.to_owned(),
        reason,
    };

    let parsed = Url::parse(url.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme \"{}\"", parsed.scheme())));
    }
    let host = parsed
        .host_str()
        .ok_or_else(|| invalid("URL has no host".to_string()))?;

    if host_in_family(host, &profile.detail_hosts) {
        Ok(UrlKind::Detail)
    } else if host_in_family(host, &profile.listing_hosts) {
        Ok(UrlKind::Listing)
    } else if host_in_family(host, &profile.short_link_hosts) {
        Ok(UrlKind::ShortLink)
    } else {
        Err(invalid(format!("host \"{host}\" is not a recognized place host")))
    }
}

/// Extract the numeric place ID from a `place/<digits>` or
/// `restaurant/<digits>` path segment.
#[must_use]
pub fn extract_place_id(url: &str) -> Option<String> {
    PLACE_ID_RE
        .captures(url)
        .or_else(|| RESTAURANT_ID_RE.captures(url))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_owned())
}

/// Build the mobile visitor-review detail URL for `place_id`.
#[must_use]
pub fn build_detail_url(place_id: &str, profile: &SiteProfile) -> ResolvedUrl {
    let base = profile.detail_base_url.trim_end_matches('/');
    ResolvedUrl::new(format!("{base}/place/{place_id}/review/visitor?entry=ple"))
}

/// Turn a listing URL into a detail URL without touching the network.
pub(crate) fn detail_url_from_listing(
    url: &str,
    profile: &SiteProfile,
) -> Result<ResolvedUrl, PlaceError> {
    let place_id = extract_place_id(url).ok_or_else(|| PlaceError::InvalidUrl {
        url: url.to_owned(),
        reason: "no place ID in listing URL path".to_string(),
    })?;
    Ok(build_detail_url(&place_id, profile))
}

/// Exact host or any subdomain of a family member.
fn host_in_family(host: &str, family: &[String]) -> bool {
    let host = host.to_ascii_lowercase();
    family.iter().any(|member| {
        let member = member.to_ascii_lowercase();
        host == member
            || host
                .strip_suffix(member.as_str())
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}

#[cfg(test)]
#[path = "site_test.rs"]
mod tests;
