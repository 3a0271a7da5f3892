//! Domain types flowing through the scraping pipeline.

use serde::{Deserialize, Serialize};

/// A detail-page URL ready to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUrl(String);

impl ResolvedUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ResolvedUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fetched page markup. Never mutated after the fetch stage.
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// The URL the markup was requested from.
    pub url: String,
    pub status: u16,
    pub body: String,
}

/// Which extraction strategy produced a [`BusinessRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionSource {
    EmbeddedGraph,
    Markup,
}

/// The business extracted from one detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRecord {
    /// Naver place identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub road_address: Option<String>,
    /// Lot-number (jibun) form of the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Secondary forwarding number (Naver "smart call"). Always opaque text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviews: Vec<ReviewRecord>,
    pub source: ExtractionSource,
}

/// One visitor review attached to a [`BusinessRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Visit or creation date exactly as the site renders it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_owner_reply: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub like_count: Option<u64>,
}

impl ReviewRecord {
    /// A review with only the required content set.
    pub fn new(id: Option<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            author: None,
            rating: None,
            date: None,
            images: Vec::new(),
            has_owner_reply: None,
            like_count: None,
        }
    }
}
