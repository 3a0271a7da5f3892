//! Naver Place scraping pipeline.
//!
//! Resolves a short, listing, or detail URL to the mobile detail page, fetches
//! it, and extracts a [`BusinessRecord`] from the embedded client-state graph,
//! falling back to markup scraping when the graph is missing or unusable.

pub mod client;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod site;
pub mod types;

pub use client::{PlaceScraper, ScraperConfig};
pub use envelope::{PlaceEnvelope, PlaceFailure, PlaceSuccess};
pub use error::PlaceError;
pub use extract::{
    dedupe_reviews, extract_from_markup, extract_record, is_valid_review_content, locate_graph,
    normalize_graph, EmbeddedGraph, GraphNode, DEFAULT_MAX_REVIEW_CANDIDATES,
};
pub use site::{build_detail_url, classify_url, extract_place_id, SiteProfile, UrlKind};
pub use types::{BusinessRecord, ExtractionSource, RawDocument, ResolvedUrl, ReviewRecord};
