//! Offline extraction stages: graph locator, normalizer, markup fallback,
//! and review validation.
//!
//! Strategies run in reliability order (embedded graph, then markup) and the
//! first one producing a business record wins.

mod graph;
mod locate;
mod markup;
mod normalize;
mod reviews;

pub use graph::{EmbeddedGraph, GraphNode};
pub use locate::locate_graph;
pub use markup::extract_from_markup;
pub use normalize::{normalize_graph, DEFAULT_MAX_REVIEW_CANDIDATES};
pub use reviews::{dedupe_reviews, is_valid_review_content};

use crate::error::PlaceError;
use crate::types::{BusinessRecord, RawDocument};

/// Extract a business record from an already fetched document.
///
/// # Errors
///
/// Returns [`PlaceError::NoRecord`] when neither the embedded graph nor the
/// markup fallback yields a record.
pub fn extract_record(
    document: &RawDocument,
    max_review_candidates: usize,
) -> Result<BusinessRecord, PlaceError> {
    match extract_from_graph(document, max_review_candidates) {
        Ok(record) => return Ok(record),
        Err(err @ PlaceError::NoEmbeddedData { .. }) => {
            tracing::debug!(error = %err, "falling back to markup extraction");
        }
        Err(err) => {
            tracing::warn!(
                url = document.url.as_str(),
                error = %err,
                "embedded graph unusable; falling back to markup extraction"
            );
        }
    }

    if let Some(record) = extract_from_markup(&document.body) {
        tracing::debug!(url = document.url.as_str(), "extracted place record from markup");
        return Ok(record);
    }

    tracing::warn!(
        url = document.url.as_str(),
        status = document.status,
        body_len = document.body.len(),
        "no extraction strategy produced a place record; markup format may have changed"
    );
    Err(PlaceError::NoRecord {
        url: document.url.clone(),
    })
}

fn extract_from_graph(
    document: &RawDocument,
    max_review_candidates: usize,
) -> Result<BusinessRecord, PlaceError> {
    let graph = locate_graph(&document.body).ok_or_else(|| PlaceError::NoEmbeddedData {
        url: document.url.clone(),
    })?;

    let (business, reviews) = normalize_graph(&graph, max_review_candidates);
    let mut business = business.ok_or_else(|| PlaceError::NoRecord {
        url: document.url.clone(),
    })?;
    business.reviews = dedupe_reviews(reviews);
    Ok(business)
}
