//! Converts graph nodes into [`BusinessRecord`] and [`ReviewRecord`] values.

use serde_json::{Map, Value};

use super::graph::{reference_key, strip_references, EmbeddedGraph, GraphNode};
use super::reviews::is_valid_review_content;
use crate::types::{BusinessRecord, ExtractionSource, ReviewRecord};

/// Review-typed nodes inspected per page when no override is configured.
pub const DEFAULT_MAX_REVIEW_CANDIDATES: usize = 5;

const CONTENT_FIELDS: [&str; 4] = ["body", "text", "content", "contents"];
const DATE_FIELDS: [&str; 3] = ["visited", "created", "date"];
const LIKE_COUNT_FIELDS: [&str; 3] = ["likeCount", "reactionCount", "votedKeywordsCount"];

/// Find the business-detail node and up to `max_review_candidates` review
/// candidates in one pass.
///
/// The cap bounds how many review nodes are *inspected*, not how many are
/// accepted. When no business node exists the result is `(None, [])`.
#[must_use]
pub fn normalize_graph(
    graph: &EmbeddedGraph,
    max_review_candidates: usize,
) -> (Option<BusinessRecord>, Vec<ReviewRecord>) {
    let mut business: Option<BusinessRecord> = None;
    let mut reviews = Vec::new();
    let mut inspected = 0usize;
    let mut skipped = 0usize;

    for (key, node) in graph.nodes() {
        match node {
            GraphNode::BusinessDetail(fields) => {
                if business.is_some() {
                    tracing::debug!(key, "ignoring additional business-detail node");
                    continue;
                }
                business = Some(business_from_node(graph, key, fields));
            }
            GraphNode::VisitorReview(fields) => {
                if inspected >= max_review_candidates {
                    skipped += 1;
                    continue;
                }
                inspected += 1;
                match review_from_node(fields) {
                    Some(review) => reviews.push(review),
                    None => tracing::debug!(key, "dropping review without usable text"),
                }
            }
            GraphNode::Other => {}
        }
    }

    let Some(business) = business else {
        tracing::warn!(
            nodes = graph.len(),
            review_candidates = inspected,
            "embedded graph has no business-detail node"
        );
        return (None, Vec::new());
    };

    tracing::debug!(
        inspected,
        accepted = reviews.len(),
        skipped,
        "normalized embedded graph"
    );
    (Some(business), reviews)
}

fn business_from_node(graph: &EmbeddedGraph, key: &str, fields: &Map<String, Value>) -> BusinessRecord {
    log_unresolved_references(graph, key, fields);

    BusinessRecord {
        site_id: text_field(fields, &["id"]),
        category: text_field(fields, &["category"]),
        road_address: text_field(fields, &["roadAddress"]),
        address: text_field(fields, &["address"]),
        title: text_field(fields, &["name", "displayName"]),
        phone: text_field(fields, &["phone"]),
        virtual_phone: text_field(fields, &["virtualPhone"]),
        description: text_field(fields, &["description"]),
        reviews: Vec::new(),
        source: ExtractionSource::EmbeddedGraph,
    }
}

/// Build a review if the node carries valid text content.
fn review_from_node(fields: &Map<String, Value>) -> Option<ReviewRecord> {
    let content = CONTENT_FIELDS
        .iter()
        .find_map(|name| fields.get(*name)?.as_str().map(str::trim).filter(|s| !s.is_empty()))?;
    if !is_valid_review_content(content) {
        return None;
    }

    Some(ReviewRecord {
        id: text_field(fields, &["id"]),
        content: content.to_owned(),
        author: review_author(fields),
        rating: fields.get("rating").and_then(number_field),
        date: text_field(fields, &DATE_FIELDS),
        images: review_images(fields),
        has_owner_reply: owner_reply(fields),
        like_count: LIKE_COUNT_FIELDS
            .iter()
            .find_map(|name| fields.get(*name).and_then(count_field)),
    })
}

fn review_author(fields: &Map<String, Value>) -> Option<String> {
    let nested = fields
        .get("author")
        .and_then(strip_references)
        .and_then(|author| match author {
            Value::String(s) => non_empty(&s),
            Value::Object(map) => text_field(&map, &["nickname", "name"]),
            _ => None,
        });
    nested.or_else(|| text_field(fields, &["authorName", "nickname"]))
}

fn review_images(fields: &Map<String, Value>) -> Vec<String> {
    let mut images = Vec::new();
    for name in ["media", "images"] {
        let Some(Value::Array(items)) = fields.get(name).and_then(strip_references) else {
            continue;
        };
        images.extend(items.iter().filter_map(|item| match item {
            Value::String(s) => non_empty(s),
            Value::Object(map) => text_field(map, &["thumbnail", "url"]),
            _ => None,
        }));
    }
    if images.is_empty() {
        if let Some(thumbnail) = text_field(fields, &["thumbnail"]) {
            images.push(thumbnail);
        }
    }
    images
}

fn owner_reply(fields: &Map<String, Value>) -> Option<bool> {
    if let Some(reply) = fields.get("reply") {
        let has_body = strip_references(reply)
            .and_then(|r| r.get("body").and_then(Value::as_str).map(str::to_owned))
            .is_some_and(|body| !body.trim().is_empty());
        return Some(has_body);
    }
    fields.get("hasReply").and_then(Value::as_bool)
}

/// First of `names` holding a non-empty string or a number. Reference
/// markers and other structured values count as absent.
fn text_field(fields: &Map<String, Value>, names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| match fields.get(*name)? {
        Value::String(s) => non_empty(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn number_field(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse::<f64>().ok()))
}

fn count_field(value: &Value) -> Option<u64> {
    value
        .as_u64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse::<u64>().ok()))
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn log_unresolved_references(graph: &EmbeddedGraph, key: &str, fields: &Map<String, Value>) {
    for (field, value) in fields {
        if let Some(target) = reference_key(value) {
            tracing::debug!(
                node = key,
                field = field.as_str(),
                target,
                target_present = graph.get(target).is_some(),
                "leaving graph reference unresolved"
            );
        }
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
