//! Review content validation and identifier-based deduplication.

use std::collections::HashSet;

use crate::types::ReviewRecord;

/// `true` iff the trimmed content is non-empty and has at least one ASCII
/// letter or digit or a Hangul character. Emoji-only and whitespace-only
/// reviews fail, including enclosed letters such as 🅿️ and ①.
#[must_use]
pub fn is_valid_review_content(content: &str) -> bool {
    let trimmed = content.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .any(|c| c.is_ascii_alphanumeric() || is_hangul(c))
}

fn is_hangul(c: char) -> bool {
    matches!(
        c,
        '\u{1100}'..='\u{11FF}' | '\u{3130}'..='\u{318F}' | '\u{AC00}'..='\u{D7A3}'
    )
}

/// Keep the first review for each identifier, preserving order.
///
/// Reviews without an identifier are always kept.
#[must_use]
pub fn dedupe_reviews(reviews: Vec<ReviewRecord>) -> Vec<ReviewRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    reviews
        .into_iter()
        .filter(|review| match &review.id {
            Some(id) => seen.insert(id.clone()),
            None => true,
        })
        .collect()
}
