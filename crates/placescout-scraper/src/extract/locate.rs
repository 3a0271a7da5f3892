//! Embedded client-state locator.
//!
//! Tries known embedding conventions in priority order (Apollo cache
//! assignment, alternate state variables, Next.js data script) and returns
//! the first one that both matches and parses.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use super::graph::EmbeddedGraph;

static APOLLO_STATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"window\.__APOLLO_STATE__\s*=\s*").expect("valid regex")
});
static PLACE_STATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"window\.__PLACE_STATE__\s*=\s*").expect("valid regex")
});
static INITIAL_STATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"window\.__INITIAL_STATE__\s*=\s*").expect("valid regex")
});
static NEXT_DATA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<script[^>]*\bid\s*=\s*["']__NEXT_DATA__["'][^>]*>(.*?)</script>"#)
        .expect("valid regex")
});

/// One embedding convention: how to cut the blob out of the markup and how
/// to pick the node map out of the parsed blob.
struct EmbedPattern {
    name: &'static str,
    capture: fn(&str) -> Option<&str>,
    select: fn(Value) -> Option<Map<String, Value>>,
}

const EMBED_PATTERNS: [EmbedPattern; 4] = [
    EmbedPattern {
        name: "apollo_state",
        capture: capture_apollo_state,
        select: node_map,
    },
    EmbedPattern {
        name: "place_state",
        capture: capture_place_state,
        select: node_map,
    },
    EmbedPattern {
        name: "initial_state",
        capture: capture_initial_state,
        select: node_map,
    },
    EmbedPattern {
        name: "next_data",
        capture: capture_next_data,
        select: next_data_node_map,
    },
];

/// Locate and parse the embedded graph in `html`.
///
/// Returns `None` when no pattern both matches and parses; that is an
/// expected outcome and callers fall back to markup extraction.
#[must_use]
pub fn locate_graph(html: &str) -> Option<EmbeddedGraph> {
    EMBED_PATTERNS
        .iter()
        .find_map(|pattern| try_pattern(pattern, html))
}

fn try_pattern(pattern: &EmbedPattern, html: &str) -> Option<EmbeddedGraph> {
    let raw = (pattern.capture)(html)?;

    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(
                pattern = pattern.name,
                error = %err,
                captured_len = raw.len(),
                "embedded state matched but failed to parse; trying next pattern"
            );
            return None;
        }
    };

    let Some(nodes) = (pattern.select)(value) else {
        tracing::warn!(
            pattern = pattern.name,
            "embedded state parsed but holds no node map; trying next pattern"
        );
        return None;
    };

    tracing::debug!(
        pattern = pattern.name,
        nodes = nodes.len(),
        "located embedded graph"
    );
    Some(EmbeddedGraph::new(nodes))
}

fn capture_apollo_state(html: &str) -> Option<&str> {
    capture_assignment(html, &APOLLO_STATE_RE)
}

fn capture_place_state(html: &str) -> Option<&str> {
    capture_assignment(html, &PLACE_STATE_RE)
}

fn capture_initial_state(html: &str) -> Option<&str> {
    capture_assignment(html, &INITIAL_STATE_RE)
}

fn capture_next_data(html: &str) -> Option<&str> {
    NEXT_DATA_RE
        .captures(html)?
        .get(1)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
}

/// Object literal assigned right after the first match of `assignment`.
fn capture_assignment<'a>(html: &'a str, assignment: &Regex) -> Option<&'a str> {
    let m = assignment.find(html)?;
    extract_balanced_object(&html[m.end()..])
}

fn node_map(value: Value) -> Option<Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

fn next_data_node_map(mut value: Value) -> Option<Map<String, Value>> {
    [
        "/props/pageProps/initialApolloState",
        "/props/pageProps/__APOLLO_STATE__",
    ]
    .iter()
    .find_map(|pointer| {
        value
            .pointer_mut(pointer)
            .filter(|v| v.is_object())
            .map(Value::take)
    })
    .and_then(node_map)
}

/// Try to extract a balanced JSON object from the start of `s`.
///
/// Tracks brace depth while respecting string literals and escape sequences,
/// so a `};` inside a string value does not end the object early. Only `}`
/// at depth 0 ends the scan; an unterminated or mismatched object yields
/// `None`.
pub(super) fn extract_balanced_object(s: &str) -> Option<&str> {
    if !s.starts_with('{') {
        return None;
    }
    let mut depth: i32 = 0;
    let mut in_string = false;
    let mut escape = false;
    for (i, c) in s.char_indices() {
        if escape {
            escape = false;
            continue;
        }
        if in_string {
            match c {
                '\\' => escape = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '[' | '{' => depth += 1,
            ']' => depth -= 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&s[..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
#[path = "locate_test.rs"]
mod tests;
