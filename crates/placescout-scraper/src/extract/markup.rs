//! Fallback extraction straight from page markup.
//!
//! Each field has an ordered list of independent attempts; the first one
//! returning a non-empty value wins.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{BusinessRecord, ExtractionSource};

type Attempt = fn(&str) -> Option<String>;

/// Longest trailing segment treated as site branding in a page title.
const MAX_BRANDING_SUFFIX_CHARS: usize = 30;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<[^>]+>").expect("valid regex"));
static META_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<meta\b[^>]*>").expect("valid regex"));
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("valid regex"));
static H1_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").expect("valid regex"));
static LABELED_ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:도로명\s*주소|주소|address)\s*[:：]\s*([^<>\n"]{4,120})"#)
        .expect("valid regex")
});
static LABEL_ELEMENT_ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)>\s*주소\s*</[^>]+>\s*(?:<[^>/]+>\s*)*([^<>\n]{4,120})<").expect("valid regex")
});
static ADDRESS_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(?:data-)?(?:road-)?address\s*=\s*"([^"]+)""#).expect("valid regex")
});
static ADDRESS_LITERAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""(?:roadAddress|address)"\s*:\s*"((?:[^"\\]|\\.)*)""#).expect("valid regex")
});
static LABELED_PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:전화번호|전화|tel|phone)\s*[:：]\s*(\+?[0-9][0-9\-\s().]{5,20}[0-9])")
        .expect("valid regex")
});
static TEL_HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)href\s*=\s*["']tel:([^"']+)["']"#).expect("valid regex")
});
static PHONE_LITERAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""phone"\s*:\s*"((?:[^"\\]|\\.)*)""#).expect("valid regex")
});
static BARE_PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(0\d{1,3}-\d{3,4}-\d{4})\b").expect("valid regex")
});
static RESTAURANT_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/restaurant/(\d+)").expect("valid regex"));
static PLACE_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/place/(\d+)").expect("valid regex"));

const TITLE_ATTEMPTS: [Attempt; 3] = [title_tag, primary_heading, og_title];
const DESCRIPTION_ATTEMPTS: [Attempt; 2] = [meta_description, og_description];
const ADDRESS_ATTEMPTS: [Attempt; 4] = [
    labeled_address,
    label_element_address,
    address_attribute,
    address_literal,
];
const PHONE_ATTEMPTS: [Attempt; 4] = [labeled_phone, tel_link, phone_literal, bare_phone];
const SITE_ID_ATTEMPTS: [Attempt; 2] = [restaurant_path_id, place_path_id];

/// Scrape a record from markup alone.
///
/// Returns `None` unless at least a title or a place ID was recovered.
#[must_use]
pub fn extract_from_markup(html: &str) -> Option<BusinessRecord> {
    let title = first_match(html, &TITLE_ATTEMPTS).map(|t| strip_branding_suffix(&t));
    let site_id = first_match(html, &SITE_ID_ATTEMPTS);

    if title.is_none() && site_id.is_none() {
        tracing::debug!(html_len = html.len(), "markup has neither title nor place ID");
        return None;
    }

    Some(BusinessRecord {
        site_id,
        category: None,
        road_address: first_match(html, &ADDRESS_ATTEMPTS),
        address: None,
        title,
        phone: first_match(html, &PHONE_ATTEMPTS),
        virtual_phone: None,
        description: first_match(html, &DESCRIPTION_ATTEMPTS),
        reviews: Vec::new(),
        source: ExtractionSource::Markup,
    })
}

fn first_match(html: &str, attempts: &[Attempt]) -> Option<String> {
    attempts.iter().find_map(|attempt| attempt(html))
}

// ---------------------------------------------------------------------------
// Title and description
// ---------------------------------------------------------------------------

fn title_tag(html: &str) -> Option<String> {
    capture_text(&TITLE_RE, html)
}

fn primary_heading(html: &str) -> Option<String> {
    capture_text(&H1_RE, html)
}

fn og_title(html: &str) -> Option<String> {
    find_meta_content(html, "property", "og:title")
}

fn meta_description(html: &str) -> Option<String> {
    find_meta_content(html, "name", "description")
}

fn og_description(html: &str) -> Option<String> {
    find_meta_content(html, "property", "og:description")
}

/// Tails the directory appends to every page title, compared case-insensitively.
const SITE_BRAND_TAILS: [&str; 6] = [
    "네이버 플레이스",
    "네이버 지도",
    "네이버",
    "naver place",
    "naver map",
    "naver",
];

const TITLE_SEPARATORS: [&str; 3] = [" - ", " | ", " : "];

/// Drop a trailing `" - Site"`, `" | Site"` or `" : Site"` segment.
///
/// Known site-brand tails are stripped first. Any other short tail is
/// treated as branding unless it names a branch (`강남점`, `본점`).
fn strip_branding_suffix(title: &str) -> String {
    let split = |separator: &str| {
        title
            .rsplit_once(separator)
            .map(|(head, tail)| (head.trim(), tail.trim()))
            .filter(|(head, _)| !head.is_empty())
    };

    for separator in TITLE_SEPARATORS {
        if let Some((head, tail)) = split(separator) {
            if is_site_brand(tail) {
                return head.to_owned();
            }
        }
    }
    for separator in TITLE_SEPARATORS {
        if let Some((head, tail)) = split(separator) {
            if tail.chars().count() <= MAX_BRANDING_SUFFIX_CHARS && !is_branch_name(tail) {
                return head.to_owned();
            }
        }
    }
    title.to_owned()
}

fn is_site_brand(tail: &str) -> bool {
    let tail = tail.to_lowercase();
    SITE_BRAND_TAILS.iter().any(|brand| tail == *brand)
}

fn is_branch_name(tail: &str) -> bool {
    tail.ends_with('점')
}

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

fn labeled_address(html: &str) -> Option<String> {
    capture_text(&LABELED_ADDRESS_RE, html)
}

fn label_element_address(html: &str) -> Option<String> {
    capture_text(&LABEL_ELEMENT_ADDRESS_RE, html)
}

fn address_attribute(html: &str) -> Option<String> {
    capture_text(&ADDRESS_ATTR_RE, html)
}

fn address_literal(html: &str) -> Option<String> {
    capture_json_string(&ADDRESS_LITERAL_RE, html)
}

// ---------------------------------------------------------------------------
// Phone
// ---------------------------------------------------------------------------

fn labeled_phone(html: &str) -> Option<String> {
    capture_text(&LABELED_PHONE_RE, html)
}

fn tel_link(html: &str) -> Option<String> {
    capture_text(&TEL_HREF_RE, html)
}

fn phone_literal(html: &str) -> Option<String> {
    capture_json_string(&PHONE_LITERAL_RE, html)
}

fn bare_phone(html: &str) -> Option<String> {
    capture_text(&BARE_PHONE_RE, html)
}

// ---------------------------------------------------------------------------
// Place ID
// ---------------------------------------------------------------------------

fn restaurant_path_id(html: &str) -> Option<String> {
    capture_text(&RESTAURANT_PATH_RE, html)
}

fn place_path_id(html: &str) -> Option<String> {
    capture_text(&PLACE_PATH_RE, html)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn capture_text(re: &Regex, html: &str) -> Option<String> {
    re.captures_iter(html)
        .filter_map(|cap| cap.get(1))
        .find_map(|m| non_empty(clean_text(m.as_str())))
}

/// Capture a JSON string literal body and unescape it.
fn capture_json_string(re: &Regex, html: &str) -> Option<String> {
    re.captures_iter(html)
        .filter_map(|cap| cap.get(1))
        .find_map(|m| {
            let unescaped: String = serde_json::from_str(&format!("\"{}\"", m.as_str())).ok()?;
            non_empty(clean_text(&unescaped))
        })
}

fn find_meta_content(html: &str, key_attr: &str, key_value: &str) -> Option<String> {
    META_TAG_RE.find_iter(html).find_map(|m| {
        let tag = m.as_str();
        let key = extract_attr(tag, key_attr)?;
        if key.eq_ignore_ascii_case(key_value) {
            extract_attr(tag, "content").and_then(|c| non_empty(clean_text(&c)))
        } else {
            None
        }
    })
}

fn extract_attr(tag: &str, attr: &str) -> Option<String> {
    let pattern = format!(
        r#"(?is)(?:^|[\s<])\b{}\s*=\s*(?:"([^"]*)"|'([^']*)')"#,
        regex::escape(attr)
    );
    let re = Regex::new(&pattern).ok()?;
    let caps = re.captures(tag)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().trim().to_string())
}

/// Strip tags, decode the common entities, and collapse whitespace.
fn clean_text(input: &str) -> String {
    let no_tags = TAG_RE.replace_all(input, " ");
    decode_entities(&no_tags)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn decode_entities(input: &str) -> String {
    input
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

fn non_empty(s: String) -> Option<String> {
    (!s.is_empty()).then_some(s)
}

#[cfg(test)]
#[path = "markup_test.rs"]
mod tests;
