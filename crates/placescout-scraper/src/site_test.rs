use super::*;

// -----------------------------------------------------------------------
// classify_url
// -----------------------------------------------------------------------

#[test]
fn classifies_detail_listing_and_short_links() {
    let profile = SiteProfile::naver();
    assert_eq!(
        classify_url("https://m.place.naver.com/restaurant/1/home", &profile).unwrap(),
        UrlKind::Detail
    );
    assert_eq!(
        classify_url("https://map.naver.com/p/entry/place/12345", &profile).unwrap(),
        UrlKind::Listing
    );
    assert_eq!(
        classify_url("https://naver.me/GxYz12", &profile).unwrap(),
        UrlKind::ShortLink
    );
}

#[test]
fn classifies_subdomains_of_listing_hosts() {
    let profile = SiteProfile::naver();
    assert_eq!(
        classify_url("https://m.map.naver.com/search?place/77", &profile).unwrap(),
        UrlKind::Listing
    );
}

#[test]
fn rejects_lookalike_hosts() {
    let profile = SiteProfile::naver();
    let result = classify_url("https://evilnaver.me/abc", &profile);
    assert!(
        matches!(result, Err(PlaceError::InvalidUrl { .. })),
        "suffix match without a dot boundary must be rejected, got: {result:?}"
    );
}

#[test]
fn rejects_foreign_hosts_and_bad_input() {
    let profile = SiteProfile::naver();
    for url in [
        "https://example.com/place/123",
        "not a url",
        "ftp://naver.me/abc",
        "",
    ] {
        let result = classify_url(url, &profile);
        assert!(
            matches!(result, Err(PlaceError::InvalidUrl { .. })),
            "expected InvalidUrl for {url:?}, got: {result:?}"
        );
    }
}

// -----------------------------------------------------------------------
// extract_place_id / build_detail_url
// -----------------------------------------------------------------------

#[test]
fn extracts_place_id_from_place_segment() {
    assert_eq!(
        extract_place_id("https://map.naver.com/p/entry/place/12345?c=15.00").as_deref(),
        Some("12345")
    );
}

#[test]
fn extracts_place_id_from_restaurant_segment() {
    assert_eq!(
        extract_place_id("https://m.place.naver.com/restaurant/987/home").as_deref(),
        Some("987")
    );
}

#[test]
fn place_segment_wins_over_restaurant_segment() {
    assert_eq!(
        extract_place_id("https://x/restaurant/1/place/2").as_deref(),
        Some("2")
    );
}

#[test]
fn returns_none_without_numeric_segment() {
    assert_eq!(extract_place_id("https://map.naver.com/p/search/coffee"), None);
    assert_eq!(extract_place_id("https://map.naver.com/p/entry/place/"), None);
}

#[test]
fn builds_detail_url_from_template() {
    let url = build_detail_url("12345", &SiteProfile::naver());
    assert_eq!(
        url.as_str(),
        "https://m.place.naver.com/place/12345/review/visitor?entry=ple"
    );
}

#[test]
fn builds_detail_url_on_custom_base_without_double_slash() {
    let profile = SiteProfile {
        detail_base_url: "http://127.0.0.1:8080/".to_string(),
        ..SiteProfile::naver()
    };
    assert_eq!(
        build_detail_url("9", &profile).as_str(),
        "http://127.0.0.1:8080/place/9/review/visitor?entry=ple"
    );
}

#[test]
fn listing_url_resolves_to_detail_url_with_same_id() {
    let resolved =
        detail_url_from_listing("https://map.naver.com/v5/entry/place/12345", &SiteProfile::naver())
            .expect("listing with id");
    assert!(resolved.as_str().contains("/place/12345/"));
}

#[test]
fn listing_url_without_id_is_invalid() {
    let result = detail_url_from_listing("https://map.naver.com/p/search/pizza", &SiteProfile::naver());
    assert!(matches!(result, Err(PlaceError::InvalidUrl { .. })));
}
