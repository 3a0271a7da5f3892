use super::*;

// -----------------------------------------------------------------------
// title
// -----------------------------------------------------------------------

#[test]
fn title_tag_with_branding_suffix_is_stripped() {
    let html = "<html><head><title>Best Noodles - SiteName</title></head></html>";
    let record = extract_from_markup(html).expect("title should yield a record");
    assert_eq!(record.title.as_deref(), Some("Best Noodles"));
    assert_eq!(record.source, ExtractionSource::Markup);
    assert!(record.reviews.is_empty());
}

#[test]
fn empty_title_tag_falls_through_to_heading() {
    let html = "<title>   </title><h1 class=\"name\"><span>을지로 국수집</span></h1>";
    let record = extract_from_markup(html).expect("record");
    assert_eq!(record.title.as_deref(), Some("을지로 국수집"));
}

#[test]
fn og_title_is_last_resort_for_title() {
    let html = r#"<meta property="og:title" content="Cafe &amp; Bakery : 네이버">"#;
    let record = extract_from_markup(html).expect("record");
    assert_eq!(record.title.as_deref(), Some("Cafe & Bakery"));
}

#[test]
fn title_without_separator_is_kept_whole() {
    assert_eq!(strip_branding_suffix("Plain Title"), "Plain Title");
}

#[test]
fn branch_name_after_separator_is_kept() {
    assert_eq!(strip_branding_suffix("BBQ - 강남점"), "BBQ - 강남점");
}

#[test]
fn site_brand_tail_is_stripped_before_branch_name() {
    assert_eq!(
        strip_branding_suffix("BBQ - 강남점 - 네이버 플레이스"),
        "BBQ - 강남점"
    );
    assert_eq!(strip_branding_suffix("BBQ 강남점 : 네이버"), "BBQ 강남점");
    assert_eq!(strip_branding_suffix("Cafe X | NAVER"), "Cafe X");
}

#[test]
fn long_trailing_segment_is_not_treated_as_branding() {
    let title = "Kim's - a very long descriptive subtitle that is clearly not a brand";
    assert_eq!(strip_branding_suffix(title), title);
}

// -----------------------------------------------------------------------
// description
// -----------------------------------------------------------------------

#[test]
fn meta_description_preferred_over_og_description() {
    let html = r#"
        <title>X</title>
        <meta property="og:description" content="og text">
        <meta name="description" content="meta text">
    "#;
    let record = extract_from_markup(html).expect("record");
    assert_eq!(record.description.as_deref(), Some("meta text"));
}

#[test]
fn og_description_used_when_meta_missing() {
    let html = r#"<title>X</title><meta content='og only' property='og:description'>"#;
    let record = extract_from_markup(html).expect("record");
    assert_eq!(record.description.as_deref(), Some("og only"));
}

#[test]
fn data_name_attribute_does_not_shadow_name() {
    let html = r#"<title>X</title><meta data-name="description" content="wrong">"#;
    let record = extract_from_markup(html).expect("record");
    assert_eq!(record.description, None);
}

// -----------------------------------------------------------------------
// address
// -----------------------------------------------------------------------

#[test]
fn labeled_address_is_extracted() {
    let html = "<title>X</title><div>주소: 서울 중구 을지로 123</div>";
    let record = extract_from_markup(html).expect("record");
    assert_eq!(record.road_address.as_deref(), Some("서울 중구 을지로 123"));
}

#[test]
fn label_element_address_is_extracted() {
    let html = "<title>X</title><dt>주소</dt><dd><span>부산 해운대구 해변로 7</span></dd>";
    let record = extract_from_markup(html).expect("record");
    assert_eq!(record.road_address.as_deref(), Some("부산 해운대구 해변로 7"));
}

#[test]
fn address_attribute_is_extracted() {
    let html = r#"<title>X</title><div data-address="대구 중구 동성로 1"></div>"#;
    let record = extract_from_markup(html).expect("record");
    assert_eq!(record.road_address.as_deref(), Some("대구 중구 동성로 1"));
}

#[test]
fn quoted_address_literal_is_unescaped() {
    let html = r#"<title>X</title><script>var p = {"address": "Seoul \"Main\" St 5"};</script>"#;
    let record = extract_from_markup(html).expect("record");
    assert_eq!(record.road_address.as_deref(), Some(r#"Seoul "Main" St 5"#));
}

// -----------------------------------------------------------------------
// phone
// -----------------------------------------------------------------------

#[test]
fn labeled_phone_is_extracted() {
    let html = "<title>X</title><p>전화: 02-123-4567</p>";
    let record = extract_from_markup(html).expect("record");
    assert_eq!(record.phone.as_deref(), Some("02-123-4567"));
}

#[test]
fn tel_link_is_extracted() {
    let html = r#"<title>X</title><a href="tel:0507-1400-1234">call</a>"#;
    let record = extract_from_markup(html).expect("record");
    assert_eq!(record.phone.as_deref(), Some("0507-1400-1234"));
}

#[test]
fn phone_literal_is_extracted() {
    let html = r#"<title>X</title><script>{"phone":"031-555-0101"}</script>"#;
    let record = extract_from_markup(html).expect("record");
    assert_eq!(record.phone.as_deref(), Some("031-555-0101"));
}

#[test]
fn bare_phone_pattern_is_last_resort() {
    let html = "<title>X</title><p>예약 문의 010-9876-5432 로 연락주세요</p>";
    let record = extract_from_markup(html).expect("record");
    assert_eq!(record.phone.as_deref(), Some("010-9876-5432"));
}

// -----------------------------------------------------------------------
// identifier and overall outcome
// -----------------------------------------------------------------------

#[test]
fn identifier_alone_is_enough_for_a_record() {
    let html = r#"<a href="https://m.place.naver.com/restaurant/1234567/home">home</a>"#;
    let record = extract_from_markup(html).expect("id should yield a record");
    assert_eq!(record.site_id.as_deref(), Some("1234567"));
    assert_eq!(record.title, None);
}

#[test]
fn restaurant_segment_preferred_over_place_segment() {
    let html = r#"<title>X</title><a href="/place/1/x"></a><a href="/restaurant/2/home"></a>"#;
    let record = extract_from_markup(html).expect("record");
    assert_eq!(record.site_id.as_deref(), Some("2"));
}

#[test]
fn returns_none_without_title_or_identifier() {
    let html = "<html><body><p>전화: 02-123-4567</p><div>주소: 서울 어딘가 1</div></body></html>";
    assert!(extract_from_markup(html).is_none());
}

#[test]
fn clean_text_strips_tags_and_entities() {
    assert_eq!(clean_text("<b>Fish</b>\n&amp;\n Chips"), "Fish & Chips");
}
