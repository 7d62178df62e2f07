use super::*;

const BASE: &str = "https://script.example.com/exec";

// =============================================================
// URL builders
// =============================================================

#[test]
fn count_url_appends_action() {
    assert_eq!(count_url(BASE), "https://script.example.com/exec?action=count");
}

#[test]
fn list_url_appends_action() {
    assert_eq!(
        list_url(BASE),
        "https://script.example.com/exec?action=list_participants"
    );
}

#[test]
fn draw_url_without_product_has_no_filter() {
    assert_eq!(draw_url(BASE, None), "https://script.example.com/exec?action=random");
}

#[test]
fn draw_url_encodes_thai_product_filter() {
    // "น" is U+0E19, UTF-8 E0 B8 99.
    assert_eq!(
        draw_url(BASE, Some("น")),
        "https://script.example.com/exec?action=random&product=%E0%B8%99"
    );
}

#[test]
fn draw_url_keeps_ascii_product_unescaped() {
    assert_eq!(
        draw_url(BASE, Some("zone-a")),
        "https://script.example.com/exec?action=random&product=zone-a"
    );
}

// =============================================================
// percent_encode
// =============================================================

#[test]
fn percent_encode_matches_encode_uri_component_on_unreserved() {
    assert_eq!(percent_encode("AZaz09-_.~!*'()"), "AZaz09-_.~!*'()");
}

#[test]
fn percent_encode_escapes_reserved_ascii() {
    assert_eq!(percent_encode("a b&c=d"), "a%20b%26c%3Dd");
    assert_eq!(percent_encode("100%"), "100%25");
}

#[test]
fn percent_encode_escapes_multibyte_utf8_per_byte() {
    assert_eq!(percent_encode("น้ำ"), "%E0%B8%99%E0%B9%89%E0%B8%B3");
}
