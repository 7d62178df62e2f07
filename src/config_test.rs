use super::*;

#[test]
fn from_value_none_is_unconfigured() {
    assert_eq!(Endpoint::from_value(None), Endpoint::Unconfigured);
}

#[test]
fn from_value_blank_is_unconfigured() {
    assert_eq!(Endpoint::from_value(Some("")), Endpoint::Unconfigured);
    assert_eq!(Endpoint::from_value(Some("   ")), Endpoint::Unconfigured);
}

#[test]
fn from_value_trims_and_keeps_url() {
    assert_eq!(
        Endpoint::from_value(Some("  https://example.com/exec ")),
        Endpoint::Url("https://example.com/exec".to_owned())
    );
}

#[test]
fn is_configured_matches_variant() {
    assert!(Endpoint::Url("https://example.com".to_owned()).is_configured());
    assert!(!Endpoint::Unconfigured.is_configured());
}

#[test]
fn url_errors_when_unconfigured() {
    assert_eq!(Endpoint::Unconfigured.url(), Err(Error::Unconfigured));
    let configured = Endpoint::Url("https://example.com/exec".to_owned());
    assert_eq!(configured.url(), Ok("https://example.com/exec"));
}

#[test]
fn default_campaign_lists_both_branches() {
    let campaign = Campaign::default();
    assert_eq!(campaign.product_options, ["น้ำโสม", "กลางใหญ่"]);
    assert!(campaign.product_required());
}

#[test]
fn empty_option_set_makes_product_optional() {
    let campaign = Campaign {
        title: "test",
        product_options: &[],
    };
    assert!(!campaign.product_required());
}
