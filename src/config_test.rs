#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_stock_markup() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.menu_control_selector, ".hamburger");
    assert_eq!(cfg.menu_panel_selector, ".nav-links");
    assert_eq!(cfg.nav_link_selector, ".nav-links a");
    assert_eq!(cfg.active_class, "active");
    assert_eq!(cfg.home_page, "index.html");
    assert_eq!(cfg.tooltip_attribute, "data-tooltip");
    assert_eq!(cfg.step_attribute, "data-step");
}

#[test]
fn defaults_carry_fixed_timings() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.scroll_offset, 80.0);
    assert_eq!(cfg.tooltip_gap, 5.0);
    assert_eq!(cfg.notification_ttl_ms, 5_000);
    assert_eq!(cfg.status_endpoint, "/api/update-status");
    assert_eq!(cfg.status_page_marker, "pipeline");
}

// =============================================================
// from_json
// =============================================================

#[test]
fn empty_block_yields_defaults() {
    assert_eq!(SiteConfig::from_json("  \n").unwrap(), SiteConfig::default());
    assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg = SiteConfig::from_json(r#"{"scroll_offset": 64, "status_endpoint": "/status"}"#).unwrap();
    assert_eq!(cfg.scroll_offset, 64.0);
    assert_eq!(cfg.status_endpoint, "/status");
    assert_eq!(cfg.home_page, "index.html");
    assert_eq!(cfg.notification_ttl_ms, 5_000);
}

#[test]
fn malformed_json_is_config_error() {
    let err = SiteConfig::from_json("{scroll_offset: 64").unwrap_err();
    assert!(matches!(err, SiteError::Config(_)));
}

#[test]
fn unknown_key_is_rejected() {
    let err = SiteConfig::from_json(r#"{"scroll_ofset": 64}"#).unwrap_err();
    assert!(err.to_string().contains("scroll_ofset"));
}

#[test]
fn wrong_type_is_rejected() {
    assert!(SiteConfig::from_json(r#"{"notification_ttl_ms": "soon"}"#).is_err());
}
