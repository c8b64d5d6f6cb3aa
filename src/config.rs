//! Site configuration: selectors, marker classes, endpoint and timings.
//!
//! Every field has a default matching the stock page markup, so an empty
//! object (or no config block at all) yields a working setup. Pages that use
//! different markup can embed overrides as JSON:
//!
//! ```html
//! <script type="application/json" id="site-config">
//!   { "scroll_offset": 64, "status_endpoint": "/api/v2/update-status" }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::SiteError;

pub const DEFAULT_STATUS_ENDPOINT: &str = "/api/update-status";
pub const DEFAULT_SCROLL_OFFSET: f64 = 80.0;
pub const DEFAULT_TOOLTIP_GAP: f64 = 5.0;
pub const DEFAULT_NOTIFICATION_TTL_MS: u32 = 5_000;

/// Id of the optional `<script type="application/json">` override block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Hamburger control that opens the mobile menu.
    pub menu_control_selector: String,
    /// Menu panel toggled alongside the control.
    pub menu_panel_selector: String,
    /// Navigation links considered for active marking.
    pub nav_link_selector: String,
    /// Marker class for both "menu open" and "link active".
    pub active_class: String,
    /// Page identifier used when the path ends in `/`.
    pub home_page: String,
    /// Suffix removed from a link href before the substring match.
    pub page_extension: String,

    /// In-page anchors intercepted for smooth scrolling.
    pub anchor_selector: String,
    /// Height reserved for the sticky header.
    pub scroll_offset: f64,

    pub tooltip_attribute: String,
    pub tooltip_class: String,
    /// Vertical space between anchor top and tooltip bottom.
    pub tooltip_gap: f64,

    pub status_endpoint: String,
    /// The poll only runs when the page path contains this substring.
    pub status_page_marker: String,
    pub status_selector: String,
    pub step_attribute: String,

    pub notification_ttl_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            menu_control_selector: ".hamburger".to_owned(),
            menu_panel_selector: ".nav-links".to_owned(),
            nav_link_selector: ".nav-links a".to_owned(),
            active_class: "active".to_owned(),
            home_page: "index.html".to_owned(),
            page_extension: ".html".to_owned(),
            anchor_selector: "a[href^=\"#\"]".to_owned(),
            scroll_offset: DEFAULT_SCROLL_OFFSET,
            tooltip_attribute: "data-tooltip".to_owned(),
            tooltip_class: "tooltip".to_owned(),
            tooltip_gap: DEFAULT_TOOLTIP_GAP,
            status_endpoint: DEFAULT_STATUS_ENDPOINT.to_owned(),
            status_page_marker: "pipeline".to_owned(),
            status_selector: "[data-step]".to_owned(),
            step_attribute: "data-step".to_owned(),
            notification_ttl_ms: DEFAULT_NOTIFICATION_TTL_MS,
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override block. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] for malformed JSON, unknown keys or
    /// wrongly typed values.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|e| SiteError::Config(e.to_string()))
    }

    /// Read the override block from the document, falling back to defaults.
    #[cfg(feature = "browser")]
    pub fn from_document(document: &web_sys::Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; using defaults");
                Self::default()
            }
        }
    }
}
