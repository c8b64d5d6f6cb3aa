//! # pipeline-site
//!
//! Client-side behaviour for the pipeline portfolio site, compiled to
//! WebAssembly: mobile navigation, active-link marking, smooth in-page
//! scrolling, hover tooltips, toast notifications and the pipeline status
//! widget.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`boot`] | Ordered startup of every controller |
//! | [`nav`] | Mobile menu toggle and active-link rules |
//! | [`scroll`] | Smooth scrolling to in-page anchors |
//! | [`tooltip`] | Tooltip placement and single-tooltip ownership |
//! | [`status`] | Status endpoint record and marker rendering |
//! | [`notify`] | Toast kinds and removal lifecycle |
//! | [`format`] | Number and date display helpers |
//! | [`config`] | Selectors, endpoint and timings |
//! | [`error`] | Error taxonomy |
//!
//! Decision logic builds and tests natively. The `browser` feature adds the
//! `web-sys` wiring and the `#[wasm_bindgen]` entry points.

pub mod boot;
pub mod config;
pub mod error;
pub mod format;
pub mod nav;
pub mod notify;
pub mod scroll;
pub mod status;
pub mod tooltip;

#[cfg(feature = "browser")]
pub mod dom;
#[cfg(feature = "browser")]
pub mod page;

#[cfg(feature = "browser")]
pub use self::exports::*;

#[cfg(feature = "browser")]
mod exports {
    use wasm_bindgen::prelude::*;

    use crate::config::SiteConfig;
    use crate::notify::ToastPlan;

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&err.to_string().into());
        }
        crate::boot::run_when_ready();
    }

    #[wasm_bindgen(js_name = formatNumber)]
    pub fn format_number(num: f64) -> String {
        crate::format::format_number(num)
    }

    /// Same output as `toLocaleDateString` for unparseable input.
    #[wasm_bindgen(js_name = formatDate)]
    pub fn format_date(raw: &str) -> String {
        crate::format::format_date(raw).unwrap_or_else(|| "Invalid Date".to_owned())
    }

    #[wasm_bindgen(js_name = showNotification)]
    pub fn show_notification(message: &str, kind: Option<String>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let plan = ToastPlan::new(message, kind.as_deref(), &SiteConfig::from_document(&document));
        if let Err(err) = crate::notify::notify(&document, &plan) {
            log::warn!("notification: {err}");
        }
    }
}
