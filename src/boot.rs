//! Bootstrapper: runs the controllers once the document is parsed.

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

use crate::config::SiteConfig;

/// One initialization step, in the order the bootstrapper runs them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootStep {
    Navigation,
    ActiveLinks,
    SmoothScroll,
    Tooltips,
    StatusPoll,
}

/// Steps to run for a page at `path`. The status poll is only scheduled on
/// pages whose path contains the configured marker.
pub fn boot_plan(path: &str, config: &SiteConfig) -> Vec<BootStep> {
    let mut steps = vec![
        BootStep::Navigation,
        BootStep::ActiveLinks,
        BootStep::SmoothScroll,
        BootStep::Tooltips,
    ];
    if path.contains(config.status_page_marker.as_str()) {
        steps.push(BootStep::StatusPoll);
    }
    steps
}

/// Whether `document.readyState` says the markup is already parsed.
pub fn is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

#[cfg(feature = "browser")]
pub use self::browser::{boot, run_when_ready};

#[cfg(feature = "browser")]
mod browser {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use super::{BootStep, boot_plan, is_parsed};
    use crate::config::SiteConfig;
    use crate::page::PageContext;
    use crate::{nav, scroll, status, tooltip};

    /// Run [`boot`] now if the document is parsed, else on `DOMContentLoaded`.
    pub fn run_when_ready() {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::warn!("no document; page behaviour disabled");
            return;
        };
        if is_parsed(&document.ready_state()) {
            boot();
            return;
        }
        let on_ready = Closure::once_into_js(boot);
        if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
            log::warn!("DOMContentLoaded listener: {err:?}");
        }
    }

    /// Wire every controller for the current page.
    pub fn boot() {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let ctx = match PageContext::capture(SiteConfig::from_document(&document)) {
            Ok(ctx) => ctx,
            Err(err) => {
                log::warn!("bootstrap: {err}");
                return;
            }
        };

        let plan = boot_plan(&ctx.path, &ctx.config);
        log::debug!("bootstrap {}: {plan:?}", ctx.path);
        for step in plan {
            match step {
                BootStep::Navigation => nav::init_menu(&ctx),
                BootStep::ActiveLinks => nav::mark_active_links(&ctx),
                BootStep::SmoothScroll => scroll::init_smooth_scroll(&ctx),
                BootStep::Tooltips => tooltip::init_tooltips(&ctx),
                BootStep::StatusPoll => wasm_bindgen_futures::spawn_local(status::poll_status(ctx.clone())),
            }
        }
    }
}
