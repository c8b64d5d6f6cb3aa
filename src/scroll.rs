//! Smooth scrolling for in-page anchors, offset below the sticky header.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Element id named by an in-page anchor href.
///
/// `None` for the bare `#` placeholder and for hrefs that are not fragments.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Window scroll position that puts an element's top `offset` below the
/// viewport top. `element_top` is in page coordinates.
pub fn scroll_top_for(element_top: f64, offset: f64) -> f64 {
    element_top - offset
}

/// What a click on an in-page anchor should do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollAction {
    /// Window scroll position to animate to.
    pub top: f64,
    /// The mobile menu was open and must be closed.
    pub close_menu: bool,
}

/// Decide the scroll for `href`. `element_top` resolves an element id to its
/// page-coordinate top, or `None` when no element has that id.
///
/// `None` means no viewport change and no menu change.
pub fn plan_scroll<F>(href: &str, element_top: F, offset: f64, menu_open: bool) -> Option<ScrollAction>
where
    F: Fn(&str) -> Option<f64>,
{
    let top = element_top(fragment_target(href)?)?;
    Some(ScrollAction { top: scroll_top_for(top, offset), close_menu: menu_open })
}

#[cfg(feature = "browser")]
pub use self::browser::{init_smooth_scroll, scroll_to_fragment};

#[cfg(feature = "browser")]
mod browser {
    use web_sys::{Element, Event, ScrollBehavior, ScrollToOptions};

    use super::plan_scroll;
    use crate::dom;
    use crate::nav::Menu;
    use crate::page::PageContext;

    /// Intercept every in-page anchor on the page.
    pub fn init_smooth_scroll(ctx: &PageContext) {
        for anchor in dom::query_all(&ctx.document, &ctx.config.anchor_selector) {
            let handler_ctx = ctx.clone();
            let own = anchor.clone();
            dom::listen(&anchor, "click", move |event: Event| {
                event.prevent_default();
                if let Some(href) = own.get_attribute("href") {
                    scroll_to_fragment(&handler_ctx, &href);
                }
            });
        }
    }

    /// Scroll to the element named by `href`, closing the mobile menu.
    ///
    /// Returns `false` without touching the viewport when the href is the
    /// bare `#` or no element carries that id.
    pub fn scroll_to_fragment(ctx: &PageContext, href: &str) -> bool {
        let menu_open = ctx.menu.as_ref().is_some_and(Menu::is_open);
        let lookup = |id: &str| ctx.document.get_element_by_id(id).map(|el| page_top(ctx, &el));
        let Some(action) = plan_scroll(href, lookup, ctx.config.scroll_offset, menu_open) else {
            return false;
        };

        let options = ScrollToOptions::new();
        options.set_top(action.top);
        options.set_behavior(ScrollBehavior::Smooth);
        ctx.window.scroll_to_with_scroll_to_options(&options);

        if action.close_menu {
            if let Some(menu) = &ctx.menu {
                menu.close();
            }
        }
        true
    }

    fn page_top(ctx: &PageContext, element: &Element) -> f64 {
        element.get_bounding_client_rect().top() + dom::scroll_offsets(&ctx.window).1
    }
}
