//! Hover tooltips for elements carrying a `data-tooltip` attribute.
//!
//! At most one tooltip exists at a time. The live tooltip is held in a
//! [`TooltipSlot`]; showing a new one evicts the held handle and hiding
//! removes exactly that handle.

#[cfg(test)]
#[path = "tooltip_test.rs"]
mod tooltip_test;

/// Axis-aligned box in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Absolute page position for a tooltip's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
}

/// Tooltip text to show, or `None` when the attribute is missing or blank.
pub fn tooltip_text(attr: Option<String>) -> Option<String> {
    attr.filter(|text| !text.is_empty())
}

/// Centre the tooltip horizontally over `anchor` with its bottom edge `gap`
/// above the anchor's top.
///
/// `anchor` is in viewport coordinates; `scroll` is the window scroll offset
/// `(x, y)` so the result can be used with `position: absolute`.
pub fn place_above(anchor: Rect, tip_width: f64, tip_height: f64, gap: f64, scroll: (f64, f64)) -> Placement {
    Placement {
        left: scroll.0 + anchor.left + anchor.width / 2.0 - tip_width / 2.0,
        top: scroll.1 + anchor.top - tip_height - gap,
    }
}

/// Owner of the single live tooltip handle.
#[derive(Debug)]
pub struct TooltipSlot<T> {
    current: Option<T>,
}

impl<T> Default for TooltipSlot<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T> TooltipSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold `tooltip`, handing back the previous one for removal.
    pub fn replace(&mut self, tooltip: T) -> Option<T> {
        self.current.replace(tooltip)
    }

    /// Release the held tooltip for removal.
    pub fn take(&mut self) -> Option<T> {
        self.current.take()
    }
}

#[cfg(feature = "browser")]
pub use self::browser::{hide_tooltip, init_tooltips, show_tooltip};

#[cfg(feature = "browser")]
mod browser {
    use web_sys::{Element, Event, HtmlElement};

    use super::{Rect, place_above, tooltip_text};
    use crate::dom;
    use crate::error::SiteError;
    use crate::page::PageContext;

    /// Attach enter/leave handlers to every element with tooltip text.
    pub fn init_tooltips(ctx: &PageContext) {
        let selector = format!("[{}]", ctx.config.tooltip_attribute);
        for anchor in dom::query_all(&ctx.document, &selector) {
            let enter_ctx = ctx.clone();
            let own = anchor.clone();
            dom::listen(&anchor, "mouseenter", move |_: Event| {
                if let Err(err) = show_tooltip(&enter_ctx, &own) {
                    log::warn!("tooltip: {err}");
                }
            });

            let leave_ctx = ctx.clone();
            dom::listen(&anchor, "mouseleave", move |_: Event| hide_tooltip(&leave_ctx));
        }
    }

    /// Show the tooltip for `anchor`, replacing any tooltip still on screen.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Dom`] if the tooltip element cannot be created
    /// or attached.
    pub fn show_tooltip(ctx: &PageContext, anchor: &Element) -> Result<(), SiteError> {
        let Some(text) = tooltip_text(anchor.get_attribute(&ctx.config.tooltip_attribute)) else {
            return Ok(());
        };

        let tip: HtmlElement = dom::create(&ctx.document, "div")?;
        tip.set_class_name(&ctx.config.tooltip_class);
        tip.set_text_content(Some(&text));
        dom::append_to_body(&ctx.document, &tip)?;

        if let Some(previous) = ctx.tooltip.borrow_mut().replace(tip.clone().into()) {
            previous.remove();
        }

        let bounds = anchor.get_bounding_client_rect();
        let anchor_rect = Rect {
            left: bounds.left(),
            top: bounds.top(),
            width: bounds.width(),
            height: bounds.height(),
        };
        let placement = place_above(
            anchor_rect,
            f64::from(tip.offset_width()),
            f64::from(tip.offset_height()),
            ctx.config.tooltip_gap,
            dom::scroll_offsets(&ctx.window),
        );

        let style = tip.style();
        style.set_property("position", "absolute").map_err(|e| SiteError::dom(&e))?;
        style
            .set_property("top", &format!("{}px", placement.top))
            .map_err(|e| SiteError::dom(&e))?;
        style
            .set_property("left", &format!("{}px", placement.left))
            .map_err(|e| SiteError::dom(&e))?;
        Ok(())
    }

    /// Remove the tooltip this controller is holding, if any.
    pub fn hide_tooltip(ctx: &PageContext) {
        if let Some(tip) = ctx.tooltip.borrow_mut().take() {
            tip.remove();
        }
    }
}
