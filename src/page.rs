//! Handles looked up once at bootstrap and shared by every controller.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, Window};

use crate::config::SiteConfig;
use crate::dom;
use crate::error::SiteError;
use crate::nav::Menu;
use crate::tooltip::TooltipSlot;

/// Page-lifetime context threaded through the initializers.
///
/// Cheap to clone: DOM handles are reference-counted JS objects and the
/// mutable tooltip slot is shared behind `Rc<RefCell<_>>`.
#[derive(Clone)]
pub struct PageContext {
    pub window: Window,
    pub document: Document,
    /// `location.pathname`, read once.
    pub path: String,
    /// Hamburger control and panel; `None` when either is missing.
    pub menu: Option<Menu>,
    pub tooltip: Rc<RefCell<TooltipSlot<Element>>>,
    pub config: Rc<SiteConfig>,
}

impl PageContext {
    /// Capture the current window, document and location.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Dom`] outside a browsing context or when the
    /// location cannot be read.
    pub fn capture(config: SiteConfig) -> Result<Self, SiteError> {
        let window = web_sys::window().ok_or_else(|| SiteError::Dom("no window".to_owned()))?;
        let document = window
            .document()
            .ok_or_else(|| SiteError::Dom("no document".to_owned()))?;
        let path = window.location().pathname().map_err(|e| SiteError::dom(&e))?;

        let menu = match (
            dom::query(&document, &config.menu_control_selector),
            dom::query(&document, &config.menu_panel_selector),
        ) {
            (Some(control), Some(panel)) => Some(Menu::new(control, panel, &config.active_class)),
            _ => None,
        };

        Ok(Self {
            window,
            document,
            path,
            menu,
            tooltip: Rc::new(RefCell::new(TooltipSlot::new())),
            config: Rc::new(config),
        })
    }
}
