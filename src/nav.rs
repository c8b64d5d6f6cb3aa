//! Navigation: mobile menu toggle and active-link marking.
//!
//! DESIGN
//! ======
//! Matching rules and menu transitions are plain functions over strings and
//! booleans; the `browser` half only reads attributes and writes marker
//! classes. The control's marker class is the single source of truth for the
//! open state and is always written to both elements together.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Menu transition for a click that reached the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Keep,
    Close,
}

/// Next open state after a click on the control.
pub fn toggled(open: bool) -> bool {
    !open
}

/// Document clicks outside both the control and the panel close the menu.
pub fn on_document_click(inside_control: bool, inside_panel: bool) -> MenuAction {
    if inside_control || inside_panel {
        MenuAction::Keep
    } else {
        MenuAction::Close
    }
}

/// Final path segment, or `home` when the path ends in `/`.
pub fn current_page<'a>(path: &'a str, home: &'a str) -> &'a str {
    match path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => home,
    }
}

/// Whether a navigation link points at the page being viewed.
///
/// The last rule is a plain substring test on the full path, so `reports`
/// also matches `/reports-archive`; overlapping names are accepted.
pub fn is_active_link(href: &str, path: &str, home: &str, extension: &str) -> bool {
    let page = current_page(path, home);
    href == page
        || (page.is_empty() && href == home)
        || path.contains(href.replacen(extension, "", 1).as_str())
}

/// Active flag per link, in input order. Links without an href never match.
pub fn active_links(hrefs: &[Option<String>], path: &str, home: &str, extension: &str) -> Vec<bool> {
    hrefs
        .iter()
        .map(|href| href.as_deref().is_some_and(|href| is_active_link(href, path, home, extension)))
        .collect()
}

#[cfg(feature = "browser")]
pub use self::browser::{Menu, init_menu, mark_active_links};

#[cfg(feature = "browser")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{Element, Event, Node};

    use super::{MenuAction, active_links, on_document_click, toggled};
    use crate::dom;
    use crate::page::PageContext;

    /// The hamburger control and the panel it opens.
    #[derive(Clone)]
    pub struct Menu {
        pub control: Element,
        pub panel: Element,
        active_class: String,
    }

    impl Menu {
        pub fn new(control: Element, panel: Element, active_class: &str) -> Self {
            Self { control, panel, active_class: active_class.to_owned() }
        }

        pub fn is_open(&self) -> bool {
            self.control.class_list().contains(&self.active_class)
        }

        pub fn set_open(&self, open: bool) {
            dom::set_class(&self.control, &self.active_class, open);
            dom::set_class(&self.panel, &self.active_class, open);
        }

        pub fn toggle(&self) {
            self.set_open(toggled(self.is_open()));
        }

        pub fn close(&self) {
            self.set_open(false);
        }

        fn contains(&self, target: Option<&Node>) -> (bool, bool) {
            (self.control.contains(target), self.panel.contains(target))
        }
    }

    /// Wire the control click and the outside-click close.
    pub fn init_menu(ctx: &PageContext) {
        let Some(menu) = ctx.menu.clone() else {
            log::debug!("no menu control on this page");
            return;
        };

        let on_control = menu.clone();
        dom::listen(&menu.control, "click", move |_: Event| on_control.toggle());

        let on_document = menu;
        dom::listen(&ctx.document, "click", move |event: Event| {
            let target = event.target();
            let node = target.as_ref().and_then(|t| t.dyn_ref::<Node>());
            let (in_control, in_panel) = on_document.contains(node);
            if on_document_click(in_control, in_panel) == MenuAction::Close {
                on_document.close();
            }
        });
    }

    /// Mark links for the current page and clear every other link.
    pub fn mark_active_links(ctx: &PageContext) {
        let cfg = &ctx.config;
        let links = dom::query_all(&ctx.document, &cfg.nav_link_selector);
        let hrefs: Vec<Option<String>> = links.iter().map(|link| link.get_attribute("href")).collect();
        let flags = active_links(&hrefs, &ctx.path, &cfg.home_page, &cfg.page_extension);
        for (link, active) in links.iter().zip(flags) {
            dom::set_class(link, &cfg.active_class, active);
        }
    }
}
