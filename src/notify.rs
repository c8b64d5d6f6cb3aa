//! Toast notifications: dismissible, auto-expiring, stacked without a queue.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::cell::Cell;

use crate::config::SiteConfig;

/// Visual treatment of a notification.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
    /// Unrecognized kind; rendered with base styling plus its own class.
    Other(String),
}

impl NotificationKind {
    /// Parse a kind name. Blank input falls back to [`NotificationKind::Info`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" | "info" => Self::Info,
            "success" => Self::Success,
            "warning" => Self::Warning,
            "danger" => Self::Danger,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Classes applied to the notification element.
    pub fn classes(&self) -> Vec<&str> {
        let kind = match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Other(raw) => raw.as_str(),
        };
        std::iter::once("notification").chain(kind.split_whitespace()).collect()
    }
}

/// Lifecycle of one toast. Removal happens at most once, whichever of the
/// close button and the expiry timer fires first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastState {
    #[default]
    Shown,
    Removed,
}

impl ToastState {
    /// Transition to removed. Returns `true` only for the first call.
    pub fn remove(&mut self) -> bool {
        let first = *self == Self::Shown;
        *self = Self::Removed;
        first
    }
}

/// An attached toast element.
pub trait Detach {
    fn is_attached(&self) -> bool;
    fn detach(&self);
}

/// A shown toast. The close button and the expiry timer both call
/// [`Toast::remove`]; only the first call detaches, and never an element
/// something else already took off the page.
#[derive(Debug)]
pub struct Toast<E> {
    element: E,
    state: Cell<ToastState>,
}

impl<E: Detach> Toast<E> {
    pub fn new(element: E) -> Self {
        Self { element, state: Cell::new(ToastState::Shown) }
    }

    /// Returns `true` when this call detached the element.
    pub fn remove(&self) -> bool {
        let mut state = self.state.get();
        let first = state.remove();
        self.state.set(state);
        if first && self.element.is_attached() {
            self.element.detach();
            return true;
        }
        false
    }

    pub fn state(&self) -> ToastState {
        self.state.get()
    }

    pub fn element(&self) -> &E {
        &self.element
    }
}

/// Content, classes and lifetime of a toast about to be shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastPlan {
    pub message: String,
    pub kind: NotificationKind,
    pub ttl_ms: u32,
}

impl ToastPlan {
    /// `kind` defaults to info; the lifetime comes from `config`.
    pub fn new(message: &str, kind: Option<&str>, config: &SiteConfig) -> Self {
        Self {
            message: message.to_owned(),
            kind: kind.map_or(NotificationKind::Info, NotificationKind::parse),
            ttl_ms: config.notification_ttl_ms,
        }
    }
}

#[cfg(feature = "browser")]
pub use self::browser::notify;

#[cfg(feature = "browser")]
mod browser {
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Document, Element, Event, HtmlElement};

    use super::{Detach, Toast, ToastPlan};
    use crate::dom;
    use crate::error::SiteError;

    impl Detach for Element {
        fn is_attached(&self) -> bool {
            self.parent_element().is_some()
        }

        fn detach(&self) {
            self.remove();
        }
    }

    /// Show a toast that closes on click or after `plan.ttl_ms`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Dom`] if the toast cannot be built or attached.
    pub fn notify(document: &Document, plan: &ToastPlan) -> Result<(), SiteError> {
        let root: HtmlElement = dom::create(document, "div")?;
        for class in plan.kind.classes() {
            root.class_list().add_1(class).map_err(|e| SiteError::dom(&e))?;
        }

        let text: HtmlElement = dom::create(document, "span")?;
        text.set_text_content(Some(&plan.message));
        let close: HtmlElement = dom::create(document, "button")?;
        close.set_text_content(Some("\u{d7}"));
        root.append_child(&text).map_err(|e| SiteError::dom(&e))?;
        root.append_child(&close).map_err(|e| SiteError::dom(&e))?;
        dom::append_to_body(document, &root)?;

        let toast = Rc::new(Toast::new(Element::from(root)));

        let on_close = Closure::<dyn FnMut(Event)>::new({
            let toast = Rc::clone(&toast);
            move |_: Event| {
                toast.remove();
            }
        });
        close
            .add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())
            .map_err(|e| SiteError::dom(&e))?;

        // The button is off the page once the timer fires, so the close
        // handler is released here whichever path removed the toast.
        Timeout::new(plan.ttl_ms, move || {
            toast.remove();
            drop(on_close);
        })
        .forget();
        Ok(())
    }
}
