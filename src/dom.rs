//! Thin `web-sys` helpers shared by the controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the `JsValue` error plumbing and listener lifetime so the
//! controller modules read as plain DOM manipulation.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, Node, Window};

use crate::error::SiteError;

/// All elements matching `selector`, in document order. An invalid selector
/// is logged and matches nothing.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("selector {selector:?}: {}", SiteError::dom(&err));
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// First element matching `selector`, if any.
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("selector {selector:?}: {}", SiteError::dom(&err));
            None
        }
    }
}

/// Create an element and cast it to the requested element type.
///
/// # Errors
///
/// Returns [`SiteError::Dom`] if creation throws or the cast fails.
pub fn create<T: JsCast>(document: &Document, tag: &str) -> Result<T, SiteError> {
    let element = document.create_element(tag).map_err(|e| SiteError::dom(&e))?;
    element
        .dyn_into::<T>()
        .map_err(|_| SiteError::Dom(format!("<{tag}> has an unexpected element type")))
}

/// # Errors
///
/// Returns [`SiteError::Dom`] if the document has no body or the append throws.
pub fn append_to_body(document: &Document, node: &Node) -> Result<(), SiteError> {
    let body = document.body().ok_or_else(|| SiteError::Dom("document has no body".to_owned()))?;
    body.append_child(node).map_err(|e| SiteError::dom(&e))?;
    Ok(())
}

/// Add or remove a marker class.
pub fn set_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let result = if on { classes.add_1(class) } else { classes.remove_1(class) };
    if let Err(err) = result {
        log::warn!("class {class:?}: {}", SiteError::dom(&err));
    }
}

/// Window scroll offset `(x, y)`; zero when unavailable.
pub fn scroll_offsets(window: &Window) -> (f64, f64) {
    (window.scroll_x().unwrap_or(0.0), window.scroll_y().unwrap_or(0.0))
}

/// Attach a listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    let function: &js_sys::Function = callback.as_ref().unchecked_ref();
    if let Err(err) = target.add_event_listener_with_callback(event, function) {
        log::warn!("listen {event:?}: {}", SiteError::dom(&err));
        return;
    }
    callback.forget();
}
