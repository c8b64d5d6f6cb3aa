//! Pipeline status widget: one fetch of `/api/update-status`, rendered into
//! every `[data-step]` marker whose step the response mentions.
//!
//! ERROR HANDLING
//! ==============
//! The poll is best effort. Transport errors, non-success responses and
//! bodies that do not decode as a [`StatusRecord`] are logged and leave every
//! marker as it was. There is no retry and no timeout.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::SiteError;

/// Class every rendered indicator carries besides the status tokens.
pub const INDICATOR_CLASS: &str = "status-indicator";

/// Latest state of one pipeline step.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StepStatus {
    /// Short machine status, used as the indicator's class (e.g. `"success"`).
    pub status: String,
    /// Human-readable line shown next to the indicator.
    pub message: String,
}

/// Step identifier → status, as served by the status endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct StatusRecord(pub HashMap<String, StepStatus>);

impl StatusRecord {
    pub fn get(&self, step: &str) -> Option<&StepStatus> {
        self.0.get(step)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Decode a status endpoint body.
///
/// # Errors
///
/// Returns [`SiteError::Decode`] unless the body is a JSON object whose
/// values all carry string `status` and `message` fields.
pub fn parse_status_record(body: &str) -> Result<StatusRecord, SiteError> {
    Ok(serde_json::from_str(body)?)
}

/// Classes for the indicator span: the base class plus one per status token.
pub fn indicator_classes(status: &str) -> Vec<&str> {
    std::iter::once(INDICATOR_CLASS).chain(status.split_whitespace()).collect()
}

/// An element on the page that displays one step's status.
pub trait StatusTarget {
    /// Step identifier the element is marked with, if any.
    fn step(&self) -> Option<String>;

    /// Replace the element's content with an indicator for `status`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Dom`] if the content cannot be rebuilt.
    fn show(&mut self, status: &StepStatus) -> Result<(), SiteError>;
}

/// Render `record` into `targets`. Targets whose step is absent from the
/// record are left untouched. Returns how many targets were updated.
pub fn render_status<T: StatusTarget>(record: &StatusRecord, targets: &mut [T]) -> usize {
    let mut updated = 0;
    for target in targets.iter_mut() {
        let Some(status) = target.step().and_then(|step| record.get(&step).cloned()) else {
            continue;
        };
        match target.show(&status) {
            Ok(()) => updated += 1,
            Err(err) => log::warn!("status render: {err}"),
        }
    }
    updated
}

/// Render a fetch outcome. A failed outcome is logged and renders nothing.
pub fn apply_outcome<T: StatusTarget>(outcome: Result<StatusRecord, SiteError>, targets: &mut [T]) -> usize {
    match outcome {
        Ok(record) => {
            if record.is_empty() {
                log::debug!("pipeline status: empty record");
            }
            let updated = render_status(&record, targets);
            log::debug!(
                "pipeline status: {} steps, {updated} of {} markers updated",
                record.len(),
                targets.len()
            );
            updated
        }
        Err(err) => {
            log::error!("Error loading pipeline data: {err}");
            0
        }
    }
}

#[cfg(feature = "browser")]
pub use self::browser::{StepMarker, fetch_status, poll_status};

#[cfg(feature = "browser")]
mod browser {
    use web_sys::{Document, Element, HtmlElement};

    use super::{StatusRecord, StatusTarget, StepStatus, apply_outcome, indicator_classes, parse_status_record};
    use crate::dom;
    use crate::error::SiteError;
    use crate::page::PageContext;

    /// A `[data-step]` element on the live page.
    pub struct StepMarker {
        element: Element,
        document: Document,
        step_attribute: String,
    }

    impl StatusTarget for StepMarker {
        fn step(&self) -> Option<String> {
            self.element.get_attribute(&self.step_attribute)
        }

        fn show(&mut self, status: &StepStatus) -> Result<(), SiteError> {
            let indicator: HtmlElement = dom::create(&self.document, "span")?;
            for class in indicator_classes(&status.status) {
                indicator.class_list().add_1(class).map_err(|e| SiteError::dom(&e))?;
            }
            let message = self.document.create_text_node(&status.message);

            self.element.set_text_content(None);
            self.element.append_child(&indicator).map_err(|e| SiteError::dom(&e))?;
            self.element.append_child(&message).map_err(|e| SiteError::dom(&e))?;
            Ok(())
        }
    }

    /// `GET` the status endpoint and decode the body.
    ///
    /// # Errors
    ///
    /// [`SiteError::Request`] on transport failure, [`SiteError::Status`] on a
    /// non-success response, [`SiteError::Decode`] on a malformed body.
    pub async fn fetch_status(endpoint: &str) -> Result<StatusRecord, SiteError> {
        let resp = gloo_net::http::Request::get(endpoint)
            .send()
            .await
            .map_err(|e| SiteError::Request(e.to_string()))?;
        let status = resp.status();
        if !(200..300).contains(&status) {
            return Err(SiteError::Status { status });
        }
        let body = resp.text().await.map_err(|e| SiteError::Request(e.to_string()))?;
        parse_status_record(&body)
    }

    /// Fetch once and render into the page's step markers.
    pub async fn poll_status(ctx: PageContext) {
        let outcome = fetch_status(&ctx.config.status_endpoint).await;
        let mut markers: Vec<StepMarker> = dom::query_all(&ctx.document, &ctx.config.status_selector)
            .into_iter()
            .map(|element| StepMarker {
                element,
                document: ctx.document.clone(),
                step_attribute: ctx.config.step_attribute.clone(),
            })
            .collect();
        apply_outcome(outcome, &mut markers);
    }
}
