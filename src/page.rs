//! Page-level rules the browser bindings apply to raw DOM values.
//!
//! Kept free of browser types so the decisions run on the host: when the
//! document counts as parsed, how a missing node is reported, which click
//! dismisses the modal, and where a nav link scrolls to.

use crate::error::SiteError;
use crate::nav::section_id;

/// `document.readyState` while the parser is still running
pub const READY_STATE_LOADING: &str = "loading";

/// Wiring waits for `DOMContentLoaded` only while the document is loading.
pub fn is_loading(ready_state: &str) -> bool {
    ready_state == READY_STATE_LOADING
}

/// Maps an absent lookup result to a named `MissingElement` error.
pub fn require<T>(found: Option<T>, name: &'static str, selector: &str) -> Result<T, SiteError> {
    found.ok_or_else(|| SiteError::MissingElement {
        name,
        selector: selector.to_string(),
    })
}

/// A click dismisses the modal only when it lands on the container itself,
/// not when it bubbles up from the dialog content.
pub fn is_backdrop_click<T: PartialEq>(target: Option<&T>, container: &T) -> bool {
    target.is_some_and(|target| target == container)
}

/// Resolves each nav link's anchor through `lookup` (any element id, not
/// only sections). Links without a `#id` href, or whose id is absent from
/// the page, get `None`.
pub fn link_targets<T, F>(hrefs: &[String], mut lookup: F) -> Vec<Option<T>>
where
    F: FnMut(&str) -> Option<T>,
{
    hrefs
        .iter()
        .map(|href| section_id(href).and_then(&mut lookup))
        .collect()
}
