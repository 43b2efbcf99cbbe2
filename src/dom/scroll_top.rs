//! Floating scroll-to-top control.

use web_sys::Window;

use super::contract::PageElements;
use super::listener::Listener;
use super::{now_ms, scroll_offset, set_class, smooth_scroll_to};
use crate::error::SiteError;
use crate::scroll::{scroll_top_visible, ScrollThrottle};

pub fn bind(
    elements: &PageElements,
    window: &Window,
    threshold: f64,
    throttle_ms: u32,
) -> Result<Vec<Listener>, SiteError> {
    let button = elements.scroll_to_top.clone();
    let scroll_window = window.clone();
    let mut throttle = ScrollThrottle::new(throttle_ms);

    let on_scroll = Listener::new(window, "scroll", move |_| {
        if throttle.ready(now_ms(&scroll_window)) {
            let visible = scroll_top_visible(scroll_offset(&scroll_window), threshold);
            set_class(&button, "visible", visible);
        }
    })?;

    let click_window = window.clone();
    let on_click = Listener::new(&elements.scroll_to_top, "click", move |_| {
        smooth_scroll_to(&click_window, 0.0);
    })?;

    Ok(vec![on_scroll, on_click])
}
