//! Navigation wiring: hamburger, link clicks, navbar styling, section spy.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{HtmlElement, Window};

use super::contract::PageElements;
use super::listener::Listener;
use super::{now_ms, scroll_offset, set_class, smooth_scroll_to};
use crate::config::NavConfig;
use crate::error::SiteError;
use crate::nav::{is_scrolled, scroll_target, NavState, SectionBounds};
use crate::scroll::ScrollThrottle;

pub fn bind(
    elements: &PageElements,
    window: &Window,
    config: &NavConfig,
) -> Result<Vec<Listener>, SiteError> {
    let hrefs = elements
        .nav_links
        .iter()
        .map(|link| link.get_attribute("href").unwrap_or_default())
        .collect();
    let state = Rc::new(RefCell::new(NavState::new(hrefs)));
    let links = Rc::new(elements.nav_links.clone());
    let sections = elements.sections.clone();

    let mut listeners = Vec::with_capacity(links.len() + 2);

    {
        let state = Rc::clone(&state);
        let toggle = elements.nav_toggle.clone();
        let menu = elements.nav_menu.clone();
        listeners.push(Listener::new(&elements.nav_toggle, "click", move |_| {
            let open = state.borrow_mut().toggle_menu();
            set_class(&menu, "active", open);
            set_class(&toggle, "active", open);
        })?);
    }

    for (index, link) in elements.nav_links.iter().enumerate() {
        let state = Rc::clone(&state);
        let links = Rc::clone(&links);
        let anchor = elements.link_targets.get(index).cloned().flatten();
        let toggle = elements.nav_toggle.clone();
        let menu = elements.nav_menu.clone();
        let window = window.clone();
        let header_offset = config.header_offset;

        listeners.push(Listener::new(link, "click", move |event| {
            event.prevent_default();

            let target = state.borrow_mut().select(index).map(str::to_string);
            set_class(&menu, "active", false);
            set_class(&toggle, "active", false);
            render_links(&links, &state.borrow());

            let Some(id) = target else {
                return;
            };
            match &anchor {
                Some(anchor) => {
                    let top = f64::from(anchor.offset_top());
                    smooth_scroll_to(&window, scroll_target(top, header_offset));
                }
                None => tracing::debug!("Nav link points at missing anchor #{}", id),
            }
        })?);
    }

    {
        let navbar = elements.navbar.clone();
        let scroll_window = window.clone();
        let scrolled_threshold = config.scrolled_threshold;
        let spy_offset = config.spy_offset;
        let mut throttle = ScrollThrottle::new(config.scroll_throttle_ms);

        listeners.push(Listener::new(window, "scroll", move |_| {
            if !throttle.ready(now_ms(&scroll_window)) {
                return;
            }
            let offset = scroll_offset(&scroll_window);
            set_class(&navbar, "scrolled", is_scrolled(offset, scrolled_threshold));

            let bounds = section_bounds(&sections);
            if state.borrow_mut().spy(offset, &bounds, spy_offset) {
                render_links(&links, &state.borrow());
            }
        })?);
    }

    Ok(listeners)
}

fn section_bounds(sections: &[HtmlElement]) -> Vec<SectionBounds> {
    sections
        .iter()
        .map(|section| {
            SectionBounds::new(
                section.id(),
                f64::from(section.offset_top()),
                f64::from(section.offset_height()),
            )
        })
        .collect()
}

fn render_links(links: &[HtmlElement], state: &NavState) {
    for (index, link) in links.iter().enumerate() {
        set_class(link, "active", state.is_active(index));
    }
}
