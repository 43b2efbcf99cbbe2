//! Browser bindings (wasm32 only).
//!
//! `start` runs when the module is instantiated: it loads configuration,
//! resolves the page contract and wires every controller. The wired site
//! lives in a thread-local until `shutdown` drops it, which removes all
//! listeners and stops the typing loop.

mod contract;
mod listener;
mod logging;
mod modal;
mod nav;
mod particles;
mod scroll_top;
mod theme;
mod typing;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions, Window};

use crate::config::{load_config, SiteConfig, CONFIG_ELEMENT_ID};
use crate::error::SiteError;
use crate::modal::{CloseTrigger, DetailKind};
use crate::page::is_loading;
use crate::typing::TypingAnimator;
use contract::PageElements;
use listener::Listener;
use modal::ModalBinding;
use typing::TypingHandle;

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

struct Site {
    typing: TypingHandle,
    _globals: Globals,
    _listeners: Vec<Listener>,
}

type GlobalFn = Closure<dyn Fn(JsValue)>;

/// Window-level functions for inline `onclick` markup
struct Globals {
    window: Window,
    installed: Vec<(&'static str, GlobalFn)>,
}

impl Globals {
    fn install(window: &Window, modal: &Rc<ModalBinding>) -> Result<Self, SiteError> {
        let opener = |kind: DetailKind| -> GlobalFn {
            let modal = Rc::clone(modal);
            Closure::wrap(Box::new(move |id: JsValue| match id.as_string() {
                Some(id) => {
                    modal.open(kind, &id);
                }
                None => tracing::debug!("{} opener called without an id", kind.as_str()),
            }) as Box<dyn Fn(JsValue)>)
        };
        let closer: GlobalFn = {
            let modal = Rc::clone(modal);
            Closure::wrap(Box::new(move |_: JsValue| modal.close(CloseTrigger::Explicit))
                as Box<dyn Fn(JsValue)>)
        };

        let installed = vec![
            ("openModal", opener(DetailKind::Project)),
            ("openCertificate", opener(DetailKind::Certificate)),
            ("closeModal", closer),
        ];
        for (name, callback) in &installed {
            js_sys::Reflect::set(window, &JsValue::from_str(name), callback.as_ref())?;
        }

        Ok(Self {
            window: window.clone(),
            installed,
        })
    }
}

impl Drop for Globals {
    fn drop(&mut self) {
        for (name, _) in &self.installed {
            if js_sys::Reflect::delete_property(&self.window, &JsValue::from_str(name)).is_err() {
                tracing::debug!("Could not remove window.{}", name);
            }
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or(SiteError::NoWindow)?;
    let document = window.document().ok_or(SiteError::NoDocument)?;

    if is_loading(&document.ready_state()) {
        let deferred_document = document.clone();
        let on_ready = Closure::once_into_js(move |_: web_sys::Event| {
            if let Err(e) = boot(&window, &deferred_document) {
                web_sys::console::error_1(&e);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        return Ok(());
    }

    boot(&window, &document)
}

/// Tear the site down: listeners removed, globals deleted, typing stopped.
#[wasm_bindgen]
pub fn shutdown() {
    let site = SITE.with(|site| site.borrow_mut().take());
    if let Some(site) = site {
        site.typing.stop();
        tracing::info!("Site shut down");
    }
}

fn boot(window: &Window, document: &Document) -> Result<(), JsValue> {
    let overrides = contract::config_overrides(document, CONFIG_ELEMENT_ID);
    let config = load_config(overrides.as_deref())
        .map_err(|e| JsValue::from(js_sys::Error::new(&format!("{:#}", e))))?;

    logging::init(&config.log_filter);
    tracing::info!(
        "Starting portfolio-site v{} ({})",
        crate::VERSION,
        crate::GIT_SHA
    );

    mount(window, document, &config).map_err(|e| {
        tracing::error!("Site failed to start: {}", e);
        JsValue::from(e)
    })
}

fn mount(window: &Window, document: &Document, config: &SiteConfig) -> Result<(), SiteError> {
    // Drop earlier bindings first so their globals are not deleted after ours
    if SITE.with(|site| site.borrow_mut().take()).is_some() {
        tracing::warn!("Site mounted twice; previous bindings dropped");
    }

    let elements = PageElements::resolve(document, &config.selectors)?;
    let animator = TypingAnimator::from_config(&config.typing)?;

    let mut listeners = theme::bind(&elements, window, &config.theme_storage_key)?;
    listeners.extend(nav::bind(&elements, window, &config.nav)?);
    listeners.extend(scroll_top::bind(
        &elements,
        window,
        config.scroll_top_threshold,
        config.nav.scroll_throttle_ms,
    )?);

    let modal = Rc::new(ModalBinding::new(&elements));
    listeners.extend(modal::bind(&modal, &elements, document)?);
    let globals = Globals::install(window, &modal)?;

    particles::populate(&elements.particles, &config.particles)?;
    let typing = typing::start(elements.typing_text.clone(), animator);

    tracing::info!(
        "Site ready: {} nav links, {} sections, {} detail triggers",
        elements.nav_links.len(),
        elements.sections.len(),
        elements.detail_triggers.len()
    );

    SITE.with(|site| {
        *site.borrow_mut() = Some(Site {
            typing,
            _globals: globals,
            _listeners: listeners,
        });
    });
    Ok(())
}

pub(crate) fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        tracing::debug!("Could not set class {}: {:?}", class, e);
    }
}

pub(crate) fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub(crate) fn now_ms(window: &Window) -> f64 {
    window.performance().map(|p| p.now()).unwrap_or(0.0)
}

pub(crate) fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
