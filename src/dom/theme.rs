//! Theme toggle wiring: `data-theme` on the root, icon swap, localStorage.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use web_sys::{Element, HtmlElement, Storage, Window};

use super::contract::PageElements;
use super::listener::Listener;
use crate::error::SiteError;
use crate::theme::{PreferenceStore, Theme, ThemeController};

/// Delay before the toggle's CSS animation is restored
const ANIMATION_RESTART_MS: u32 = 10;

/// Browser localStorage; private browsing may deny access entirely
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn new(window: &Window) -> Self {
        Self {
            storage: window.local_storage().ok().flatten(),
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) -> bool {
        match &self.storage {
            Some(storage) => storage.set_item(key, value).is_ok(),
            None => false,
        }
    }
}

pub fn bind(
    elements: &PageElements,
    window: &Window,
    storage_key: &str,
) -> Result<Vec<Listener>, SiteError> {
    let mut controller = ThemeController::new(LocalStorage::new(window), storage_key);
    let theme = controller.initialize();
    apply(&elements.root, &elements.theme_icon, theme)?;

    let controller = Rc::new(RefCell::new(controller));
    let root = elements.root.clone();
    let icon = elements.theme_icon.clone();
    let toggle = elements.theme_toggle.clone();

    let on_click = Listener::new(&elements.theme_toggle, "click", move |_| {
        let theme = controller.borrow_mut().toggle();
        if let Err(e) = apply(&root, &icon, theme) {
            tracing::warn!("Failed to apply theme {}: {}", theme.as_str(), e);
        }
        replay_animation(&toggle);
    })?;

    Ok(vec![on_click])
}

fn apply(root: &Element, icon: &Element, theme: Theme) -> Result<(), SiteError> {
    root.set_attribute("data-theme", theme.as_str())?;
    icon.set_class_name(theme.icon_class());
    Ok(())
}

/// Clearing then restoring `animation` restarts it
fn replay_animation(toggle: &HtmlElement) {
    let style = toggle.style();
    if style.set_property("animation", "none").is_err() {
        tracing::debug!("Could not clear toggle animation");
        return;
    }
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(ANIMATION_RESTART_MS).await;
        if style.remove_property("animation").is_err() {
            tracing::debug!("Could not restore toggle animation");
        }
    });
}
