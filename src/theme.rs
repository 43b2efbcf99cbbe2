//! Theme management with localStorage persistence.
//!
//! Provides the light/dark preference, its persistence seam, and the
//! controller the DOM layer drives from the toggle button.

use std::cell::RefCell;
use std::collections::HashMap;

/// Theme options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unknown values fall back to light
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon shown on the toggle: the theme you would switch to
    pub fn icon_class(&self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }
}

/// Key/value persistence for user preferences.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;

    /// Returns false when the value could not be written
    fn save(&self, key: &str, value: &str) -> bool;
}

/// In-process store, used by tests and when the browser denies storage access.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> bool {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }
}

/// Owns the current theme and keeps the store in sync with it.
pub struct ThemeController<S> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            current: Theme::default(),
        }
    }

    /// Read the persisted preference once; absent means light.
    pub fn initialize(&mut self) -> Theme {
        self.current = self
            .store
            .load(&self.key)
            .map(|value| Theme::parse(&value))
            .unwrap_or_default();
        tracing::debug!("Theme initialized: {}", self.current.as_str());
        self.current
    }

    /// Flip light/dark and persist the new value.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        if !self.store.save(&self.key, self.current.as_str()) {
            tracing::debug!("Theme preference not persisted");
        }
        self.current
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
