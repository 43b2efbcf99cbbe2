//! Modal wiring: open/close, backdrop click, escape key, scroll lock.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, KeyboardEvent};

use super::contract::PageElements;
use super::listener::Listener;
use super::set_class;
use crate::error::SiteError;
use crate::modal::{CloseTrigger, DetailKind, ModalController};
use crate::page::is_backdrop_click;

/// Modal controller bound to its dialog and the page body
pub struct ModalBinding {
    controller: RefCell<ModalController>,
    modal: HtmlElement,
    modal_body: HtmlElement,
    page_body: HtmlElement,
}

impl ModalBinding {
    pub fn new(elements: &PageElements) -> Self {
        Self {
            controller: RefCell::new(ModalController::new()),
            modal: elements.modal.clone(),
            modal_body: elements.modal_body.clone(),
            page_body: elements.body.clone(),
        }
    }

    /// Returns false for unknown ids, which leave the page untouched.
    pub fn open(&self, kind: DetailKind, id: &str) -> bool {
        let mut controller = self.controller.borrow_mut();
        match controller.open(kind, id) {
            Some(html) => self.modal_body.set_inner_html(html),
            None => return false,
        }
        self.sync(controller.is_open());
        true
    }

    pub fn close(&self, trigger: CloseTrigger) {
        let mut controller = self.controller.borrow_mut();
        controller.close(trigger);
        self.sync(controller.is_open());
    }

    fn sync(&self, open: bool) {
        set_class(&self.modal, "active", open);
        let style = self.page_body.style();
        let result = if open {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if result.is_err() {
            tracing::debug!("Could not update page scroll lock");
        }
    }
}

pub fn bind(
    binding: &Rc<ModalBinding>,
    elements: &PageElements,
    document: &Document,
) -> Result<Vec<Listener>, SiteError> {
    let mut listeners = Vec::new();

    {
        let binding = Rc::clone(binding);
        let container = JsValue::from(elements.modal.clone());
        listeners.push(Listener::new(&elements.modal, "click", move |event| {
            let target = event.target().map(JsValue::from);
            if is_backdrop_click(target.as_ref(), &container) {
                binding.close(CloseTrigger::Backdrop);
            }
        })?);
    }

    {
        let binding = Rc::clone(binding);
        listeners.push(Listener::new(document, "keydown", move |event| {
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|key| key.key() == "Escape");
            if is_escape {
                binding.close(CloseTrigger::Escape);
            }
        })?);
    }

    for button in &elements.modal_close {
        let binding = Rc::clone(binding);
        listeners.push(Listener::new(button, "click", move |_| {
            binding.close(CloseTrigger::Explicit);
        })?);
    }

    for trigger in &elements.detail_triggers {
        let binding = Rc::clone(binding);
        let kind = trigger.kind;
        let id = trigger.id.clone();
        listeners.push(Listener::new(&trigger.element, "click", move |event| {
            event.prevent_default();
            binding.open(kind, &id);
        })?);
    }

    Ok(listeners)
}
