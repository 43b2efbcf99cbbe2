//! Required page nodes, resolved once at startup.
//!
//! This is the only place that queries the document. Controllers receive
//! already-resolved elements, so missing markup fails at boot with the
//! name of the node instead of at first use.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::SelectorConfig;
use crate::error::SiteError;
use crate::modal::DetailKind;
use crate::page::{link_targets, require};

/// Element carrying a `data-project` or `data-certificate` attribute
pub struct DetailTrigger {
    pub kind: DetailKind,
    pub id: String,
    pub element: HtmlElement,
}

pub struct PageElements {
    pub root: Element,
    pub body: HtmlElement,
    pub theme_toggle: HtmlElement,
    pub theme_icon: Element,
    pub nav_toggle: HtmlElement,
    pub nav_menu: HtmlElement,
    pub nav_links: Vec<HtmlElement>,
    /// Scroll destination per nav link, by anchor id; `None` when absent
    pub link_targets: Vec<Option<HtmlElement>>,
    pub navbar: HtmlElement,
    pub sections: Vec<HtmlElement>,
    pub scroll_to_top: HtmlElement,
    pub typing_text: HtmlElement,
    pub particles: HtmlElement,
    pub modal: HtmlElement,
    pub modal_body: HtmlElement,
    pub modal_close: Vec<HtmlElement>,
    pub detail_triggers: Vec<DetailTrigger>,
}

impl PageElements {
    pub fn resolve(document: &Document, selectors: &SelectorConfig) -> Result<Self, SiteError> {
        let root = require(document.document_element(), "root", ":root")?;
        let body = require(document.body(), "body", "body")?;

        let nav_links = all(document, "nav_links", &selectors.nav_links)?;
        if nav_links.is_empty() {
            return Err(SiteError::MissingElement {
                name: "nav_links",
                selector: selectors.nav_links.clone(),
            });
        }

        let hrefs: Vec<String> = nav_links
            .iter()
            .map(|link| link.get_attribute("href").unwrap_or_default())
            .collect();
        let targets = link_targets(&hrefs, |id| {
            document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        });

        let mut detail_triggers = triggers(document, DetailKind::Project, "data-project")?;
        detail_triggers.extend(triggers(
            document,
            DetailKind::Certificate,
            "data-certificate",
        )?);

        Ok(Self {
            root,
            body,
            theme_toggle: required(document, "theme_toggle", &selectors.theme_toggle)?,
            theme_icon: required_element(document, "theme_icon", &selectors.theme_icon)?,
            nav_toggle: required(document, "nav_toggle", &selectors.nav_toggle)?,
            nav_menu: required(document, "nav_menu", &selectors.nav_menu)?,
            nav_links,
            link_targets: targets,
            navbar: required(document, "navbar", &selectors.navbar)?,
            sections: all(document, "sections", &selectors.sections)?,
            scroll_to_top: required(document, "scroll_to_top", &selectors.scroll_to_top)?,
            typing_text: required(document, "typing_text", &selectors.typing_text)?,
            particles: required(document, "particles", &selectors.particles)?,
            modal: required(document, "modal", &selectors.modal)?,
            modal_body: required(document, "modal_body", &selectors.modal_body)?,
            modal_close: all(document, "modal_close", &selectors.modal_close)?,
            detail_triggers,
        })
    }
}

/// Text of the optional JSON configuration block
pub fn config_overrides(document: &Document, element_id: &str) -> Option<String> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.text_content())
}

fn required_element(
    document: &Document,
    name: &'static str,
    selector: &str,
) -> Result<Element, SiteError> {
    require(document.query_selector(selector)?, name, selector)
}

fn required(
    document: &Document,
    name: &'static str,
    selector: &str,
) -> Result<HtmlElement, SiteError> {
    required_element(document, name, selector)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SiteError::WrongElementType {
            name,
            selector: selector.to_string(),
        })
}

fn all(
    document: &Document,
    name: &'static str,
    selector: &str,
) -> Result<Vec<HtmlElement>, SiteError> {
    let nodes = document.query_selector_all(selector)?;
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .map(|node| {
            node.dyn_into::<HtmlElement>()
                .map_err(|_| SiteError::WrongElementType {
                    name,
                    selector: selector.to_string(),
                })
        })
        .collect()
}

fn triggers(
    document: &Document,
    kind: DetailKind,
    attribute: &str,
) -> Result<Vec<DetailTrigger>, SiteError> {
    let selector = format!("[{}]", attribute);
    let elements = all(document, "detail_trigger", &selector)?;
    Ok(elements
        .into_iter()
        .filter_map(|element| {
            let id = element.get_attribute(attribute)?;
            Some(DetailTrigger { kind, id, element })
        })
        .collect())
}
