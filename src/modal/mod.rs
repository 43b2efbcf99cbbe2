//! Detail modal: one lookup-and-render path for projects and certificates.
//!
//! The controller owns the open flag and rendered body; the DOM layer
//! mirrors both onto the dialog and the page's scroll lock.

pub mod catalog;
pub mod components;

use dioxus::prelude::*;

use catalog::{CertificateRecord, ProjectRecord};
use components::{CertificateDetail, ProjectDetail};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailKind {
    Project,
    Certificate,
}

impl DetailKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailKind::Project => "project",
            DetailKind::Certificate => "certificate",
        }
    }
}

/// A catalog entry resolved for display
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DetailView {
    Project(&'static ProjectRecord),
    Certificate(&'static CertificateRecord),
}

impl DetailView {
    pub fn resolve(kind: DetailKind, id: &str) -> Option<Self> {
        match kind {
            DetailKind::Project => catalog::project(id).map(DetailView::Project),
            DetailKind::Certificate => catalog::certificate(id).map(DetailView::Certificate),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DetailView::Project(project) => project.title,
            DetailView::Certificate(certificate) => certificate.title,
        }
    }

    /// HTML for the modal body
    pub fn render(&self) -> String {
        match *self {
            DetailView::Project(project) => {
                dioxus::ssr::render_element(rsx! { ProjectDetail { project } })
            }
            DetailView::Certificate(certificate) => {
                dioxus::ssr::render_element(rsx! { CertificateDetail { certificate } })
            }
        }
    }
}

/// What dismissed the modal. Every trigger closes the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseTrigger {
    Explicit,
    Backdrop,
    Escape,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub open: bool,
    pub body: String,
}

#[derive(Debug, Default)]
pub struct ModalController {
    state: ModalState,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render and open an entry.
    ///
    /// Unknown ids leave the modal untouched and return `None`.
    pub fn open(&mut self, kind: DetailKind, id: &str) -> Option<&str> {
        let Some(view) = DetailView::resolve(kind, id) else {
            tracing::debug!("No {} with id {:?}, modal not opened", kind.as_str(), id);
            return None;
        };

        tracing::debug!("Opening {} modal: {}", kind.as_str(), view.title());
        self.state.body = view.render();
        self.state.open = true;
        Some(&self.state.body)
    }

    /// Returns whether the modal was open.
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        let was_open = self.state.open;
        self.state.open = false;
        if was_open {
            tracing::debug!("Modal closed ({:?})", trigger);
        }
        was_open
    }

    pub fn is_open(&self) -> bool {
        self.state.open
    }

    pub fn body(&self) -> &str {
        &self.state.body
    }

    /// Background scrolling is suppressed while the modal is open
    pub fn scroll_locked(&self) -> bool {
        self.state.open
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_view_renders_all_sections() {
        let html = DetailView::resolve(DetailKind::Project, "project2")
            .expect("project2 exists")
            .render();

        assert!(html.contains("Weather Forecast Web App"));
        assert!(html.contains("Jan 2025 - Present"));
        assert!(html.contains("Overview"));
        assert!(html.contains("Key Features"));
        assert!(html.contains("Technologies Used"));
        assert!(html.contains("Outcome"));
        assert_eq!(html.matches("<li").count(), 5);
        assert_eq!(html.matches("tech-tag").count(), 4);
    }

    #[test]
    fn test_document_certificate_uses_frame() {
        let html = DetailView::resolve(DetailKind::Certificate, "sql")
            .expect("sql exists")
            .render();

        assert!(html.contains("<iframe"));
        assert!(html.contains("assets/certificates/intellipaat-certificate.pdf"));
    }

    #[test]
    fn test_image_certificate_uses_img() {
        let html = DetailView::resolve(DetailKind::Certificate, "ai_ml")
            .expect("ai_ml exists")
            .render();

        assert!(html.contains("<img"));
        assert!(html.contains("assets/certificates/vityarth-9b78f4a5af.png"));
        assert!(!html.contains("<iframe"));
    }

    #[test]
    fn test_kinds_do_not_cross_resolve() {
        assert!(DetailView::resolve(DetailKind::Certificate, "project1").is_none());
        assert!(DetailView::resolve(DetailKind::Project, "python").is_none());
    }

    #[test]
    fn test_unknown_id_keeps_previous_content() {
        let mut modal = ModalController::new();
        modal.open(DetailKind::Project, "project4");
        let before = modal.state().clone();

        assert!(modal.open(DetailKind::Certificate, "nope").is_none());
        assert_eq!(modal.state(), &before);
    }

    #[test]
    fn test_close_when_closed_reports_false() {
        let mut modal = ModalController::new();
        assert!(!modal.close(CloseTrigger::Escape));
        assert!(!modal.is_open());
    }
}
