//! Detail views rendered into the modal body.
//!
//! Inline styles lean on the page's CSS variables so the dialog follows
//! the active theme.

use dioxus::prelude::*;

use super::catalog::{CertificateAsset, CertificateRecord, ProjectRecord};

const HEADING_STYLE: &str = "font-size: 1.3rem; margin-bottom: 1rem; color: var(--primary-color);";
const BODY_STYLE: &str = "color: var(--text-light); line-height: 1.8;";

/// Titled block inside the project view.
#[component]
fn DetailSection(
    heading: &'static str,
    /// Bottom spacing; off for the final block
    #[props(default = true)]
    spaced: bool,
    children: Element,
) -> Element {
    rsx! {
        div { style: if spaced { "margin-bottom: 2rem;" } else { "" },
            h3 { style: HEADING_STYLE, "{heading}" }
            {children}
        }
    }
}

/// Full project write-up: overview, features, stack, challenges, outcome.
#[component]
pub fn ProjectDetail(project: &'static ProjectRecord) -> Element {
    rsx! {
        h2 { style: "font-size: 2rem; margin-bottom: 0.5rem; color: var(--text-color);",
            "{project.title}"
        }
        p { style: "color: var(--text-light); margin-bottom: 2rem;", "{project.date}" }

        DetailSection { heading: "Overview",
            p { style: BODY_STYLE, "{project.full_description}" }
        }

        DetailSection { heading: "Key Features",
            ul { style: "list-style: none; padding: 0;",
                for feature in project.features.iter() {
                    li { style: "padding: 0.5rem 0; color: var(--text-light); display: flex; align-items: start; gap: 0.5rem;",
                        i {
                            class: "fas fa-check-circle",
                            style: "color: var(--primary-color); margin-top: 0.3rem;",
                        }
                        span { "{feature}" }
                    }
                }
            }
        }

        DetailSection { heading: "Technologies Used",
            div { style: "display: flex; flex-wrap: wrap; gap: 0.5rem;",
                for tech in project.technologies.iter() {
                    span {
                        class: "tech-tag",
                        style: "background: var(--bg-secondary); padding: 8px 16px; border-radius: 20px; color: var(--primary-color); border: 1px solid var(--border-color);",
                        "{tech}"
                    }
                }
            }
        }

        DetailSection { heading: "Challenges & Solutions",
            p { style: BODY_STYLE, "{project.challenges}" }
        }

        DetailSection { heading: "Outcome", spaced: false,
            p { style: BODY_STYLE, "{project.outcome}" }
        }
    }
}

/// Certificate title plus the scanned document or image.
#[component]
pub fn CertificateDetail(certificate: &'static CertificateRecord) -> Element {
    let viewer = match certificate.asset {
        CertificateAsset::Document { path } => rsx! {
            iframe {
                src: path,
                width: "100%",
                height: "600px",
                style: "border: none; border-radius: 10px;",
            }
        },
        CertificateAsset::Image { path, alt } => rsx! {
            img {
                src: path,
                alt: alt,
                style: "width: 100%; border-radius: 10px;",
            }
        },
    };

    rsx! {
        h2 { style: "color: var(--primary-color); margin-bottom: 1rem;", "{certificate.title}" }
        {viewer}
    }
}
