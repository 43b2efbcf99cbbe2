//! Portfolio Site - interactive layer of a personal portfolio page
//!
//! Compiled to WebAssembly and loaded by a static page. This library provides:
//! - Light/dark theme toggle persisted in localStorage
//! - Navigation menu, smooth scrolling and section-spy link highlighting
//! - Scroll-to-top control
//! - Typing animation over a list of phrases
//! - Decorative particle background
//! - Project and certificate detail modal (Dioxus rsx rendered to HTML)
//!
//! Controller state and rendering are platform independent and tested on
//! the host; `dom` binds them to the page on wasm32.

pub mod config;
pub mod error;
pub mod modal;
pub mod nav;
pub mod page;
pub mod particles;
pub mod scroll;
pub mod theme;
pub mod typing;

#[cfg(target_arch = "wasm32")]
mod dom;

pub use error::SiteError;

/// Build version, injected by build.rs
pub const VERSION: &str = env!("PORTFOLIO_VERSION");

/// Short git SHA of the build, injected by build.rs
pub const GIT_SHA: &str = env!("PORTFOLIO_GIT_SHA");
