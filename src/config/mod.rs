//! Configuration management
//!
//! Every threshold, cadence and selector the controllers use lives here.
//! Defaults reproduce the published page; a page may override any field
//! with a JSON block (see [`CONFIG_ELEMENT_ID`]).

use anyhow::Result;
use serde::Deserialize;

/// Id of the optional `<script type="application/json">` override block
pub const CONFIG_ELEMENT_ID: &str = "site-config";

const DEFAULT_THEME_KEY: &str = "theme";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// localStorage key holding "light" or "dark"
    pub theme_storage_key: String,
    pub nav: NavConfig,
    /// Offset past which the scroll-to-top control is shown
    pub scroll_top_threshold: f64,
    pub typing: TypingConfig,
    pub particles: ParticleConfig,
    pub selectors: SelectorConfig,
    /// `tracing_subscriber::EnvFilter` directive string
    pub log_filter: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: DEFAULT_THEME_KEY.to_string(),
            nav: NavConfig::default(),
            scroll_top_threshold: 300.0,
            typing: TypingConfig::default(),
            particles: ParticleConfig::default(),
            selectors: SelectorConfig::default(),
            log_filter: "portfolio_site=info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Height of the fixed header, subtracted from smooth-scroll targets
    pub header_offset: f64,
    /// Offset past which the navbar gets the `scrolled` class
    pub scrolled_threshold: f64,
    /// Lead distance used by the section spy
    pub spy_offset: f64,
    /// Minimum interval between scroll handler runs (0 runs on every event)
    pub scroll_throttle_ms: u32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            scrolled_threshold: 100.0,
            spy_offset: 100.0,
            scroll_throttle_ms: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub phrases: Vec<String>,
    pub type_ms: u32,
    pub delete_ms: u32,
    pub hold_full_ms: u32,
    pub hold_empty_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            phrases: [
                "AI/ML Developer",
                "Full-Stack Engineer",
                "Data Science Enthusiast",
                "Problem Solver",
                "Tech Innovator",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            type_ms: 100,
            delete_ms: 50,
            hold_full_ms: 2000,
            hold_empty_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
    /// Upper bound (exclusive) of the particle diameter in px
    pub max_size: f64,
    /// Shortest float animation, seconds
    pub min_duration: f64,
    /// Random extra duration added to `min_duration`, seconds
    pub duration_spread: f64,
    /// Upper bound (exclusive) of the animation start delay, seconds
    pub max_delay: f64,
    pub color: String,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 50,
            max_size: 4.0,
            min_duration: 10.0,
            duration_spread: 10.0,
            max_delay: 5.0,
            color: "rgba(99, 102, 241, 0.5)".to_string(),
        }
    }
}

/// CSS selectors for every node the page markup must provide
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub theme_toggle: String,
    pub theme_icon: String,
    pub nav_toggle: String,
    pub nav_menu: String,
    pub nav_links: String,
    pub navbar: String,
    pub sections: String,
    pub scroll_to_top: String,
    pub typing_text: String,
    pub particles: String,
    pub modal: String,
    pub modal_body: String,
    /// Optional close buttons inside the modal
    pub modal_close: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            theme_toggle: "#themeToggle".to_string(),
            theme_icon: "#themeToggle i".to_string(),
            nav_toggle: "#navToggle".to_string(),
            nav_menu: "#navMenu".to_string(),
            nav_links: ".nav-link".to_string(),
            navbar: ".navbar".to_string(),
            sections: "section[id]".to_string(),
            scroll_to_top: "#scrollToTop".to_string(),
            typing_text: ".typing-text".to_string(),
            particles: "#particles".to_string(),
            modal: "#projectModal".to_string(),
            modal_body: "#modalBody".to_string(),
            modal_close: ".modal-close".to_string(),
        }
    }
}

/// Load configuration: built-in defaults, then the optional JSON overrides.
pub fn load_config(overrides: Option<&str>) -> Result<SiteConfig> {
    let mut builder = ::config::Config::builder()
        .set_default("theme_storage_key", DEFAULT_THEME_KEY)?;

    if let Some(json) = overrides.map(str::trim).filter(|s| !s.is_empty()) {
        builder = builder.add_source(::config::File::from_str(
            json,
            ::config::FileFormat::Json,
        ));
    }

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_published_page() {
        let config = load_config(None).expect("config should load");

        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.theme_storage_key, "theme");
        assert_eq!(config.nav.header_offset, 80.0);
        assert_eq!(config.nav.scrolled_threshold, 100.0);
        assert_eq!(config.scroll_top_threshold, 300.0);
        assert_eq!(config.typing.phrases.len(), 5);
        assert_eq!(config.particles.count, 50);
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let config = load_config(Some("   \n")).expect("config should load");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_sibling_defaults() {
        let json = r##"{
            "nav": { "header_offset": 64 },
            "typing": { "phrases": ["Rustacean"] },
            "selectors": { "modal": "#detailModal" }
        }"##;

        let config = load_config(Some(json)).expect("config should load");

        assert_eq!(config.nav.header_offset, 64.0);
        assert_eq!(config.nav.scrolled_threshold, 100.0);
        assert_eq!(config.typing.phrases, vec!["Rustacean".to_string()]);
        assert_eq!(config.typing.type_ms, 100);
        assert_eq!(config.selectors.modal, "#detailModal");
        assert_eq!(config.selectors.modal_body, "#modalBody");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(load_config(Some("{ not json")).is_err());
    }
}
