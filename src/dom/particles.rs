//! Fills the particle container once at startup.

use web_sys::HtmlElement;

use crate::config::ParticleConfig;
use crate::error::SiteError;
use crate::particles;

pub fn populate(container: &HtmlElement, config: &ParticleConfig) -> Result<(), SiteError> {
    let field = particles::generate(&mut rand::thread_rng(), config);
    container.insert_adjacent_html("beforeend", &particles::render(&field, &config.color))?;
    tracing::debug!("Rendered {} particles", field.len());
    Ok(())
}
