//! Decorative particle background.
//!
//! Particles are generated once and rendered as absolutely positioned
//! dots; the `float` keyframes come from the page stylesheet.

use dioxus::prelude::*;
use rand::Rng;

use crate::config::ParticleConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Diameter in px
    pub size: f64,
    /// Horizontal position, percent of the container
    pub left: f64,
    /// Vertical position, percent of the container
    pub top: f64,
    /// Float animation period, seconds
    pub duration: f64,
    /// Animation start delay, seconds
    pub delay: f64,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, config: &ParticleConfig) -> Self {
        Self {
            size: rng.gen::<f64>() * config.max_size,
            left: rng.gen::<f64>() * 100.0,
            top: rng.gen::<f64>() * 100.0,
            duration: config.min_duration + rng.gen::<f64>() * config.duration_spread,
            delay: rng.gen::<f64>() * config.max_delay,
        }
    }

    pub fn style(&self, color: &str) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; background: {color}; \
             border-radius: 50%; left: {left}%; top: {top}%; \
             animation: float {duration}s ease-in-out infinite; animation-delay: {delay}s;",
            size = self.size,
            left = self.left,
            top = self.top,
            duration = self.duration,
            delay = self.delay,
        )
    }
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R, config: &ParticleConfig) -> Vec<Particle> {
    (0..config.count)
        .map(|_| Particle::random(rng, config))
        .collect()
}

#[component]
fn ParticleDots(particles: Vec<Particle>, color: String) -> Element {
    rsx! {
        for (i, particle) in particles.iter().enumerate() {
            div { key: "{i}", class: "particle", style: particle.style(&color) }
        }
    }
}

/// Markup for the particle container
pub fn render(particles: &[Particle], color: &str) -> String {
    dioxus::ssr::render_element(rsx! {
        ParticleDots { particles: particles.to_vec(), color: color.to_string() }
    })
}
