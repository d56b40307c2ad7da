//! Transient screen effects shared by every screen
//!
//! - Particles: sparkles and answer bursts
//! - Ripples: click feedback
//! - Trail: fading dots behind the pointer

mod particles;
mod ripple;
mod trail;

pub use particles::{Emission, Particle, ParticleSystem, BURST_COUNT, GRAVITY};
pub use ripple::{Ripple, Ripples};
pub use trail::{Trail, TrailPoint, TRAIL_CAPACITY};

use rand::Rng;

use crate::color::{palette, Rgb};
use crate::geometry::Vec2;

/// The three effect collections, stepped together once per frame
#[derive(Debug)]
pub struct Effects {
    pub particles: ParticleSystem,
    pub ripples: Ripples,
    pub trail: Trail,
}

impl Default for Effects {
    fn default() -> Self {
        Self::new()
    }
}

impl Effects {
    pub fn new() -> Self {
        Self {
            particles: ParticleSystem::new(),
            ripples: Ripples::new(palette::GLINT),
            trail: Trail::new(palette::GLINT),
        }
    }

    /// Answer feedback: a particle burst plus a ripple at the same point
    pub fn burst<R: Rng>(&mut self, rng: &mut R, center: Vec2, color: Rgb) {
        self.particles.burst(rng, center, color);
        self.ripples.spawn(rng, center);
    }

    /// Advance particles and ripples. The trail is stepped separately since it
    /// needs the pointer position.
    pub fn step(&mut self) {
        self.particles.step();
        self.ripples.step();
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.ripples.clear();
        self.trail.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty() && self.ripples.is_empty() && self.trail.is_empty()
    }
}
