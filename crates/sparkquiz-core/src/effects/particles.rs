//! Point-sprite particles
//!
//! Particles fly in a random direction under constant gravity and fade as
//! their life counter runs out. There is no population cap: every particle
//! dies when its counter reaches zero.

use std::f32::consts::TAU;

use rand::Rng;

use crate::color::{alpha, Rgb};
use crate::geometry::Vec2;
use crate::render::DrawCommand;

/// Downward acceleration applied to every particle (units/frame²)
pub const GRAVITY: f32 = 0.05;

/// Life at or above which a particle is fully opaque
const FULL_OPACITY_LIFE: f32 = 90.0;

/// Answer-feedback burst
pub const BURST_COUNT: usize = 36;
const BURST_LIFE: f32 = 70.0;
const BURST_SCALE: f32 = 1.2;
const BURST_SPEED: (f32, f32) = (2.0, 4.0);

/// Twinkle flicker: `1 - DEPTH + DEPTH * sin(frame * RATE + i)`
const TWINKLE_RATE: f32 = 0.3;
const TWINKLE_DEPTH: f32 = 0.3;

/// Base sprite diameter range before scaling
const SIZE_RANGE: (f32, f32) = (2.0, 4.0);

/// Parameters shared by every particle of one emission
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emission {
    pub color: Rgb,
    /// Multiplier applied to the random base size
    pub scale: f32,
    /// Initial speed along the random direction
    pub speed: f32,
    /// Life in frames
    pub life: f32,
    pub twinkle: bool,
}

impl Emission {
    /// Twinkling sparkle of the given color
    pub fn sparkle(color: Rgb, scale: f32, speed: f32, life: f32) -> Self {
        Self {
            color,
            scale,
            speed,
            life,
            twinkle: true,
        }
    }
}

/// A single particle
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Remaining life in frames
    pub life: f32,
    /// Current opacity (0.0 to 255.0)
    pub alpha: f32,
    pub color: Rgb,
    /// Sprite diameter
    pub size: f32,
    pub twinkle: bool,
}

impl Particle {
    fn update(&mut self) {
        self.velocity += self.acceleration;
        self.position += self.velocity;
        self.life -= 1.0;
        self.alpha = (self.life / FULL_OPACITY_LIFE * 255.0).clamp(0.0, 255.0);
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Owns every live particle
#[derive(Debug, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create one particle at `position` heading in a uniformly random direction
    pub fn emit<R: Rng>(&mut self, rng: &mut R, position: Vec2, emission: Emission) {
        let angle = rng.gen_range(0.0..TAU);
        self.particles.push(Particle {
            position,
            velocity: Vec2::from_angle(angle, emission.speed),
            acceleration: Vec2::new(0.0, GRAVITY),
            life: emission.life,
            alpha: 255.0,
            color: emission.color,
            size: rng.gen_range(SIZE_RANGE.0..SIZE_RANGE.1) * emission.scale,
            twinkle: emission.twinkle,
        });
    }

    /// Standard answer-feedback burst: 36 twinkling particles from `center`
    pub fn burst<R: Rng>(&mut self, rng: &mut R, center: Vec2, color: Rgb) {
        for _ in 0..BURST_COUNT {
            let speed = rng.gen_range(BURST_SPEED.0..BURST_SPEED.1);
            self.emit(
                rng,
                center,
                Emission::sparkle(color, BURST_SCALE, speed, BURST_LIFE),
            );
        }
    }

    /// Advance one frame and drop every particle whose life ran out
    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.update();
        }
        self.particles.retain(Particle::is_alive);
    }

    /// Emit one filled circle per live particle
    pub fn draw(&self, frame: u64, out: &mut Vec<DrawCommand>) {
        for (i, p) in self.particles.iter().enumerate() {
            let flicker = if p.twinkle {
                twinkle_factor(frame, i)
            } else {
                1.0
            };
            out.push(DrawCommand::Circle {
                center: p.position,
                radius: p.size / 2.0,
                color: p.color,
                alpha: alpha(p.alpha * flicker),
            });
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

/// Opacity multiplier for twinkling particle `index` on `frame`
fn twinkle_factor(frame: u64, index: usize) -> f32 {
    let phase = frame as f32 * TWINKLE_RATE + index as f32;
    1.0 - TWINKLE_DEPTH + TWINKLE_DEPTH * phase.sin()
}
