//! Expanding click ripples

use rand::Rng;

use crate::color::{alpha, Rgb};
use crate::geometry::Vec2;
use crate::render::DrawCommand;

const START_ALPHA: f32 = 200.0;
const GROWTH_PER_FRAME: f32 = 4.0;
const FADE_PER_FRAME: f32 = 6.0;
const STROKE_RANGE: (f32, f32) = (2.5, 3.5);

/// A hollow ring that grows while fading
#[derive(Debug, Clone)]
pub struct Ripple {
    pub position: Vec2,
    pub radius: f32,
    pub alpha: f32,
    pub stroke_width: f32,
}

/// Owns every live ripple
#[derive(Debug, Default)]
pub struct Ripples {
    ripples: Vec<Ripple>,
    color: Rgb,
}

impl Ripples {
    pub fn new(color: Rgb) -> Self {
        Self {
            ripples: Vec::new(),
            color,
        }
    }

    pub fn spawn<R: Rng>(&mut self, rng: &mut R, position: Vec2) {
        self.ripples.push(Ripple {
            position,
            radius: 0.0,
            alpha: START_ALPHA,
            stroke_width: rng.gen_range(STROKE_RANGE.0..STROKE_RANGE.1),
        });
    }

    /// Grow and fade every ripple; remove those that became invisible
    pub fn step(&mut self) {
        for ripple in &mut self.ripples {
            ripple.radius += GROWTH_PER_FRAME;
            ripple.alpha -= FADE_PER_FRAME;
        }
        self.ripples.retain(|r| r.alpha > 0.0);
    }

    pub fn draw(&self, out: &mut Vec<DrawCommand>) {
        out.extend(self.ripples.iter().map(|r| DrawCommand::CircleOutline {
            center: r.position,
            radius: r.radius,
            color: self.color,
            alpha: alpha(r.alpha),
            stroke: r.stroke_width,
        }));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ripple> {
        self.ripples.iter()
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    pub fn clear(&mut self) {
        self.ripples.clear();
    }
}
