//! Cursor trail
//!
//! A bounded queue of fading dots following the pointer. Eviction is purely
//! count-based: a dot may reach zero opacity and still occupy a slot.

use std::collections::VecDeque;

use rand::Rng;

use crate::color::{alpha, Rgb};
use crate::geometry::Vec2;
use crate::render::DrawCommand;

/// Maximum number of trail points kept
pub const TRAIL_CAPACITY: usize = 60;

const START_ALPHA: f32 = 180.0;
const FADE_PER_FRAME: f32 = 3.0;
const SHRINK_PER_FRAME: f32 = 0.985;
const JITTER: f32 = 0.5;
const RADIUS_RANGE: (f32, f32) = (2.0, 4.0);

#[derive(Debug, Clone)]
pub struct TrailPoint {
    pub position: Vec2,
    pub alpha: f32,
    pub radius: f32,
}

#[derive(Debug)]
pub struct Trail {
    points: VecDeque<TrailPoint>,
    color: Rgb,
}

impl Trail {
    pub fn new(color: Rgb) -> Self {
        Self {
            points: VecDeque::with_capacity(TRAIL_CAPACITY + 1),
            color,
        }
    }

    /// Age every existing point, then append one at `pointer` with sub-unit jitter
    pub fn step<R: Rng>(&mut self, rng: &mut R, pointer: Vec2) {
        for point in &mut self.points {
            point.alpha = (point.alpha - FADE_PER_FRAME).max(0.0);
            point.radius *= SHRINK_PER_FRAME;
        }

        let jitter = Vec2::new(
            rng.gen_range(-JITTER..JITTER),
            rng.gen_range(-JITTER..JITTER),
        );
        self.points.push_back(TrailPoint {
            position: pointer + jitter,
            alpha: START_ALPHA,
            radius: rng.gen_range(RADIUS_RANGE.0..RADIUS_RANGE.1),
        });
        while self.points.len() > TRAIL_CAPACITY {
            self.points.pop_front();
        }
    }

    /// Oldest first, so newer dots paint over older ones
    pub fn draw(&self, out: &mut Vec<DrawCommand>) {
        out.extend(
            self.points
                .iter()
                .filter(|p| p.alpha > 0.0)
                .map(|p| DrawCommand::Circle {
                    center: p.position,
                    radius: p.radius,
                    color: self.color,
                    alpha: alpha(p.alpha),
                }),
        );
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}
