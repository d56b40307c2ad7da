//! Bubble: a hollow circle drifting upward, slower and calmer than a balloon

use rand::Rng;

use crate::color::palette;
use crate::geometry::{Vec2, Viewport};
use crate::render::DrawCommand;

const START_BELOW: f32 = 20.0;
const RADIUS: (f32, f32) = (6.0, 14.0);
const RISE_SPEED: (f32, f32) = (0.8, 1.6);
const SWAY_STEP: f32 = 0.03;
const SWAY_AMPLITUDE: f32 = 0.5;
const EXIT_LINE: f32 = -30.0;

#[derive(Debug, Clone)]
pub struct Bubble {
    pub position: Vec2,
    pub radius: f32,
    pub speed: f32,
    phase: f32,
}

impl Bubble {
    pub fn spawn<R: Rng>(rng: &mut R, viewport: Viewport) -> Self {
        Self {
            position: Vec2::new(
                rng.gen_range(0.0..viewport.width.max(1.0)),
                viewport.height + START_BELOW,
            ),
            radius: rng.gen_range(RADIUS.0..RADIUS.1),
            speed: rng.gen_range(RISE_SPEED.0..RISE_SPEED.1),
            phase: rng.gen_range(0.0..1000.0),
        }
    }

    pub fn update(&mut self) {
        self.phase += SWAY_STEP;
        self.position.x += self.phase.sin() * SWAY_AMPLITUDE;
        self.position.y -= self.speed;
    }

    pub fn is_done(&self) -> bool {
        self.position.y < EXIT_LINE
    }

    pub fn draw(&self, out: &mut Vec<DrawCommand>) {
        out.push(DrawCommand::CircleOutline {
            center: self.position,
            radius: self.radius,
            color: palette::BUBBLE,
            alpha: 150,
            stroke: 1.5,
        });
    }
}
