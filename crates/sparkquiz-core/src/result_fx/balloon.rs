//! Balloon: an ellipse on a string, rising with a gentle sway

use rand::seq::SliceRandom;
use rand::Rng;

use crate::color::{palette, Rgb};
use crate::geometry::{Vec2, Viewport};
use crate::render::DrawCommand;

const START_BELOW: f32 = 60.0;
const RADIUS: (f32, f32) = (14.0, 26.0);
const RISE_SPEED: (f32, f32) = (1.0, 2.0);
const SWAY_STEP: f32 = 0.02;
const SWAY_AMPLITUDE: f32 = 0.6;
/// Removed once the bottom of the body is this far above the top edge
const EXIT_MARGIN: f32 = 50.0;

#[derive(Debug, Clone)]
pub struct Balloon {
    pub position: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub speed: f32,
    phase: f32,
}

impl Balloon {
    pub fn spawn<R: Rng>(rng: &mut R, viewport: Viewport) -> Self {
        Self {
            position: Vec2::new(
                rng.gen_range(0.1..0.9) * viewport.width,
                viewport.height + START_BELOW,
            ),
            radius: rng.gen_range(RADIUS.0..RADIUS.1),
            color: *palette::BALLOON
                .choose(rng)
                .unwrap_or(&palette::BALLOON[0]),
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
        self.position.y + self.radius * 2.0 < -EXIT_MARGIN
    }

    pub fn draw(&self, out: &mut Vec<DrawCommand>) {
        let Vec2 { x, y } = self.position;
        out.push(DrawCommand::Ellipse {
            center: self.position,
            radii: Vec2::new(self.radius * 0.6, self.radius * 0.8),
            color: self.color,
            alpha: 220,
        });
        out.push(DrawCommand::Line {
            from: Vec2::new(x, y + self.radius * 0.8),
            to: Vec2::new(x, y + self.radius * 2.5),
            color: palette::DIM,
            alpha: 120,
            stroke: 1.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn balloon_rises_at_constant_speed_and_leaves() {
        let view = Viewport::new(800.0, 600.0);
        let mut rng = StdRng::seed_from_u64(21);
        let mut balloon = Balloon::spawn(&mut rng, view);
        let start_y = balloon.position.y;
        assert_eq!(start_y, 660.0);

        balloon.update();
        assert!((start_y - balloon.position.y - balloon.speed).abs() < 1e-4);

        let mut frames = 1;
        while !balloon.is_done() {
            balloon.update();
            frames += 1;
            assert!(frames < 2000);
        }
        assert!(balloon.position.y < 0.0);
    }

    #[test]
    fn sway_is_bounded() {
        let view = Viewport::new(800.0, 600.0);
        let mut rng = StdRng::seed_from_u64(22);
        let mut balloon = Balloon::spawn(&mut rng, view);
        let mut last_x = balloon.position.x;
        for _ in 0..100 {
            balloon.update();
            assert!((balloon.position.x - last_x).abs() <= SWAY_AMPLITUDE + 1e-6);
            last_x = balloon.position.x;
        }
    }
}
