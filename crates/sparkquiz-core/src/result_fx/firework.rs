//! Firework: a rising rocket that bursts into radial fragments

use std::f32::consts::TAU;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::color::{alpha, palette, Rgb};
use crate::effects::{Emission, ParticleSystem};
use crate::geometry::{Vec2, Viewport};
use crate::render::DrawCommand;

/// Rocket launch speed range (negative = upward)
const LAUNCH_SPEED: (f32, f32) = (-12.0, -8.0);
const ROCKET_GRAVITY: f32 = 0.15;
/// Rocket bursts once it slows to this vertical speed
const BURST_SPEED_THRESHOLD: f32 = -1.0;
/// Burst altitude band, as fractions of the viewport height
const BURST_ALTITUDE: (f32, f32) = (0.25, 0.45);
/// Launch column band, as fractions of the viewport width
const LAUNCH_COLUMN: (f32, f32) = (0.15, 0.85);
const ROCKET_TAIL: f32 = 12.0;

pub const FRAGMENT_COUNT: usize = 80;
const FRAGMENT_SPEED: (f32, f32) = (2.0, 5.0);
const FRAGMENT_LIFE: (f32, f32) = (40.0, 80.0);
const FRAGMENT_DRAG: f32 = 0.99;
const FRAGMENT_GRAVITY: f32 = 0.05;
const FRAGMENT_RADIUS: f32 = 1.5;

/// Supplementary sparkle ring pushed into the shared particle system
const SPARKLE_COUNT: usize = 20;
const SPARKLE_SCALE: f32 = 1.4;
const SPARKLE_SPEED: (f32, f32) = (1.0, 3.0);
const SPARKLE_LIFE: f32 = 50.0;

#[derive(Debug, Clone)]
pub struct Fragment {
    pub position: Vec2,
    pub velocity: Vec2,
    pub life: f32,
}

#[derive(Debug, Clone)]
pub enum FireworkPhase {
    Rising { velocity_y: f32 },
    Burst { fragments: Vec<Fragment> },
}

#[derive(Debug, Clone)]
pub struct Firework {
    pub position: Vec2,
    pub color: Rgb,
    /// Height at which the rocket bursts even if still fast
    burst_altitude: f32,
    pub phase: FireworkPhase,
}

impl Firework {
    /// Launch from the bottom edge at a random column
    pub fn launch<R: Rng>(rng: &mut R, viewport: Viewport) -> Self {
        let x = rng.gen_range(LAUNCH_COLUMN.0..LAUNCH_COLUMN.1) * viewport.width;
        Self {
            position: Vec2::new(x, viewport.height),
            color: *palette::FIREWORK
                .choose(rng)
                .unwrap_or(&palette::FIREWORK[0]),
            burst_altitude: rng.gen_range(BURST_ALTITUDE.0..BURST_ALTITUDE.1) * viewport.height,
            phase: FireworkPhase::Rising {
                velocity_y: rng.gen_range(LAUNCH_SPEED.0..LAUNCH_SPEED.1),
            },
        }
    }

    pub fn update<R: Rng>(&mut self, rng: &mut R, particles: &mut ParticleSystem) {
        let should_burst = match &mut self.phase {
            FireworkPhase::Rising { velocity_y } => {
                self.position.y += *velocity_y;
                *velocity_y += ROCKET_GRAVITY;
                *velocity_y >= BURST_SPEED_THRESHOLD || self.position.y < self.burst_altitude
            }
            FireworkPhase::Burst { fragments } => {
                for f in fragments.iter_mut() {
                    f.velocity = f.velocity * FRAGMENT_DRAG;
                    f.velocity.y += FRAGMENT_GRAVITY;
                    f.position += f.velocity;
                    f.life -= 1.0;
                }
                fragments.retain(|f| f.life > 0.0);
                false
            }
        };

        if should_burst {
            self.explode(rng, particles);
        }
    }

    fn explode<R: Rng>(&mut self, rng: &mut R, particles: &mut ParticleSystem) {
        let origin = self.position;
        let fragments = (0..FRAGMENT_COUNT)
            .map(|_| {
                let angle = rng.gen_range(0.0..TAU);
                let speed = rng.gen_range(FRAGMENT_SPEED.0..FRAGMENT_SPEED.1);
                Fragment {
                    position: origin,
                    velocity: Vec2::from_angle(angle, speed),
                    life: rng.gen_range(FRAGMENT_LIFE.0..FRAGMENT_LIFE.1),
                }
            })
            .collect();
        self.phase = FireworkPhase::Burst { fragments };

        for _ in 0..SPARKLE_COUNT {
            let speed = rng.gen_range(SPARKLE_SPEED.0..SPARKLE_SPEED.1);
            particles.emit(
                rng,
                origin,
                Emission::sparkle(self.color, SPARKLE_SCALE, speed, SPARKLE_LIFE),
            );
        }
        tracing::trace!(x = origin.x, y = origin.y, "Firework burst");
    }

    /// Done once the burst happened and every fragment expired
    pub fn is_done(&self) -> bool {
        matches!(&self.phase, FireworkPhase::Burst { fragments } if fragments.is_empty())
    }

    pub fn draw(&self, out: &mut Vec<DrawCommand>) {
        match &self.phase {
            FireworkPhase::Rising { .. } => out.push(DrawCommand::Line {
                from: self.position,
                to: Vec2::new(self.position.x, self.position.y + ROCKET_TAIL),
                color: palette::ROCKET_TRAIL,
                alpha: 255,
                stroke: 1.0,
            }),
            FireworkPhase::Burst { fragments } => {
                out.extend(fragments.iter().map(|f| DrawCommand::Circle {
                    center: f.position,
                    radius: FRAGMENT_RADIUS,
                    color: self.color,
                    alpha: alpha(f.life / FRAGMENT_LIFE.1 * 255.0),
                }));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    const VIEW: Viewport = Viewport::new(1280.0, 720.0);

    #[test]
    fn rocket_bursts_into_80_fragments_and_a_sparkle_ring() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut particles = ParticleSystem::new();
        let mut fw = Firework::launch(&mut rng, VIEW);

        let mut frames = 0;
        while matches!(fw.phase, FireworkPhase::Rising { .. }) {
            fw.update(&mut rng, &mut particles);
            frames += 1;
            assert!(frames < 200, "rocket never burst");
        }

        match &fw.phase {
            FireworkPhase::Burst { fragments } => {
                assert_eq!(fragments.len(), FRAGMENT_COUNT);
                for f in fragments {
                    let speed = f.velocity.length();
                    assert!(speed > 2.0 - 1e-4 && speed < 5.0 + 1e-4);
                    assert!((40.0..80.0).contains(&f.life));
                }
            }
            FireworkPhase::Rising { .. } => unreachable!(),
        }
        assert_eq!(particles.len(), SPARKLE_COUNT);
        assert!(fw.position.y < VIEW.height);
    }

    #[test]
    fn firework_completes_when_fragments_expire() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut particles = ParticleSystem::new();
        let mut fw = Firework::launch(&mut rng, VIEW);

        let mut frames = 0;
        while !fw.is_done() {
            fw.update(&mut rng, &mut particles);
            frames += 1;
            assert!(frames < 400, "firework never completed");
        }
        let mut out = Vec::new();
        fw.draw(&mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn launch_column_within_band() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..100 {
            let fw = Firework::launch(&mut rng, VIEW);
            assert!(fw.position.x >= 0.15 * VIEW.width && fw.position.x < 0.85 * VIEW.width);
            assert_eq!(fw.position.y, VIEW.height);
        }
    }
}
