//! Result screen animations
//!
//! The score tier picks one of three modes on entry to the result screen:
//! - Firework (ratio >= 0.8): rockets bursting into fragments
//! - Balloon (0.5 <= ratio < 0.8): ellipses rising with a sway
//! - Bubble (ratio < 0.5): hollow circles drifting upward
//!
//! Each mode spawns on a fixed frame cadence up to a concurrency cap.

mod balloon;
mod bubble;
mod firework;

pub use balloon::Balloon;
pub use bubble::Bubble;
pub use firework::{Firework, FireworkPhase, Fragment, FRAGMENT_COUNT};

use rand::Rng;

use crate::effects::ParticleSystem;
use crate::geometry::Viewport;
use crate::render::DrawCommand;

/// Result animation tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultMode {
    Firework,
    Balloon,
    Bubble,
}

impl ResultMode {
    /// Pick the tier for `score` out of `total`. Integer comparisons keep the
    /// 0.8 and 0.5 boundaries exact; an empty quiz counts as ratio 0.
    pub fn for_score(score: usize, total: usize) -> Self {
        if total == 0 {
            return ResultMode::Bubble;
        }
        if score * 5 >= total * 4 {
            ResultMode::Firework
        } else if score * 2 >= total {
            ResultMode::Balloon
        } else {
            ResultMode::Bubble
        }
    }

    /// Encouragement caption shown under the score
    pub fn caption(self) -> &'static str {
        match self {
            ResultMode::Firework => "Amazing! You're a star!",
            ResultMode::Balloon => "Nice work! Go for a higher score!",
            ResultMode::Bubble => "Keep going! You'll do better next time!",
        }
    }

    /// Frames between spawns
    pub fn spawn_interval(self) -> u64 {
        match self {
            ResultMode::Firework => 15,
            ResultMode::Balloon => 20,
            ResultMode::Bubble => 5,
        }
    }

    /// Maximum number of live effects
    pub fn max_live(self) -> usize {
        match self {
            ResultMode::Firework => 6,
            ResultMode::Balloon => 10,
            ResultMode::Bubble => 20,
        }
    }
}

/// `score / total`, defined as 0 for an empty quiz
pub fn score_ratio(score: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        score as f64 / total as f64
    }
}

/// One animated result entity
#[derive(Debug, Clone)]
pub enum ResultEffect {
    Firework(Firework),
    Balloon(Balloon),
    Bubble(Bubble),
}

impl ResultEffect {
    fn spawn<R: Rng>(mode: ResultMode, rng: &mut R, viewport: Viewport) -> Self {
        match mode {
            ResultMode::Firework => ResultEffect::Firework(Firework::launch(rng, viewport)),
            ResultMode::Balloon => ResultEffect::Balloon(Balloon::spawn(rng, viewport)),
            ResultMode::Bubble => ResultEffect::Bubble(Bubble::spawn(rng, viewport)),
        }
    }

    fn update<R: Rng>(&mut self, rng: &mut R, particles: &mut ParticleSystem) {
        match self {
            ResultEffect::Firework(fw) => fw.update(rng, particles),
            ResultEffect::Balloon(b) => b.update(),
            ResultEffect::Bubble(b) => b.update(),
        }
    }

    pub fn is_done(&self) -> bool {
        match self {
            ResultEffect::Firework(fw) => fw.is_done(),
            ResultEffect::Balloon(b) => b.is_done(),
            ResultEffect::Bubble(b) => b.is_done(),
        }
    }

    fn draw(&self, out: &mut Vec<DrawCommand>) {
        match self {
            ResultEffect::Firework(fw) => fw.draw(out),
            ResultEffect::Balloon(b) => b.draw(out),
            ResultEffect::Bubble(b) => b.draw(out),
        }
    }
}

/// Owns the active result mode and its live effigies
#[derive(Debug, Default)]
pub struct ResultAnimator {
    mode: Option<ResultMode>,
    effects: Vec<ResultEffect>,
}

impl ResultAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to `mode`, discarding anything left from a previous run
    pub fn begin(&mut self, mode: ResultMode) {
        tracing::debug!(?mode, "Result animation started");
        self.mode = Some(mode);
        self.effects.clear();
    }

    /// Spawn on cadence, advance every effigy, drop the finished ones
    pub fn step<R: Rng>(
        &mut self,
        frame: u64,
        rng: &mut R,
        viewport: Viewport,
        particles: &mut ParticleSystem,
    ) {
        let Some(mode) = self.mode else {
            return;
        };

        if frame % mode.spawn_interval() == 0 && self.effects.len() < mode.max_live() {
            self.effects.push(ResultEffect::spawn(mode, rng, viewport));
        }

        for effect in &mut self.effects {
            effect.update(rng, particles);
        }
        self.effects.retain(|e| !e.is_done());
    }

    pub fn draw(&self, out: &mut Vec<DrawCommand>) {
        for effect in &self.effects {
            effect.draw(out);
        }
    }

    pub fn mode(&self) -> Option<ResultMode> {
        self.mode
    }

    pub fn effects(&self) -> &[ResultEffect] {
        &self.effects
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Stop animating and drop every effigy
    pub fn clear(&mut self) {
        self.mode = None;
        self.effects.clear();
    }
}
