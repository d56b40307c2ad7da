//! Presenter - owns everything needed to produce a frame
//!
//! One `Presenter` per running quiz. Front ends feed it [`Input`](crate::Input)
//! between frames, call [`Presenter::tick`] once per frame, and draw whatever
//! [`Presenter::render`] returns. Input handling lives in `input.rs` and scene
//! composition in `scene.rs`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::palette;
use crate::constants::flash;
use crate::constants::timing::{HOVER_SPARKLE_EVERY, INTRO_SPARKLE_EVERY};
use crate::effects::{Effects, Emission};
use crate::geometry::{Vec2, Viewport};
use crate::layout::Layout;
use crate::questions::Question;
use crate::result_fx::{ResultAnimator, ResultMode};
use crate::session::{QuizSession, Screen, SessionEvent};

/// Ambient intro sparkles
const INTRO_SPARKLE_BAND: (f32, f32) = (0.6, 0.9);
const INTRO_SPARKLE_SPEED: (f32, f32) = (2.0, 4.0);
const INTRO_SPARKLE_SCALE: f32 = 1.2;
const INTRO_SPARKLE_LIFE: f32 = 120.0;

/// Sparkles on the hovered option box
const HOVER_SPARKLE_INSET: f32 = 8.0;
const HOVER_SPARKLE_SPEED: (f32, f32) = (1.0, 2.5);
const HOVER_SPARKLE_SCALE: f32 = 1.0;
const HOVER_SPARKLE_LIFE: f32 = 80.0;

/// Construction options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenterOptions {
    /// Fixed RNG seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
    pub show_trail: bool,
}

impl Default for PresenterOptions {
    fn default() -> Self {
        Self {
            seed: None,
            show_trail: true,
        }
    }
}

pub struct Presenter {
    pub(crate) session: QuizSession,
    pub(crate) layout: Layout,
    pub(crate) effects: Effects,
    pub(crate) results: ResultAnimator,
    /// Last known pointer position; `None` until the pointer is first seen
    pub(crate) pointer: Option<Vec2>,
    /// Frames ticked so far; the first tick is frame 1
    pub(crate) frame: u64,
    pub(crate) rng: StdRng,
    pub(crate) show_trail: bool,
}

impl Presenter {
    pub fn new(questions: Vec<Question>, viewport: Viewport, options: PresenterOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        tracing::info!(
            questions = questions.len(),
            seed = ?options.seed,
            "Presenter created"
        );

        Self {
            session: QuizSession::new(questions),
            layout: Layout::new(viewport),
            effects: Effects::new(),
            results: ResultAnimator::new(),
            pointer: None,
            frame: 0,
            rng,
            show_trail: options.show_trail,
        }
    }

    /// Advance one logical frame
    pub fn tick(&mut self) {
        self.frame += 1;

        if self.show_trail {
            if let Some(pointer) = self.pointer {
                self.effects.trail.step(&mut self.rng, pointer);
            }
        }
        self.layout.update_hover(self.pointer);

        match self.session.screen() {
            Screen::Intro => self.tick_intro(),
            Screen::Quiz => self.tick_quiz(),
            Screen::Result => self.results.step(
                self.frame,
                &mut self.rng,
                self.layout.viewport(),
                &mut self.effects.particles,
            ),
        }

        self.effects.step();
    }

    fn tick_intro(&mut self) {
        if self.frame % INTRO_SPARKLE_EVERY != 0 {
            return;
        }
        let viewport = self.layout.viewport();
        let position = Vec2::new(
            self.rng.gen_range(0.0..1.0) * viewport.width,
            self.rng
                .gen_range(INTRO_SPARKLE_BAND.0..INTRO_SPARKLE_BAND.1)
                * viewport.height,
        );
        let speed = self
            .rng
            .gen_range(INTRO_SPARKLE_SPEED.0..INTRO_SPARKLE_SPEED.1);
        self.effects.particles.emit(
            &mut self.rng,
            position,
            Emission::sparkle(palette::GLINT, INTRO_SPARKLE_SCALE, speed, INTRO_SPARKLE_LIFE),
        );
    }

    fn tick_quiz(&mut self) {
        self.layout.decay_flash(flash::DECAY);

        if self.frame % HOVER_SPARKLE_EVERY == 0 {
            if let Some(index) = self.layout.hovered_option() {
                let rect = self.layout.boxes()[index].rect;
                let span_x = (rect.w - HOVER_SPARKLE_INSET * 2.0).max(0.0);
                let span_y = (rect.h - HOVER_SPARKLE_INSET * 2.0).max(0.0);
                let position = Vec2::new(
                    rect.x + HOVER_SPARKLE_INSET + self.rng.gen::<f32>() * span_x,
                    rect.y + HOVER_SPARKLE_INSET + self.rng.gen::<f32>() * span_y,
                );
                let speed = self
                    .rng
                    .gen_range(HOVER_SPARKLE_SPEED.0..HOVER_SPARKLE_SPEED.1);
                self.effects.particles.emit(
                    &mut self.rng,
                    position,
                    Emission::sparkle(
                        palette::GLINT,
                        HOVER_SPARKLE_SCALE,
                        speed,
                        HOVER_SPARKLE_LIFE,
                    ),
                );
            }
        }

        if let Some(event) = self.session.tick() {
            self.apply_event(event);
        }
    }

    /// Attach the presentation side of a session transition
    pub(crate) fn apply_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Started | SessionEvent::Advanced { .. } => {
                self.layout.clear_flash();
            }
            SessionEvent::Finished { score, total } => {
                self.layout.clear_flash();
                self.results.begin(ResultMode::for_score(score, total));
                tracing::info!(score, total, "Quiz completed");
            }
            SessionEvent::Restarted => {
                self.effects.clear();
                self.results.clear();
                self.layout.clear_flash();
            }
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn screen(&self) -> Screen {
        self.session.screen()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn effects(&self) -> &Effects {
        &self.effects
    }

    pub fn results(&self) -> &ResultAnimator {
        &self.results
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn viewport(&self) -> Viewport {
        self.layout.viewport()
    }

    pub fn show_trail(&self) -> bool {
        self.show_trail
    }
}
