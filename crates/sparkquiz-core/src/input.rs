//! Input dispatch
//!
//! Inputs are applied between frames. Anything that doesn't apply to the
//! current screen is silently ignored; a pointer press always leaves a ripple.

use crate::color::palette;
use crate::constants::flash;
use crate::geometry::{Vec2, Viewport};
use crate::presenter::Presenter;
use crate::questions::letter_to_index;
use crate::session::{AnswerOutcome, Screen};

/// A front-end independent input event. Touch maps to `PointerDown`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    PointerMoved(Vec2),
    PointerDown(Vec2),
    /// A printable key, case-insensitive
    Key(char),
    /// Enter or Space
    Confirm,
    Resized(Viewport),
}

impl Presenter {
    pub fn handle_input(&mut self, input: Input) {
        match input {
            Input::PointerMoved(position) => {
                self.pointer = Some(position);
            }
            Input::PointerDown(position) => {
                self.pointer = Some(position);
                self.handle_press(position);
            }
            Input::Key(key) => self.handle_key(key),
            Input::Confirm => {
                if self.session.screen() == Screen::Intro {
                    self.start_quiz();
                }
            }
            Input::Resized(viewport) => {
                self.layout.resize(viewport);
                self.layout.update_hover(self.pointer);
            }
        }
    }

    fn handle_press(&mut self, position: Vec2) {
        self.effects.ripples.spawn(&mut self.rng, position);

        match self.session.screen() {
            Screen::Intro => {
                if self.layout.start_button().contains(position) {
                    self.start_quiz();
                }
            }
            Screen::Quiz => {
                if let Some(index) = self.layout.option_at(position) {
                    self.answer(index);
                }
            }
            Screen::Result => {}
        }
    }

    fn handle_key(&mut self, key: char) {
        match self.session.screen() {
            Screen::Quiz => {
                if let Some(index) = letter_to_index(key.encode_utf8(&mut [0; 4])) {
                    self.answer(index);
                }
            }
            Screen::Result => {
                if key.eq_ignore_ascii_case(&'r') {
                    self.restart();
                }
            }
            Screen::Intro => {}
        }
    }

    fn start_quiz(&mut self) {
        if let Some(event) = self.session.start() {
            self.apply_event(event);
        }
    }

    fn restart(&mut self) {
        if let Some(event) = self.session.restart() {
            self.apply_event(event);
        }
    }

    /// Record an answer and attach its feedback: flash and burst on the picked
    /// box, plus a reveal flash on the right box after a wrong pick
    fn answer(&mut self, index: usize) -> Option<AnswerOutcome> {
        let outcome = self.session.answer(index)?;

        let picked = self.layout.boxes()[outcome.option].rect;
        self.layout.flash(outcome.option, flash::SELECTED);
        let color = if outcome.correct {
            palette::CORRECT
        } else {
            palette::WRONG
        };
        self.effects.burst(&mut self.rng, picked.center(), color);

        if !outcome.correct {
            self.layout.flash(outcome.correct_index, flash::REVEAL);
        }
        Some(outcome)
    }
}
