//! Quiz session state machine
//!
//! Screens: `Intro -> Quiz -> Result -> Intro`. The session knows nothing about
//! particles or layout; it reports what happened through [`AnswerOutcome`] and
//! [`SessionEvent`] and the presenter attaches the visuals.

use crate::constants::timing::FEEDBACK_DELAY_FRAMES;
use crate::questions::{Question, OPTION_COUNT};
use crate::result_fx::{score_ratio, ResultMode};

/// Which screen is active. Exactly one at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Intro,
    Quiz,
    Result,
}

/// A recorded answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// Slot the user picked
    pub option: usize,
    /// Slot holding the right answer
    pub correct_index: usize,
    pub correct: bool,
}

/// Transition notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Intro -> Quiz
    Started,
    /// Quiz -> Quiz, now showing question `index`
    Advanced { index: usize },
    /// Quiz -> Result
    Finished { score: usize, total: usize },
    /// Result -> Intro
    Restarted,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    screen: Screen,
    current_index: usize,
    score: usize,
    /// Picked option; `Some` exactly while input is locked
    selected: Option<usize>,
    feedback_countdown: u32,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            screen: Screen::Intro,
            current_index: 0,
            score: 0,
            selected: None,
            feedback_countdown: 0,
        }
    }

    fn reset_counters(&mut self) {
        self.current_index = 0;
        self.score = 0;
        self.selected = None;
        self.feedback_countdown = 0;
    }

    /// Intro -> Quiz. An empty question list goes straight to Result with 0/0.
    pub fn start(&mut self) -> Option<SessionEvent> {
        if self.screen != Screen::Intro {
            return None;
        }
        self.reset_counters();
        self.screen = Screen::Quiz;
        tracing::debug!(questions = self.questions.len(), "Quiz started");

        if self.questions.is_empty() {
            return Some(self.finish());
        }
        Some(SessionEvent::Started)
    }

    /// Record an answer for the current question.
    ///
    /// Ignored (returns `None`) outside the quiz screen, while input is locked,
    /// past the last question, or for an out-of-range slot.
    pub fn answer(&mut self, option: usize) -> Option<AnswerOutcome> {
        if self.screen != Screen::Quiz || self.input_locked() || option >= OPTION_COUNT {
            return None;
        }
        let question = self.questions.get(self.current_index)?;

        let correct_index = question.correct_index();
        let correct = question.is_correct(option);
        self.selected = Some(option);
        if correct {
            self.score += 1;
        }
        self.feedback_countdown = FEEDBACK_DELAY_FRAMES;

        tracing::debug!(
            index = self.current_index,
            option,
            correct,
            score = self.score,
            "Answer recorded"
        );
        Some(AnswerOutcome {
            option,
            correct_index,
            correct,
        })
    }

    /// One frame of feedback timing. When the countdown hits zero the session
    /// advances exactly once.
    pub fn tick(&mut self) -> Option<SessionEvent> {
        if self.screen != Screen::Quiz || self.feedback_countdown == 0 {
            return None;
        }
        self.feedback_countdown -= 1;
        if self.feedback_countdown > 0 {
            return None;
        }

        self.selected = None;
        self.current_index += 1;
        if self.current_index >= self.questions.len() {
            return Some(self.finish());
        }
        tracing::debug!(index = self.current_index, "Advanced to next question");
        Some(SessionEvent::Advanced {
            index: self.current_index,
        })
    }

    fn finish(&mut self) -> SessionEvent {
        self.current_index = self.questions.len();
        self.screen = Screen::Result;
        tracing::debug!(
            score = self.score,
            total = self.questions.len(),
            "Quiz finished"
        );
        SessionEvent::Finished {
            score: self.score,
            total: self.questions.len(),
        }
    }

    /// Result -> Intro with every counter reset
    pub fn restart(&mut self) -> Option<SessionEvent> {
        if self.screen != Screen::Result {
            return None;
        }
        self.reset_counters();
        self.screen = Screen::Intro;
        tracing::debug!("Session restarted");
        Some(SessionEvent::Restarted)
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Question on screen, if the quiz is running
    pub fn current_question(&self) -> Option<&Question> {
        if self.screen != Screen::Quiz {
            return None;
        }
        self.questions.get(self.current_index)
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.selected
    }

    pub fn input_locked(&self) -> bool {
        self.selected.is_some()
    }

    pub fn feedback_countdown(&self) -> u32 {
        self.feedback_countdown
    }

    /// True while the last answer was right and feedback is still showing
    pub fn last_answer_correct(&self) -> Option<bool> {
        let selected = self.selected?;
        Some(self.current_question()?.is_correct(selected))
    }

    pub fn ratio(&self) -> f64 {
        score_ratio(self.score, self.questions.len())
    }

    pub fn result_mode(&self) -> ResultMode {
        ResultMode::for_score(self.score, self.questions.len())
    }
}
