//! Question model
//!
//! Questions are loaded once at startup and are read-only afterwards.
//! Loading never fails from the caller's point of view: see [`load_or_fallback`].

mod loader;

pub use loader::{load_from_path, load_or_fallback, parse_questions, LoadReport, ParsedQuestions};

use crate::error::QuestionError;

/// Every question has exactly this many options
pub const OPTION_COUNT: usize = 4;

/// Option labels, in slot order
pub const OPTION_LABELS: [char; OPTION_COUNT] = ['A', 'B', 'C', 'D'];

/// A multiple-choice question with four options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: [String; OPTION_COUNT],
    correct_index: usize,
}

impl Question {
    /// Build a question; `correct_index` must address one of the four options
    pub fn new(
        text: impl Into<String>,
        options: [String; OPTION_COUNT],
        correct_index: usize,
    ) -> Result<Self, QuestionError> {
        if correct_index >= OPTION_COUNT {
            return Err(QuestionError::AnswerOutOfRange(correct_index));
        }
        Ok(Self {
            text: text.into(),
            options,
            correct_index,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.options
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_index
    }
}

/// Map an answer letter (`A`..`D`, any case, surrounding whitespace ignored) to a slot
pub fn letter_to_index(letter: &str) -> Option<usize> {
    let trimmed = letter.trim();
    let mut chars = trimmed.chars();
    let c = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() {
        return None;
    }
    OPTION_LABELS.iter().position(|&label| label == c)
}

/// Built-in sample set used when the question source yields nothing usable
pub fn fallback_questions() -> Vec<Question> {
    let sample = |text: &str, options: [&str; OPTION_COUNT], correct_index: usize| Question {
        text: text.to_string(),
        options: options.map(str::to_string),
        correct_index,
    };

    vec![
        sample(
            "Which is the largest planet in the solar system?",
            ["Earth", "Jupiter", "Mars", "Venus"],
            1,
        ),
        sample(
            "What is the chemical formula of water?",
            ["H2O", "CO2", "O2", "NaCl"],
            0,
        ),
        sample(
            "What is an `if` statement used for in a program?",
            [
                "Repetition",
                "Conditional branching",
                "Defining a function",
                "Exporting a module",
            ],
            1,
        ),
    ]
}
