//! CSV question source
//!
//! Expected header row: `question,A,B,C,D,answer` (case-insensitive; `correct`
//! is accepted in place of `answer`). Rows with an empty required field or an
//! answer letter outside A-D are skipped. When nothing valid remains the
//! built-in fallback set is used instead.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{fallback_questions, letter_to_index, Question, OPTION_COUNT};
use crate::error::QuestionError;

const QUESTION_COLUMN: &str = "question";
const OPTION_COLUMNS: [&str; OPTION_COUNT] = ["a", "b", "c", "d"];
const ANSWER_COLUMNS: [&str; 2] = ["answer", "correct"];

/// Questions accepted from a source, plus how many rows were dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuestions {
    pub questions: Vec<Question>,
    pub skipped: usize,
}

/// Outcome of [`load_or_fallback`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub questions: Vec<Question>,
    /// Rows dropped during validation
    pub skipped: usize,
    /// True when the built-in set replaced the source
    pub used_fallback: bool,
}

/// Column positions resolved from the header row
struct Columns {
    question: usize,
    options: [usize; OPTION_COUNT],
    answer: usize,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, QuestionError> {
        let by_name: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.trim().to_lowercase(), i))
            .collect();

        let mut missing = Vec::new();
        let mut find = |name: &str| {
            let idx = by_name.get(name).copied();
            if idx.is_none() {
                missing.push(name.to_string());
            }
            idx.unwrap_or(0)
        };

        let question = find(QUESTION_COLUMN);
        let options = OPTION_COLUMNS.map(&mut find);
        let answer = match ANSWER_COLUMNS.iter().find_map(|name| by_name.get(*name)) {
            Some(&idx) => idx,
            None => {
                missing.push(ANSWER_COLUMNS[0].to_string());
                0
            }
        };

        if !missing.is_empty() {
            return Err(QuestionError::MissingColumns(missing));
        }

        Ok(Self {
            question,
            options,
            answer,
        })
    }

    /// Turn a record into a question, or None when any field is unusable
    fn extract(&self, record: &csv::StringRecord) -> Option<Question> {
        let field = |idx: usize| record.get(idx).map(str::trim).filter(|s| !s.is_empty());

        let text = field(self.question)?;
        let mut options: [String; OPTION_COUNT] = Default::default();
        for (slot, &idx) in options.iter_mut().zip(self.options.iter()) {
            *slot = field(idx)?.to_string();
        }
        let correct = letter_to_index(field(self.answer)?)?;

        Question::new(text, options, correct).ok()
    }
}

/// Parse questions from any CSV reader with a header row
pub fn parse_questions<R: Read>(reader: R) -> Result<ParsedQuestions, QuestionError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let columns = Columns::resolve(&headers)?;

    let mut parsed = ParsedQuestions::default();
    for (row, record) in rdr.records().enumerate() {
        // Row numbers in logs are 1-based and count the header
        let line = row + 2;
        match record {
            Ok(record) => match columns.extract(&record) {
                Some(question) => parsed.questions.push(question),
                None => {
                    tracing::warn!(line, "Skipping question row with missing or invalid fields");
                    parsed.skipped += 1;
                }
            },
            Err(e) => {
                tracing::warn!(line, error = %e, "Skipping unreadable question row");
                parsed.skipped += 1;
            }
        }
    }

    Ok(parsed)
}

/// Parse questions from a CSV file
pub fn load_from_path(path: &Path) -> Result<ParsedQuestions, QuestionError> {
    let file = File::open(path).map_err(|source| QuestionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_questions(file)
}

/// Load questions from `path`, substituting the fallback set when the source
/// is missing, malformed, or has no valid rows. Never fails.
pub fn load_or_fallback(path: &Path) -> LoadReport {
    let (questions, skipped) = match load_from_path(path) {
        Ok(parsed) => (parsed.questions, parsed.skipped),
        Err(e) => {
            tracing::info!(path = %path.display(), error = %e, "Question source unavailable");
            (Vec::new(), 0)
        }
    };

    if questions.is_empty() {
        tracing::info!("Using built-in fallback questions");
        return LoadReport {
            questions: fallback_questions(),
            skipped,
            used_fallback: true,
        };
    }

    tracing::info!(
        count = questions.len(),
        skipped,
        "Loaded questions from {}",
        path.display()
    );
    LoadReport {
        questions,
        skipped,
        used_fallback: false,
    }
}
