use thiserror::Error;

use crate::model::ids::{QuestionId, SubjectId};

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// One answer option: an opaque key (usually a letter) plus display text.
/// Keys are unique within a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOption {
    pub key: String,
    pub text: String,
}

/// A multiple-choice question. Immutable once fetched for a session.
///
/// Built through [`Question::new`], which enforces the structural invariants
/// (non-empty prompt, at least two options, unique keys, correct key present),
/// so downstream code can rely on a well-formed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    subject_id: SubjectId,
    year: u16,
    prompt: String,
    options: Vec<QuestionOption>,
    correct_key: String,
    explanation: String,
    difficulty: String,
    language: String,
}

impl Question {
    /// Validate and build a question.
    ///
    /// # Errors
    ///
    /// Returns a [`QuestionError`] describing the first violated invariant.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: QuestionId,
        subject_id: SubjectId,
        year: u16,
        prompt: impl Into<String>,
        options: Vec<QuestionOption>,
        correct_key: impl Into<String>,
        explanation: impl Into<String>,
        difficulty: impl Into<String>,
        language: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt { id });
        }
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions {
                id,
                count: options.len(),
            });
        }
        for (index, option) in options.iter().enumerate() {
            if option.key.trim().is_empty() {
                return Err(QuestionError::EmptyOptionKey { id });
            }
            if options[..index].iter().any(|prior| prior.key == option.key) {
                return Err(QuestionError::DuplicateOptionKey {
                    id,
                    key: option.key.clone(),
                });
            }
        }
        let correct_key = correct_key.into();
        if !options.iter().any(|option| option.key == correct_key) {
            return Err(QuestionError::UnknownCorrectKey { id, key: correct_key });
        }

        Ok(Self {
            id,
            subject_id,
            year,
            prompt,
            options,
            correct_key,
            explanation: explanation.into(),
            difficulty: difficulty.into(),
            language: language.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn subject_id(&self) -> SubjectId {
        self.subject_id
    }

    #[must_use]
    pub fn year(&self) -> u16 {
        self.year
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[QuestionOption] {
        &self.options
    }

    #[must_use]
    pub fn correct_key(&self) -> &str {
        &self.correct_key
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// True if `key` is one of this question's option keys.
    #[must_use]
    pub fn has_option(&self, key: &str) -> bool {
        self.options.iter().any(|option| option.key == key)
    }
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question {id} has an empty prompt")]
    EmptyPrompt { id: QuestionId },

    #[error("question {id} has {count} options, need at least two")]
    TooFewOptions { id: QuestionId, count: usize },

    #[error("question {id} has an option with an empty key")]
    EmptyOptionKey { id: QuestionId },

    #[error("question {id} repeats option key {key:?}")]
    DuplicateOptionKey { id: QuestionId, key: String },

    #[error("question {id} marks {key:?} correct but has no such option")]
    UnknownCorrectKey { id: QuestionId, key: String },
}
