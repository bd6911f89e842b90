use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::ids::{QuestionId, SessionId, SubjectId};
use crate::model::question::Question;

//
// ─── ANSWERS ───────────────────────────────────────────────────────────────────
//

/// A user's answer to one question. An empty key means unanswered.
///
/// One answer exists per question in a run, created at run start and mutated
/// only by selecting an option for that question; answers are never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub question_id: QuestionId,
    pub selected_key: String,
}

impl Answer {
    #[must_use]
    pub fn unanswered(question_id: QuestionId) -> Self {
        Self {
            question_id,
            selected_key: String::new(),
        }
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        !self.selected_key.is_empty()
    }
}

//
// ─── GRADE REPORT ──────────────────────────────────────────────────────────────
//

/// Per-question outcome echoed back by the grading service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionResult {
    pub question_id: QuestionId,
    pub question: Question,
    pub user_answer_key: String,
    pub is_correct: bool,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GradeReportError {
    #[error("report lists {total} questions but carries {len} results")]
    CountMismatch { total: u32, len: usize },

    #[error("score {score} does not match {correct} correct results")]
    ScoreMismatch { score: u32, correct: u32 },
}

/// Graded outcome of one quiz session: score, total, per-question results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeReport {
    session_id: SessionId,
    score: u32,
    total_questions: u32,
    results: Vec<QuestionResult>,
}

impl GradeReport {
    /// Rehydrate a report from a server payload.
    ///
    /// # Errors
    ///
    /// Returns [`GradeReportError`] if the claimed score or total does not
    /// align with the per-question results.
    pub fn from_parts(
        session_id: SessionId,
        score: u32,
        total_questions: u32,
        results: Vec<QuestionResult>,
    ) -> Result<Self, GradeReportError> {
        if results.len() != total_questions as usize {
            return Err(GradeReportError::CountMismatch {
                total: total_questions,
                len: results.len(),
            });
        }
        let correct = results.iter().filter(|result| result.is_correct).count() as u32;
        if correct != score {
            return Err(GradeReportError::ScoreMismatch { score, correct });
        }

        Ok(Self {
            session_id,
            score,
            total_questions,
            results,
        })
    }

    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn results(&self) -> &[QuestionResult] {
        &self.results
    }

    /// Score as a whole percentage, rounded half-up.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        if self.total_questions == 0 {
            return 0;
        }
        (self.score * 100 + self.total_questions / 2) / self.total_questions
    }

    /// Number of questions the user actually answered (non-empty key).
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.results
            .iter()
            .filter(|result| !result.user_answer_key.is_empty())
            .count()
    }
}

//
// ─── QUIZ HISTORY ──────────────────────────────────────────────────────────────
//

/// A completed quiz session as reported by the history endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub session_id: SessionId,
    pub subject_id: SubjectId,
    pub subject_name: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub score: u32,
    pub total_questions: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::question::QuestionOption;

    fn question(id: u64) -> Question {
        Question::new(
            QuestionId::new(id),
            SubjectId::new(1),
            2020,
            format!("Q{id}"),
            vec![
                QuestionOption {
                    key: "A".into(),
                    text: "left".into(),
                },
                QuestionOption {
                    key: "B".into(),
                    text: "right".into(),
                },
            ],
            "A",
            "",
            "easy",
            "en",
        )
        .unwrap()
    }

    fn result(id: u64, key: &str, correct: bool) -> QuestionResult {
        QuestionResult {
            question_id: QuestionId::new(id),
            question: question(id),
            user_answer_key: key.to_string(),
            is_correct: correct,
        }
    }

    #[test]
    fn report_validates_counts() {
        let report = GradeReport::from_parts(
            SessionId::new(9),
            1,
            2,
            vec![result(1, "A", true), result(2, "B", false)],
        )
        .unwrap();
        assert_eq!(report.score(), 1);
        assert_eq!(report.percentage(), 50);
        assert_eq!(report.answered_count(), 2);
    }

    #[test]
    fn report_rejects_total_mismatch() {
        let err =
            GradeReport::from_parts(SessionId::new(9), 1, 3, vec![result(1, "A", true)]).unwrap_err();
        assert!(matches!(err, GradeReportError::CountMismatch { .. }));
    }

    #[test]
    fn report_rejects_score_mismatch() {
        let err = GradeReport::from_parts(
            SessionId::new(9),
            2,
            2,
            vec![result(1, "A", true), result(2, "B", false)],
        )
        .unwrap_err();
        assert!(matches!(err, GradeReportError::ScoreMismatch { .. }));
    }

    #[test]
    fn percentage_rounds_half_up() {
        let report = GradeReport::from_parts(
            SessionId::new(9),
            1,
            3,
            vec![
                result(1, "A", true),
                result(2, "", false),
                result(3, "B", false),
            ],
        )
        .unwrap();
        // 1/3 = 33.33..
        assert_eq!(report.percentage(), 33);
        assert_eq!(report.answered_count(), 2);
    }
}
