//! Orchestrates one quiz attempt: setup round-trip, run construction, and the
//! grading round-trip with its failure semantics.

use std::sync::Arc;

use exam_core::model::{GradeReport, SubjectId};
use exam_core::run::QuizRun;

use crate::content_client::ContentClient;
use crate::error::QuizServiceError;

pub struct QuizService {
    content: Arc<ContentClient>,
}

impl QuizService {
    #[must_use]
    pub fn new(content: Arc<ContentClient>) -> Self {
        Self { content }
    }

    /// Request `question_count` questions for a subject and build the run.
    ///
    /// The run owns its question list directly; nothing is serialized through
    /// navigation state.
    ///
    /// # Errors
    ///
    /// `QuizServiceError::Api` for transport/payload failures,
    /// `QuizServiceError::Run` when the server answers with an empty set.
    pub async fn start(
        &self,
        subject_id: SubjectId,
        question_count: u32,
    ) -> Result<QuizRun, QuizServiceError> {
        let (session_id, questions) = self.content.start_quiz(subject_id, question_count).await?;
        tracing::info!(%session_id, count = questions.len(), "quiz started");
        let run = QuizRun::new(session_id, questions)?;
        Ok(run)
    }

    /// Drive a submission: `begin_submit` → grade round-trip → `complete`.
    ///
    /// On a network/server failure the run reverts to active with its
    /// countdown and answers intact, so the user can retry the identical
    /// payload. A submit while one is already in flight is rejected before
    /// any network call.
    ///
    /// # Errors
    ///
    /// `QuizServiceError::Run` for state violations (double submit, already
    /// submitted), `QuizServiceError::Api` when grading fails.
    pub async fn submit(&self, run: &mut QuizRun) -> Result<GradeReport, QuizServiceError> {
        run.begin_submit()?;
        let session_id = run.session_id();

        match self.content.grade_quiz(session_id, run.answers()).await {
            Ok(report) => {
                run.complete()?;
                tracing::info!(
                    %session_id,
                    score = report.score(),
                    total = report.total_questions(),
                    "quiz graded"
                );
                Ok(report)
            }
            Err(err) => {
                tracing::warn!(%session_id, error = %err, "grading failed, run stays active");
                run.submit_failed();
                Err(err.into())
            }
        }
    }
}
