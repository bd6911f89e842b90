use exam_core::model::GradeReport;
use exam_core::run::{QuizRun, RunPhase, TickOutcome};
use services::{QuizService, QuizServiceError};

use crate::views::ViewError;
use crate::vm::time_fmt::format_clock;

/// One option row for the current question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionChoiceVm {
    pub key: String,
    pub text: String,
    pub is_selected: bool,
}

/// View-model for the active quiz screen. Owns the [`QuizRun`] and exposes
/// display-ready fields; the screen drives it through select/navigate/tick
/// and the async submit.
pub struct QuizVm {
    run: QuizRun,
}

impl QuizVm {
    #[must_use]
    pub fn new(run: QuizRun) -> Self {
        Self { run }
    }

    #[must_use]
    pub fn phase(&self) -> RunPhase {
        self.run.phase()
    }

    #[must_use]
    pub fn timed_out(&self) -> bool {
        self.run.timed_out()
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        format!(
            "Question {} of {}",
            self.run.current_index() + 1,
            self.run.total_questions()
        )
    }

    /// Progress through the question list as a whole percentage.
    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        let total = self.run.total_questions();
        if total == 0 {
            return 0;
        }
        ((self.run.current_index() + 1) * 100 / total) as u32
    }

    #[must_use]
    pub fn clock_label(&self) -> String {
        format_clock(self.run.time_left())
    }

    /// Under a minute left: the header renders the clock in warning colors.
    #[must_use]
    pub fn low_time(&self) -> bool {
        self.run.time_left() < 60
    }

    #[must_use]
    pub fn prompt(&self) -> String {
        self.run.current_question().prompt().to_string()
    }

    #[must_use]
    pub fn options(&self) -> Vec<OptionChoiceVm> {
        let question = self.run.current_question();
        let selected = self
            .run
            .answer_for(question.id())
            .map(|answer| answer.selected_key.clone())
            .unwrap_or_default();
        question
            .options()
            .iter()
            .map(|option| OptionChoiceVm {
                key: option.key.clone(),
                text: option.text.clone(),
                is_selected: option.key == selected,
            })
            .collect()
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.run.current_index() == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.run.current_index() + 1 == self.run.total_questions()
    }

    pub fn select(&mut self, key: &str) -> bool {
        let question_id = self.run.current_question().id();
        self.run.select_answer(question_id, key)
    }

    pub fn advance(&mut self) {
        self.run.advance();
    }

    pub fn retreat(&mut self) {
        self.run.retreat();
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.run.tick()
    }

    pub fn exit(&mut self) -> bool {
        self.run.exit().is_ok()
    }

    /// Submit the accumulated answers for grading.
    ///
    /// On success the run is spent and the report should be handed to the
    /// results screen. On failure the run is back in `Active` with countdown
    /// and answers intact, ready for a retry.
    ///
    /// # Errors
    ///
    /// Returns a `ViewError` carrying the user-facing message.
    pub async fn submit(&mut self, quiz: &QuizService) -> Result<GradeReport, ViewError> {
        quiz.submit(&mut self.run).await.map_err(|err| match err {
            QuizServiceError::Api(api) => ViewError::Api(api.user_message()),
            QuizServiceError::Run(_) => ViewError::Unknown,
        })
    }
}
