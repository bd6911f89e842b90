use thiserror::Error;

use crate::model::{Answer, Question, QuestionId, SessionId};

/// Countdown budget granted per question.
pub const SECONDS_PER_QUESTION: u32 = 60;

//
// ─── RUN PHASES ────────────────────────────────────────────────────────────────
//

/// Lifecycle phase of a quiz attempt.
///
/// `Active` → `Submitting` → `Submitted`, with `Active` → `Exited` on user
/// cancel. Countdown expiry is tracked separately (see [`QuizRun::timed_out`])
/// because a failed auto-submission drops the run back to `Active` for a
/// manual retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Active,
    Submitting,
    Submitted,
    Exited,
}

/// Result of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Countdown decremented; seconds remaining.
    Running(u32),
    /// Countdown just hit zero. Reported exactly once per run; the caller
    /// must trigger submission.
    Expired,
    /// Nothing to do: run not active, or the expiry was already reported.
    Idle,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizRunError {
    #[error("cannot start a quiz with no questions")]
    EmptyQuestions,

    #[error("submission already in flight")]
    SubmitInFlight,

    #[error("quiz was already submitted")]
    AlreadySubmitted,

    #[error("operation requires an active quiz (phase: {phase:?})")]
    NotActive { phase: RunPhase },
}

//
// ─── QUIZ RUN ──────────────────────────────────────────────────────────────────
//

/// In-memory state for one timed quiz attempt.
///
/// Owns the ordered question list, one answer slot per question, the current
/// position and the countdown. Purely synchronous: the one-second timer and
/// the grading round-trip live in the layers above, which drive this type
/// through [`tick`](Self::tick), [`begin_submit`](Self::begin_submit) and
/// friends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRun {
    session_id: SessionId,
    questions: Vec<Question>,
    answers: Vec<Answer>,
    current: usize,
    time_left: u32,
    phase: RunPhase,
    timed_out: bool,
}

impl QuizRun {
    /// Start a run over the given questions.
    ///
    /// Builds one unanswered slot per question and a countdown of
    /// [`SECONDS_PER_QUESTION`] × question count.
    ///
    /// # Errors
    ///
    /// Returns `QuizRunError::EmptyQuestions` if the list is empty.
    pub fn new(session_id: SessionId, questions: Vec<Question>) -> Result<Self, QuizRunError> {
        if questions.is_empty() {
            return Err(QuizRunError::EmptyQuestions);
        }

        let answers = questions
            .iter()
            .map(|question| Answer::unanswered(question.id()))
            .collect();
        let count = u32::try_from(questions.len()).unwrap_or(u32::MAX);
        let time_left = count.saturating_mul(SECONDS_PER_QUESTION);

        Ok(Self {
            session_id,
            questions,
            answers,
            current: 0,
            time_left,
            phase: RunPhase::Active,
            timed_out: false,
        })
    }

    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    #[must_use]
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// True once the countdown has hit zero. One-way.
    #[must_use]
    pub fn timed_out(&self) -> bool {
        self.timed_out
    }

    #[must_use]
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Answers in question order, one per question, unanswered slots included.
    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        // `current` is clamped to [0, len) and the list is non-empty by construction.
        &self.questions[self.current]
    }

    #[must_use]
    pub fn answer_for(&self, question_id: QuestionId) -> Option<&Answer> {
        self.answers
            .iter()
            .find(|answer| answer.question_id == question_id)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|answer| answer.is_answered()).count()
    }

    /// Record an option selection for a question in this run.
    ///
    /// No-op (returns `false`) when the run is not active, when `question_id`
    /// is not part of the run (stale reference), or when `key` is not one of
    /// that question's option keys. Re-selecting overwrites the prior choice;
    /// other answers are untouched.
    pub fn select_answer(&mut self, question_id: QuestionId, key: &str) -> bool {
        if self.phase != RunPhase::Active {
            return false;
        }
        let Some(question) = self
            .questions
            .iter()
            .find(|question| question.id() == question_id)
        else {
            return false;
        };
        if !question.has_option(key) {
            return false;
        }

        let Some(answer) = self
            .answers
            .iter_mut()
            .find(|answer| answer.question_id == question_id)
        else {
            return false;
        };
        answer.selected_key = key.to_string();
        true
    }

    /// Move to the next question; no-op at the last question or outside `Active`.
    pub fn advance(&mut self) {
        if self.phase == RunPhase::Active && self.current + 1 < self.questions.len() {
            self.current += 1;
        }
    }

    /// Move to the previous question; no-op at the first question or outside `Active`.
    pub fn retreat(&mut self) {
        if self.phase == RunPhase::Active && self.current > 0 {
            self.current -= 1;
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Returns [`TickOutcome::Expired`] exactly once, on the tick that drains
    /// the countdown; later zero-ticks return `Idle` so timer re-entry cannot
    /// trigger a second automatic submission. Ticks outside `Active` are
    /// ignored, which is what pauses the clock while a submission is in
    /// flight.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != RunPhase::Active || self.timed_out {
            return TickOutcome::Idle;
        }

        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.timed_out = true;
            return TickOutcome::Expired;
        }
        TickOutcome::Running(self.time_left)
    }

    /// Enter the `Submitting` phase.
    ///
    /// # Errors
    ///
    /// `SubmitInFlight` while a submission is outstanding, `AlreadySubmitted`
    /// after a successful grade, `NotActive` from `Exited`.
    pub fn begin_submit(&mut self) -> Result<(), QuizRunError> {
        match self.phase {
            RunPhase::Active => {
                self.phase = RunPhase::Submitting;
                Ok(())
            }
            RunPhase::Submitting => Err(QuizRunError::SubmitInFlight),
            RunPhase::Submitted => Err(QuizRunError::AlreadySubmitted),
            RunPhase::Exited => Err(QuizRunError::NotActive { phase: self.phase }),
        }
    }

    /// Revert a failed submission: back to `Active`, countdown and answers
    /// exactly as they were, so the user can retry with the same payload.
    pub fn submit_failed(&mut self) {
        if self.phase == RunPhase::Submitting {
            self.phase = RunPhase::Active;
        }
    }

    /// Mark the run graded. One-way; the run is done afterwards.
    ///
    /// # Errors
    ///
    /// Returns `NotActive` unless a submission was in flight.
    pub fn complete(&mut self) -> Result<(), QuizRunError> {
        if self.phase != RunPhase::Submitting {
            return Err(QuizRunError::NotActive { phase: self.phase });
        }
        self.phase = RunPhase::Submitted;
        Ok(())
    }

    /// Abandon the run after the user confirmed the exit gate.
    ///
    /// # Errors
    ///
    /// Returns `NotActive` outside `Active`.
    pub fn exit(&mut self) -> Result<(), QuizRunError> {
        if self.phase != RunPhase::Active {
            return Err(QuizRunError::NotActive { phase: self.phase });
        }
        self.phase = RunPhase::Exited;
        Ok(())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Question, QuestionOption, SubjectId};

    fn question(id: u64) -> Question {
        Question::new(
            QuestionId::new(id),
            SubjectId::new(1),
            2022,
            format!("Question {id}?"),
            vec![
                QuestionOption {
                    key: "A".into(),
                    text: "first".into(),
                },
                QuestionOption {
                    key: "B".into(),
                    text: "second".into(),
                },
                QuestionOption {
                    key: "C".into(),
                    text: "third".into(),
                },
            ],
            "A",
            "",
            "medium",
            "en",
        )
        .unwrap()
    }

    fn run_of(n: u64) -> QuizRun {
        let questions = (1..=n).map(question).collect();
        QuizRun::new(SessionId::new(77), questions).unwrap()
    }

    #[test]
    fn new_builds_one_empty_answer_per_question() {
        let run = run_of(4);
        assert_eq!(run.answers().len(), 4);
        assert!(run.answers().iter().all(|answer| !answer.is_answered()));
        assert_eq!(run.time_left(), 4 * SECONDS_PER_QUESTION);
        assert_eq!(run.current_index(), 0);
        assert_eq!(run.phase(), RunPhase::Active);
    }

    #[test]
    fn new_rejects_empty_question_list() {
        let err = QuizRun::new(SessionId::new(1), Vec::new()).unwrap_err();
        assert_eq!(err, QuizRunError::EmptyQuestions);
    }

    #[test]
    fn select_answer_overwrites_without_touching_others() {
        let mut run = run_of(3);
        assert!(run.select_answer(QuestionId::new(1), "B"));
        assert!(run.select_answer(QuestionId::new(3), "A"));

        // Idempotent re-selection.
        assert!(run.select_answer(QuestionId::new(1), "B"));
        assert_eq!(run.answer_for(QuestionId::new(1)).unwrap().selected_key, "B");

        // Overwrite.
        assert!(run.select_answer(QuestionId::new(1), "C"));
        assert_eq!(run.answer_for(QuestionId::new(1)).unwrap().selected_key, "C");
        assert_eq!(run.answer_for(QuestionId::new(3)).unwrap().selected_key, "A");
        assert!(!run.answer_for(QuestionId::new(2)).unwrap().is_answered());
    }

    #[test]
    fn select_answer_ignores_stale_question_and_unknown_key() {
        let mut run = run_of(2);
        assert!(!run.select_answer(QuestionId::new(99), "A"));
        assert!(!run.select_answer(QuestionId::new(1), "Z"));
        assert_eq!(run.answered_count(), 0);
    }

    #[test]
    fn navigation_clamps_to_bounds() {
        let mut run = run_of(2);
        run.retreat();
        assert_eq!(run.current_index(), 0);
        run.advance();
        assert_eq!(run.current_index(), 1);
        run.advance();
        assert_eq!(run.current_index(), 1);
        run.retreat();
        assert_eq!(run.current_index(), 0);
    }

    #[test]
    fn navigation_is_frozen_while_submitting() {
        let mut run = run_of(3);
        run.begin_submit().unwrap();
        run.advance();
        assert_eq!(run.current_index(), 0);
    }

    #[test]
    fn countdown_expires_exactly_once() {
        let mut run = run_of(1);
        for remaining in (1..SECONDS_PER_QUESTION).rev() {
            assert_eq!(run.tick(), TickOutcome::Running(remaining));
        }
        assert_eq!(run.tick(), TickOutcome::Expired);
        // Repeated zero-ticks must not re-trigger submission.
        assert_eq!(run.tick(), TickOutcome::Idle);
        assert_eq!(run.tick(), TickOutcome::Idle);
        assert!(run.timed_out());
        assert_eq!(run.time_left(), 0);
    }

    #[test]
    fn tick_is_idle_while_submitting() {
        let mut run = run_of(2);
        let before = run.time_left();
        run.begin_submit().unwrap();
        assert_eq!(run.tick(), TickOutcome::Idle);
        assert_eq!(run.time_left(), before);
    }

    #[test]
    fn double_submit_is_rejected() {
        let mut run = run_of(2);
        run.begin_submit().unwrap();
        assert_eq!(run.begin_submit().unwrap_err(), QuizRunError::SubmitInFlight);
        run.complete().unwrap();
        assert_eq!(
            run.begin_submit().unwrap_err(),
            QuizRunError::AlreadySubmitted
        );
    }

    #[test]
    fn failed_submission_resumes_where_it_stopped() {
        let mut run = run_of(2);
        run.select_answer(QuestionId::new(1), "B");
        for _ in 0..30 {
            run.tick();
        }
        let paused_at = run.time_left();

        run.begin_submit().unwrap();
        run.submit_failed();

        assert_eq!(run.phase(), RunPhase::Active);
        assert_eq!(run.time_left(), paused_at);
        assert_eq!(run.answer_for(QuestionId::new(1)).unwrap().selected_key, "B");

        // Retry goes through.
        run.begin_submit().unwrap();
        run.complete().unwrap();
        assert_eq!(run.phase(), RunPhase::Submitted);
    }

    #[test]
    fn manual_submit_payload_keeps_question_order() {
        // N=3, answer Q1='B', skip Q2, answer Q3='A'.
        let mut run = run_of(3);
        run.select_answer(QuestionId::new(1), "B");
        run.select_answer(QuestionId::new(3), "A");
        run.begin_submit().unwrap();

        let keys: Vec<&str> = run
            .answers()
            .iter()
            .map(|answer| answer.selected_key.as_str())
            .collect();
        assert_eq!(keys, vec!["B", "", "A"]);
    }

    #[test]
    fn expiry_submits_all_answers_including_empty() {
        let mut run = run_of(5);
        run.select_answer(QuestionId::new(2), "A");
        run.select_answer(QuestionId::new(4), "C");

        let mut expired = 0;
        for _ in 0..(5 * SECONDS_PER_QUESTION + 10) {
            if run.tick() == TickOutcome::Expired {
                expired += 1;
                run.begin_submit().unwrap();
            }
        }
        assert_eq!(expired, 1);
        assert_eq!(run.answers().len(), 5);
        assert_eq!(run.answered_count(), 2);
    }

    #[test]
    fn exit_stops_the_run() {
        let mut run = run_of(2);
        run.exit().unwrap();
        assert_eq!(run.phase(), RunPhase::Exited);
        assert_eq!(run.tick(), TickOutcome::Idle);
        assert!(!run.select_answer(QuestionId::new(1), "A"));
        assert!(matches!(
            run.begin_submit().unwrap_err(),
            QuizRunError::NotActive { .. }
        ));
    }

    #[test]
    fn timed_out_run_can_retry_manually_after_failure() {
        let mut run = run_of(1);
        while run.tick() != TickOutcome::Expired {}
        run.begin_submit().unwrap();
        run.submit_failed();

        // Countdown stays drained, no second expiry, but manual submit works.
        assert_eq!(run.tick(), TickOutcome::Idle);
        run.begin_submit().unwrap();
        run.complete().unwrap();
    }
}
