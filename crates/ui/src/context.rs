use std::sync::{Arc, Mutex};

use exam_core::model::GradeReport;
use exam_core::run::QuizRun;
use services::auth::AuthService;
use services::{ContentClient, QuizService};

pub trait UiApp: Send + Sync {
    fn auth(&self) -> Arc<AuthService>;
    fn content(&self) -> Arc<ContentClient>;
    fn quiz(&self) -> Arc<QuizService>;
}

/// Shared state for the view tree: service handles plus two in-memory
/// handoff slots. The slots replace route-parameter payloads: quiz setup
/// parks the freshly started [`QuizRun`] here and the quiz screen takes it;
/// the quiz screen parks the [`GradeReport`] and the results screen takes it.
#[derive(Clone)]
pub struct AppContext {
    auth: Arc<AuthService>,
    content: Arc<ContentClient>,
    quiz: Arc<QuizService>,
    active_run: Arc<Mutex<Option<QuizRun>>>,
    last_report: Arc<Mutex<Option<GradeReport>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            auth: app.auth(),
            content: app.content(),
            quiz: app.quiz(),
            active_run: Arc::new(Mutex::new(None)),
            last_report: Arc::new(Mutex::new(None)),
        }
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn content(&self) -> Arc<ContentClient> {
        Arc::clone(&self.content)
    }

    #[must_use]
    pub fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    /// Park a started run for the quiz screen to pick up.
    pub fn hand_off_run(&self, run: QuizRun) {
        if let Ok(mut slot) = self.active_run.lock() {
            *slot = Some(run);
        }
    }

    /// Take ownership of the parked run. Each run is claimed exactly once.
    #[must_use]
    pub fn take_active_run(&self) -> Option<QuizRun> {
        self.active_run.lock().ok().and_then(|mut slot| slot.take())
    }

    /// Park a grade report for the results screen to pick up.
    pub fn hand_off_report(&self, report: GradeReport) {
        if let Ok(mut slot) = self.last_report.lock() {
            *slot = Some(report);
        }
    }

    #[must_use]
    pub fn take_report(&self) -> Option<GradeReport> {
        self.last_report.lock().ok().and_then(|mut slot| slot.take())
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
