use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use reqwest::Client;
use services::{AuthService, ContentClient, QuizService, TokenProvider};
use wiremock::MockServer;

use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::{
    ExamsView, HistoryView, HomeView, LoginView, NoteDetailView, ProfileView, QuestionDetailView,
    QuizSetupView, QuizView, ResourcesView, ResultsView, SubjectNotesView, SubjectQuestionsView,
    SubjectsView,
};

struct TestApp {
    auth: Arc<AuthService>,
    content: Arc<ContentClient>,
    quiz: Arc<QuizService>,
}

impl UiApp for TestApp {
    fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    fn content(&self) -> Arc<ContentClient> {
        Arc::clone(&self.content)
    }

    fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Exams,
    Subjects(u64),
    SubjectNotes(u64),
    SubjectQuestions(u64),
    NoteDetail(u64),
    QuestionDetail(u64),
    QuizSetup(u64),
    Quiz,
    Results,
    History,
    Resources,
    Login,
    Profile,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    ctx: AppContext,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    use_context_provider(|| props.ctx.clone());
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Exams => rsx! { ExamsView {} },
        ViewKind::Subjects(exam_id) => rsx! { SubjectsView { exam_id } },
        ViewKind::SubjectNotes(subject_id) => rsx! { SubjectNotesView { subject_id } },
        ViewKind::SubjectQuestions(subject_id) => rsx! { SubjectQuestionsView { subject_id } },
        ViewKind::NoteDetail(note_id) => rsx! { NoteDetailView { note_id } },
        ViewKind::QuestionDetail(question_id) => rsx! { QuestionDetailView { question_id } },
        ViewKind::QuizSetup(subject_id) => rsx! { QuizSetupView { subject_id } },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Results => rsx! { ResultsView {} },
        ViewKind::History => rsx! { HistoryView {} },
        ViewKind::Resources => rsx! { ResourcesView {} },
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Profile => rsx! { ProfileView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub ctx: AppContext,
    pub server: MockServer,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Build a view harness backed by a fresh mock API server. Mocks are
/// registered by the caller before `rebuild`; handoff slots are filled
/// through the returned context.
pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let server = MockServer::start().await;
    let client = Client::new();
    let auth = Arc::new(AuthService::new(client.clone(), server.uri()));
    let content = Arc::new(ContentClient::new(
        client,
        server.uri(),
        Arc::clone(&auth) as Arc<dyn TokenProvider>,
    ));
    let quiz = Arc::new(QuizService::new(Arc::clone(&content)));

    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        auth,
        content,
        quiz,
    });
    let ctx = build_app_context(&app);

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            ctx: ctx.clone(),
            view,
        },
    );

    ViewHarness { dom, ctx, server }
}
