use exam_core::model::{
    GradeReport, Question, QuestionId, QuestionOption, QuestionResult, SessionId, SubjectId,
};
use exam_core::run::QuizRun;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use super::test_harness::{ViewKind, setup_view_harness};

fn question(id: u64, correct: &str) -> Question {
    Question::new(
        QuestionId::new(id),
        SubjectId::new(1),
        2021,
        format!("What is item {id}?"),
        vec![
            QuestionOption {
                key: "A".into(),
                text: "alpha".into(),
            },
            QuestionOption {
                key: "B".into(),
                text: "beta".into(),
            },
        ],
        correct,
        "Beta is the one.",
        "easy",
        "en",
    )
    .unwrap()
}

#[tokio::test(flavor = "current_thread")]
async fn exams_view_smoke_renders_cards() {
    let mut harness = setup_view_harness(ViewKind::Exams).await;
    Mock::given(method("GET"))
        .and(path("/exams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "name": "National Physics Exam",
                "description": "Annual physics certification.",
                "countryCode": "NL"
            }
        ])))
        .mount(&harness.server)
        .await;

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("National Physics Exam"),
        "missing exam name in {html}"
    );
    assert!(html.contains("NL"), "missing country tag in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exams_view_smoke_surfaces_server_message() {
    let mut harness = setup_view_harness(ViewKind::Exams).await;
    Mock::given(method("GET"))
        .and(path("/exams"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "catalog offline" })),
        )
        .mount(&harness.server)
        .await;

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("catalog offline"), "missing message in {html}");
    assert!(html.contains("Retry"), "missing retry button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_setup_smoke_renders_form() {
    let mut harness = setup_view_harness(ViewKind::QuizSetup(5)).await;
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Number of questions"),
        "missing count field in {html}"
    );
    assert!(html.contains("Start Quiz"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_claims_parked_run() {
    let harness = setup_view_harness(ViewKind::Quiz).await;
    let questions = vec![question(1, "A"), question(2, "B"), question(3, "A")];
    let run = QuizRun::new(SessionId::new(9), questions).unwrap();
    harness.ctx.hand_off_run(run);

    let mut harness = harness;
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Question 1 of 3"),
        "missing progress in {html}"
    );
    assert!(html.contains("3:00"), "missing countdown in {html}");
    assert!(html.contains("alpha"), "missing option text in {html}");
    assert!(html.contains("Exit"), "missing exit button in {html}");

    assert!(harness.ctx.take_active_run().is_none(), "run claimed once");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_empty_without_run() {
    let mut harness = setup_view_harness(ViewKind::Quiz).await;
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("No quiz in progress."),
        "missing empty state in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_breakdown() {
    let harness = setup_view_harness(ViewKind::Results).await;
    let report = GradeReport::from_parts(
        SessionId::new(9),
        1,
        2,
        vec![
            QuestionResult {
                question_id: QuestionId::new(1),
                question: question(1, "B"),
                user_answer_key: "B".into(),
                is_correct: true,
            },
            QuestionResult {
                question_id: QuestionId::new(2),
                question: question(2, "A"),
                user_answer_key: String::new(),
                is_correct: false,
            },
        ],
    )
    .unwrap();
    harness.ctx.hand_off_report(report);

    let mut harness = harness;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("1 / 2"), "missing score in {html}");
    assert!(html.contains("50%"), "missing percent in {html}");
    assert!(html.contains("Not answered"), "missing skip label in {html}");
    assert!(
        html.contains("Beta is the one."),
        "missing explanation in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_empty_without_report() {
    let mut harness = setup_view_harness(ViewKind::Results).await;
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("No quiz results to show."),
        "missing empty state in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_smoke_renders_attempts() {
    let mut harness = setup_view_harness(ViewKind::History).await;
    Mock::given(method("GET"))
        .and(path("/quizzes/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 21,
                "subjectId": 5,
                "subject": {
                    "id": 5,
                    "examId": 1,
                    "name": "Mechanics",
                    "description": "Forces and motion."
                },
                "startTime": "2024-03-01T10:00:00Z",
                "endTime": "2024-03-01T10:20:00Z",
                "score": 7,
                "totalQuestions": 10
            }
        ])))
        .mount(&harness.server)
        .await;

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Mechanics"), "missing subject in {html}");
    assert!(html.contains("7 / 10"), "missing score in {html}");
    assert!(html.contains("70%"), "missing percent in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_prompts_login_when_anonymous() {
    let mut harness = setup_view_harness(ViewKind::Home).await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Log in"), "missing login link in {html}");
    assert!(
        html.contains("Create account"),
        "missing register link in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_dashboard_sections() {
    let harness = setup_view_harness(ViewKind::Home).await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "tok-1",
            "user": { "id": 1, "username": "amina", "email": "amina@example.com" }
        })))
        .mount(&harness.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/quizzes/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 21,
                "subjectId": 5,
                "subject": {
                    "id": 5,
                    "examId": 1,
                    "name": "Mechanics",
                    "description": "Forces and motion."
                },
                "startTime": "2024-03-01T10:00:00Z",
                "endTime": "2024-03-01T10:20:00Z",
                "score": 7,
                "totalQuestions": 10
            },
            {
                "id": 22,
                "subjectId": 6,
                "subject": {
                    "id": 6,
                    "examId": 1,
                    "name": "Optics",
                    "description": "Light and lenses."
                },
                "startTime": "2024-03-05T10:00:00Z",
                "endTime": "2024-03-05T10:20:00Z",
                "score": 9,
                "totalQuestions": 10
            }
        ])))
        .mount(&harness.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/exams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "name": "National Physics Exam",
                "description": "Annual physics certification.",
                "countryCode": "NL"
            }
        ])))
        .mount(&harness.server)
        .await;

    harness
        .ctx
        .auth()
        .login(&services::LoginCredentials {
            email: "amina@example.com".to_string(),
            password: "secret".to_string(),
        })
        .await
        .expect("login");

    let mut harness = harness;
    harness.rebuild();
    // Two sequential round-trips (history, then exams) before the dashboard renders.
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Welcome back, amina."),
        "missing welcome in {html}"
    );
    assert!(html.contains("Recent Quizzes"), "missing section in {html}");
    assert!(html.contains("Mechanics"), "missing attempt in {html}");
    // Later attempt is listed before the earlier one.
    let optics = html.find("Optics").expect("optics card");
    let mechanics = html.find("Mechanics").expect("mechanics card");
    assert!(optics < mechanics, "attempts not newest first in {html}");
    assert!(
        html.contains("National Physics Exam"),
        "missing exam shortcut in {html}"
    );
    assert!(
        html.contains("View All Quizzes"),
        "missing history link in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn resources_view_smoke_lists_study_tips() {
    let mut harness = setup_view_harness(ViewKind::Resources).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Study Resources"), "missing title in {html}");
    assert!(
        html.contains("Spaced Repetition"),
        "missing first tip in {html}"
    );
    assert!(
        html.contains("Pomodoro Technique"),
        "missing tip in {html}"
    );
}
