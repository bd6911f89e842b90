use dioxus::prelude::*;
use dioxus_router::use_navigator;

use exam_core::model::SubjectId;
use services::QuizServiceError;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StartState {
    Idle,
    Starting,
}

/// Question-count form. On start, the fresh run is parked on the context and
/// the quiz screen claims it; the question payload never touches the route.
#[component]
pub fn QuizSetupView(subject_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut count_input = use_signal(|| "10".to_string());
    let mut start_state = use_signal(|| StartState::Idle);
    let mut error = use_signal(|| None::<ViewError>);

    let on_start = {
        let ctx = ctx.clone();
        use_callback(move |()| {
            let Ok(count) = count_input().trim().parse::<u32>() else {
                error.set(Some(ViewError::Api(
                    "Please enter a valid number of questions.".to_string(),
                )));
                return;
            };
            if count == 0 {
                error.set(Some(ViewError::Api(
                    "Please enter a valid number of questions.".to_string(),
                )));
                return;
            }

            let ctx = ctx.clone();
            let quiz = ctx.quiz_service();
            spawn(async move {
                start_state.set(StartState::Starting);
                match quiz.start(SubjectId::new(subject_id), count).await {
                    Ok(run) => {
                        error.set(None);
                        start_state.set(StartState::Idle);
                        ctx.hand_off_run(run);
                        navigator.push(Route::Quiz {});
                    }
                    Err(QuizServiceError::Api(api)) => {
                        start_state.set(StartState::Idle);
                        error.set(Some(ViewError::from_api(&api)));
                    }
                    Err(QuizServiceError::Run(_)) => {
                        start_state.set(StartState::Idle);
                        error.set(Some(ViewError::Api(
                            "No questions are available for this subject yet.".to_string(),
                        )));
                    }
                }
            });
        })
    };

    let starting = start_state() == StartState::Starting;

    rsx! {
        div { class: "page",
            header { class: "view-header",
                h2 { class: "view-title", "Start a Quiz" }
                p { class: "view-subtitle", "60 seconds per question. Unanswered questions count as wrong." }
            }
            div { class: "view-divider" }

            div { class: "setup-card",
                label { class: "field-label", r#for: "question-count", "Number of questions" }
                input {
                    id: "question-count",
                    class: "field-input",
                    r#type: "number",
                    min: "1",
                    value: "{count_input()}",
                    oninput: move |evt| count_input.set(evt.value()),
                }
                if let Some(err) = error() {
                    p { class: "view-error", "{err.message()}" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: starting,
                    onclick: move |_| on_start.call(()),
                    if starting { "Starting..." } else { "Start Quiz" }
                }
            }
        }
    }
}
