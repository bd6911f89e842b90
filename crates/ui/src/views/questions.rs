use dioxus::prelude::*;
use dioxus_router::Link;

use exam_core::model::SubjectId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Debug, PartialEq)]
struct QuestionRow {
    id: u64,
    prompt: String,
    year: u16,
    difficulty: String,
}

#[derive(Clone, Debug, PartialEq)]
struct QuestionsData {
    rows: Vec<QuestionRow>,
}

#[component]
pub fn SubjectQuestionsView(subject_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let content = ctx.content();

    let resource = use_resource(move || {
        let content = content.clone();
        async move {
            let questions = content
                .list_questions(SubjectId::new(subject_id))
                .await
                .map_err(|err| ViewError::from_api(&err))?;
            let rows = questions
                .iter()
                .map(|question| QuestionRow {
                    id: question.id().value(),
                    prompt: question.prompt().to_string(),
                    year: question.year(),
                    difficulty: question.difficulty().to_string(),
                })
                .collect();
            Ok::<_, ViewError>(QuestionsData { rows })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            header { class: "view-header",
                h2 { class: "view-title", "Past Questions" }
            }
            div { class: "view-divider" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "view-error", "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(data) => rsx! {
                    if data.rows.is_empty() {
                        p { "No questions for this subject yet." }
                    } else {
                        ul { class: "card-list",
                            for row in data.rows {
                                li { key: "{row.id}",
                                    Link {
                                        class: "card-link",
                                        to: Route::QuestionDetail { question_id: row.id },
                                        div { class: "card",
                                            p { "{row.prompt}" }
                                            div { class: "card-meta",
                                                span { class: "tag", "{row.year}" }
                                                span { class: "tag", "{row.difficulty}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
