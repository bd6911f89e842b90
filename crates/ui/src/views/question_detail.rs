use dioxus::prelude::*;

use exam_core::model::QuestionId;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Debug, PartialEq)]
struct OptionRow {
    key: String,
    text: String,
    is_correct: bool,
}

#[derive(Clone, Debug, PartialEq)]
struct QuestionData {
    prompt: String,
    year: u16,
    difficulty: String,
    explanation: String,
    options: Vec<OptionRow>,
}

/// Single-question study view: the answer stays hidden until revealed.
#[component]
pub fn QuestionDetailView(question_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let content = ctx.content();
    let mut revealed = use_signal(|| false);

    let resource = use_resource(move || {
        let content = content.clone();
        async move {
            let question = content
                .get_question(QuestionId::new(question_id))
                .await
                .map_err(|err| ViewError::from_api(&err))?;
            let options = question
                .options()
                .iter()
                .map(|option| OptionRow {
                    key: option.key.clone(),
                    text: option.text.clone(),
                    is_correct: option.key == question.correct_key(),
                })
                .collect();
            Ok::<_, ViewError>(QuestionData {
                prompt: question.prompt().to_string(),
                year: question.year(),
                difficulty: question.difficulty().to_string(),
                explanation: question.explanation().to_string(),
                options,
            })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            header { class: "view-header",
                h2 { class: "view-title", "Question" }
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
                },
                ViewState::Ready(data) => rsx! {
                    div { class: "question-card",
                        p { class: "question-prompt", "{data.prompt}" }
                        div { class: "card-meta",
                            span { class: "tag", "{data.year}" }
                            span { class: "tag", "{data.difficulty}" }
                        }
                        ul { class: "option-list",
                            for option in data.options {
                                li {
                                    key: "{option.key}",
                                    class: if revealed() && option.is_correct { "option option--correct" } else { "option" },
                                    span { class: "option-key", "{option.key}." }
                                    span { class: "option-text", "{option.text}" }
                                }
                            }
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| revealed.toggle(),
                            if revealed() { "Hide answer" } else { "Show answer" }
                        }
                        if revealed() && !data.explanation.is_empty() {
                            p { class: "explanation", "{data.explanation}" }
                        }
                    }
                },
            }
        }
    }
}
