use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{HistoryCardVm, map_history_cards};

#[derive(Clone, Debug, PartialEq)]
struct HistoryData {
    cards: Vec<HistoryCardVm>,
}

#[component]
pub fn HistoryView() -> Element {
    let ctx = use_context::<AppContext>();
    let content = ctx.content();

    let resource = use_resource(move || {
        let content = content.clone();
        async move {
            let entries = content
                .quiz_history()
                .await
                .map_err(|err| ViewError::from_api(&err))?;
            Ok::<_, ViewError>(HistoryData {
                cards: map_history_cards(&entries),
            })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            header { class: "view-header",
                h2 { class: "view-title", "Quiz History" }
                p { class: "view-subtitle", "Your past attempts, newest first." }
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
                    if data.cards.is_empty() {
                        p { "No quizzes taken yet." }
                        Link { class: "btn btn-primary", to: Route::Exams {}, "Browse Exams" }
                    } else {
                        ul { class: "card-list",
                            for card in data.cards {
                                li { key: "{card.session_id}",
                                    div { class: "card history-card",
                                        h3 { "{card.subject_name}" }
                                        p { class: "history-date", "{card.completed_at_str}" }
                                        div { class: "history-score",
                                            span { "{card.score_label}" }
                                            span { class: "tag", "{card.percent_label}" }
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
