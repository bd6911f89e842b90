use dioxus::prelude::*;
use dioxus_router::Link;

use exam_core::model::Exam;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{HistoryCardVm, map_history_cards};

#[derive(Clone, Debug, PartialEq)]
struct DashboardData {
    username: String,
    recent: Vec<HistoryCardVm>,
    exams: Vec<Exam>,
}

/// Dashboard: the three most recent attempts and a shortlist of exams,
/// with quick links into both full lists. Anonymous visitors get the
/// login prompt instead.
#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = ctx.auth();
    let content = ctx.content();

    let resource = use_resource(move || {
        let auth = auth.clone();
        let content = content.clone();
        async move {
            let Some(user) = auth.current_user() else {
                return Ok::<_, ViewError>(None);
            };
            let entries = content
                .quiz_history()
                .await
                .map_err(|err| ViewError::from_api(&err))?;
            let recent = map_history_cards(&entries).into_iter().take(3).collect();
            let exams = content
                .list_exams()
                .await
                .map_err(|err| ViewError::from_api(&err))?
                .into_iter()
                .take(3)
                .collect();
            Ok(Some(DashboardData {
                username: user.username,
                recent,
                exams,
            }))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            header { class: "view-header",
                h2 { class: "view-title", "Home" }
                p { class: "view-subtitle", "Browse exams, study notes, and take timed quizzes." }
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
                ViewState::Ready(None) => rsx! {
                    p { "Log in to start practicing." }
                    div { class: "home-links",
                        Link { class: "btn btn-primary", to: Route::Login {}, "Log in" }
                        Link { class: "btn btn-secondary", to: Route::Register {}, "Create account" }
                    }
                },
                ViewState::Ready(Some(data)) => rsx! {
                    p { "Welcome back, {data.username}." }
                    div { class: "home-links",
                        Link { class: "btn btn-primary", to: Route::Exams {}, "Browse Exams" }
                        Link { class: "btn btn-secondary", to: Route::History {}, "Quiz History" }
                    }

                    section { class: "home-section",
                        h3 { "Recent Quizzes" }
                        if data.recent.is_empty() {
                            p { "You haven't taken any quizzes yet." }
                            Link { class: "btn btn-primary", to: Route::Exams {}, "Start a Quiz" }
                        } else {
                            ul { class: "card-list",
                                for card in data.recent {
                                    li { key: "{card.session_id}",
                                        div { class: "card history-card",
                                            h4 { "{card.subject_name}" }
                                            p { class: "history-date", "{card.completed_at_str}" }
                                            div { class: "history-score",
                                                span { "{card.score_label}" }
                                                span { class: "tag", "{card.percent_label}" }
                                            }
                                        }
                                    }
                                }
                            }
                            Link { class: "view-all-link", to: Route::History {}, "View All Quizzes" }
                        }
                    }

                    section { class: "home-section",
                        h3 { "Available Exams" }
                        if data.exams.is_empty() {
                            p { "No exams available at the moment." }
                        } else {
                            ul { class: "card-list",
                                for exam in data.exams {
                                    li { key: "{exam.id}",
                                        Link {
                                            class: "card-link",
                                            to: Route::Subjects { exam_id: exam.id.value() },
                                            div { class: "card",
                                                h4 { "{exam.name}" }
                                                p { "{exam.description}" }
                                            }
                                        }
                                    }
                                }
                            }
                            Link { class: "view-all-link", to: Route::Exams {}, "View All Exams" }
                        }
                    }
                },
            }
        }
    }
}
