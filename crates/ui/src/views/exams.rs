use dioxus::prelude::*;
use dioxus_router::Link;

use exam_core::model::Exam;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Debug, PartialEq)]
struct ExamsData {
    exams: Vec<Exam>,
}

#[component]
pub fn ExamsView() -> Element {
    let ctx = use_context::<AppContext>();
    let content = ctx.content();

    let resource = use_resource(move || {
        let content = content.clone();
        async move {
            let exams = content
                .list_exams()
                .await
                .map_err(|err| ViewError::from_api(&err))?;
            Ok::<_, ViewError>(ExamsData { exams })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            header { class: "view-header",
                h2 { class: "view-title", "Exams" }
                p { class: "view-subtitle", "Pick an exam to see its subjects." }
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
                    if data.exams.is_empty() {
                        p { "No exams available yet." }
                    } else {
                        ul { class: "card-list",
                            for exam in data.exams {
                                li { key: "{exam.id}",
                                    Link {
                                        class: "card-link",
                                        to: Route::Subjects { exam_id: exam.id.value() },
                                        div { class: "card",
                                            h3 { "{exam.name}" }
                                            p { "{exam.description}" }
                                            if let Some(country) = exam.country_code.as_ref() {
                                                span { class: "tag", "{country}" }
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
