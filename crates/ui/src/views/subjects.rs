use dioxus::prelude::*;
use dioxus_router::Link;

use exam_core::model::{ExamId, Subject};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Debug, PartialEq)]
struct SubjectsData {
    subjects: Vec<Subject>,
}

#[component]
pub fn SubjectsView(exam_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let content = ctx.content();

    let resource = use_resource(move || {
        let content = content.clone();
        async move {
            let subjects = content
                .list_subjects(ExamId::new(exam_id))
                .await
                .map_err(|err| ViewError::from_api(&err))?;
            Ok::<_, ViewError>(SubjectsData { subjects })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            header { class: "view-header",
                h2 { class: "view-title", "Subjects" }
                p { class: "view-subtitle", "Notes, past questions and quizzes per subject." }
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
                    if data.subjects.is_empty() {
                        p { "No subjects in this exam yet." }
                    } else {
                        ul { class: "card-list",
                            for subject in data.subjects {
                                li { key: "{subject.id}",
                                    div { class: "card",
                                        h3 { "{subject.name}" }
                                        p { "{subject.description}" }
                                        div { class: "card-actions",
                                            Link {
                                                class: "btn btn-secondary",
                                                to: Route::SubjectNotes { subject_id: subject.id.value() },
                                                "Notes"
                                            }
                                            Link {
                                                class: "btn btn-secondary",
                                                to: Route::SubjectQuestions { subject_id: subject.id.value() },
                                                "Questions"
                                            }
                                            Link {
                                                class: "btn btn-primary",
                                                to: Route::QuizSetup { subject_id: subject.id.value() },
                                                "Take Quiz"
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
