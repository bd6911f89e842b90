use dioxus::prelude::*;
use dioxus_router::Link;

use exam_core::model::{Note, SubjectId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Debug, PartialEq)]
struct NotesData {
    notes: Vec<Note>,
}

#[component]
pub fn SubjectNotesView(subject_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let content = ctx.content();

    let resource = use_resource(move || {
        let content = content.clone();
        async move {
            let notes = content
                .list_notes(SubjectId::new(subject_id))
                .await
                .map_err(|err| ViewError::from_api(&err))?;
            Ok::<_, ViewError>(NotesData { notes })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            header { class: "view-header",
                h2 { class: "view-title", "Study Notes" }
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
                    if data.notes.is_empty() {
                        p { "No notes for this subject yet." }
                    } else {
                        ul { class: "card-list",
                            for note in data.notes {
                                li { key: "{note.id}",
                                    Link {
                                        class: "card-link",
                                        to: Route::NoteDetail { note_id: note.id.value() },
                                        div { class: "card",
                                            h3 { "{note.title}" }
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
