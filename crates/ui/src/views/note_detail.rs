use dioxus::prelude::*;

use exam_core::model::{Note, NoteId};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::format_datetime;

#[derive(Clone, Debug, PartialEq)]
struct NoteData {
    note: Note,
}

#[component]
pub fn NoteDetailView(note_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let content = ctx.content();

    let resource = use_resource(move || {
        let content = content.clone();
        async move {
            let note = content
                .get_note(NoteId::new(note_id))
                .await
                .map_err(|err| ViewError::from_api(&err))?;
            Ok::<_, ViewError>(NoteData { note })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
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
                ViewState::Ready(data) => {
                    let updated = format_datetime(data.note.updated_at);
                    rsx! {
                        header { class: "view-header",
                            h2 { class: "view-title", "{data.note.title}" }
                            p { class: "view-subtitle", "Updated {updated}" }
                        }
                        div { class: "view-divider" }
                        article { class: "note-content",
                            p { "{data.note.content}" }
                        }
                    }
                },
            }
        }
    }
}
