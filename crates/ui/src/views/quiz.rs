use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use exam_core::run::TickOutcome;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::QuizVm;

/// The active quiz screen. Claims the parked [`exam_core::run::QuizRun`] from
/// the context, owns the one-second countdown future, and drives submission.
///
/// The view-model lives in a signal; submission takes it out, awaits the
/// grading round-trip on the owned value, and puts it back only on failure.
/// The timer future dies with the screen, so leaving the quiz cancels the
/// countdown without extra bookkeeping.
#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let mut vm = use_signal({
        let ctx = ctx.clone();
        move || ctx.take_active_run().map(QuizVm::new)
    });
    let mut submitting = use_signal(|| false);
    let mut submit_error = use_signal(|| None::<ViewError>);
    let mut confirm_submit = use_signal(|| false);
    let mut confirm_exit = use_signal(|| false);

    let on_submit = {
        let ctx = ctx.clone();
        use_callback(move |()| {
            let ctx = ctx.clone();
            let quiz = ctx.quiz_service();
            spawn(async move {
                // Take the vm out of the signal so the await holds no borrow.
                let Some(mut value) = vm.write().take() else {
                    return;
                };
                confirm_submit.set(false);
                submitting.set(true);
                submit_error.set(None);
                match value.submit(&quiz).await {
                    Ok(report) => {
                        ctx.hand_off_report(report);
                        navigator.replace(Route::Results {});
                    }
                    Err(err) => {
                        submit_error.set(Some(err));
                        vm.set(Some(value));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    // One tick per second while this screen is mounted. The run ignores ticks
    // outside the active phase, so a submit in flight freezes the clock.
    use_future(move || async move {
        loop {
            tokio::time::sleep(Duration::from_secs(1)).await;
            let expired = vm.with_mut(|slot| {
                matches!(slot.as_mut().map(QuizVm::tick), Some(TickOutcome::Expired))
            });
            if expired {
                on_submit.call(());
            }
        }
    });

    if submitting() {
        return rsx! {
            div { class: "page quiz-page",
                p { class: "quiz-submitting", "Submitting your answers..." }
            }
        };
    }

    let snapshot = vm.with(|slot| slot.as_ref().map(QuizSnapshot::of));
    let Some(snap) = snapshot else {
        return rsx! {
            div { class: "page quiz-page",
                p { "No quiz in progress." }
                Link { class: "btn btn-primary", to: Route::Exams {}, "Browse Exams" }
            }
        };
    };

    let clock_class = if snap.low_time {
        "quiz-clock quiz-clock-low"
    } else {
        "quiz-clock"
    };

    rsx! {
        div { class: "page quiz-page",
            header { class: "quiz-header",
                span { class: "quiz-progress-label", "{snap.progress_label}" }
                span { class: "{clock_class}", "{snap.clock_label}" }
            }
            div { class: "progress-track",
                div {
                    class: "progress-fill",
                    style: "width: {snap.progress_percent}%",
                }
            }

            if let Some(err) = submit_error() {
                p { class: "view-error", "{err.message()}" }
            }

            section { class: "quiz-question",
                h2 { class: "quiz-prompt", "{snap.prompt}" }
                ul { class: "quiz-options",
                    for option in snap.options {
                        li { key: "{option.key}",
                            button {
                                class: if option.is_selected { "option-btn option-selected" } else { "option-btn" },
                                r#type: "button",
                                onclick: {
                                    let key = option.key.clone();
                                    move |_| {
                                        vm.with_mut(|slot| {
                                            if let Some(value) = slot.as_mut() {
                                                value.select(&key);
                                            }
                                        });
                                    }
                                },
                                span { class: "option-key", "{option.key}" }
                                span { class: "option-text", "{option.text}" }
                            }
                        }
                    }
                }
            }

            footer { class: "quiz-footer",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: snap.is_first,
                    onclick: move |_| vm.with_mut(|slot| {
                        if let Some(value) = slot.as_mut() {
                            value.retreat();
                        }
                    }),
                    "Previous"
                }
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| confirm_exit.set(true),
                    "Exit"
                }
                if snap.is_last {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| confirm_submit.set(true),
                        "Submit"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| vm.with_mut(|slot| {
                            if let Some(value) = slot.as_mut() {
                                value.advance();
                            }
                        }),
                        "Next"
                    }
                }
            }

            if confirm_submit() {
                ConfirmDialog {
                    title: "Submit quiz?",
                    body: "Unanswered questions will be counted as incorrect.",
                    confirm_label: "Submit",
                    on_confirm: move |_| on_submit.call(()),
                    on_cancel: move |_| confirm_submit.set(false),
                }
            }
            if confirm_exit() {
                ConfirmDialog {
                    title: "Exit quiz?",
                    body: "Your answers for this attempt will be discarded.",
                    confirm_label: "Exit",
                    on_confirm: move |_| {
                        if let Some(mut value) = vm.write().take() {
                            value.exit();
                        }
                        confirm_exit.set(false);
                        navigator.replace(Route::Exams {});
                    },
                    on_cancel: move |_| confirm_exit.set(false),
                }
            }
        }
    }
}

/// Display-ready copy of the vm state, extracted in one read so the render
/// body holds no borrow on the signal.
struct QuizSnapshot {
    progress_label: String,
    progress_percent: u32,
    clock_label: String,
    low_time: bool,
    prompt: String,
    options: Vec<crate::vm::OptionChoiceVm>,
    is_first: bool,
    is_last: bool,
}

impl QuizSnapshot {
    fn of(vm: &QuizVm) -> Self {
        Self {
            progress_label: vm.progress_label(),
            progress_percent: vm.progress_percent(),
            clock_label: vm.clock_label(),
            low_time: vm.low_time(),
            prompt: vm.prompt(),
            options: vm.options(),
            is_first: vm.is_first(),
            is_last: vm.is_last(),
        }
    }
}

#[component]
fn ConfirmDialog(
    title: &'static str,
    body: &'static str,
    confirm_label: &'static str,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal",
                h3 { "{title}" }
                p { "{body}" }
                div { class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
