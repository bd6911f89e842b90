use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{ResultCardVm, map_report};

/// Grade breakdown for the run that just finished. The report is claimed from
/// the context once; a refresh or revisit lands on the empty state.
#[component]
pub fn ResultsView() -> Element {
    let ctx = use_context::<AppContext>();
    let results = use_signal({
        let ctx = ctx.clone();
        move || ctx.take_report().map(|report| map_report(&report))
    });

    let Some(vm) = results() else {
        return rsx! {
            div { class: "page",
                p { "No quiz results to show." }
                Link { class: "btn btn-primary", to: Route::Exams {}, "Browse Exams" }
            }
        };
    };

    rsx! {
        div { class: "page",
            header { class: "view-header",
                h2 { class: "view-title", "Results" }
                p { class: "results-score", "{vm.score_label}" }
                p { class: "results-percent", "{vm.percent_label}" }
            }
            div { class: "view-divider" }

            ul { class: "card-list",
                for card in vm.cards {
                    li { key: "{card.question_id}",
                        ResultCard { card }
                    }
                }
            }

            footer { class: "results-footer",
                Link { class: "btn btn-secondary", to: Route::History {}, "Quiz History" }
                Link { class: "btn btn-primary", to: Route::Exams {}, "Back to Exams" }
            }
        }
    }
}

#[component]
fn ResultCard(card: ResultCardVm) -> Element {
    let card_class = if card.is_correct {
        "card result-card result-correct"
    } else {
        "card result-card result-incorrect"
    };

    rsx! {
        div { class: "{card_class}",
            div { class: "result-card-header",
                h3 { "{card.prompt}" }
                span { class: "result-status", "{card.status_label}" }
            }
            p { class: "result-user-answer", "{card.user_answer_label}" }
            ul { class: "result-options",
                for option in card.options {
                    li { key: "{option.key}",
                        span {
                            class: if option.is_correct {
                                "result-option result-option-correct"
                            } else if option.is_user_choice {
                                "result-option result-option-chosen"
                            } else {
                                "result-option"
                            },
                            "{option.key}. {option.text}"
                        }
                    }
                }
            }
            if !card.explanation.is_empty() {
                p { class: "result-explanation", "{card.explanation}" }
            }
        }
    }
}
