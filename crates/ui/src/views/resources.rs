use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

struct StudyTip {
    title: &'static str,
    content: &'static str,
}

const STUDY_TIPS: &[StudyTip] = &[
    StudyTip {
        title: "Spaced Repetition",
        content: "Instead of cramming, spread your studying over time. Review material at \
                  increasing intervals to improve long-term retention.",
    },
    StudyTip {
        title: "Active Recall",
        content: "Test yourself frequently. Instead of just re-reading notes, try to recall \
                  information from memory to strengthen neural connections.",
    },
    StudyTip {
        title: "Pomodoro Technique",
        content: "Study in focused 25-minute intervals with 5-minute breaks. After 4 intervals, \
                  take a longer 15-30 minute break.",
    },
    StudyTip {
        title: "Teach What You Learn",
        content: "Explaining concepts to others (or even to yourself) helps solidify your \
                  understanding and identify knowledge gaps.",
    },
    StudyTip {
        title: "Use Multiple Resources",
        content: "Don't rely on a single textbook or source. Diverse learning materials provide \
                  different perspectives and explanations.",
    },
];

/// Static study-technique tips with a pointer into the exam catalog for
/// per-subject notes and questions.
#[component]
pub fn ResourcesView() -> Element {
    rsx! {
        div { class: "page",
            header { class: "view-header",
                h2 { class: "view-title", "Study Resources" }
                p { class: "view-subtitle",
                    "Explore study materials, tips, and resources to help you prepare for your exams."
                }
            }
            div { class: "view-divider" }

            section { class: "home-section",
                h3 { "Effective Study Techniques" }
                for tip in STUDY_TIPS {
                    details { key: "{tip.title}", class: "tip",
                        summary { class: "tip-title", "{tip.title}" }
                        p { class: "tip-content", "{tip.content}" }
                    }
                }
            }

            section { class: "home-section",
                h3 { "Subject Resources" }
                p { "Notes and past questions live under each subject." }
                Link { class: "btn btn-primary", to: Route::Exams {}, "Browse Exams" }
            }
        }
    }
}
