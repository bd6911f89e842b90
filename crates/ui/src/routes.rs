use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{
    ExamsView, HistoryView, HomeView, LoginView, NoteDetailView, ProfileView, QuestionDetailView,
    QuizSetupView, QuizView, RegisterView, ResourcesView, ResultsView, SubjectNotesView,
    SubjectQuestionsView, SubjectsView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/exams", ExamsView)] Exams {},
        #[route("/exams/:exam_id/subjects", SubjectsView)] Subjects { exam_id: u64 },
        #[route("/subjects/:subject_id/notes", SubjectNotesView)] SubjectNotes { subject_id: u64 },
        #[route("/subjects/:subject_id/questions", SubjectQuestionsView)] SubjectQuestions { subject_id: u64 },
        #[route("/notes/:note_id", NoteDetailView)] NoteDetail { note_id: u64 },
        #[route("/questions/:question_id", QuestionDetailView)] QuestionDetail { question_id: u64 },
        #[route("/quizzes/setup/:subject_id", QuizSetupView)] QuizSetup { subject_id: u64 },
        #[route("/quizzes/active", QuizView)] Quiz {},
        #[route("/quizzes/results", ResultsView)] Results {},
        #[route("/history", HistoryView)] History {},
        #[route("/resources", ResourcesView)] Resources {},
        #[route("/login", LoginView)] Login {},
        #[route("/register", RegisterView)] Register {},
        #[route("/profile", ProfileView)] Profile {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Exam Prep" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Exams {}, "Exams" } }
                li { Link { to: Route::History {}, "Quiz History" } }
                li { Link { to: Route::Resources {}, "Study Resources" } }
                li { Link { to: Route::Profile {}, "Profile" } }
            }
        }
    }
}
