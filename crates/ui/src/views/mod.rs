mod auth;
mod exams;
mod history;
mod home;
mod note_detail;
mod notes;
mod profile;
mod question_detail;
mod questions;
mod quiz;
mod quiz_setup;
mod resources;
mod results;
mod state;
mod subjects;

#[cfg(test)]
pub mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use auth::{LoginView, RegisterView};
pub use exams::ExamsView;
pub use history::HistoryView;
pub use home::HomeView;
pub use note_detail::NoteDetailView;
pub use notes::SubjectNotesView;
pub use profile::ProfileView;
pub use question_detail::QuestionDetailView;
pub use questions::SubjectQuestionsView;
pub use quiz::QuizView;
pub use quiz_setup::QuizSetupView;
pub use resources::ResourcesView;
pub use results::ResultsView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use subjects::SubjectsView;
