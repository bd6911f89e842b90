mod catalog;
mod ids;
mod note;
mod question;
mod quiz;

pub use catalog::{Exam, Subject};
pub use ids::{ExamId, NoteId, ParseIdError, QuestionId, SessionId, SubjectId};
pub use note::Note;
pub use question::{Question, QuestionError, QuestionOption};
pub use quiz::{Answer, GradeReport, GradeReportError, HistoryEntry, QuestionResult};
