use serde::{Deserialize, Serialize};

use crate::model::ids::{ExamId, SubjectId};

/// A browsable exam, e.g. a national entrance examination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub id: ExamId,
    pub name: String,
    pub description: String,
    pub country_code: Option<String>,
}

/// A subject within an exam. Notes, questions and quizzes hang off subjects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub exam_id: ExamId,
    pub name: String,
    pub description: String,
}
