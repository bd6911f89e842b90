use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::{NoteId, SubjectId};

/// A study note attached to a subject. Content is server-authored text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub subject_id: SubjectId,
    pub title: String,
    pub content: String,
    pub language: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
