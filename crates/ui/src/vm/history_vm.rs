use exam_core::model::HistoryEntry;

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryCardVm {
    pub session_id: u64,
    pub subject_name: String,
    pub completed_at_str: String,
    pub score_label: String,
    pub percent_label: String,
}

/// Cards sorted newest first by completion time, whatever order the server
/// returned.
#[must_use]
pub fn map_history_cards(entries: &[HistoryEntry]) -> Vec<HistoryCardVm> {
    let mut entries: Vec<&HistoryEntry> = entries.iter().collect();
    entries.sort_by(|a, b| b.ended_at.cmp(&a.ended_at));
    entries
        .into_iter()
        .map(|entry| {
            let percent = if entry.total_questions == 0 {
                0
            } else {
                (entry.score * 100 + entry.total_questions / 2) / entry.total_questions
            };
            HistoryCardVm {
                session_id: entry.session_id.value(),
                subject_name: entry.subject_name.clone(),
                completed_at_str: format_datetime(entry.ended_at),
                score_label: format!("{} / {}", entry.score, entry.total_questions),
                percent_label: format!("{percent}%"),
            }
        })
        .collect()
}
