mod history_vm;
mod quiz_vm;
mod result_vm;
mod time_fmt;

pub use history_vm::{HistoryCardVm, map_history_cards};
pub use quiz_vm::{OptionChoiceVm, QuizVm};
pub use result_vm::{ResultCardVm, ResultOptionVm, ResultsVm, map_report};
pub use time_fmt::{format_clock, format_datetime};
