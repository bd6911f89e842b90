#![forbid(unsafe_code)]

pub mod model;
pub mod run;

pub use run::{QuizRun, QuizRunError, RunPhase, TickOutcome};
