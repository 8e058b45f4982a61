//! Triage pipeline — fetch, classify, merge.

mod triage;
mod types;

pub use triage::TriagePipeline;
pub use types::{ReviewStatus, TriagedComment};
