//! Read-side queries.

pub mod user_progress;

pub use user_progress::{ProgressCounts, UserProgress, summarize_progress};
