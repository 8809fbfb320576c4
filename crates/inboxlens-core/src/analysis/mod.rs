//! Processed email results.

mod model;
mod reply;
mod results;

pub use model::{Category, ImportanceBand, ProcessedEmail};
pub use reply::{
    COPY_CONFIRMATION, CopyIndicator, CopyToken, compose_full_reply, fallback_reply,
    resolve_reply,
};
pub use results::{
    CategoryFilter, ProcessedSet, ResultsFilter, ResultsSummary, SortOrder, apply_filter,
};
