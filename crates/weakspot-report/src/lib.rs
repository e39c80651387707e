//! weakspot-report — progress snapshots and printable review sheets.

pub mod markdown;
pub mod snapshot;

pub use markdown::review_sheet;
pub use snapshot::{ProgressDelta, ProgressSnapshot};
