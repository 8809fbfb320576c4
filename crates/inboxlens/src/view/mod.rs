//! View components for the application.

mod add_email;
mod common;
mod detail;
mod header;
mod inbox;
mod notice;
mod processed;
mod server_list;
mod stats;

pub use add_email::view_add_email;
pub use detail::{DetailProps, view_detail};
pub use header::{TabCounts, view_header};
pub use inbox::view_inbox;
pub use notice::view_notice;
pub use processed::view_processed;
pub use server_list::view_server_list;
pub use stats::view_stats;
