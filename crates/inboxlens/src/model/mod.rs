//! GUI-side state models.

mod add_email;
mod notice;
mod results;
mod server_list;
mod settings;
mod status;

pub use add_email::AddEmailState;
pub use notice::{Notice, NoticeKind};
pub use results::{Layout, ResultsViewState};
pub use server_list::ServerListState;
pub use settings::AppSettings;
pub use status::{BackendHealth, StatsState};
