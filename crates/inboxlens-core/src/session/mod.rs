//! User session identity.
//!
//! The backend keeps no accounts. Every stored analysis is keyed by an
//! opaque `user_id` generated on first launch and kept in a local file, so
//! each installation sees only its own data. Resetting the session starts
//! over with an empty server-side history.

mod model;
mod store;

pub use model::UserSession;
pub use store::SessionStore;
