//! Server list model.

use inboxlens_api::ListFilters;
use inboxlens_core::{CategoryFilter, ProcessedEmail};

/// Emails stored on the backend for the current user.
///
/// Each load gets a generation number; a response for an older generation
/// is dropped so a slow fetch never overwrites a newer one.
#[derive(Debug, Clone, Default)]
pub struct ServerListState {
    pub emails: Vec<ProcessedEmail>,
    pub category: CategoryFilter,
    pub important_only: bool,
    pub is_loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl ServerListState {
    /// Query filters for the current chip selection.
    pub fn filters(&self) -> ListFilters {
        ListFilters {
            category: match &self.category {
                CategoryFilter::All => None,
                CategoryFilter::Only(category) => Some(category.as_str().to_string()),
            },
            important_only: self.important_only.then_some(true),
        }
    }

    /// Starts a load and returns its generation.
    pub const fn begin_load(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.is_loading = true;
        self.generation
    }

    /// Applies a load result. Returns false if the result was stale.
    pub fn finish_load(&mut self, generation: u64, result: Result<Vec<ProcessedEmail>, String>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.is_loading = false;
        match result {
            Ok(emails) => {
                self.emails = emails;
                self.error = None;
            }
            Err(err) => self.error = Some(err),
        }
        true
    }

    /// Swaps in a refreshed copy of a listed email. Returns false if absent.
    pub fn replace(&mut self, email: ProcessedEmail) -> bool {
        match self.emails.iter_mut().find(|e| e.id == email.id) {
            Some(slot) => {
                *slot = email;
                true
            }
            None => false,
        }
    }

    /// Drops a deleted email by backend id.
    pub fn remove(&mut self, remote_id: &str) {
        self.emails
            .retain(|e| e.remote_id.as_deref() != Some(remote_id));
    }

    /// Forgets everything, e.g. after the session changed.
    pub fn reset(&mut self) {
        let generation = self.generation.wrapping_add(1);
        *self = Self {
            generation,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inboxlens_api::AnalysisPayload;
    use inboxlens_core::Category;

    fn stored(id: &str) -> ProcessedEmail {
        ProcessedEmail::from_remote(AnalysisPayload {
            id: Some(id.into()),
            ..AnalysisPayload::default()
        })
    }

    #[test]
    fn test_filters_follow_chips() {
        let mut state = ServerListState::default();
        assert_eq!(state.filters(), ListFilters::default());
        state.category = CategoryFilter::Only(Category::Financial);
        state.important_only = true;
        let filters = state.filters();
        assert_eq!(filters.category.as_deref(), Some("Financial"));
        assert_eq!(filters.important_only, Some(true));
    }

    #[test]
    fn test_stale_load_is_dropped() {
        let mut state = ServerListState::default();
        let first = state.begin_load();
        let second = state.begin_load();
        assert!(!state.finish_load(first, Ok(vec![stored("old")])));
        assert!(state.is_loading);
        assert!(state.finish_load(second, Ok(vec![stored("new")])));
        assert!(!state.is_loading);
        assert_eq!(state.emails[0].remote_id.as_deref(), Some("new"));
    }

    #[test]
    fn test_reset_invalidates_pending_load() {
        let mut state = ServerListState::default();
        let pending = state.begin_load();
        state.reset();
        assert!(!state.finish_load(pending, Ok(vec![stored("x")])));
        assert!(state.emails.is_empty());
    }

    #[test]
    fn test_remove_by_remote_id() {
        let mut state = ServerListState {
            emails: vec![stored("a"), stored("b")],
            ..ServerListState::default()
        };
        state.remove("a");
        assert_eq!(state.emails.len(), 1);
        assert_eq!(state.emails[0].remote_id.as_deref(), Some("b"));
    }
}
