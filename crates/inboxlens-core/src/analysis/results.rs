//! Filtering, sorting and bookkeeping for processed results.

use std::collections::BTreeSet;

use super::model::{Category, ProcessedEmail};
use crate::inbox::StagedId;

/// Category predicate of a results filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every category.
    #[default]
    All,
    /// Exactly one category.
    Only(Category),
}

impl CategoryFilter {
    /// Returns true if `category` passes.
    #[must_use]
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    /// Chip label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.display_name(),
        }
    }
}

/// Client-side filter over processed results.
///
/// The three predicates compose conjunctively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsFilter {
    /// Category predicate.
    pub category: CategoryFilter,
    /// Case-insensitive substring matched against subject, sender and summary.
    pub search: String,
    /// Keep only emails flagged important.
    pub important_only: bool,
}

impl ResultsFilter {
    /// Returns true if `email` passes every predicate.
    #[must_use]
    pub fn matches(&self, email: &ProcessedEmail) -> bool {
        if !self.category.matches(&email.category) {
            return false;
        }
        if self.important_only && !email.is_important {
            return false;
        }
        let needle = self.search.to_lowercase();
        needle.is_empty()
            || [&email.subject, &email.sender, &email.summary]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Returns true if no predicate is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category == CategoryFilter::All && self.search.is_empty() && !self.important_only
    }
}

/// Ordering of filtered results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Keep the collection order.
    #[default]
    AsReceived,
    /// Highest importance first; ties keep collection order.
    ImportanceDesc,
}

/// Filters `emails` and orders the survivors.
#[must_use]
pub fn apply_filter<'a>(
    emails: impl IntoIterator<Item = &'a ProcessedEmail>,
    filter: &ResultsFilter,
    order: SortOrder,
) -> Vec<&'a ProcessedEmail> {
    let mut shown: Vec<_> = emails.into_iter().filter(|e| filter.matches(e)).collect();
    if order == SortOrder::ImportanceDesc {
        // `sort_by` is stable.
        shown.sort_by(|a, b| b.importance_score.cmp(&a.importance_score));
    }
    shown
}

/// Ordered set of processed emails, newest batch first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessedSet {
    items: Vec<ProcessedEmail>,
}

impl ProcessedSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Puts `batch` in front of the existing items, keeping its order.
    ///
    /// An existing item with the same id is replaced by the new one.
    pub fn prepend(&mut self, batch: Vec<ProcessedEmail>) {
        let incoming: BTreeSet<StagedId> = batch.iter().map(|e| e.id.clone()).collect();
        self.items.retain(|e| !incoming.contains(&e.id));
        self.items.splice(0..0, batch);
    }

    /// Replaces the whole collection.
    pub fn replace_all(&mut self, items: Vec<ProcessedEmail>) {
        self.items = items;
    }

    /// Swaps in `email` at the position of the item with the same id.
    ///
    /// Returns false, leaving the set untouched, if no such item exists.
    pub fn replace(&mut self, email: ProcessedEmail) -> bool {
        match self.items.iter_mut().find(|e| e.id == email.id) {
            Some(slot) => {
                *slot = email;
                true
            }
            None => false,
        }
    }

    /// Removes and returns the item with `id`.
    pub fn remove(&mut self, id: &StagedId) -> Option<ProcessedEmail> {
        let index = self.items.iter().position(|e| &e.id == id)?;
        Some(self.items.remove(index))
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn get(&self, id: &StagedId) -> Option<&ProcessedEmail> {
        self.items.iter().find(|e| &e.id == id)
    }

    /// Iterates in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, ProcessedEmail> {
        self.items.iter()
    }

    /// Number of items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes everything.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Items as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ProcessedEmail] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a ProcessedSet {
    type Item = &'a ProcessedEmail;
    type IntoIter = std::slice::Iter<'a, ProcessedEmail>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Counts shown in the strip above the results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultsSummary {
    /// All processed emails.
    pub total: usize,
    /// Emails passing the current filter.
    pub shown: usize,
    /// Emails flagged important.
    pub important: usize,
    /// Emails the backend suggests replying to.
    pub needs_reply: usize,
    /// Distinct categories among all emails.
    pub categories: usize,
}

impl ResultsSummary {
    /// Computes counts over `all`, with `shown` taken from the filtered view.
    #[must_use]
    pub fn compute(all: &[ProcessedEmail], shown: usize) -> Self {
        let categories: BTreeSet<&Category> = all.iter().map(|e| &e.category).collect();
        Self {
            total: all.len(),
            shown,
            important: all.iter().filter(|e| e.is_important).count(),
            needs_reply: all.iter().filter(|e| e.needs_reply()).count(),
            categories: categories.len(),
        }
    }
}
