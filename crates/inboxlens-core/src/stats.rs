//! Statistics view model.

use inboxlens_api::StatsSnapshot;

use crate::analysis::Category;

/// One category bar in the statistics view.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    /// Category of the row.
    pub category: Category,
    /// Number of emails.
    pub count: u64,
    /// Share of the total, `0.0..=100.0`.
    pub percentage: f64,
    /// Share formatted with one decimal, e.g. `"42.9%"`.
    pub percentage_label: String,
}

/// Derived statistics for display.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsView {
    /// All processed emails.
    pub total: u64,
    /// Emails flagged important.
    pub important: u64,
    /// Important share, formatted.
    pub important_ratio: String,
    /// Category rows, largest first.
    pub rows: Vec<CategoryRow>,
}

impl StatsView {
    /// Builds the view from a backend snapshot.
    ///
    /// Rows are sorted by descending count, then by name.
    #[must_use]
    pub fn from_snapshot(snapshot: &StatsSnapshot) -> Self {
        let total = snapshot.total;
        let mut rows: Vec<CategoryRow> = snapshot
            .by_category
            .iter()
            .map(|(name, &count)| CategoryRow {
                category: Category::parse(name),
                count,
                percentage: percentage(count, total),
                percentage_label: format_percentage(count, total),
            })
            .collect();
        // `by_category` is a BTreeMap, so equal counts are already in name order.
        rows.sort_by(|a, b| b.count.cmp(&a.count));

        Self {
            total,
            important: snapshot.important,
            important_ratio: format_percentage(snapshot.important, total),
            rows,
        }
    }

    /// Returns true if no email has been processed yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }
}

#[allow(clippy::cast_precision_loss)]
fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Formats `part / total` as a percentage with one decimal.
///
/// A zero total yields `"0%"`.
#[must_use]
pub fn format_percentage(part: u64, total: u64) -> String {
    if total == 0 {
        "0%".to_string()
    } else {
        format!("{:.1}%", percentage(part, total))
    }
}

/// Identifies one statistics fetch.
///
/// A response is applied only if its key still equals the current key, so
/// answers for a reset session or an older refresh are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsRequestKey {
    /// Session the request was made for.
    pub user_id: String,
    /// Refresh generation.
    pub refresh: u64,
}

impl StatsRequestKey {
    /// First key for a session.
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            refresh: 0,
        }
    }

    /// Key for the next refresh of the same session.
    #[must_use]
    pub fn next(&self) -> Self {
        Self {
            user_id: self.user_id.clone(),
            refresh: self.refresh.wrapping_add(1),
        }
    }
}
