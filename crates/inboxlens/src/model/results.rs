//! Processed results view model.

use inboxlens_core::{ResultsFilter, SortOrder};

/// How processed results are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Cards sorted by importance.
    #[default]
    Cards,
    /// Table in the order results arrived.
    Table,
}

impl Layout {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Cards => Self::Table,
            Self::Table => Self::Cards,
        }
    }

    /// Sorting that goes with the layout.
    pub const fn sort_order(self) -> SortOrder {
        match self {
            Self::Cards => SortOrder::ImportanceDesc,
            Self::Table => SortOrder::AsReceived,
        }
    }

    /// Label of the button that switches away from this layout.
    pub const fn switch_label(self) -> &'static str {
        match self {
            Self::Cards => "\u{2630} Table",
            Self::Table => "\u{25A6} Cards",
        }
    }
}

/// Filters and layout of the processed results view.
#[derive(Debug, Clone, Default)]
pub struct ResultsViewState {
    pub filter: ResultsFilter,
    pub layout: Layout,
}
