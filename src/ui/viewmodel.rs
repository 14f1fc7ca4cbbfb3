//! Display-ready snapshot of the UI.
//!
//! Built by [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel)
//! and consumed by the renderer. Everything here is already truncated and
//! labelled; components only place and color it.

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    /// Catalog loading or failure notice shown under the header.
    pub notice: Option<Notice>,
    pub search_bar: Option<SearchBarInfo>,
    pub tag_bar: TagBarInfo,
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<DisplayRow>,
    /// Index of the selected row within `rows`.
    pub selected_index: usize,
    /// "Showing X of Y portfolios", plus the sort when it is on a hidden column.
    pub count_line: String,
    pub pagination: Option<PaginationInfo>,
    pub empty_state: Option<EmptyState>,
    pub contact: Option<ContactPane>,
    pub footer: FooterInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    /// Whether keystrokes currently go to the query.
    pub focused: bool,
}

/// Active tag filters, plus the picker list while it is open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagBarInfo {
    pub selected: Vec<String>,
    pub picker: Option<Vec<TagOption>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOption {
    pub label: String,
    pub selected: bool,
    pub is_cursor: bool,
}

/// Table column with its width and sort arrow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    pub label: String,
    pub width: usize,
    pub arrow: Option<&'static str>,
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub author: String,
    /// Up to three tech badges.
    pub badges: Vec<String>,
    /// "+N more" when the stack has more than three entries.
    pub more: Option<String>,
    pub description: String,
    pub is_selected: bool,
    /// Query match ranges in `author` (char indices, end exclusive).
    pub author_highlights: Vec<(usize, usize)>,
    /// Query match ranges in `description`.
    pub description_highlights: Vec<(usize, usize)>,
}

/// Page links with the current page marked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    pub pages: Vec<usize>,
    pub current: usize,
    pub can_prev: bool,
    pub can_next: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// The contact form pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPane {
    pub fields: Vec<ContactFieldView>,
    pub banner: Option<Notice>,
    pub submitting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFieldView {
    pub label: &'static str,
    /// Typed text, or the placeholder when `is_placeholder`.
    pub value: String,
    pub is_placeholder: bool,
    pub focused: bool,
    pub error: Option<String>,
}
