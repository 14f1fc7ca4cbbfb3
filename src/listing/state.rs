//! Listing view state and its transitions.
//!
//! [`ViewState`] holds the user's current query, tag selection, sort request and
//! page position. Every transition is total: no input is rejected, and the only
//! side effect besides the field update is the page reset that a new filter
//! implies.

use crate::domain::SortKey;
use std::collections::BTreeSet;

/// Number of records per page when the configuration does not override it.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Direction of an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Arrow shown next to a sorted column header.
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// An active sort: the column and its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// Mutable selections driving the derived listing view.
///
/// # Examples
///
/// ```
/// use folio::listing::{ViewState, SortDirection};
/// use folio::domain::SortKey;
///
/// let mut state = ViewState::new(6);
/// state.set_page(3);
/// state.set_query("react");
/// assert_eq!(state.page(), 1);
///
/// state.request_sort(SortKey::Author);
/// state.request_sort(SortKey::Author);
/// assert_eq!(state.sort().unwrap().direction, SortDirection::Descending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    query: String,
    selected_tags: BTreeSet<String>,
    sort: Option<SortConfig>,
    page: usize,
    page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    /// Creates the initial state: empty query, no tags, no sort, page 1.
    ///
    /// A `page_size` of zero is raised to one.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            selected_tags: BTreeSet::new(),
            sort: None,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn selected_tags(&self) -> &BTreeSet<String> {
        &self.selected_tags
    }

    #[must_use]
    pub const fn sort(&self) -> Option<SortConfig> {
        self.sort
    }

    /// Current 1-based page number.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replaces the free-text query and returns to the first page.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.page = 1;
    }

    /// Adds `tag` to the selection if absent, removes it if present, and returns
    /// to the first page.
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.selected_tags.remove(tag) {
            self.selected_tags.insert(tag.to_string());
        }
        self.page = 1;
    }

    /// Empties the tag selection and returns to the first page.
    pub fn clear_tags(&mut self) {
        self.selected_tags.clear();
        self.page = 1;
    }

    /// Requests a sort on `key`.
    ///
    /// Repeating the current key while ascending flips to descending. Repeating
    /// it while descending keeps descending. A new key starts ascending. The page
    /// position is kept.
    pub fn request_sort(&mut self, key: SortKey) {
        let direction = match self.sort {
            Some(current) if current.key == key => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        self.sort = Some(SortConfig { key, direction });
    }

    /// Sets the page as given. Callers clamp to `[1, total_pages]`.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_unfiltered_first_page() {
        let state = ViewState::default();
        assert_eq!(state.query(), "");
        assert!(state.selected_tags().is_empty());
        assert!(state.sort().is_none());
        assert_eq!(state.page(), 1);
        assert_eq!(state.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn zero_page_size_is_raised_to_one() {
        assert_eq!(ViewState::new(0).page_size(), 1);
    }

    #[test]
    fn filter_changes_reset_page() {
        let mut state = ViewState::new(6);

        state.set_page(4);
        state.set_query("vue");
        assert_eq!(state.page(), 1);

        state.set_page(4);
        state.toggle_tag("Vue");
        assert_eq!(state.page(), 1);

        state.set_page(4);
        state.clear_tags();
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn toggle_tag_flips_membership() {
        let mut state = ViewState::new(6);
        state.toggle_tag("Svelte");
        assert!(state.selected_tags().contains("Svelte"));
        state.toggle_tag("Svelte");
        assert!(state.selected_tags().is_empty());
    }

    #[test]
    fn sort_request_keeps_page() {
        let mut state = ViewState::new(6);
        state.set_page(3);
        state.request_sort(SortKey::Author);
        assert_eq!(state.page(), 3);
    }

    #[test]
    fn sort_cycle_stops_at_descending() {
        let mut state = ViewState::new(6);

        state.request_sort(SortKey::Author);
        assert_eq!(
            state.sort(),
            Some(SortConfig { key: SortKey::Author, direction: SortDirection::Ascending })
        );

        state.request_sort(SortKey::Author);
        assert_eq!(state.sort().map(|s| s.direction), Some(SortDirection::Descending));

        state.request_sort(SortKey::Author);
        assert_eq!(state.sort().map(|s| s.direction), Some(SortDirection::Descending));
    }

    #[test]
    fn new_sort_key_starts_ascending() {
        let mut state = ViewState::new(6);
        state.request_sort(SortKey::Author);
        state.request_sort(SortKey::Author);
        state.request_sort(SortKey::Description);
        assert_eq!(
            state.sort(),
            Some(SortConfig { key: SortKey::Description, direction: SortDirection::Ascending })
        );
    }

    #[test]
    fn set_page_accepts_any_value() {
        let mut state = ViewState::new(6);
        state.set_page(99);
        assert_eq!(state.page(), 99);
    }
}
