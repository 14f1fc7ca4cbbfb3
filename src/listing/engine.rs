//! Listing engine: the record collection paired with its view state.

use super::compute::{compute_view, ListingView};
use super::state::{SortConfig, ViewState};
use crate::domain::{PortfolioRecord, SortKey};
use std::collections::BTreeSet;

/// Holds the fixed record collection and the current [`ViewState`], and derives
/// the visible page on demand.
///
/// All operations are synchronous and infallible. Mutations only touch the view
/// state; records are never modified after load.
///
/// # Examples
///
/// ```
/// use folio::domain::PortfolioRecord;
/// use folio::listing::ListingEngine;
///
/// let records = vec![
///     PortfolioRecord::new("1", "Maya", "Creative dev").with_tech(["Vue"]),
///     PortfolioRecord::new("2", "Liam", "Blog").with_tech(["Svelte"]),
///     PortfolioRecord::new("3", "Noor", "3D").with_tech(["React"]),
/// ];
/// let mut engine = ListingEngine::new(records, 6);
///
/// engine.toggle_tag("Vue");
/// engine.toggle_tag("Svelte");
/// let view = engine.view();
/// assert_eq!(view.filtered_count, 2);
/// assert_eq!(view.total_pages, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListingEngine {
    records: Vec<PortfolioRecord>,
    state: ViewState,
}

impl ListingEngine {
    /// Creates an engine over `records` with the initial view state.
    ///
    /// # Parameters
    ///
    /// * `records` - The collection, in display order until a sort is requested
    /// * `page_size` - Records per page; zero is raised to one
    #[must_use]
    pub fn new(records: Vec<PortfolioRecord>, page_size: usize) -> Self {
        Self {
            records,
            state: ViewState::new(page_size),
        }
    }

    /// Installs a freshly loaded collection.
    ///
    /// The query, tag selection and sort survive; the page returns to 1 because
    /// the old position refers to a different collection.
    pub fn load_records(&mut self, records: Vec<PortfolioRecord>) {
        tracing::debug!(count = records.len(), "listing records loaded");
        self.records = records;
        self.state.set_page(1);
    }

    /// The whole collection in load order, ignoring filters.
    #[must_use]
    pub fn records(&self) -> &[PortfolioRecord] {
        &self.records
    }

    /// The current query, tag, sort and page selections.
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// The query as typed, before trimming.
    #[must_use]
    pub fn query(&self) -> &str {
        self.state.query()
    }

    /// Tags in the filter; a record needs any one of them.
    #[must_use]
    pub const fn selected_tags(&self) -> &BTreeSet<String> {
        self.state.selected_tags()
    }

    /// The active sort, or `None` for collection order.
    #[must_use]
    pub const fn sort(&self) -> Option<SortConfig> {
        self.state.sort()
    }

    /// Current 1-based page number.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.state.page()
    }

    /// Replaces the query and returns to page 1.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.state.set_query(text);
    }

    /// Adds or removes `tag` from the filter and returns to page 1.
    pub fn toggle_tag(&mut self, tag: &str) {
        self.state.toggle_tag(tag);
    }

    /// Drops every tag filter and returns to page 1.
    pub fn clear_tags(&mut self) {
        self.state.clear_tags();
    }

    /// Sorts by `key`: ascending for a new key, descending when repeated.
    /// The page is kept.
    pub fn request_sort(&mut self, key: SortKey) {
        self.state.request_sort(key);
    }

    /// Sets the page without range checks.
    pub fn set_page(&mut self, page: usize) {
        self.state.set_page(page);
    }

    /// Advances one page, staying on the last page.
    ///
    /// Returns `true` when the page changed.
    pub fn next_page(&mut self) -> bool {
        let total = self.view().total_pages;
        let current = self.state.page();
        if total == 0 || current >= total {
            return false;
        }
        self.state.set_page(current + 1);
        true
    }

    /// Steps back one page, staying on the first page.
    ///
    /// Returns `true` when the page changed.
    pub fn prev_page(&mut self) -> bool {
        let current = self.state.page();
        if current <= 1 {
            return false;
        }
        let total = self.view().total_pages.max(1);
        self.state.set_page((current - 1).min(total));
        true
    }

    /// Jumps to page 1. Returns `true` when the page changed.
    pub fn first_page(&mut self) -> bool {
        if self.state.page() == 1 {
            return false;
        }
        self.state.set_page(1);
        true
    }

    /// Jumps to the last page. Returns `true` when the page changed.
    pub fn last_page(&mut self) -> bool {
        let last = self.view().total_pages.max(1);
        if self.state.page() == last {
            return false;
        }
        self.state.set_page(last);
        true
    }

    /// Recomputes the current view from scratch.
    #[must_use]
    pub fn view(&self) -> ListingView<'_> {
        compute_view(&self.state, &self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> Vec<PortfolioRecord> {
        (1..=n)
            .map(|i| PortfolioRecord::new(i.to_string(), format!("Author {i}"), ""))
            .collect()
    }

    #[test]
    fn next_page_stops_at_last() {
        let mut engine = ListingEngine::new(numbered(10), 6);
        assert!(engine.next_page());
        assert_eq!(engine.page(), 2);
        assert!(!engine.next_page());
        assert_eq!(engine.page(), 2);
    }

    #[test]
    fn prev_page_stops_at_first() {
        let mut engine = ListingEngine::new(numbered(10), 6);
        assert!(!engine.prev_page());
        engine.set_page(2);
        assert!(engine.prev_page());
        assert_eq!(engine.page(), 1);
    }

    #[test]
    fn prev_page_from_out_of_range_lands_on_last_valid_page() {
        let mut engine = ListingEngine::new(numbered(10), 6);
        engine.set_page(9);
        assert!(engine.prev_page());
        assert_eq!(engine.page(), 2);
    }

    #[test]
    fn paging_without_results_is_a_no_op() {
        let mut engine = ListingEngine::new(Vec::new(), 6);
        assert!(!engine.next_page());
        assert!(!engine.last_page());
        assert_eq!(engine.page(), 1);
        assert_eq!(engine.view().total_pages, 0);
    }

    #[test]
    fn first_and_last_page_jump() {
        let mut engine = ListingEngine::new(numbered(20), 6);
        assert!(engine.last_page());
        assert_eq!(engine.page(), 4);
        assert_eq!(engine.view().page_items.len(), 2);
        assert!(engine.first_page());
        assert_eq!(engine.page(), 1);
    }

    #[test]
    fn query_change_returns_to_first_page() {
        let mut engine = ListingEngine::new(numbered(20), 6);
        engine.set_page(3);
        engine.set_query("author 1");
        assert_eq!(engine.page(), 1);
        assert_eq!(engine.view().filtered_count, 11);
    }

    #[test]
    fn load_records_keeps_filters_and_resets_page() {
        let mut engine = ListingEngine::new(numbered(20), 6);
        engine.set_query("author");
        engine.set_page(2);
        engine.load_records(numbered(3));
        assert_eq!(engine.page(), 1);
        assert_eq!(engine.query(), "author");
        assert_eq!(engine.view().total_count, 3);
    }
}
