//! Derivation of the listing view: filter, sort, paginate.
//!
//! [`compute_view`] is a pure function of the view state and the record
//! collection. It is recomputed in full on every call; the collection is small
//! enough that linear recomputation is cheaper to reason about than incremental
//! maintenance.

use super::state::{SortConfig, SortDirection, ViewState};
use crate::domain::{PortfolioRecord, SortKey};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Derived listing output for the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView<'a> {
    /// Records shown on the current page, in display order.
    pub page_items: Vec<&'a PortfolioRecord>,
    /// Number of pages; `0` when nothing matches.
    pub total_pages: usize,
    /// Number of records passing the query and tag filters.
    pub filtered_count: usize,
    /// Size of the whole collection.
    pub total_count: usize,
    /// The page the items were taken from.
    pub page: usize,
}

impl ListingView<'_> {
    /// Whether page controls should be offered at all.
    #[must_use]
    pub const fn has_pagination(&self) -> bool {
        self.total_pages > 1
    }
}

/// Computes the view for `state` over `records`.
///
/// # Examples
///
/// ```
/// use folio::domain::PortfolioRecord;
/// use folio::listing::{compute_view, ViewState};
///
/// let records: Vec<PortfolioRecord> = (1..=10)
///     .map(|i| PortfolioRecord::new(i.to_string(), format!("Author {i}"), ""))
///     .collect();
///
/// let mut state = ViewState::new(6);
/// let view = compute_view(&state, &records);
/// assert_eq!(view.total_pages, 2);
/// assert_eq!(view.page_items.len(), 6);
///
/// state.set_page(2);
/// assert_eq!(compute_view(&state, &records).page_items.len(), 4);
/// ```
#[must_use]
pub fn compute_view<'a>(state: &ViewState, records: &'a [PortfolioRecord]) -> ListingView<'a> {
    let _span = tracing::debug_span!(
        "compute_view",
        total = records.len(),
        query_len = state.query().len(),
        tags = state.selected_tags().len(),
        page = state.page()
    )
    .entered();

    let mut filtered = filter_records(records, state.query(), state.selected_tags());
    if let Some(sort) = state.sort() {
        sort_records(&mut filtered, sort);
    }

    let filtered_count = filtered.len();
    let page_size = state.page_size();
    let total_pages = (filtered_count + page_size - 1) / page_size;
    let page_items = page_slice(&filtered, state.page(), page_size).to_vec();

    tracing::debug!(filtered_count, total_pages, shown = page_items.len(), "listing view computed");

    ListingView {
        page_items,
        total_pages,
        filtered_count,
        total_count: records.len(),
        page: state.page(),
    }
}

/// Returns the records matching both the query and the tag selection, in
/// collection order.
#[must_use]
pub fn filter_records<'a>(
    records: &'a [PortfolioRecord],
    query: &str,
    selected_tags: &BTreeSet<String>,
) -> Vec<&'a PortfolioRecord> {
    let needle = query.trim().to_lowercase();

    records
        .iter()
        .filter(|r| matches_query(r, &needle) && matches_tags(r, selected_tags))
        .collect()
}

/// Case-insensitive substring match on author, description or any single
/// tech-stack entry. `needle` must already be trimmed and lowercased; an empty
/// needle matches everything.
#[must_use]
pub fn matches_query(record: &PortfolioRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);

    contains(&record.author)
        || contains(&record.description)
        || record.tech_stack.iter().any(|t| contains(t))
}

/// OR across the selection: an empty selection matches everything, otherwise
/// at least one selected tag must appear exactly in the tech stack.
#[must_use]
pub fn matches_tags(record: &PortfolioRecord, selected_tags: &BTreeSet<String>) -> bool {
    selected_tags.is_empty() || selected_tags.iter().any(|tag| record.has_tag(tag))
}

/// Stable sort of `records` by the configured column and direction.
///
/// # Parameters
///
/// * `records` - Filtered records, sorted in place
/// * `sort` - Column and direction
pub fn sort_records(records: &mut [&PortfolioRecord], sort: SortConfig) {
    records.sort_by(|a, b| {
        let ord = compare_values(sort.key, sort.key.value(a), sort.key.value(b));
        match sort.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

/// Plain numeric ids compare by value, so `2` sorts before `10`, and come
/// before any other id. Everything else goes through [`collate`].
fn compare_values(key: SortKey, a: &str, b: &str) -> Ordering {
    if key != SortKey::Id {
        return collate(a, b);
    }
    match (numeric_id(a), numeric_id(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| collate(a, b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => collate(a, b),
    }
}

fn numeric_id(id: &str) -> Option<u128> {
    let id = id.trim();
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    id.parse().ok()
}

/// Locale-style string comparison in three levels, like a root-locale
/// collator at tertiary strength.
///
/// 1. Base letters: accents and case are ignored, so `"Émile"` sorts with the
///    E names and `"apple"` before `"Banana"`.
/// 2. Accents: an unaccented letter sorts before its accented forms.
/// 3. Case: lower case before upper case.
///
/// Code point order breaks any remaining tie, which keeps the comparison a
/// total order.
///
/// ```
/// use folio::listing::collate;
/// use std::cmp::Ordering;
///
/// assert_eq!(collate("Émile", "Zara"), Ordering::Less);
/// assert_eq!(collate("resume", "résumé"), Ordering::Less);
/// ```
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented(a).cmp(accented(b)))
        .then_with(|| a.nfd().map(char::is_uppercase).cmp(b.nfd().map(char::is_uppercase)))
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accented(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn page_slice<'s, 'a>(items: &'s [&'a PortfolioRecord], page: usize, page_size: usize) -> &'s [&'a PortfolioRecord] {
    let Some(start) = page.checked_sub(1).and_then(|p| p.checked_mul(page_size)) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, author: &str, description: &str, tech: &[&str]) -> PortfolioRecord {
        PortfolioRecord::new(id, author, description).with_tech(tech.iter().copied())
    }

    fn ids(view: &ListingView<'_>) -> Vec<String> {
        view.page_items.iter().map(|r| r.id.clone()).collect()
    }

    fn sample() -> Vec<PortfolioRecord> {
        vec![
            record("1", "Maya Chen", "Creative developer", &["React", "GSAP"]),
            record("2", "liam ortiz", "Minimal blog", &["Vue", "SCSS"]),
            record("3", "Noor Haddad", "3D playground", &["Three.js", "Svelte"]),
            record("4", "Ava Brooks", "Design systems", &["Next.js", "TailwindCSS"]),
            record("5", "ben Park", "Motion studies", &[]),
        ]
    }

    #[test]
    fn empty_query_and_tags_keep_everything_in_order() {
        let records = sample();
        let view = compute_view(&ViewState::new(10), &records);
        assert_eq!(ids(&view), vec!["1", "2", "3", "4", "5"]);
        assert_eq!(view.filtered_count, 5);
        assert_eq!(view.total_count, 5);
    }

    #[test]
    fn whitespace_query_matches_all() {
        let records = sample();
        let mut state = ViewState::new(10);
        state.set_query("   ");
        assert_eq!(compute_view(&state, &records).filtered_count, 5);
    }

    #[test]
    fn query_matches_tech_stack_case_insensitively() {
        let records = sample();
        let mut state = ViewState::new(10);
        state.set_query("react");
        assert_eq!(ids(&compute_view(&state, &records)), vec!["1"]);
    }

    #[test]
    fn query_matches_description_and_tolerates_padding() {
        let records = sample();
        let mut state = ViewState::new(10);
        state.set_query("  MOTION ");
        assert_eq!(ids(&compute_view(&state, &records)), vec!["5"]);
    }

    #[test]
    fn query_must_fit_inside_a_single_tech_entry() {
        let records = vec![record("1", "A", "", &["Vue", "SCSS"])];
        assert!(!matches_query(&records[0], "vuescss"));
        assert!(matches_query(&records[0], "scs"));
    }

    #[test]
    fn selected_tags_union_results() {
        let records = sample();
        let mut state = ViewState::new(10);
        state.toggle_tag("Vue");
        state.toggle_tag("Svelte");
        assert_eq!(ids(&compute_view(&state, &records)), vec!["2", "3"]);
    }

    #[test]
    fn tag_match_is_exact() {
        let records = sample();
        let mut state = ViewState::new(10);
        state.toggle_tag("react");
        assert_eq!(compute_view(&state, &records).filtered_count, 0);
    }

    #[test]
    fn query_and_tags_must_both_hold() {
        let records = sample();
        let mut state = ViewState::new(10);
        state.toggle_tag("Vue");
        state.set_query("maya");
        assert_eq!(compute_view(&state, &records).filtered_count, 0);
    }

    #[test]
    fn sort_by_author_uses_case_insensitive_collation() {
        let records = sample();
        let mut state = ViewState::new(10);
        state.request_sort(SortKey::Author);
        assert_eq!(ids(&compute_view(&state, &records)), vec!["4", "5", "2", "1", "3"]);

        state.request_sort(SortKey::Author);
        assert_eq!(ids(&compute_view(&state, &records)), vec!["3", "1", "2", "5", "4"]);
    }

    #[test]
    fn sort_is_stable_for_equal_values() {
        let records = vec![
            record("1", "Same", "b", &[]),
            record("2", "Other", "a", &[]),
            record("3", "Same", "c", &[]),
        ];
        let mut state = ViewState::new(10);
        state.request_sort(SortKey::Author);
        assert_eq!(ids(&compute_view(&state, &records)), vec!["2", "1", "3"]);

        state.request_sort(SortKey::Author);
        assert_eq!(ids(&compute_view(&state, &records)), vec!["1", "3", "2"]);
    }

    #[test]
    fn collate_orders_lower_before_upper_on_ties() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("a", "A"), Ordering::Less);
        assert_eq!(collate("A", "a"), Ordering::Greater);
        assert_eq!(collate("same", "same"), Ordering::Equal);
    }

    #[test]
    fn collate_groups_accented_letters_with_their_base() {
        assert_eq!(collate("Émile", "Zara"), Ordering::Less);
        assert_eq!(collate("Émile", "Dana"), Ordering::Greater);
        assert_eq!(collate("Tomás", "Tomas"), Ordering::Greater);
        assert_eq!(collate("Chloé", "Chloe Z"), Ordering::Less);
        assert_eq!(collate("émile", "Émile"), Ordering::Less);
    }

    #[test]
    fn sort_by_author_places_accented_names_alphabetically() {
        let records = vec![
            record("1", "Zara Ahmed", "", &[]),
            record("2", "Émile Durand", "", &[]),
            record("3", "Ava Brooks", "", &[]),
        ];
        let mut state = ViewState::new(10);
        state.request_sort(SortKey::Author);
        assert_eq!(ids(&compute_view(&state, &records)), vec!["3", "2", "1"]);
    }

    #[test]
    fn numeric_ids_sort_by_value() {
        let records: Vec<PortfolioRecord> = ["10", "2", "1", "x7", "11"]
            .iter()
            .map(|id| record(id, "A", "", &[]))
            .collect();
        let mut state = ViewState::new(10);
        state.request_sort(SortKey::Id);
        assert_eq!(ids(&compute_view(&state, &records)), vec!["1", "2", "10", "11", "x7"]);

        state.request_sort(SortKey::Id);
        assert_eq!(ids(&compute_view(&state, &records)), vec!["x7", "11", "10", "2", "1"]);
    }

    #[test]
    fn pages_slice_the_sorted_set() {
        let records: Vec<PortfolioRecord> = (1..=10)
            .map(|i| record(&i.to_string(), &format!("Author {i}"), "", &[]))
            .collect();
        let mut state = ViewState::new(6);

        let first = compute_view(&state, &records);
        assert_eq!(first.total_pages, 2);
        assert_eq!(ids(&first), vec!["1", "2", "3", "4", "5", "6"]);

        state.set_page(2);
        let second = compute_view(&state, &records);
        assert_eq!(ids(&second), vec!["7", "8", "9", "10"]);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let records = sample();
        let mut state = ViewState::new(2);
        state.set_page(0);
        assert!(compute_view(&state, &records).page_items.is_empty());
        state.set_page(usize::MAX);
        assert!(compute_view(&state, &records).page_items.is_empty());
    }

    #[test]
    fn empty_collection_has_zero_pages() {
        let view = compute_view(&ViewState::new(6), &[]);
        assert!(view.page_items.is_empty());
        assert_eq!(view.total_pages, 0);
        assert!(!view.has_pagination());
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let records: Vec<PortfolioRecord> = (1..=12)
            .map(|i| record(&i.to_string(), "A", "", &[]))
            .collect();
        assert_eq!(compute_view(&ViewState::new(6), &records).total_pages, 2);
    }
}
