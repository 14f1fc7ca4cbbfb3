//! End-to-end listing scenarios over the engine and the app state.

use folio::app::{handle_event, AppState, Event};
use folio::domain::{PortfolioRecord, SortKey};
use folio::listing::ListingEngine;
use folio::ui::Theme;

fn numbered(n: usize) -> Vec<PortfolioRecord> {
    (1..=n)
        .map(|i| PortfolioRecord::new(i.to_string(), format!("Author {i}"), format!("Portfolio {i}")))
        .collect()
}

fn ids(engine: &ListingEngine) -> Vec<String> {
    engine.view().page_items.iter().map(|r| r.id.clone()).collect()
}

#[test]
fn ten_records_split_six_and_four() {
    let mut engine = ListingEngine::new(numbered(10), 6);
    let view = engine.view();
    assert_eq!(view.total_pages, 2);
    assert_eq!(ids(&engine), ["1", "2", "3", "4", "5", "6"]);

    assert!(engine.next_page());
    assert_eq!(ids(&engine), ["7", "8", "9", "10"]);
    assert!(!engine.next_page());
}

#[test]
fn query_matches_tech_stack_case_insensitively() {
    let records = vec![
        PortfolioRecord::new("1", "Jordan", "Motion studies").with_tech(["React", "GSAP"]),
        PortfolioRecord::new("2", "Sam", "Static blog").with_tech(["Hugo"]),
    ];
    let mut engine = ListingEngine::new(records, 6);
    engine.set_query("react");
    assert_eq!(ids(&engine), ["1"]);
}

#[test]
fn selected_tags_return_the_union() {
    let records = vec![
        PortfolioRecord::new("1", "A", "").with_tech(["Vue"]),
        PortfolioRecord::new("2", "B", "").with_tech(["Svelte"]),
        PortfolioRecord::new("3", "C", "").with_tech(["React"]),
        PortfolioRecord::new("4", "D", "").with_tech(["Vue", "Svelte"]),
    ];
    let mut engine = ListingEngine::new(records, 6);
    engine.toggle_tag("Vue");
    engine.toggle_tag("Svelte");
    assert_eq!(ids(&engine), ["1", "2", "4"]);
}

#[test]
fn empty_collection_has_no_pages() {
    let engine = ListingEngine::new(Vec::new(), 6);
    let view = engine.view();
    assert!(view.page_items.is_empty());
    assert_eq!(view.total_pages, 0);
    assert!(!view.has_pagination());
}

#[test]
fn repeated_sort_stays_descending() {
    let mut engine = ListingEngine::new(numbered(3), 6);
    for _ in 0..3 {
        engine.request_sort(SortKey::Author);
    }
    assert_eq!(ids(&engine), ["3", "2", "1"]);
}

#[test]
fn browsing_session_through_events() {
    let mut state = AppState::new(Theme::default(), 6, None, None);
    state.apply_catalog(numbered(10), Vec::new());

    let mut send = |event: Event| handle_event(&mut state, &event).unwrap();
    send(Event::NextPage);
    send(Event::SearchMode);
    for c in "author 1".chars() {
        send(Event::Char(c));
    }
    send(Event::FocusResults);

    assert_eq!(state.engine.page(), 1);
    let view = state.engine.view();
    assert_eq!(view.filtered_count, 2);
    assert_eq!(state.selected_record().map(|r| r.id.as_str()), Some("1"));

    let vm = state.compute_viewmodel(30, 120);
    assert_eq!(vm.count_line, "Showing 2 of 2 portfolios");
    assert!(vm.pagination.is_none());
}
