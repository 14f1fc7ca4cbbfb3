//! Property tests for the listing engine's filter, sort and page derivation.

use folio::domain::{PortfolioRecord, SortKey};
use folio::listing::{ListingEngine, SortDirection};
use proptest::prelude::*;
use std::collections::BTreeSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

const TAGS: [&str; 6] = ["React", "Vue", "Svelte", "GSAP", "Tailwind", "Three.js"];

fn arb_record() -> impl Strategy<Value = PortfolioRecord> {
    (
        "[a-cA-CáéÁÉ ]{0,5}",
        "[a-dA-D ]{0,8}",
        proptest::sample::subsequence(TAGS.to_vec(), 0..=TAGS.len()),
        "[a-c]{0,3}",
    )
        .prop_map(|(author, description, tech, url)| {
            PortfolioRecord::new("", author, description)
                .with_tech(tech)
                .with_links(format!("https://{url}.dev"), "")
        })
}

/// Records with their position as id, so order can be checked by id.
fn arb_records() -> impl Strategy<Value = Vec<PortfolioRecord>> {
    prop::collection::vec(arb_record(), 0..25).prop_map(|records| {
        records
            .into_iter()
            .enumerate()
            .map(|(i, mut r)| {
                r.id = format!("{i:03}");
                r
            })
            .collect()
    })
}

fn arb_sort_key() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::Id),
        Just(SortKey::Author),
        Just(SortKey::Description),
        Just(SortKey::LiveUrl),
    ]
}

/// Every matching record across all pages, in display order.
fn all_filtered(engine: &mut ListingEngine) -> Vec<PortfolioRecord> {
    engine.first_page();
    let mut out: Vec<PortfolioRecord> = engine.view().page_items.into_iter().cloned().collect();
    while engine.next_page() {
        out.extend(engine.view().page_items.into_iter().cloned());
    }
    out
}

fn ids(records: &[PortfolioRecord]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

fn matches(record: &PortfolioRecord, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    record.author.to_lowercase().contains(&needle)
        || record.description.to_lowercase().contains(&needle)
        || record.tech_stack.iter().any(|t| t.to_lowercase().contains(&needle))
}

/// Lowercase text with accents removed.
fn base_letters(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

proptest! {
    #[test]
    fn unfiltered_listing_is_the_collection(records in arb_records(), page_size in 1usize..8) {
        let mut engine = ListingEngine::new(records.clone(), page_size);
        prop_assert_eq!(ids(&all_filtered(&mut engine)), ids(&records));
    }

    #[test]
    fn query_partitions_collection(records in arb_records(), query in "[a-dA-D]{1,2}") {
        let mut engine = ListingEngine::new(records.clone(), 5);
        engine.set_query(query.clone());
        let shown: BTreeSet<String> = ids(&all_filtered(&mut engine)).into_iter().collect();

        for record in &records {
            prop_assert_eq!(shown.contains(&record.id), matches(record, &query), "record {:?}", record);
        }
    }

    #[test]
    fn tag_filter_matches_any_and_only_widens(
        records in arb_records(),
        tags in proptest::sample::subsequence(TAGS.to_vec(), 1..=3),
        extra in proptest::sample::select(TAGS.to_vec()),
    ) {
        let mut engine = ListingEngine::new(records, 4);
        for tag in &tags {
            engine.toggle_tag(tag);
        }
        let narrow = all_filtered(&mut engine);
        for record in &narrow {
            prop_assert!(tags.iter().any(|t| record.has_tag(t)));
        }

        if !tags.contains(&extra) {
            engine.toggle_tag(extra);
            let wide: BTreeSet<String> = ids(&all_filtered(&mut engine)).into_iter().collect();
            prop_assert!(ids(&narrow).iter().all(|id| wide.contains(id)));
        }
    }

    #[test]
    fn descending_reverses_keys_and_keeps_ties(records in arb_records(), key in arb_sort_key()) {
        let mut engine = ListingEngine::new(records, 100);
        engine.request_sort(key);
        let ascending = all_filtered(&mut engine);
        engine.request_sort(key);
        prop_assert_eq!(engine.sort().map(|s| s.direction), Some(SortDirection::Descending));
        let descending = all_filtered(&mut engine);

        let groups = |list: &[PortfolioRecord]| {
            let mut out: Vec<(String, Vec<String>)> = Vec::new();
            for r in list {
                let value = key.value(r).to_string();
                match out.last_mut() {
                    Some((last, members)) if *last == value => members.push(r.id.clone()),
                    _ => out.push((value, vec![r.id.clone()])),
                }
            }
            out
        };

        let mut reversed = groups(&ascending);
        reversed.reverse();
        prop_assert_eq!(reversed, groups(&descending));
    }

    #[test]
    fn pages_are_full_except_the_last(records in arb_records(), page_size in 1usize..8) {
        let mut engine = ListingEngine::new(records, page_size);
        let view = engine.view();
        let total_pages = view.total_pages;
        let filtered = view.filtered_count;

        let mut seen = 0;
        for page in 1..=total_pages {
            engine.set_page(page);
            let len = engine.view().page_items.len();
            prop_assert!(len <= page_size);
            if page < total_pages {
                prop_assert_eq!(len, page_size);
            }
            seen += len;
        }
        prop_assert_eq!(seen, filtered);
    }

    #[test]
    fn filter_changes_return_to_first_page(
        records in arb_records(),
        query in "[a-c]{0,2}",
        tag in proptest::sample::select(TAGS.to_vec()),
    ) {
        let mut engine = ListingEngine::new(records, 2);
        engine.set_page(3);
        engine.set_query(query);
        prop_assert_eq!(engine.page(), 1);

        engine.set_page(2);
        engine.toggle_tag(tag);
        prop_assert_eq!(engine.page(), 1);

        engine.set_page(2);
        engine.request_sort(SortKey::Author);
        prop_assert_eq!(engine.page(), 2);
    }

    #[test]
    fn author_sort_ignores_accents_and_case(records in arb_records()) {
        let mut engine = ListingEngine::new(records, 100);
        engine.request_sort(SortKey::Author);
        let sorted = all_filtered(&mut engine);

        for pair in sorted.windows(2) {
            prop_assert!(
                base_letters(&pair[0].author) <= base_letters(&pair[1].author),
                "{:?} before {:?}",
                pair[0].author,
                pair[1].author
            );
        }
    }
}
