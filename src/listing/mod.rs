//! Listing engine for the portfolio table.
//!
//! Derives the visible page of the collection from three independent controls
//! (free-text query, selected tags, sort request) plus the page position. The
//! derivation is a pure function recomputed after every change:
//!
//! ```text
//! records ─▶ filter (query AND any-of tags) ─▶ stable sort ─▶ page slice
//! ```
//!
//! # Modules
//!
//! - [`state`]: [`ViewState`] and its transitions
//! - [`compute`]: [`compute_view`] and the filter/sort/paginate steps
//! - [`engine`]: [`ListingEngine`], the collection paired with its state

pub mod compute;
pub mod engine;
pub mod state;

pub use compute::{collate, compute_view, filter_records, ListingView};
pub use engine::ListingEngine;
pub use state::{SortConfig, SortDirection, ViewState, DEFAULT_PAGE_SIZE};
