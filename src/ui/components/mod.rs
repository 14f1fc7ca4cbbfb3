//! Composable UI component renderers.
//!
//! Each component draws one part of the pane starting at a given row and
//! returns the next free row.
//!
//! # Components
//!
//! - [`header`]: title bar and catalog notice
//! - [`search`]: search input box
//! - [`tags`]: tag filter bar and picker
//! - [`table`]: portfolio columns and rows
//! - [`empty`]: "No portfolios found" message
//! - [`pagination`]: result count and page links
//! - [`contact`]: contact form
//! - [`footer`]: keybinding hints
//!
//! # Layout Modes
//!
//! - [`render_listing_mode`]: header, optional search bar, tags, table, pagination, footer
//! - [`render_contact_mode`]: header, contact form, footer

mod contact;
mod empty;
mod footer;
mod header;
mod pagination;
mod search;
mod table;
mod tags;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use contact::render_contact_form;
use empty::render_empty_state;
use footer::render_footer;
use header::{render_header, render_notice};
use pagination::{render_count_line, render_pagination};
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};
use tags::render_tag_bar;

fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset());
    row + 1
}

/// Draws the bottom border and footer on the last two rows.
fn render_bottom(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.saturating_sub(1).max(1);
    render_border(footer_row.saturating_sub(1).max(1), &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}

/// Layout:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Notice]            while loading or after a failure
/// [Search Bar]        while searching or a query is active
/// [Tag bar + picker]
/// [Column headers]
/// [Rows | Empty state]
/// [blank]
/// [Count line]
/// [Pagination]        when there is more than one page
/// [Border]
/// [Footer]
/// ```
pub fn render_listing_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(notice) = &vm.notice {
        current_row = render_notice(current_row, notice, theme, cols);
    }
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }
    current_row = render_tag_bar(current_row, &vm.tag_bar, theme, cols);
    current_row = render_table_headers(current_row, &vm.columns, theme);

    // Count line, pagination, border and footer sit at the bottom.
    let last_table_row = rows.saturating_sub(5);
    current_row = match &vm.empty_state {
        Some(empty) => render_empty_state(current_row + 1, empty, theme, cols),
        None => render_table_rows(current_row, last_table_row, &vm.rows, &vm.columns, theme, cols),
    };

    let count_row = current_row.max(last_table_row + 1).min(rows.saturating_sub(3).max(1));
    render_count_line(count_row, &vm.count_line, theme);
    if let Some(pages) = &vm.pagination {
        render_pagination(count_row + 1, pages, theme, cols);
    }

    render_bottom(vm, theme, cols, rows);
}

/// Layout:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Contact form]
/// [Border]
/// [Footer]
/// ```
pub fn render_contact_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(pane) = &vm.contact {
        render_contact_form(current_row + 1, pane, theme, cols);
    }

    render_bottom(vm, theme, cols, rows);
}
