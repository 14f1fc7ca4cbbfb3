//! Search input box.

use crate::ui::helpers::{position_cursor, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

const SEARCH_BOX_MARGIN: usize = 5;

/// Three-line bordered box with the query. A focused box shows a cursor and
/// the accent border; an unfocused one is dimmed. Returns the next free row.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let inner_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2 + 2);
    let border = if search.focused {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    };
    let cursor = if search.focused { "▏" } else { "" };
    let text = truncate(&format!(" Search: {}{cursor}", search.query), inner_width);

    let margin = " ".repeat(SEARCH_BOX_MARGIN);

    position_cursor(row, 1);
    print!("{margin}{}┌{}┐{}", Theme::fg(border), "─".repeat(inner_width), Theme::reset());

    position_cursor(row + 1, 1);
    print!("{margin}{}│{}", Theme::fg(border), Theme::fg(&theme.colors.text_normal));
    print!("{text}{}", " ".repeat(inner_width.saturating_sub(width(&text))));
    print!("{}│{}", Theme::fg(border), Theme::reset());

    position_cursor(row + 2, 1);
    print!("{margin}{}└{}┘{}", Theme::fg(border), "─".repeat(inner_width), Theme::reset());

    row + 3
}
