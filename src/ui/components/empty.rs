//! "No portfolios found" message.

use crate::ui::helpers::{position_cursor, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Two centered lines starting at `row`. Returns the next free row.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let lines = [
        (&empty.message, Theme::fg(&theme.colors.empty_state_fg), Theme::bold()),
        (&empty.subtitle, Theme::fg(&theme.colors.text_dim), Theme::dim()),
    ];

    for (offset, (text, color, weight)) in lines.iter().enumerate() {
        let text = truncate(text, cols);
        let padding = cols.saturating_sub(width(&text)) / 2;
        position_cursor(row + offset, 1);
        print!("{weight}{color}{}{text}{}", " ".repeat(padding), Theme::reset());
    }
    row + lines.len()
}
