//! Keybinding hints.

use crate::ui::helpers::{position_cursor, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Centered, dimmed and cut to the pane width. Returns the next free row.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help = truncate(&footer.keybindings, cols);
    let help_len = width(&help);
    let padding = cols.saturating_sub(help_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}{help}", " ".repeat(padding));
    print!("{}", " ".repeat(cols.saturating_sub(padding + help_len)));
    print!("{}", Theme::reset());
    row + 1
}
