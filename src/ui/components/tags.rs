//! Tag filter bar and picker list.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TagBarInfo;

/// One line with the active filters, then one line per picker option while
/// the picker is open. Returns the next free row.
pub fn render_tag_bar(row: usize, tags: &TagBarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}Tags: ", Theme::fg(&theme.colors.text_dim));
    if tags.selected.is_empty() {
        print!("all{}", Theme::reset());
    } else {
        let list = tags
            .selected
            .iter()
            .map(|t| format!("[{t}]"))
            .collect::<Vec<_>>()
            .join(" ");
        print!(
            "{}{}{}",
            Theme::fg(&theme.colors.tag_active_fg),
            truncate(&list, cols.saturating_sub(6)),
            Theme::reset()
        );
    }

    let Some(options) = &tags.picker else {
        return row + 1;
    };

    let mut current = row + 1;
    for option in options {
        position_cursor(current, 1);
        let marker = if option.is_cursor { "▸" } else { " " };
        let check = if option.selected { "[x]" } else { "[ ]" };
        let color = if option.selected {
            &theme.colors.tag_active_fg
        } else {
            &theme.colors.text_normal
        };
        if option.is_cursor {
            print!("{}", Theme::bold());
        }
        print!("{}  {marker} {check} {}{}", Theme::fg(color), option.label, Theme::reset());
        current += 1;
    }
    current
}
