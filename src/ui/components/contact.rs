//! Contact form pane.

use super::header::notice_color;
use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ContactPane;

const LABEL_WIDTH: usize = 10;

/// Title, one block per field, then the status banner. Returns the next free row.
pub fn render_contact_form(row: usize, pane: &ContactPane, theme: &Theme, cols: usize) -> usize {
    let mut current = row;

    position_cursor(current, 3);
    print!("{}{}Contact Us{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), Theme::reset());
    current += 2;

    let value_width = cols.saturating_sub(LABEL_WIDTH + 6);
    for field in &pane.fields {
        position_cursor(current, 1);
        let marker = if field.focused { "▸" } else { " " };
        let label_color = if field.focused {
            &theme.colors.search_bar_border
        } else {
            &theme.colors.text_normal
        };
        print!(
            "{} {marker} {:<LABEL_WIDTH$}{}",
            Theme::fg(label_color),
            field.label,
            Theme::reset()
        );

        let value = truncate(&field.value, value_width);
        if field.is_placeholder {
            print!("{}{value}", Theme::fg(&theme.colors.text_dim));
        } else {
            print!("{}{value}", Theme::fg(&theme.colors.text_normal));
        }
        if field.focused && !pane.submitting {
            print!("{}▏", Theme::fg(&theme.colors.search_bar_border));
        }
        print!("{}", Theme::reset());
        current += 1;

        if let Some(error) = &field.error {
            position_cursor(current, LABEL_WIDTH + 4);
            print!("{}{}{}", Theme::fg(&theme.colors.error_fg), truncate(error, value_width), Theme::reset());
            current += 1;
        }
        current += 1;
    }

    if let Some(banner) = &pane.banner {
        position_cursor(current, 3);
        print!(
            "{}{}{}",
            Theme::fg(notice_color(banner.kind, theme)),
            truncate(&banner.text, cols.saturating_sub(4)),
            Theme::reset()
        );
        current += 1;
    }
    current
}
