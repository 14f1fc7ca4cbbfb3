//! Portfolio table: column headers and rows.
//!
//! Columns are AUTHOR, TECH STACK and DESCRIPTION. The sorted column carries
//! its ▲/▼ arrow, and query matches are highlighted unless the row is selected.

use crate::app::state::COLUMN_GAP;
use crate::ui::helpers::{self, fit, position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ColumnHeader, DisplayRow};

/// Returns the next free row.
pub fn render_table_headers(row: usize, columns: &[ColumnHeader], theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    for column in columns {
        let label = match column.arrow {
            Some(arrow) => format!("{} {arrow}", column.label),
            None => column.label.clone(),
        };
        print!("{}", fit(&label, column.width));
    }
    print!("{}", Theme::reset());
    row + 1
}

/// Renders rows until `last_row` (inclusive). Returns the next free row.
pub fn render_table_rows(
    row: usize,
    last_row: usize,
    rows: &[DisplayRow],
    columns: &[ColumnHeader],
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current = row;
    for item in rows {
        if current > last_row {
            break;
        }
        current = render_table_row(current, item, columns, theme, cols);
    }
    current
}

fn render_table_row(
    row: usize,
    item: &DisplayRow,
    columns: &[ColumnHeader],
    theme: &Theme,
    cols: usize,
) -> usize {
    let widths: Vec<usize> = columns.iter().map(|c| c.width).collect();
    let (author_width, tech_width) = (
        widths.first().copied().unwrap_or(0),
        widths.get(1).copied().unwrap_or(0),
    );

    let base = if item.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    position_cursor(row, 1);
    print!("{base}");

    helpers::render_highlighted_text(
        &item.author,
        &item.author_highlights,
        theme,
        &base,
        item.is_selected,
    );
    print!("{}", " ".repeat(author_width.saturating_sub(width(&item.author))));

    let tech = tech_cell(item);
    let tech_text = helpers::truncate(&tech, tech_width.saturating_sub(COLUMN_GAP));
    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.badge_fg));
    }
    print!("{tech_text}{base}");
    print!("{}", " ".repeat(tech_width.saturating_sub(width(&tech_text))));

    helpers::render_highlighted_text(
        &item.description,
        &item.description_highlights,
        theme,
        &base,
        item.is_selected,
    );

    let used = author_width + tech_width + width(&item.description);
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
    row + 1
}

/// Badges as `[React] [Vue]`, followed by the overflow note.
fn tech_cell(item: &DisplayRow) -> String {
    let mut cell = item
        .badges
        .iter()
        .map(|b| format!("[{b}]"))
        .collect::<Vec<_>>()
        .join(" ");
    if let Some(more) = &item.more {
        cell.push(' ');
        cell.push_str(more);
    }
    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tech_cell_lists_badges_then_overflow() {
        let row = DisplayRow {
            author: "Maya".to_string(),
            badges: vec!["React".to_string(), "GSAP".to_string(), "Vite".to_string()],
            more: Some("+2 more".to_string()),
            description: String::new(),
            is_selected: false,
            author_highlights: vec![],
            description_highlights: vec![],
        };
        assert_eq!(tech_cell(&row), "[React] [GSAP] [Vite] +2 more");
    }
}
