//! Result count and page links.

use crate::ui::helpers::{position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

/// Dimmed "Showing X of Y portfolios". Returns the next free row.
pub fn render_count_line(row: usize, text: &str, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}{text}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
    row + 1
}

/// Centered `‹ 1 [2] 3 ›`. Arrows dim at the bounds. Returns the next free row.
pub fn render_pagination(row: usize, pages: &PaginationInfo, theme: &Theme, cols: usize) -> usize {
    let links: Vec<String> = pages
        .pages
        .iter()
        .map(|&p| if p == pages.current { format!("[{p}]") } else { p.to_string() })
        .collect();
    let line_len = width(&links.join(" ")) + 4;
    let padding = cols.saturating_sub(line_len) / 2;

    let arrow = |enabled: bool, glyph: &str| {
        let color = if enabled { &theme.colors.text_normal } else { &theme.colors.border };
        format!("{}{glyph}{}", Theme::fg(color), Theme::reset())
    };

    position_cursor(row, 1);
    print!("{}{} ", " ".repeat(padding), arrow(pages.can_prev, "‹"));
    for (i, (&page, link)) in pages.pages.iter().zip(&links).enumerate() {
        if i > 0 {
            print!(" ");
        }
        if page == pages.current {
            print!(
                "{}{}{link}{}",
                Theme::bold(),
                Theme::fg(&theme.colors.page_current_fg),
                Theme::reset()
            );
        } else {
            print!("{}{link}{}", Theme::fg(&theme.colors.text_normal), Theme::reset());
        }
    }
    print!(" {}", arrow(pages.can_next, "›"));
    row + 1
}
