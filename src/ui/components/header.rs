//! Title bar and catalog notice.

use crate::ui::helpers::{position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{HeaderInfo, Notice, NoticeKind};

/// Centered bold title. Returns the next free row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = width(&header.title);
    let padding = cols.saturating_sub(title_len) / 2;

    position_cursor(row, 1);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}{}", " ".repeat(padding), header.title);
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));
    print!("{}", Theme::reset());
    row + 1
}

/// Color for a notice of `kind`.
pub fn notice_color(kind: NoticeKind, theme: &Theme) -> &str {
    match kind {
        NoticeKind::Info => &theme.colors.text_dim,
        NoticeKind::Success => &theme.colors.success_fg,
        NoticeKind::Error => &theme.colors.error_fg,
    }
}

/// One-line centered notice. Returns the next free row.
pub fn render_notice(row: usize, notice: &Notice, theme: &Theme, cols: usize) -> usize {
    let text = crate::ui::helpers::truncate(&notice.text, cols);
    let padding = cols.saturating_sub(width(&text)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(notice_color(notice.kind, theme)));
    print!("{}{text}", " ".repeat(padding));
    print!("{}", Theme::reset());
    row + 1
}
