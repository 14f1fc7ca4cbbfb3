//! Shared rendering utilities.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row`, `col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Display width in chars.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max` chars, ending in `…` when shortened.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}

/// Pads `text` with spaces to `columns` chars, truncating first if needed.
#[must_use]
pub fn fit(text: &str, columns: usize) -> String {
    let text = truncate(text, columns);
    let pad = columns.saturating_sub(width(&text));
    format!("{text}{}", " ".repeat(pad))
}

/// Case-insensitive occurrences of `needle` in `text`, as char ranges.
///
/// Ranges never overlap. An empty needle has no matches.
#[must_use]
pub fn match_ranges(text: &str, needle: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = needle.trim().to_lowercase().chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }

    // Per-char lowercasing keeps indices aligned with `text`; chars whose
    // lowercase form expands are compared by their first char.
    let hay: Vec<char> = text
        .chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect();

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= hay.len() {
        if hay[i..i + needle.len()] == needle[..] {
            ranges.push((i, i + needle.len()));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Prints `text` with `ranges` highlighted, then restores `base` styling.
///
/// Ranges are char indices into `text`; ranges past the end are clipped.
/// Selected rows are printed plain so the selection colors stay intact.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    base: &str,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut pos = 0;
    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < pos || start >= end {
            continue;
        }
        print!("{}", chars[pos..start].iter().collect::<String>());
        print!(
            "{}{}{}",
            Theme::fg(&theme.colors.match_highlight_fg),
            Theme::bg(&theme.colors.match_highlight_bg),
            chars[start..end].iter().collect::<String>()
        );
        print!("{}{base}", Theme::reset());
        pos = end;
    }
    print!("{}", chars[pos..].iter().collect::<String>());
}
