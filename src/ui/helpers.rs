//! Helper functions for UI rendering
//!
//! Width-aware truncation and wrapping. All widths are terminal columns as
//! reported by `unicode-width`, so emoji count as two.

use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Ellipsis appended to truncated text
pub const ELLIPSIS: &str = "…";

/// Get inner rect with margin
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y.saturating_add(margin),
        width: area.width.saturating_sub(margin.saturating_mul(2)),
        height: area.height.saturating_sub(margin.saturating_mul(2)),
    }
}

/// One-row rect at `offset` rows below the top of `area`, or `None` past the bottom.
pub fn row(area: Rect, offset: u16) -> Option<Rect> {
    (offset < area.height).then(|| Rect {
        x: area.x,
        y: area.y + offset,
        width: area.width,
        height: 1,
    })
}

pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate `s` to at most `max_width` columns, ending in "…" when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(ELLIPSIS);
    out
}

/// Word-wrap `s` into lines of at most `max_width` columns.
///
/// Words wider than a line are split by character.
pub fn wrap_to_width(s: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in s.split_whitespace() {
        let word_width = display_width(word);
        let sep = usize::from(!current.is_empty());

        if current_width + sep + word_width <= max_width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += sep + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= max_width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        for c in word.chars() {
            let w = c.width().unwrap_or(0);
            if current_width + w > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(c);
            current_width += w;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Spaces needed between `left` and `right` to fill `width` columns (at least one).
pub fn gap_between(left: &str, right: &str, width: usize) -> String {
    let used = display_width(left) + display_width(right);
    " ".repeat(width.saturating_sub(used).max(1))
}

/// Render `lines` vertically centered in `area`.
pub fn render_centered(frame: &mut Frame, area: Rect, lines: Vec<Line<'_>>) {
    let top = area.height.saturating_sub(lines.len() as u16) / 2;
    let body = Rect {
        y: area.y + top,
        height: area.height - top,
        ..area
    };
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        body,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_rect_saturates() {
        let inner = inner_rect(Rect::new(0, 0, 1, 1), 1);
        assert_eq!(inner.width, 0);
        assert_eq!(inner.height, 0);
    }

    #[test]
    fn test_row_out_of_bounds() {
        let area = Rect::new(2, 3, 10, 2);
        assert_eq!(row(area, 1), Some(Rect::new(2, 4, 10, 1)));
        assert_eq!(row(area, 2), None);
    }

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_to_width("Привет", 10), "Привет");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        let out = truncate_to_width("Новое обновление готово", 10);
        assert_eq!(out, "Новое обн…");
        assert_eq!(display_width(&out), 10);
    }

    #[test]
    fn test_truncate_counts_wide_glyphs() {
        // Each rocket is two columns wide
        let out = truncate_to_width("🚀🚀🚀", 4);
        assert_eq!(out, "🚀…");
        assert!(display_width(&out) <= 4);
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_wrap_on_word_boundaries() {
        let lines = wrap_to_width("Всё отлично! Работаю над новой функцией", 14);
        assert_eq!(
            lines,
            vec!["Всё отлично!", "Работаю над", "новой функцией"]
        );
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let lines = wrap_to_width("abcdefgh", 3);
        assert_eq!(lines, vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_wrap_empty_gives_one_line() {
        assert_eq!(wrap_to_width("", 10), vec![String::new()]);
    }

    #[test]
    fn test_gap_between_fills_width() {
        assert_eq!(gap_between("ab", "cd", 7), "   ");
        assert_eq!(gap_between("abcd", "efgh", 4), " ");
    }
}
