//! Composer row and the emoji picker popup.
//!
//! ```text
//! ──────────────────────────────────────
//!  📎  Сообщение...                ☺  ➤
//! ```

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::app::{emoji_slot_key, Intent};
use crate::ui::interaction::HitAreaRegistry;
use crate::view_state::ShellView;

use super::helpers::{display_width, row};
use super::theme::Palette;

/// Rule plus input row.
pub const COMPOSER_HEIGHT: u16 = 2;

pub const PLACEHOLDER: &str = "Сообщение...";
pub const CARET: &str = "▌";

/// Width of the ☺ and ➤ buttons.
const BUTTON_WIDTH: u16 = 3;
/// Decorative attach button; the paperclip is two columns wide.
const ATTACH_BUTTON: &str = " 📎 ";
const ATTACH_WIDTH: u16 = 4;
/// Narrowest draft field kept before the attach button is dropped.
const MIN_FIELD_WIDTH: u16 = 8;

/// Picker grid: glyphs per row and columns per cell.
pub const PICKER_COLUMNS: usize = 6;
pub const PICKER_CELL_WIDTH: u16 = 4;
/// Rows per picker cell: glyph, then its Alt key.
const PICKER_CELL_HEIGHT: u16 = 2;

pub fn render_composer(
    frame: &mut Frame,
    area: Rect,
    thread_area: Rect,
    view: &ShellView,
    registry: &mut HitAreaRegistry,
) {
    let palette = Palette::for_theme(view.theme);

    if let Some(rect) = row(area, 0) {
        let rule = "─".repeat(usize::from(rect.width));
        frame.render_widget(
            Paragraph::new(Span::styled(rule, Style::default().fg(palette.border))),
            rect,
        );
    }

    let Some(input_row) = row(area, 1) else {
        return;
    };
    if input_row.width < BUTTON_WIDTH * 2 + 1 {
        return;
    }

    let attach_width = if input_row.width >= ATTACH_WIDTH + BUTTON_WIDTH * 2 + MIN_FIELD_WIDTH {
        ATTACH_WIDTH
    } else {
        0
    };
    let attach = Rect {
        width: attach_width,
        ..input_row
    };
    let send = Rect {
        x: input_row.x + input_row.width - BUTTON_WIDTH,
        width: BUTTON_WIDTH,
        ..input_row
    };
    let toggle = Rect {
        x: send.x - BUTTON_WIDTH,
        width: BUTTON_WIDTH,
        ..input_row
    };
    let field = Rect {
        x: input_row.x + attach_width,
        width: input_row.width - attach_width - BUTTON_WIDTH * 2,
        ..input_row
    };

    if !attach.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(ATTACH_BUTTON, palette.dim_text())),
            attach,
        );
    }

    let toggle_style = if view.emoji_picker_visible {
        Style::default().fg(palette.on_accent).bg(palette.accent)
    } else {
        Style::default().fg(palette.dim)
    };
    frame.render_widget(Paragraph::new(Span::styled(" ☺ ", toggle_style)), toggle);
    registry.register(toggle, Intent::ToggleEmojiPicker);

    frame.render_widget(
        Paragraph::new(field_line(view, usize::from(field.width), palette))
            .style(Style::default().bg(palette.background)),
        field,
    );

    let send_style = if view.draft.trim().is_empty() {
        Style::default().fg(palette.dim)
    } else {
        palette.button()
    };
    frame.render_widget(Paragraph::new(Span::styled(" ➤ ", send_style)), send);
    registry.register(send, Intent::SendDraft);

    if view.emoji_picker_visible {
        render_emoji_picker(frame, thread_area, toggle, area.y, view, palette, registry);
    }
}

/// Draft text (its tail when too long) with the caret, or the placeholder.
fn field_line<'a>(view: &ShellView<'a>, width: usize, palette: &Palette) -> Line<'a> {
    let caret = if view.caret_visible {
        Span::styled(CARET, Style::default().fg(palette.accent))
    } else {
        Span::raw(" ")
    };

    if view.draft.is_empty() {
        return Line::from(vec![
            Span::raw(" "),
            caret,
            Span::styled(PLACEHOLDER, palette.dim_text()),
        ]);
    }

    let budget = width.saturating_sub(2);
    Line::from(vec![
        Span::raw(" "),
        Span::styled(tail_to_width(view.draft, budget), Style::default().fg(palette.text)),
        caret,
    ])
}

/// Longest suffix of `s` that fits in `max_width` columns.
fn tail_to_width(s: &str, max_width: usize) -> &str {
    if display_width(s) <= max_width {
        return s;
    }
    let mut used = 0;
    let mut start = s.len();
    for (index, c) in s.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        start = index;
    }
    &s[start..]
}

/// Picker popup above the composer, its right edge flush with the ☺ button.
fn render_emoji_picker(
    frame: &mut Frame,
    thread_area: Rect,
    toggle: Rect,
    composer_top: u16,
    view: &ShellView,
    palette: &Palette,
    registry: &mut HitAreaRegistry,
) {
    let grid_rows = view.emojis.len().div_ceil(PICKER_COLUMNS) as u16;
    let width = PICKER_COLUMNS as u16 * PICKER_CELL_WIDTH + 2;
    let height = grid_rows * PICKER_CELL_HEIGHT + 2;
    let popup = Rect {
        x: (toggle.x + toggle.width)
            .saturating_sub(width)
            .max(thread_area.x),
        y: composer_top.saturating_sub(height).max(thread_area.y),
        width,
        height,
    }
    .intersection(thread_area);

    if popup.is_empty() {
        return;
    }

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(Span::styled(" Alt+ ", palette.dim_text()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent))
        .style(palette.base());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    for (slot, glyph) in view.emojis.iter().enumerate() {
        let col = (slot % PICKER_COLUMNS) as u16;
        let grid_row = (slot / PICKER_COLUMNS) as u16;
        let cell = Rect {
            x: inner.x + col * PICKER_CELL_WIDTH,
            y: inner.y + grid_row * PICKER_CELL_HEIGHT,
            width: PICKER_CELL_WIDTH,
            height: PICKER_CELL_HEIGHT,
        }
        .intersection(inner);
        if cell.is_empty() {
            continue;
        }

        let key = emoji_slot_key(slot).map(String::from).unwrap_or_default();
        let lines = vec![
            Line::from(format!(" {glyph}")),
            Line::from(Span::styled(
                format!("  {key}"),
                Style::default().fg(palette.dim).add_modifier(Modifier::DIM),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), cell);
        registry.register(cell, Intent::PickEmoji(*glyph));
    }
}
