//! Message thread: header for the open chat, message bubbles and the composer.
//!
//! The same fixed message list renders whichever chat is open.
//!
//! ```text
//!  👨 Алексей                  ✆  ▶  ⋮
//!     в сети               ╭────────────────╮
//! ─────────────────────────│ ☆ В избранное  │
//!                          │ ▤ Архивировать │
//!                          │ ✕ Удалить чат  │
//!                          ╰────────────────╯
//! ```

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::Intent;
use crate::models::ThreadMessage;
use crate::ui::interaction::HitAreaRegistry;
use crate::view_state::ShellView;

use super::composer::{render_composer, COMPOSER_HEIGHT};
use super::helpers::{display_width, gap_between, row, wrap_to_width};
use super::layout::LayoutContext;
use super::theme::Palette;

/// Header rows: name, presence, rule.
pub const HEADER_HEIGHT: u16 = 3;

/// Presence line used when the selected id matches no chat.
const UNKNOWN_PRESENCE: &str = "был(а) недавно";

/// Decorative call and video buttons.
const CALL_ACTIONS: &str = "✆  ▶ ";
/// Header button that opens the chat menu.
const MENU_BUTTON: &str = " ⋮ ";

/// Chat menu entries: icon, label, destructive.
pub const CHAT_MENU_ITEMS: [(&str, &str, bool); 3] = [
    ("☆", "В избранное", false),
    ("▤", "Архивировать", false),
    ("✕", "Удалить чат", true),
];

pub fn render_thread(
    frame: &mut Frame,
    area: Rect,
    view: &ShellView,
    registry: &mut HitAreaRegistry,
) {
    let palette = Palette::for_theme(view.theme);
    frame.render_widget(Paragraph::new("").style(palette.base()), area);

    render_header(frame, area, view, palette, registry);

    let composer_height = COMPOSER_HEIGHT.min(area.height.saturating_sub(HEADER_HEIGHT));
    let messages_area = Rect {
        x: area.x.saturating_add(1),
        y: area.y + HEADER_HEIGHT.min(area.height),
        width: area.width.saturating_sub(2),
        height: area
            .height
            .saturating_sub(HEADER_HEIGHT)
            .saturating_sub(composer_height),
    };
    render_messages(frame, messages_area, view.messages, palette);

    let composer_area = Rect {
        y: area.y + area.height - composer_height,
        height: composer_height,
        ..area
    };
    render_composer(frame, composer_area, area, view, registry);

    // Last, so the menu sits above the messages and takes their clicks
    if view.chat_menu_visible {
        render_chat_menu(frame, area, palette, registry);
    }
}

fn render_header(
    frame: &mut Frame,
    area: Rect,
    view: &ShellView,
    palette: &Palette,
    registry: &mut HitAreaRegistry,
) {
    let chat = view.current_chat();
    let avatar = chat.map_or("", |c| c.avatar);
    let name = chat.map_or("", |c| c.name);
    let presence = chat.map_or(UNKNOWN_PRESENCE, |c| c.presence_label());

    if let Some(rect) = row(area, 0) {
        let left = format!(" {} {}", avatar, name);
        let actions = format!("{CALL_ACTIONS}{MENU_BUTTON}");
        let fits = usize::from(rect.width) > display_width(&left) + display_width(&actions);

        let mut spans = vec![
            Span::raw(format!(" {} ", avatar)),
            Span::styled(name, palette.title()),
        ];
        if fits {
            let menu_style = if view.chat_menu_visible {
                Style::default().fg(palette.on_accent).bg(palette.accent)
            } else {
                palette.dim_text()
            };
            spans.push(Span::raw(gap_between(&left, &actions, usize::from(rect.width))));
            spans.push(Span::styled(CALL_ACTIONS, palette.dim_text()));
            spans.push(Span::styled(MENU_BUTTON, menu_style));

            let menu_width = display_width(MENU_BUTTON) as u16;
            let button = Rect {
                x: rect.x + rect.width - menu_width,
                width: menu_width,
                ..rect
            };
            registry.register(button, Intent::ToggleChatMenu);
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), rect);
    }

    if let Some(rect) = row(area, 1) {
        let indent = " ".repeat(display_width(avatar) + 2);
        let presence_style = if chat.is_some_and(|c| c.online) {
            Style::default().fg(palette.online)
        } else {
            palette.dim_text()
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(indent),
                Span::styled(presence, presence_style),
            ])),
            rect,
        );
    }

    if let Some(rect) = row(area, 2) {
        let rule = "─".repeat(usize::from(rect.width));
        frame.render_widget(
            Paragraph::new(Span::styled(rule, Style::default().fg(palette.border))),
            rect,
        );
    }
}

/// Chat menu popup hanging from the ⋮ button, flush with the right edge.
///
/// Entries only close the menu.
fn render_chat_menu(
    frame: &mut Frame,
    thread_area: Rect,
    palette: &Palette,
    registry: &mut HitAreaRegistry,
) {
    let label_width = CHAT_MENU_ITEMS
        .iter()
        .map(|(icon, label, _)| display_width(icon) + 1 + display_width(label))
        .max()
        .unwrap_or(0) as u16;
    let width = label_width + 4;
    let height = CHAT_MENU_ITEMS.len() as u16 + 2;
    let popup = Rect {
        x: (thread_area.x + thread_area.width)
            .saturating_sub(width)
            .max(thread_area.x),
        y: thread_area.y.saturating_add(1),
        width,
        height,
    }
    .intersection(thread_area);

    if popup.is_empty() {
        return;
    }

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(palette.base());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    for (offset, (icon, label, destructive)) in CHAT_MENU_ITEMS.iter().enumerate() {
        let Some(rect) = row(inner, offset as u16) else {
            break;
        };
        let style = if *destructive {
            Style::default().fg(palette.danger)
        } else {
            Style::default().fg(palette.text)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {icon} {label}"), style)),
            rect,
        );
        registry.register(rect, Intent::CloseChatMenu);
    }
}

/// One screen row of the message column.
struct BubbleRow<'a> {
    line: Line<'a>,
    alignment: Alignment,
}

/// Lay out every message as rows: wrapped text, then time and ticks, then a gap.
fn bubble_rows<'a>(messages: &'a [ThreadMessage], width: u16, palette: &Palette) -> Vec<BubbleRow<'a>> {
    let text_width = usize::from(LayoutContext::bubble_text_width(width))
        .min(usize::from(width).saturating_sub(2))
        .max(1);
    let mut rows = Vec::new();

    for (i, message) in messages.iter().enumerate() {
        if i > 0 {
            rows.push(BubbleRow {
                line: Line::default(),
                alignment: Alignment::Left,
            });
        }

        let (alignment, bubble_style) = if message.is_own {
            (
                Alignment::Right,
                Style::default().fg(palette.on_accent).bg(palette.accent),
            )
        } else {
            (
                Alignment::Left,
                Style::default().fg(palette.text).bg(palette.bubble),
            )
        };

        let wrapped = wrap_to_width(message.text, text_width);
        let inner_width = wrapped.iter().map(|l| display_width(l)).max().unwrap_or(0);
        for text in wrapped {
            let pad = " ".repeat(inner_width - display_width(&text));
            rows.push(BubbleRow {
                line: Line::from(Span::styled(format!(" {text}{pad} "), bubble_style)),
                alignment,
            });
        }

        let mut meta = vec![Span::styled(message.time, palette.dim_text())];
        if let Some(glyph) = message.status_glyph() {
            let tick_style = if message.is_read() {
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
            } else {
                palette.dim_text()
            };
            meta.push(Span::raw(" "));
            meta.push(Span::styled(glyph, tick_style));
        }
        rows.push(BubbleRow {
            line: Line::from(meta),
            alignment,
        });
    }

    rows
}

fn render_messages(frame: &mut Frame, area: Rect, messages: &[ThreadMessage], palette: &Palette) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let rows = bubble_rows(messages, area.width, palette);
    // Keep the newest messages in view
    let skip = rows.len().saturating_sub(usize::from(area.height));

    for (offset, bubble_row) in rows.into_iter().skip(skip).enumerate() {
        let Some(rect) = row(area, offset as u16) else {
            break;
        };
        frame.render_widget(
            Paragraph::new(bubble_row.line).alignment(bubble_row.alignment),
            rect,
        );
    }
}
