//! Chat list: search field and one two-row entry per conversation.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::Intent;
use crate::models::ChatSummary;
use crate::ui::interaction::HitAreaRegistry;
use crate::view_state::ShellView;

use super::helpers::{display_width, gap_between, row, truncate_to_width};
use super::theme::Palette;

/// Rows per chat entry: name/time, then preview/badge.
pub const ENTRY_HEIGHT: u16 = 2;

/// Rows above the first entry (search field and rule).
const LIST_TOP: u16 = 2;

/// Indent of the preview line, lining up with the name.
const PREVIEW_INDENT: &str = "     ";

pub fn render_chat_list(
    frame: &mut Frame,
    area: Rect,
    view: &ShellView,
    registry: &mut HitAreaRegistry,
) {
    let palette = Palette::for_theme(view.theme);
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(palette.border))
        .style(palette.base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 {
        return;
    }

    // Decorative search field, no filtering
    if let Some(rect) = row(inner, 0) {
        let search = Line::from(vec![
            Span::styled(" ⌕ ", Style::default().fg(palette.dim)),
            Span::styled("Поиск...", palette.dim_text()),
        ]);
        frame.render_widget(
            Paragraph::new(search).style(Style::default().bg(palette.background)),
            rect,
        );
    }
    if let Some(rect) = row(inner, 1) {
        let rule = "─".repeat(usize::from(inner.width));
        frame.render_widget(
            Paragraph::new(Span::styled(rule, Style::default().fg(palette.border))),
            rect,
        );
    }

    for (i, chat) in view.chats.iter().enumerate() {
        let top = LIST_TOP + i as u16 * ENTRY_HEIGHT;
        if top >= inner.height {
            break;
        }
        let entry = Rect {
            x: inner.x,
            y: inner.y + top,
            width: inner.width,
            height: ENTRY_HEIGHT.min(inner.height - top),
        };
        render_entry(frame, entry, chat, view.is_selected(chat), palette);
        registry.register(entry, Intent::SelectChat(chat.id));
    }
}

fn render_entry(
    frame: &mut Frame,
    area: Rect,
    chat: &ChatSummary,
    selected: bool,
    palette: &Palette,
) {
    let width = usize::from(area.width);
    let base = if selected {
        Style::default().fg(palette.text).bg(palette.selection)
    } else {
        Style::default().fg(palette.text)
    };

    // Avatar with a presence dot in its corner
    let dot = if chat.online {
        Span::styled("●", Style::default().fg(palette.online))
    } else {
        Span::raw(" ")
    };
    let prefix_width = 1 + display_width(chat.avatar) + 2;
    let time = format!("{} ", chat.time);
    let name_budget = width.saturating_sub(prefix_width + display_width(&time) + 1);
    let name = truncate_to_width(chat.name, name_budget);
    let gap = gap_between(&name, &time, width.saturating_sub(prefix_width));

    let first = Line::from(vec![
        Span::raw(" "),
        Span::raw(chat.avatar),
        dot,
        Span::raw(" "),
        Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(gap),
        Span::styled(time, palette.dim_text()),
    ]);

    // Badge is left out entirely at zero unread
    let badge = chat.has_unread().then(|| format!(" {} ", chat.unread));
    let badge_width = badge.as_deref().map_or(0, display_width) + 1;
    let preview_budget = width.saturating_sub(PREVIEW_INDENT.len() + badge_width + 1);
    let preview = truncate_to_width(chat.last_message, preview_budget);

    let mut second = vec![
        Span::raw(PREVIEW_INDENT),
        Span::styled(preview.clone(), palette.dim_text()),
    ];
    let used = PREVIEW_INDENT.len() + display_width(&preview);
    match badge {
        Some(badge) => {
            let pad = width.saturating_sub(used + display_width(&badge) + 1).max(1);
            second.push(Span::raw(" ".repeat(pad)));
            second.push(Span::styled(badge, palette.badge()));
            second.push(Span::raw(" "));
        }
        None => second.push(Span::raw(" ".repeat(width.saturating_sub(used)))),
    }

    if let Some(rect) = row(area, 0) {
        frame.render_widget(Paragraph::new(first).style(base), rect);
    }
    if let Some(rect) = row(area, 1) {
        frame.render_widget(Paragraph::new(Line::from(second)).style(base), rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ViewStore;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(store: &ViewStore) -> (Terminal<TestBackend>, HitAreaRegistry) {
        let mut terminal = Terminal::new(TestBackend::new(32, 12)).unwrap();
        let mut registry = HitAreaRegistry::new();
        let view = ShellView::from_store(store);
        terminal
            .draw(|frame| render_chat_list(frame, frame.area(), &view, &mut registry))
            .unwrap();
        (terminal, registry)
    }

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_each_chat_gets_a_two_row_hit_area() {
        let (_, registry) = render(&ViewStore::new());
        for (i, id) in [1, 2, 3].into_iter().enumerate() {
            let area = registry.find(&Intent::SelectChat(id)).unwrap();
            assert_eq!(area.rect.y, LIST_TOP + i as u16 * ENTRY_HEIGHT);
            assert_eq!(area.rect.height, ENTRY_HEIGHT);
        }
    }

    #[test]
    fn test_badges_only_for_unread_chats() {
        let (terminal, _) = render(&ViewStore::new());

        // Preview rows of Алексей (2 unread), Мария (0), Команда Flash (5)
        assert!(row_text(&terminal, 3).contains(" 2 "));
        assert!(row_text(&terminal, 5).trim_end().ends_with("файлы"));
        assert!(row_text(&terminal, 7).contains(" 5 "));
    }

    #[test]
    fn test_search_placeholder() {
        let (terminal, _) = render(&ViewStore::new());
        assert!(row_text(&terminal, 0).contains("Поиск..."));
    }

    #[test]
    fn test_selected_row_is_highlighted() {
        let mut store = ViewStore::new();
        store.select_chat(2);
        let (terminal, _) = render(&store);
        let palette = Palette::for_theme(store.theme());
        let buffer = terminal.backend().buffer();

        assert_eq!(buffer[(1, 4)].bg, palette.selection);
        assert_ne!(buffer[(1, 2)].bg, palette.selection);
    }
}
