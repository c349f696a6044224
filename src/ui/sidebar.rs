//! Persistent navigation sidebar.
//!
//! Brand and theme toggle on top, the seven section entries (settings and
//! help below a separator) and the current user at the bottom.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::Intent;
use crate::data::{APP_GLYPH, APP_NAME, USER_AVATAR, USER_DISPLAY_NAME, USER_HANDLE};
use crate::state::Section;
use crate::ui::interaction::HitAreaRegistry;
use crate::view_state::ShellView;

use super::helpers::{display_width, gap_between, row};
use super::layout::LayoutContext;
use super::theme::Palette;

/// Columns taken by the theme toggle at the right of the header row.
const TOGGLE_WIDTH: u16 = 3;

/// Rows above the first section entry (header plus a blank line).
const ENTRIES_TOP: u16 = 2;

pub fn render_sidebar(
    frame: &mut Frame,
    area: Rect,
    view: &ShellView,
    ctx: &LayoutContext,
    registry: &mut HitAreaRegistry,
) {
    let palette = Palette::for_theme(view.theme);
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(palette.border))
        .style(palette.base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    render_header(frame, inner, view, ctx, palette, registry);

    let mut offset = ENTRIES_TOP;
    let mut previous_secondary = false;
    for section in Section::ALL {
        if section.is_secondary() && !previous_secondary {
            if let Some(rect) = row(inner, offset) {
                let rule = "─".repeat(usize::from(inner.width));
                frame.render_widget(
                    Paragraph::new(Span::styled(rule, Style::default().fg(palette.border))),
                    rect,
                );
            }
            offset += 1;
        }
        previous_secondary = section.is_secondary();

        let Some(rect) = row(inner, offset) else {
            break;
        };
        render_entry(frame, rect, view, ctx, palette, section);
        registry.register(rect, Intent::SelectSection(section));
        offset += 1;
    }

    // Footer only when it does not collide with the entries
    let footer_rows: u16 = if ctx.is_compact() { 1 } else { 2 };
    if inner.height >= offset + footer_rows + 1 {
        render_footer(frame, inner, ctx, palette, footer_rows);
    }
}

fn render_header(
    frame: &mut Frame,
    inner: Rect,
    view: &ShellView,
    ctx: &LayoutContext,
    palette: &Palette,
    registry: &mut HitAreaRegistry,
) {
    let Some(header) = row(inner, 0) else {
        return;
    };
    let toggle_style = Style::default().fg(palette.accent).add_modifier(Modifier::BOLD);

    if ctx.is_compact() || header.width <= TOGGLE_WIDTH {
        // Icon-only sidebar: the whole header row is the toggle
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {}", view.theme.toggle_glyph()), toggle_style)),
            header,
        );
        registry.register(header, Intent::ToggleTheme);
        return;
    }

    let brand = Line::from(vec![
        Span::styled(format!(" {} ", APP_GLYPH), Style::default().fg(palette.accent)),
        Span::styled(APP_NAME, palette.title()),
    ]);
    frame.render_widget(Paragraph::new(brand), header);

    let toggle = Rect {
        x: header.x + header.width - TOGGLE_WIDTH,
        width: TOGGLE_WIDTH,
        ..header
    };
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {} ", view.theme.toggle_glyph()), toggle_style)),
        toggle,
    );
    registry.register(toggle, Intent::ToggleTheme);
}

fn render_entry(
    frame: &mut Frame,
    rect: Rect,
    view: &ShellView,
    ctx: &LayoutContext,
    palette: &Palette,
    section: Section,
) {
    let active = view.section == section;
    let style = if active {
        Style::default()
            .fg(palette.accent)
            .bg(palette.selection)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text)
    };

    if ctx.is_compact() {
        let line = Line::from(Span::raw(format!(" {}", section.icon())));
        frame.render_widget(Paragraph::new(line).style(style), rect);
        return;
    }

    let left = format!(" {} {}", section.icon(), section.label());
    let mut spans = vec![Span::raw(left.clone())];

    if section == Section::Chats && view.unread_total > 0 {
        let badge = format!(" {} ", view.unread_total);
        let trailing = " ";
        let gap = gap_between(&left, &format!("{badge}{trailing}"), usize::from(rect.width));
        spans.push(Span::raw(gap));
        spans.push(Span::styled(badge, palette.badge()));
        spans.push(Span::raw(trailing));
    } else {
        let pad = usize::from(rect.width).saturating_sub(display_width(&left));
        spans.push(Span::raw(" ".repeat(pad)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(style), rect);
}

fn render_footer(
    frame: &mut Frame,
    inner: Rect,
    ctx: &LayoutContext,
    palette: &Palette,
    footer_rows: u16,
) {
    let top = inner.height - footer_rows;

    if ctx.is_compact() {
        if let Some(rect) = row(inner, top) {
            frame.render_widget(Paragraph::new(format!(" {}", USER_AVATAR)), rect);
        }
        return;
    }

    if let Some(rect) = row(inner, top) {
        let line = Line::from(vec![
            Span::raw(format!(" {} ", USER_AVATAR)),
            Span::styled(USER_DISPLAY_NAME, palette.title()),
        ]);
        frame.render_widget(Paragraph::new(line), rect);
    }
    if let Some(rect) = row(inner, top + 1) {
        frame.render_widget(
            Paragraph::new(Span::styled(format!("    {}", USER_HANDLE), palette.dim_text())),
            rect,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ViewStore;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(store: &ViewStore, width: u16, height: u16) -> (String, HitAreaRegistry) {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut registry = HitAreaRegistry::new();
        let view = ShellView::from_store(store);
        let ctx = LayoutContext::new(100, height);

        terminal
            .draw(|frame| render_sidebar(frame, frame.area(), &view, &ctx, &mut registry))
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        (text, registry)
    }

    #[test]
    fn test_sidebar_lists_every_section() {
        let (text, _) = render(&ViewStore::new(), 24, 20);
        for section in Section::ALL {
            assert!(text.contains(section.label()), "missing {}", section.label());
        }
        assert!(text.contains(APP_NAME));
        assert!(text.contains(USER_HANDLE));
    }

    #[test]
    fn test_sidebar_registers_toggle_and_entries() {
        let (_, registry) = render(&ViewStore::new(), 24, 20);

        assert!(registry.find(&Intent::ToggleTheme).is_some());
        for section in Section::ALL {
            assert!(registry.find(&Intent::SelectSection(section)).is_some());
        }
    }

    #[test]
    fn test_settings_entry_sits_below_separator() {
        let (_, registry) = render(&ViewStore::new(), 24, 20);
        let favorites = registry.find(&Intent::SelectSection(Section::Favorites)).unwrap();
        let settings = registry.find(&Intent::SelectSection(Section::Settings)).unwrap();

        assert_eq!(settings.rect.y, favorites.rect.y + 2);
    }

    #[test]
    fn test_short_sidebar_drops_entries_that_do_not_fit() {
        let (_, registry) = render(&ViewStore::new(), 24, 5);
        assert!(registry.find(&Intent::SelectSection(Section::Help)).is_none());
        assert!(registry.find(&Intent::SelectSection(Section::Profile)).is_some());
    }
}
