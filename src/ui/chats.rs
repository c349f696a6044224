//! The chats section: chat list beside the open thread.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::interaction::HitAreaRegistry;
use crate::view_state::ShellView;

use super::chat_list::render_chat_list;
use super::helpers::render_centered;
use super::layout::LayoutContext;
use super::theme::Palette;
use super::thread::render_thread;

pub const EMPTY_THREAD_HINT: &str = "Выберите чат для начала общения";

pub fn render_chats(
    frame: &mut Frame,
    area: Rect,
    view: &ShellView,
    ctx: &LayoutContext,
    registry: &mut HitAreaRegistry,
) {
    let list_width = ctx.chat_list_width(area.width);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(list_width), Constraint::Min(0)])
        .split(area);

    if list_width > 0 {
        render_chat_list(frame, chunks[0], view, registry);
    }

    if view.selected_chat_id.is_some() {
        render_thread(frame, chunks[1], view, registry);
    } else {
        render_empty_thread(frame, chunks[1], view);
    }
}

fn render_empty_thread(frame: &mut Frame, area: Rect, view: &ShellView) {
    let palette = Palette::for_theme(view.theme);
    let lines = vec![
        Line::from(Span::styled("✉", palette.button())),
        Line::default(),
        Line::from(Span::styled(EMPTY_THREAD_HINT, palette.dim_text())),
    ];

    frame.render_widget(Paragraph::new("").style(palette.base()), area);
    render_centered(frame, area, lines);
}
