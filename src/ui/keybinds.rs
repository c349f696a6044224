//! Contextual keybind hints shown on the bottom row.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::state::Section;
use crate::view_state::ShellView;

use super::layout::LayoutContext;
use super::theme::Palette;

/// Build keybind hints for the current view.
///
/// On extra small terminals only the composer and quit hints are kept.
pub fn build_keybinds(view: &ShellView, ctx: &LayoutContext) -> Line<'static> {
    let palette = Palette::for_theme(view.theme);
    let key_style = Style::default().fg(palette.accent);
    let mut hints: Vec<(&'static str, &'static str)> = Vec::new();

    if view.chat_menu_visible && view.composer_visible() {
        hints.push(("[Esc]", "закрыть меню"));
    } else if view.emoji_picker_visible && view.composer_visible() {
        hints.push(("[Alt+1..=]", "эмодзи"));
        hints.push(("[Esc]", "закрыть"));
    } else if view.composer_visible() {
        hints.push(("[Enter]", "отправить"));
        hints.push(("[Ctrl+E]", "эмодзи"));
        hints.push(("[Esc]", "закрыть чат"));
    }

    if !ctx.is_compact() {
        if view.section == Section::Chats {
            hints.push(("[↑↓]", "чат"));
        }
        hints.push(("[F1-F7]", "разделы"));
        hints.push(("[Ctrl+T]", "тема"));
    }
    hints.push(("[Ctrl+Q]", "выход"));

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, label)) in hints.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", palette.dim_text()));
        }
        spans.push(Span::styled(key, key_style));
        spans.push(Span::styled(format!(" {label}"), palette.dim_text()));
    }
    Line::from(spans)
}
