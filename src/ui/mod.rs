//! UI rendering for the chat shell
//!
//! ```text
//! ┌─────────┬──────────────────────────────────────┐
//! │ sidebar │ active section (router)              │
//! │         │                                      │
//! ├─────────┴──────────────────────────────────────┤
//! │ keybind hints                                  │
//! └────────────────────────────────────────────────┘
//! ```
//!
//! Every render function is a pure function of a [`ShellView`]; clickable
//! regions are registered in the [`HitAreaRegistry`] as they are drawn.

mod chat_list;
mod chats;
mod composer;
mod helpers;
pub mod interaction;
mod keybinds;
mod layout;
mod router;
mod sections;
mod sidebar;
mod theme;
mod thread;

pub use chats::EMPTY_THREAD_HINT;
pub use composer::{CARET, PLACEHOLDER};
pub use helpers::{truncate_to_width, wrap_to_width};
pub use keybinds::build_keybinds;
pub use layout::{breakpoints, LayoutContext, SizeCategory};
pub use router::{renderer_for, SectionRenderer};
pub use theme::{Palette, DARK, LIGHT};

use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::view_state::ShellView;
use interaction::HitAreaRegistry;
use router::render_section;
use sidebar::render_sidebar;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render one frame of the app and refresh its hit areas.
pub fn render(frame: &mut Frame, app: &mut App) {
    let caret_visible = app.caret_visible();
    let view = ShellView::from_store(&app.store)
        .with_caret(caret_visible)
        .with_chat_menu(app.chat_menu_visible);
    render_shell(frame, &view, &mut app.hit_areas);
}

/// Render the shell for `view`, replacing the contents of `registry`.
pub fn render_shell(frame: &mut Frame, view: &ShellView, registry: &mut HitAreaRegistry) {
    registry.clear();

    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);
    let palette = Palette::for_theme(view.theme);
    frame.render_widget(Paragraph::new("").style(palette.base().bg(palette.background)), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(ctx.sidebar_width()), Constraint::Min(0)])
        .split(rows[0]);

    render_sidebar(frame, columns[0], view, &ctx, registry);
    render_section(frame, columns[1], view, &ctx, registry);

    frame.render_widget(
        Paragraph::new(build_keybinds(view, &ctx)).style(palette.dim_text().bg(palette.background)),
        rows[1],
    );
}
