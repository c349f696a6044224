//! Section router: one render function per [`Section`], looked up by index.

use ratatui::{layout::Rect, Frame};

use crate::state::Section;
use crate::ui::interaction::HitAreaRegistry;
use crate::view_state::ShellView;

use super::chats::render_chats;
use super::layout::LayoutContext;
use super::sections::{
    render_channels, render_contacts, render_favorites, render_help, render_profile,
    render_settings,
};

pub type SectionRenderer =
    fn(&mut Frame, Rect, &ShellView, &LayoutContext, &mut HitAreaRegistry);

/// Indexed by [`Section::index`]; same order as [`Section::ALL`].
const ROUTES: [SectionRenderer; 7] = [
    render_profile,
    render_contacts,
    render_chats,
    render_channels,
    render_favorites,
    render_settings,
    render_help,
];

pub fn renderer_for(section: Section) -> SectionRenderer {
    ROUTES[section.index()]
}

pub fn render_section(
    frame: &mut Frame,
    area: Rect,
    view: &ShellView,
    ctx: &LayoutContext,
    registry: &mut HitAreaRegistry,
) {
    renderer_for(view.section)(frame, area, view, ctx, registry);
}
