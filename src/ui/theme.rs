//! Color palettes for the light and dark themes.

use ratatui::style::{Color, Modifier, Style};

use crate::state::Theme;

/// Resolved colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background
    pub background: Color,
    /// Sidebar, list and header panels
    pub surface: Color,
    pub text: Color,
    /// Secondary text: previews, time labels, placeholders
    pub dim: Color,
    /// Brand color: active entry, badges, own bubbles, read ticks
    pub accent: Color,
    /// Text drawn on top of the accent color
    pub on_accent: Color,
    pub border: Color,
    /// Background of the selected chat row and active sidebar entry
    pub selection: Color,
    /// Incoming message bubble
    pub bubble: Color,
    /// Presence dot
    pub online: Color,
    /// Destructive menu entries
    pub danger: Color,
}

// ============================================================================
// Palettes
// ============================================================================

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(248, 250, 252),
    surface: Color::Rgb(255, 255, 255),
    text: Color::Rgb(15, 23, 42),
    dim: Color::Rgb(100, 116, 139),
    accent: Color::Rgb(37, 99, 235),
    on_accent: Color::Rgb(255, 255, 255),
    border: Color::Rgb(226, 232, 240),
    selection: Color::Rgb(226, 236, 252),
    bubble: Color::Rgb(241, 245, 249),
    online: Color::Rgb(34, 197, 94),
    danger: Color::Rgb(220, 38, 38),
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(15, 23, 42),
    surface: Color::Rgb(30, 41, 59),
    text: Color::Rgb(241, 245, 249),
    dim: Color::Rgb(148, 163, 184),
    accent: Color::Rgb(96, 165, 250),
    on_accent: Color::Rgb(15, 23, 42),
    border: Color::Rgb(51, 65, 85),
    selection: Color::Rgb(30, 58, 95),
    bubble: Color::Rgb(51, 65, 85),
    online: Color::Rgb(74, 222, 128),
    danger: Color::Rgb(248, 113, 113),
};

impl Palette {
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn dim_text(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    /// Pill style for unread counts and the "ON" tag.
    pub fn badge(&self) -> Style {
        Style::default()
            .fg(self.on_accent)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Decorative buttons that dispatch nothing.
    pub fn button(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_follows_theme() {
        assert_eq!(Palette::for_theme(Theme::Light), &LIGHT);
        assert_eq!(Palette::for_theme(Theme::Dark), &DARK);
        assert_ne!(LIGHT.background, DARK.background);
    }
}
