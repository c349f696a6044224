//! Responsive Layout System
//!
//! `LayoutContext` wraps the frame dimensions and answers the sizing
//! questions the shell asks: how wide the sidebar and chat list are, and
//! how wide a message bubble may grow.

use ratatui::layout::Rect;

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Below this width the sidebar collapses to icons
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;
}

/// Size category for responsive design decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    ExtraSmall,
    Small,
    Medium,
    Large,
}

/// Layout context holding terminal dimensions for responsive calculations.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.width, rect.height)
    }

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Calculate proportional width with min/max bounds.
    ///
    /// The result never exceeds the terminal width.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max).min(self.width)
    }

    pub fn size_category(&self) -> SizeCategory {
        if self.width < breakpoints::XS_WIDTH {
            SizeCategory::ExtraSmall
        } else if self.width < breakpoints::SM_WIDTH {
            SizeCategory::Small
        } else if self.width < breakpoints::MD_WIDTH {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }

    /// Sidebar shows icons only.
    pub fn is_compact(&self) -> bool {
        self.size_category() == SizeCategory::ExtraSmall
    }

    pub fn sidebar_width(&self) -> u16 {
        if self.is_compact() {
            6
        } else {
            self.bounded_width(20, 20, 28)
        }
    }

    /// Width of the chat list inside the chats section.
    pub fn chat_list_width(&self, content_width: u16) -> u16 {
        let width = match self.size_category() {
            SizeCategory::ExtraSmall => 0,
            SizeCategory::Small => 24,
            SizeCategory::Medium => 30,
            SizeCategory::Large => 36,
        };
        width.min(content_width / 2)
    }

    /// Maximum text width of a message bubble in a thread `thread_width` wide.
    pub fn bubble_text_width(thread_width: u16) -> u16 {
        (thread_width.saturating_mul(7) / 10).clamp(8, 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_categories() {
        assert_eq!(LayoutContext::new(50, 24).size_category(), SizeCategory::ExtraSmall);
        assert_eq!(LayoutContext::new(70, 24).size_category(), SizeCategory::Small);
        assert_eq!(LayoutContext::new(100, 24).size_category(), SizeCategory::Medium);
        assert_eq!(LayoutContext::new(160, 50).size_category(), SizeCategory::Large);
    }

    #[test]
    fn test_sidebar_width_bounds() {
        assert_eq!(LayoutContext::new(50, 24).sidebar_width(), 6);
        assert_eq!(LayoutContext::new(80, 24).sidebar_width(), 20);
        assert_eq!(LayoutContext::new(120, 40).sidebar_width(), 24);
        assert_eq!(LayoutContext::new(300, 40).sidebar_width(), 28);
    }

    #[test]
    fn test_bounded_width_never_exceeds_terminal() {
        assert_eq!(LayoutContext::new(10, 10).bounded_width(20, 20, 28), 10);
    }

    #[test]
    fn test_chat_list_width_leaves_room_for_thread() {
        let ctx = LayoutContext::new(100, 30);
        assert_eq!(ctx.chat_list_width(80), 30);
        assert_eq!(ctx.chat_list_width(40), 20);
        assert_eq!(LayoutContext::new(50, 30).chat_list_width(44), 0);
    }

    #[test]
    fn test_bubble_width_clamped() {
        assert_eq!(LayoutContext::bubble_text_width(10), 8);
        assert_eq!(LayoutContext::bubble_text_width(50), 35);
        assert_eq!(LayoutContext::bubble_text_width(200), 60);
    }
}
