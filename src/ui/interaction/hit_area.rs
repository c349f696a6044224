//! Hit areas for mouse interaction.
//!
//! Components register hit areas during rendering, and the event loop
//! queries the registry to determine which intent a click produces.

use ratatui::layout::Rect;

use crate::app::Intent;

/// A clickable region with the intent it produces.
#[derive(Debug, Clone, PartialEq)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The intent dispatched when this area is clicked
    pub intent: Intent,
}

impl HitArea {
    pub fn new(rect: Rect, intent: Intent) -> Self {
        Self { rect, intent }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x.saturating_add(self.rect.width)
            && y >= self.rect.y
            && y < self.rect.y.saturating_add(self.rect.height)
    }
}

/// Registry of the hit areas of the most recent frame.
///
/// Cleared at the start of every render. Areas registered later win for
/// overlapping regions, so overlays (the emoji picker) shadow whatever is
/// drawn beneath them.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self { areas: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register a new hit area. Empty rects are skipped.
    pub fn register(&mut self, rect: Rect, intent: Intent) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        self.areas.push(HitArea::new(rect, intent));
    }

    /// Intent of the topmost area containing the point, if any.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Intent> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.intent.clone())
    }

    /// First registered area carrying `intent`.
    pub fn find(&self, intent: &Intent) -> Option<&HitArea> {
        self.areas.iter().find(|area| &area.intent == intent)
    }

    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
