//! The view-state store.
//!
//! Holds the five values the shell renders from. Every mutator is
//! unconditional except [`ViewStore::submit_draft`], which ignores blank
//! drafts.

use serde::Serialize;

use super::{Section, Theme};

/// Chat opened on startup.
const INITIAL_CHAT_ID: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewStore {
    theme: Theme,
    section: Section,
    selected_chat_id: Option<u32>,
    draft: String,
    emoji_picker_visible: bool,
}

impl Default for ViewStore {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            section: Section::default(),
            selected_chat_id: Some(INITIAL_CHAT_ID),
            draft: String::new(),
            emoji_picker_visible: false,
        }
    }
}

impl ViewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store starting with the given theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn selected_chat_id(&self) -> Option<u32> {
        self.selected_chat_id
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn emoji_picker_visible(&self) -> bool {
        self.emoji_picker_visible
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn toggle_theme(&mut self) {
        self.set_theme(self.theme.toggled());
    }

    /// Switch sections. Chat selection, draft and picker state carry over.
    pub fn set_section(&mut self, section: Section) {
        self.section = section;
    }

    /// Open a chat. The id is not checked against the data set.
    pub fn select_chat(&mut self, id: u32) {
        self.selected_chat_id = Some(id);
    }

    pub fn close_chat(&mut self) {
        self.selected_chat_id = None;
    }

    /// Replace the draft verbatim, whitespace included.
    pub fn set_draft_text(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn toggle_emoji_picker(&mut self) {
        self.emoji_picker_visible = !self.emoji_picker_visible;
    }

    /// Submit the draft.
    ///
    /// Returns the submitted text and clears the draft when it has any
    /// non-whitespace content. A blank draft is left untouched and `None` is
    /// returned. The text is never appended to the thread.
    pub fn submit_draft(&mut self) -> Option<String> {
        if self.draft.trim().is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.draft))
    }

    /// Append `glyph` to the end of the draft and close the picker.
    pub fn pick_emoji(&mut self, glyph: &str) {
        self.draft.push_str(glyph);
        self.emoji_picker_visible = false;
    }
}
