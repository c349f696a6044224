//! Borrowed props for one render pass.

use crate::data::{self, CHATS, EMOJIS, MESSAGES};
use crate::models::{ChatSummary, ThreadMessage};
use crate::state::{Section, Theme, ViewStore};

/// Everything the views read during a frame.
///
/// Built from the [`ViewStore`] by [`ShellView::from_store`] and handed
/// down by reference; views never see `App`.
#[derive(Debug, Clone, Copy)]
pub struct ShellView<'a> {
    pub theme: Theme,
    pub section: Section,
    pub selected_chat_id: Option<u32>,
    pub draft: &'a str,
    pub emoji_picker_visible: bool,
    /// Thread header menu; owned by the shell, not the store
    pub chat_menu_visible: bool,

    /// Static data, borrowed for the process lifetime
    pub chats: &'a [ChatSummary],
    pub messages: &'a [ThreadMessage],
    pub emojis: &'a [&'static str],

    /// Badge on the sidebar chats entry
    pub unread_total: u32,
    /// Composer caret phase
    pub caret_visible: bool,
}

impl<'a> ShellView<'a> {
    pub fn from_store(store: &'a ViewStore) -> Self {
        Self {
            theme: store.theme(),
            section: store.section(),
            selected_chat_id: store.selected_chat_id(),
            draft: store.draft(),
            emoji_picker_visible: store.emoji_picker_visible(),
            chat_menu_visible: false,
            chats: &CHATS,
            messages: &MESSAGES,
            emojis: &EMOJIS,
            unread_total: data::unread_total(),
            caret_visible: true,
        }
    }

    pub fn with_caret(mut self, visible: bool) -> Self {
        self.caret_visible = visible;
        self
    }

    pub fn with_chat_menu(mut self, visible: bool) -> Self {
        self.chat_menu_visible = visible;
        self
    }

    /// Summary whose id matches the selection, if any.
    pub fn current_chat(&self) -> Option<&'a ChatSummary> {
        let id = self.selected_chat_id?;
        self.chats.iter().find(|chat| chat.id == id)
    }

    /// The composer shows in the chats section while a chat is open.
    pub fn composer_visible(&self) -> bool {
        self.section == Section::Chats && self.selected_chat_id.is_some()
    }

    pub fn is_selected(&self, chat: &ChatSummary) -> bool {
        self.selected_chat_id == Some(chat.id)
    }
}
