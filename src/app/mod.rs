//! Application shell for the TUI.
//!
//! [`App`] owns the [`ViewStore`], the hit areas of the last frame and the
//! redraw bookkeeping. Terminal events are translated into [`Intent`]s (see
//! `handlers`) and applied in one place, [`App::dispatch`].

mod handlers;
mod intent;
mod snapshot;

pub use handlers::{emoji_slot_for_key, emoji_slot_key};
pub use intent::Intent;
pub use snapshot::Snapshot;

use crate::config::AppConfig;
use crate::data;
use crate::state::ViewStore;
use crate::ui::interaction::HitAreaRegistry;
use crate::view_state::ShellView;

/// Ticks per caret phase (on or off).
const CARET_HALF_CYCLE_TICKS: u64 = 2;

pub struct App {
    /// The view-state store; the only mutable UI state
    pub store: ViewStore,
    /// Clickable regions registered during the last render
    pub hit_areas: HitAreaRegistry,
    /// Thread header menu overlay; closed by any other intent
    pub chat_menu_visible: bool,
    /// Dirty flag: redraw on the next loop iteration
    pub needs_redraw: bool,
    pub should_quit: bool,
    pub terminal_width: u16,
    pub terminal_height: u16,
    /// Tick counter for the composer caret
    pub tick_count: u64,
    /// Tick of the last draft edit; the caret stays solid right after typing
    last_edit_tick: u64,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: ViewStore::with_theme(config.theme),
            hit_areas: HitAreaRegistry::new(),
            chat_menu_visible: false,
            needs_redraw: true,
            should_quit: false,
            terminal_width: 80,
            terminal_height: 24,
            tick_count: 0,
            last_edit_tick: 0,
        }
    }

    /// Borrowed props for the render pass.
    pub fn view(&self) -> ShellView<'_> {
        ShellView::from_store(&self.store)
            .with_caret(self.caret_visible())
            .with_chat_menu(self.chat_menu_visible)
    }

    /// Apply an intent to the store.
    pub fn dispatch(&mut self, intent: Intent) {
        tracing::debug!(?intent, "dispatch");

        // The header menu behaves like a dropdown: anything else dismisses it.
        if intent != Intent::ToggleChatMenu {
            self.chat_menu_visible = false;
        }

        match intent {
            Intent::ToggleTheme => {
                self.store.toggle_theme();
                tracing::info!(theme = %self.store.theme(), "theme changed");
            }
            Intent::SelectSection(section) => {
                if section != self.store.section() {
                    tracing::info!(from = %self.store.section(), to = %section, "section changed");
                }
                self.store.set_section(section);
            }
            Intent::SelectChat(id) => self.store.select_chat(id),
            Intent::CloseChat => self.store.close_chat(),
            Intent::EditDraft(text) => {
                self.store.set_draft_text(text);
                self.last_edit_tick = self.tick_count;
            }
            Intent::SendDraft => {
                // The text is logged and dropped; the thread stays as it is.
                if let Some(text) = self.store.submit_draft() {
                    tracing::info!(
                        target: "composer",
                        chat_id = ?self.store.selected_chat_id(),
                        text = %text,
                        "message sent"
                    );
                    self.last_edit_tick = self.tick_count;
                }
            }
            Intent::ToggleEmojiPicker => self.store.toggle_emoji_picker(),
            Intent::PickEmoji(glyph) => {
                self.store.pick_emoji(glyph);
                self.last_edit_tick = self.tick_count;
            }
            Intent::ToggleChatMenu => self.chat_menu_visible = !self.chat_menu_visible,
            Intent::CloseChatMenu => {}
            Intent::Quit => self.quit(),
        }

        self.mark_dirty();
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    /// Whether the composer is on screen: chats section with an open chat.
    pub fn composer_visible(&self) -> bool {
        self.view().composer_visible()
    }

    /// Advance the caret animation.
    pub fn tick(&mut self) {
        let was_visible = self.caret_visible();
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.composer_visible() && was_visible != self.caret_visible() {
            self.mark_dirty();
        }
    }

    pub fn caret_visible(&self) -> bool {
        let since_edit = self.tick_count.saturating_sub(self.last_edit_tick);
        (since_edit / CARET_HALF_CYCLE_TICKS) % 2 == 0
    }

    /// Serializable view of the current state.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            store: &self.store,
            unread_total: data::unread_total(),
            current_chat: self
                .store
                .selected_chat_id()
                .and_then(data::find_chat)
                .map(|chat| chat.name),
        }
    }
}
