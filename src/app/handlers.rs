//! Terminal event handling for the App.
//!
//! Keyboard, mouse and paste events are resolved to an [`Intent`] here;
//! nothing in this module touches the store directly.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use unicode_segmentation::UnicodeSegmentation;

use super::{App, Intent};
use crate::data::{CHATS, EMOJIS};
use crate::state::Section;

/// Palette slot for an Alt+key press: 1..9, 0, -, = select glyphs 1 to 12.
pub fn emoji_slot_for_key(c: char) -> Option<usize> {
    match c {
        '1'..='9' => c.to_digit(10).map(|d| d as usize - 1),
        '0' => Some(9),
        '-' => Some(10),
        '=' => Some(11),
        _ => None,
    }
}

/// Label shown next to a palette slot in the picker.
pub fn emoji_slot_key(slot: usize) -> Option<char> {
    match slot {
        0..=8 => char::from_digit(slot as u32 + 1, 10),
        9 => Some('0'),
        10 => Some('-'),
        11 => Some('='),
        _ => None,
    }
}

/// `text` minus its last user-perceived character, or `None` when empty.
///
/// Emoji with variation selectors or ZWJ sequences go in one step.
pub fn without_last_grapheme(text: &str) -> Option<String> {
    let (start, _) = text.grapheme_indices(true).next_back()?;
    Some(text[..start].to_string())
}

impl App {
    /// Handle one terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Paste(text) => self.handle_paste(&text),
            Event::Resize(width, height) => self.update_terminal_dimensions(width, height),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(intent) = self.intent_for_key(key) {
            self.dispatch(intent);
        }
    }

    /// Left clicks dispatch the intent of the hit area under the pointer.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        match self.hit_areas.hit_test(mouse.column, mouse.row) {
            Some(intent) => {
                tracing::debug!(x = mouse.column, y = mouse.row, ?intent, "click");
                self.dispatch(intent);
            }
            None => tracing::debug!(x = mouse.column, y = mouse.row, "click outside hit areas"),
        }
    }

    /// Bracketed paste appends to the draft. The composer is single-line,
    /// so line breaks are dropped.
    pub fn handle_paste(&mut self, text: &str) {
        if !self.composer_visible() {
            return;
        }
        let pasted: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        if pasted.is_empty() {
            return;
        }
        let mut draft = self.store.draft().to_string();
        draft.push_str(&pasted);
        self.dispatch(Intent::EditDraft(draft));
    }

    /// Resolve a key press to an intent using the current state.
    pub fn intent_for_key(&self, key: KeyEvent) -> Option<Intent> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let composer = self.composer_visible();
        let picker = self.store.emoji_picker_visible();

        // Global bindings
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => return Some(Intent::Quit),
            KeyCode::Char('t') if ctrl => return Some(Intent::ToggleTheme),
            KeyCode::F(n) => return Section::from_function_key(n).map(Intent::SelectSection),
            _ => {}
        }

        if self.store.section() == Section::Chats {
            match key.code {
                KeyCode::Up => return self.neighbour_chat(-1).map(Intent::SelectChat),
                KeyCode::Down => return self.neighbour_chat(1).map(Intent::SelectChat),
                _ => {}
            }
        }

        if !composer {
            return None;
        }

        match key.code {
            KeyCode::Char('e') if ctrl => Some(Intent::ToggleEmojiPicker),
            KeyCode::Esc if self.chat_menu_visible => Some(Intent::CloseChatMenu),
            KeyCode::Esc if picker => Some(Intent::ToggleEmojiPicker),
            KeyCode::Esc => Some(Intent::CloseChat),
            KeyCode::Enter => Some(Intent::SendDraft),
            KeyCode::Char(c) if alt => {
                if !picker {
                    return None;
                }
                emoji_slot_for_key(c)
                    .and_then(|slot| EMOJIS.get(slot).copied())
                    .map(Intent::PickEmoji)
            }
            KeyCode::Char(_) if ctrl => None,
            KeyCode::Char(c) => {
                let mut draft = self.store.draft().to_string();
                draft.push(c);
                Some(Intent::EditDraft(draft))
            }
            KeyCode::Backspace => without_last_grapheme(self.store.draft()).map(Intent::EditDraft),
            _ => None,
        }
    }

    /// Id of the chat `step` rows away from the selected one, clamped to the list.
    ///
    /// With nothing (or an unknown id) selected, the first row is chosen.
    fn neighbour_chat(&self, step: isize) -> Option<u32> {
        let current = self
            .store
            .selected_chat_id()
            .and_then(|id| CHATS.iter().position(|chat| chat.id == id));

        let index = match current {
            Some(index) => index
                .saturating_add_signed(step)
                .min(CHATS.len().saturating_sub(1)),
            None => 0,
        };
        let id = CHATS.get(index)?.id;
        (Some(id) != self.store.selected_chat_id()).then_some(id)
    }
}
