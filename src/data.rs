//! Fixed data set rendered by the shell.
//!
//! Nothing here is ever created, updated or deleted at runtime.

use crate::models::{ChatSummary, DeliveryStatus, ThreadMessage};

pub const APP_NAME: &str = "Flash Chat";
pub const APP_GLYPH: &str = "⚡";
pub const USER_HANDLE: &str = "@username";
pub const USER_DISPLAY_NAME: &str = "Вы";
pub const USER_AVATAR: &str = "👤";

pub static CHATS: [ChatSummary; 3] = [
    ChatSummary {
        id: 1,
        name: "Алексей",
        avatar: "👨‍💻",
        last_message: "Привет! Как дела?",
        time: "12:34",
        unread: 2,
        online: true,
    },
    ChatSummary {
        id: 2,
        name: "Мария",
        avatar: "👩‍🎨",
        last_message: "Отправила файлы",
        time: "11:20",
        unread: 0,
        online: false,
    },
    ChatSummary {
        id: 3,
        name: "Команда Flash",
        avatar: "⚡",
        last_message: "Новое обновление готово",
        time: "Вчера",
        unread: 5,
        online: true,
    },
];

pub static MESSAGES: [ThreadMessage; 4] = [
    ThreadMessage {
        id: 1,
        text: "Привет! Как проект?",
        time: "12:30",
        is_own: false,
        status: DeliveryStatus::Read,
    },
    ThreadMessage {
        id: 2,
        text: "Всё отлично! Работаю над новой функцией 🚀",
        time: "12:32",
        is_own: true,
        status: DeliveryStatus::Read,
    },
    ThreadMessage {
        id: 3,
        text: "Супер! Жду результаты",
        time: "12:34",
        is_own: false,
        status: DeliveryStatus::Read,
    },
    ThreadMessage {
        id: 4,
        text: "Скоро покажу демо",
        time: "12:35",
        is_own: true,
        status: DeliveryStatus::Delivered,
    },
];

/// Emoji picker palette, in display order.
pub static EMOJIS: [&str; 12] = [
    "😊", "👍", "❤️", "😂", "🎉", "🔥", "✨", "💯", "🚀", "⚡", "💪", "👏",
];

/// Look up a chat by id.
pub fn find_chat(id: u32) -> Option<&'static ChatSummary> {
    CHATS.iter().find(|chat| chat.id == id)
}

/// Sum of unread counts across all chats (the sidebar badge).
pub fn unread_total() -> u32 {
    CHATS.iter().map(|chat| chat.unread).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_chat_ids_are_unique_and_positive() {
        let ids: HashSet<u32> = CHATS.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), CHATS.len());
        assert!(ids.iter().all(|&id| id >= 1));
    }

    #[test]
    fn test_message_ids_are_unique_and_positive() {
        let ids: HashSet<u32> = MESSAGES.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), MESSAGES.len());
        assert!(ids.iter().all(|&id| id >= 1));
    }

    #[test]
    fn test_unread_total_matches_sidebar_badge() {
        assert_eq!(unread_total(), 7);
    }

    #[test]
    fn test_find_chat() {
        assert_eq!(find_chat(2).map(|c| c.name), Some("Мария"));
        assert!(find_chat(42).is_none());
    }

    #[test]
    fn test_palette_has_twelve_glyphs() {
        assert_eq!(EMOJIS.len(), 12);
        assert_eq!(EMOJIS[0], "😊");
        assert_eq!(EMOJIS[5], "🔥");
    }
}
