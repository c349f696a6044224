use serde::Serialize;

/// One conversation row in the chat list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChatSummary {
    /// Unique id, starting at 1
    pub id: u32,
    /// Display name of the peer or group
    pub name: &'static str,
    /// Single glyph standing in for an avatar image
    pub avatar: &'static str,
    /// Preview of the most recent message
    pub last_message: &'static str,
    /// Pre-formatted time label ("12:34", "Вчера")
    pub time: &'static str,
    /// Unread message count; no badge is drawn when zero
    pub unread: u32,
    /// Whether the peer is currently online
    pub online: bool,
}

impl ChatSummary {
    /// Whether the row should carry an unread badge.
    pub fn has_unread(&self) -> bool {
        self.unread > 0
    }

    /// Presence line shown under the name in the thread header.
    pub fn presence_label(&self) -> &'static str {
        if self.online {
            "в сети"
        } else {
            "был(а) недавно"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(unread: u32, online: bool) -> ChatSummary {
        ChatSummary {
            id: 1,
            name: "Test",
            avatar: "T",
            last_message: "hello",
            time: "10:00",
            unread,
            online,
        }
    }

    #[test]
    fn test_zero_unread_has_no_badge() {
        assert!(!summary(0, true).has_unread());
        assert!(summary(3, true).has_unread());
    }

    #[test]
    fn test_presence_label() {
        assert_eq!(summary(0, true).presence_label(), "в сети");
        assert_eq!(summary(0, false).presence_label(), "был(а) недавно");
    }
}
