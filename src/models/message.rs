use serde::Serialize;

/// Delivery state of a message bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sent,
    Delivered,
    Read,
}

/// A single bubble in the open conversation.
///
/// Messages carry no chat id: the thread view shows the same fixed list for
/// every selected chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThreadMessage {
    pub id: u32,
    pub text: &'static str,
    pub time: &'static str,
    /// Outgoing message (right-aligned, carries a delivery tick)
    pub is_own: bool,
    pub status: DeliveryStatus,
}

impl ThreadMessage {
    /// Tick glyph drawn after the time label.
    ///
    /// Incoming messages never carry a tick; outgoing ones get a double
    /// check once read and a single check otherwise.
    pub fn status_glyph(&self) -> Option<&'static str> {
        if !self.is_own {
            return None;
        }
        match self.status {
            DeliveryStatus::Read => Some("✓✓"),
            DeliveryStatus::Sent | DeliveryStatus::Delivered => Some("✓"),
        }
    }

    /// Whether the tick should use the accent color.
    pub fn is_read(&self) -> bool {
        self.status == DeliveryStatus::Read
    }
}
