use serde::Serialize;

use crate::state::ViewStore;

/// JSON-friendly view of the shell state, used by `--snapshot`.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    #[serde(flatten)]
    pub store: &'a ViewStore,
    /// Sidebar badge value
    pub unread_total: u32,
    /// Name of the open chat, if the id matches one
    pub current_chat: Option<&'static str>,
}

impl Snapshot<'_> {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;

    #[test]
    fn test_snapshot_json_fields() {
        let app = App::default();
        let json = app.snapshot().to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["theme"], "light");
        assert_eq!(value["section"], "chats");
        assert_eq!(value["selected_chat_id"], 1);
        assert_eq!(value["draft"], "");
        assert_eq!(value["emoji_picker_visible"], false);
        assert_eq!(value["unread_total"], 7);
        assert_eq!(value["current_chat"], "Алексей");
    }
}
