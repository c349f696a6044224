use crate::state::Section;

/// One user interaction, as produced by a click on a hit area or by the key map.
///
/// Views never mutate state; they only describe what was asked for. The
/// shell applies intents with [`App::dispatch`](super::App::dispatch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Flip between light and dark theme
    ToggleTheme,
    /// Switch the active sidebar section
    SelectSection(Section),
    /// Open the chat with this id (not validated)
    SelectChat(u32),
    /// Close the open chat
    CloseChat,
    /// Replace the composer draft with this text
    EditDraft(String),
    /// Submit the draft; ignored when blank
    SendDraft,
    /// Show or hide the emoji picker
    ToggleEmojiPicker,
    /// Append a palette glyph to the draft and close the picker
    PickEmoji(&'static str),
    /// Open or close the thread header menu
    ToggleChatMenu,
    /// Close the thread header menu; its entries carry no other action
    CloseChatMenu,
    /// Leave the application
    Quit,
}
