use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ChatError;

/// Color scheme of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph on the toggle button: the moon switches to dark, the sun back to light.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ChatError::Config {
                key: "theme".to_string(),
                message: format!("expected 'light' or 'dark', got '{}'", other),
            }),
        }
    }
}

/// Top-level navigation destination. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Profile,
    Contacts,
    #[default]
    Chats,
    Channels,
    Favorites,
    Settings,
    Help,
}

impl Section {
    /// Every section in sidebar order.
    pub const ALL: [Section; 7] = [
        Section::Profile,
        Section::Contacts,
        Section::Chats,
        Section::Channels,
        Section::Favorites,
        Section::Settings,
        Section::Help,
    ];

    /// Position in [`Section::ALL`]; also the index into the router table.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Profile => "Профиль",
            Section::Contacts => "Контакты",
            Section::Chats => "Чаты",
            Section::Channels => "Каналы",
            Section::Favorites => "Избранное",
            Section::Settings => "Параметры",
            Section::Help => "Справка",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::Profile => "◉",
            Section::Contacts => "☺",
            Section::Chats => "✉",
            Section::Channels => "◈",
            Section::Favorites => "★",
            Section::Settings => "⚙",
            Section::Help => "?",
        }
    }

    /// Settings and help sit below the sidebar separator.
    pub fn is_secondary(self) -> bool {
        matches!(self, Section::Settings | Section::Help)
    }

    /// Section bound to function key `F<n>` (F1 = profile ... F7 = help).
    pub fn from_function_key(n: u8) -> Option<Section> {
        match n {
            1..=7 => Some(Section::ALL[usize::from(n - 1)]),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Profile => "profile",
            Section::Contacts => "contacts",
            Section::Chats => "chats",
            Section::Channels => "channels",
            Section::Favorites => "favorites",
            Section::Settings => "settings",
            Section::Help => "help",
        };
        f.write_str(name)
    }
}
