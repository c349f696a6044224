// Integration tests for click and keyboard interaction
// Every click goes through the hit areas of a real render; every key
// press goes through App::handle_event.

mod common;

use common::{alt, click, ctrl, draw_default, key, left_click, type_text};
use crossterm::event::KeyCode;
use flash_chat::app::{App, Intent};
use flash_chat::state::{Section, Theme};

// =============================================================================
// Mouse
// =============================================================================

mod mouse {
    use super::*;

    #[test]
    fn test_click_theme_toggle() {
        let mut app = App::default();
        click(&mut app, &Intent::ToggleTheme);
        assert_eq!(app.store.theme(), Theme::Dark);
        click(&mut app, &Intent::ToggleTheme);
        assert_eq!(app.store.theme(), Theme::Light);
    }

    #[test]
    fn test_click_every_sidebar_entry() {
        let mut app = App::default();
        for section in Section::ALL {
            click(&mut app, &Intent::SelectSection(section));
            assert_eq!(app.store.section(), section);
        }
    }

    #[test]
    fn test_click_chat_row_anywhere_in_entry() {
        let mut app = App::default();
        draw_default(&mut app);
        let rect = app.hit_areas.find(&Intent::SelectChat(3)).unwrap().rect;

        // Bottom-right cell of the two-row entry
        app.handle_event(left_click(rect.x + rect.width - 1, rect.y + rect.height - 1));

        assert_eq!(app.store.selected_chat_id(), Some(3));
    }

    #[test]
    fn test_click_outside_any_area_changes_nothing() {
        let mut app = App::default();
        draw_default(&mut app);
        let before = app.store.clone();

        // Middle of the message column
        app.handle_event(left_click(75, 12));

        assert_eq!(app.store, before);
    }

    #[test]
    fn test_click_send_with_blank_draft_is_noop() {
        let mut app = App::default();
        type_text(&mut app, "   ");
        let before = app.store.clone();

        click(&mut app, &Intent::SendDraft);

        assert_eq!(app.store, before);
    }

    #[test]
    fn test_picker_glyph_click_appends_and_closes() {
        let mut app = App::default();
        type_text(&mut app, "go ");
        click(&mut app, &Intent::ToggleEmojiPicker);
        assert!(app.store.emoji_picker_visible());

        click(&mut app, &Intent::PickEmoji("🔥"));

        assert_eq!(app.store.draft(), "go 🔥");
        assert!(!app.store.emoji_picker_visible());
    }

    #[test]
    fn test_picker_glyphs_gone_after_close() {
        let mut app = App::default();
        click(&mut app, &Intent::ToggleEmojiPicker);
        click(&mut app, &Intent::ToggleEmojiPicker);
        draw_default(&mut app);

        assert!(app.hit_areas.find(&Intent::PickEmoji("😊")).is_none());
    }

    #[test]
    fn test_header_menu_opens_and_entry_closes_it() {
        let mut app = App::default();
        click(&mut app, &Intent::ToggleChatMenu);
        assert!(app.chat_menu_visible);

        click(&mut app, &Intent::CloseChatMenu);

        assert!(!app.chat_menu_visible);
        assert_eq!(app.store.selected_chat_id(), Some(1));
        assert_eq!(app.store.section(), Section::Chats);
    }

    #[test]
    fn test_header_menu_closed_by_click_elsewhere() {
        let mut app = App::default();
        click(&mut app, &Intent::ToggleChatMenu);
        click(&mut app, &Intent::SelectChat(3));

        assert!(!app.chat_menu_visible);
        assert_eq!(app.store.selected_chat_id(), Some(3));
    }

    #[test]
    fn test_header_menu_button_toggles() {
        let mut app = App::default();
        click(&mut app, &Intent::ToggleChatMenu);
        click(&mut app, &Intent::ToggleChatMenu);
        assert!(!app.chat_menu_visible);
    }

    #[test]
    fn test_click_marks_frame_dirty() {
        let mut app = App::default();
        draw_default(&mut app);
        assert!(!app.needs_redraw);

        let rect = app.hit_areas.find(&Intent::ToggleTheme).unwrap().rect;
        app.handle_event(left_click(rect.x, rect.y));

        assert!(app.needs_redraw);
    }
}

// =============================================================================
// Scenario
// =============================================================================

mod scenario {
    use super::*;

    #[test]
    fn test_select_type_send_pick_with_mouse() {
        let mut app = App::default();
        assert_eq!(app.store.section(), Section::Chats);
        assert_eq!(app.store.selected_chat_id(), Some(1));
        assert_eq!(app.store.draft(), "");

        click(&mut app, &Intent::SelectChat(2));
        assert_eq!(app.store.selected_chat_id(), Some(2));

        type_text(&mut app, "test");
        assert_eq!(app.store.draft(), "test");

        click(&mut app, &Intent::SendDraft);
        assert_eq!(app.store.draft(), "");
        assert_eq!(app.view().messages.len(), 4);

        click(&mut app, &Intent::ToggleEmojiPicker);
        assert!(app.store.emoji_picker_visible());

        click(&mut app, &Intent::PickEmoji("😊"));
        assert_eq!(app.store.draft(), "😊");
        assert!(!app.store.emoji_picker_visible());
    }

    #[test]
    fn test_same_scenario_with_keyboard() {
        let mut app = App::default();

        app.handle_event(key(KeyCode::Down));
        assert_eq!(app.store.selected_chat_id(), Some(2));

        type_text(&mut app, "test");
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.store.draft(), "");

        app.handle_event(ctrl('e'));
        assert!(app.store.emoji_picker_visible());

        app.handle_event(alt('1'));
        assert_eq!(app.store.draft(), "😊");
        assert!(!app.store.emoji_picker_visible());
    }

    #[test]
    fn test_keyboard_navigation_and_quit() {
        let mut app = App::default();

        app.handle_event(key(KeyCode::F(6)));
        assert_eq!(app.store.section(), Section::Settings);

        app.handle_event(ctrl('t'));
        assert_eq!(app.store.theme(), Theme::Dark);

        app.handle_event(key(KeyCode::F(3)));
        app.handle_event(key(KeyCode::Esc));
        assert_eq!(app.store.selected_chat_id(), None);

        app.handle_event(ctrl('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_edit_draft_around_picked_glyph() {
        let mut app = App::default();
        type_text(&mut app, "люблю ");
        click(&mut app, &Intent::ToggleEmojiPicker);
        click(&mut app, &Intent::PickEmoji("❤️"));
        type_text(&mut app, "!!");
        assert_eq!(app.store.draft(), "люблю ❤️!!");

        app.handle_event(key(KeyCode::Backspace));
        app.handle_event(key(KeyCode::Backspace));
        assert_eq!(app.store.draft(), "люблю ❤️");

        app.handle_event(key(KeyCode::Backspace));
        assert_eq!(app.store.draft(), "люблю ");

        for _ in 0..6 {
            app.handle_event(key(KeyCode::Backspace));
        }
        assert_eq!(app.store.draft(), "");
    }

    #[test]
    fn test_last_emoji_slot_via_alt_equals() {
        let mut app = App::default();
        app.handle_event(ctrl('e'));
        app.handle_event(alt('='));
        assert_eq!(app.store.draft(), "👏");
    }
}
