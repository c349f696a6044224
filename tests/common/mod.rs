//! Common test utilities for integration tests.
//!
//! Render the app into a `TestBackend`, read text back out of the buffer and
//! click registered hit areas the way the event loop would.

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use flash_chat::app::{App, Intent};
use flash_chat::ui;
use ratatui::{backend::TestBackend, layout::Rect, Terminal};

pub const WIDTH: u16 = 100;
pub const HEIGHT: u16 = 30;

/// Render one frame of `app` at the given size.
pub fn draw(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    app.needs_redraw = false;
    terminal
}

pub fn draw_default(app: &mut App) -> Terminal<TestBackend> {
    draw(app, WIDTH, HEIGHT)
}

/// All rows of the buffer joined by newlines.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let height = terminal.backend().buffer().area.height;
    (0..height)
        .map(|y| row_text(terminal, y))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

/// Text inside `rect`, rows joined by newlines.
pub fn rect_text(terminal: &Terminal<TestBackend>, rect: Rect) -> String {
    let buffer = terminal.backend().buffer();
    (rect.y..rect.y + rect.height)
        .map(|y| {
            (rect.x..rect.x + rect.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn left_click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Render, then click the top-left cell of the area registered for `intent`.
pub fn click(app: &mut App, intent: &Intent) {
    draw_default(app);
    let rect = app
        .hit_areas
        .find(intent)
        .unwrap_or_else(|| panic!("no hit area for {intent:?}"))
        .rect;
    app.handle_event(left_click(rect.x, rect.y));
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

pub fn alt(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT))
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_event(key(KeyCode::Char(c)));
    }
}
