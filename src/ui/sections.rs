//! The static section views: profile, contacts, channels, favorites,
//! settings and help. Buttons here are decorative and register no hit areas.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::data::{APP_NAME, USER_AVATAR, USER_HANDLE};
use crate::ui::interaction::HitAreaRegistry;
use crate::view_state::ShellView;

use super::helpers::{display_width, gap_between, inner_rect, render_centered};
use super::layout::LayoutContext;
use super::theme::Palette;

const FAVORITES_STAR: Color = Color::Rgb(234, 179, 8);

/// Trailing element of a settings row.
enum Trailing {
    Chevron,
    Badge(&'static str),
}

struct SettingRow {
    icon: &'static str,
    title: &'static str,
    subtitle: &'static str,
    trailing: Trailing,
}

const SETTINGS: [SettingRow; 5] = [
    SettingRow {
        icon: "🔔",
        title: "Уведомления",
        subtitle: "Звуки и оповещения",
        trailing: Trailing::Chevron,
    },
    SettingRow {
        icon: "⌛",
        title: "Самоудаление",
        subtitle: "Автоматическое удаление через 24ч",
        trailing: Trailing::Chevron,
    },
    SettingRow {
        icon: "🔒",
        title: "Шифрование",
        subtitle: "End-to-End включено",
        trailing: Trailing::Badge("ON"),
    },
    SettingRow {
        icon: "🌐",
        title: "Язык",
        subtitle: "Українська",
        trailing: Trailing::Chevron,
    },
    SettingRow {
        icon: "🚫",
        title: "Заблокированные",
        subtitle: "Список заблокированных",
        trailing: Trailing::Chevron,
    },
];

const HELP: [(&str, &str); 4] = [
    (
        "Как отправить сообщение?",
        "Выберите чат, введите текст и нажмите Enter или кнопку отправки.",
    ),
    (
        "Как добавить друга?",
        "Перейдите в раздел Контакты и нажмите \"Добавить\", введите username.",
    ),
    (
        "Что такое самоудаление?",
        "Сообщения автоматически удаляются через заданное время для безопасности.",
    ),
    (
        "Безопасность данных",
        "Все сообщения защищены End-to-End шифрованием.",
    ),
];

/// Fill the section background and return the padded content area.
fn section_frame(frame: &mut Frame, area: Rect, palette: &Palette) -> Rect {
    frame.render_widget(Paragraph::new("").style(palette.base()), area);
    let inner = inner_rect(area, 1);
    Rect {
        x: inner.x.saturating_add(1),
        width: inner.width.saturating_sub(2),
        ..inner
    }
}

/// Title on the left, an optional decorative button on the right.
fn title_line(title: &'static str, button: Option<&'static str>, width: u16, palette: &Palette) -> Line<'static> {
    let mut spans = vec![Span::styled(title, palette.title().add_modifier(Modifier::UNDERLINED))];
    if let Some(label) = button {
        let button = format!("[+ {label}]");
        spans.push(Span::raw(gap_between(title, &button, usize::from(width))));
        spans.push(Span::styled(button, palette.button()));
    }
    Line::from(spans)
}

pub fn render_profile(
    frame: &mut Frame,
    area: Rect,
    view: &ShellView,
    _ctx: &LayoutContext,
    _registry: &mut HitAreaRegistry,
) {
    let palette = Palette::for_theme(view.theme);
    let content = section_frame(frame, area, palette);

    let field = Style::default().fg(palette.text).bg(palette.background);
    let lines = vec![
        Line::from(Span::styled(format!(" {USER_AVATAR} "), palette.badge())),
        Line::default(),
        Line::from(Span::styled("Мой профиль", palette.title())),
        Line::from(Span::styled(USER_HANDLE, palette.dim_text())),
        Line::default(),
        Line::from(Span::styled("О себе", palette.dim_text())),
        Line::from(Span::styled(format!(" Пользователь {APP_NAME} "), field)),
        Line::default(),
        Line::from(Span::styled("[ Сохранить изменения ]", palette.badge())),
    ];
    render_centered(frame, content, lines);
}

pub fn render_contacts(
    frame: &mut Frame,
    area: Rect,
    view: &ShellView,
    _ctx: &LayoutContext,
    _registry: &mut HitAreaRegistry,
) {
    let palette = Palette::for_theme(view.theme);
    let content = section_frame(frame, area, palette);
    let width = usize::from(content.width);

    let mut lines = vec![
        title_line("Контакты", Some("Добавить"), content.width, palette),
        Line::default(),
    ];
    for chat in view.chats {
        let left = format!("{} {}", chat.avatar, chat.name);
        let mut first = vec![
            Span::raw(format!("{} ", chat.avatar)),
            Span::styled(chat.name, palette.title()),
        ];
        if chat.online {
            first.push(Span::raw(gap_between(&left, "●", width)));
            first.push(Span::styled("●", Style::default().fg(palette.online)));
        }
        lines.push(Line::from(first));
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(display_width(chat.avatar) + 1)),
            Span::styled("В сети", palette.dim_text()),
        ]));
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines), content);
}

pub fn render_channels(
    frame: &mut Frame,
    area: Rect,
    view: &ShellView,
    _ctx: &LayoutContext,
    _registry: &mut HitAreaRegistry,
) {
    let palette = Palette::for_theme(view.theme);
    let content = section_frame(frame, area, palette);

    let header = Rect {
        height: content.height.min(1),
        ..content
    };
    frame.render_widget(
        Paragraph::new(title_line("Каналы", Some("Создать канал"), content.width, palette)),
        header,
    );

    let card = Rect {
        y: content.y + 2,
        height: 5,
        ..content
    }
    .intersection(content);
    if card.is_empty() {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border));
    let lines = vec![
        Line::from(vec![
            Span::raw(" 📢  "),
            Span::styled("Flash News", palette.title()),
        ]),
        Line::from(Span::styled("      Официальный канал", palette.dim_text())),
        Line::from(Span::styled("      1.2K подписчиков", palette.dim_text())),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), card);
}

pub fn render_favorites(
    frame: &mut Frame,
    area: Rect,
    view: &ShellView,
    _ctx: &LayoutContext,
    _registry: &mut HitAreaRegistry,
) {
    let palette = Palette::for_theme(view.theme);
    let content = section_frame(frame, area, palette);

    let lines = vec![
        Line::from(Span::styled("⭐", Style::default().fg(FAVORITES_STAR))),
        Line::default(),
        Line::from(Span::styled("Избранное", palette.title())),
        Line::from(Span::styled(
            "Сохраняйте важные сообщения здесь",
            palette.dim_text(),
        )),
    ];
    render_centered(frame, content, lines);
}

pub fn render_settings(
    frame: &mut Frame,
    area: Rect,
    view: &ShellView,
    _ctx: &LayoutContext,
    _registry: &mut HitAreaRegistry,
) {
    let palette = Palette::for_theme(view.theme);
    let content = section_frame(frame, area, palette);
    let width = usize::from(content.width);

    let mut lines = vec![title_line("Параметры", None, content.width, palette), Line::default()];
    for setting in &SETTINGS {
        let left = format!("{} {}", setting.icon, setting.title);
        let (trailing, trailing_style) = match setting.trailing {
            Trailing::Chevron => (" › ".to_string(), palette.dim_text()),
            Trailing::Badge(label) => (format!(" {label} "), palette.badge()),
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", setting.icon)),
            Span::styled(setting.title, palette.title()),
            Span::raw(gap_between(&left, &trailing, width)),
            Span::styled(trailing, trailing_style),
        ]));
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(display_width(setting.icon) + 1)),
            Span::styled(setting.subtitle, palette.dim_text()),
        ]));
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines), content);
}

pub fn render_help(
    frame: &mut Frame,
    area: Rect,
    view: &ShellView,
    _ctx: &LayoutContext,
    _registry: &mut HitAreaRegistry,
) {
    let palette = Palette::for_theme(view.theme);
    let content = section_frame(frame, area, palette);

    let mut lines = vec![
        title_line("Справка Flash Chat", None, content.width, palette),
        Line::default(),
    ];
    for (question, answer) in HELP {
        lines.push(Line::from(Span::styled(question, palette.title())));
        lines.push(Line::from(Span::styled(answer, palette.dim_text())));
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), content);
}
