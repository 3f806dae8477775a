//! Navigation bar, status line and help overlay shared by every screen.

use crate::app::state::{App, AppScreen};
use crate::ui::widgets::palette::Palette;
use crate::ui::widgets::popup::centered_rect;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap};
use ratatui::Frame;

pub fn render_nav(app: &App, f: &mut Frame<'_>, area: Rect) {
    let palette = Palette::for_theme(app.theme);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(22)])
        .split(area);

    let titles = AppScreen::NAV.iter().enumerate().map(|(i, screen)| {
        let mut spans = vec![
            Span::styled(format!("{} ", i + 1), palette.muted()),
            Span::raw(screen.page().label()),
        ];
        // Badge on the favorites tab, as in the site header.
        if *screen == AppScreen::Favorites {
            spans.push(Span::styled(
                format!(" ({})", app.favorites.count()),
                Style::default().fg(palette.accent),
            ));
        }
        Line::from(spans)
    });

    let tabs = Tabs::new(titles)
        .select(app.screen.nav_index())
        .highlight_style(palette.selected())
        .divider("|")
        .block(
            Block::default()
                .title(" AutoDrive ")
                .title_style(palette.heading())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        );
    f.render_widget(tabs, chunks[0]);

    let side = Paragraph::new(Line::from(vec![
        Span::styled("t ", palette.key()),
        Span::raw(format!("{}  ", app.theme.icon())),
        Span::styled("F1 ", palette.key()),
        Span::raw("помощь"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(side, chunks[1]);
}

/// Toast first, then the last error, then the key hints for the screen.
pub fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let palette = Palette::for_theme(app.theme);

    let line = if let Some(text) = app.toast_text() {
        Line::from(Span::styled(format!(" {text} "), palette.selected()))
    } else if !app.status_message.is_empty() {
        Line::from(Span::styled(
            app.status_message.clone(),
            Style::default().fg(palette.error),
        ))
    } else {
        hint_line(screen_hints(app), palette)
    };

    f.render_widget(Paragraph::new(line), area);
}

fn screen_hints(app: &App) -> &'static [(&'static str, &'static str)] {
    if app.interpreter.modal().is_open() {
        return &[("Esc", "закрыть"), ("f", "избранное"), ("Enter", "страница авто")];
    }
    match app.screen {
        AppScreen::Home if app.home.editing_search => &[("Enter", "найти"), ("Esc", "отмена")],
        AppScreen::Home => &[
            ("←/→", "слайды"),
            ("Space", "пауза"),
            ("/", "поиск"),
            ("c", "тип"),
            ("Enter", "быстрый просмотр"),
            ("o", "открыть"),
            ("f", "избранное"),
        ],
        AppScreen::Catalog if app.catalog.editing.is_some() => {
            &[("Enter/Esc", "готово"), ("Backspace", "стереть")]
        }
        AppScreen::Catalog => &[
            ("/", "поиск"),
            ("b/c/d", "марка/тип/привод"),
            ("s", "сортировка"),
            ("m/M", "цена от/до"),
            ("v", "только избранное"),
            ("r", "сброс"),
            ("f", "избранное"),
        ],
        AppScreen::Favorites => &[
            ("Enter", "быстрый просмотр"),
            ("o", "открыть"),
            ("f", "убрать"),
            ("x", "очистить"),
        ],
        AppScreen::Detail => &[
            ("←/→", "фото"),
            ("↑/↓", "похожие"),
            ("p", "быстрое окно"),
            ("f", "избранное"),
            ("Esc", "назад"),
        ],
        AppScreen::Services => &[("↑/↓", "поле"), ("←/→", "выбор"), ("Space", "отметить"), ("Enter", "рассчитать")],
        AppScreen::Contacts => &[("↑/↓", "поле"), ("Space", "согласие"), ("Enter", "отправить"), ("Tab", "раздел")],
    }
}

fn hint_line(hints: &[(&'static str, &'static str)], palette: Palette) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(*key, palette.key()));
        spans.push(Span::styled(format!(": {action}   "), palette.muted()));
    }
    Line::from(spans)
}

pub fn render_help(app: &App, f: &mut Frame<'_>) {
    let palette = Palette::for_theme(app.theme);
    let area = centered_rect(60, 60, f.area());

    let rows = [
        ("Tab / Shift+Tab", "следующий / предыдущий раздел"),
        ("1-5", "перейти в раздел"),
        ("↑ ↓ PgUp PgDn", "перемещение по списку"),
        ("Enter", "быстрый просмотр"),
        ("o", "страница автомобиля"),
        ("f", "добавить / убрать из избранного"),
        ("t", "сменить тему"),
        ("q", "выход"),
        ("F1 / Esc", "закрыть помощь"),
    ];
    let lines: Vec<Line<'_>> = rows
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{key:<16}"), palette.key()),
                Span::raw(*action),
            ])
        })
        .collect();

    let help = Paragraph::new(lines)
        .style(palette.base())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Помощь ")
                .title_style(palette.heading())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        );
    f.render_widget(Clear, area);
    f.render_widget(help, area);
}
