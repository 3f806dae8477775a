use crate::app::App;
use crate::ui::widgets::palette::Palette;
use crate::ui::widgets::tables::vehicle_table;
use autodrive_core::{format, pages, Vehicle};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_home(app: &App, f: &mut Frame<'_>, area: Rect) {
    let palette = Palette::for_theme(app.theme);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Slider
            Constraint::Length(3), // Hero search
            Constraint::Min(5),    // Featured
        ])
        .split(area);

    render_slide(app, f, chunks[0], palette);
    render_search(app, f, chunks[1], palette);

    let featured: Vec<&Vehicle> = app
        .home
        .featured
        .iter()
        .filter_map(|id| app.dataset.find(id))
        .collect();
    let table = vehicle_table(
        &featured,
        &app.favorites.list(),
        app.home.selected,
        chunks[2].height.saturating_sub(3) as usize,
        " Лучшие предложения ".to_string(),
        palette,
    );
    f.render_widget(table, chunks[2]);
}

fn render_slide(app: &App, f: &mut Frame<'_>, area: Rect, palette: Palette) {
    let show = &app.home.slideshow;
    let title = if app.home.paused {
        " Подборка (пауза) "
    } else {
        " Подборка "
    };
    let block = Block::default()
        .title(title)
        .title_style(palette.heading())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));

    let Some(vehicle) = app.home.slide_id().and_then(|id| app.dataset.find(id)) else {
        f.render_widget(Paragraph::new("Каталог пуст").block(block), area);
        return;
    };

    let dots: Vec<Span<'_>> = (0..show.len())
        .map(|i| {
            if i == show.current() {
                Span::styled("● ", Style::default().fg(palette.accent))
            } else {
                Span::styled("○ ", palette.muted())
            }
        })
        .collect();

    let lines = vec![
        Line::from(vec![
            Span::raw(format!("{}  ", vehicle.emoji)),
            Span::styled(
                vehicle.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vehicle.short.clone()),
        Line::from(Span::styled(
            format!(
                "{} · {} · {}",
                vehicle.category.label(),
                vehicle.engine,
                vehicle.year
            ),
            palette.muted(),
        )),
        Line::from(Span::styled(
            format::price(vehicle.price),
            Style::default()
                .fg(palette.price)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(dots),
    ];

    let paragraph = Paragraph::new(lines)
        .style(palette.base())
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(paragraph, area);
}

fn render_search(app: &App, f: &mut Frame<'_>, area: Rect, palette: Palette) {
    let category = pages::category_choices()
        .nth(app.home.search_category)
        .map_or("Все типы", |(_, label)| label);
    let cursor = if app.home.editing_search { "▏" } else { "" };
    let border = if app.home.editing_search {
        palette.accent
    } else {
        palette.muted
    };

    let line = Line::from(vec![
        Span::styled("Поиск: ", palette.muted()),
        Span::raw(format!("{}{cursor}", app.home.search)),
        Span::styled("   Тип: ", palette.muted()),
        Span::raw(category),
    ]);
    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(paragraph, area);
}
