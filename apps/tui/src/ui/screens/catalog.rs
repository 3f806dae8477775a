use crate::app::state::CatalogField;
use crate::app::App;
use crate::ui::widgets::palette::Palette;
use crate::ui::widgets::tables::vehicle_table;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_catalog(app: &App, f: &mut Frame<'_>, area: Rect) {
    let palette = Palette::for_theme(app.theme);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(5)])
        .split(area);

    render_filters(app, f, chunks[0], palette);

    let view = app.catalog_view();
    if view.is_empty() {
        let empty = Paragraph::new("Ничего не найдено. Измените параметры фильтра.")
            .alignment(Alignment::Center)
            .style(palette.muted())
            .block(Block::default().title(" Найдено: 0 ").borders(Borders::ALL));
        f.render_widget(empty, chunks[1]);
        return;
    }

    let table = vehicle_table(
        &view.items,
        &app.favorites.list(),
        app.catalog.selected,
        chunks[1].height.saturating_sub(3) as usize,
        format!(" Найдено: {} ", view.count()),
        palette,
    );
    f.render_widget(table, chunks[1]);
}

fn render_filters(app: &App, f: &mut Frame<'_>, area: Rect, palette: Palette) {
    let catalog = &app.catalog;
    let selection = &catalog.selection;
    let editing = catalog.editing;

    let field = |label: &'static str, value: String, target: CatalogField| {
        let active = editing == Some(target);
        let value = if active { format!("{value}▏") } else { value };
        let style = if active {
            palette.selected()
        } else {
            Style::default().fg(palette.text)
        };
        [
            Span::styled(label, palette.muted()),
            Span::styled(value, style),
            Span::raw("  "),
        ]
    };
    let choice = |label: &'static str, value: String| {
        [
            Span::styled(label, palette.muted()),
            Span::raw(value),
            Span::raw("  "),
        ]
    };

    let mut first = Vec::new();
    first.extend(field("Поиск: ", selection.query.clone(), CatalogField::Query));
    first.extend(choice(
        "Марка: ",
        selection
            .brand
            .clone()
            .unwrap_or_else(|| "Все бренды".to_string()),
    ));
    first.extend(choice(
        "Тип: ",
        selection
            .category
            .map_or("Все типы", |category| category.label())
            .to_string(),
    ));
    first.extend(choice(
        "Привод: ",
        selection.drive.clone().unwrap_or_else(|| "Любой".to_string()),
    ));

    let mut second = Vec::new();
    second.extend(choice("Сортировка: ", selection.sort.label().to_string()));
    second.extend(field("Цена от: ", catalog.min_input.clone(), CatalogField::MinPrice));
    second.extend(field("до: ", catalog.max_input.clone(), CatalogField::MaxPrice));
    second.extend(choice(
        "Только избранное: ",
        if selection.favorites_only { "да" } else { "нет" }.to_string(),
    ));

    let paragraph = Paragraph::new(vec![Line::from(first), Line::from(second)]).block(
        Block::default()
            .title(" Фильтры ")
            .title_style(palette.heading())
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}
