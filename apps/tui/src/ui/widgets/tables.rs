use crate::ui::widgets::palette::Palette;
use autodrive_core::{format, render, Vehicle};
use ratatui::layout::Constraint;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows {
        return 0;
    }

    if selected_index >= max_visible_rows {
        return selected_index.saturating_sub(max_visible_rows) + 1;
    }

    0
}

/// Vehicle list with a favorite marker column, scrolled so the selected row
/// stays visible.
pub fn vehicle_table<'a>(
    vehicles: &[&'a Vehicle],
    favorites: &[String],
    selected: usize,
    max_visible_rows: usize,
    title: String,
    palette: Palette,
) -> Table<'a> {
    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("Автомобиль"),
        Cell::from("Год"),
        Cell::from("Кузов"),
        Cell::from("Привод"),
        Cell::from("Пробег"),
        Cell::from("Цена"),
        Cell::from("★"),
    ])
    .style(palette.heading());

    let offset = scroll_offset(vehicles.len(), max_visible_rows, selected);
    let rows = vehicles
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(i, vehicle)| {
            let style = if i == selected {
                palette.selected()
            } else {
                Style::default().fg(palette.text)
            };
            let favorite = favorites.contains(&vehicle.id);
            Row::new(vec![
                Cell::from(render::favorite_icon(favorite)),
                Cell::from(format!("{} {}", vehicle.emoji, vehicle.title)),
                Cell::from(vehicle.year.to_string()),
                Cell::from(vehicle.category.label()),
                Cell::from(vehicle.drive.clone()),
                Cell::from(format::mileage(vehicle.mileage)),
                Cell::from(format::price(vehicle.price)),
                Cell::from(format!("{:.1}", vehicle.rating)),
            ])
            .style(style)
        });

    let widths = [
        Constraint::Length(3),
        Constraint::Min(22),
        Constraint::Length(5),
        Constraint::Length(10),
        Constraint::Length(9),
        Constraint::Length(11),
        Constraint::Length(13),
        Constraint::Length(4),
    ];

    Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL))
        .column_spacing(1)
}
