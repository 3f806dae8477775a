use crate::app::App;
use crate::ui::widgets::palette::Palette;
use crate::ui::widgets::tables::vehicle_table;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_favorites(app: &App, f: &mut Frame<'_>, area: Rect) {
    let palette = Palette::for_theme(app.theme);
    let vehicles = app.favorite_vehicles();

    if vehicles.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from("В избранном пока пусто."),
            Line::from("Отмечайте автомобили в каталоге клавишей f."),
        ])
        .alignment(Alignment::Center)
        .style(palette.muted())
        .block(Block::default().title(" Избранное ").borders(Borders::ALL));
        f.render_widget(empty, area);
        return;
    }

    let table = vehicle_table(
        &vehicles,
        &app.favorites.list(),
        app.favorites_index,
        area.height.saturating_sub(3) as usize,
        format!(" Избранное: {} ", vehicles.len()),
        palette,
    );
    f.render_widget(table, area);
}
