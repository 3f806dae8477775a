// UI module for autodrive_tui
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::state::AppScreen;
use crate::app::App;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::Block;
use ratatui::Frame;
use widgets::palette::Palette;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let palette = Palette::for_theme(app.theme);
    f.render_widget(Block::default().style(palette.base()), f.area());

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navigation
            Constraint::Min(5),    // Screen
            Constraint::Length(1), // Status line
        ])
        .split(f.area());

    widgets::chrome::render_nav(app, f, layout[0]);
    match app.screen {
        AppScreen::Home => screens::home::render_home(app, f, layout[1]),
        AppScreen::Catalog => screens::catalog::render_catalog(app, f, layout[1]),
        AppScreen::Favorites => screens::favorites::render_favorites(app, f, layout[1]),
        AppScreen::Detail => screens::detail::render_detail(app, f, layout[1]),
        AppScreen::Services => screens::services::render_services(app, f, layout[1]),
        AppScreen::Contacts => screens::contacts::render_contacts(app, f, layout[1]),
    }
    widgets::chrome::render_status(app, f, layout[2]);

    if let Some(vehicle) = app.popup_vehicle() {
        screens::quick_view::render_quick_view(app, vehicle, f);
    }
    if app.show_help {
        widgets::chrome::render_help(app, f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autodrive_core::{Dataset, MemoryStore};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::rc::Rc;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(app, f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app() -> App {
        App::new(Dataset::bundled(), Rc::new(MemoryStore::new()))
    }

    #[test]
    fn every_screen_renders() {
        let mut app = app();
        for screen in AppScreen::NAV {
            app.go_to(screen);
            let text = screen_text(&app);
            assert!(text.contains("AutoDrive"), "{screen:?}");
        }
        app.open_detail("kia-rio-2021");
        assert!(screen_text(&app).contains("Похожие"));
    }

    #[test]
    fn home_lists_only_the_top_three() {
        let app = app();
        let dataset = Dataset::bundled();
        let ranked = dataset.top_rated(4);
        let text = screen_text(&app);

        assert!(text.contains(&ranked[0].title));
        assert!(!text.contains(&ranked[3].title));
    }

    #[test]
    fn empty_catalog_says_so() {
        let mut app = App::new(Dataset::default(), Rc::new(MemoryStore::new()));
        app.go_to(AppScreen::Catalog);
        assert!(screen_text(&app).contains("Найдено: 0"));
    }

    #[test]
    fn quick_view_overlays_the_screen() {
        let mut app = app();
        app.open_popup("kia-rio-2021");
        assert!(screen_text(&app).contains("Быстрый просмотр"));
    }

    #[test]
    fn missing_vehicle_page() {
        let mut app = app();
        app.open_detail("nope");
        assert!(screen_text(&app).contains("Автомобиль не найден."));
    }
}
