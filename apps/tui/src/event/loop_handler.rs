use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::fmt::Write as _;
use std::io::Stdout;
use std::time::Duration;

use crate::app::{handle_input, App};
use crate::cli::CliArgs;
use crate::ui;
use autodrive_core::{format, Selection, SortMode};

/// Selection described by the headless listing flags.
pub fn headless_selection(args: &CliArgs) -> Selection {
    let mut selection = Selection::from_entry(args.search.as_deref(), args.category.as_deref());
    if let Some(sort) = &args.sort {
        selection.sort = SortMode::parse(sort);
    }
    selection.favorites_only = args.favorites_only;
    selection
}

/// Run the application in headless mode (no UI)
pub fn run_headless(app: &App, selection: &Selection, json: bool) -> Result<()> {
    let listing = build_listing(app, selection);

    if json {
        let json = serde_json::to_string_pretty(&listing)?;
        println!("{json}");
    } else {
        print!("{}", render_listing(&listing));
    }

    Ok(())
}

pub fn build_listing(app: &App, selection: &Selection) -> HeadlessListing {
    let favorites = app.favorites.list();
    let view = autodrive_core::catalog::apply(app.dataset.vehicles(), selection, &favorites);

    HeadlessListing {
        total: app.dataset.len(),
        count: view.count(),
        sort: selection.sort.as_str().to_string(),
        favorites: favorites.len(),
        vehicles: view
            .items
            .iter()
            .map(|vehicle| HeadlessVehicle {
                id: vehicle.id.clone(),
                title: vehicle.title.clone(),
                category: vehicle.category.as_str().to_string(),
                year: vehicle.year,
                drive: vehicle.drive.clone(),
                price: vehicle.price,
                rating: vehicle.rating,
                favorite: favorites.contains(&vehicle.id),
            })
            .collect(),
    }
}

fn render_listing(listing: &HeadlessListing) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nAutoDrive catalogue");
    let _ = writeln!(out, "===================");
    let _ = writeln!(out, "Shown: {} of {}", listing.count, listing.total);
    let _ = writeln!(out, "Favorites: {}", listing.favorites);

    if listing.vehicles.is_empty() {
        let _ = writeln!(out, "\nNothing matches the filters.");
        return out;
    }

    let _ = writeln!(out);
    for vehicle in &listing.vehicles {
        let _ = writeln!(
            out,
            "- {}{} | {} | {} | {} | {}",
            if vehicle.favorite { "♥ " } else { "" },
            vehicle.title,
            vehicle.year,
            vehicle.category,
            format::price(vehicle.price),
            vehicle.id
        );
    }
    out
}

#[derive(Debug, serde::Serialize)]
pub struct HeadlessListing {
    pub total: usize,
    pub count: usize,
    pub sort: String,
    pub favorites: usize,
    pub vehicles: Vec<HeadlessVehicle>,
}

#[derive(Debug, serde::Serialize)]
pub struct HeadlessVehicle {
    pub id: String,
    pub title: String,
    pub category: String,
    pub year: u16,
    pub drive: String,
    pub price: u64,
    pub rating: f64,
    pub favorite: bool,
}

/// Run the main application event loop
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    while app.running {
        // Expire toasts, advance the slideshow
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                    handle_input(app, key.code);
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(_) | Err(_) => {
                    // Ignore non-key events
                }
            }
        }
    }
    Ok(())
}
