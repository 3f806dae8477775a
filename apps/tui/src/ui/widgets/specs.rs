//! Label/value pairs shown for a vehicle, in the same order as the site's
//! quick view and detail page.

use crate::ui::widgets::palette::Palette;
use autodrive_core::{format, Vehicle};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

pub fn quick_view_specs(vehicle: &Vehicle) -> Vec<(&'static str, String)> {
    vec![
        ("Год", vehicle.year.to_string()),
        ("Кузов", vehicle.category.label().to_string()),
        ("Двигатель", vehicle.engine.clone()),
        ("КПП", vehicle.transmission.clone()),
        ("Привод", vehicle.drive.clone()),
        ("Пробег", format::mileage(vehicle.mileage)),
    ]
}

pub fn detail_specs(vehicle: &Vehicle) -> Vec<(&'static str, String)> {
    vec![
        ("Год", vehicle.year.to_string()),
        ("Пробег", format::mileage(vehicle.mileage)),
        ("Двигатель", vehicle.engine.clone()),
        ("Мощность", format::power(vehicle.power)),
        ("КПП", vehicle.transmission.clone()),
        ("Привод", vehicle.drive.clone()),
        ("Топливо", vehicle.fuel.clone()),
        ("Цвет", vehicle.color.clone()),
    ]
}

pub fn spec_lines(specs: Vec<(&'static str, String)>, palette: Palette) -> Vec<Line<'static>> {
    specs
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label:<10}"), palette.muted()),
                Span::raw(value),
            ])
        })
        .collect()
}

pub fn feature_lines(vehicle: &Vehicle, palette: Palette) -> Vec<Line<'static>> {
    vehicle
        .features
        .iter()
        .map(|feature| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(palette.accent)),
                Span::raw(feature.clone()),
            ])
        })
        .collect()
}
