use crate::app::App;
use crate::ui::widgets::palette::Palette;
use crate::ui::widgets::popup::centered_rect;
use crate::ui::widgets::specs::{feature_lines, quick_view_specs, spec_lines};
use autodrive_core::{format, render, Vehicle};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_quick_view(app: &App, vehicle: &Vehicle, f: &mut Frame<'_>) {
    let palette = Palette::for_theme(app.theme);
    let area = centered_rect(70, 70, f.area());
    let favorite = app.favorites.contains(&vehicle.id);

    let mut lines = vec![
        Line::from(vec![
            Span::raw(format!("{}  ", vehicle.emoji)),
            Span::styled(vehicle.title.clone(), palette.heading()),
        ]),
        Line::from(vehicle.description.clone()),
        Line::from(""),
    ];
    lines.extend(spec_lines(quick_view_specs(vehicle), palette));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format::price(vehicle.price),
        Style::default()
            .fg(palette.price)
            .add_modifier(Modifier::BOLD),
    )));
    lines.extend(feature_lines(vehicle, palette));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[f] ", palette.key()),
        Span::raw(render::favorite_label(favorite)),
        Span::styled("   [Enter] ", palette.key()),
        Span::raw("Страница авто"),
        Span::styled("   [Esc] ", palette.key()),
        Span::raw("Закрыть"),
    ]));

    let popup = Paragraph::new(lines)
        .style(palette.base())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Быстрый просмотр ")
                .title_style(palette.heading())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        );
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}
